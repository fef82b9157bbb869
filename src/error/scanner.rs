use crate::scanner::Location;

/// Scanner related errors
#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
	/// Internal compiler error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors encountered during scanning
	#[error(transparent)]
	ScanError(#[from] ScanError),
}

/// A specific scanning error with its location and type.
#[derive(thiserror::Error, Debug)]
#[error("{location}: {type}")]
pub struct ScanError {
	/// Where the offending lexeme starts.
	pub location: Location,
	/// The type of scanning error.
	pub r#type:   ScanErrorType,
}

impl ScanError {
	pub fn new(location: Location, r#type: ScanErrorType) -> Self { Self { location, r#type } }
}

/// Types of scanning errors.
#[derive(Debug, PartialEq)]
pub enum ScanErrorType {
	/// A lexeme starting with a digit that is not `digits(.digits)?`.
	DigitLeadingIdentifier(String),
	/// End of input before the closing `"`.
	UnterminatedString,
	/// End of input right after a `\` inside a string.
	UnterminatedEscape,
	/// A `\` followed by a character that is not a known escape.
	UnknownEscape(char),
	/// `\x` not followed by two hex digits.
	InvalidHexEscape(String),
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			DigitLeadingIdentifier(text) => {
				write!(f, "identifier cannot start with a digit: '{text}'")
			}
			UnterminatedString => write!(f, "Unterminated string"),
			UnterminatedEscape => write!(f, "Unterminated escape sequence"),
			UnknownEscape(c) => write!(f, "Unknown escape character '{c}'"),
			InvalidHexEscape(text) => write!(f, "Invalid hex escape '\\x{text}'"),
		}
	}
}
