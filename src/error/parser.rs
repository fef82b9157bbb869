use crate::scanner::Location;

#[derive(thiserror::Error, Debug)]
#[error("{location}: {type}")]
pub struct ParseError {
	pub location: Location,
	pub r#type:   ParseErrorType,
}

impl ParseError {
	pub fn new(location: Location, r#type: ParseErrorType) -> Self { Self { location, r#type } }
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorType {
	/// `expect` saw a different token than the grammar requires.
	UnexpectedToken { expected: &'static str, found: &'static str },
	/// The token stream ended while the grammar needed more.
	UnexpectedEof,
	/// A value was required but the token cannot start one.
	ExpectedValue(&'static str),
	/// A token where a binary operator or the end of the expression belongs.
	InvalidExpression(&'static str),
	/// Tokens left over after the program expression.
	TrailingToken(&'static str),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { expected, found } => write!(f, "expected token {expected}, got {found}"),
			UnexpectedEof => write!(f, "finished token stream when expected more"),
			ExpectedValue(found) => write!(f, "expected a value, got {found}"),
			InvalidExpression(found) => write!(f, "invalid expression: unexpected {found}"),
			TrailingToken(found) => write!(f, "unexpected token {found} after expression"),
		}
	}
}
