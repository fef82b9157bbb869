pub mod interpreter;
pub mod parser;
pub mod scanner;

/// PipetteError is the top-level error type for a run.
#[derive(thiserror::Error, Debug)]
pub enum PipetteError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Lexical error
	#[error("Lex error: {0}")]
	ScanError(#[from] scanner::ScanError),
	/// Syntax error
	#[error("Parse error: {0}")]
	ParseError(#[from] parser::ParseError),
	/// Errors encountered during evaluation
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] interpreter::RuntimeError),
}

impl From<scanner::ScannerError> for PipetteError {
	fn from(error: scanner::ScannerError) -> Self {
		match error {
			scanner::ScannerError::InternalError(e) => PipetteError::InternalError(e),
			scanner::ScannerError::ScanError(e) => PipetteError::ScanError(e),
		}
	}
}

impl From<interpreter::InterpreterError> for PipetteError {
	fn from(error: interpreter::InterpreterError) -> Self {
		match error {
			interpreter::InterpreterError::InternalError(e) => PipetteError::InternalError(e),
			interpreter::InterpreterError::RuntimeError(e) => PipetteError::RuntimeError(e),
		}
	}
}
