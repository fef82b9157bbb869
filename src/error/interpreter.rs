use crate::scanner::Location;

/// Errors that can occur during interpretation
#[derive(thiserror::Error, Debug)]
pub enum InterpreterError {
	/// Host failure such as a broken output stream
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors caused by the program being run
	#[error(transparent)]
	RuntimeError(#[from] RuntimeError),
}

impl InterpreterError {
	/// The runtime error type, if this is not an internal error.
	pub fn runtime_type(&self) -> Option<&RuntimeErrorType> {
		match self {
			InterpreterError::RuntimeError(e) => Some(&e.r#type),
			InterpreterError::InternalError(_) => None,
		}
	}
}

#[derive(thiserror::Error, Debug)]
#[error("{location}: {type}")]
pub struct RuntimeError {
	pub location: Location,
	pub r#type:   RuntimeErrorType,
}

impl RuntimeError {
	pub fn new(location: Location, r#type: RuntimeErrorType) -> Self { Self { location, r#type } }
}

#[derive(Debug, PartialEq)]
pub enum RuntimeErrorType {
	UnknownVariable(String),
	UnknownFunction(String),
	/// The name is bound, but not to a single lambda.
	NotCallable(String),
	ArityMismatch { name: String, expected: usize, found: usize },
	TypeMismatch { expected: &'static str, found: &'static str },
	/// A builtin got fewer arguments than it needs.
	MissingArguments { name: &'static str, expected: usize, found: usize },
	ComparisonOperands,
	/// A callback that must produce one value produced another count.
	ExpectedSingleValue { name: &'static str, found: usize },
	BareVariable(String),
	NotAVariable(&'static str),
}

impl std::fmt::Display for RuntimeErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use RuntimeErrorType::*;
		match self {
			UnknownVariable(name) => write!(f, "unknown variable '{name}'"),
			UnknownFunction(name) => write!(f, "unknown function '{name}'"),
			NotCallable(name) => write!(f, "'{name}' is not a function"),
			ArityMismatch { name, expected, found } => {
				write!(f, "'{name}' expected {expected} arguments, got {found}")
			}
			TypeMismatch { expected, found } => write!(f, "expected value of type {expected}, got {found}"),
			MissingArguments { name, expected, found } => {
				write!(f, "'{name}' expected at least {expected} arguments, got {found}")
			}
			ComparisonOperands => write!(f, "expected at least 2 elements in comparison"),
			ExpectedSingleValue { name, found } => write!(f, "{name} must return exactly one value, got {found}"),
			BareVariable(name) => write!(f, "cannot use a variable by itself: '{name}'"),
			NotAVariable(found) => {
				write!(f, "expected variable, got {found}; cannot assign to something else than a variable")
			}
		}
	}
}
