//! # Pipette
//!
//! A small pipeline-oriented expression language. A program is one
//! expression; values flow left to right through `|>` stages:
//!
//! ``` text
//! (3.1415926535) -> pi |>
//! ((radius) => ((radius, radius) |> *, pi) |> *) -> area |>
//! (2) |> area |> show
//! ```
//!
//! ## Scanning
//!
//! The scanner turns characters into located tokens. Only parens, commas, `_`
//! and the operators `=>`, `|>`, `->`, `->>` are punctuation; any other run of
//! non-whitespace is an identifier, a number or a boolean. So `+` and `<=` are
//! just names of builtin functions.
//!
//! ## Parsing
//!
//! A recursive-descent parser builds the expression tree. The binary operators
//! share one precedence level and fold to the left:
//!
//! ``` markdown
//! pipeline (|>)
//! ├── assign (->)
//! │   ├── tuple
//! │   │   └── 3.1415926535
//! │   └── pi
//! └── show
//! ```
//!
//! ## Evaluation
//!
//! The tree-walking interpreter evaluates every expression to a list of
//! values. Tuples flatten into that list, which is how one stage's results
//! become the next function's arguments. Lambdas copy the scope they are
//! defined in, but the copied bindings still share their cells, so `->>`
//! mutations are visible to closures while `->` rebinding is not.
//!
//! There are no statements, no `if` and no `while`: the `if` and `loop`
//! builtins take lambdas and call back into the interpreter.

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod parser;
mod pipette;
mod scanner;

pub use environment::{Scope, Variable};
pub use error::{
	PipetteError,
	interpreter::{InterpreterError, RuntimeError, RuntimeErrorType},
	parser::{ParseError, ParseErrorType},
	scanner::{ScanError, ScanErrorType, ScannerError},
};
pub use interpreter::{
	Interpreter,
	value::{LambdaValue, Value},
};
pub use parser::{
	Parser,
	expression::{BinaryOperator, Expression, ExpressionNode},
};
pub use pipette::{Pipette, parse, tokenize};
pub use scanner::{Location, Scanner, Token, TokenStream, TokenType};
