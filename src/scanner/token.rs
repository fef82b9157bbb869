use std::fmt::Display;

use crate::error::parser::{ParseError, ParseErrorType};

/// A position in the source text. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
	pub line:   usize,
	pub column: usize,
}

impl Location {
	pub fn new(line: usize, column: usize) -> Self { Self { line, column } }
}

impl Default for Location {
	fn default() -> Self { Self::new(1, 1) }
}

impl Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}:{}", self.line, self.column) }
}

/// A token produced by the scanner, located at its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub r#type:   TokenType,
	pub location: Location,
}

impl Token {
	pub fn new(r#type: TokenType, location: Location) -> Self { Self { r#type, location } }
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenType::*;
		write!(f, "{}:{}", self.location, self.r#type.name())?;
		match &self.r#type {
			Identifier(name) => write!(f, ": {name}"),
			NumberLiteral(n) => write!(f, ": {n}"),
			StringLiteral(s) => write!(f, ": {s:?}"),
			BooleanLiteral(b) => write!(f, ": {b}"),
			_ => Ok(()),
		}
	}
}

/// The different types of tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Comma `,`.
	Comma,
	/// Shorthand `_`, reserved.
	Shorthand,
	/// Lambda arrow `=>`.
	Arrow,
	/// Pipeline `|>`.
	Pipeline,
	/// Assignment `->`.
	Assign,
	/// Mutation `->>`.
	Mutate,
	/// Identifier, e.g. variable or function name. Operators such as `+` or
	/// `<=` are identifiers too.
	Identifier(String),
	/// Number literal, e.g. `123.45`.
	NumberLiteral(f64),
	/// String literal with escapes already resolved.
	StringLiteral(String),
	/// `true` or `false`.
	BooleanLiteral(bool),
}

impl TokenType {
	/// Short tag name used by the token presenter and in error messages.
	pub fn name(&self) -> &'static str {
		use TokenType::*;
		match self {
			LeftParen => "lparen",
			RightParen => "rparen",
			Comma => "comma",
			Shorthand => "shorthand",
			Arrow => "arrow",
			Pipeline => "pipeline",
			Assign => "assign",
			Mutate => "mutate",
			Identifier(_) => "identifier",
			NumberLiteral(_) => "number",
			StringLiteral(_) => "string",
			BooleanLiteral(_) => "boolean",
		}
	}

	/// Whether both types have the same tag, ignoring any payload.
	pub fn same_tag(&self, other: &Self) -> bool { std::mem::discriminant(self) == std::mem::discriminant(other) }
}

/// The scanned tokens, consumed front to back by the parser with arbitrary
/// lookahead.
#[derive(Debug, Clone)]
pub struct TokenStream {
	tokens: Vec<Token>,
	cursor: usize,
	/// Location just past the last character of the source.
	end:    Location,
}

impl TokenStream {
	pub fn new(tokens: Vec<Token>, end: Location) -> Self { Self { tokens, cursor: 0, end } }

	/// Look `n` tokens ahead, `n = 1` being the next token.
	pub fn peek_nth(&self, n: usize) -> Option<&Token> { self.tokens.get(self.cursor + n.checked_sub(1)?) }

	/// Peek at the next token, failing at the end of the stream.
	pub fn peek(&self) -> Result<&Token, ParseError> {
		self.peek_nth(1).ok_or_else(|| ParseError::new(self.end, ParseErrorType::UnexpectedEof))
	}

	/// Consume the next token, failing at the end of the stream.
	pub fn advance(&mut self) -> Result<Token, ParseError> {
		let token = self.tokens.get(self.cursor).cloned();
		let token = token.ok_or_else(|| ParseError::new(self.end, ParseErrorType::UnexpectedEof))?;
		self.cursor += 1;
		Ok(token)
	}

	/// Consume the next token if it has the same tag as `expected`.
	pub fn expect(&mut self, expected: TokenType) -> Result<Token, ParseError> {
		let token = self.peek()?;
		if !token.r#type.same_tag(&expected) {
			let r#type = ParseErrorType::UnexpectedToken { expected: expected.name(), found: token.r#type.name() };
			return Err(ParseError::new(token.location, r#type));
		}
		self.advance()
	}

	pub fn is_empty(&self) -> bool { self.cursor >= self.tokens.len() }

	/// Location of the end of the source.
	pub fn end(&self) -> Location { self.end }

	/// Iterate over the tokens not consumed yet.
	pub fn remaining(&self) -> impl Iterator<Item = &Token> { self.tokens[self.cursor..].iter() }
}
