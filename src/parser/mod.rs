//! Recursive-descent parser.
//!
//! The `Scanner` uses the lexical grammar, whose alphabet is characters. The
//! `Parser` uses the syntactic grammar, whose alphabet is tokens.
//!
//! ``` EBNF
//! program  := expr EOF
//! expr     := value { ( "|>" value | ( "->" | "->>" ) variable ) }
//! value    := lambda | tuple | variable | NUMBER | STRING | BOOLEAN
//! tuple    := "(" [ expr { "," expr } ] ")"
//! lambda   := "(" [ variable { "," variable } ] ")" "=>" expr
//! variable := IDENTIFIER
//! ```
//!
//! A `(` starts a lambda exactly when the token after its matching `)` is
//! `=>`. The three binary operators have no precedence among each other and
//! fold to the left.

pub mod expression;

use TokenType::*;
use expression::{BinaryOperator, Expression};

use crate::{error::parser::{ParseError, ParseErrorType}, scanner::{TokenStream, TokenType}};

pub struct Parser {
	/// The tokens to parse.
	tokens: TokenStream,
}

impl Parser {
	pub fn new(tokens: TokenStream) -> Self { Self { tokens } }

	/// Parse a whole program, which is a single expression.
	pub fn parse(mut self) -> Result<Expression, ParseError> {
		let expression = self.expression()?;
		if let Some(token) = self.tokens.peek_nth(1) {
			return Err(ParseError::new(token.location, ParseErrorType::TrailingToken(token.r#type.name())));
		}
		Ok(expression)
	}

	/// Parse a chain of binary operators, folding to the left.
	fn expression(&mut self) -> Result<Expression, ParseError> {
		let mut expression = self.value()?;
		while let Some(token) = self.tokens.peek_nth(1) {
			let operator = match &token.r#type {
				Pipeline => BinaryOperator::Pipeline,
				Assign => BinaryOperator::Assign,
				Mutate => BinaryOperator::Mutate,
				RightParen | Comma => break,
				other => {
					return Err(ParseError::new(token.location, ParseErrorType::InvalidExpression(other.name())));
				}
			};
			let location = self.tokens.advance()?.location;
			let right = match operator {
				BinaryOperator::Pipeline => self.value()?,
				BinaryOperator::Assign | BinaryOperator::Mutate => self.variable()?,
			};
			expression = Expression::binary(location, operator, expression, right);
		}
		Ok(expression)
	}

	/// Parse anything that can stand on either side of `|>`.
	fn value(&mut self) -> Result<Expression, ParseError> {
		if self.tokens.peek()?.r#type != LeftParen {
			return self.tokens.advance()?.try_into();
		}
		if self.is_lambda() { self.lambda() } else { self.tuple() }
	}

	fn variable(&mut self) -> Result<Expression, ParseError> {
		self.tokens.expect(Identifier(String::new()))?.try_into()
	}

	fn identifier(&mut self) -> Result<String, ParseError> {
		let token = self.tokens.expect(Identifier(String::new()))?;
		match token.r#type {
			Identifier(name) => Ok(name),
			other => {
				let r#type = ParseErrorType::UnexpectedToken { expected: "identifier", found: other.name() };
				Err(ParseError::new(token.location, r#type))
			}
		}
	}

	/// Look past the parenthesised group starting at the next token and check
	/// whether `=>` follows it.
	fn is_lambda(&self) -> bool {
		let mut depth = 0usize;
		let mut n = 1;
		while let Some(token) = self.tokens.peek_nth(n) {
			n += 1;
			match token.r#type {
				LeftParen => depth += 1,
				RightParen => {
					depth = depth.saturating_sub(1);
					if depth == 0 {
						return self.tokens.peek_nth(n).is_some_and(|t| t.r#type == Arrow);
					}
				}
				_ => {}
			}
		}
		false
	}

	fn tuple(&mut self) -> Result<Expression, ParseError> {
		let location = self.tokens.expect(LeftParen)?.location;
		let mut elements = Vec::new();
		if self.tokens.peek()?.r#type != RightParen {
			elements.push(self.expression()?);
			while self.tokens.peek()?.r#type == Comma {
				self.tokens.advance()?;
				elements.push(self.expression()?);
			}
		}
		self.tokens.expect(RightParen)?;
		Ok(Expression::tuple(location, elements))
	}

	fn lambda(&mut self) -> Result<Expression, ParseError> {
		let location = self.tokens.expect(LeftParen)?.location;
		let mut parameters = Vec::new();
		if self.tokens.peek()?.r#type != RightParen {
			parameters.push(self.identifier()?);
			while self.tokens.peek()?.r#type == Comma {
				self.tokens.advance()?;
				parameters.push(self.identifier()?);
			}
		}
		self.tokens.expect(RightParen)?;
		self.tokens.expect(Arrow)?;
		let body = self.expression()?;
		Ok(Expression::lambda(location, parameters, body))
	}
}

#[cfg(test)]
mod tests {
	use super::{expression::ExpressionNode, *};
	use crate::scanner::{Location, Scanner};

	fn ast(input: &str) -> Result<Expression, ParseError> {
		let tokens = Scanner::new(input).scan_tokens().unwrap();
		Parser::new(tokens).parse()
	}

	fn parse(input: &str, equals: &str) { assert_eq!(ast(input).unwrap().to_string(), equals); }

	fn error(input: &str) -> ParseErrorType { ast(input).unwrap_err().r#type }

	#[test]
	fn parse_literals() {
		parse("42", "42");
		parse("3.14", "3.14");
		parse("\"hello\"", "\"hello\"");
		parse("true", "true");
		parse("false", "false");
		parse("x", "x");
	}

	#[test]
	fn parse_tuples() {
		parse("()", "(tuple)");
		parse("(x)", "(tuple x)");
		parse("(1, 2, 3)", "(tuple 1 2 3)");
		parse("((1, 2), 3)", "(tuple (tuple 1 2) 3)");
	}

	#[test]
	fn parse_lambdas() {
		parse("(x) => x", "(lambda (x) x)");
		parse("() => (1)", "(lambda () (tuple 1))");
		parse("(a, b) => (a, b) |> +", "(lambda (a b) (|> (tuple a b) +))");
		parse("((a) => a, 1)", "(tuple (lambda (a) a) 1)");
	}

	#[test]
	fn parse_lambda_disambiguation() {
		assert!(matches!(ast("(x) => x").unwrap().node, ExpressionNode::Lambda { .. }));
		assert!(matches!(ast("(x)").unwrap().node, ExpressionNode::Tuple(_)));
		// a nested group in the parameter position is still scanned past
		assert!(matches!(ast("((x)) |> f").unwrap().node, ExpressionNode::Binary { .. }));
	}

	#[test]
	fn parse_left_fold() {
		parse("(1, 2) |> + |> show", "(|> (|> (tuple 1 2) +) show)");
		parse("(1) -> x |> show", "(|> (-> (tuple 1) x) show)");
		parse("(1) -> x ->> y", "(->> (-> (tuple 1) x) y)");
	}

	#[test]
	fn parse_pipeline_into_values() {
		parse("(0) -> i |> (() => i)", "(|> (-> (tuple 0) i) (tuple (lambda () i)))");
		parse("(0) -> i |> () => i", "(|> (-> (tuple 0) i) (lambda () i))");
		parse("(1) |> (2, 3)", "(|> (tuple 1) (tuple 2 3))");
		parse("(1) |> 5", "(|> (tuple 1) 5)");
	}

	#[test]
	fn parse_assign_requires_variable() {
		assert_eq!(error("(1) -> (x)"), ParseErrorType::UnexpectedToken { expected: "identifier", found: "lparen" });
		assert_eq!(error("(1) ->> 2"), ParseErrorType::UnexpectedToken { expected: "identifier", found: "number" });
	}

	#[test]
	fn parse_errors() {
		assert_eq!(error(""), ParseErrorType::UnexpectedEof);
		assert_eq!(error("(1, 2"), ParseErrorType::UnexpectedEof);
		assert_eq!(error("(1) 2"), ParseErrorType::InvalidExpression("number"));
		assert_eq!(error("(1))"), ParseErrorType::TrailingToken("rparen"));
		assert_eq!(error("_"), ParseErrorType::ExpectedValue("shorthand"));
		assert_eq!(error("x =>"), ParseErrorType::InvalidExpression("arrow"));
		assert_eq!(error("(x) =>"), ParseErrorType::UnexpectedEof);
		assert_eq!(error("(1) => x"), ParseErrorType::UnexpectedToken { expected: "identifier", found: "number" });
	}

	#[test]
	fn parse_locations() {
		let expression = ast("(1, 2)\n  |> +").unwrap();
		assert_eq!(expression.location, Location::new(2, 3));
		match expression.node {
			ExpressionNode::Binary { left, right, .. } => {
				assert_eq!(left.location, Location::new(1, 1));
				assert_eq!(right.location, Location::new(2, 6));
			}
			other => panic!("expected a binary node, got {other:?}"),
		}
	}

	#[test]
	fn parse_tree() {
		let tree = ast("(1) -> x").unwrap().tree();
		let plain = tree.replace("\x1b[90m", "").replace("\x1b[0m", "");
		assert_eq!(plain, "1:5:assign:\n├ 1:1:tuple:\n│ ╰ 1:2:number: 1\n╰ 1:8:variable: x");
	}
}
