//! Expression AST nodes
//!
//! Every node remembers the location of the token that introduced it: the
//! operator for binary nodes, the opening paren for tuples and lambdas, and
//! the token itself for literals and variables.

use std::{fmt::Display, rc::Rc};

use ExpressionNode::*;

use crate::{error::parser::{ParseError, ParseErrorType}, scanner::{Location, Token, TokenType}};

/// A located AST node
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
	pub location: Location,
	pub node:     ExpressionNode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
	Number(f64),
	Str(String),
	Boolean(bool),
	Variable(String),
	Tuple(Vec<Expression>),
	Lambda { parameters: Rc<[String]>, body: Rc<Expression> },
	Binary { operator: BinaryOperator, left: Box<Expression>, right: Box<Expression> },
}

/// The three binary operators. They share one precedence level and fold to the
/// left in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
	/// `|>`
	Pipeline,
	/// `->`
	Assign,
	/// `->>`
	Mutate,
}

impl BinaryOperator {
	pub fn symbol(&self) -> &'static str {
		match self {
			BinaryOperator::Pipeline => "|>",
			BinaryOperator::Assign => "->",
			BinaryOperator::Mutate => "->>",
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			BinaryOperator::Pipeline => "pipeline",
			BinaryOperator::Assign => "assign",
			BinaryOperator::Mutate => "mutate",
		}
	}
}

impl Expression {
	pub fn new(location: Location, node: ExpressionNode) -> Self { Self { location, node } }

	pub fn tuple(location: Location, elements: Vec<Self>) -> Self { Self::new(location, Tuple(elements)) }

	pub fn lambda(location: Location, parameters: Vec<String>, body: Self) -> Self {
		Self::new(location, Lambda { parameters: parameters.into(), body: Rc::new(body) })
	}

	pub fn binary(location: Location, operator: BinaryOperator, left: Self, right: Self) -> Self {
		Self::new(location, Binary { operator, left: Box::new(left), right: Box::new(right) })
	}

	/// Tag name of the node, as used in diagnostics.
	pub fn tag(&self) -> &'static str {
		match &self.node {
			Number(_) => "number",
			Str(_) => "string",
			Boolean(_) => "boolean",
			Variable(_) => "variable",
			Tuple(_) => "tuple",
			Lambda { .. } => "lambda",
			Binary { .. } => "binary",
		}
	}

	/// Render the expression as an indented tree, one node per line, with each
	/// node header prefixed by its location.
	pub fn tree(&self) -> String { self.tree_lines().join("\n") }

	fn tree_lines(&self) -> Vec<String> {
		let (header, children): (String, Vec<&Expression>) = match &self.node {
			Number(n) => (format!("number: {n}"), vec![]),
			Str(s) => (format!("string: {s:?}"), vec![]),
			Boolean(b) => (format!("boolean: {b}"), vec![]),
			Variable(name) => (format!("variable: {name}"), vec![]),
			Tuple(elements) => ("tuple:".to_string(), elements.iter().collect()),
			Lambda { parameters, body } => (format!("lambda ({}):", parameters.join(", ")), vec![body.as_ref()]),
			Binary { operator, left, right } => (format!("{}:", operator.name()), vec![left.as_ref(), right.as_ref()]),
		};

		let mut lines = vec![format!("{}:{header}", self.location)];
		for (i, child) in children.iter().enumerate() {
			let last = i + 1 == children.len();
			for (j, line) in child.tree_lines().into_iter().enumerate() {
				let connector = match (last, j) {
					(false, 0) => "\x1b[90m├\x1b[0m ",
					(false, _) => "\x1b[90m│\x1b[0m ",
					(true, 0) => "\x1b[90m╰\x1b[0m ",
					(true, _) => "  ",
				};
				lines.push(format!("{connector}{line}"));
			}
		}
		lines
	}
}

impl TryFrom<Token> for Expression {
	type Error = ParseError;

	fn try_from(token: Token) -> Result<Self, Self::Error> {
		use TokenType::*;

		let node = match token.r#type {
			NumberLiteral(n) => Number(n),
			StringLiteral(s) => Str(s),
			BooleanLiteral(b) => Boolean(b),
			Identifier(name) => Variable(name),
			other => return Err(ParseError::new(token.location, ParseErrorType::ExpectedValue(other.name()))),
		};
		Ok(Self::new(token.location, node))
	}
}

impl Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.node {
			Number(n) => write!(f, "{n}"),
			Str(s) => write!(f, "{s:?}"),
			Boolean(b) => write!(f, "{b}"),
			Variable(name) => write!(f, "{name}"),
			Tuple(elements) => {
				write!(f, "(tuple")?;
				for element in elements {
					write!(f, " {element}")?;
				}
				write!(f, ")")
			}
			Lambda { parameters, body } => write!(f, "(lambda ({}) {body})", parameters.join(" ")),
			Binary { operator, left, right } => write!(f, "({} {left} {right})", operator.symbol()),
		}
	}
}
