use std::{fmt::Display, rc::Rc};

use crate::{environment::Scope, parser::expression::Expression};

/// Value represents a runtime value. Values never change once built; only the
/// cell naming a value can be rewritten.
#[derive(Debug, Clone)]
pub enum Value {
	Number(f64),
	Str(String),
	Boolean(bool),
	Tuple(Vec<Value>),
	Lambda(Rc<LambdaValue>),
}

/// A closure: parameter names, the scope copied at definition time, and the
/// body to evaluate.
pub struct LambdaValue {
	pub parameters: Rc<[String]>,
	pub scope:      Scope,
	pub body:       Rc<Expression>,
}

impl std::fmt::Debug for LambdaValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// The captured scope may reach this lambda again, so it is left out.
		f.debug_struct("LambdaValue").field("parameters", &self.parameters).field("body", &self.body).finish()
	}
}

impl Value {
	pub fn lambda(parameters: Rc<[String]>, scope: Scope, body: Rc<Expression>) -> Self {
		Value::Lambda(Rc::new(LambdaValue { parameters, scope, body }))
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Number(_) => "number",
			Value::Str(_) => "string",
			Value::Boolean(_) => "boolean",
			Value::Tuple(_) => "tuple",
			Value::Lambda(_) => "lambda",
		}
	}
}

/// Lambdas are equal only to themselves.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Number(l), Value::Number(r)) => l == r,
			(Value::Str(l), Value::Str(r)) => l == r,
			(Value::Boolean(l), Value::Boolean(r)) => l == r,
			(Value::Tuple(l), Value::Tuple(r)) => l == r,
			(Value::Lambda(l), Value::Lambda(r)) => Rc::ptr_eq(l, r),
			_ => false,
		}
	}
}

/// The `to_string` rendering. Strings print without quotes and infinities
/// print as `Infinity`.
impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Number(n) if n.is_infinite() => write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" }),
			Value::Number(n) => write!(f, "{n}"),
			Value::Str(s) => write!(f, "{s}"),
			Value::Boolean(b) => write!(f, "{b}"),
			Value::Lambda(lambda) => write!(f, "<lambda({})>", lambda.parameters.join(", ")),
			Value::Tuple(values) => write!(f, "({})", join(values)),
		}
	}
}

/// Render values the way `show` prints them: comma separated.
pub fn join(values: &[Value]) -> String { values.iter().map(Value::to_string).collect::<Vec<_>>().join(", ") }
