//! Tree-walking evaluator.
//!
//! Every expression evaluates to a list of values. Tuples flatten: each
//! element contributes its own list, so a pipeline stage that yields several
//! values feeds them to the next function as separate arguments. A tuple
//! nested inside a tuple stays one `tuple` value.
//!
//! - `lhs |> f` calls `f` with the values of `lhs`. A user lambda bound to `f`
//!   wins over a builtin of the same name. When the right side is not a bare
//!   name it is simply evaluated, after the left side.
//! - `lhs -> x` binds `x` to a fresh cell holding the values of `lhs`.
//! - `lhs ->> x` overwrites the existing cell of `x` in place.
//!
//! There is no branching or looping syntax; the `if` and `loop` builtins call
//! back into the interpreter with lambda values.

mod builtins;
pub mod value;

use std::{collections::HashMap, io::Write};

use anyhow::Context;
use builtins::NativeFunction;
use value::{LambdaValue, Value};

use crate::{
	environment::Scope,
	error::interpreter::{InterpreterError, RuntimeError, RuntimeErrorType},
	parser::expression::{BinaryOperator, Expression, ExpressionNode::*},
	scanner::Location,
};

/// Interpreter that evaluates expressions and owns the output stream `show`
/// writes to.
pub struct Interpreter {
	output:   Box<dyn Write>,
	builtins: HashMap<&'static str, NativeFunction>,
}

impl Default for Interpreter {
	fn default() -> Self { Self::new() }
}

impl Interpreter {
	/// An interpreter printing to stdout.
	pub fn new() -> Self { Self::with_output(Box::new(std::io::stdout())) }

	pub fn with_output(output: Box<dyn Write>) -> Self { Self { output, builtins: builtins::table() } }

	/// Evaluate the given expression and return its values.
	pub fn evaluate(&mut self, expression: &Expression, scope: &mut Scope) -> Result<Vec<Value>, InterpreterError> {
		Ok(match &expression.node {
			Number(n) => vec![Value::Number(*n)],
			Str(s) => vec![Value::Str(s.clone())],
			Boolean(b) => vec![Value::Boolean(*b)],
			Variable(name) => {
				return Err(runtime(expression.location, RuntimeErrorType::BareVariable(name.clone())));
			}
			Tuple(elements) => {
				let mut values = Vec::new();
				for element in elements {
					values.extend(self.element(element, scope)?);
				}
				values
			}
			Lambda { parameters, body } => vec![Value::lambda(parameters.clone(), scope.child(), body.clone())],
			Binary { operator, left, right } => {
				let values = self.evaluate(left, scope)?;
				match operator {
					BinaryOperator::Pipeline => match &right.node {
						Variable(name) => self.call(name, right.location, values, scope)?,
						_ => self.evaluate(right, scope)?,
					},
					BinaryOperator::Assign => {
						scope.define(target(right)?, values.clone());
						values
					}
					BinaryOperator::Mutate => {
						let name = target(right)?;
						let variable = scope
							.get(name)
							.ok_or_else(|| runtime(right.location, RuntimeErrorType::UnknownVariable(name.to_string())))?;
						variable.replace(values.clone());
						values
					}
				}
			}
		})
	}

	/// Evaluate one element of a tuple. Names are looked up here, and a nested
	/// tuple is kept as a single value.
	fn element(&mut self, expression: &Expression, scope: &mut Scope) -> Result<Vec<Value>, InterpreterError> {
		match &expression.node {
			Variable(name) => scope
				.get(name)
				.map(|variable| variable.values())
				.ok_or_else(|| runtime(expression.location, RuntimeErrorType::UnknownVariable(name.clone()))),
			Tuple(_) => Ok(vec![Value::Tuple(self.evaluate(expression, scope)?)]),
			_ => self.evaluate(expression, scope),
		}
	}

	/// Call the function named `name`: a lambda bound in `scope`, else a
	/// builtin.
	pub fn call(
		&mut self,
		name: &str,
		location: Location,
		arguments: Vec<Value>,
		scope: &Scope,
	) -> Result<Vec<Value>, InterpreterError> {
		if let Some(variable) = scope.get(name) {
			let lambda = match variable.values().as_slice() {
				[Value::Lambda(lambda)] => lambda.clone(),
				_ => return Err(runtime(location, RuntimeErrorType::NotCallable(name.to_string()))),
			};
			return self.call_lambda(name, &lambda, arguments, location);
		}

		match self.builtins.get(name).copied() {
			Some(function) => function(self, location, arguments),
			None => Err(runtime(location, RuntimeErrorType::UnknownFunction(name.to_string()))),
		}
	}

	/// Run the body of `lambda` in a child of its captured scope, each
	/// parameter bound to a fresh cell holding its argument.
	pub fn call_lambda(
		&mut self,
		name: &str,
		lambda: &LambdaValue,
		arguments: Vec<Value>,
		location: Location,
	) -> Result<Vec<Value>, InterpreterError> {
		if lambda.parameters.len() != arguments.len() {
			let r#type = RuntimeErrorType::ArityMismatch {
				name:     name.to_string(),
				expected: lambda.parameters.len(),
				found:    arguments.len(),
			};
			return Err(runtime(location, r#type));
		}

		let mut scope = lambda.scope.child();
		for (parameter, argument) in lambda.parameters.iter().zip(arguments) {
			scope.define(parameter, vec![argument]);
		}
		self.evaluate(&lambda.body, &mut scope)
	}

	/// Write one line to the output stream.
	fn write_line(&mut self, line: &str) -> Result<(), InterpreterError> {
		writeln!(self.output, "{line}").context("Failed write output")?;
		self.output.flush().context("Failed flush output")?;
		Ok(())
	}
}

/// The name on the right of `->` or `->>`.
fn target(expression: &Expression) -> Result<&str, InterpreterError> {
	match &expression.node {
		Variable(name) => Ok(name),
		_ => Err(runtime(expression.location, RuntimeErrorType::NotAVariable(expression.tag()))),
	}
}

fn runtime(location: Location, r#type: RuntimeErrorType) -> InterpreterError {
	RuntimeError::new(location, r#type).into()
}
