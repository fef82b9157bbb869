//! The builtin functions. Each takes the argument list of a pipeline stage and
//! returns the values it produces.

use std::{collections::HashMap, rc::Rc};

use super::{
	Interpreter, runtime,
	value::{LambdaValue, Value, join},
};
use crate::{
	error::interpreter::{InterpreterError, RuntimeErrorType},
	scanner::Location,
};

pub(super) type NativeFunction = fn(&mut Interpreter, Location, Vec<Value>) -> Result<Vec<Value>, InterpreterError>;

pub(super) fn table() -> HashMap<&'static str, NativeFunction> {
	let functions: [(&'static str, NativeFunction); 15] = [
		("identity", identity),
		("to_string", to_string),
		("show", show),
		("+", add),
		("*", multiply),
		("-", subtract),
		("/", divide),
		(">", greater),
		(">=", greater_equal),
		("<", less),
		("<=", less_equal),
		("==", equal),
		("!=", not_equal),
		("loop", r#loop),
		("if", r#if),
	];
	HashMap::from(functions)
}

fn identity(_: &mut Interpreter, _: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	Ok(arguments)
}

fn to_string(_: &mut Interpreter, _: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	Ok(arguments.iter().map(|value| Value::Str(value.to_string())).collect())
}

fn show(interpreter: &mut Interpreter, _: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	interpreter.write_line(&join(&arguments))?;
	Ok(Vec::new())
}

fn add(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	let sum = numbers(location, &arguments)?.into_iter().fold(0.0, |acc, n| acc + n);
	Ok(vec![Value::Number(sum)])
}

fn multiply(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	let product = numbers(location, &arguments)?.into_iter().fold(1.0, |acc, n| acc * n);
	Ok(vec![Value::Number(product)])
}

fn subtract(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	fold("-", location, &arguments, |acc, n| acc - n)
}

fn divide(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	fold("/", location, &arguments, |acc, n| acc / n)
}

fn greater(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	compare(location, &arguments, |l, r| l > r)
}

fn greater_equal(
	_: &mut Interpreter,
	location: Location,
	arguments: Vec<Value>,
) -> Result<Vec<Value>, InterpreterError> {
	compare(location, &arguments, |l, r| l >= r)
}

fn less(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	compare(location, &arguments, |l, r| l < r)
}

fn less_equal(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	compare(location, &arguments, |l, r| l <= r)
}

fn equal(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	compare(location, &arguments, |l, r| l == r)
}

fn not_equal(_: &mut Interpreter, location: Location, arguments: Vec<Value>) -> Result<Vec<Value>, InterpreterError> {
	compare(location, &arguments, |l, r| l != r)
}

/// `(condition, body) |> loop`: call `body` while `condition` returns `true`,
/// yielding what the last `body` call returned.
fn r#loop(
	interpreter: &mut Interpreter,
	location: Location,
	arguments: Vec<Value>,
) -> Result<Vec<Value>, InterpreterError> {
	let [condition, body] = exact::<2>("loop", location, arguments)?;
	let condition = lambda(location, &condition)?;
	let body = lambda(location, &body)?;

	let mut result = Vec::new();
	while boolean_result(interpreter.call_lambda("condition", &condition, Vec::new(), location)?, location)? {
		result = interpreter.call_lambda("body", &body, Vec::new(), location)?;
	}
	Ok(result)
}

/// `(flag, body) |> if`: call `body` only when `flag` is `true`. Yields
/// nothing either way.
fn r#if(
	interpreter: &mut Interpreter,
	location: Location,
	arguments: Vec<Value>,
) -> Result<Vec<Value>, InterpreterError> {
	let [flag, body] = exact::<2>("if", location, arguments)?;
	let flag = match flag {
		Value::Boolean(b) => b,
		other => return Err(mismatch(location, "boolean", &other)),
	};
	let body = lambda(location, &body)?;
	if flag {
		interpreter.call_lambda("body", &body, Vec::new(), location)?;
	}
	Ok(Vec::new())
}

fn number(location: Location, value: &Value) -> Result<f64, InterpreterError> {
	match value {
		Value::Number(n) => Ok(*n),
		other => Err(mismatch(location, "number", other)),
	}
}

fn numbers(location: Location, arguments: &[Value]) -> Result<Vec<f64>, InterpreterError> {
	arguments.iter().map(|value| number(location, value)).collect()
}

/// Fold left starting from the first argument, which must exist.
fn fold(
	name: &'static str,
	location: Location,
	arguments: &[Value],
	f: impl Fn(f64, f64) -> f64,
) -> Result<Vec<Value>, InterpreterError> {
	let numbers = numbers(location, arguments)?;
	let (first, rest) = numbers.split_first().ok_or_else(|| {
		runtime(location, RuntimeErrorType::MissingArguments { name, expected: 1, found: 0 })
	})?;
	Ok(vec![Value::Number(rest.iter().fold(*first, |acc, n| f(acc, *n)))])
}

/// Check `relation` between every consecutive pair, stopping at the first
/// pair that fails. Values past that pair are never type checked.
fn compare(
	location: Location,
	arguments: &[Value],
	relation: impl Fn(f64, f64) -> bool,
) -> Result<Vec<Value>, InterpreterError> {
	if arguments.len() < 2 {
		return Err(runtime(location, RuntimeErrorType::ComparisonOperands));
	}
	for pair in arguments.windows(2) {
		if !relation(number(location, &pair[0])?, number(location, &pair[1])?) {
			return Ok(vec![Value::Boolean(false)]);
		}
	}
	Ok(vec![Value::Boolean(true)])
}

fn exact<const N: usize>(
	name: &str,
	location: Location,
	arguments: Vec<Value>,
) -> Result<[Value; N], InterpreterError> {
	arguments.try_into().map_err(|arguments: Vec<Value>| {
		runtime(location, RuntimeErrorType::ArityMismatch { name: name.to_string(), expected: N, found: arguments.len() })
	})
}

fn lambda(location: Location, value: &Value) -> Result<Rc<LambdaValue>, InterpreterError> {
	match value {
		Value::Lambda(lambda) => Ok(lambda.clone()),
		other => Err(mismatch(location, "lambda", other)),
	}
}

fn boolean_result(values: Vec<Value>, location: Location) -> Result<bool, InterpreterError> {
	match values.as_slice() {
		[Value::Boolean(b)] => Ok(*b),
		[other] => Err(mismatch(location, "boolean", other)),
		_ => Err(runtime(location, RuntimeErrorType::ExpectedSingleValue { name: "loop condition", found: values.len() })),
	}
}

fn mismatch(location: Location, expected: &'static str, found: &Value) -> InterpreterError {
	runtime(location, RuntimeErrorType::TypeMismatch { expected, found: found.type_name() })
}
