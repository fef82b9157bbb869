use std::{cell::RefCell, io::Write, path::PathBuf, rc::Rc};

use pipette::{Pipette, PipetteError, RuntimeErrorType, Value};

/// Output sink whose contents the test can read back.
#[derive(Clone, Default)]
struct Capture(Rc<RefCell<Vec<u8>>>);

impl Write for Capture {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.0.borrow_mut().write(buf) }

	fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

fn script(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("scripts").join(name) }

fn run_file(name: &str) -> (Result<Vec<Value>, PipetteError>, String) {
	let capture = Capture::default();
	let mut pipette = Pipette::with_output(Box::new(capture.clone()));
	let result = pipette.run_file(script(name));
	let text = String::from_utf8(capture.0.borrow().clone()).unwrap();
	(result, text)
}

fn run(source: &str) -> (Result<Vec<Value>, PipetteError>, String) {
	let capture = Capture::default();
	let mut pipette = Pipette::with_output(Box::new(capture.clone()));
	let result = pipette.run(source);
	let text = String::from_utf8(capture.0.borrow().clone()).unwrap();
	(result, text)
}

fn runtime_error(source: &str) -> RuntimeErrorType {
	match run(source).0 {
		Err(PipetteError::RuntimeError(e)) => e.r#type,
		other => panic!("expected a runtime error, got {other:?}"),
	}
}

#[test]
fn test_counter_loop() {
	let (result, text) = run_file("counter.pip");
	assert!(result.unwrap().is_empty());
	let expected: String = (1..=10).map(|i| format!("{i}\n")).collect();
	assert_eq!(text, expected);
}

#[test]
fn test_geometry() {
	let (result, text) = run_file("geometry.pip");
	result.unwrap();
	assert_eq!(text, "12.5\n6.25\n");
}

#[test]
fn test_factorial() {
	let (result, text) = run_file("factorial.pip");
	assert!(result.unwrap().is_empty());
	assert_eq!(text, "120\n");
}

#[test]
fn test_branches() {
	let (result, text) = run_file("branches.pip");
	assert!(result.unwrap().is_empty());
	assert_eq!(text, "big\n");
}

#[test]
fn test_closures_share_cells_until_rebound() {
	let (result, text) = run_file("closures.pip");
	result.unwrap();
	assert_eq!(text, "i is, 0\ni is, 1\ni is, 1\n");
}

#[test]
fn test_rendering() {
	let (result, text) = run_file("rendering.pip");
	result.unwrap();
	assert_eq!(text, "tab\tand \"quote\", 1.5, true, (1, (2, 3))\nAB\n<lambda(a, b)>\n");
}

#[test]
fn test_sum_and_product() {
	let (result, _) = run("(1.5, 2.5, 3, 4) |> +");
	assert_eq!(result.unwrap(), vec![Value::Number(11.0)]);
	let (result, _) = run("(1.5, 2, 3, 4) |> *");
	assert_eq!(result.unwrap(), vec![Value::Number(36.0)]);
}

#[test]
fn test_pairwise_comparison() {
	let (result, text) = run("(20, 10, 15) |> > |> show");
	assert!(result.unwrap().is_empty());
	assert_eq!(text, "false\n");
}

#[test]
fn test_comparison_ignores_values_past_failing_pair() {
	let (result, text) = run("(1, 2, \"x\") |> > |> show");
	assert!(result.unwrap().is_empty());
	assert_eq!(text, "false\n");
}

#[test]
fn test_empty_sum_shows_zero() {
	let (result, text) = run("() |> + |> show");
	assert!(result.unwrap().is_empty());
	assert_eq!(text, "0\n");
}

#[test]
fn test_infinite_quotient() {
	let (result, text) = run("(1, 0) |> / |> show |> (0, 1) |> - -> m |> (m, 0) |> / |> show");
	assert!(result.unwrap().is_empty());
	assert_eq!(text, "Infinity\n-Infinity\n");
}

#[test]
fn test_loop_leaves_counter_at_ten() {
	let (result, text) = run(
		"(0) -> i |> (0) -> runs |> (() => (i, 10) |> <, () => (runs, 1) |> + ->> runs |> (i, 1) |> + ->> i) |> loop |> (i, runs) |> show",
	);
	result.unwrap();
	assert_eq!(text, "10, 10\n");
}

#[test]
fn test_call_errors() {
	assert_eq!(
		runtime_error("((a, b) => (a)) -> first |> (1) |> first"),
		RuntimeErrorType::ArityMismatch { name: "first".to_string(), expected: 2, found: 1 }
	);
	assert_eq!(runtime_error("(1) |> unbound"), RuntimeErrorType::UnknownFunction("unbound".to_string()));
}

#[test]
fn test_errors_stop_the_run() {
	let (result, text) = run("(1) |> show |> (2) |> nope |> (3) |> show");
	assert!(matches!(result, Err(PipetteError::RuntimeError(_))));
	assert_eq!(text, "1\n");
}

#[test]
fn test_missing_file() {
	let (result, _) = run_file("does_not_exist.pip");
	assert!(matches!(result, Err(PipetteError::InternalError(_))));
}
