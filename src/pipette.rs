use std::{
	fs::read_to_string,
	io::{BufRead, Write},
	path::Path,
};

use anyhow::Context;

use crate::{
	PipetteError,
	environment::Scope,
	interpreter::{
		Interpreter,
		value::{Value, join},
	},
	parser::{Parser, expression::Expression},
	scanner::{Scanner, TokenStream},
};

/// Pipette drives a source text through scanner, parser and interpreter. The
/// root scope lives as long as the driver, so successive runs (and REPL lines)
/// see each other's bindings.
pub struct Pipette {
	interpreter: Interpreter,
	scope:       Scope,
}

impl Default for Pipette {
	fn default() -> Self { Self::new() }
}

impl Pipette {
	/// A driver whose `show` output goes to stdout.
	pub fn new() -> Self { Self::with_output(Box::new(std::io::stdout())) }

	/// A driver whose `show` output goes to `output`.
	pub fn with_output(output: Box<dyn Write>) -> Self {
		Self { interpreter: Interpreter::with_output(output), scope: Scope::new() }
	}

	/// Run the program in the file at `path`.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<Value>, PipetteError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source)
	}

	/// Run the REPL prompt over stdin.
	pub fn run_prompt(&mut self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		let mut stdin = stdin.lock();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited pipette repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if input.trim().is_empty() {
				continue;
			}
			match self.run(input.trim()) {
				Ok(values) if !values.is_empty() => println!("{}", join(&values)),
				Ok(_) => {}
				Err(e) => eprintln!("Failed run prompt: {e}"),
			}
		}
	}

	/// Run `source` against the root scope and return the values it produced.
	pub fn run(&mut self, source: &str) -> Result<Vec<Value>, PipetteError> {
		let expression = parse(source)?;
		Ok(self.interpreter.evaluate(&expression, &mut self.scope)?)
	}
}

/// Scan `source` into its token stream.
pub fn tokenize(source: &str) -> Result<TokenStream, PipetteError> { Ok(Scanner::new(source).scan_tokens()?) }

/// Scan and parse `source` into its expression tree.
pub fn parse(source: &str) -> Result<Expression, PipetteError> { Ok(Parser::new(tokenize(source)?).parse()?) }
