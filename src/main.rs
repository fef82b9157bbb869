use std::{fs::read_to_string, path::Path};

use anyhow::Context;
use palc::Parser;
use pipette::{Pipette, cli::*};

fn main() {
	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = Pipette::new().run_file(&path) {
				eprintln!("Failed run file: {e}");
				std::process::exit(1);
			}
		}
		Mode::Tokens { path } => {
			if let Err(e) = print_tokens(&path) {
				eprintln!("Failed scan file: {e}");
				std::process::exit(1);
			}
		}
		Mode::Ast { path } => {
			if let Err(e) = print_ast(&path) {
				eprintln!("Failed parse file: {e}");
				std::process::exit(1);
			}
		}
		Mode::Repl => Pipette::new().run_prompt(),
	}
}

fn print_tokens(path: &Path) -> anyhow::Result<()> {
	let source = read_to_string(path).context("Failed open source file")?;
	for token in pipette::tokenize(&source)?.remaining() {
		println!("{token}");
	}
	Ok(())
}

fn print_ast(path: &Path) -> anyhow::Result<()> {
	let source = read_to_string(path).context("Failed open source file")?;
	println!("{}", pipette::parse(&source)?.tree());
	Ok(())
}
