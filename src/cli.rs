use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pipette", after_long_help = "Runs programs written in the pipette pipeline language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file
	File { path: PathBuf },
	/// Print the token stream of a source file
	Tokens { path: PathBuf },
	/// Print the syntax tree of a source file
	Ast { path: PathBuf },
	/// Interactive prompt
	Repl,
}
