use std::path::PathBuf;

use clap::Parser;

use crate::{error::config::ConfigError, scanner::Keywords};

#[derive(Parser, Debug)]
#[command(name = "teeny", version, about = "Translate teeny programs into C")]
pub struct Cli {
	/// Source program, `-` reads standard input
	pub source: PathBuf,
	/// Where to write the generated C, `-` writes to standard output
	#[arg(short, long, default_value = "out.c")]
	pub output: PathBuf,
	/// Trace every grammar production on standard error
	#[arg(short, long)]
	pub verbose: bool,
	/// Respell a keyword, e.g. `--keyword endif=fi`. Roles: print input
	/// declare label goto if then endif while repeat endwhile
	#[arg(short, long = "keyword", value_name = "ROLE=SPELLING")]
	pub keywords: Vec<String>,
}

impl Cli {
	/// The keyword table with every `--keyword` applied.
	pub fn keywords(&self) -> Result<Keywords, ConfigError> { Keywords::with_overrides(&self.keywords) }
}
