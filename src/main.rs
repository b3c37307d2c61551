use std::{path::Path, process::ExitCode};

use clap::Parser;
use teeny::{Teeny, cli::Cli};

fn main() -> ExitCode {
	let cli = Cli::parse();

	let keywords = match cli.keywords() {
		Ok(keywords) => keywords,
		Err(e) => {
			eprintln!("Failed configure keywords: {e}");
			return ExitCode::FAILURE;
		}
	};
	let teeny = Teeny::new(keywords).verbose(cli.verbose);

	if let Err(e) = teeny.run_file(&cli.source, &cli.output) {
		eprintln!("Failed translate {}: {e}", cli.source.display());
		return ExitCode::FAILURE;
	}
	if cli.output != Path::new("-") {
		eprintln!("Translation completed: {}", cli.output.display());
	}
	ExitCode::SUCCESS
}
