use std::{fs, io::{Read, Write}, path::Path};

use anyhow::Context;

use crate::{TeenyError, scanner::Keywords, translator::Translator};

/// Path that stands for standard input or output.
const STDIO: &str = "-";

/// Teeny is the entry point of the translator: it owns the keyword spellings
/// and runs one translation per call.
#[derive(Debug, Default)]
pub struct Teeny {
	keywords: Keywords,
	verbose:  bool,
}

impl Teeny {
	pub fn new(keywords: Keywords) -> Self { Self { keywords, verbose: false } }

	/// Trace grammar productions on stderr while translating.
	pub fn verbose(mut self, verbose: bool) -> Self {
		self.verbose = verbose;
		self
	}

	/// Translate a whole program into a C translation unit. Nothing carries
	/// over from one call to the next.
	pub fn translate(&self, source: &str) -> Result<String, TeenyError> {
		let translator = Translator::new(source, &self.keywords)?.verbose(self.verbose);
		Ok(translator.program()?)
	}

	/// Translate the program at `source` and write the C to `output`. Either
	/// path may be `-` for stdin or stdout. Nothing is written when the
	/// translation fails.
	pub fn run_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, source: P, output: Q) -> Result<(), TeenyError> {
		let source = read_source(source.as_ref())?;
		let translated = self.translate(&source)?;
		write_output(output.as_ref(), &translated)?;
		Ok(())
	}
}

fn read_source(path: &Path) -> anyhow::Result<String> {
	if path == Path::new(STDIO) {
		let mut source = String::new();
		std::io::stdin().read_to_string(&mut source).context("Failed read standard input")?;
		return Ok(source);
	}
	fs::read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))
}

fn write_output(path: &Path, translated: &str) -> anyhow::Result<()> {
	if path == Path::new(STDIO) {
		let mut stdout = std::io::stdout().lock();
		stdout.write_all(translated.as_bytes()).context("Failed write standard output")?;
		return stdout.flush().context("Failed flush");
	}
	fs::write(path, translated).with_context(|| format!("Failed write output file {}", path.display()))
}
