pub mod config;
pub mod scanner;
pub mod translator;

/// TeenyError is the top-level error type for the teeny translator.
#[derive(thiserror::Error, Debug)]
pub enum TeenyError {
	/// Internal translator error, should never happen
	#[error("TranslatorInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Bad keyword mapping or other configuration problem
	#[error("Configuration error: {0}")]
	ConfigError(#[from] config::ConfigError),
	/// Lexing failed
	#[error("Lexing error: {0}")]
	ScanError(#[from] scanner::ScanError),
	/// Parsing or a semantic check failed
	#[error("Parsing error: {0}")]
	ParseError(#[from] translator::ParseError),
}

impl From<translator::TranslatorError> for TeenyError {
	fn from(error: translator::TranslatorError) -> Self {
		use translator::TranslatorError::*;
		match error {
			InternalError(e) => TeenyError::InternalError(e),
			ScanError(e) => TeenyError::ScanError(e),
			ParseError(e) => TeenyError::ParseError(e),
		}
	}
}
