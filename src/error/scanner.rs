/// Scanner related errors
#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
	/// Internal translator error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors encountered during scanning
	#[error(transparent)]
	ScanError(#[from] ScanError),
}

/// A specific scanning error with line number and type.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct ScanError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of scanning error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn r#type(&self) -> &ScanErrorType { &self.r#type }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanErrorType {
	/// Error for characters that start no token.
	UnexpectedCharacter(char),
	/// A `!` that is not part of `!=`, with whatever followed it.
	ExpectedNotEqual(Option<char>),
	/// A decimal point without a digit after it.
	MalformedNumber,
	/// Characters that would corrupt the generated `printf` format string.
	IllegalStringCharacter(char),
	/// Error for unterminated strings.
	UnterminatedString,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character {c:?}")
			}
			ExpectedNotEqual(Some(c)) => {
				write!(f, "Expected !=, got !{c}")
			}
			ExpectedNotEqual(None) => {
				write!(f, "Expected !=, got ! at end of input")
			}
			MalformedNumber => {
				write!(f, "Illegal character in number, expected a digit after '.'")
			}
			IllegalStringCharacter(c) => {
				write!(f, "Illegal character {c:?} in string")
			}
			UnterminatedString => {
				write!(f, "Unterminated String")
			}
		}
	}
}
