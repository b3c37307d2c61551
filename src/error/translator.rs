use super::scanner::{ScanError, ScannerError};

#[derive(thiserror::Error, Debug)]
pub enum TranslatorError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ScanError(#[from] ScanError),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

impl From<ScannerError> for TranslatorError {
	fn from(error: ScannerError) -> Self {
		match error {
			ScannerError::InternalError(e) => TranslatorError::InternalError(e),
			ScannerError::ScanError(e) => TranslatorError::ScanError(e),
		}
	}
}

#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct ParseError {
	line:   usize,
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn r#type(&self) -> &ParseErrorType { &self.r#type }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// The grammar required one token kind and found another.
	UnexpectedToken { expected: String, found: String },
	/// A statement began with a token no statement can start with.
	InvalidStatement { lexeme: String, kind: String },
	/// An expression operand was neither a number nor a variable.
	ExpectedPrimary(String),
	/// A variable was read before any declare or input statement named it.
	UndeclaredVariable(String),
	DuplicateLabel(String),
	/// A goto names a label that is never declared.
	UndeclaredLabel(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { expected, found } => {
				write!(f, "Expected {expected}, got {found}")
			}
			InvalidStatement { lexeme, kind } => {
				write!(f, "Invalid statement at {lexeme:?} ({kind})")
			}
			ExpectedPrimary(lexeme) => {
				write!(f, "Unexpected token at {lexeme:?}, expected a number or variable")
			}
			UndeclaredVariable(name) => {
				write!(f, "Referencing variable before assignment: {name}")
			}
			DuplicateLabel(name) => {
				write!(f, "Label already exists: {name}")
			}
			UndeclaredLabel(name) => {
				write!(f, "Attempting to GOTO to undeclared label: {name}")
			}
		}
	}
}
