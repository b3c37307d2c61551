/// Problems with a user supplied keyword mapping.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
	#[error("Expected ROLE=SPELLING, got {0:?}")]
	MalformedKeyword(String),
	#[error("Unknown keyword role {0:?}, expected one of: {roles}", roles = crate::scanner::Keywords::ROLES.join(", "))]
	UnknownRole(String),
	/// Spellings have to scan as identifiers or the scanner could never
	/// produce them.
	#[error("Keyword spelling {0:?} is not an identifier")]
	InvalidSpelling(String),
	#[error("Keyword spelling {spelling:?} is used by both {first} and {second}")]
	DuplicateSpelling { spelling: String, first: String, second: String },
}
