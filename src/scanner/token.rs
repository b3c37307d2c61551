use std::collections::HashMap;

use crate::error::config::ConfigError;

/// A token produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType,
	/// The exact source text, string literals without their quotes.
	pub lexeme: &'a str,
	pub line:   usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType, lexeme: &'a str, line: usize) -> Self { Self { r#type, lexeme, line } }
}

/// The different kinds of tokens in teeny. Keyword kinds are resolved from
/// identifiers through [`Keywords`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// End of input, returned forever once reached.
	Eof,
	/// New Line Character `\n`, the statement terminator.
	NewLine,
	/// Number literal, e.g. `3.14`.
	Number,
	/// Identifier, a variable or label name.
	Identifier,
	/// String literal, e.g. `"hello"`.
	StringLiteral,
	/// Print statement keyword.
	Print,
	/// Input statement keyword.
	Input,
	/// Variable declaration keyword.
	Declare,
	Label,
	Goto,
	If,
	Then,
	EndIf,
	While,
	Repeat,
	EndWhile,
	/// Equal `=`.
	Eq,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Asterisk,
	/// Slash `/`.
	Slash,
	/// Equal equal `==`.
	EqEq,
	/// Not equal `!=`.
	NotEq,
	/// Less than `<`.
	Lt,
	/// Less than or equal `<=`.
	LtEq,
	/// Greater than `>`.
	Gt,
	/// Greater than or equal `>=`.
	GtEq,
}

impl TokenType {
	pub fn is_comparison_operator(&self) -> bool {
		matches!(self, TokenType::EqEq | TokenType::NotEq | TokenType::Lt | TokenType::LtEq | TokenType::Gt | TokenType::GtEq)
	}

	/// Map a keyword role name as accepted on the command line.
	pub fn keyword_role(role: &str) -> Option<Self> {
		Some(match role {
			"print" => TokenType::Print,
			"input" => TokenType::Input,
			"declare" => TokenType::Declare,
			"label" => TokenType::Label,
			"goto" => TokenType::Goto,
			"if" => TokenType::If,
			"then" => TokenType::Then,
			"endif" => TokenType::EndIf,
			"while" => TokenType::While,
			"repeat" => TokenType::Repeat,
			"endwhile" => TokenType::EndWhile,
			_ => return None,
		})
	}
}

impl std::fmt::Display for TokenType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenType::*;
		let name = match self {
			Eof => "EOF",
			NewLine => "NEWLINE",
			Number => "NUMBER",
			Identifier => "IDENT",
			StringLiteral => "STRING",
			Print => "PRINT",
			Input => "INPUT",
			Declare => "DECLARE",
			Label => "LABEL",
			Goto => "GOTO",
			If => "IF",
			Then => "THEN",
			EndIf => "ENDIF",
			While => "WHILE",
			Repeat => "REPEAT",
			EndWhile => "ENDWHILE",
			Eq => "EQ",
			Plus => "PLUS",
			Minus => "MINUS",
			Asterisk => "ASTERISK",
			Slash => "SLASH",
			EqEq => "EQEQ",
			NotEq => "NOTEQ",
			Lt => "LT",
			LtEq => "LTEQ",
			Gt => "GT",
			GtEq => "GTEQ",
		};
		f.write_str(name)
	}
}

/// Spellings of the keyword roles. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Keywords {
	spellings: HashMap<String, TokenType>,
}

impl Default for Keywords {
	fn default() -> Self {
		let spellings = Self::ROLES
			.iter()
			.filter_map(|role| TokenType::keyword_role(role).map(|r#type| (role.to_string(), r#type)))
			.collect();
		Self { spellings }
	}
}

impl Keywords {
	/// Role names, which double as the default spellings.
	pub const ROLES: [&'static str; 11] =
		["print", "input", "declare", "label", "goto", "if", "then", "endif", "while", "repeat", "endwhile"];

	/// Default spellings with each `ROLE=SPELLING` override applied in order.
	pub fn with_overrides<I, S>(overrides: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut keywords = Self::default();
		for entry in overrides {
			let entry = entry.as_ref();
			let (role, spelling) =
				entry.split_once('=').ok_or_else(|| ConfigError::MalformedKeyword(entry.to_string()))?;
			let r#type =
				TokenType::keyword_role(role.trim()).ok_or_else(|| ConfigError::UnknownRole(role.trim().to_string()))?;
			keywords.respell(r#type, spelling.trim())?;
		}
		Ok(keywords)
	}

	/// Give `role` a new spelling, dropping its previous one.
	pub fn respell(&mut self, role: TokenType, spelling: &str) -> Result<(), ConfigError> {
		let mut chars = spelling.chars();
		let identifier_shaped = chars.next().is_some_and(|c| c.is_ascii_alphabetic()) && chars.all(|c| c.is_ascii_alphanumeric());
		if !identifier_shaped {
			return Err(ConfigError::InvalidSpelling(spelling.to_string()));
		}
		match self.spellings.get(spelling) {
			Some(&owner) if owner == role => return Ok(()),
			Some(&owner) => {
				return Err(ConfigError::DuplicateSpelling {
					spelling: spelling.to_string(),
					first:    owner.to_string(),
					second:   role.to_string(),
				});
			}
			None => {}
		}
		self.spellings.retain(|_, r#type| *r#type != role);
		self.spellings.insert(spelling.to_string(), role);
		Ok(())
	}

	pub fn keyword_or_identifier(&self, text: &str) -> TokenType {
		self.spellings.get(text).copied().unwrap_or(TokenType::Identifier)
	}
}
