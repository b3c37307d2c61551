use std::collections::{HashMap, HashSet};

use crate::{error::translator::{ParseError, ParseErrorType}, scanner::Token};

/// Everything the translator has to remember between statements. Teeny has a
/// single flat namespace, so there is no nesting of environments.
#[derive(Default, Debug)]
pub(crate) struct Environment<'a> {
	/// Variables named by a declare or input statement so far.
	variables:  HashSet<&'a str>,
	/// Declared labels and the line that declared them.
	labels:     HashMap<&'a str, usize>,
	/// Goto targets in source order.
	referenced: Vec<Token<'a>>,
}

impl<'a> Environment<'a> {
	pub fn new() -> Self { Self::default() }

	/// Returns whether this is the first declaration of the variable.
	pub fn define(&mut self, token: &Token<'a>) -> bool { self.variables.insert(token.lexeme) }

	pub fn is_defined(&self, token: &Token<'a>) -> bool { self.variables.contains(token.lexeme) }

	pub fn declare_label(&mut self, token: &Token<'a>) -> Result<(), ParseError> {
		if self.labels.insert(token.lexeme, token.line).is_some() {
			return Err(ParseError::new(token.line, ParseErrorType::DuplicateLabel(token.lexeme.to_string())));
		}
		Ok(())
	}

	/// Record a goto target. It may be declared later in the program.
	pub fn reference_label(&mut self, token: &Token<'a>) { self.referenced.push(*token); }

	/// Every goto target has to be declared by the end of the program. The
	/// first unresolved goto in source order is reported.
	pub fn resolve_labels(&self) -> Result<(), ParseError> {
		match self.referenced.iter().find(|token| !self.labels.contains_key(token.lexeme)) {
			Some(token) => Err(ParseError::new(token.line, ParseErrorType::UndeclaredLabel(token.lexeme.to_string()))),
			None => Ok(()),
		}
	}
}
