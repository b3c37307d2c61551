//! Turns teeny source text into tokens, one token per request.
//!
//! The lexical grammar is line oriented: `\n` is a token of its own and ends
//! statements, while spaces, tabs, carriage returns and `#` comments are
//! skipped before each token. Operators are at most two characters long and
//! are told apart by looking one character ahead.
//!
//! Identifiers are scanned with `maximal munch` and only then matched against
//! the [`Keywords`] table, so `printer` is an identifier and not `print`
//! followed by `er`.
//!
//! The source is treated as if a newline were appended to it, which lets the
//! last statement end without one. After that the scanner answers `Eof` for
//! as long as it is asked.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub use token::*;

use crate::error::scanner::{ScanError, ScanErrorType, ScannerError};

/// A scanner for teeny source code
pub struct Scanner<'a> {
	/// User input source code
	source:           &'a str,
	/// User input source code iterator
	source_iter:      Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:            usize,
	/// Points just past the last consumed character
	cursor:           usize,
	/// Tracks what source line `cursor` is on so tokens know their location.
	line:             usize,
	keywords:         &'a Keywords,
	/// Whether the implicit trailing newline was handed out already.
	newline_appended: bool,
	/// Set once the iterator yielded `Eof` or an error.
	exhausted:        bool,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str, keywords: &'a Keywords) -> Self {
		let source_iter = source.char_indices().peekable();

		Self {
			source,
			source_iter,
			keywords,
			start: 0,
			cursor: 0,
			line: 1,
			newline_appended: false,
			exhausted: false,
		}
	}

	/// Scan the next token, advancing past it.
	pub fn next_token(&mut self) -> Result<Token<'a>, ScannerError> {
		self.skip_whitespace();
		self.skip_comment();

		let Some(&(index, _)) = self.source_iter.peek() else {
			return Ok(self.end_of_input());
		};
		// We are at the beginning of the next lexeme.
		self.start = index;
		self.cursor = index;

		let next_char = self.advance().context("Unexpected EOF")?;
		#[rustfmt::skip]
		let r#type = match next_char {
			'+' => Plus,
			'-' => Minus,
			'*' => Asterisk,
			'/' => Slash,
			'\n' => NewLine,
			'=' => if self.match_next('=') { EqEq } else { Eq },
			'<' => if self.match_next('=') { LtEq } else { Lt },
			'>' => if self.match_next('=') { GtEq } else { Gt },
			'!' => if self.match_next('=') { NotEq } else {
				return Err(ScanError::new(self.line, ScanErrorType::ExpectedNotEqual(self.peek())).into())
			},
			'"' => self.string()?,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() => self.identifier(),
			_ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char)).into()),
		};

		let lexeme = match r#type {
			StringLiteral => &self.source[self.start + 1..self.cursor - 1],
			_ => &self.source[self.start..self.cursor],
		};
		let token = Token::new(r#type, lexeme, self.line);
		if r#type == NewLine {
			self.line += 1;
		}
		Ok(token)
	}

	/// The implicit trailing newline first, `Eof` afterwards.
	fn end_of_input(&mut self) -> Token<'a> {
		if self.newline_appended {
			return Token::new(Eof, "", self.line);
		}
		self.newline_appended = true;
		let token = Token::new(NewLine, "\n", self.line);
		self.line += 1;
		token
	}

	fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(|c| matches!(c, ' ' | '\t' | '\r')) {
			self.advance();
		}
	}

	/// Skip a `#` comment, leaving the newline that ends it.
	fn skip_comment(&mut self) {
		if self.peek() == Some('#') {
			while self.peek().is_some_and(|c| c != '\n') {
				self.advance();
			}
		}
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan a string literal. The text ends up inside a C `printf` format, so
	/// anything that could escape or reinterpret it is rejected.
	fn string(&mut self) -> Result<TokenType, ScannerError> {
		while let Some(c) = self.peek() {
			match c {
				'"' => break,
				'\r' | '\n' | '\t' | '\\' | '%' => {
					return Err(ScanError::new(self.line, ScanErrorType::IllegalStringCharacter(c)).into());
				}
				_ => {
					self.advance();
				}
			}
		}

		self.peek().ok_or_else(|| ScanError::new(self.line, ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		Ok(StringLiteral)
	}

	/// Scan a number literal, the fraction needs at least one digit.
	fn number(&mut self) -> Result<TokenType, ScannerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		if self.peek() == Some('.') {
			self.advance(); // consume '.'
			if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
				return Err(ScanError::new(self.line, ScanErrorType::MalformedNumber).into());
			}
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		Ok(Number)
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		self.keywords.keyword_or_identifier(text)
	}
}

/// Yields every token up to and including the first `Eof`, or up to the
/// first error.
impl<'a> Iterator for Scanner<'a> {
	type Item = Result<Token<'a>, ScannerError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.exhausted {
			return None;
		}
		let token = self.next_token();
		self.exhausted = !matches!(&token, Ok(t) if t.r#type != Eof);
		Some(token)
	}
}
