//! Expression productions. Each one copies its tokens into the body buffer
//! as it goes, so the C expression comes out in source order with the same
//! precedence C gives it.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Comparison|== != < <= > >=|Left
//! Expression|+ -|Left
//! Term|* /|Left
//! Unary|+ -|Prefix, at most one
//!
//! ``` BNF
//! comparison     → expression ( ( "==" | "!=" | ">" | ">=" | "<" | "<=" ) expression )+ ;
//! expression     → term ( ( "-" | "+" ) term )* ;
//! term           → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "+" | "-" )? primary ;
//! primary        → NUMBER | IDENT ;
//! ```
//!
//! A sign directly after the same binary operator is set apart by a space.
//!
//! `a < b < c` is accepted and emitted as is, so it means what C makes of it.

use crate::{error::translator::{ParseError, ParseErrorType, TranslatorError}, scanner::TokenType::*};

use super::Translator;

impl Translator<'_> {
	/// Parse a condition, which needs at least one comparison operator.
	pub(super) fn comparison(&mut self) -> Result<(), TranslatorError> {
		self.trace("COMPARISON");
		self.expression()?;

		if !self.current.r#type.is_comparison_operator() {
			return Err(self.unexpected("comparison operator").into());
		}
		while self.current.r#type.is_comparison_operator() {
			self.emit_current()?;
			self.expression()?;
		}
		Ok(())
	}

	pub(super) fn expression(&mut self) -> Result<(), TranslatorError> {
		self.trace("EXPRESSION");
		self.term()?;
		while matches!(self.current.r#type, Plus | Minus) {
			let operator = self.current.r#type;
			self.emit_current()?;
			// `a - -b` must not come out as the C decrement `a--b`.
			if self.current.r#type == operator {
				self.emitter.add_body_fragment(" ");
			}
			self.term()?;
		}
		Ok(())
	}

	fn term(&mut self) -> Result<(), TranslatorError> {
		self.trace("TERM");
		self.unary()?;
		while matches!(self.current.r#type, Asterisk | Slash) {
			self.emit_current()?;
			self.unary()?;
		}
		Ok(())
	}

	fn unary(&mut self) -> Result<(), TranslatorError> {
		self.trace("UNARY");
		if matches!(self.current.r#type, Plus | Minus) {
			self.emit_current()?;
		}
		self.primary()
	}

	fn primary(&mut self) -> Result<(), TranslatorError> {
		self.trace(format_args!("PRIMARY ({})", self.current.lexeme));
		match self.current.r#type {
			Number => {}
			Identifier => {
				if !self.environment.is_defined(&self.current) {
					let error = ParseErrorType::UndeclaredVariable(self.current.lexeme.to_string());
					return Err(ParseError::new(self.current.line, error).into());
				}
			}
			_ => {
				let error = ParseErrorType::ExpectedPrimary(self.current.lexeme.to_string());
				return Err(ParseError::new(self.current.line, error).into());
			}
		}
		self.emit_current()
	}

	/// Copy the current token into the body and move past it.
	fn emit_current(&mut self) -> Result<(), TranslatorError> {
		self.emitter.add_body_fragment(self.current.lexeme);
		self.advance()
	}
}

#[cfg(test)]
mod tests {
	use crate::{error::translator::{ParseErrorType, TranslatorError}, scanner::Keywords, translator::Translator};

	/// Translate `declare r = <expression>` and return the emitted expression.
	fn expression(input: &str) -> String {
		let keywords = Keywords::default();
		let source = format!("declare a = 1\ndeclare b = 2\ndeclare r = {input}\n");
		let output = Translator::new(&source, &keywords).unwrap().program().unwrap();
		let line = output.lines().find(|line| line.starts_with("r = ")).unwrap();
		line["r = ".len()..line.len() - 1].to_string()
	}

	/// Translate `if <condition> then` and return the emitted condition.
	fn condition(input: &str) -> Result<String, TranslatorError> {
		let keywords = Keywords::default();
		let source = format!("declare a = 1\ndeclare b = 2\nif {input} then\nendif\n");
		let output = Translator::new(&source, &keywords)?.program()?;
		let line = output.lines().find(|line| line.starts_with("if(")).unwrap();
		Ok(line["if(".len()..line.len() - "){".len()].to_string())
	}

	fn error(input: &str) -> ParseErrorType {
		let keywords = Keywords::default();
		let source = format!("declare a = 1\ndeclare r = {input}\n");
		match Translator::new(&source, &keywords).unwrap().program() {
			Err(TranslatorError::ParseError(e)) => e.r#type().clone(),
			other => panic!("expected a parse error for {input:?}, got {other:?}"),
		}
	}

	#[test]
	fn parse_expressions() {
		assert_eq!(expression("1 + 2 * 3"), "1+2*3");
		assert_eq!(expression("a * b - 4 / 2"), "a*b-4/2");
		assert_eq!(expression("8 + 800.3 * 123 / 65 - 2"), "8+800.3*123/65-2");
	}

	#[test]
	fn numbers_are_verbatim() {
		assert_eq!(expression("3.14"), "3.14");
		assert_eq!(expression("007.500"), "007.500");
	}

	#[test]
	fn parse_unary() {
		assert_eq!(expression("-123"), "-123");
		assert_eq!(expression("+a"), "+a");
		assert_eq!(expression("a * -b"), "a*-b");
		assert_eq!(expression("-a - -b"), "-a- -b");
		assert_eq!(expression("a + +b"), "a+ +b");
		assert_eq!(expression("a - +b"), "a-+b");
		assert_eq!(error("--1"), ParseErrorType::ExpectedPrimary("-".into()));
	}

	#[test]
	fn parse_comparison() {
		assert_eq!(condition("a < b").unwrap(), "a<b");
		assert_eq!(condition("a <= b").unwrap(), "a<=b");
		assert_eq!(condition("a > b").unwrap(), "a>b");
		assert_eq!(condition("a >= b").unwrap(), "a>=b");
		assert_eq!(condition("a == b").unwrap(), "a==b");
		assert_eq!(condition("a != b").unwrap(), "a!=b");
		assert_eq!(condition("a + 1 > b * 2").unwrap(), "a+1>b*2");
	}

	#[test]
	fn chained_comparison_is_literal() {
		assert_eq!(condition("a < b < 3").unwrap(), "a<b<3");
		assert_eq!(condition("1 == 1 != 0").unwrap(), "1==1!=0");
	}

	#[test]
	fn condition_needs_comparison() {
		match condition("a + b") {
			Err(TranslatorError::ParseError(e)) => assert_eq!(
				e.r#type(),
				&ParseErrorType::UnexpectedToken { expected: "comparison operator".into(), found: "THEN".into() }
			),
			other => panic!("expected a parse error, got {other:?}"),
		}
	}

	#[test]
	fn comparison_outside_condition() {
		assert_eq!(error("1 < 2"), ParseErrorType::UnexpectedToken { expected: "NEWLINE".into(), found: "LT".into() });
	}

	#[test]
	fn primary_errors() {
		assert_eq!(error("x"), ParseErrorType::UndeclaredVariable("x".into()));
		assert_eq!(error("\"text\""), ParseErrorType::ExpectedPrimary("text".into()));
		assert_eq!(error("1 +"), ParseErrorType::ExpectedPrimary("\n".into()));
		assert_eq!(error("print"), ParseErrorType::ExpectedPrimary("print".into()));
	}

	#[test]
	fn self_reference_on_first_declare() {
		// The variable is declared before its initializer is parsed.
		assert_eq!(expression("r + 1"), "r+1");
	}
}
