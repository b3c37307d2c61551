//! Single-pass translation from teeny to C.
//!
//! The translator is a recursive-descent parser that emits C as it recognises
//! each production. No tree is built: by the time a statement is parsed its C
//! text is already in the [`Emitter`].
//!
//! Statement grammar:
//!
//! ``` BNF
//! program    → nl? ( statement )* EOF ;
//! statement  → "print" ( STRING | expression ) nl
//!            | "if" comparison "then" nl ( statement )* "endif" nl
//!            | "while" comparison "repeat" nl ( statement )* "endwhile" nl
//!            | "label" IDENT nl
//!            | "goto" IDENT nl
//!            | "declare" IDENT "=" expression nl
//!            | "input" IDENT nl ;
//! nl         → NEWLINE ( NEWLINE )* ;
//! ```
//!
//! The expression grammar lives in [`expression`].

mod expression;

use TokenType::*;

use crate::{Emitter, environment::Environment, error::translator::{ParseError, ParseErrorType, TranslatorError}, scanner::{Keywords, Scanner, Token, TokenType}};

pub(crate) struct Translator<'a> {
	scanner:     Scanner<'a>,
	/// The token being parsed.
	current:     Token<'a>,
	/// One token of lookahead behind `current`.
	peek:        Token<'a>,
	environment: Environment<'a>,
	emitter:     Emitter,
	/// Trace productions on stderr.
	verbose:     bool,
}

impl<'a> Translator<'a> {
	pub fn new(source: &'a str, keywords: &'a Keywords) -> Result<Self, TranslatorError> {
		let mut scanner = Scanner::new(source, keywords);
		let current = scanner.next_token()?;
		let peek = scanner.next_token()?;

		Ok(Self { scanner, current, peek, environment: Environment::new(), emitter: Emitter::new(), verbose: false })
	}

	pub fn verbose(mut self, verbose: bool) -> Self {
		self.verbose = verbose;
		self
	}

	/// Translate the whole program and return the C translation unit.
	pub fn program(mut self) -> Result<String, TranslatorError> {
		self.trace("PROGRAM");
		self.emitter.add_header_line("#include <stdio.h>");
		self.emitter.add_header_line("int main(void){");

		// Blank lines ahead of the first statement.
		while self.check(NewLine) {
			self.advance()?;
		}
		while !self.check(Eof) {
			self.statement()?;
		}

		self.emitter.add_body_line("return 0;");
		self.emitter.add_body_line("}");

		self.environment.resolve_labels()?;
		Ok(self.emitter.finalize())
	}

	fn statement(&mut self) -> Result<(), TranslatorError> {
		match self.current.r#type {
			Print => self.print_statement()?,
			If => {
				self.trace("STATEMENT-IF");
				self.advance()?;
				self.emitter.add_body_fragment("if(");
				self.comparison()?;
				self.expect(Then)?;
				self.nl()?;
				self.emitter.add_body_line("){");
				self.block(EndIf)?;
				self.emitter.add_body_line("}");
			}
			While => {
				self.trace("STATEMENT-WHILE");
				self.advance()?;
				self.emitter.add_body_fragment("while(");
				self.comparison()?;
				self.expect(Repeat)?;
				self.nl()?;
				self.emitter.add_body_line("){");
				self.block(EndWhile)?;
				self.emitter.add_body_line("}");
			}
			Label => {
				self.trace("STATEMENT-LABEL");
				self.advance()?;
				let name = self.expect(Identifier)?;
				self.environment.declare_label(&name)?;
				self.emitter.add_body_line(&format!("{}:", name.lexeme));
			}
			Goto => {
				self.trace("STATEMENT-GOTO");
				self.advance()?;
				let name = self.expect(Identifier)?;
				self.environment.reference_label(&name);
				self.emitter.add_body_line(&format!("goto {};", name.lexeme));
			}
			Declare => {
				self.trace("STATEMENT-DECLARE");
				self.advance()?;
				let name = self.expect(Identifier)?;
				self.define(&name);
				self.emitter.add_body_fragment(&format!("{} = ", name.lexeme));
				self.expect(Eq)?;
				self.expression()?;
				self.emitter.add_body_line(";");
			}
			Input => {
				self.trace("STATEMENT-INPUT");
				self.advance()?;
				let name = self.expect(Identifier)?;
				self.define(&name);
				// A failed read zeroes the variable and skips the bad word.
				self.emitter.add_body_line(&format!("if(0 == scanf(\"%f\", &{})) {{", name.lexeme));
				self.emitter.add_body_line(&format!("{} = 0;", name.lexeme));
				self.emitter.add_body_line("scanf(\"%*s\");");
				self.emitter.add_body_line("}");
			}
			_ => {
				let error = ParseErrorType::InvalidStatement {
					lexeme: self.current.lexeme.to_string(),
					kind:   self.current.r#type.to_string(),
				};
				return Err(ParseError::new(self.current.line, error).into());
			}
		}

		self.nl()
	}

	fn print_statement(&mut self) -> Result<(), TranslatorError> {
		self.trace("STATEMENT-PRINT");
		self.advance()?;

		if self.check(StringLiteral) {
			self.emitter.add_body_line(&format!("printf(\"{}\\n\");", self.current.lexeme));
			self.advance()?;
		} else {
			self.emitter.add_body_fragment("printf(\"%.2f\\n\", (float)(");
			self.expression()?;
			self.emitter.add_body_line("));");
		}
		Ok(())
	}

	/// Statements up to and including `terminator`.
	fn block(&mut self, terminator: TokenType) -> Result<(), TranslatorError> {
		while !self.check(terminator) {
			if self.check(Eof) {
				return Err(self.unexpected(terminator).into());
			}
			self.statement()?;
		}
		self.expect(terminator)?;
		Ok(())
	}

	/// One or more newlines.
	fn nl(&mut self) -> Result<(), TranslatorError> {
		self.trace("NEWLINE");
		self.expect(NewLine)?;
		while self.check(NewLine) {
			self.advance()?;
		}
		Ok(())
	}

	/// First mention of a variable declares it in the header.
	fn define(&mut self, name: &Token<'a>) {
		if self.environment.define(name) {
			self.emitter.add_header_line(&format!("float {};", name.lexeme));
		}
	}

	fn check(&self, r#type: TokenType) -> bool { self.current.r#type == r#type }

	/// Consume the current token if it has the expected type.
	fn expect(&mut self, r#type: TokenType) -> Result<Token<'a>, TranslatorError> {
		if !self.check(r#type) {
			return Err(self.unexpected(r#type).into());
		}
		let token = self.current;
		self.advance()?;
		Ok(token)
	}

	fn unexpected(&self, expected: impl ToString) -> ParseError {
		let error = ParseErrorType::UnexpectedToken {
			expected: expected.to_string(),
			found:    self.current.r#type.to_string(),
		};
		ParseError::new(self.current.line, error)
	}

	/// Shift the lookahead into `current` and scan a new lookahead.
	fn advance(&mut self) -> Result<(), TranslatorError> {
		let next = self.scanner.next_token()?;
		self.current = std::mem::replace(&mut self.peek, next);
		Ok(())
	}

	fn trace(&self, production: impl std::fmt::Display) {
		if self.verbose {
			eprintln!("{production}");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::scanner::ScanErrorType;

	const PRELUDE: &str = "#include <stdio.h>\nint main(void){\n";
	const EPILOGUE: &str = "return 0;\n}\n";

	fn translate(input: &str) -> Result<String, TranslatorError> {
		let keywords = Keywords::default();
		Translator::new(input, &keywords)?.program()
	}

	/// Expected output given the declarations and statements between the
	/// fixed prelude and epilogue.
	fn c(declarations: &str, statements: &str) -> String { format!("{PRELUDE}{declarations}{statements}{EPILOGUE}") }

	fn parse_error(input: &str) -> ParseError {
		match translate(input) {
			Err(TranslatorError::ParseError(e)) => e,
			other => panic!("expected a parse error for {input:?}, got {other:?}"),
		}
	}

	#[test]
	fn empty_program() {
		assert_eq!(translate("").unwrap(), c("", ""));
		assert_eq!(translate("\n\n# only a comment\n").unwrap(), c("", ""));
	}

	#[test]
	fn print_string() {
		assert_eq!(translate("print \"hi\"\n").unwrap(), c("", "printf(\"hi\\n\");\n"));
	}

	#[test]
	fn print_expression() {
		assert_eq!(translate("print 1\n").unwrap(), c("", "printf(\"%.2f\\n\", (float)(1));\n"));
		assert_eq!(translate("print 3.14 * 2").unwrap(), c("", "printf(\"%.2f\\n\", (float)(3.14*2));\n"));
	}

	#[test]
	fn declare_and_print() {
		let expected = c("float x;\n", "x = 5;\nprintf(\"%.2f\\n\", (float)(x));\n");
		assert_eq!(translate("declare x = 5\nprint x\n").unwrap(), expected);
	}

	#[test]
	fn redeclare_assigns_without_declaring() {
		let expected = c("float x;\n", "x = 1;\nx = x+1;\n");
		assert_eq!(translate("declare x = 1\ndeclare x = x + 1\n").unwrap(), expected);
	}

	#[test]
	fn declarations_collect_in_header() {
		let output = translate("declare a = 1\nprint a\ndeclare b = a\ninput c\n").unwrap();
		assert!(output.starts_with(&format!("{PRELUDE}float a;\nfloat b;\nfloat c;\na = 1;\n")));
	}

	#[test]
	fn input_statement() {
		let expected = c("float n;\n", "if(0 == scanf(\"%f\", &n)) {\nn = 0;\nscanf(\"%*s\");\n}\n");
		assert_eq!(translate("input n").unwrap(), expected);
	}

	#[test]
	fn input_of_declared_variable() {
		let output = translate("declare n = 1\ninput n\n").unwrap();
		assert_eq!(output.matches("float n;").count(), 1);
	}

	#[test]
	fn if_statement() {
		let expected = c("float x;\n", "x = 1;\nif(x>0){\nprintf(\"yes\\n\");\n}\n");
		assert_eq!(translate("declare x = 1\nif x > 0 then\nprint \"yes\"\nendif\n").unwrap(), expected);
	}

	#[test]
	fn while_statement() {
		let source = "declare i = 0\nwhile i < 3 repeat\n\n  print i\n  declare i = i + 1\nendwhile\n";
		let expected =
			c("float i;\n", "i = 0;\nwhile(i<3){\nprintf(\"%.2f\\n\", (float)(i));\ni = i+1;\n}\n");
		assert_eq!(translate(source).unwrap(), expected);
	}

	#[test]
	fn nested_blocks() {
		let source = concat!(
			"declare a = 1\n",
			"while a <= 10 repeat\n",
			"if a == 5 then\n",
			"print \"five\"\n",
			"endif\n",
			"declare a = a + 1\n",
			"endwhile\n",
		);
		let expected = c(
			"float a;\n",
			"a = 1;\nwhile(a<=10){\nif(a==5){\nprintf(\"five\\n\");\n}\na = a+1;\n}\n",
		);
		assert_eq!(translate(source).unwrap(), expected);
	}

	#[test]
	fn labels_and_goto() {
		let expected = c("", "goto done;\nprintf(\"skipped\\n\");\ndone:\n");
		assert_eq!(translate("goto done\nprint \"skipped\"\nlabel done\n").unwrap(), expected);
		assert!(translate("label top\ngoto top\n").is_ok());
	}

	#[test]
	fn unresolved_goto() {
		let error = parse_error("goto foo\n");
		assert_eq!(error.r#type(), &ParseErrorType::UndeclaredLabel("foo".into()));
		assert_eq!(error.line(), 1);
	}

	#[test]
	fn duplicate_label() {
		let error = parse_error("label a\nprint 1\nlabel a\n");
		assert_eq!(error.r#type(), &ParseErrorType::DuplicateLabel("a".into()));
		assert_eq!(error.line(), 3);
		// Nesting does not make a label local.
		let error = parse_error("label a\nif 1 == 1 then\nlabel a\nendif\n");
		assert_eq!(error.r#type(), &ParseErrorType::DuplicateLabel("a".into()));
	}

	#[test]
	fn use_before_declare() {
		let error = parse_error("print x\n");
		assert_eq!(error.r#type(), &ParseErrorType::UndeclaredVariable("x".into()));
		let error = parse_error("print 1\ndeclare y = 2\ndeclare z = y + w\n");
		assert_eq!(error.r#type(), &ParseErrorType::UndeclaredVariable("w".into()));
		assert_eq!(error.line(), 3);
	}

	#[test]
	fn variable_declared_in_block_is_visible_after() {
		assert!(translate("if 1 > 0 then\ndeclare x = 1\nendif\nprint x\n").is_ok());
	}

	#[test]
	fn invalid_statement() {
		let error = parse_error("x = 5\n");
		assert_eq!(error.r#type(), &ParseErrorType::InvalidStatement { lexeme: "x".into(), kind: "IDENT".into() });
		let error = parse_error("endif\n");
		assert!(matches!(error.r#type(), ParseErrorType::InvalidStatement { kind, .. } if kind == "ENDIF"));
	}

	#[test]
	fn statements_need_newlines() {
		let error = parse_error("print 1 print 2\n");
		assert_eq!(error.r#type(), &ParseErrorType::UnexpectedToken { expected: "NEWLINE".into(), found: "PRINT".into() });
	}

	#[test]
	fn missing_then() {
		let error = parse_error("if 1 < 2\nprint 1\nendif\n");
		assert_eq!(error.r#type(), &ParseErrorType::UnexpectedToken { expected: "THEN".into(), found: "NEWLINE".into() });
	}

	#[test]
	fn unterminated_block() {
		let error = parse_error("while 1 < 2 repeat\nprint 1\n");
		assert_eq!(error.r#type(), &ParseErrorType::UnexpectedToken { expected: "ENDWHILE".into(), found: "EOF".into() });
	}

	#[test]
	fn block_terminators_do_not_mix() {
		let error = parse_error("if 1 < 2 then\nprint 1\nendwhile\n");
		assert!(matches!(error.r#type(), ParseErrorType::InvalidStatement { kind, .. } if kind == "ENDWHILE"));
	}

	#[test]
	fn declare_needs_identifier_and_eq() {
		let error = parse_error("declare 5 = 5\n");
		assert_eq!(error.r#type(), &ParseErrorType::UnexpectedToken { expected: "IDENT".into(), found: "NUMBER".into() });
		let error = parse_error("declare x 5\n");
		assert_eq!(error.r#type(), &ParseErrorType::UnexpectedToken { expected: "EQ".into(), found: "NUMBER".into() });
	}

	#[test]
	fn scan_errors_stop_translation() {
		match translate("print 1\nprint 2 ! 3\n") {
			Err(TranslatorError::ScanError(e)) => {
				assert_eq!(e.r#type(), &ScanErrorType::ExpectedNotEqual(Some(' ')));
				assert_eq!(e.line(), 2);
			}
			other => panic!("expected a scan error, got {other:?}"),
		}
	}

	#[test]
	fn respelled_keywords() {
		let keywords = Keywords::with_overrides(["print=say", "if=when", "endif=done"]).unwrap();
		let output = Translator::new("when 1 < 2 then\nsay \"ok\"\ndone\n", &keywords).unwrap().program().unwrap();
		assert_eq!(output, c("", "if(1<2){\nprintf(\"ok\\n\");\n}\n"));
	}

	#[test]
	fn translation_is_repeatable() {
		let source = "input a\ndeclare b = a * 2\nif b >= 10 then\ngoto big\nendif\nprint b\nlabel big\n";
		assert_eq!(translate(source).unwrap(), translate(source).unwrap());
	}

	#[test]
	fn verbose_does_not_change_output() {
		let keywords = Keywords::default();
		let source = "declare x = 1\nprint x\n";
		let traced = Translator::new(source, &keywords).unwrap().verbose(true).program().unwrap();
		assert_eq!(traced, translate(source).unwrap());
	}
}
