//! # Teeny: a tiny BASIC-like language translated to C
//!
//! A teeny program is a list of line oriented statements:
//!
//! ``` text
//! # Count down from the number typed in.
//! input n
//! while n > 0 repeat
//!     print n
//!     declare n = n - 1
//! endwhile
//! print "liftoff"
//! ```
//!
//! Every variable is a `float`. Variables come into existence through
//! `declare` or `input` and must exist before they are read. `label` and
//! `goto` give unstructured jumps; a goto may name a label further down.

//! ## Scanning
//!
//! The [`scanner`] turns characters into tokens on demand. Newlines are
//! tokens because they end statements, everything else that is blank, and
//! `#` comments, is skipped.

//! ## Translating
//!
//! There is no syntax tree. The translator is a single-pass compiler: it
//! pulls tokens from the scanner with one token of lookahead, checks the
//! grammar, and writes C for each production the moment it recognises it.
//! Variable declarations are collected in a separate header buffer so they
//! land ahead of the statements, see [`Emitter`].
//!
//! The first error ends the translation. Lexical errors come back as
//! [`TeenyError::ScanError`], grammar and name errors as
//! [`TeenyError::ParseError`].

pub mod cli;
mod emitter;
mod environment;
mod error;
mod scanner;
mod teeny;
mod translator;

pub use emitter::Emitter;
pub use error::{TeenyError, config::ConfigError, scanner::{ScanError, ScanErrorType, ScannerError}, translator::{ParseError, ParseErrorType}};
pub use scanner::{Keywords, Scanner, Token, TokenType};
pub use teeny::Teeny;
