//! Output buffers for the generated C.
//!
//! Declarations have to precede the statements that use them, but a variable
//! is first seen in the middle of the statement stream. The emitter therefore
//! keeps two append-only buffers, `header` and `body`, and joins them in that
//! order once translation is done.

/// Accumulates a C translation unit as header and body text.
#[derive(Debug, Default)]
pub struct Emitter {
	header: String,
	body:   String,
}

impl Emitter {
	pub fn new() -> Self { Self::default() }

	pub fn add_header_fragment(&mut self, fragment: &str) { self.header.push_str(fragment); }

	pub fn add_header_line(&mut self, line: &str) {
		self.header.push_str(line);
		self.header.push('\n');
	}

	pub fn add_body_fragment(&mut self, fragment: &str) { self.body.push_str(fragment); }

	pub fn add_body_line(&mut self, line: &str) {
		self.body.push_str(line);
		self.body.push('\n');
	}

	/// Header then body, as one text unit.
	pub fn finalize(self) -> String {
		let Self { mut header, body } = self;
		header.push_str(&body);
		header
	}
}
