//! Accumulated attribute values
//!
//! An element stores each attribute as a list of already-sanitized
//! fragments. The accumulation mode decides how new fragments are added and
//! how the list is joined when the element is rendered.

use ward_security::AccumulationMode;
use ward_security::xss::ends_with_entity;

/// Sanitized fragments of one attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
	mode: AccumulationMode,
	fragments: Vec<String>,
}

impl AttributeValue {
	pub(crate) fn new(mode: AccumulationMode) -> Self {
		Self {
			mode,
			fragments: Vec::new(),
		}
	}

	/// Combine a sanitized value with the existing fragments.
	pub(crate) fn apply(&mut self, mode: AccumulationMode, sanitized: String) {
		self.mode = mode;
		match mode {
			AccumulationMode::Replace => self.fragments = vec![sanitized],
			AccumulationMode::AppendSpaceSeparated => self
				.fragments
				.extend(sanitized.split_whitespace().map(str::to_string)),
			AccumulationMode::AppendSemicolonSeparated => self.fragments.push(sanitized),
		}
	}

	pub fn mode(&self) -> AccumulationMode {
		self.mode
	}

	pub fn fragments(&self) -> &[String] {
		&self.fragments
	}

	/// Serialized attribute value.
	///
	/// Space mode joins tokens with one space. Semicolon mode terminates
	/// every non-empty declaration block with `;` and joins the blocks with
	/// one space.
	pub fn join(&self) -> String {
		match self.mode {
			AccumulationMode::Replace | AccumulationMode::AppendSpaceSeparated => {
				self.fragments.join(" ")
			}
			AccumulationMode::AppendSemicolonSeparated => join_declarations(&self.fragments),
		}
	}
}

fn join_declarations(fragments: &[String]) -> String {
	let mut joined = String::new();
	for fragment in fragments.iter().map(|f| f.trim()).filter(|f| !f.is_empty()) {
		if !joined.is_empty() {
			joined.push(' ');
		}
		joined.push_str(fragment);
		// `&quot;` and friends end in `;` but do not end a declaration
		if !fragment.ends_with(';') || ends_with_entity(fragment) {
			joined.push(';');
		}
	}
	joined
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn accumulate(mode: AccumulationMode, values: &[&str]) -> AttributeValue {
		let mut value = AttributeValue::new(mode);
		for v in values {
			value.apply(mode, v.to_string());
		}
		value
	}

	#[rstest]
	fn test_replace_keeps_last_value() {
		// Act
		let value = accumulate(AccumulationMode::Replace, &["btn1", "btn2"]);

		// Assert
		assert_eq!(value.fragments(), ["btn2"]);
		assert_eq!(value.join(), "btn2");
	}

	#[rstest]
	fn test_space_separated_accumulates_tokens() {
		// Act
		let value = accumulate(AccumulationMode::AppendSpaceSeparated, &["a", "b  c", " "]);

		// Assert
		assert_eq!(value.fragments(), ["a", "b", "c"]);
		assert_eq!(value.join(), "a b c");
	}

	#[rstest]
	#[case(&["color:red", "font-weight:bold"], "color:red; font-weight:bold;")]
	#[case(&["color: red;", "font-size: 12px"], "color: red; font-size: 12px;")]
	#[case(&["color: red; background-color: #f0f0f0;"], "color: red; background-color: #f0f0f0;")]
	#[case(&["  ", "margin:0 ;  "], "margin:0 ;")]
	#[case(&["font-family: &#x27;Fira&#x27;", "color:red"], "font-family: &#x27;Fira&#x27;; color:red;")]
	#[case(&[], "")]
	fn test_semicolon_separated_join(#[case] values: &[&str], #[case] expected: &str) {
		// Act
		let value = accumulate(AccumulationMode::AppendSemicolonSeparated, values);

		// Assert
		assert_eq!(value.join(), expected);
	}
}
