//! Document generator
//!
//! A [`Generator`] owns the root of one element tree and the policy table
//! every element of that tree assigns attributes through.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ward_conf::GeneratorSettings;
use ward_security::{Attribute, AttributePolicy, PolicyTable};

use crate::element::{Element, SharedPolicy};

/// Root of an HTML document under construction
///
/// # Example
///
/// ```
/// use ward_builder::Generator;
/// use ward_security::Attribute;
///
/// let generator = Generator::new(&[Attribute::new("hx-target")]);
/// generator
///     .root()
///     .button()
///     .attr("hx-post", "/items")
///     .attr("hx-target", "#list")
///     .add_text("Add");
///
/// let html = generator.generate();
/// assert!(html.contains(r##"hx-target="#list""##));
/// assert!(html.contains(r#"hx-post="/items""#));
/// ```
pub struct Generator {
	root: Element,
	policy: SharedPolicy,
}

impl Default for Generator {
	fn default() -> Self {
		Self::with_policy(PolicyTable::builtin())
	}
}

impl Generator {
	/// Creates a generator whose policy table is the built-in table plus
	/// `custom` attributes allowed with escape-only sanitization.
	pub fn new(custom: &[Attribute]) -> Self {
		Self::with_policy(PolicyTable::new(custom))
	}

	/// Creates a generator from loaded settings.
	pub fn from_settings(settings: &GeneratorSettings) -> Self {
		Self::with_policy(settings.policy_table())
	}

	fn with_policy(table: PolicyTable) -> Self {
		tracing::debug!(attributes = table.len(), "creating generator");
		let policy = Rc::new(RefCell::new(table));
		Self {
			root: Element::root(Rc::clone(&policy)),
			policy,
		}
	}

	/// The implicit document root. It is never rendered itself.
	pub fn root(&self) -> Element {
		self.root.clone()
	}

	/// Registers a policy for `name`, replacing any existing entry.
	///
	/// Applies to assignments made after the call.
	pub fn register_policy(&self, name: &str, policy: AttributePolicy) {
		self.policy.borrow_mut().register(name, policy);
	}

	/// Disallows `name`; later assignments to it are demoted to `data-`.
	pub fn deny_attribute(&self, name: &str) {
		self.policy.borrow_mut().deny(name);
	}

	pub fn allow_pass_through_prefix(&self, prefix: &str) {
		self.policy.borrow_mut().add_pass_through_prefix(prefix);
	}

	/// Snapshot of the current policy table.
	pub fn policy(&self) -> PolicyTable {
		self.policy.borrow().clone()
	}

	/// Serializes the document.
	pub fn generate(&self) -> String {
		self.root.render()
	}
}

impl fmt::Display for Generator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.generate())
	}
}

impl fmt::Debug for Generator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Generator")
			.field("root", &self.root)
			.field("policy", &*self.policy.borrow())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use ward_security::AccumulationMode;

	#[rstest]
	fn test_default_uses_builtin_policy() {
		// Act
		let generator = Generator::default();

		// Assert
		assert_eq!(generator.policy(), PolicyTable::builtin());
	}

	#[rstest]
	fn test_custom_attribute_is_allowed() {
		// Arrange
		let generator = Generator::new(&[Attribute::new("hx-target")]);

		// Act
		let div = generator.root().div().attr("hx-target", "#result");

		// Assert
		assert_eq!(div.attribute("hx-target").as_deref(), Some("#result"));
		assert_eq!(div.attribute("data-hx-target"), None);
	}

	#[rstest]
	fn test_custom_href_keeps_url_validation() {
		// Arrange
		let generator = Generator::new(&[Attribute::new("href")]);

		// Act
		let a = generator.root().a().attr("href", "javascript:alert(1)");

		// Assert
		assert_eq!(a.attribute("href").as_deref(), Some("#"));
	}

	#[rstest]
	fn test_from_settings() {
		// Arrange
		let settings = GeneratorSettings::new()
			.with_custom_attribute("x-tooltip")
			.with_pass_through_prefix("aria-");

		// Act
		let generator = Generator::from_settings(&settings);
		let div = generator
			.root()
			.div()
			.attr("x-tooltip", "hi")
			.attr("aria-label", "Close");

		// Assert
		assert_eq!(div.attribute("x-tooltip").as_deref(), Some("hi"));
		assert_eq!(div.attribute("aria-label").as_deref(), Some("Close"));
	}

	#[rstest]
	fn test_register_policy_applies_to_later_assignments() {
		// Arrange
		let generator = Generator::default();
		let div = generator.root().div().attr("part", "a");

		// Act
		generator.register_policy(
			"part",
			AttributePolicy::escaped().accumulate(AccumulationMode::AppendSpaceSeparated),
		);
		div.attr("part", "header").attr("part", "title");

		// Assert
		assert_eq!(div.attribute("data-part").as_deref(), Some("a"));
		assert_eq!(div.attribute("part").as_deref(), Some("header title"));
	}

	#[rstest]
	fn test_deny_attribute() {
		// Arrange
		let generator = Generator::default();
		generator.deny_attribute("title");

		// Act
		let div = generator.root().div().attr("title", "x");

		// Assert
		assert_eq!(div.attribute("title"), None);
		assert_eq!(div.attribute("data-title").as_deref(), Some("x"));
	}

	#[rstest]
	fn test_allow_pass_through_prefix() {
		// Arrange
		let generator = Generator::default();
		generator.allow_pass_through_prefix("aria-");

		// Act
		let div = generator.root().div().attr("aria-hidden", "true");

		// Assert
		assert_eq!(div.attribute("aria-hidden").as_deref(), Some("true"));
	}

	#[rstest]
	fn test_display_matches_generate() {
		// Arrange
		let generator = Generator::default();
		generator.root().p().add_text("text");

		// Act
		let displayed = generator.to_string();

		// Assert
		assert_eq!(displayed, generator.generate());
		assert_eq!(displayed, "<p>text</p>");
	}

	#[rstest]
	fn test_generate_is_repeatable() {
		// Arrange
		let generator = Generator::default();
		generator.root().hr();

		// Act
		let first = generator.generate();
		let second = generator.generate();

		// Assert
		assert_eq!(first, second);
	}
}
