//! Tag identities
//!
//! A [`Tag`] pairs a tag name with its kind. Void tags (`br`, `img`, ...)
//! never have children, text content or a closing tag.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::tags::HTML_TAGS;

/// Whether a tag can hold content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
	/// Has children, text content and a closing tag
	Normal,
	/// Self-closing, never has children or content
	Void,
}

/// Entry of the static tag table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
	pub name: &'static str,
	pub kind: TagKind,
}

/// Tag identity of an element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
	Normal(Cow<'static, str>),
	Void(Cow<'static, str>),
}

impl Tag {
	/// Creates a tag of the given kind.
	pub fn new(name: impl Into<Cow<'static, str>>, kind: TagKind) -> Self {
		match kind {
			TagKind::Normal => Self::Normal(name.into()),
			TagKind::Void => Self::Void(name.into()),
		}
	}

	/// Tag of the implicit document root. It renders its children only.
	pub(crate) fn root() -> Self {
		Self::Normal(Cow::Borrowed(""))
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Normal(name) | Self::Void(name) => name,
		}
	}

	pub fn kind(&self) -> TagKind {
		match self {
			Self::Normal(_) => TagKind::Normal,
			Self::Void(_) => TagKind::Void,
		}
	}

	pub fn is_void(&self) -> bool {
		matches!(self, Self::Void(_))
	}

	pub fn is_root(&self) -> bool {
		self.name().is_empty()
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

static TAG_INDEX: OnceLock<HashMap<&'static str, TagKind>> = OnceLock::new();

fn tag_index() -> &'static HashMap<&'static str, TagKind> {
	TAG_INDEX.get_or_init(|| HTML_TAGS.iter().map(|spec| (spec.name, spec.kind)).collect())
}

/// Kind of a known HTML tag, `None` for names outside the table.
///
/// # Examples
///
/// ```
/// use ward_builder::tag::{lookup_tag, TagKind};
///
/// assert_eq!(lookup_tag("br"), Some(TagKind::Void));
/// assert_eq!(lookup_tag("div"), Some(TagKind::Normal));
/// assert_eq!(lookup_tag("my-widget"), None);
/// ```
pub fn lookup_tag(name: &str) -> Option<TagKind> {
	tag_index().get(name).copied()
}

/// Returns `true` if `name` is a well-formed tag name: an ASCII letter
/// followed by ASCII letters, digits or `-`.
pub fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|first| first.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("area")]
	#[case("base")]
	#[case("br")]
	#[case("col")]
	#[case("embed")]
	#[case("hr")]
	#[case("img")]
	#[case("input")]
	#[case("link")]
	#[case("meta")]
	#[case("param")]
	#[case("source")]
	#[case("track")]
	#[case("wbr")]
	fn test_void_tags(#[case] name: &str) {
		assert_eq!(lookup_tag(name), Some(TagKind::Void));
	}

	#[rstest]
	#[case("div")]
	#[case("a")]
	#[case("h1")]
	#[case("h6")]
	#[case("xmp")]
	#[case("svg")]
	fn test_normal_tags(#[case] name: &str) {
		assert_eq!(lookup_tag(name), Some(TagKind::Normal));
	}

	#[rstest]
	fn test_tag_table_has_unique_names() {
		assert_eq!(tag_index().len(), HTML_TAGS.len());
	}

	#[rstest]
	#[case("div", true)]
	#[case("my-widget", true)]
	#[case("h1", true)]
	#[case("", false)]
	#[case("1div", false)]
	#[case("div class", false)]
	#[case("div>", false)]
	#[case("-x", false)]
	fn test_is_valid_tag_name(#[case] name: &str, #[case] expected: bool) {
		assert_eq!(is_valid_tag_name(name), expected);
	}

	#[rstest]
	fn test_tag_accessors() {
		// Arrange
		let tag = Tag::new("img", TagKind::Void);

		// Assert
		assert_eq!(tag.name(), "img");
		assert_eq!(tag.kind(), TagKind::Void);
		assert!(tag.is_void());
		assert!(!tag.is_root());
		assert!(Tag::root().is_root());
		assert_eq!(tag.to_string(), "img");
	}
}
