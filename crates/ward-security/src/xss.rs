//! HTML escaping for text content and attribute values

use std::borrow::Cow;

/// Characters that can break out of a text or quoted-attribute context.
const SPECIAL_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Entity that replaces `ch`, or `None` if `ch` is safe as-is.
fn entity_for(ch: char) -> Option<&'static str> {
	match ch {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'"' => Some("&quot;"),
		'\'' => Some("&#x27;"),
		_ => None,
	}
}

/// Encodes a string for use as element text or as a quoted attribute value.
///
/// Ampersands, angle brackets and both quote characters become character
/// references; nothing else is touched. Input without any of them comes
/// back borrowed.
///
/// Applying the function twice encodes the `&` of the first pass again, so
/// each value must be escaped exactly once.
///
/// # Examples
///
/// ```
/// use ward_security::escape_html;
///
/// let input = "<script>alert('XSS')</script>";
/// assert_eq!(escape_html(input), "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape_html("&amp;"), "&amp;amp;");
/// ```
pub fn escape_html(input: &str) -> Cow<'_, str> {
	let Some(first) = input.find(SPECIAL_CHARS) else {
		return Cow::Borrowed(input);
	};

	let (clean, rest) = input.split_at(first);
	let mut escaped = String::with_capacity(input.len() + 16);
	escaped.push_str(clean);
	for ch in rest.chars() {
		match entity_for(ch) {
			Some(entity) => escaped.push_str(entity),
			None => escaped.push(ch),
		}
	}
	Cow::Owned(escaped)
}

/// Escape a value into an owned string
///
/// Convenience for sanitizers, which always produce owned values.
pub fn escape_html_owned(input: &str) -> String {
	escape_html(input).into_owned()
}

/// Returns `true` if `text` ends with a character reference such as
/// `&amp;` or `&#x27;`.
///
/// Used when joining escaped `style` declarations: the `;` closing an
/// entity is not a declaration terminator.
///
/// # Examples
///
/// ```
/// use ward_security::xss::ends_with_entity;
///
/// assert!(ends_with_entity("font-family: &#x27;Fira&#x27;"));
/// assert!(ends_with_entity("a &amp;"));
/// assert!(!ends_with_entity("color: red;"));
/// assert!(!ends_with_entity("&#x27;a&#x27;;"));
/// ```
pub fn ends_with_entity(text: &str) -> bool {
	let Some(body) = text.strip_suffix(';') else {
		return false;
	};
	match body.rfind('&') {
		Some(amp) => {
			let name = &body[amp + 1..];
			!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '#')
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_html_no_special_chars_borrows() {
		// Act
		let escaped = escape_html("Hello World");

		// Assert
		assert!(matches!(escaped, Cow::Borrowed("Hello World")));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("\"test\" 'value'", "&quot;test&quot; &#x27;value&#x27;")]
	#[case(r#"<>&"'"#, "&lt;&gt;&amp;&quot;&#x27;")]
	#[case("clean prefix then <tag>", "clean prefix then &lt;tag&gt;")]
	fn test_escape_html_special_chars(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_html(input), expected);
	}

	#[rstest]
	fn test_escape_html_is_not_idempotent() {
		// Arrange
		let once = escape_html_owned("<b>");

		// Act
		let twice = escape_html_owned(&once);

		// Assert
		assert_eq!(twice, "&amp;lt;b&amp;gt;");
	}

	#[rstest]
	fn test_escape_html_keeps_non_ascii() {
		assert_eq!(escape_html("こんにちは <世界>"), "こんにちは &lt;世界&gt;");
	}

	#[rstest]
	#[case("color: &quot;x&quot;", true)]
	#[case("&lt;", true)]
	#[case("color: red;", false)]
	#[case("color: red", false)]
	#[case("&;", false)]
	#[case("a & b;", false)]
	fn test_ends_with_entity(#[case] input: &str, #[case] expected: bool) {
		assert_eq!(ends_with_entity(input), expected);
	}
}
