//! URL validation for URL-carrying attributes
//!
//! `href`, `src` and the other URL attributes go through [`sanitize_url`]
//! before they are stored on an element. A value is either re-serialized and
//! escaped, or replaced by [`URL_FALLBACK`].
//!
//! Only the `javascript` scheme is rejected among absolute URLs. Relative
//! references must carry a rooted path. Protocol-relative references such as
//! `//cdn.example.com/app.js` have a rooted path and are accepted.

use url::{ParseError, Position, Url};

use crate::xss::escape_html_owned;

/// Value stored in place of a rejected URL
pub const URL_FALLBACK: &str = "#";

/// Base used to resolve relative references; it is stripped off again
/// before the reference is serialized.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Why a URL was replaced by [`URL_FALLBACK`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
	/// The value could not be parsed as a URL, or is a relative reference
	/// containing a tab or line break
	Unparseable,
	/// The scheme is `javascript`
	JavascriptScheme,
	/// Relative reference whose path does not start with `/`
	UnrootedRelative,
}

/// Outcome of [`classify_url`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlVerdict {
	/// The URL is allowed; holds its serialized (unescaped) form
	Safe(String),
	/// The URL must be replaced by [`URL_FALLBACK`]
	Rejected(RejectReason),
}

/// Classify a candidate URL without escaping it
///
/// # Examples
///
/// ```
/// use ward_security::url::{classify_url, RejectReason, UrlVerdict};
///
/// assert_eq!(
///     classify_url("JavaScript:alert(1)"),
///     UrlVerdict::Rejected(RejectReason::JavascriptScheme)
/// );
/// assert_eq!(classify_url("/a/b"), UrlVerdict::Safe("/a/b".to_string()));
/// assert_eq!(
///     classify_url("foo/bar"),
///     UrlVerdict::Rejected(RejectReason::UnrootedRelative)
/// );
/// ```
pub fn classify_url(input: &str) -> UrlVerdict {
	match Url::parse(input) {
		Ok(url) if url.scheme() == "javascript" => UrlVerdict::Rejected(RejectReason::JavascriptScheme),
		Ok(url) => UrlVerdict::Safe(url.into()),
		Err(ParseError::RelativeUrlWithoutBase) => classify_relative(input),
		Err(_) => UrlVerdict::Rejected(RejectReason::Unparseable),
	}
}

/// Sanitize a URL attribute value
///
/// Returns the escaped, re-serialized URL, or `"#"` if the value is not
/// parseable, uses the `javascript` scheme, or is a relative reference
/// without a rooted path.
///
/// # Examples
///
/// ```
/// use ward_security::sanitize_url;
///
/// assert_eq!(sanitize_url("javascript:alert('xss')"), "#");
/// assert_eq!(sanitize_url("foo/bar"), "#");
/// assert_eq!(sanitize_url("/a/b"), "/a/b");
/// assert_eq!(
///     sanitize_url("https://example.com/?q=1&lang=en"),
///     "https://example.com/?q=1&amp;lang=en"
/// );
/// ```
pub fn sanitize_url(input: &str) -> String {
	match classify_url(input) {
		UrlVerdict::Safe(serialized) => escape_html_owned(&serialized),
		UrlVerdict::Rejected(reason) => {
			tracing::debug!(?reason, "URL attribute value replaced by fallback");
			URL_FALLBACK.to_string()
		}
	}
}

fn classify_relative(reference: &str) -> UrlVerdict {
	// The parser drops these before resolving, which can turn `/\t/host`
	// into the network path `//host`.
	if reference.contains(['\t', '\n', '\r']) {
		return UrlVerdict::Rejected(RejectReason::Unparseable);
	}
	if !reference_path(reference).starts_with('/') {
		return UrlVerdict::Rejected(RejectReason::UnrootedRelative);
	}

	let resolved = Url::parse(RELATIVE_BASE).and_then(|base| base.join(reference));
	match resolved {
		Ok(resolved) if is_network_path(reference) => {
			UrlVerdict::Safe(format!("//{}", &resolved[Position::BeforeUsername..]))
		}
		Ok(resolved) => UrlVerdict::Safe(resolved[Position::BeforePath..].to_string()),
		Err(_) => UrlVerdict::Rejected(RejectReason::Unparseable),
	}
}

/// Path component of a relative reference: query and fragment removed and,
/// for `//authority/path` references, the authority skipped.
fn reference_path(reference: &str) -> &str {
	let end = reference.find(['?', '#']).unwrap_or(reference.len());
	let path = &reference[..end];
	if !is_network_path(path) {
		return path;
	}
	let after_slashes = &path[2..];
	match after_slashes.find(['/', '\\']) {
		Some(idx) => &after_slashes[idx..],
		None => "",
	}
}

// The parser treats `\` like `/` in http(s) references.
fn is_network_path(reference: &str) -> bool {
	let mut chars = reference.chars();
	matches!(
		(chars.next(), chars.next()),
		(Some('/' | '\\'), Some('/' | '\\'))
	)
}
