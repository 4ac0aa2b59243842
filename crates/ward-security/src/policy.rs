//! Attribute policies
//!
//! Every attribute assignment is routed through a [`PolicyTable`]. The table
//! maps an attribute name to an [`AttributePolicy`]: whether the attribute is
//! allowed, which [`Sanitizer`] cleans its value, and how repeated
//! assignments combine ([`AccumulationMode`]).
//!
//! Names that are not in the table are never emitted verbatim. They either
//! carry a pass-through prefix (`js-`, `data-` by default) or are demoted to
//! `data-<name>`, which turns event handlers such as `onclick` into inert
//! custom data.
//!
//! ## Example
//!
//! ```
//! use ward_security::policy::{AccumulationMode, PolicyTable};
//!
//! let table = PolicyTable::default();
//!
//! let resolved = table.resolve("onclick", "alert(1)");
//! assert_eq!(resolved.name, "data-onclick");
//! assert_eq!(resolved.mode, AccumulationMode::Replace);
//!
//! let resolved = table.resolve("href", "javascript:alert(1)");
//! assert_eq!(resolved.value, "#");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::url::sanitize_url;
use crate::xss::escape_html_owned;

/// Prefix given to attributes that are not covered by the table
pub const DEMOTION_PREFIX: &str = "data-";

/// Prefixes whose attributes are stored under their own name
pub const DEFAULT_PASS_THROUGH_PREFIXES: &[&str] = &["js-", "data-"];

/// Sanitization transform applied to an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sanitizer {
	/// Entity-encode the value
	Escape,
	/// Validate the URL scheme, then entity-encode the serialized URL
	Url,
}

impl Sanitizer {
	/// Run the transform on a raw value.
	pub fn apply(self, value: &str) -> String {
		match self {
			Self::Escape => escape_html_owned(value),
			Self::Url => sanitize_url(value),
		}
	}
}

/// How repeated assignments of one attribute combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccumulationMode {
	/// The latest value wins
	Replace,
	/// Values are split into whitespace-separated tokens and accumulated (`class`)
	AppendSpaceSeparated,
	/// Each value is accumulated as one declaration block (`style`)
	AppendSemicolonSeparated,
}

/// Allow/deny decision, sanitizer and accumulation mode for one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributePolicy {
	pub allowed: bool,
	pub sanitizer: Sanitizer,
	pub mode: AccumulationMode,
}

impl AttributePolicy {
	/// Allowed, escape-only, replaced on reassignment.
	pub const fn escaped() -> Self {
		Self {
			allowed: true,
			sanitizer: Sanitizer::Escape,
			mode: AccumulationMode::Replace,
		}
	}

	/// Allowed, URL-validated, replaced on reassignment.
	pub const fn url() -> Self {
		Self {
			allowed: true,
			sanitizer: Sanitizer::Url,
			mode: AccumulationMode::Replace,
		}
	}

	/// Present in the table but not allowed. A denied attribute is treated
	/// like an unknown one.
	pub const fn denied() -> Self {
		Self {
			allowed: false,
			sanitizer: Sanitizer::Escape,
			mode: AccumulationMode::Replace,
		}
	}

	/// Same policy with a different accumulation mode.
	pub const fn accumulate(self, mode: AccumulationMode) -> Self {
		Self { mode, ..self }
	}
}

/// Declarative entry of a built-in policy set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyRecord {
	pub name: &'static str,
	pub policy: AttributePolicy,
}

impl PolicyRecord {
	const fn escaped(name: &'static str) -> Self {
		Self {
			name,
			policy: AttributePolicy::escaped(),
		}
	}

	const fn url(name: &'static str) -> Self {
		Self {
			name,
			policy: AttributePolicy::url(),
		}
	}

	const fn accumulate(self, mode: AccumulationMode) -> Self {
		Self {
			name: self.name,
			policy: self.policy.accumulate(mode),
		}
	}
}

/// Structural and content attributes, escape-only.
pub static DEFAULT_POLICIES: &[PolicyRecord] = &[
	PolicyRecord::escaped("accept"),
	PolicyRecord::escaped("accept-charset"),
	PolicyRecord::escaped("accesskey"),
	PolicyRecord::escaped("allow"),
	PolicyRecord::escaped("alt"),
	PolicyRecord::escaped("as"),
	PolicyRecord::escaped("async"),
	PolicyRecord::escaped("autocapitalize"),
	PolicyRecord::escaped("autocomplete"),
	PolicyRecord::escaped("autoplay"),
	PolicyRecord::escaped("background"),
	PolicyRecord::escaped("bgcolor"),
	PolicyRecord::escaped("border"),
	PolicyRecord::escaped("capture"),
	PolicyRecord::escaped("charset"),
	PolicyRecord::escaped("checked"),
	PolicyRecord::escaped("cite"),
	PolicyRecord::escaped("class").accumulate(AccumulationMode::AppendSpaceSeparated),
	PolicyRecord::escaped("color"),
	PolicyRecord::escaped("cols"),
	PolicyRecord::escaped("colspan"),
	PolicyRecord::escaped("content"),
	PolicyRecord::escaped("contenteditable"),
	PolicyRecord::escaped("controls"),
	PolicyRecord::escaped("coords"),
	PolicyRecord::escaped("crossorigin"),
	PolicyRecord::escaped("data"),
	PolicyRecord::escaped("datetime"),
	PolicyRecord::escaped("decoding"),
	PolicyRecord::escaped("default"),
	PolicyRecord::escaped("defer"),
	PolicyRecord::escaped("dir"),
	PolicyRecord::escaped("dirname"),
	PolicyRecord::escaped("disabled"),
	PolicyRecord::escaped("download"),
	PolicyRecord::escaped("draggable"),
	PolicyRecord::escaped("enctype"),
	PolicyRecord::escaped("enterkeyhint"),
	PolicyRecord::escaped("for"),
	PolicyRecord::escaped("form"),
	PolicyRecord::escaped("formenctype"),
	PolicyRecord::escaped("formmethod"),
	PolicyRecord::escaped("formnovalidate"),
	PolicyRecord::escaped("formtarget"),
	PolicyRecord::escaped("headers"),
	PolicyRecord::escaped("height"),
	PolicyRecord::escaped("hidden"),
	PolicyRecord::escaped("high"),
	PolicyRecord::escaped("hreflang"),
	PolicyRecord::escaped("http-equiv"),
	PolicyRecord::escaped("id"),
	PolicyRecord::escaped("integrity"),
	PolicyRecord::escaped("inputmode"),
	PolicyRecord::escaped("ismap"),
	PolicyRecord::escaped("itemprop"),
	PolicyRecord::escaped("kind"),
	PolicyRecord::escaped("label"),
	PolicyRecord::escaped("lang"),
	PolicyRecord::escaped("loading"),
	PolicyRecord::escaped("list"),
	PolicyRecord::escaped("loop"),
	PolicyRecord::escaped("low"),
	PolicyRecord::escaped("max"),
	PolicyRecord::escaped("maxlength"),
	PolicyRecord::escaped("minlength"),
	PolicyRecord::escaped("media"),
	PolicyRecord::escaped("method"),
	PolicyRecord::escaped("min"),
	PolicyRecord::escaped("multiple"),
	PolicyRecord::escaped("muted"),
	PolicyRecord::escaped("name"),
	PolicyRecord::escaped("novalidate"),
	PolicyRecord::escaped("open"),
	PolicyRecord::escaped("optimum"),
	PolicyRecord::escaped("pattern"),
	PolicyRecord::escaped("placeholder"),
	PolicyRecord::escaped("playsinline"),
	PolicyRecord::escaped("preload"),
	PolicyRecord::escaped("readonly"),
	PolicyRecord::escaped("referrerpolicy"),
	PolicyRecord::escaped("rel"),
	PolicyRecord::escaped("required"),
	PolicyRecord::escaped("reversed"),
	PolicyRecord::escaped("role"),
	PolicyRecord::escaped("rows"),
	PolicyRecord::escaped("rowspan"),
	PolicyRecord::escaped("sandbox"),
	PolicyRecord::escaped("scope"),
	PolicyRecord::escaped("selected"),
	PolicyRecord::escaped("shape"),
	PolicyRecord::escaped("size"),
	PolicyRecord::escaped("sizes"),
	PolicyRecord::escaped("slot"),
	PolicyRecord::escaped("span"),
	PolicyRecord::escaped("spellcheck"),
	PolicyRecord::escaped("srcdoc"),
	PolicyRecord::escaped("srclang"),
	PolicyRecord::escaped("start"),
	PolicyRecord::escaped("step"),
	PolicyRecord::escaped("style").accumulate(AccumulationMode::AppendSemicolonSeparated),
	PolicyRecord::escaped("tabindex"),
	PolicyRecord::escaped("target"),
	PolicyRecord::escaped("title"),
	PolicyRecord::escaped("translate"),
	PolicyRecord::escaped("type"),
	PolicyRecord::escaped("usemap"),
	PolicyRecord::escaped("value"),
	PolicyRecord::escaped("width"),
	PolicyRecord::escaped("wrap"),
];

/// URL-carrying attributes, including the htmx request attributes.
pub static URL_POLICIES: &[PolicyRecord] = &[
	PolicyRecord::url("href"),
	PolicyRecord::url("src"),
	PolicyRecord::url("action"),
	PolicyRecord::url("formaction"),
	PolicyRecord::url("srcset"),
	PolicyRecord::url("ping"),
	PolicyRecord::url("poster"),
	PolicyRecord::url("hx-get"),
	PolicyRecord::url("hx-post"),
	PolicyRecord::url("hx-put"),
	PolicyRecord::url("hx-patch"),
	PolicyRecord::url("hx-delete"),
];

/// Caller-declared attribute allowed with escape-only sanitization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
	pub name: String,
}

impl Attribute {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

impl From<&str> for Attribute {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

/// Result of routing one assignment through the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute<'a> {
	/// Name the value is stored under
	pub name: Cow<'a, str>,
	/// Sanitized value
	pub value: String,
	/// How the value combines with earlier assignments
	pub mode: AccumulationMode,
}

/// Returns `true` if `name` can be emitted as an attribute name.
///
/// Rejects the empty string and anything that could end the name early:
/// whitespace, quotes, `<`, `>`, `/`, `=` and control characters.
///
/// # Examples
///
/// ```
/// use ward_security::policy::is_valid_attribute_name;
///
/// assert!(is_valid_attribute_name("data-id"));
/// assert!(is_valid_attribute_name("hx-get"));
/// assert!(!is_valid_attribute_name(""));
/// assert!(!is_valid_attribute_name("x onload"));
/// assert!(!is_valid_attribute_name("x\"y"));
/// ```
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace()
				|| c.is_control()
				|| matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
		})
}

/// Mapping from attribute name to policy, plus pass-through prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
	policies: HashMap<String, AttributePolicy>,
	pass_through_prefixes: Vec<String>,
}

impl Default for PolicyTable {
	fn default() -> Self {
		Self::builtin()
	}
}

impl PolicyTable {
	/// Build the table with the built-in sets and no custom attributes.
	pub fn builtin() -> Self {
		let mut policies = HashMap::with_capacity(DEFAULT_POLICIES.len() + URL_POLICIES.len());
		for record in DEFAULT_POLICIES.iter().chain(URL_POLICIES) {
			policies.insert(record.name.to_string(), record.policy);
		}
		Self {
			policies,
			pass_through_prefixes: DEFAULT_PASS_THROUGH_PREFIXES
				.iter()
				.map(|prefix| prefix.to_string())
				.collect(),
		}
	}

	/// Build the table and merge custom attributes into it.
	///
	/// A custom name that collides with a built-in entry never replaces it:
	/// declaring `href` as custom keeps URL validation on `href`.
	pub fn new(custom: &[Attribute]) -> Self {
		let mut table = Self::builtin();
		for attribute in custom {
			table.allow_custom(&attribute.name);
		}
		table
	}

	/// Allow `name` with escape-only sanitization unless it already has an
	/// entry. Returns `true` if a new entry was added.
	pub fn allow_custom(&mut self, name: &str) -> bool {
		if !is_valid_attribute_name(name) {
			tracing::warn!(attribute = name, "ignoring custom attribute with invalid name");
			return false;
		}
		if self.policies.contains_key(name) {
			tracing::debug!(attribute = name, "custom attribute keeps its built-in policy");
			return false;
		}
		self.policies
			.insert(name.to_string(), AttributePolicy::escaped());
		true
	}

	/// Register a policy, overwriting any existing entry.
	pub fn register(&mut self, name: &str, policy: AttributePolicy) {
		if !is_valid_attribute_name(name) {
			tracing::warn!(attribute = name, "ignoring policy registration with invalid name");
			return;
		}
		self.policies.insert(name.to_string(), policy);
	}

	/// Mark `name` as not allowed. Assignments to it are then handled like
	/// assignments to an unknown attribute.
	pub fn deny(&mut self, name: &str) {
		self.register(name, AttributePolicy::denied());
	}

	/// Add a prefix whose attributes are stored under their own name.
	pub fn add_pass_through_prefix(&mut self, prefix: &str) {
		if !is_valid_attribute_name(prefix) {
			tracing::warn!(prefix, "ignoring invalid pass-through prefix");
			return;
		}
		if !self.pass_through_prefixes.iter().any(|p| p == prefix) {
			self.pass_through_prefixes.push(prefix.to_string());
		}
	}

	pub fn pass_through_prefixes(&self) -> &[String] {
		&self.pass_through_prefixes
	}

	pub fn get(&self, name: &str) -> Option<&AttributePolicy> {
		self.policies.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.policies.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.policies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.policies.is_empty()
	}

	/// Decide where and how an assignment of `value` to `key` is stored.
	///
	/// 1. Allowed entry: the entry's sanitizer and mode.
	/// 2. Otherwise, a key with a pass-through prefix is escaped and stored
	///    under its own name.
	/// 3. Anything else is escaped and stored under `data-<key>`.
	///
	/// The caller is responsible for rejecting names that fail
	/// [`is_valid_attribute_name`].
	pub fn resolve<'k>(&self, key: &'k str, value: &str) -> ResolvedAttribute<'k> {
		if let Some(policy) = self.policies.get(key).filter(|policy| policy.allowed) {
			return ResolvedAttribute {
				name: Cow::Borrowed(key),
				value: policy.sanitizer.apply(value),
				mode: policy.mode,
			};
		}

		let name = if self.has_pass_through_prefix(key) {
			Cow::Borrowed(key)
		} else {
			tracing::debug!(attribute = key, "attribute demoted to data attribute");
			Cow::Owned(format!("{DEMOTION_PREFIX}{key}"))
		};
		ResolvedAttribute {
			name,
			value: escape_html_owned(value),
			mode: AccumulationMode::Replace,
		}
	}

	fn has_pass_through_prefix(&self, key: &str) -> bool {
		self.pass_through_prefixes
			.iter()
			.any(|prefix| key.starts_with(prefix.as_str()))
	}
}
