//! # Ward Security
//!
//! Sanitization primitives for the Ward HTML builder.
//!
//! ## Features
//!
//! - HTML escaping for text content and attribute values
//! - URL validation for `href`/`src`-class attributes
//! - Attribute policy table: allow/deny decisions, sanitizers and
//!   accumulation modes for `class` and `style`
//!
//! ## Example
//!
//! ```
//! use ward_security::{escape_html, sanitize_url, PolicyTable};
//!
//! assert_eq!(escape_html("<b>"), "&lt;b&gt;");
//! assert_eq!(sanitize_url("javascript:alert(1)"), "#");
//!
//! let table = PolicyTable::default();
//! assert_eq!(table.resolve("onclick", "x").name, "data-onclick");
//! ```

pub mod policy;
pub mod url;
pub mod xss;

pub use policy::{
	AccumulationMode, Attribute, AttributePolicy, PolicyRecord, PolicyTable, ResolvedAttribute,
	Sanitizer,
};
pub use self::url::{URL_FALLBACK, sanitize_url};
pub use xss::escape_html;
