//! # Ward
//!
//! A fluent HTML builder that sanitizes as it builds.
//!
//! Ward assembles an element tree through chained calls and serializes it to
//! a string. Untrusted input can be passed straight to the builder:
//!
//! - text content is HTML-escaped;
//! - attribute values are escaped, and URL attributes (`href`, `src`,
//!   `action`, htmx request attributes, ...) are validated, with unsafe URLs
//!   replaced by `#`;
//! - attributes outside the allow-list (event handlers and the like) are
//!   stored as `data-` attributes and never become live.
//!
//! ## Crates
//!
//! - [`security`]: escaping, URL validation and the attribute policy table
//! - [`builder`]: element tree, tag constructors and serializer
//! - [`conf`]: TOML-loadable generator settings
//!
//! ## Quick Start
//!
//! ```
//! use ward::prelude::*;
//!
//! let generator = Generator::default();
//! let card = generator
//!     .root()
//!     .div()
//!     .with_attrs([kv("class", "card"), kv("onclick", "steal()")]);
//! card.a()
//!     .attr("href", "javascript:alert(1)")
//!     .add_text("<click>");
//!
//! let html = generator.generate();
//! assert!(html.contains(r#"data-onclick="steal()""#));
//! assert!(html.contains(r##"<a href="#">&lt;click&gt;</a>"##));
//! ```
//!
//! ## Logging
//!
//! Sanitization decisions are reported as `tracing` debug events and
//! builder misuse (children on a void element, malformed names) as warning
//! events. No subscriber is installed by the library.

pub use ward_builder as builder;
pub use ward_conf as conf;
pub use ward_security as security;

pub use ward_builder::{Element, Generator, KeyValue, Tag, TagKind, kv};
pub use ward_conf::{ConfError, ConfResult, GeneratorSettings};
pub use ward_security::{
	AccumulationMode, Attribute, AttributePolicy, PolicyTable, escape_html, sanitize_url,
};

/// Common imports
pub mod prelude {
	pub use crate::{
		AccumulationMode, Attribute, AttributePolicy, Element, Generator, GeneratorSettings,
		KeyValue, kv,
	};
}
