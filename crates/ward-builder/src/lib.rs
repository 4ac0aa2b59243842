//! # Ward Builder
//!
//! Fluent construction and serialization of HTML element trees.
//!
//! Every attribute assignment goes through the generator's policy table
//! (see `ward-security`), and every piece of text is escaped when it is
//! added. The tree therefore only ever holds sanitized values, and the
//! serializer writes them unchanged.
//!
//! ## Example
//!
//! ```
//! use ward_builder::Generator;
//!
//! let generator = Generator::default();
//! let container = generator.root().div().attr("class", "container");
//! container.div().add_text("Hi");
//!
//! assert_eq!(
//!     generator.generate(),
//!     r#"<div class="container"><div>Hi</div></div>"#
//! );
//! ```

pub mod attributes;
pub mod element;
pub mod generator;
mod render;
pub mod tag;
pub mod tags;

pub use attributes::AttributeValue;
pub use element::{Element, KeyValue, kv};
pub use generator::Generator;
pub use tag::{Tag, TagKind, TagSpec, lookup_tag};
pub use tags::HTML_TAGS;
