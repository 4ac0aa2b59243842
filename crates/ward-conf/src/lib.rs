//! # Ward Configuration
//!
//! Declarative settings for building a Ward `Generator`.
//!
//! Settings can be assembled in code with the `with_*` builder methods or
//! loaded from TOML:
//!
//! ```toml
//! pass_through_prefixes = ["aria-"]
//!
//! [[custom_attributes]]
//! name = "hx-target"
//! ```
//!
//! ## Example
//!
//! ```
//! use ward_conf::GeneratorSettings;
//!
//! let settings = GeneratorSettings::from_toml_str(
//!     r#"
//!     pass_through_prefixes = ["aria-"]
//!
//!     [[custom_attributes]]
//!     name = "hx-target"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.custom_attributes[0].name, "hx-target");
//! assert_eq!(settings.pass_through_prefixes, vec!["aria-".to_string()]);
//! ```

pub mod settings;

pub use settings::GeneratorSettings;

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfResult<T> = Result<T, ConfError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfError {
	/// The settings file could not be read
	#[error("failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The settings document is not valid TOML or has unknown keys
	#[error("failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// A custom attribute name cannot be emitted as an attribute
	#[error("invalid custom attribute name: {0:?}")]
	InvalidAttributeName(String),

	/// A pass-through prefix cannot start an attribute name
	#[error("invalid pass-through prefix: {0:?}")]
	InvalidPrefix(String),
}
