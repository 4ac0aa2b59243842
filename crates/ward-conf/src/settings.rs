//! Generator settings

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ward_security::policy::{Attribute, PolicyTable, is_valid_attribute_name};

use crate::{ConfError, ConfResult};

/// Settings used to build a generator's policy table
///
/// Both lists extend the built-in policy: custom attributes never replace a
/// built-in entry, and the default `js-`/`data-` prefixes always apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
	/// Extra attributes allowed with escape-only sanitization.
	pub custom_attributes: Vec<Attribute>,
	/// Extra prefixes whose attributes keep their own name.
	pub pass_through_prefixes: Vec<String>,
}

impl GeneratorSettings {
	/// Creates empty settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a custom attribute.
	pub fn with_custom_attribute(mut self, name: impl Into<String>) -> Self {
		self.custom_attributes.push(Attribute::new(name));
		self
	}

	/// Adds a pass-through prefix.
	pub fn with_pass_through_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.pass_through_prefixes.push(prefix.into());
		self
	}

	/// Parses and validates settings from a TOML document.
	pub fn from_toml_str(source: &str) -> ConfResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> ConfResult<Self> {
		let path = path.as_ref();
		let source = fs::read_to_string(path).map_err(|source| ConfError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loading generator settings");
		Self::from_toml_str(&source)
	}

	/// Checks that every name can be emitted as an attribute name.
	pub fn validate(&self) -> ConfResult<()> {
		if let Some(attribute) = self
			.custom_attributes
			.iter()
			.find(|attribute| !is_valid_attribute_name(&attribute.name))
		{
			return Err(ConfError::InvalidAttributeName(attribute.name.clone()));
		}
		if let Some(prefix) = self
			.pass_through_prefixes
			.iter()
			.find(|prefix| !is_valid_attribute_name(prefix))
		{
			return Err(ConfError::InvalidPrefix(prefix.clone()));
		}
		Ok(())
	}

	/// Builds the policy table described by these settings.
	pub fn policy_table(&self) -> PolicyTable {
		let mut table = PolicyTable::new(&self.custom_attributes);
		for prefix in &self.pass_through_prefixes {
			table.add_pass_through_prefix(prefix);
		}
		table
	}
}
