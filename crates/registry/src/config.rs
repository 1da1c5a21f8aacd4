//! Declarative registry configuration.
//!
//! A [`RegistryConfig`] is the data-only way to specialize a registry: it is
//! itself a [`RegistryHooks`] implementation, so it can be handed straight to
//! [`Registry::with_config`](crate::Registry::with_config).
//!
//! ```toml
//! type-display-name = "Task"
//! duplicate-policy = "fail"
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::{RegistryError, RegistryHooks, Result};

/// What `add` does with an entity named like an existing member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Keep the existing member; `add` returns `Ok(false)`.
	#[default]
	Ignore,
	/// Fail `add` with [`RegistryError::Duplicate`].
	Fail,
}

/// Registry settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct RegistryConfig {
	/// Overrides the type display name used in messages.
	pub type_display_name: Option<String>,
	/// Collision handling.
	pub duplicate_policy: DuplicatePolicy,
}

impl RegistryConfig {
	/// Parses a TOML document.
	pub fn from_toml_str(input: &str) -> std::result::Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Sets the type display name.
	pub fn with_type_display_name(mut self, name: impl Into<String>) -> Self {
		self.type_display_name = Some(name.into());
		self
	}

	/// Sets the duplicate policy.
	pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.duplicate_policy = policy;
		self
	}
}

impl<T> RegistryHooks<T> for RegistryConfig {
	fn type_display_name(&self) -> Option<String> {
		self.type_display_name.clone()
	}

	fn on_duplicate(&self, type_name: &str, name: &str, _entity: &T) -> Result<()> {
		match self.duplicate_policy {
			DuplicatePolicy::Ignore => Ok(()),
			DuplicatePolicy::Fail => Err(RegistryError::Duplicate {
				type_name: type_name.to_owned(),
				name: name.to_owned(),
			}),
		}
	}
}
