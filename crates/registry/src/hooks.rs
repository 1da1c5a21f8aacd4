//! Overridable registry behavior.
//!
//! Specialized registries customize how they describe themselves and how they
//! react to name collisions by supplying a [`RegistryHooks`] implementation.
//! Every method has a default, so an implementation overrides only what it needs.

use crate::{RegistryError, Result};

/// Customization points of a [`Registry`](crate::Registry).
pub trait RegistryHooks<T> {
	/// Type display name override. `None` uses the simple name of `T`.
	fn type_display_name(&self) -> Option<String> {
		None
	}

	/// Called instead of inserting when `entity` is named like an existing member.
	///
	/// Returning `Ok(())` makes `add` report `Ok(false)`; returning an error
	/// makes `add` fail with it.
	fn on_duplicate(&self, type_name: &str, name: &str, entity: &T) -> Result<()> {
		let _ = (type_name, name, entity);
		Ok(())
	}

	/// Builds the error returned by `get_by_name` for a missing `name`.
	fn not_found(&self, type_name: &str, name: &str) -> RegistryError {
		RegistryError::not_found(type_name, name)
	}
}

/// Hooks with every default in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl<T> RegistryHooks<T> for DefaultHooks {}

/// Hooks that only override the type display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(pub String);

impl<T> RegistryHooks<T> for DisplayName {
	fn type_display_name(&self) -> Option<String> {
		Some(self.0.clone())
	}
}
