//! Name-based lookup capability.

use std::collections::BTreeMap;

use crate::{Registry, Result};

/// Read access by name, for adapters that expose registry members as named
/// attributes (configuration bridges, scripting layers).
///
/// Adapters depend on this trait rather than on [`Registry`], so any
/// name-indexed collection can back them.
pub trait NamedLookup<T> {
	/// Whether a member is named `name`, without applying rules.
	fn has_name(&self, name: &str) -> bool;

	/// Looks `name` up, applying rules on a miss.
	fn find_by_name(&self, name: &str) -> Result<Option<T>>;

	/// Looks `name` up, applying rules on a miss, failing if absent.
	fn get_by_name(&self, name: &str) -> Result<T>;

	/// Snapshot of all members keyed by name, in name order.
	fn as_name_map(&self) -> BTreeMap<String, T>;
}

impl<T> NamedLookup<T> for Registry<T>
where
	T: Clone + PartialEq + 'static,
{
	fn has_name(&self, name: &str) -> bool {
		Registry::has_name(self, name)
	}

	fn find_by_name(&self, name: &str) -> Result<Option<T>> {
		Registry::find_by_name(self, name)
	}

	fn get_by_name(&self, name: &str) -> Result<T> {
		Registry::get_by_name(self, name)
	}

	fn as_name_map(&self) -> BTreeMap<String, T> {
		Registry::as_name_map(self)
	}
}
