//! Resolution rules.

use std::fmt;

use crate::Registry;

/// Error returned by a failing rule.
///
/// Boxed so rules can `?` any error, including a [`RegistryError`](crate::RegistryError)
/// from a nested lookup.
pub type RuleError = Box<dyn std::error::Error + 'static>;

/// A named callback given a chance to materialize an entity for a requested name.
///
/// Rules run in registration order whenever a lookup misses. A rule decides for
/// itself whether `name` concerns it; when it does, it typically calls
/// [`Registry::add`] on the registry it is handed.
pub trait Rule<T> {
	/// Human-readable description, used in diagnostics and errors.
	fn description(&self) -> &str;

	/// Attempts to resolve `name` in `registry`.
	fn apply(&self, registry: &Registry<T>, name: &str) -> Result<(), RuleError>;
}

/// Signature of the closure behind a [`FnRule`].
pub type RuleAction<T> = dyn Fn(&Registry<T>, &str) -> Result<(), RuleError>;

/// A [`Rule`] made of a description and a closure.
pub struct FnRule<T> {
	description: String,
	action: Box<RuleAction<T>>,
}

impl<T> FnRule<T> {
	/// Creates a rule running `action` for every missed name.
	pub fn new<F>(description: impl Into<String>, action: F) -> Self
	where
		F: Fn(&Registry<T>, &str) -> Result<(), RuleError> + 'static,
	{
		Self {
			description: description.into(),
			action: Box::new(action),
		}
	}
}

impl<T> Rule<T> for FnRule<T> {
	fn description(&self) -> &str {
		&self.description
	}

	fn apply(&self, registry: &Registry<T>, name: &str) -> Result<(), RuleError> {
		(self.action)(registry, name)
	}
}

impl<T> fmt::Debug for FnRule<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnRule")
			.field("description", &self.description)
			.finish_non_exhaustive()
	}
}

impl<T> fmt::Display for FnRule<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Rule: {}", self.description)
	}
}
