use crate::rule::RuleError;

/// Registry operation errors.
///
/// None of these are retried internally; they surface synchronously to the
/// caller, which decides the recovery policy.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	/// No member had the requested name, even after rule application.
	#[error("{message}")]
	NotFound {
		/// The requested name.
		name: String,
		/// Display message, built by the registry's hooks.
		message: String,
	},

	/// An entity's name collided with an existing member under a failing duplicate policy.
	#[error("Cannot add a {type_name} with name '{name}' as a {type_name} with that name already exists.")]
	Duplicate {
		/// Type display name of the registry.
		type_name: String,
		/// The colliding name.
		name: String,
	},

	/// A member was found by name but the backing store refused to remove it.
	#[error("found '{name}' but the backing store refused to remove it")]
	StoreContract {
		/// The name the member was found under.
		name: String,
	},

	/// A rule failed while resolving a name.
	#[error("rule '{description}' failed: {source}")]
	Rule {
		/// Description of the failing rule.
		description: String,
		/// The rule's error.
		#[source]
		source: RuleError,
	},
}

impl RegistryError {
	/// Builds the default not-found error: `"<type> with name '<name>' not found."`.
	pub fn not_found(type_name: &str, name: &str) -> Self {
		Self::NotFound {
			name: name.to_owned(),
			message: format!("{type_name} with name '{name}' not found."),
		}
	}

	/// Returns the requested name if this is a not-found error.
	pub fn missing_name(&self) -> Option<&str> {
		match self {
			Self::NotFound { name, .. } => Some(name),
			_ => None,
		}
	}

	/// Follows nested rule failures down to the not-found error that caused them.
	///
	/// A rule that resolves another name with `?` turns that lookup's
	/// [`RegistryError::NotFound`] into the source of a [`RegistryError::Rule`];
	/// this returns that innermost not-found error, or `self` if it already is one.
	pub fn root_not_found(&self) -> Option<&RegistryError> {
		let mut current = self;
		loop {
			match current {
				Self::NotFound { .. } => return Some(current),
				Self::Rule { source, .. } => current = source.downcast_ref::<RegistryError>()?,
				_ => return None,
			}
		}
	}
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The TOML document did not parse or did not match the schema.
	#[error("invalid registry config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Result alias for registry operations.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
