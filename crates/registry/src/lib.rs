//! Named entity registries with lazy rule resolution.
//!
//! # Purpose
//!
//! Declarative build and orchestration tools let users refer to entities
//! (tasks, configurations, extensions) by name before those entities exist.
//! A [`Registry`] makes that work: it keeps names unique, consults an ordered
//! list of [`Rule`]s to materialize a missing name on lookup, and hands out
//! [`FilteredView`]s that stay in sync with it.
//!
//! # Mental Model
//!
//! 1. **Storage:** entities live in a shared [`Store`](nomen_collections::Store);
//!    the registry only names them, through its [`Namer`].
//! 2. **Lookup:** [`Registry::find_by_name`] scans the store. On a miss it runs
//!    every rule once for that name and scans again.
//! 3. **Reentrancy:** a rule may look up the name it is resolving. The nested
//!    lookup does not rerun rules; it just reports what the store holds.
//! 4. **Views:** [`Registry::with_type`] and [`Registry::matching`] return
//!    registries over a live projection of the same store and event channel,
//!    with their own, initially empty, rule list.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Registry`] | Name-unique, rule-resolving index over a store. |
//! | [`FilteredView`] | A registry over a filtered projection of a parent. |
//! | [`Rule`] / [`FnRule`] | Lazy materialization callbacks. |
//! | [`RegistryHooks`] | Type display name, not-found and duplicate customization. |
//! | [`RegistryConfig`] | Declarative hooks, loadable from TOML. |
//! | [`NamedLookup`] | Lookup capability for adapter layers. |
//!
//! # Threading
//!
//! Registries are single-threaded (`!Send`, `!Sync`). A registry and all of
//! its views share mutable state; callers serialize access to the whole family.
//!
//! # Example
//!
//! ```
//! use nomen_registry::Registry;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Task {
//! 	name: String,
//! }
//!
//! let tasks: Registry<Task> = Registry::new(|task: &Task| task.name.clone());
//! tasks.add_rule_fn("clean<Task>", |tasks, name| {
//! 	if name.starts_with("clean") {
//! 		tasks.add(Task { name: name.to_owned() })?;
//! 	}
//! 	Ok(())
//! });
//!
//! assert!(!tasks.has_name("cleanBuild"));
//! assert_eq!(tasks.get_by_name("cleanBuild").unwrap().name, "cleanBuild");
//! assert!(tasks.get_by_name("build").is_err());
//! ```

mod config;
mod error;
mod guard;
mod hooks;
mod lookup;
mod namer;
mod registry;
mod rule;
mod view;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{ConfigError, RegistryError, Result};
pub use hooks::{DefaultHooks, DisplayName, RegistryHooks};
pub use lookup::NamedLookup;
pub use namer::{Namer, simple_type_name};
pub use nomen_collections::{CollectionFilter, Subtype};
pub use registry::Registry;
pub use rule::{FnRule, Rule, RuleAction, RuleError};
pub use view::FilteredView;
