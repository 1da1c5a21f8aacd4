//! The registry container.
//!
//! # Mental Model
//!
//! A [`Registry`] is an index over a shared [`Store`]: it never owns entities,
//! it names them on demand with its [`Namer`] and looks them up by scanning the
//! store. Lookups that miss give the registered [`Rule`]s one chance to
//! materialize the entity, then look again.
//!
//! # Invariants
//!
//! - At most one member per name, checked when adding.
//!   - Enforced in: [`Registry::add`] (direct lookup, rules not triggered).
//!   - Tested by: `tests/registry.rs::test_duplicate_add_keeps_existing`, `tests/properties.rs`.
//!   - Failure symptom: two members answer to the same name.
//!   - Not re-validated when a member's name-determining state changes after
//!     insertion; lookups then return the first member in store order.
//!
//! - Rule passes never nest for the same name.
//!   - Enforced in: `Registry::apply_rules` via `InFlight`.
//!   - Tested by: `tests/rules.rs::test_rule_looking_up_its_own_name_runs_once`.
//!   - Failure symptom: unbounded recursion.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

use nomen_collections::{EventChannel, EventRegister, Store, VecStore};
use tracing::{debug, error, trace};

use crate::guard::{InFlight, InFlightNames};
use crate::namer::simple_type_name;
use crate::rule::{FnRule, RuleError};
use crate::{DefaultHooks, Namer, RegistryConfig, RegistryError, RegistryHooks, Result, Rule};

/// A name-unique, rule-resolving index over a shared store of `T`.
///
/// All operations take `&self`: rules and event subscribers receive the
/// registry (or capture a handle to it) and may call back into it while an
/// operation is in progress.
pub struct Registry<T> {
	pub(crate) namer: Rc<dyn Namer<T>>,
	pub(crate) store: Rc<dyn Store<T>>,
	pub(crate) events: Rc<dyn EventChannel<T>>,
	hooks: Rc<dyn RegistryHooks<T>>,
	rules: RefCell<Vec<Rc<dyn Rule<T>>>>,
	applying: InFlightNames,
}

impl<T> Registry<T>
where
	T: Clone + PartialEq + 'static,
{
	/// Creates an empty registry over a fresh [`VecStore`] with default hooks.
	pub fn new<N>(namer: N) -> Self
	where
		N: Namer<T> + 'static,
	{
		Self::with_hooks(namer, DefaultHooks)
	}

	/// Creates an empty registry specialized by `config`.
	pub fn with_config<N>(namer: N, config: RegistryConfig) -> Self
	where
		N: Namer<T> + 'static,
	{
		Self::with_hooks(namer, config)
	}

	/// Creates an empty registry specialized by `hooks`.
	pub fn with_hooks<N, H>(namer: N, hooks: H) -> Self
	where
		N: Namer<T> + 'static,
		H: RegistryHooks<T> + 'static,
	{
		Self::from_parts(
			Rc::new(namer),
			Rc::new(VecStore::<T>::new()),
			Rc::new(EventRegister::<T>::new()),
			Rc::new(hooks),
		)
	}

	/// Creates a registry over an existing store and event channel.
	///
	/// The registry starts with no rules regardless of what else indexes `store`.
	pub fn from_parts(
		namer: Rc<dyn Namer<T>>,
		store: Rc<dyn Store<T>>,
		events: Rc<dyn EventChannel<T>>,
		hooks: Rc<dyn RegistryHooks<T>>,
	) -> Self {
		Self {
			namer,
			store,
			events,
			hooks,
			rules: RefCell::new(Vec::new()),
			applying: InFlightNames::default(),
		}
	}

	/// Adds `entity` unless a member already has its name.
	///
	/// On a collision the hooks' `on_duplicate` decides: by default nothing
	/// happens and `Ok(false)` is returned. `Ok(false)` is also returned when the
	/// store refuses the entity.
	pub fn add(&self, entity: T) -> Result<bool> {
		let name = self.namer.determine_name(&entity);
		if self.has_name(&name) {
			let type_name = self.type_display_name();
			debug!(registry = %type_name, name = %name, "name already taken");
			self.hooks.on_duplicate(&type_name, &name, &entity)?;
			return Ok(false);
		}
		if !self.store.insert(entity.clone()) {
			trace!(name = %name, "store refused entity");
			return Ok(false);
		}
		self.events.fire_added(&entity);
		Ok(true)
	}

	/// Adds every entity of `entities`, returning whether any was added.
	pub fn add_all<I>(&self, entities: I) -> Result<bool>
	where
		I: IntoIterator<Item = T>,
	{
		let mut changed = false;
		for entity in entities {
			changed |= self.add(entity)?;
		}
		Ok(changed)
	}

	/// Whether a member is named `name`. Does not apply rules.
	pub fn has_name(&self, name: &str) -> bool {
		self.find_by_name_without_rules(name).is_some()
	}

	/// Looks `name` up, applying rules once on a miss.
	pub fn find_by_name(&self, name: &str) -> Result<Option<T>> {
		if let Some(found) = self.find_by_name_without_rules(name) {
			return Ok(Some(found));
		}
		self.apply_rules(name)?;
		Ok(self.find_by_name_without_rules(name))
	}

	/// Looks `name` up, applying rules once on a miss, and fails if it is still absent.
	pub fn get_by_name(&self, name: &str) -> Result<T> {
		match self.find_by_name(name)? {
			Some(found) => Ok(found),
			None => Err(self.hooks.not_found(&self.type_display_name(), name)),
		}
	}

	/// Looks `name` up like [`Registry::get_by_name`] and hands the member to `configure`.
	pub fn configure_by_name<F>(&self, name: &str, configure: F) -> Result<T>
	where
		F: FnOnce(&T),
	{
		let found = self.get_by_name(name)?;
		configure(&found);
		Ok(found)
	}

	/// Removes the member named `name`. Does not apply rules.
	///
	/// A store that refuses to remove a member it just produced is a broken
	/// store; that is reported as [`RegistryError::StoreContract`].
	pub fn remove_by_name(&self, name: &str) -> Result<Option<T>> {
		let Some(found) = self.find_by_name_without_rules(name) else {
			return Ok(None);
		};
		if !self.store.remove(&found) {
			error!(registry = %self.type_display_name(), name = %name, "store refused to remove a member it returned");
			return Err(RegistryError::StoreContract {
				name: name.to_owned(),
			});
		}
		self.events.fire_removed(&found);
		Ok(Some(found))
	}

	/// Removes `entity`, returning whether it was a member.
	pub fn remove(&self, entity: &T) -> bool {
		if !self.store.remove(entity) {
			return false;
		}
		self.events.fire_removed(entity);
		true
	}

	/// Snapshot of the members keyed by name, in name order.
	pub fn as_name_map(&self) -> BTreeMap<String, T> {
		let mut map = BTreeMap::new();
		self.store.for_each(&mut |entity: &T| {
			map.insert(self.namer.determine_name(entity), entity.clone());
		});
		map
	}

	/// Names of the current members, in name order.
	pub fn names(&self) -> BTreeSet<String> {
		let mut names = BTreeSet::new();
		self.store.for_each(&mut |entity: &T| {
			names.insert(self.namer.determine_name(entity));
		});
		names
	}

	/// Snapshot of the members in store order.
	pub fn to_vec(&self) -> Vec<T> {
		self.store.to_vec()
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.store.len()
	}

	/// Whether the registry has no members.
	pub fn is_empty(&self) -> bool {
		self.store.is_empty()
	}

	/// Runs `action` for every member added from now on.
	pub fn when_added<F>(&self, action: F)
	where
		F: Fn(&T) + 'static,
	{
		self.events.on_added(Rc::new(action));
	}

	/// Runs `action` for every member removed from now on.
	pub fn when_removed<F>(&self, action: F)
	where
		F: Fn(&T) + 'static,
	{
		self.events.on_removed(Rc::new(action));
	}

	/// Runs `action` for every current member and every member added from now on.
	pub fn all<F>(&self, action: F)
	where
		F: Fn(&T) + 'static,
	{
		let action: Rc<dyn Fn(&T)> = Rc::new(action);
		let existing = self.store.to_vec();
		self.events.on_added(Rc::clone(&action));
		for entity in &existing {
			action(entity);
		}
	}

	/// Appends `rule` to the rule sequence and returns it.
	pub fn add_rule<R>(&self, rule: R) -> Rc<dyn Rule<T>>
	where
		R: Rule<T> + 'static,
	{
		let rule: Rc<dyn Rule<T>> = Rc::new(rule);
		self.rules.borrow_mut().push(Rc::clone(&rule));
		rule
	}

	/// Appends a rule made of `description` and `action` and returns it.
	pub fn add_rule_fn<F>(&self, description: impl Into<String>, action: F) -> Rc<dyn Rule<T>>
	where
		F: Fn(&Registry<T>, &str) -> std::result::Result<(), RuleError> + 'static,
	{
		self.add_rule(FnRule::new(description, action))
	}

	/// The rules in registration order.
	pub fn rules(&self) -> Vec<Rc<dyn Rule<T>>> {
		self.rules.borrow().clone()
	}

	/// The namer.
	pub fn namer(&self) -> Rc<dyn Namer<T>> {
		Rc::clone(&self.namer)
	}

	/// The backing store.
	pub fn store(&self) -> Rc<dyn Store<T>> {
		Rc::clone(&self.store)
	}

	/// Name of the element type used in messages.
	pub fn type_display_name(&self) -> String {
		self.hooks
			.type_display_name()
			.unwrap_or_else(simple_type_name::<T>)
	}

	/// `"<type display name> container"`.
	pub fn display_name(&self) -> String {
		format!("{} container", self.type_display_name())
	}

	fn find_by_name_without_rules(&self, name: &str) -> Option<T> {
		self.store
			.find(&mut |entity: &T| self.namer.determine_name(entity) == name)
	}

	/// Gives every rule, in order, one chance to materialize `name`.
	///
	/// A nested pass for a name already in flight returns immediately. The
	/// in-flight marker is released however this returns. Rules are iterated
	/// over a copy of the list, so rules added during the pass apply from the
	/// next pass on.
	fn apply_rules(&self, name: &str) -> Result<()> {
		let Some(_in_flight) = InFlight::acquire(&self.applying, name) else {
			trace!(name = %name, "rules already being applied");
			return Ok(());
		};

		let rules = self.rules();
		if rules.is_empty() {
			return Ok(());
		}
		debug!(registry = %self.type_display_name(), name = %name, rules = rules.len(), "applying rules");
		for rule in &rules {
			rule.apply(self, name)
				.map_err(|source| RegistryError::Rule {
					description: rule.description().to_owned(),
					source,
				})?;
		}
		Ok(())
	}
}

impl<T> fmt::Debug for Registry<T>
where
	T: Clone + PartialEq + 'static,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("type", &self.type_display_name())
			.field("len", &self.len())
			.field("rules", &self.rules.borrow().len())
			.finish_non_exhaustive()
	}
}
