//! Filtered views.
//!
//! A view is a [`Registry`] whose store and event channel are live projections
//! of its parent's. It shares membership and notifications with the parent and
//! never copies entities.
//!
//! # Invariants
//!
//! - A view starts with no rules and never sees the parent's.
//!   - Enforced in: [`Registry::filtered`], which builds the view through
//!     [`Registry::from_parts`].
//!   - Tested by: `tests/views.rs::test_view_does_not_inherit_parent_rules`.
//!   - Failure symptom: lookups through a view materialize entities the view
//!     was never asked to resolve.
//!
//! - Membership is a projection, not a snapshot.
//!   - Enforced in: [`FilteredStore`], which reads through to the parent store.
//!   - Tested by: `tests/views.rs::test_view_sees_members_added_later`.
//!   - Failure symptom: stale views.

use std::rc::Rc;

use nomen_collections::{CollectionFilter, FilteredEvents, FilteredStore, Subtype};

use crate::{DefaultHooks, DisplayName, Namer, Registry, RegistryHooks};

/// A registry scoped to a filter of a parent registry's members.
pub type FilteredView<S> = Registry<S>;

impl<T> Registry<T>
where
	T: Clone + PartialEq + 'static,
{
	/// View of the members that are an `S`.
	///
	/// The view's type display name is the simple name of `S`.
	pub fn with_type<S>(&self) -> FilteredView<S>
	where
		S: Subtype<T> + Clone + PartialEq + 'static,
	{
		self.filtered(CollectionFilter::of_type(), Rc::new(DefaultHooks))
	}

	/// View of the members for which `predicate` holds.
	///
	/// The view keeps this registry's type display name.
	pub fn matching<P>(&self, predicate: P) -> FilteredView<T>
	where
		P: Fn(&T) -> bool + 'static,
	{
		let hooks = DisplayName(self.type_display_name());
		self.filtered(CollectionFilter::matching(predicate), Rc::new(hooks))
	}

	/// View through an arbitrary `filter`, specialized by `hooks`.
	///
	/// Members are named by this registry's namer applied to the widened entity.
	pub fn filtered<S>(
		&self,
		filter: CollectionFilter<T, S>,
		hooks: Rc<dyn RegistryHooks<S>>,
	) -> FilteredView<S>
	where
		S: Clone + PartialEq + 'static,
	{
		let parent_namer = Rc::clone(&self.namer);
		let widen = filter.clone();
		let namer: Rc<dyn Namer<S>> =
			Rc::new(move |entity: &S| parent_namer.determine_name(&widen.widen(entity)));

		Registry::from_parts(
			namer,
			Rc::new(FilteredStore::new(Rc::clone(&self.store), filter.clone())),
			Rc::new(FilteredEvents::new(Rc::clone(&self.events), filter)),
			hooks,
		)
	}
}
