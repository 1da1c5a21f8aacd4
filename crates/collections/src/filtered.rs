//! Live projections of a parent store and event channel.
//!
//! Neither type copies entities: every call goes through the parent, so the
//! projection observes all parent mutations, including those made after the
//! projection was created.

use std::rc::Rc;

use crate::{Action, CollectionFilter, EventChannel, Store};

/// A [`Store`] of `S` backed by a parent store of `T`.
pub struct FilteredStore<T, S> {
	parent: Rc<dyn Store<T>>,
	filter: CollectionFilter<T, S>,
}

impl<T, S> FilteredStore<T, S> {
	/// Projects `parent` through `filter`.
	pub fn new(parent: Rc<dyn Store<T>>, filter: CollectionFilter<T, S>) -> Self {
		Self { parent, filter }
	}
}

impl<T, S> Store<S> for FilteredStore<T, S> {
	/// Inserts into the parent store; entities the filter does not accept are refused.
	fn insert(&self, entity: S) -> bool {
		if !self.filter.accepts(&entity) {
			return false;
		}
		self.parent.insert(self.filter.widen(&entity))
	}

	fn remove(&self, entity: &S) -> bool {
		self.filter.accepts(entity) && self.parent.remove(&self.filter.widen(entity))
	}

	fn find(&self, predicate: &mut dyn FnMut(&S) -> bool) -> Option<S> {
		let found = self.parent.find(&mut |parent: &T| {
			self.filter
				.narrow(parent)
				.is_some_and(|entity| predicate(&entity))
		})?;
		self.filter.narrow(&found)
	}

	fn for_each(&self, visit: &mut dyn FnMut(&S)) {
		self.parent.for_each(&mut |parent: &T| {
			if let Some(entity) = self.filter.narrow(parent) {
				visit(&entity);
			}
		});
	}

	fn len(&self) -> usize {
		let mut count = 0;
		self.for_each(&mut |_: &S| count += 1);
		count
	}
}

/// An [`EventChannel`] of `S` that subscribes and fires through a parent channel of `T`.
///
/// Subscriptions are registered on the parent wrapped by the filter, so they
/// only see matching entities, whoever fired the event.
pub struct FilteredEvents<T, S> {
	parent: Rc<dyn EventChannel<T>>,
	filter: CollectionFilter<T, S>,
}

impl<T, S> FilteredEvents<T, S> {
	/// Projects `parent` through `filter`.
	pub fn new(parent: Rc<dyn EventChannel<T>>, filter: CollectionFilter<T, S>) -> Self {
		Self { parent, filter }
	}

	fn wrap(&self, action: Action<S>) -> Action<T>
	where
		T: 'static,
		S: 'static,
	{
		let filter = self.filter.clone();
		Rc::new(move |parent: &T| {
			if let Some(entity) = filter.narrow(parent) {
				action(&entity);
			}
		})
	}
}

impl<T: 'static, S: 'static> EventChannel<S> for FilteredEvents<T, S> {
	fn on_added(&self, action: Action<S>) {
		self.parent.on_added(self.wrap(action));
	}

	fn on_removed(&self, action: Action<S>) {
		self.parent.on_removed(self.wrap(action));
	}

	fn fire_added(&self, entity: &S) {
		self.parent.fire_added(&self.filter.widen(entity));
	}

	fn fire_removed(&self, entity: &S) {
		self.parent.fire_removed(&self.filter.widen(entity));
	}
}
