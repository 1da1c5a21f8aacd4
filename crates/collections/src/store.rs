//! Backing store contract and the default insertion-ordered store.

use std::cell::RefCell;

/// Ordered, mutable container of entities.
///
/// Implementations use interior mutability so that a store can be shared
/// (`Rc<dyn Store<T>>`) between a registry and its filtered views.
///
/// Callbacks passed to [`Store::find`] and [`Store::for_each`] run while the
/// store is borrowed and must not mutate it.
pub trait Store<T> {
	/// Inserts `entity`, returning `false` if the store refused it.
	fn insert(&self, entity: T) -> bool;

	/// Removes the first member equal to `entity`, returning whether one was removed.
	fn remove(&self, entity: &T) -> bool;

	/// Returns a clone of the first member matching `predicate`, in store order.
	fn find(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Option<T>;

	/// Visits every member in store order.
	fn for_each(&self, visit: &mut dyn FnMut(&T));

	/// Number of members.
	fn len(&self) -> usize;

	/// Whether the store has no members.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Clones the current members in store order.
	fn to_vec(&self) -> Vec<T>
	where
		T: Clone,
	{
		let mut out = Vec::with_capacity(self.len());
		self.for_each(&mut |entity: &T| out.push(entity.clone()));
		out
	}
}

/// Insertion-ordered store with set semantics: an entity equal to an existing
/// member is refused.
#[derive(Debug)]
pub struct VecStore<T> {
	items: RefCell<Vec<T>>,
}

impl<T> Default for VecStore<T> {
	fn default() -> Self {
		Self {
			items: RefCell::new(Vec::new()),
		}
	}
}

impl<T> VecStore<T> {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}
}

impl<T: Clone + PartialEq> Store<T> for VecStore<T> {
	fn insert(&self, entity: T) -> bool {
		let mut items = self.items.borrow_mut();
		if items.contains(&entity) {
			return false;
		}
		items.push(entity);
		true
	}

	fn remove(&self, entity: &T) -> bool {
		let mut items = self.items.borrow_mut();
		match items.iter().position(|item| item == entity) {
			Some(index) => {
				items.remove(index);
				true
			}
			None => false,
		}
	}

	fn find(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Option<T> {
		self.items.borrow().iter().find(|item| predicate(item)).cloned()
	}

	fn for_each(&self, visit: &mut dyn FnMut(&T)) {
		for item in self.items.borrow().iter() {
			visit(item);
		}
	}

	fn len(&self) -> usize {
		self.items.borrow().len()
	}
}
