//! Change notification channel.

use std::cell::RefCell;
use std::rc::Rc;

/// Subscriber callback invoked with the affected entity.
pub type Action<T> = Rc<dyn Fn(&T)>;

/// Delivers add/remove notifications to subscribers.
///
/// The registry fires events after the store has been mutated; a filtered view
/// subscribes and fires through its parent's channel.
pub trait EventChannel<T> {
	/// Subscribes to additions.
	fn on_added(&self, action: Action<T>);

	/// Subscribes to removals.
	fn on_removed(&self, action: Action<T>);

	/// Notifies addition subscribers.
	fn fire_added(&self, entity: &T);

	/// Notifies removal subscribers.
	fn fire_removed(&self, entity: &T);
}

/// Default [`EventChannel`]: two ordered subscriber lists.
///
/// Delivery iterates a copy of the subscriber list, so a subscriber may
/// subscribe further actions (or trigger nested events) without invalidating
/// the iteration. Actions subscribed during delivery see the next event.
pub struct EventRegister<T> {
	added: RefCell<Vec<Action<T>>>,
	removed: RefCell<Vec<Action<T>>>,
}

impl<T> Default for EventRegister<T> {
	fn default() -> Self {
		Self {
			added: RefCell::new(Vec::new()),
			removed: RefCell::new(Vec::new()),
		}
	}
}

impl<T> EventRegister<T> {
	/// Creates a register with no subscribers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of addition subscribers.
	pub fn added_count(&self) -> usize {
		self.added.borrow().len()
	}

	/// Number of removal subscribers.
	pub fn removed_count(&self) -> usize {
		self.removed.borrow().len()
	}
}

impl<T> std::fmt::Debug for EventRegister<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventRegister")
			.field("added", &self.added_count())
			.field("removed", &self.removed_count())
			.finish()
	}
}

impl<T> EventChannel<T> for EventRegister<T> {
	fn on_added(&self, action: Action<T>) {
		self.added.borrow_mut().push(action);
	}

	fn on_removed(&self, action: Action<T>) {
		self.removed.borrow_mut().push(action);
	}

	fn fire_added(&self, entity: &T) {
		let actions = self.added.borrow().clone();
		tracing::trace!(subscribers = actions.len(), "delivering added event");
		for action in actions {
			action(entity);
		}
	}

	fn fire_removed(&self, entity: &T) {
		let actions = self.removed.borrow().clone();
		tracing::trace!(subscribers = actions.len(), "delivering removed event");
		for action in actions {
			action(entity);
		}
	}
}
