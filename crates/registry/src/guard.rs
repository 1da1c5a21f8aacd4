//! Reentrancy guard for rule application.
//!
//! A rule resolving `name` may, directly or through code it calls, look up
//! `name` again. The registry marks `name` as in flight for the dynamic extent
//! of its rule pass; a nested pass for the same name sees the marker and
//! returns without running rules.
//!
//! # Invariants
//!
//! - A name is in flight only while an [`InFlight`] for it is alive.
//!   - Enforced in: [`InFlight`]'s `Drop` impl, which runs on normal return, `?`
//!     propagation, and unwinding.
//!   - Tested by: `test_marker_released_on_panic`, `test_marker_released_on_drop`.
//!   - Failure symptom: a name whose rules failed once is never resolved again.

use std::cell::RefCell;

use rustc_hash::FxHashSet;

/// Set of names whose rules are currently being applied.
pub(crate) type InFlightNames = RefCell<FxHashSet<String>>;

/// Scoped marker holding `name` in an [`InFlightNames`] set.
#[must_use = "the name is released as soon as the guard is dropped"]
pub(crate) struct InFlight<'a> {
	names: &'a InFlightNames,
	name: String,
}

impl<'a> InFlight<'a> {
	/// Marks `name` in flight, or returns `None` if it already is.
	pub(crate) fn acquire(names: &'a InFlightNames, name: &str) -> Option<Self> {
		if !names.borrow_mut().insert(name.to_owned()) {
			return None;
		}
		Some(Self {
			names,
			name: name.to_owned(),
		})
	}
}

impl Drop for InFlight<'_> {
	fn drop(&mut self) {
		self.names.borrow_mut().remove(&self.name);
	}
}
