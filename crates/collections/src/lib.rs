//! Collection primitives consumed by `nomen-registry`.
//!
//! A registry does not own its entities. It indexes a [`Store`] by name and
//! publishes membership changes over an [`EventChannel`]. This crate provides
//! the two traits, a default implementation of each, and the filtered
//! projections that let a derived view alias its parent's store and events
//! without copying.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Store`] | Ordered, mutable container of entities. |
//! | [`VecStore`] | Insertion-ordered default store with set semantics. |
//! | [`EventChannel`] | Add/remove subscription and delivery. |
//! | [`EventRegister`] | Default event channel. |
//! | [`CollectionFilter`] | Narrow/widen pair defining a projection. |
//! | [`FilteredStore`] / [`FilteredEvents`] | Live projections of a parent store/channel. |
//!
//! # Threading
//!
//! Everything here is single-threaded (`Rc` + `RefCell`). Callers serialize
//! access to a store and all of its projections.

mod events;
mod filter;
mod filtered;
mod store;

pub use events::{Action, EventChannel, EventRegister};
pub use filter::{CollectionFilter, Subtype};
pub use filtered::{FilteredEvents, FilteredStore};
pub use store::{Store, VecStore};
