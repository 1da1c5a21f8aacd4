//! Projection criteria for filtered views.

use std::rc::Rc;

/// A type that can be narrowed out of, and widened back into, a parent type `T`.
///
/// This is the explicit type tag a registry of `T` uses to produce a typed view
/// of `S`. A typical implementor is one variant payload of an entity enum:
///
/// ```
/// use nomen_collections::Subtype;
///
/// #[derive(Clone)]
/// enum Task {
/// 	Compile(String),
/// 	Copy(String),
/// }
///
/// #[derive(Clone)]
/// struct Compile(String);
///
/// impl Subtype<Task> for Compile {
/// 	fn narrow(task: &Task) -> Option<Self> {
/// 		match task {
/// 			Task::Compile(name) => Some(Compile(name.clone())),
/// 			Task::Copy(_) => None,
/// 		}
/// 	}
///
/// 	fn widen(&self) -> Task {
/// 		Task::Compile(self.0.clone())
/// 	}
/// }
/// ```
pub trait Subtype<T>: Sized {
	/// Returns the `S` view of `parent`, or `None` if `parent` is not an `S`.
	fn narrow(parent: &T) -> Option<Self>;

	/// Returns `self` as a parent entity.
	fn widen(&self) -> T;
}

/// Narrow/widen pair that defines a projection of a `T` collection onto `S`.
///
/// `narrow` decides membership (and converts); `widen` maps a view entity back
/// into the parent so it can be stored, named, and announced there.
pub struct CollectionFilter<T, S> {
	narrow: Rc<dyn Fn(&T) -> Option<S>>,
	widen: Rc<dyn Fn(&S) -> T>,
}

impl<T, S> Clone for CollectionFilter<T, S> {
	fn clone(&self) -> Self {
		Self {
			narrow: Rc::clone(&self.narrow),
			widen: Rc::clone(&self.widen),
		}
	}
}

impl<T, S> CollectionFilter<T, S> {
	/// Builds a filter from explicit conversions.
	pub fn new<N, W>(narrow: N, widen: W) -> Self
	where
		N: Fn(&T) -> Option<S> + 'static,
		W: Fn(&S) -> T + 'static,
	{
		Self {
			narrow: Rc::new(narrow),
			widen: Rc::new(widen),
		}
	}

	/// Filter selecting the members of `T` that are an `S`.
	pub fn of_type() -> Self
	where
		T: 'static,
		S: Subtype<T> + 'static,
	{
		Self::new(S::narrow, S::widen)
	}

	/// Projects a parent entity, `None` if the filter excludes it.
	#[inline]
	pub fn narrow(&self, parent: &T) -> Option<S> {
		(self.narrow)(parent)
	}

	/// Maps a view entity back into the parent type.
	#[inline]
	pub fn widen(&self, entity: &S) -> T {
		(self.widen)(entity)
	}

	/// Whether `entity`, once widened, is selected by this filter.
	pub fn accepts(&self, entity: &S) -> bool {
		self.narrow(&self.widen(entity)).is_some()
	}
}

impl<T: Clone + 'static> CollectionFilter<T, T> {
	/// Filter selecting the members for which `predicate` holds.
	pub fn matching<P>(predicate: P) -> Self
	where
		P: Fn(&T) -> bool + 'static,
	{
		Self::new(
			move |entity: &T| predicate(entity).then(|| entity.clone()),
			T::clone,
		)
	}
}
