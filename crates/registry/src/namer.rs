//! Entity naming.

/// Maps an entity to its name within a registry.
///
/// Names are recomputed on every lookup and never cached, so a namer must be
/// pure: it must not touch the registry it serves.
pub trait Namer<T> {
	/// Returns the name of `entity`.
	fn determine_name(&self, entity: &T) -> String;
}

impl<T, F> Namer<T> for F
where
	F: Fn(&T) -> String,
{
	fn determine_name(&self, entity: &T) -> String {
		self(entity)
	}
}

/// Returns the type name of `T` with module paths stripped from every segment.
///
/// `alloc::rc::Rc<my_crate::Widget>` becomes `Rc<Widget>`.
pub fn simple_type_name<T: ?Sized>() -> String {
	let full = std::any::type_name::<T>();
	let mut out = String::with_capacity(full.len());
	let mut path = String::new();
	for ch in full.chars() {
		if ch.is_alphanumeric() || ch == '_' || ch == ':' {
			path.push(ch);
		} else {
			push_last_segment(&mut out, &path);
			path.clear();
			out.push(ch);
		}
	}
	push_last_segment(&mut out, &path);
	out
}

fn push_last_segment(out: &mut String, path: &str) {
	out.push_str(path.rsplit("::").next().unwrap_or(path));
}
