mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Log, Widget, init_tracing, widget, widgets};
use nomen_collections::{EventRegister, Store, VecStore};
use nomen_registry::{
	DefaultHooks, DisplayName, DuplicatePolicy, NamedLookup, Registry, RegistryConfig,
	RegistryError, RegistryHooks,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_add_then_lookup() {
	init_tracing();
	let reg = widgets();

	assert!(reg.add(widget("knob", 1)).unwrap());
	assert!(reg.add(widget("lever", 2)).unwrap());

	assert!(reg.has_name("knob"));
	assert_eq!(reg.find_by_name("lever").unwrap(), Some(widget("lever", 2)));
	assert_eq!(reg.get_by_name("knob").unwrap(), widget("knob", 1));
	assert_eq!(reg.find_by_name("dial").unwrap(), None);
	assert_eq!(reg.len(), 2);
}

#[test]
fn test_duplicate_add_keeps_existing() {
	let reg = widgets();
	reg.add(widget("knob", 1)).unwrap();

	assert!(!reg.add(widget("knob", 99)).unwrap());
	assert_eq!(reg.get_by_name("knob").unwrap().size, 1);
	assert_eq!(reg.len(), 1);
}

#[test]
fn test_duplicate_with_fail_policy_errors() {
	let config = RegistryConfig::default()
		.with_type_display_name("Widget")
		.with_duplicate_policy(DuplicatePolicy::Fail);
	let reg: Registry<Widget> = Registry::with_config(|w: &Widget| w.name.clone(), config);
	reg.add(widget("knob", 1)).unwrap();

	let err = reg.add(widget("knob", 2)).unwrap_err();
	assert!(matches!(
		&err,
		RegistryError::Duplicate { type_name, name } if type_name == "Widget" && name == "knob"
	));
	assert_eq!(reg.get_by_name("knob").unwrap().size, 1);
}

#[test]
fn test_duplicate_add_does_not_notify() {
	let reg = widgets();
	let log = Log::default();
	{
		let log = log.clone();
		reg.when_added(move |w: &Widget| log.push(format!("{}:{}", w.name, w.size)));
	}

	reg.add(widget("knob", 1)).unwrap();
	reg.add(widget("knob", 2)).unwrap();

	assert_eq!(log.entries(), vec!["knob:1"]);
}

#[rstest]
#[case::default_name(None, "Widget with name 'x' not found.")]
#[case::configured_name(Some("Gizmo"), "Gizmo with name 'x' not found.")]
fn test_not_found_message(#[case] display: Option<&str>, #[case] expected: &str) {
	let config = RegistryConfig {
		type_display_name: display.map(str::to_owned),
		..RegistryConfig::default()
	};
	let reg: Registry<Widget> = Registry::with_config(|w: &Widget| w.name.clone(), config);

	let err = reg.get_by_name("x").unwrap_err();
	assert_eq!(err.to_string(), expected);
	assert_eq!(err.missing_name(), Some("x"));
}

struct Gadgets;

impl RegistryHooks<Widget> for Gadgets {
	fn type_display_name(&self) -> Option<String> {
		Some("Gadget".into())
	}

	fn not_found(&self, type_name: &str, name: &str) -> RegistryError {
		RegistryError::NotFound {
			name: name.to_owned(),
			message: format!("no {type_name} called {name}; try `gadgets list`"),
		}
	}
}

#[test]
fn test_hooks_override_not_found() {
	let reg: Registry<Widget> = Registry::with_hooks(|w: &Widget| w.name.clone(), Gadgets);

	let err = reg.get_by_name("x").unwrap_err();
	assert_eq!(err.to_string(), "no Gadget called x; try `gadgets list`");
	assert_eq!(reg.display_name(), "Gadget container");
}

#[test]
fn test_default_display_name_uses_simple_type_name() {
	let reg = widgets();
	assert_eq!(reg.type_display_name(), "Widget");
	assert_eq!(reg.display_name(), "Widget container");

	let named: Registry<Widget> = Registry::with_hooks(|w: &Widget| w.name.clone(), DisplayName("Part".into()));
	assert_eq!(named.type_display_name(), "Part");
}

#[test]
fn test_remove_by_name_does_not_apply_rules() {
	let reg = widgets();
	let log = Log::default();
	{
		let log = log.clone();
		reg.add_rule_fn("anything", move |reg, name| {
			log.push(name);
			reg.add(widget(name, 0))?;
			Ok(())
		});
	}
	reg.add(widget("knob", 1)).unwrap();

	assert_eq!(reg.remove_by_name("dial").unwrap(), None);
	assert!(log.entries().is_empty());

	assert_eq!(reg.remove_by_name("knob").unwrap(), Some(widget("knob", 1)));
	assert!(!reg.has_name("knob"));
	assert!(reg.is_empty());
}

#[test]
fn test_remove_notifies_subscribers() {
	let reg = widgets();
	let log = Log::default();
	{
		let log = log.clone();
		reg.when_removed(move |w: &Widget| log.push(w.name.clone()));
	}
	reg.add(widget("knob", 1)).unwrap();
	reg.add(widget("lever", 1)).unwrap();

	reg.remove_by_name("knob").unwrap();
	assert!(reg.remove(&widget("lever", 1)));
	assert!(!reg.remove(&widget("lever", 1)));

	assert_eq!(log.entries(), vec!["knob", "lever"]);
}

/// Store that forgets how to remove.
struct StickyStore(VecStore<Widget>);

impl Store<Widget> for StickyStore {
	fn insert(&self, entity: Widget) -> bool {
		self.0.insert(entity)
	}

	fn remove(&self, _entity: &Widget) -> bool {
		false
	}

	fn find(&self, predicate: &mut dyn FnMut(&Widget) -> bool) -> Option<Widget> {
		self.0.find(predicate)
	}

	fn for_each(&self, visit: &mut dyn FnMut(&Widget)) {
		self.0.for_each(visit)
	}

	fn len(&self) -> usize {
		self.0.len()
	}
}

#[test]
fn test_store_refusing_removal_is_a_contract_violation() {
	init_tracing();
	let reg = Registry::<Widget>::from_parts(
		Rc::new(|w: &Widget| w.name.clone()),
		Rc::new(StickyStore(VecStore::new())),
		Rc::new(EventRegister::<Widget>::new()),
		Rc::new(DefaultHooks),
	);
	reg.add(widget("knob", 1)).unwrap();

	let err = reg.remove_by_name("knob").unwrap_err();
	assert!(matches!(&err, RegistryError::StoreContract { name } if name == "knob"));
	assert!(reg.has_name("knob"));
}

#[test]
fn test_name_map_is_sorted_snapshot() {
	let reg = widgets();
	for name in ["gamma", "alpha", "beta"] {
		reg.add(widget(name, 0)).unwrap();
	}

	let map = reg.as_name_map();
	reg.add(widget("delta", 0)).unwrap();
	reg.remove_by_name("alpha").unwrap();

	assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec!["alpha", "beta", "gamma"]);
	assert_eq!(reg.names().into_iter().collect::<Vec<_>>(), vec!["beta", "delta", "gamma"]);
	assert_eq!(
		reg.to_vec().iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
		vec!["gamma", "beta", "delta"],
	);
}

#[test]
fn test_all_visits_existing_and_future_members() {
	let reg = widgets();
	reg.add(widget("knob", 1)).unwrap();
	let log = Log::default();
	{
		let log = log.clone();
		reg.all(move |w: &Widget| log.push(w.name.clone()));
	}
	reg.add(widget("lever", 2)).unwrap();

	assert_eq!(log.entries(), vec!["knob", "lever"]);
}

#[test]
fn test_configure_by_name() {
	let reg: Registry<Rc<RefCell<Widget>>> = Registry::new(|w: &Rc<RefCell<Widget>>| w.borrow().name.clone());
	reg.add(Rc::new(RefCell::new(widget("knob", 1)))).unwrap();

	reg.configure_by_name("knob", |w| w.borrow_mut().size = 42).unwrap();

	assert_eq!(reg.get_by_name("knob").unwrap().borrow().size, 42);
	assert!(reg.configure_by_name("dial", |_| {}).is_err());
}

#[test]
fn test_renamed_member_is_not_revalidated() {
	let reg: Registry<Rc<RefCell<Widget>>> = Registry::new(|w: &Rc<RefCell<Widget>>| w.borrow().name.clone());
	let knob = Rc::new(RefCell::new(widget("knob", 1)));
	reg.add(Rc::clone(&knob)).unwrap();
	reg.add(Rc::new(RefCell::new(widget("dial", 2)))).unwrap();

	knob.borrow_mut().name = "dial".into();

	// Both members now answer to "dial"; lookup returns the first in store order.
	assert_eq!(reg.len(), 2);
	assert_eq!(reg.get_by_name("dial").unwrap().borrow().size, 1);
	assert!(!reg.has_name("knob"));
	assert!(reg.add(Rc::new(RefCell::new(widget("knob", 3)))).unwrap());
}

#[test]
fn test_add_all_reports_change() {
	let reg = widgets();
	assert!(reg.add_all([widget("a", 1), widget("b", 2)]).unwrap());
	assert!(!reg.add_all([widget("a", 3)]).unwrap());
	assert_eq!(reg.len(), 2);
}

fn describe(lookup: &dyn NamedLookup<Widget>, name: &str) -> String {
	match lookup.find_by_name(name) {
		Ok(Some(w)) => format!("{} ({})", w.name, w.size),
		Ok(None) => format!("{name}?"),
		Err(err) => err.to_string(),
	}
}

#[test]
fn test_named_lookup_capability() {
	let reg = widgets();
	reg.add(widget("knob", 1)).unwrap();
	let lookup: &dyn NamedLookup<Widget> = &reg;

	assert_eq!(describe(lookup, "knob"), "knob (1)");
	assert_eq!(describe(lookup, "dial"), "dial?");
	assert!(lookup.has_name("knob"));
	assert_eq!(lookup.as_name_map().len(), 1);
	assert!(lookup.get_by_name("dial").is_err());
}
