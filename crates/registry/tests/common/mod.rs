#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use nomen_registry::{Registry, Subtype};
// Each test target links every dependency; not all of them use each one.
use nomen_collections as _;
use pretty_assertions as _;
use proptest as _;
use rstest as _;
use rustc_hash as _;
use serde as _;
use thiserror as _;
use toml as _;

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
	pub name: String,
	pub size: u32,
}

pub fn widget(name: &str, size: u32) -> Widget {
	Widget {
		name: name.to_owned(),
		size,
	}
}

pub fn widgets() -> Registry<Widget> {
	Registry::new(|w: &Widget| w.name.clone())
}

/// Shared counter/log that rules and subscribers write into.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
	pub fn push(&self, entry: impl Into<String>) {
		self.0.borrow_mut().push(entry.into());
	}

	pub fn entries(&self) -> Vec<String> {
		self.0.borrow().clone()
	}

	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Compile {
	pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Archive {
	pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Task {
	Compile(Compile),
	Archive(Archive),
}

impl Task {
	pub fn name(&self) -> &str {
		match self {
			Task::Compile(c) => &c.name,
			Task::Archive(a) => &a.name,
		}
	}
}

impl Subtype<Task> for Compile {
	fn narrow(parent: &Task) -> Option<Self> {
		match parent {
			Task::Compile(c) => Some(c.clone()),
			Task::Archive(_) => None,
		}
	}

	fn widen(&self) -> Task {
		Task::Compile(self.clone())
	}
}

impl Subtype<Task> for Archive {
	fn narrow(parent: &Task) -> Option<Self> {
		match parent {
			Task::Archive(a) => Some(a.clone()),
			Task::Compile(_) => None,
		}
	}

	fn widen(&self) -> Task {
		Task::Archive(self.clone())
	}
}

pub fn compile(name: &str) -> Task {
	Task::Compile(Compile { name: name.to_owned() })
}

pub fn archive(name: &str) -> Task {
	Task::Archive(Archive { name: name.to_owned() })
}

pub fn tasks() -> Registry<Task> {
	Registry::new(|t: &Task| t.name().to_owned())
}
