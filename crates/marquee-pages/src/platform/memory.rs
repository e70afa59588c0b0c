//! In-memory platform backends.

use super::{History, Outlet, Storage};
use crate::component::View;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// `localStorage` stand-in backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
	/// Creates an empty storage.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty storage behind an `Rc`.
	pub fn shared() -> Rc<Self> {
		Rc::new(Self::new())
	}

	/// Returns the number of stored keys.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Returns true when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}
}

impl Storage for MemoryStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.entries
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
	}

	fn remove(&self, key: &str) {
		self.entries.borrow_mut().remove(key);
	}
}

/// Session history with browser back/forward semantics.
///
/// Pushing discards any forward entries, exactly like `history.pushState`.
#[derive(Debug)]
pub struct MemoryHistory {
	entries: RefCell<Vec<String>>,
	index: Cell<usize>,
}

impl MemoryHistory {
	/// Creates a history whose only entry is `initial`.
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			entries: RefCell::new(vec![initial.into()]),
			index: Cell::new(0),
		}
	}

	/// Creates a history behind an `Rc`.
	pub fn shared(initial: impl Into<String>) -> Rc<Self> {
		Rc::new(Self::new(initial))
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Always false; a history has at least its initial entry.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Returns all entries in order.
	pub fn entries(&self) -> Vec<String> {
		self.entries.borrow().clone()
	}

	/// Moves one entry back. Returns false at the start of history.
	pub fn back(&self) -> bool {
		let index = self.index.get();
		if index == 0 {
			return false;
		}
		self.index.set(index - 1);
		true
	}

	/// Moves one entry forward. Returns false at the end of history.
	pub fn forward(&self) -> bool {
		let index = self.index.get();
		if index + 1 >= self.len() {
			return false;
		}
		self.index.set(index + 1);
		true
	}
}

impl History for MemoryHistory {
	fn push(&self, url: &str) {
		let mut entries = self.entries.borrow_mut();
		entries.truncate(self.index.get() + 1);
		entries.push(url.to_string());
		self.index.set(entries.len() - 1);
	}

	fn location(&self) -> String {
		self.entries.borrow()[self.index.get()].clone()
	}
}

/// Outlet that keeps the rendered markup of the hosted page.
#[derive(Debug, Default)]
pub struct MemoryOutlet {
	html: RefCell<String>,
	replacements: Cell<usize>,
	transitions: Cell<usize>,
	transitions_enabled: bool,
}

impl MemoryOutlet {
	/// Creates an outlet without view transition support.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an outlet without view transition support behind an `Rc`.
	pub fn shared() -> Rc<Self> {
		Rc::new(Self::new())
	}

	/// Creates an outlet that reports view transition support.
	pub fn with_transitions() -> Rc<Self> {
		Rc::new(Self {
			transitions_enabled: true,
			..Self::default()
		})
	}

	/// Returns the markup currently hosted.
	pub fn html(&self) -> String {
		self.html.borrow().clone()
	}

	/// Returns how many times the content was replaced.
	pub fn replacements(&self) -> usize {
		self.replacements.get()
	}

	/// Returns how many replacements ran inside a view transition.
	pub fn transitions(&self) -> usize {
		self.transitions.get()
	}
}

impl Outlet for MemoryOutlet {
	fn replace(&self, view: View) {
		*self.html.borrow_mut() = view.render_to_string();
		self.replacements.set(self.replacements.get() + 1);
	}

	fn supports_transitions(&self) -> bool {
		self.transitions_enabled
	}

	fn replace_with_transition(&self, view: View) {
		self.transitions.set(self.transitions.get() + 1);
		self.replace(view);
	}
}
