//! Platform abstraction for the navigation engine.
//!
//! The navigator, session store and pages only talk to the browser through
//! the three traits below. [`memory`] backends work on every target and back
//! the test suites; [`web`] backends wrap `window.history`,
//! `window.localStorage` and the `<main>` outlet in the browser.

use crate::component::View;

mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::{MemoryHistory, MemoryOutlet, MemoryStorage};
#[cfg(target_arch = "wasm32")]
pub use web::{BrowserHistory, DomOutlet, LocalStorage, install_listeners};

/// Durable key/value storage (the browser's `localStorage`).
///
/// Failures are logged by implementations and never surfaced.
pub trait Storage {
	/// Reads a value.
	fn get(&self, key: &str) -> Option<String>;
	/// Writes a value.
	fn set(&self, key: &str, value: &str);
	/// Removes a value.
	fn remove(&self, key: &str);
}

/// Session history (the browser's `window.history` and `location`).
pub trait History {
	/// Appends `url` as a new history entry and makes it current.
	fn push(&self, url: &str);
	/// Returns the current URL as path plus query string.
	fn location(&self) -> String;
}

/// The document region that hosts the mounted page.
pub trait Outlet {
	/// Replaces the hosted content in one step.
	fn replace(&self, view: View);

	/// Returns true when the runtime supports animated view transitions.
	fn supports_transitions(&self) -> bool {
		false
	}

	/// Replaces the hosted content inside a view transition.
	///
	/// A later [`replace`](Outlet::replace) issued before the transition's
	/// update runs wins over the transition's content.
	fn replace_with_transition(&self, view: View) {
		self.replace(view);
	}
}
