//! Session credential store.
//!
//! Holds the bearer credential for the current user and persists it to
//! durable storage on every change. Cloning a [`SessionStore`] yields another
//! handle to the same session.

use crate::platform::Storage;
use crate::{debug_log, info_log};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Legacy value written by older builds when the credential was cleared.
const ABSENT_MARKER: &str = "null";

struct SessionInner {
	credential: RefCell<Option<String>>,
	storage: Rc<dyn Storage>,
	key: String,
}

/// Process-wide record of the current user's credential.
#[derive(Clone)]
pub struct SessionStore {
	inner: Rc<SessionInner>,
}

impl fmt::Debug for SessionStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SessionStore")
			.field("key", &self.inner.key)
			.field("logged_in", &self.is_logged_in())
			.finish()
	}
}

impl SessionStore {
	/// Creates a store and initialises it from `storage[key]` when present.
	pub fn load(storage: Rc<dyn Storage>, key: impl Into<String>) -> Self {
		let key = key.into();
		let credential = storage.get(&key).filter(|value| !value.is_empty());
		debug_log!("session loaded from '{}': present={}", key, credential.is_some());

		Self {
			inner: Rc::new(SessionInner {
				credential: RefCell::new(credential),
				storage,
				key,
			}),
		}
	}

	/// Returns the current credential, if any.
	///
	/// A stored legacy `"null"` marker is reported as absent.
	pub fn credential(&self) -> Option<String> {
		self.inner
			.credential
			.borrow()
			.as_deref()
			.filter(|value| is_present(value))
			.map(str::to_string)
	}

	/// Replaces the credential and persists the change.
	///
	/// `None`, an empty string and the literal `"null"` all clear the session
	/// and remove the persisted entry.
	pub fn set_credential(&self, credential: Option<String>) {
		let credential = credential.filter(|value| is_present(value));

		match &credential {
			Some(value) => self.inner.storage.set(&self.inner.key, value),
			None => self.inner.storage.remove(&self.inner.key),
		}
		info_log!("session credential {}", if credential.is_some() { "set" } else { "cleared" });

		*self.inner.credential.borrow_mut() = credential;
	}

	/// Clears the credential.
	pub fn clear(&self) {
		self.set_credential(None);
	}

	/// Returns true when a usable credential is held.
	pub fn is_logged_in(&self) -> bool {
		self.credential().is_some()
	}

	/// Returns the storage this session persists to.
	pub fn storage(&self) -> &Rc<dyn Storage> {
		&self.inner.storage
	}
}

fn is_present(value: &str) -> bool {
	!value.is_empty() && value != ABSENT_MARKER
}
