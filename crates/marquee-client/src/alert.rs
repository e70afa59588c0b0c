//! The modal alert used for every user-visible failure.

use std::cell::{Cell, RefCell};

/// Shown when a page cannot load its data.
pub const GENERIC_ERROR: &str = "There was an error loading the page";
/// Shown on 429.
pub const RATE_LIMITED: &str = "Too many requests, please wait a moment and try again";
/// Shown on 401 when the server sent no message.
pub const SESSION_EXPIRED: &str = "Your session has expired, please log in again";

/// Displays messages to the user.
pub trait Alerts {
	/// Opens the alert with `message`.
	fn show(&self, message: &str);

	/// Closes the alert.
	fn close(&self) {}
}

/// Alerts kept in memory, for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryAlerts {
	messages: RefCell<Vec<String>>,
	open: Cell<bool>,
}

impl MemoryAlerts {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns every message shown so far.
	pub fn messages(&self) -> Vec<String> {
		self.messages.borrow().clone()
	}

	/// Returns the latest message.
	pub fn last(&self) -> Option<String> {
		self.messages.borrow().last().cloned()
	}

	/// Returns true while the alert is open.
	pub fn is_open(&self) -> bool {
		self.open.get()
	}
}

impl Alerts for MemoryAlerts {
	fn show(&self, message: &str) {
		self.messages.borrow_mut().push(message.to_string());
		self.open.set(true);
	}

	fn close(&self) {
		self.open.set(false);
	}
}

/// The `#alert-modal` dialog of the page shell.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct DialogAlerts;

#[cfg(target_arch = "wasm32")]
impl DialogAlerts {
	fn dialog() -> Option<web_sys::HtmlDialogElement> {
		use wasm_bindgen::JsCast;

		web_sys::window()?
			.document()?
			.get_element_by_id("alert-modal")?
			.dyn_into::<web_sys::HtmlDialogElement>()
			.ok()
	}
}

#[cfg(target_arch = "wasm32")]
impl Alerts for DialogAlerts {
	fn show(&self, message: &str) {
		let Some(dialog) = Self::dialog() else {
			marquee_pages::warn_log!("no #alert-modal, dropping alert: {}", message);
			return;
		};
		if let Ok(Some(text)) = dialog.query_selector("p") {
			text.set_text_content(Some(message));
		}
		if !dialog.open() {
			if let Err(err) = dialog.show_modal() {
				marquee_pages::warn_log!("failed to open alert: {:?}", err);
			}
		}
	}

	fn close(&self) {
		if let Some(dialog) = Self::dialog() {
			dialog.close();
		}
	}
}
