//! The `Page` trait and the handles a mounted page works through.

use super::View;
use crate::router::{Location, NavigationOutcome, NavigatorHandle, RouteParams, RouterError};
use std::collections::HashMap;

/// The kind of DOM interaction that produced a [`UiEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
	/// A click on an element carrying `data-action`.
	Click,
	/// Submission of a form carrying `data-action`.
	Submit,
	/// A value change on an input or select carrying `data-action`.
	Change,
}

/// A structured UI event delivered to the mounted page.
///
/// Replaces inline string handlers: markup declares an action name with
/// [`ElementView::action`](super::ElementView::action) and the outlet turns
/// the browser event into this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
	/// What happened.
	pub kind: EventKind,
	/// The `data-action` name of the source element.
	pub action: String,
	/// The `data-value` attribute, or the current value for change events.
	pub value: Option<String>,
	/// Named form fields for submit events.
	pub fields: HashMap<String, String>,
}

impl UiEvent {
	/// Creates a click event.
	pub fn click(action: impl Into<String>) -> Self {
		Self {
			kind: EventKind::Click,
			action: action.into(),
			value: None,
			fields: HashMap::new(),
		}
	}

	/// Creates a change event carrying the new value.
	pub fn change(action: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			kind: EventKind::Change,
			action: action.into(),
			value: Some(value.into()),
			fields: HashMap::new(),
		}
	}

	/// Creates a form submission event.
	pub fn submit<K, V>(action: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			kind: EventKind::Submit,
			action: action.into(),
			value: None,
			fields: fields
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}

	/// Attaches a `data-value` payload.
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Returns a submitted form field, or an empty string when absent.
	pub fn field(&self, name: &str) -> &str {
		self.fields.get(name).map(String::as_str).unwrap_or("")
	}
}

/// Whether a page consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
	/// The page handled the event.
	Handled,
	/// The page did not recognise the event; the shell may handle it.
	Ignored,
}

/// A navigable page.
///
/// The navigator builds a new instance for every navigation, so `mount` runs
/// exactly once per instance. Pages must not assume they are still on screen
/// when an async fetch completes; commit results through
/// [`PageHandle::render`], which discards updates from superseded
/// navigations.
pub trait Page {
	/// Returns the page's name for logging.
	fn name(&self) -> &'static str;

	/// Receives the parameters captured by a parametrized route.
	fn set_params(&mut self, _params: RouteParams) {}

	/// Receives the auth requirement of the matched route.
	fn set_requires_auth(&mut self, _required: bool) {}

	/// Builds the initial view. Data fetches are spawned from here.
	fn mount(&mut self, cx: &PageContext) -> View;

	/// Handles a structured UI event from the page's subtree.
	fn on_event(&mut self, _event: &UiEvent, _cx: &PageContext) -> EventFlow {
		EventFlow::Ignored
	}

	/// Called when the page is replaced by another navigation.
	fn unmount(&mut self) {}
}

/// A generation-stamped handle to the navigator, owned by one mounted page.
#[derive(Debug, Clone)]
pub struct PageHandle {
	navigator: NavigatorHandle,
	generation: u64,
}

impl PageHandle {
	pub(crate) fn new(navigator: NavigatorHandle, generation: u64) -> Self {
		Self {
			navigator,
			generation,
		}
	}

	/// Returns the navigation generation this page was mounted in.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Returns true while this page is the one on screen.
	pub fn is_current(&self) -> bool {
		self.navigator.current_generation() == Some(self.generation)
	}

	/// Replaces the page's subtree in place.
	///
	/// Returns false and drops `view` if another navigation has happened
	/// since this page was mounted.
	pub fn render(&self, view: View) -> bool {
		self.navigator.commit(self.generation, view)
	}

	/// Navigates to `target`, pushing a history entry.
	pub fn navigate(&self, target: &str) -> Result<NavigationOutcome, RouterError> {
		self.navigator.navigate(target)
	}

	/// Returns the navigator handle.
	pub fn navigator(&self) -> &NavigatorHandle {
		&self.navigator
	}
}

/// Everything a page receives when it is mounted.
#[derive(Debug, Clone)]
pub struct PageContext {
	handle: PageHandle,
	location: Location,
}

impl PageContext {
	pub(crate) fn new(handle: PageHandle, location: Location) -> Self {
		Self { handle, location }
	}

	/// Returns the page's handle.
	pub fn handle(&self) -> &PageHandle {
		&self.handle
	}

	/// Returns the location the page was navigated to.
	pub fn location(&self) -> &Location {
		&self.location
	}

	/// Navigates to `target`, pushing a history entry.
	pub fn navigate(&self, target: &str) -> Result<NavigationOutcome, RouterError> {
		self.handle.navigate(target)
	}
}
