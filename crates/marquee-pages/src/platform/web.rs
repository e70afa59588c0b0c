//! Browser platform backends (`wasm32` only).

use super::{History, Outlet, Storage};
use crate::component::{UiEvent, View};
use crate::router::NavigatorHandle;
use crate::{debug_log, warn_log};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
	/// Returns the storage behind an `Rc`.
	pub fn shared() -> Rc<Self> {
		Rc::new(Self)
	}

	fn backend() -> Option<web_sys::Storage> {
		web_sys::window()?.local_storage().ok().flatten()
	}
}

impl Storage for LocalStorage {
	fn get(&self, key: &str) -> Option<String> {
		Self::backend()?.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) {
		let Some(storage) = Self::backend() else {
			warn_log!("localStorage unavailable, '{}' not persisted", key);
			return;
		};
		if let Err(err) = storage.set_item(key, value) {
			warn_log!("localStorage write failed for '{}': {:?}", key, err);
		}
	}

	fn remove(&self, key: &str) {
		let Some(storage) = Self::backend() else {
			return;
		};
		if let Err(err) = storage.remove_item(key) {
			warn_log!("localStorage remove failed for '{}': {:?}", key, err);
		}
	}
}

/// `window.history` plus `window.location`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

impl BrowserHistory {
	/// Returns the history behind an `Rc`.
	pub fn shared() -> Rc<Self> {
		Rc::new(Self)
	}
}

impl History for BrowserHistory {
	fn push(&self, url: &str) {
		let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
			warn_log!("history unavailable, {} not pushed", url);
			return;
		};
		if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
			warn_log!("pushState failed for {}: {:?}", url, err);
		}
	}

	fn location(&self) -> String {
		let Some(location) = web_sys::window().map(|w| w.location()) else {
			return "/".to_string();
		};
		let path = location.pathname().unwrap_or_else(|_| "/".to_string());
		let search = location.search().unwrap_or_default();
		format!("{}{}", path, search)
	}
}

/// The element hosting the mounted page, usually `<main>`.
#[derive(Debug)]
pub struct DomOutlet {
	root: web_sys::Element,
	epoch: Rc<Cell<u64>>,
}

impl DomOutlet {
	/// Looks up the outlet element by CSS selector.
	pub fn query(selector: &str) -> Option<Rc<Self>> {
		let root = web_sys::window()?
			.document()?
			.query_selector(selector)
			.ok()
			.flatten()?;
		Some(Rc::new(Self {
			root,
			epoch: Rc::new(Cell::new(0)),
		}))
	}

	/// Returns the outlet element.
	pub fn root(&self) -> &web_sys::Element {
		&self.root
	}

	fn next_epoch(&self) -> u64 {
		let next = self.epoch.get() + 1;
		self.epoch.set(next);
		next
	}
}

impl Outlet for DomOutlet {
	fn replace(&self, view: View) {
		self.next_epoch();
		self.root.set_inner_html(&view.render_to_string());
	}

	fn supports_transitions(&self) -> bool {
		start_view_transition().is_some()
	}

	fn replace_with_transition(&self, view: View) {
		let Some((document, start)) = start_view_transition() else {
			self.replace(view);
			return;
		};

		let epoch = self.next_epoch();
		set_transition_name(self.root.first_element_child(), "old");

		let html = view.render_to_string();
		let root = self.root.clone();
		let current = Rc::clone(&self.epoch);
		let update = Closure::once_into_js(move || {
			// A direct replace after this transition was scheduled wins.
			if current.get() != epoch {
				return;
			}
			root.set_inner_html(&html);
			set_transition_name(root.first_element_child(), "new");
		});

		if let Err(err) = start.call1(&document, &update) {
			warn_log!("startViewTransition failed: {:?}", err);
			self.replace(view);
		}
	}
}

fn start_view_transition() -> Option<(web_sys::Document, js_sys::Function)> {
	let document = web_sys::window()?.document()?;
	let value = js_sys::Reflect::get(&document, &JsValue::from_str("startViewTransition")).ok()?;
	let function = value.dyn_into::<js_sys::Function>().ok()?;
	Some((document, function))
}

fn set_transition_name(element: Option<web_sys::Element>, name: &str) {
	if let Some(element) = element.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
		let _ = element.style().set_property("view-transition-name", name);
	}
}

fn event_element(event: &web_sys::Event) -> Option<web_sys::Element> {
	event.target()?.dyn_into::<web_sys::Element>().ok()
}

fn control_value(element: &web_sys::Element) -> Option<String> {
	if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
		Some(input.value())
	} else if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
		Some(select.value())
	} else {
		element
			.dyn_ref::<web_sys::HtmlTextAreaElement>()
			.map(|area| area.value())
	}
}

fn form_fields(form: &web_sys::Element) -> Vec<(String, String)> {
	let Ok(nodes) = form.query_selector_all("[name]") else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
		.filter_map(|el| Some((el.get_attribute("name")?, control_value(&el)?)))
		.collect()
}

fn add_listener(
	target: &web_sys::EventTarget,
	event_type: &str,
	handler: impl FnMut(web_sys::Event) + 'static,
) {
	let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
	if let Err(err) =
		target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
	{
		warn_log!("failed to listen for '{}': {:?}", event_type, err);
	}
	// Listeners live as long as the page.
	closure.forget();
}

/// Wires link interception, structured UI events and back/forward handling
/// to `navigator`.
pub fn install_listeners(navigator: NavigatorHandle) {
	let Some(window) = web_sys::window() else {
		warn_log!("no window, navigation listeners not installed");
		return;
	};
	let Some(document) = window.document() else {
		warn_log!("no document, navigation listeners not installed");
		return;
	};

	let nav = navigator.clone();
	add_listener(&document, "click", move |event| {
		let Some(target) = event_element(&event) else {
			return;
		};
		if let Ok(Some(link)) = target.closest("a[data-link]") {
			if let Some(href) = link.get_attribute("href") {
				event.prevent_default();
				if let Err(err) = nav.follow_link(&href) {
					warn_log!("link navigation failed: {}", err);
				}
			}
			return;
		}
		let Ok(Some(source)) = target.closest("[data-action]") else {
			return;
		};
		// Forms report on submit and value controls on change.
		if source.tag_name().eq_ignore_ascii_case("form") || control_value(&source).is_some() {
			return;
		}
		event.prevent_default();
		let mut ui_event = UiEvent::click(source.get_attribute("data-action").unwrap_or_default());
		if let Some(value) = source.get_attribute("data-value") {
			ui_event = ui_event.with_value(value);
		}
		nav.dispatch(&ui_event);
	});

	let nav = navigator.clone();
	add_listener(&document, "submit", move |event| {
		let Some(form) = event_element(&event).and_then(|el| el.closest("form[data-action]").ok().flatten())
		else {
			return;
		};
		event.prevent_default();
		let action = form.get_attribute("data-action").unwrap_or_default();
		nav.dispatch(&UiEvent::submit(action, form_fields(&form)));
	});

	let nav = navigator.clone();
	add_listener(&document, "change", move |event| {
		let Some(source) = event_element(&event) else {
			return;
		};
		let (Some(action), Some(value)) = (source.get_attribute("data-action"), control_value(&source))
		else {
			return;
		};
		nav.dispatch(&UiEvent::change(action, value));
	});

	add_listener(&window, "popstate", move |_event| {
		debug_log!("popstate");
		if let Err(err) = navigator.handle_pop_state() {
			warn_log!("back/forward navigation failed: {}", err);
		}
	});
}
