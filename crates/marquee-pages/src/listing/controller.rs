//! Reconciles a list page's URL with its pagination controls.

use super::{LabelStyle, ListQueryState, PaginationWindow};
use crate::component::{ElementView, IntoView, View};
use crate::router::Location;

/// Per-render helper for list pages.
///
/// Built fresh from the URL on every render; it never caches state between
/// navigations.
#[derive(Debug, Clone)]
pub struct ListController {
	location: Location,
	state: ListQueryState,
	labels: LabelStyle,
}

impl ListController {
	/// Creates a controller for `location`.
	pub fn new(location: Location, default_page_size: u32, labels: LabelStyle) -> Self {
		let state = ListQueryState::from_location(&location, default_page_size);
		Self {
			location,
			state,
			labels,
		}
	}

	/// Creates a controller for `path?query`.
	pub fn from_url(url: &str, default_page_size: u32, labels: LabelStyle) -> Self {
		Self::new(Location::parse(url), default_page_size, labels)
	}

	/// Returns the state read from the URL.
	pub fn state(&self) -> &ListQueryState {
		&self.state
	}

	/// Returns the URL the controller was built from.
	pub fn location(&self) -> &Location {
		&self.location
	}

	/// Computes the pagination window for a result set of `total_count`.
	pub fn window(&self, total_count: u64) -> PaginationWindow {
		PaginationWindow::compute(self.state.page, total_count, self.state.page_size, self.labels)
	}

	/// Returns the URL of `page`, keeping every other query parameter.
	pub fn page_url(&self, page: u32) -> String {
		self.location
			.clone()
			.with("page", page.to_string())
			.with("pageSize", self.state.page_size.to_string())
			.to_url()
	}

	/// Returns the URL with `key` set to `value`, keeping every other
	/// query parameter in place.
	pub fn with_param(&self, key: &str, value: &str) -> String {
		self.location.clone().with(key, value).to_url()
	}

	/// Renders prev, page-number and next controls as internal links.
	pub fn render_pagination(&self, window: &PaginationWindow) -> View {
		let entries = window.entries.iter().map(|entry| {
			let class = if entry.active { "page active" } else { "page" };
			self.link(entry.page, entry.label.to_string()).class(class)
		});

		ElementView::new("nav")
			.class("pagination")
			.child(self.step(window.prev(), "\u{2190}", "prev"))
			.children(entries)
			.child(self.step(window.next(), "\u{2192}", "next"))
			.into_view()
	}

	/// Renders `items` as a list, or `empty_message` when there are none.
	pub fn render_results(&self, items: Vec<View>, empty_message: &'static str) -> View {
		if items.is_empty() {
			return Self::render_empty(empty_message);
		}
		ElementView::new("ul")
			.class("results")
			.children(items.into_iter().map(|item| ElementView::new("li").child(item)))
			.into_view()
	}

	/// Renders the empty-state message.
	pub fn render_empty(message: &'static str) -> View {
		ElementView::new("p").class("empty").child(message).into_view()
	}

	fn link(&self, page: u32, label: String) -> ElementView {
		ElementView::new("a")
			.attr("href", self.page_url(page))
			.flag("data-link", true)
			.child(label)
	}

	fn step(&self, target: Option<u32>, label: &'static str, class: &'static str) -> ElementView {
		match target {
			Some(page) => ElementView::new("a")
				.class(class)
				.attr("href", self.page_url(page))
				.flag("data-link", true)
				.child(label),
			None => ElementView::new("button")
				.class(class)
				.flag("disabled", true)
				.child(label),
		}
	}
}
