//! Filter, sort and pagination state parsed from a URL.

use crate::router::Location;

/// Page size used when the URL does not carry a usable `pageSize`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// The list state encoded in a URL query string.
///
/// Keys: `q` (or `query`), `order`, `genre`, `releaseYear`, `page`,
/// `pageSize`. Text filters default to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryState {
	/// Search text.
	pub query: String,
	/// Sort key.
	pub order: String,
	/// Genre filter.
	pub genre: String,
	/// Release year filter.
	pub release_year: String,
	/// 1-based page number. Never clamped to the result count.
	pub page: u32,
	/// Results per page.
	pub page_size: u32,
}

impl Default for ListQueryState {
	fn default() -> Self {
		Self {
			query: String::new(),
			order: String::new(),
			genre: String::new(),
			release_year: String::new(),
			page: 1,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl ListQueryState {
	/// Reads the state from a parsed location.
	///
	/// Missing, empty, non-numeric or zero `page` becomes 1, and the same for
	/// `pageSize` becomes `default_page_size`.
	pub fn from_location(location: &Location, default_page_size: u32) -> Self {
		let text = |key: &str| location.get(key).unwrap_or_default().to_string();
		let query = location
			.get("q")
			.filter(|value| !value.is_empty())
			.or_else(|| location.get("query"))
			.unwrap_or_default()
			.to_string();

		Self {
			query,
			order: text("order"),
			genre: text("genre"),
			release_year: text("releaseYear"),
			page: positive(location.get("page")).unwrap_or(1),
			page_size: positive(location.get("pageSize")).unwrap_or(default_page_size.max(1)),
		}
	}

	/// Reads the state from `path?query`.
	pub fn from_url(url: &str, default_page_size: u32) -> Self {
		Self::from_location(&Location::parse(url), default_page_size)
	}

	/// Returns true when any filter besides pagination is set.
	pub fn has_filters(&self) -> bool {
		!(self.query.is_empty()
			&& self.order.is_empty()
			&& self.genre.is_empty()
			&& self.release_year.is_empty())
	}
}

fn positive(value: Option<&str>) -> Option<u32> {
	value
		.and_then(|value| value.trim().parse::<u32>().ok())
		.filter(|value| *value > 0)
}
