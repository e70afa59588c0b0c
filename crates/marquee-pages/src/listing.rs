//! URL-driven state for paginated, filterable lists.
//!
//! The query string is the only source of truth: every render reads a fresh
//! [`ListQueryState`] from the URL, so back/forward and shared links
//! reproduce the same view.

mod controller;
mod query;
mod window;

pub use controller::ListController;
pub use query::{DEFAULT_PAGE_SIZE, ListQueryState};
pub use window::{LabelStyle, PageEntry, PaginationWindow};
