//! Marquee Pages - client-side navigation engine
//!
//! The browser half of the Marquee movie catalog. Everything with
//! state-machine behavior on the client lives here; the pages themselves and
//! the REST collaborator live in `marquee-client` and `marquee-api`.
//!
//! ## Architecture
//!
//! - [`session`]: the credential store shared by every page
//! - [`router`]: route table, pattern matching and the [`Navigator`]
//! - [`listing`]: URL-driven pagination, filter and sort state for list pages
//! - [`component`]: the [`Page`] lifecycle contract and the render tree
//! - [`platform`]: history, storage and outlet backends (browser and in-memory)
//! - [`spawn`]: single-threaded task spawning for page data fetches
//!
//! ## Example
//!
//! ```ignore
//! use marquee_pages::platform::{MemoryHistory, MemoryOutlet, MemoryStorage};
//! use marquee_pages::router::{Navigator, RouteTable};
//! use marquee_pages::session::SessionStore;
//!
//! let session = SessionStore::load(MemoryStorage::shared(), "jwt");
//! let table = RouteTable::builder()
//!     .exact("/", false, || Box::new(HomePage::default()))
//!     .build()?;
//! let navigator = Navigator::new(table, session, MemoryHistory::shared("/"), MemoryOutlet::shared(), "/account/login");
//! navigator.initialize();
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod listing;
pub mod logging;
pub mod platform;
pub mod router;
pub mod session;
pub mod spawn;

pub use component::{
	ElementView, EventFlow, EventKind, IntoView, Page, PageContext, PageHandle, UiEvent, View,
};
pub use listing::{LabelStyle, ListController, ListQueryState, PageEntry, PaginationWindow};
pub use router::{
	Location, NavigationOutcome, NavigationRequest, Navigator, NavigatorHandle, Route,
	RouteParams, RoutePattern, RouteTable, RouterError,
};
pub use session::SessionStore;

// Logging macros are automatically exported via #[macro_export]
