//! # Marquee
//!
//! A single-page client for a movie catalog: search and browse movies,
//! keep favorites and a watchlist, and manage an account against the
//! catalog's REST service.
//!
//! ## Crates
//!
//! - [`pages`]: the navigation engine (session, routing, list views, page
//!   lifecycle, platform backends)
//! - [`api`]: typed REST client and its error taxonomy
//! - [`client`]: the application itself: pages, shell actions, settings
//!
//! ## Feature Flags
//!
//! - `debug-hooks` - debug logging from the navigation engine
//! - `testing` - `api::testing::FakeApi`, a recording fake of the REST service

pub use marquee_api as api;
pub use marquee_client as client;
pub use marquee_pages as pages;

pub use marquee_client::{App, Platform, Settings};
pub use marquee_pages::{Navigator, Page, SessionStore};
