//! Client-side routing.
//!
//! - [`RoutePattern`] and [`RouteTable`]: the static, ordered route list
//! - [`Location`]: a parsed path plus query string
//! - [`Navigator`]: resolves URLs, enforces auth guards, manages history and
//!   swaps pages in the outlet

mod error;
mod location;
mod navigator;
mod pattern;
mod table;

pub use error::RouterError;
pub use location::{Location, NavigationRequest};
pub use navigator::{NavigationOutcome, Navigator, NavigatorHandle, NotFoundPage, ShellHandler};
pub use pattern::{RouteParams, RoutePattern};
pub use table::{PageFactory, Route, RouteMatch, RouteTable, RouteTableBuilder};
