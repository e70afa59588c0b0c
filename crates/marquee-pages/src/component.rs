//! Page lifecycle contract and render tree.
//!
//! Every navigable screen implements [`Page`]. The navigator constructs a
//! fresh page per navigation, hands it its route parameters and auth flag,
//! mounts it once and swaps the returned [`View`] into the outlet. Pages that
//! need remote data render a placeholder, spawn their fetch and commit the
//! final view through their [`PageHandle`] when the data arrives.

mod page;
mod view;

pub use page::{EventFlow, EventKind, Page, PageContext, PageHandle, UiEvent};
pub use view::{ElementView, IntoView, View, html_escape};
