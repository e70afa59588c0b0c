//! Marquee API - REST collaborator for the movie catalog client
//!
//! - [`CatalogApi`]: the operations the client pages consume
//! - [`HttpApi`]: the `reqwest` implementation talking to `/api/`
//! - [`models`]: response bodies
//! - [`SearchParams`]: list filters in the API's query-string format
//!
//! Every request carries `Authorization: Bearer <credential>` while a
//! credential is available. Non-2xx responses become an [`ApiError`] the
//! client turns into an alert or a redirect.

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod models;
pub mod params;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::{CatalogApi, HttpApi};
pub use error::{ApiError, ApiResult};
pub use models::{
	Actor, ActorDetail, AuthResponse, CollectionKind, Genre, Movie, MovieDetail, SearchResults,
};
pub use params::SearchParams;
