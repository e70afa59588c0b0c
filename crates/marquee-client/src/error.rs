//! Client error type.

use crate::validation::ValidationErrors;
use marquee_api::ApiError;
use marquee_pages::RouterError;
use thiserror::Error;

/// Anything that can go wrong in the client.
///
/// None of these is fatal: every variant ends as an alert or a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
	/// A REST call failed.
	#[error(transparent)]
	Remote(#[from] ApiError),

	/// Form input was rejected before any request.
	#[error(transparent)]
	Validation(#[from] ValidationErrors),

	/// Settings could not be loaded.
	#[error("configuration error: {0}")]
	Config(String),

	/// The route table or a navigation failed.
	#[error(transparent)]
	Router(#[from] RouterError),
}
