//! Error types for client-side routing.

/// Error type for router operations.
///
/// None of these reach the user: a missing route renders the fallback page
/// and auth failures redirect silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// A route pattern could not be compiled.
	#[error("Invalid route pattern '{pattern}': {reason}")]
	InvalidPattern {
		/// The offending pattern.
		pattern: String,
		/// Why it was rejected.
		reason: String,
	},
	/// No declared route matches the path.
	#[error("Route not found: {0}")]
	NotFound(String),
	/// The navigator is gone or the navigation could not start.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_router_error_display() {
		assert_eq!(
			RouterError::NotFound("/test/".to_string()).to_string(),
			"Route not found: /test/"
		);
		assert_eq!(
			RouterError::InvalidPattern {
				pattern: "/a/{".to_string(),
				reason: "unclosed placeholder".to_string(),
			}
			.to_string(),
			"Invalid route pattern '/a/{': unclosed placeholder"
		);
	}
}
