//! Errors raised at the REST boundary.

use thiserror::Error;

/// Result alias for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// A failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
	/// 401: the credential is missing, expired or wrong.
	#[error("unauthorized: {0}")]
	Unauthorized(String),

	/// 403: the account exists but its email is not verified.
	#[error("forbidden: {0}")]
	Forbidden(String),

	/// 429: too many requests, typically verification mails.
	#[error("too many requests")]
	RateLimited,

	/// Any other non-2xx status.
	#[error("request failed with status {status}: {message}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Response body, trimmed.
		message: String,
	},

	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),

	/// A 2xx body that does not match the expected shape.
	#[error("failed to decode response: {0}")]
	Decode(String),
}

impl ApiError {
	/// Maps a non-2xx status and its body to an error.
	///
	/// Bodies of the form `{"message": ...}` contribute their message.
	pub fn from_status(status: u16, body: &str) -> Self {
		let message = serde_json::from_str::<serde_json::Value>(body)
			.ok()
			.and_then(|value| value.get("message")?.as_str().map(str::to_string))
			.unwrap_or_else(|| body.trim().to_string());

		match status {
			401 => Self::Unauthorized(message),
			403 => Self::Forbidden(message),
			429 => Self::RateLimited,
			_ => Self::Status { status, message },
		}
	}

	/// Returns the HTTP status behind the error, if one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Unauthorized(_) => Some(401),
			Self::Forbidden(_) => Some(403),
			Self::RateLimited => Some(429),
			Self::Status { status, .. } => Some(*status),
			Self::Network(_) | Self::Decode(_) => None,
		}
	}
}

impl From<reqwest::Error> for ApiError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_decode() {
			Self::Decode(err.to_string())
		} else {
			Self::Network(err.to_string())
		}
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(401, r#"{"success":false,"message":"Invalid credentials"}"#, ApiError::Unauthorized("Invalid credentials".to_string()))]
	#[case(403, "User mail is not confirmed\n", ApiError::Forbidden("User mail is not confirmed".to_string()))]
	#[case(429, "Email not found in token", ApiError::RateLimited)]
	#[case(500, "Internal server error\n", ApiError::Status { status: 500, message: "Internal server error".to_string() })]
	fn test_from_status(#[case] status: u16, #[case] body: &str, #[case] expected: ApiError) {
		let err = ApiError::from_status(status, body);
		assert_eq!(err, expected);
		assert_eq!(err.status(), Some(status));
	}

	#[rstest]
	fn test_transport_errors_have_no_status() {
		assert_eq!(ApiError::Network("offline".to_string()).status(), None);
	}
}
