//! Client settings.
//!
//! Settings are read from TOML. Absent fields keep their defaults, so an
//! empty document yields [`Settings::default`].
//!
//! ```toml
//! api_base_url = "/api/"
//! login_path = "/account/login"
//! default_page_size = 50
//! resend_delay_secs = 55
//! pagination_labels = "legacy"
//!
//! [storage]
//! credential = "jwt"
//! ```

use crate::error::ClientError;
use marquee_pages::LabelStyle;
use marquee_pages::listing::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Settings bundled with the client.
pub const BUNDLED_SETTINGS: &str = include_str!("../marquee.toml");

/// Keys of the values the client persists in durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
	/// Bearer credential.
	pub credential: String,
	/// Email address awaiting verification.
	pub unverified_email: String,
	/// Time the last verification mail was requested, in epoch milliseconds.
	pub last_email_sent: String,
}

impl Default for StorageKeys {
	fn default() -> Self {
		Self {
			credential: "jwt".to_string(),
			unverified_email: "unverifiedEmail".to_string(),
			last_email_sent: "lastEmailSentTime".to_string(),
		}
	}
}

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Root of the REST API. Relative values resolve against the page origin.
	pub api_base_url: String,
	/// Where guarded routes redirect logged-out users.
	pub login_path: String,
	/// Page size of list views when the URL has none.
	pub default_page_size: u32,
	/// Minimum seconds between two verification mails.
	pub resend_delay_secs: u64,
	/// Labeling of long pagination windows.
	pub pagination_labels: LabelStyle,
	/// Durable storage keys.
	pub storage: StorageKeys,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			api_base_url: "/api/".to_string(),
			login_path: "/account/login".to_string(),
			default_page_size: DEFAULT_PAGE_SIZE,
			resend_delay_secs: 55,
			pagination_labels: LabelStyle::Legacy,
			storage: StorageKeys::default(),
		}
	}
}

impl Settings {
	/// Parses and validates settings from TOML.
	pub fn from_toml_str(source: &str) -> Result<Self, ClientError> {
		let settings: Settings = toml::from_str(source)
			.map_err(|e| ClientError::Config(format!("TOML parse error: {}", e)))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Returns the settings compiled into the client.
	pub fn bundled() -> Result<Self, ClientError> {
		Self::from_toml_str(BUNDLED_SETTINGS)
	}

	/// Checks invariants the navigator and list views rely on.
	pub fn validate(&self) -> Result<(), ClientError> {
		if !self.login_path.starts_with('/') {
			return Err(ClientError::Config(format!(
				"login_path must be absolute, got '{}'",
				self.login_path
			)));
		}
		if self.default_page_size == 0 {
			return Err(ClientError::Config(
				"default_page_size must be positive".to_string(),
			));
		}
		let keys = [
			&self.storage.credential,
			&self.storage.unverified_email,
			&self.storage.last_email_sent,
		];
		if keys.iter().any(|key| key.is_empty()) {
			return Err(ClientError::Config(
				"storage keys must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Resolves [`api_base_url`](Self::api_base_url) against `origin`.
	pub fn api_url(&self, origin: &str) -> String {
		if self.api_base_url.contains("://") {
			return self.api_base_url.clone();
		}
		format!(
			"{}/{}",
			origin.trim_end_matches('/'),
			self.api_base_url.trim_start_matches('/')
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_bundled_matches_defaults() {
		assert_eq!(Settings::bundled().unwrap(), Settings::default());
	}

	#[rstest]
	fn test_partial_document_keeps_defaults() {
		let settings = Settings::from_toml_str(
			r#"
			pagination_labels = "sequential"

			[storage]
			credential = "token"
			"#,
		)
		.unwrap();

		assert_eq!(settings.pagination_labels, LabelStyle::Sequential);
		assert_eq!(settings.storage.credential, "token");
		assert_eq!(settings.storage.unverified_email, "unverifiedEmail");
		assert_eq!(settings.resend_delay_secs, 55);
	}

	#[rstest]
	#[case("default_page_size = 0")]
	#[case("login_path = \"account/login\"")]
	#[case("pagination_labels = \"fancy\"")]
	#[case("[storage]\ncredential = \"\"")]
	#[case("default_page_size = \"many\"")]
	fn test_invalid_settings(#[case] source: &str) {
		assert!(matches!(
			Settings::from_toml_str(source),
			Err(ClientError::Config(_))
		));
	}

	#[rstest]
	#[case("/api/", "http://localhost:8080", "http://localhost:8080/api/")]
	#[case("api/", "https://marquee.example/", "https://marquee.example/api/")]
	#[case("https://api.example/v1/", "http://localhost", "https://api.example/v1/")]
	fn test_api_url(#[case] base: &str, #[case] origin: &str, #[case] expected: &str) {
		let settings = Settings {
			api_base_url: base.to_string(),
			..Settings::default()
		};
		assert_eq!(settings.api_url(origin), expected);
	}
}
