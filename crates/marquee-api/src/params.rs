//! Query parameters of list endpoints.

use serde::Serialize;

/// Filters, sort and pagination of a movie list request.
///
/// Serialises with the API's key names; empty values are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
	/// Search text.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub query: String,
	/// Sort key (`score`, `name`, `date`).
	#[serde(skip_serializing_if = "String::is_empty")]
	pub order: String,
	/// Genre id.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub genre: String,
	/// Release year.
	#[serde(rename = "releaseYear", skip_serializing_if = "String::is_empty")]
	pub release_year: String,
	/// 1-based page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page: Option<u32>,
	/// Results per page.
	#[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
	pub page_size: Option<u32>,
}

impl SearchParams {
	/// Creates parameters searching for `query`.
	pub fn query(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Self::default()
		}
	}

	/// Sets the page and page size.
	pub fn paged(mut self, page: u32, page_size: u32) -> Self {
		self.page = Some(page);
		self.page_size = Some(page_size);
		self
	}

	/// Encodes the parameters as a query string, without the leading `?`.
	pub fn to_query_string(&self) -> String {
		serde_urlencoded::to_string(self).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_full_query_string() {
		let params = SearchParams {
			query: "star wars".to_string(),
			order: "score".to_string(),
			genre: "12".to_string(),
			release_year: "1977".to_string(),
			page: Some(2),
			page_size: Some(50),
		};

		assert_eq!(
			params.to_query_string(),
			"query=star+wars&order=score&genre=12&releaseYear=1977&page=2&pageSize=50"
		);
	}

	#[rstest]
	fn test_empty_values_omitted() {
		assert_eq!(SearchParams::default().to_query_string(), "");
		assert_eq!(
			SearchParams::query("heat").paged(1, 20).to_query_string(),
			"query=heat&page=1&pageSize=20"
		);
	}
}
