//! URL locations and navigation requests.

/// A path with its decoded query parameters, in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
	path: String,
	query: Vec<(String, String)>,
}

impl Location {
	/// Parses `path?query#fragment`. The fragment is dropped.
	pub fn parse(url: &str) -> Self {
		let url = url.split('#').next().unwrap_or_default();
		let (path, query) = match url.split_once('?') {
			Some((path, query)) => (path, query),
			None => (url, ""),
		};
		let query = serde_urlencoded::from_str::<Vec<(String, String)>>(query).unwrap_or_default();

		Self {
			path: if path.is_empty() { "/".to_string() } else { path.to_string() },
			query,
		}
	}

	/// Returns the path portion.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns all query pairs in order.
	pub fn query(&self) -> &[(String, String)] {
		&self.query
	}

	/// Returns the first value for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.query
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Sets `key` to `value`, keeping its position when already present.
	///
	/// Later duplicates of `key` are dropped; every other pair is kept as is.
	pub fn set(&mut self, key: &str, value: impl Into<String>) {
		let value = value.into();
		match self.query.iter().position(|(k, _)| k == key) {
			Some(index) => {
				self.query[index].1 = value;
				let mut seen = 0;
				self.query.retain(|(k, _)| {
					if k != key {
						return true;
					}
					seen += 1;
					seen == 1
				});
			}
			None => self.query.push((key.to_string(), value)),
		}
	}

	/// Returns a copy with `key` set to `value`.
	pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
		self.set(key, value);
		self
	}

	/// Serialises back to `path?query`.
	pub fn to_url(&self) -> String {
		match serde_urlencoded::to_string(&self.query) {
			Ok(query) if !query.is_empty() => format!("{}?{}", self.path, query),
			_ => self.path.clone(),
		}
	}
}

impl std::fmt::Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_url())
	}
}

/// One call to [`Navigator::navigate`](super::Navigator::navigate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
	/// The target exactly as requested.
	pub target: String,
	/// The parsed target.
	pub location: Location,
	/// Whether a history entry is pushed.
	pub push_history: bool,
}

impl NavigationRequest {
	/// Creates a request for `target`.
	pub fn new(target: &str, push_history: bool) -> Self {
		Self {
			target: target.to_string(),
			location: Location::parse(target),
			push_history,
		}
	}

	/// Returns the path used for route matching.
	pub fn path(&self) -> &str {
		self.location.path()
	}
}
