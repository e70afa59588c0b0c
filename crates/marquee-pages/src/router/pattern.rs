//! Route pattern matching.
//!
//! Two kinds of pattern exist:
//!
//! - `Exact`: the path must equal the pattern string
//! - `Parametrized`: an anchored regex whose capture groups become the
//!   route's parameters
//!
//! Parametrized patterns can be written with placeholders, which compile to
//! a regex:
//!
//! - `{name}` captures one path segment (excludes `/`)
//! - `{name:int}` captures a run of ASCII digits
//! - `{name:*}` captures the rest of the path (includes `/`)
//!
//! Both kinds match against the path only; the query string never takes part
//! in matching.

use super::RouterError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::str::FromStr;

/// Maximum allowed length for a route pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed size for a compiled route regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20;

/// Parameters captured by a parametrized route.
///
/// Values are available positionally (capture group order) and, for named
/// groups, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
	positional: Vec<String>,
	named: HashMap<String, String>,
}

impl RouteParams {
	/// Creates parameters from positional values.
	pub fn from_positional<I, S>(values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			positional: values.into_iter().map(Into::into).collect(),
			named: HashMap::new(),
		}
	}

	/// Returns the value of capture group `index` (0-based).
	pub fn positional(&self, index: usize) -> Option<&str> {
		self.positional.get(index).map(String::as_str)
	}

	/// Returns the value of the named parameter.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.named.get(name).map(String::as_str)
	}

	/// Parses the named parameter, falling back to the first positional one.
	pub fn parse<T: FromStr>(&self, name: &str) -> Option<T> {
		self.get(name)
			.or_else(|| self.positional(0))
			.and_then(|value| value.parse().ok())
	}

	/// Returns the number of captured values.
	pub fn len(&self) -> usize {
		self.positional.len()
	}

	/// Returns true when nothing was captured.
	pub fn is_empty(&self) -> bool {
		self.positional.is_empty()
	}
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub enum RoutePattern {
	/// Matches only the identical path.
	Exact(String),
	/// Matches an anchored regex and captures its groups.
	Parametrized {
		/// The pattern as declared.
		source: String,
		/// The compiled, anchored regex.
		regex: Regex,
	},
}

impl RoutePattern {
	/// Creates an exact pattern.
	pub fn exact(path: impl Into<String>) -> Self {
		Self::Exact(path.into())
	}

	/// Parses a pattern: placeholder syntax yields a parametrized pattern,
	/// anything else an exact one.
	pub fn parse(pattern: &str) -> Result<Self, RouterError> {
		if !pattern.contains('{') {
			return Ok(Self::exact(pattern));
		}
		let regex_str = compile_placeholders(pattern)?;
		Ok(Self::Parametrized {
			source: pattern.to_string(),
			regex: build_regex(pattern, &regex_str)?,
		})
	}

	/// Creates a parametrized pattern from a raw regex.
	///
	/// The regex is anchored at both ends; unnamed groups are exposed
	/// positionally.
	pub fn regex(pattern: &str) -> Result<Self, RouterError> {
		let trimmed = pattern.trim_start_matches('^').trim_end_matches('$');
		let anchored = format!("^(?:{})$", trimmed);
		Ok(Self::Parametrized {
			source: pattern.to_string(),
			regex: build_regex(pattern, &anchored)?,
		})
	}

	/// Returns the pattern as declared.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Exact(path) => path,
			Self::Parametrized { source, .. } => source,
		}
	}

	/// Returns true for exact patterns.
	pub fn is_exact(&self) -> bool {
		matches!(self, Self::Exact(_))
	}

	/// Matches `path` (no query string) against this pattern.
	pub fn matches(&self, path: &str) -> Option<RouteParams> {
		match self {
			Self::Exact(expected) => (expected == path).then(RouteParams::default),
			Self::Parametrized { regex, .. } => {
				let caps = regex.captures(path)?;
				let mut params = RouteParams::default();
				for (index, name) in regex.capture_names().enumerate().skip(1) {
					let Some(value) = caps.get(index) else {
						continue;
					};
					let value = value.as_str().to_string();
					if let Some(name) = name {
						params.named.insert(name.to_string(), value.clone());
					}
					params.positional.push(value);
				}
				Some(params)
			}
		}
	}
}

fn build_regex(pattern: &str, regex_str: &str) -> Result<Regex, RouterError> {
	if pattern.len() > MAX_PATTERN_LENGTH {
		return Err(RouterError::InvalidPattern {
			pattern: pattern.to_string(),
			reason: format!(
				"length {} exceeds maximum of {} bytes",
				pattern.len(),
				MAX_PATTERN_LENGTH
			),
		});
	}

	RegexBuilder::new(regex_str)
		.size_limit(MAX_REGEX_SIZE)
		.build()
		.map_err(|e| RouterError::InvalidPattern {
			pattern: pattern.to_string(),
			reason: e.to_string(),
		})
}

fn compile_placeholders(pattern: &str) -> Result<String, RouterError> {
	let invalid = |reason: &str| RouterError::InvalidPattern {
		pattern: pattern.to_string(),
		reason: reason.to_string(),
	};

	let mut regex_str = String::from("^");
	let mut chars = pattern.chars();

	while let Some(c) = chars.next() {
		if c != '{' {
			regex_str.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
			continue;
		}

		let mut placeholder = String::new();
		let mut closed = false;
		for next in chars.by_ref() {
			if next == '}' {
				closed = true;
				break;
			}
			placeholder.push(next);
		}
		if !closed {
			return Err(invalid("unclosed placeholder"));
		}

		let (name, kind) = placeholder
			.split_once(':')
			.unwrap_or((placeholder.as_str(), ""));
		if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
			return Err(invalid("placeholder names must be alphanumeric"));
		}
		let body = match kind {
			"" => "[^/]+",
			"int" => "[0-9]+",
			"*" => ".*",
			_ => return Err(invalid("unknown placeholder kind")),
		};
		regex_str.push_str(&format!("(?P<{}>{})", name, body));
	}

	regex_str.push('$');
	Ok(regex_str)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/movies", "/movies", true)]
	#[case("/movies", "/movies/", false)]
	#[case("/account/", "/account", false)]
	fn test_exact(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
		let pattern = RoutePattern::parse(pattern).unwrap();
		assert!(pattern.is_exact());
		assert_eq!(pattern.matches(path).is_some(), expected);
	}

	#[rstest]
	fn test_placeholder_int() {
		let pattern = RoutePattern::parse("/movies/{id:int}").unwrap();

		let params = pattern.matches("/movies/42").unwrap();
		assert_eq!(params.get("id"), Some("42"));
		assert_eq!(params.positional(0), Some("42"));
		assert_eq!(params.parse::<u64>("id"), Some(42));

		assert!(pattern.matches("/movies/abc").is_none());
		assert!(pattern.matches("/movies/42/cast").is_none());
	}

	#[rstest]
	fn test_placeholder_segment_and_wildcard() {
		let token = RoutePattern::parse("/account/verify/{token}").unwrap();
		assert_eq!(
			token.matches("/account/verify/abc.DEF-1").unwrap().get("token"),
			Some("abc.DEF-1")
		);
		assert!(token.matches("/account/verify/a/b").is_none());

		let rest = RoutePattern::parse("/static/{path:*}").unwrap();
		assert_eq!(rest.matches("/static/a/b.css").unwrap().get("path"), Some("a/b.css"));
	}

	#[rstest]
	fn test_literal_characters_are_escaped() {
		let pattern = RoutePattern::parse("/a.b/{id}").unwrap();
		assert!(pattern.matches("/a.b/1").is_some());
		assert!(pattern.matches("/axb/1").is_none());
	}

	#[rstest]
	fn test_raw_regex_is_anchored() {
		let pattern = RoutePattern::regex(r"/movies/(\d+)").unwrap();

		assert_eq!(pattern.matches("/movies/7").unwrap().positional(0), Some("7"));
		assert!(pattern.matches("/movies/7x").is_none());
		assert!(pattern.matches("/old/movies/7").is_none());
	}

	#[rstest]
	fn test_raw_regex_with_explicit_anchors() {
		let pattern = RoutePattern::regex(r"^/actors/(\d+)$").unwrap();
		assert_eq!(pattern.matches("/actors/3").unwrap().len(), 1);
	}

	#[rstest]
	#[case("/movies/{id")]
	#[case("/movies/{}")]
	#[case("/movies/{id:float}")]
	fn test_invalid_placeholders(#[case] pattern: &str) {
		assert!(matches!(
			RoutePattern::parse(pattern),
			Err(RouterError::InvalidPattern { .. })
		));
	}

	#[rstest]
	fn test_invalid_regex() {
		assert!(RoutePattern::regex(r"/movies/(\d+").is_err());
	}
}
