//! Response bodies of the catalog API.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// The API encodes empty lists as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A movie genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
	/// Genre id, used as the `genre` filter value.
	pub id: i64,
	/// Display name.
	pub name: String,
}

/// An actor, as listed in a movie's cast or on the actor page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
	/// Actor id.
	pub id: i64,
	/// Given name.
	pub first_name: String,
	/// Family name.
	pub last_name: String,
	/// Portrait URL.
	#[serde(default)]
	pub image_url: Option<String>,
}

impl Actor {
	/// Returns "first last".
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
			.trim()
			.to_string()
	}
}

/// A movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
	/// Movie id.
	pub id: i64,
	/// Title.
	pub title: String,
	/// Tagline.
	#[serde(default)]
	pub tagline: Option<String>,
	/// Release year.
	#[serde(default)]
	pub release_year: Option<i32>,
	/// Plot overview.
	#[serde(default)]
	pub overview: Option<String>,
	/// Average score.
	#[serde(default)]
	pub score: Option<f64>,
	/// Popularity index.
	#[serde(default)]
	pub popularity: Option<f64>,
	/// Original language.
	#[serde(default)]
	pub language: Option<String>,
	/// Poster URL.
	#[serde(default)]
	pub poster_url: Option<String>,
	/// Trailer URL.
	#[serde(default)]
	pub trailer_url: Option<String>,
	/// Genres.
	#[serde(default, deserialize_with = "null_as_default")]
	pub genres: Vec<Genre>,
	/// Cast.
	#[serde(default, deserialize_with = "null_as_default")]
	pub casting: Vec<Actor>,
	/// Keywords.
	#[serde(default, deserialize_with = "null_as_default")]
	pub keywords: Vec<String>,
	/// Collection membership of the requesting user, e.g. "In Favorite".
	#[serde(default)]
	pub status: Option<String>,
}

impl Movie {
	/// Returns true when the movie is in the user's favorites.
	pub fn in_favorites(&self) -> bool {
		self.status
			.as_deref()
			.is_some_and(|status| status.contains("In Favorite"))
	}

	/// Returns true when the movie is on the user's watchlist.
	pub fn in_watchlist(&self) -> bool {
		self.status
			.as_deref()
			.is_some_and(|status| status.contains("In Watchlist"))
	}
}

/// `GET movies/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
	/// The movie.
	pub movie: Movie,
	/// Movies sharing genres or cast.
	#[serde(default, deserialize_with = "null_as_default")]
	pub related_movies: Vec<Movie>,
}

/// `GET actors/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorDetail {
	/// The actor.
	pub actor: Actor,
	/// Movies the actor appears in.
	#[serde(default, deserialize_with = "null_as_default")]
	pub related_movies: Vec<Movie>,
}

/// One page of a movie list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
	/// Movies on this page.
	#[serde(default, deserialize_with = "null_as_default")]
	pub movies: Vec<Movie>,
	/// Total matches across all pages.
	#[serde(default)]
	pub total_count: u64,
	/// The page served.
	#[serde(default)]
	pub page: u32,
	/// The page size used.
	#[serde(default)]
	pub page_size: u32,
}

impl SearchResults {
	/// Cuts page `page` of `page_size` movies out of an unpaginated list.
	///
	/// Pages past the end are empty; `total_count` is always the full list.
	pub fn paginate(movies: Vec<Movie>, page: u32, page_size: u32) -> Self {
		let page = page.max(1);
		let page_size = page_size.max(1);
		let total_count = movies.len() as u64;
		let skip = (page as usize - 1).saturating_mul(page_size as usize);
		Self {
			movies: movies
				.into_iter()
				.skip(skip)
				.take(page_size as usize)
				.collect(),
			total_count,
			page,
			page_size,
		}
	}

	/// Returns the number of matches, never less than the movies on this
	/// page.
	pub fn count(&self) -> u64 {
		self.total_count.max(self.movies.len() as u64)
	}
}

/// Body of every account endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthResponse {
	/// Whether the operation succeeded.
	pub success: bool,
	/// Human-readable outcome.
	#[serde(default)]
	pub message: String,
	/// Credential issued by `authenticate`.
	#[serde(default)]
	pub jwt: Option<String>,
}

impl AuthResponse {
	/// Returns the issued credential, ignoring empty strings.
	pub fn credential(&self) -> Option<&str> {
		self.jwt.as_deref().filter(|jwt| !jwt.is_empty())
	}
}

/// A user collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
	/// Favorite movies.
	Favorite,
	/// Movies to watch.
	Watchlist,
}

impl CollectionKind {
	/// Returns the wire name (`favorite`, `watchlist`).
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Favorite => "favorite",
			Self::Watchlist => "watchlist",
		}
	}

	/// Returns the API path segment listing the collection.
	pub fn endpoint(self) -> &'static str {
		match self {
			Self::Favorite => "account/favorites/",
			Self::Watchlist => "account/watchlist/",
		}
	}

	/// Returns the client page showing the collection.
	pub fn page_path(self) -> &'static str {
		match self {
			Self::Favorite => "/account/favorites",
			Self::Watchlist => "/account/watchlist",
		}
	}
}

impl fmt::Display for CollectionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for CollectionKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"favorite" | "favorites" => Ok(Self::Favorite),
			"watchlist" => Ok(Self::Watchlist),
			other => Err(format!("unknown collection '{}'", other)),
		}
	}
}
