//! In-memory [`CatalogApi`] that records every call.
//!
//! Enabled with the `testing` feature for the test suites of dependent
//! crates.

use crate::client::{CatalogApi, decode_collection};
use crate::error::{ApiError, ApiResult};
use crate::models::{
	Actor, ActorDetail, AuthResponse, CollectionKind, Genre, Movie, MovieDetail, SearchResults,
};
use crate::params::SearchParams;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Builds a movie with only an id and a title.
pub fn movie(id: i64, title: &str) -> Movie {
	Movie {
		id,
		title: title.to_string(),
		tagline: None,
		release_year: None,
		overview: None,
		score: None,
		popularity: None,
		language: None,
		poster_url: None,
		trailer_url: None,
		genres: Vec::new(),
		casting: Vec::new(),
		keywords: Vec::new(),
		status: None,
	}
}

/// Recording fake of the REST service.
#[derive(Debug, Default)]
pub struct FakeApi {
	calls: RefCell<Vec<String>>,
	failures: RefCell<HashMap<&'static str, ApiError>>,
	movies: RefCell<Vec<Movie>>,
	actors: RefCell<Vec<Actor>>,
	genres: RefCell<Vec<Genre>>,
	total_count: RefCell<Option<u64>>,
	auth: RefCell<AuthResponse>,
	verified: RefCell<bool>,
	bare_collections: Cell<bool>,
}

impl FakeApi {
	/// Creates an empty fake whose account calls succeed.
	pub fn new() -> Self {
		let fake = Self::default();
		*fake.auth.borrow_mut() = AuthResponse {
			success: true,
			message: "ok".to_string(),
			jwt: None,
		};
		*fake.verified.borrow_mut() = true;
		fake
	}

	/// Sets the movies served by every list and lookup call.
	pub fn with_movies(self, movies: Vec<Movie>) -> Self {
		*self.movies.borrow_mut() = movies;
		self
	}

	/// Sets the actors served by `actor`.
	pub fn with_actors(self, actors: Vec<Actor>) -> Self {
		*self.actors.borrow_mut() = actors;
		self
	}

	/// Sets the genre list.
	pub fn with_genres(self, genres: Vec<Genre>) -> Self {
		*self.genres.borrow_mut() = genres;
		self
	}

	/// Overrides the `totalCount` of list responses.
	pub fn with_total_count(self, total: u64) -> Self {
		*self.total_count.borrow_mut() = Some(total);
		self
	}

	/// Serves collections as a bare JSON list, decoded like an HTTP body.
	pub fn with_bare_collections(self) -> Self {
		self.bare_collections.set(true);
		self
	}

	/// Sets the body returned by every account call.
	pub fn with_auth(self, response: AuthResponse) -> Self {
		*self.auth.borrow_mut() = response;
		self
	}

	/// Sets the result of `verify_email`.
	pub fn with_verified(self, verified: bool) -> Self {
		*self.verified.borrow_mut() = verified;
		self
	}

	/// Makes `operation` fail with `error` until [`recover`](Self::recover).
	pub fn fail(&self, operation: &'static str, error: ApiError) {
		self.failures.borrow_mut().insert(operation, error);
	}

	/// Clears every configured failure.
	pub fn recover(&self) {
		self.failures.borrow_mut().clear();
	}

	/// Returns the recorded calls, e.g. `"movie 7"`.
	pub fn calls(&self) -> Vec<String> {
		self.calls.borrow().clone()
	}

	/// Returns true when a recorded call starts with `prefix`.
	pub fn called(&self, prefix: &str) -> bool {
		self.calls.borrow().iter().any(|call| call.starts_with(prefix))
	}

	fn record(&self, operation: &'static str, args: String) -> ApiResult<()> {
		let call = if args.is_empty() {
			operation.to_string()
		} else {
			format!("{} {}", operation, args)
		};
		self.calls.borrow_mut().push(call);
		match self.failures.borrow().get(operation) {
			Some(err) => Err(err.clone()),
			None => Ok(()),
		}
	}

	fn page(&self, params: &SearchParams) -> SearchResults {
		let movies = self.movies.borrow().clone();
		SearchResults {
			total_count: self.total_count.borrow().unwrap_or(movies.len() as u64),
			page: params.page.unwrap_or(1),
			page_size: params.page_size.unwrap_or(50),
			movies,
		}
	}

	fn auth(&self) -> AuthResponse {
		self.auth.borrow().clone()
	}
}

#[async_trait(?Send)]
impl CatalogApi for FakeApi {
	async fn top_movies(&self) -> ApiResult<Vec<Movie>> {
		self.record("top_movies", String::new())?;
		Ok(self.movies.borrow().clone())
	}

	async fn random_movies(&self) -> ApiResult<Vec<Movie>> {
		self.record("random_movies", String::new())?;
		Ok(self.movies.borrow().clone())
	}

	async fn search_movies(&self, params: &SearchParams) -> ApiResult<SearchResults> {
		self.record("search_movies", params.to_query_string())?;
		Ok(self.page(params))
	}

	async fn movie(&self, id: i64) -> ApiResult<MovieDetail> {
		self.record("movie", id.to_string())?;
		let movies = self.movies.borrow();
		let movie = movies
			.iter()
			.find(|movie| movie.id == id)
			.cloned()
			.ok_or_else(|| ApiError::Status {
				status: 404,
				message: "Failed to get movie by ID".to_string(),
			})?;
		Ok(MovieDetail {
			related_movies: movies.iter().filter(|m| m.id != id).cloned().collect(),
			movie,
		})
	}

	async fn actor(&self, id: i64) -> ApiResult<ActorDetail> {
		self.record("actor", id.to_string())?;
		let actor = self
			.actors
			.borrow()
			.iter()
			.find(|actor| actor.id == id)
			.cloned()
			.ok_or_else(|| ApiError::Status {
				status: 404,
				message: "Failed to get actor".to_string(),
			})?;
		Ok(ActorDetail {
			actor,
			related_movies: self.movies.borrow().clone(),
		})
	}

	async fn genres(&self) -> ApiResult<Vec<Genre>> {
		self.record("genres", String::new())?;
		Ok(self.genres.borrow().clone())
	}

	async fn register(&self, name: &str, email: &str, _password: &str) -> ApiResult<AuthResponse> {
		self.record("register", format!("{} {}", name, email))?;
		Ok(self.auth())
	}

	async fn authenticate(&self, email: &str, _password: &str) -> ApiResult<AuthResponse> {
		self.record("authenticate", email.to_string())?;
		Ok(self.auth())
	}

	async fn verify_email(&self, token: &str) -> ApiResult<bool> {
		self.record("verify_email", token.to_string())?;
		Ok(*self.verified.borrow())
	}

	async fn resend_verification(&self, email: &str) -> ApiResult<AuthResponse> {
		self.record("resend_verification", email.to_string())?;
		Ok(self.auth())
	}

	async fn reset_password(&self, _current: &str, _new: &str) -> ApiResult<AuthResponse> {
		self.record("reset_password", String::new())?;
		Ok(self.auth())
	}

	async fn delete_account(&self) -> ApiResult<AuthResponse> {
		self.record("delete_account", String::new())?;
		Ok(self.auth())
	}

	async fn collection(
		&self,
		kind: CollectionKind,
		params: &SearchParams,
	) -> ApiResult<SearchResults> {
		self.record("collection", format!("{} {}", kind, params.to_query_string()))?;
		if self.bare_collections.get() {
			let body = serde_json::to_string(&*self.movies.borrow())?;
			return decode_collection(&body, params);
		}
		Ok(self.page(params))
	}

	async fn add_to_collection(
		&self,
		movie_id: i64,
		kind: CollectionKind,
		score: Option<u8>,
	) -> ApiResult<AuthResponse> {
		let args = match score {
			Some(score) => format!("{} {} {}", movie_id, kind, score),
			None => format!("{} {}", movie_id, kind),
		};
		self.record("add_to_collection", args)?;
		Ok(self.auth())
	}

	async fn remove_from_collection(
		&self,
		movie_id: i64,
		kind: CollectionKind,
	) -> ApiResult<AuthResponse> {
		self.record("remove_from_collection", format!("{} {}", movie_id, kind))?;
		Ok(self.auth())
	}
}
