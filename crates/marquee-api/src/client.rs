//! The catalog API contract and its HTTP implementation.

use crate::error::{ApiError, ApiResult};
use crate::models::{
	ActorDetail, AuthResponse, CollectionKind, Genre, Movie, MovieDetail, SearchResults,
};
use crate::params::SearchParams;
use async_trait::async_trait;
use marquee_pages::{debug_log, warn_log};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::rc::Rc;

/// Everything the client pages ask of the REST service.
///
/// Futures are `!Send`: the client is single-threaded.
#[async_trait(?Send)]
pub trait CatalogApi {
	/// Highest rated movies.
	async fn top_movies(&self) -> ApiResult<Vec<Movie>>;

	/// A random selection of movies.
	async fn random_movies(&self) -> ApiResult<Vec<Movie>>;

	/// One page of search results.
	async fn search_movies(&self, params: &SearchParams) -> ApiResult<SearchResults>;

	/// A movie with related movies.
	async fn movie(&self, id: i64) -> ApiResult<MovieDetail>;

	/// An actor with their movies.
	async fn actor(&self, id: i64) -> ApiResult<ActorDetail>;

	/// All genres.
	async fn genres(&self) -> ApiResult<Vec<Genre>>;

	/// Creates an account; the user must verify their email before logging in.
	async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<AuthResponse>;

	/// Exchanges credentials for a bearer token.
	async fn authenticate(&self, email: &str, password: &str) -> ApiResult<AuthResponse>;

	/// Confirms an email address with the token from the verification mail.
	async fn verify_email(&self, token: &str) -> ApiResult<bool>;

	/// Sends the verification mail again.
	async fn resend_verification(&self, email: &str) -> ApiResult<AuthResponse>;

	/// Changes the password of the logged-in user.
	async fn reset_password(&self, current: &str, new: &str) -> ApiResult<AuthResponse>;

	/// Deletes the logged-in user's account.
	async fn delete_account(&self) -> ApiResult<AuthResponse>;

	/// One page of a user collection.
	async fn collection(
		&self,
		kind: CollectionKind,
		params: &SearchParams,
	) -> ApiResult<SearchResults>;

	/// Adds a movie to a collection, optionally with a rating.
	async fn add_to_collection(
		&self,
		movie_id: i64,
		kind: CollectionKind,
		score: Option<u8>,
	) -> ApiResult<AuthResponse>;

	/// Removes a movie from a collection.
	async fn remove_from_collection(
		&self,
		movie_id: i64,
		kind: CollectionKind,
	) -> ApiResult<AuthResponse>;
}

/// Supplies the current bearer credential for each request.
pub type TokenSource = Rc<dyn Fn() -> Option<String>>;

// Collections are served either paginated or as a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionBody {
	Page(SearchResults),
	List(Vec<Movie>),
}

impl CollectionBody {
	// A bare list is paginated here with the requested page and size.
	fn into_results(self, params: &SearchParams) -> SearchResults {
		match self {
			Self::Page(results) => results,
			Self::List(movies) => {
				let page_size = params
					.page_size
					.unwrap_or_else(|| u32::try_from(movies.len()).unwrap_or(u32::MAX));
				SearchResults::paginate(movies, params.page.unwrap_or(1), page_size)
			}
		}
	}
}

/// Decodes a collection response body requested with `params`.
#[cfg(any(test, feature = "testing"))]
pub(crate) fn decode_collection(body: &str, params: &SearchParams) -> ApiResult<SearchResults> {
	let body: CollectionBody = serde_json::from_str(body)?;
	Ok(body.into_results(params))
}

#[derive(Serialize)]
struct CollectionChange {
	movie_id: i64,
	collection: CollectionKind,
	#[serde(skip_serializing_if = "Option::is_none")]
	score: Option<u8>,
}

/// [`CatalogApi`] over HTTP.
#[derive(Clone)]
pub struct HttpApi {
	client: Client,
	base_url: String,
	token: TokenSource,
}

impl fmt::Debug for HttpApi {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HttpApi")
			.field("base_url", &self.base_url)
			.field("authenticated", &(self.token)().is_some())
			.finish()
	}
}

impl HttpApi {
	/// Creates a client for the API rooted at `base_url`.
	///
	/// `base_url` must be absolute (`https://host/api/`).
	pub fn new(base_url: impl Into<String>, token: impl Fn() -> Option<String> + 'static) -> Self {
		Self::with_client(Client::new(), base_url, token)
	}

	/// Creates a client reusing an existing `reqwest::Client`.
	pub fn with_client(
		client: Client,
		base_url: impl Into<String>,
		token: impl Fn() -> Option<String> + 'static,
	) -> Self {
		let mut base_url = base_url.into();
		if !base_url.ends_with('/') {
			base_url.push('/');
		}
		Self {
			client,
			base_url,
			token: Rc::new(token),
		}
	}

	/// Returns the API root.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Returns the absolute URL of `service`.
	pub fn url(&self, service: &str, query: &str) -> String {
		let service = service.trim_start_matches('/');
		if query.is_empty() {
			format!("{}{}", self.base_url, service)
		} else {
			format!("{}{}?{}", self.base_url, service, query)
		}
	}

	fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
		match (self.token)() {
			Some(token) => builder.bearer_auth(token),
			None => builder,
		}
	}

	pub(crate) fn get(&self, service: &str, query: &str) -> RequestBuilder {
		self.authorize(self.client.get(self.url(service, query)))
	}

	pub(crate) fn post<B: Serialize + ?Sized>(&self, service: &str, body: &B) -> RequestBuilder {
		self.authorize(self.client.post(self.url(service, "")).json(body))
	}

	async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
		let response = builder.send().await?;
		let status = response.status();
		let url = response.url().to_string();
		let body = response.text().await?;

		if !status.is_success() {
			warn_log!("{} returned {}", url, status);
			return Err(ApiError::from_status(status.as_u16(), &body));
		}
		debug_log!("{} returned {} bytes", url, body.len());
		Ok(serde_json::from_str(&body)?)
	}
}

#[async_trait(?Send)]
impl CatalogApi for HttpApi {
	async fn top_movies(&self) -> ApiResult<Vec<Movie>> {
		self.send(self.get("movies/top/", "")).await
	}

	async fn random_movies(&self) -> ApiResult<Vec<Movie>> {
		self.send(self.get("movies/random/", "")).await
	}

	async fn search_movies(&self, params: &SearchParams) -> ApiResult<SearchResults> {
		self.send(self.get("movies/search/", &params.to_query_string()))
			.await
	}

	async fn movie(&self, id: i64) -> ApiResult<MovieDetail> {
		self.send(self.get(&format!("movies/{}", id), "")).await
	}

	async fn actor(&self, id: i64) -> ApiResult<ActorDetail> {
		self.send(self.get(&format!("actors/{}", id), "")).await
	}

	async fn genres(&self) -> ApiResult<Vec<Genre>> {
		self.send(self.get("genres/", "")).await
	}

	async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<AuthResponse> {
		let body = json!({ "name": name, "email": email, "password": password });
		self.send(self.post("account/register/", &body)).await
	}

	async fn authenticate(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
		let body = json!({ "email": email, "password": password });
		self.send(self.post("account/authenticate/", &body)).await
	}

	async fn verify_email(&self, token: &str) -> ApiResult<bool> {
		let query = serde_urlencoded::to_string(&[("token", token)][..]).unwrap_or_default();
		self.send(self.get("account/verify/", &query)).await
	}

	async fn resend_verification(&self, email: &str) -> ApiResult<AuthResponse> {
		let body = json!({ "email": email });
		self.send(self.post("account/resendVerifyEmail/", &body))
			.await
	}

	async fn reset_password(&self, current: &str, new: &str) -> ApiResult<AuthResponse> {
		let body = json!({ "currentPassword": current, "newPassword": new });
		self.send(self.post("account/resetPassword/", &body)).await
	}

	async fn delete_account(&self) -> ApiResult<AuthResponse> {
		self.send(self.post("account/deleteAccount/", &json!({})))
			.await
	}

	async fn collection(
		&self,
		kind: CollectionKind,
		params: &SearchParams,
	) -> ApiResult<SearchResults> {
		let body: CollectionBody = self
			.send(self.get(kind.endpoint(), &params.to_query_string()))
			.await?;
		Ok(body.into_results(params))
	}

	async fn add_to_collection(
		&self,
		movie_id: i64,
		kind: CollectionKind,
		score: Option<u8>,
	) -> ApiResult<AuthResponse> {
		let body = CollectionChange {
			movie_id,
			collection: kind,
			score,
		};
		self.send(self.post("account/save-to-collection/", &body))
			.await
	}

	async fn remove_from_collection(
		&self,
		movie_id: i64,
		kind: CollectionKind,
	) -> ApiResult<AuthResponse> {
		let body = CollectionChange {
			movie_id,
			collection: kind,
			score: None,
		};
		self.send(self.post("account/delete-to-collection/", &body))
			.await
	}
}
