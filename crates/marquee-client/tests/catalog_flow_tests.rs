//! Browsing: home, search, detail pages and collections.

mod common;

use common::{EMAIL, at, auth};
use marquee_api::testing::{FakeApi, movie};
use marquee_api::{ApiError, Genre};
use marquee_client::Settings;
use marquee_client::alert::{GENERIC_ERROR, RATE_LIMITED};
use marquee_client::shell::SAVE_FAILED;
use marquee_pages::{LabelStyle, UiEvent};
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> FakeApi {
	FakeApi::new()
		.with_movies(vec![movie(7, "Alien"), movie(8, "Heat")])
		.with_genres(vec![
			Genre {
				id: 1,
				name: "Drama".to_string(),
			},
			Genre {
				id: 2,
				name: "Horror".to_string(),
			},
		])
}

#[rstest]
fn test_home_lists_movies(catalog: FakeApi) {
	let h = at("/").api(catalog).start();

	assert_eq!(h.api.calls(), vec!["top_movies", "random_movies"]);
	assert!(h.html().contains("This Week&#x27;s Top Movies"));
	assert!(h.html().contains("href=\"/movies/7\""));
}

#[rstest]
fn test_home_failure_stays_home(catalog: FakeApi) {
	catalog.fail("top_movies", ApiError::RateLimited);
	let h = at("/").api(catalog).start();

	assert_eq!(h.last_alert().as_deref(), Some(RATE_LIMITED));
	assert_eq!(h.page(), Some("home"));
}

#[rstest]
fn test_search_results_and_pagination(catalog: FakeApi) {
	let h = at("/movies?q=heat&page=2")
		.api(catalog.with_total_count(500))
		.start();

	assert!(h.api.called("search_movies query=heat&page=2&pageSize=50"));
	assert!(h.api.called("genres"));
	let html = h.html();
	assert!(html.contains("&#x27;heat&#x27; movies"));
	assert!(html.contains("href=\"/movies?q=heat&amp;page=3&amp;pageSize=50\""));
	assert!(html.contains("class=\"page active\""));
	assert!(html.contains("<option value=\"2\">Horror</option>"));
}

#[rstest]
fn test_url_page_size_reaches_api(catalog: FakeApi) {
	let h = at("/movies?q=heat&page=3&pageSize=10")
		.api(catalog.with_total_count(100))
		.start();

	assert!(h.api.called("search_movies query=heat&page=3&pageSize=10"));
	assert!(
		h.html()
			.contains("href=\"/movies?q=heat&amp;page=4&amp;pageSize=10\"")
	);
}

#[rstest]
fn test_long_result_sets_use_legacy_labels(catalog: FakeApi) {
	let h = at("/movies?page=1").api(catalog.with_total_count(5000)).start();

	// 100 pages: the window shows pages 1..=10, labelled 1..=7 then 100 - page.
	let html = h.html();
	assert!(html.contains("class=\"page active\">1</a>"));
	assert!(html.contains("class=\"page\">92</a>"));
}

#[rstest]
fn test_sequential_labels_from_settings(catalog: FakeApi) {
	let settings = Settings {
		pagination_labels: LabelStyle::Sequential,
		..Settings::default()
	};
	let h = at("/movies?page=1")
		.api(catalog.with_total_count(5000))
		.settings(settings)
		.start();

	assert!(h.html().contains("class=\"page\">8</a>"));
	assert!(!h.html().contains(">92</a>"));
}

#[rstest]
fn test_empty_search() {
	let h = at("/movies?q=zzz").start();

	assert!(h.html().contains("There are no movies with your search"));
}

#[rstest]
#[case(UiEvent::change("order", "score"), "/movies?q=heat&genre=2&order=score")]
#[case(UiEvent::change("genre", "1"), "/movies?q=heat&genre=1")]
fn test_filters_update_url(catalog: FakeApi, #[case] event: UiEvent, #[case] expected: &str) {
	let h = at("/movies?q=heat&genre=2").api(catalog).start();

	h.send(event);

	assert_eq!(h.url(), expected);
	assert_eq!(h.page(), Some("catalog"));
}

#[rstest]
#[case("heat", Some("/movies?q=heat"))]
#[case("  a ", None)]
#[case("", None)]
fn test_header_search(#[case] text: &str, #[case] expected: Option<&str>) {
	let h = at("/").start();

	h.send(UiEvent::submit("search", [("q", text)]));

	assert_eq!(h.url(), expected.unwrap_or("/"));
}

#[rstest]
#[case(None, "add-favorite", "add-watchlist")]
#[case(Some("In Favorite"), "remove-favorite", "add-watchlist")]
fn test_movie_detail(#[case] status: Option<&str>, #[case] favorite: &str, #[case] watchlist: &str) {
	let mut alien = movie(7, "Alien");
	alien.status = status.map(str::to_string);
	let h = at("/movies/7")
		.api(FakeApi::new().with_movies(vec![alien, movie(8, "Heat")]))
		.start();

	assert!(h.api.called("movie 7"));
	let html = h.html();
	assert!(html.contains("<h2>Alien</h2>"));
	assert!(html.contains(&format!("data-action=\"{}\"", favorite)));
	assert!(html.contains(&format!("data-action=\"{}\"", watchlist)));
	assert!(html.contains("href=\"/movies/8\""));
}

#[rstest]
fn test_missing_movie_goes_home() {
	let h = at("/movies/99").start();

	assert_eq!(h.last_alert().as_deref(), Some(GENERIC_ERROR));
	assert_eq!(h.page(), Some("home"));
}

#[rstest]
fn test_save_requires_session(catalog: FakeApi) {
	let h = at("/movies/7").api(catalog).start();

	h.send(UiEvent::click("add-watchlist").with_value("7"));

	assert!(!h.api.called("add_to_collection"));
	assert_eq!(h.page(), Some("login"));
}

#[rstest]
#[case("add-favorite", "add_to_collection 7 favorite", "/account/favorites")]
#[case("add-watchlist", "add_to_collection 7 watchlist", "/account/watchlist")]
#[case("remove-watchlist", "remove_from_collection 7 watchlist", "/account/watchlist")]
fn test_collection_actions(
	catalog: FakeApi,
	#[case] action: &str,
	#[case] call: &str,
	#[case] target: &str,
) {
	let h = at("/movies/7").api(catalog).logged_in().start();

	h.send(UiEvent::click(action).with_value("7"));

	assert!(h.api.called(call));
	assert_eq!(h.url(), target);
}

#[rstest]
fn test_rejected_save_alerts_and_goes_home(catalog: FakeApi) {
	let h = at("/movies/7")
		.api(catalog.with_auth(auth(false, "", None)))
		.logged_in()
		.start();

	h.send(UiEvent::click("add-favorite").with_value("7"));

	assert_eq!(h.last_alert().as_deref(), Some(SAVE_FAILED));
	assert_eq!(h.page(), Some("home"));
}

#[rstest]
fn test_rating(catalog: FakeApi) {
	let h = at("/movies/7").api(catalog).logged_in().start();

	h.send(UiEvent::submit(
		"rate-favorite",
		[("movie_id", "7"), ("score", "8")],
	));

	assert!(h.api.called("add_to_collection 7 favorite 8"));
	assert_eq!(h.url(), "/account/favorites");
}

#[rstest]
fn test_collection_page(catalog: FakeApi) {
	let h = at("/account/favorites").api(catalog).logged_in().start();

	assert!(h.api.called("collection favorite page=1&pageSize=50"));
	let html = h.html();
	assert!(html.contains("data-action=\"remove-favorite\""));
	assert!(html.contains("data-value=\"7\""));
}

#[rstest]
fn test_bare_list_collection_is_paged() {
	let movies = (1..=120).map(|id| movie(id, "Movie")).collect();
	let api = FakeApi::new().with_movies(movies).with_bare_collections();
	let h = at("/account/favorites?page=2&pageSize=50")
		.api(api)
		.logged_in()
		.start();

	assert!(h.api.called("collection favorite page=2&pageSize=50"));
	let html = h.html();
	assert!(html.contains("data-value=\"51\""));
	assert!(html.contains("data-value=\"100\""));
	assert!(!html.contains("data-value=\"50\""));
	assert!(!html.contains("data-value=\"101\""));
	assert!(html.contains("class=\"page active\">2</a>"));
	assert!(html.contains("page=3&amp;pageSize=50"));
	assert!(!html.contains("page=4&amp;pageSize=50"));
}

#[rstest]
fn test_empty_watchlist() {
	let h = at("/account/watchlist").logged_in().start();

	assert!(h.html().contains("Your watchlist is empty"));
}

#[rstest]
fn test_actor_page() {
	let api = FakeApi::new()
		.with_movies(vec![movie(7, "Alien")])
		.with_actors(vec![marquee_api::Actor {
			id: 3,
			first_name: "Sigourney".to_string(),
			last_name: "Weaver".to_string(),
			image_url: None,
		}]);
	let h = at("/actors/3").api(api).start();

	let html = h.html();
	assert!(html.contains("<h2>Sigourney Weaver</h2>"));
	assert!(html.contains("/images/generic_actor.jpg"));
	assert!(html.contains("href=\"/movies/7\""));
}

#[rstest]
#[case::detail_left_for_search(
	"movie",
	ApiError::Network("offline".to_string()),
	"/movies/7",
	"/movies?q=heat",
	"catalog"
)]
#[case::search_left_for_home(
	"search_movies",
	ApiError::Forbidden("User mail is not confirmed".to_string()),
	"/movies?q=x",
	"/",
	"home"
)]
#[case::collection_left_for_home(
	"collection",
	ApiError::Unauthorized(String::new()),
	"/account/favorites",
	"/",
	"home"
)]
fn test_failure_after_leaving_page_is_ignored(
	catalog: FakeApi,
	#[case] operation: &'static str,
	#[case] error: ApiError,
	#[case] left: &str,
	#[case] landed: &str,
	#[case] page: &str,
) {
	catalog.fail(operation, error);
	let h = at("/").api(catalog).logged_in().pending(EMAIL).start();

	h.visit_all(&[left, landed]);

	assert!(h.api.calls().iter().any(|call| call.starts_with(operation)));
	assert_eq!(h.page(), Some(page));
	assert_eq!(h.url(), landed);
	assert_eq!(h.last_alert(), None);
	assert_eq!(h.stored(&Settings::default().storage.credential).as_deref(), Some("token-1"));
}
