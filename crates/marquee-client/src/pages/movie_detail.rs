use super::{PORTRAIT_FALLBACK, POSTER_FALLBACK, loading, movie_list};
use crate::context::{AppContext, go};
use crate::routes;
use marquee_api::{Actor, CollectionKind, Movie, MovieDetail};
use marquee_pages::spawn::spawn_local;
use marquee_pages::{ElementView, IntoView, Page, PageContext, RouteParams, View, warn_log};

/// `/movies/{id}`: one movie with its cast and related movies.
pub struct MovieDetailPage {
	app: AppContext,
	params: RouteParams,
}

impl MovieDetailPage {
	pub fn new(app: AppContext) -> Self {
		Self {
			app,
			params: RouteParams::default(),
		}
	}
}

fn collection_button(movie: &Movie, kind: CollectionKind, listed: bool) -> ElementView {
	let (verb, label) = match (kind, listed) {
		(CollectionKind::Favorite, false) => ("add", "Save to Favorites"),
		(CollectionKind::Favorite, true) => ("remove", "Unlist Favorite"),
		(CollectionKind::Watchlist, false) => ("add", "Add to Watchlist"),
		(CollectionKind::Watchlist, true) => ("remove", "Unlist Watchlist"),
	};
	ElementView::new("button")
		.attr("id", format!("btn-{}", kind))
		.action(format!("{}-{}", verb, kind))
		.attr("data-value", movie.id.to_string())
		.child(label)
}

fn rate_form(movie: &Movie) -> ElementView {
	let options = (1..=10).map(|score: u8| {
		let value = score.to_string();
		ElementView::new("option")
			.attr("value", value.clone())
			.child(value)
	});
	ElementView::new("form")
		.class("rate")
		.action("rate-favorite")
		.child(
			ElementView::new("input")
				.attr("type", "hidden")
				.attr("name", "movie_id")
				.attr("value", movie.id.to_string()),
		)
		.child(ElementView::new("select").attr("name", "score").children(options))
		.child(
			ElementView::new("button")
				.attr("type", "submit")
				.child("Rate"),
		)
}

fn metadata(movie: &Movie) -> ElementView {
	let text = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
	let rows = [
		("Release Date", text(movie.release_year.map(|year| year.to_string()))),
		("Score", text(movie.score.map(|score| format!("{} / 10", score)))),
		("Original language", text(movie.language.clone())),
	];
	ElementView::new("dl").attr("id", "metadata").children(
		rows.into_iter()
			.flat_map(|(term, value)| {
				[
					ElementView::new("dt").child(term),
					ElementView::new("dd").child(value),
				]
			}),
	)
}

fn cast_member(actor: &Actor) -> ElementView {
	let portrait = actor
		.image_url
		.clone()
		.unwrap_or_else(|| PORTRAIT_FALLBACK.to_string());
	ElementView::new("li").child(
		ElementView::new("a")
			.attr("href", format!("/actors/{}", actor.id))
			.flag("data-link", true)
			.child(
				ElementView::new("img")
					.attr("src", portrait)
					.attr("alt", format!("Picture of {}", actor.last_name)),
			)
			.child(ElementView::new("p").child(actor.full_name())),
	)
}

fn render(detail: &MovieDetail) -> View {
	let movie = &detail.movie;
	let mut article = ElementView::new("article")
		.attr("id", "movie")
		.child(ElementView::new("h2").child(movie.title.clone()))
		.child(ElementView::new("h3").child(movie.tagline.clone().unwrap_or_default()))
		.child(
			ElementView::new("img")
				.attr(
					"src",
					movie
						.poster_url
						.clone()
						.unwrap_or_else(|| POSTER_FALLBACK.to_string()),
				)
				.attr("alt", format!("{} Poster", movie.title)),
		);
	if let Some(trailer) = &movie.trailer_url {
		article = article.child(
			ElementView::new("div")
				.attr("id", "trailer")
				.attr("data-url", trailer.clone()),
		);
	}

	article
		.child(
			ElementView::new("section")
				.attr("id", "actions")
				.child(collection_button(
					movie,
					CollectionKind::Favorite,
					movie.in_favorites(),
				))
				.child(collection_button(
					movie,
					CollectionKind::Watchlist,
					movie.in_watchlist(),
				))
				.child(rate_form(movie)),
		)
		.child(
			ElementView::new("p")
				.attr("id", "overview")
				.child(movie.overview.clone().unwrap_or_default()),
		)
		.child(metadata(movie))
		.child(
			ElementView::new("ul").attr("id", "genres").children(
				movie
					.genres
					.iter()
					.map(|genre| ElementView::new("li").child(genre.name.clone())),
			),
		)
		.child(ElementView::new("h3").child("Cast"))
		.child(
			ElementView::new("ul")
				.attr("id", "cast")
				.children(movie.casting.iter().map(cast_member)),
		)
		.child(ElementView::new("h3").child("Related movies"))
		.child(movie_list(&detail.related_movies).attr("id", "related-movies"))
		.into_view()
}

impl Page for MovieDetailPage {
	fn name(&self) -> &'static str {
		"movie-detail"
	}

	fn set_params(&mut self, params: RouteParams) {
		self.params = params;
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		let Some(id) = self.params.parse::<i64>("id") else {
			warn_log!("movie page without a usable id at {}", cx.location());
			go(cx.handle().navigator(), routes::HOME);
			return View::empty();
		};

		let app = self.app.clone();
		let handle = cx.handle().clone();
		spawn_local(async move {
			match app.api().movie(id).await {
				Ok(detail) => {
					handle.render(render(&detail));
				}
				Err(err) => app.report_if_current(&err, &handle, true),
			}
		});
		loading().into_view()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use marquee_api::testing::movie;
	use rstest::rstest;

	#[rstest]
	#[case(None, "add-favorite", "add-watchlist")]
	#[case(Some("In Favorite"), "remove-favorite", "add-watchlist")]
	#[case(Some("In Favorite, In Watchlist"), "remove-favorite", "remove-watchlist")]
	fn test_buttons_follow_collection_status(
		#[case] status: Option<&str>,
		#[case] favorite: &str,
		#[case] watchlist: &str,
	) {
		let mut film = movie(3, "Heat");
		film.status = status.map(str::to_string);
		let html = render(&MovieDetail {
			movie: film,
			related_movies: Vec::new(),
		})
		.render_to_string();

		assert!(html.contains(&format!("data-action=\"{}\"", favorite)));
		assert!(html.contains(&format!("data-action=\"{}\"", watchlist)));
	}

	#[rstest]
	fn test_cast_uses_portrait_fallback() {
		let mut film = movie(3, "Heat");
		film.casting.push(Actor {
			id: 9,
			first_name: "Al".to_string(),
			last_name: "Pacino".to_string(),
			image_url: None,
		});
		let html = render(&MovieDetail {
			movie: film,
			related_movies: Vec::new(),
		})
		.render_to_string();

		assert!(html.contains(PORTRAIT_FALLBACK));
		assert!(html.contains("href=\"/actors/9\""));
		assert!(html.contains("Al Pacino"));
	}
}
