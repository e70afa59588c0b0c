//! The navigable pages of the client.
//!
//! Each page is built fresh per navigation with a clone of the
//! [`AppContext`](crate::AppContext). Data fetches run on the local spawner
//! and commit through the page's handle, so results that arrive after the
//! user moved on are dropped.

mod account;
mod actor_detail;
mod catalog;
mod collection;
mod confirm;
mod home;
mod login;
mod movie_detail;
mod register;
mod verify;

pub use account::AccountPage;
pub use actor_detail::ActorDetailPage;
pub use catalog::CatalogPage;
pub use collection::CollectionPage;
pub use confirm::{ConfirmEmailPage, VERIFY_FAILED};
pub use home::HomePage;
pub use login::LoginPage;
pub use movie_detail::MovieDetailPage;
pub use register::RegisterPage;
pub use verify::{RESEND_FAILED, VerifyNoticePage};

use marquee_api::{CollectionKind, Movie};
use marquee_pages::{ElementView, IntoView, View};

const POSTER_FALLBACK: &str = "/images/image-not-found.jpg";
const PORTRAIT_FALLBACK: &str = "/images/generic_actor.jpg";

/// A movie card linking to its detail page.
pub(crate) fn movie_item(movie: &Movie) -> ElementView {
	let caption = match movie.release_year {
		Some(year) => format!("{} ({})", movie.title, year),
		None => movie.title.clone(),
	};
	ElementView::new("a")
		.attr("href", format!("/movies/{}", movie.id))
		.flag("data-link", true)
		.child(
			ElementView::new("article")
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
				)
				.child(ElementView::new("p").child(caption)),
		)
}

/// A movie card with a button removing it from `kind`.
pub(crate) fn removable_movie_item(movie: &Movie, kind: CollectionKind) -> View {
	let score = movie.score.map(|score| score.to_string()).unwrap_or_default();
	ElementView::new("div")
		.class("movieArticle")
		.child(movie_item(movie))
		.child(ElementView::new("p").class("movieScore").child(score))
		.child(
			ElementView::new("button")
				.class("movieArrow")
				.action(format!("remove-{}", kind))
				.attr("data-value", movie.id.to_string())
				.child("Remove"),
		)
		.into_view()
}

/// A plain list of movie cards.
pub(crate) fn movie_list(movies: &[Movie]) -> ElementView {
	ElementView::new("ul").children(
		movies
			.iter()
			.map(|movie| ElementView::new("li").child(movie_item(movie))),
	)
}

/// Placeholder shown until a page's data arrives.
pub(crate) fn loading() -> ElementView {
	ElementView::new("p").class("loading").child("Loading...")
}
