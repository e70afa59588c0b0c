use super::catalog::search_params;
use super::{loading, removable_movie_item};
use crate::context::AppContext;
use marquee_api::{CollectionKind, SearchResults};
use marquee_pages::spawn::spawn_local;
use marquee_pages::{ElementView, IntoView, ListController, Page, PageContext, View};

/// `/account/favorites` and `/account/watchlist`.
pub struct CollectionPage {
	app: AppContext,
	kind: CollectionKind,
}

impl CollectionPage {
	pub fn new(app: AppContext, kind: CollectionKind) -> Self {
		Self { app, kind }
	}
}

fn title(kind: CollectionKind) -> &'static str {
	match kind {
		CollectionKind::Favorite => "Favorites",
		CollectionKind::Watchlist => "Watchlist",
	}
}

fn empty_message(kind: CollectionKind) -> &'static str {
	match kind {
		CollectionKind::Favorite => "You have no favorite movies yet",
		CollectionKind::Watchlist => "Your watchlist is empty",
	}
}

fn render(list: &ListController, kind: CollectionKind, results: Option<&SearchResults>) -> View {
	let body = match results {
		Some(results) => {
			let items = results
				.movies
				.iter()
				.map(|movie| removable_movie_item(movie, kind))
				.collect();
			View::fragment(vec![
				list.render_results(items, empty_message(kind)),
				list.render_pagination(&list.window(results.count())),
			])
		}
		None => loading().into_view(),
	};
	ElementView::new("section")
		.attr("id", kind.as_str())
		.child(ElementView::new("h2").child(title(kind)))
		.child(body)
		.into_view()
}

impl Page for CollectionPage {
	fn name(&self) -> &'static str {
		match self.kind {
			CollectionKind::Favorite => "favorites",
			CollectionKind::Watchlist => "watchlist",
		}
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		let list = self.app.list(cx.location());
		let kind = self.kind;
		let app = self.app.clone();
		let handle = cx.handle().clone();
		let view = render(&list, kind, None);

		spawn_local(async move {
			let params = search_params(list.state());
			match app.api().collection(kind, &params).await {
				Ok(results) => {
					handle.render(render(&list, kind, Some(&results)));
				}
				Err(err) => app.report_if_current(&err, &handle, false),
			}
		});
		view
	}
}
