use super::{loading, movie_item};
use crate::context::{AppContext, go};
use marquee_api::{Genre, SearchParams, SearchResults};
use marquee_pages::spawn::spawn_local;
use marquee_pages::{
	ElementView, EventFlow, EventKind, IntoView, ListController, ListQueryState, Page,
	PageContext, UiEvent, View, debug_log,
};

const EMPTY_MESSAGE: &str = "There are no movies with your search";

const ORDERS: [(&str, &str); 4] = [
	("", "Sort by popularity"),
	("score", "Sort by score"),
	("name", "Sort by name"),
	("date", "Sort by release date"),
];

/// Converts the URL state into API parameters. Pages are sent as requested.
pub(crate) fn search_params(state: &ListQueryState) -> SearchParams {
	SearchParams {
		query: state.query.clone(),
		order: state.order.clone(),
		genre: state.genre.clone(),
		release_year: state.release_year.clone(),
		page: Some(state.page),
		page_size: Some(state.page_size),
	}
}

/// `/movies`: search results with sort, genre filter and pagination.
pub struct CatalogPage {
	app: AppContext,
}

impl CatalogPage {
	pub fn new(app: AppContext) -> Self {
		Self { app }
	}
}

fn controls(state: &ListQueryState, genres: &[Genre]) -> ElementView {
	let order = ElementView::new("select")
		.attr("id", "order")
		.action("order")
		.children(ORDERS.iter().map(|(value, label)| {
			ElementView::new("option")
				.attr("value", *value)
				.flag("selected", state.order == *value)
				.child(*label)
		}));

	let genre_options = genres.iter().map(|genre| {
		let id = genre.id.to_string();
		ElementView::new("option")
			.flag("selected", state.genre == id)
			.attr("value", id)
			.child(genre.name.clone())
	});
	let filter = ElementView::new("select")
		.attr("id", "filter")
		.action("genre")
		.child(
			ElementView::new("option")
				.attr("value", "")
				.child("Filter by Genre"),
		)
		.children(genre_options);

	ElementView::new("div")
		.class("filters")
		.child(filter)
		.child(order)
}

fn render(list: &ListController, genres: &[Genre], results: Option<&SearchResults>) -> View {
	let state = list.state();
	let title = if state.query.is_empty() {
		"All movies".to_string()
	} else {
		format!("'{}' movies", state.query)
	};

	let body = match results {
		Some(results) => {
			let items = results
				.movies
				.iter()
				.map(|movie| movie_item(movie).into_view())
				.collect();
			View::fragment(vec![
				list.render_results(items, EMPTY_MESSAGE),
				list.render_pagination(&list.window(results.count())),
			])
		}
		None => loading().into_view(),
	};

	ElementView::new("section")
		.attr("id", "movies")
		.child(ElementView::new("h2").child(title))
		.child(controls(state, genres))
		.child(body)
		.into_view()
}

impl Page for CatalogPage {
	fn name(&self) -> &'static str {
		"catalog"
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		let list = self.app.list(cx.location());
		let app = self.app.clone();
		let handle = cx.handle().clone();
		let view = render(&list, &[], None);

		spawn_local(async move {
			let api = app.api();
			let params = search_params(list.state());
			let results = match api.search_movies(&params).await {
				Ok(results) => results,
				Err(err) => {
					app.report_if_current(&err, &handle, false);
					SearchResults::default()
				}
			};
			let genres = api.genres().await.unwrap_or_else(|err| {
				debug_log!("genres unavailable: {}", err);
				Vec::new()
			});
			handle.render(render(&list, &genres, Some(&results)));
		});
		view
	}

	fn on_event(&mut self, event: &UiEvent, cx: &PageContext) -> EventFlow {
		if event.kind != EventKind::Change {
			return EventFlow::Ignored;
		}
		let key = match event.action.as_str() {
			"order" => "order",
			"genre" => "genre",
			_ => return EventFlow::Ignored,
		};
		let list = self.app.list(cx.location());
		let value = event.value.as_deref().unwrap_or_default();
		go(cx.handle().navigator(), &list.with_param(key, value));
		EventFlow::Handled
	}
}
