use super::{loading, movie_list};
use crate::context::AppContext;
use marquee_api::Movie;
use marquee_pages::spawn::spawn_local;
use marquee_pages::{ElementView, IntoView, Page, PageContext, View};

/// `/`: this week's top movies and a random pick.
pub struct HomePage {
	app: AppContext,
}

impl HomePage {
	pub fn new(app: AppContext) -> Self {
		Self { app }
	}
}

fn section(id: &'static str, title: &'static str, movies: Option<&[Movie]>) -> ElementView {
	ElementView::new("section")
		.attr("id", id)
		.child(ElementView::new("h2").child(title))
		.child(match movies {
			Some(movies) => movie_list(movies),
			None => loading(),
		})
}

fn render(top: Option<&[Movie]>, random: Option<&[Movie]>) -> View {
	ElementView::new("div")
		.class("home")
		.child(section("top-10", "This Week's Top Movies", top))
		.child(section("random", "Something to watch today", random))
		.into_view()
}

impl Page for HomePage {
	fn name(&self) -> &'static str {
		"home"
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		let app = self.app.clone();
		let handle = cx.handle().clone();
		spawn_local(async move {
			let api = app.api();
			let top = match api.top_movies().await {
				Ok(movies) => movies,
				Err(err) => {
					app.report_if_current(&err, &handle, false);
					Vec::new()
				}
			};
			handle.render(render(Some(&top), None));

			let random = match api.random_movies().await {
				Ok(movies) => movies,
				Err(err) => {
					app.report_if_current(&err, &handle, false);
					Vec::new()
				}
			};
			handle.render(render(Some(&top), Some(&random)));
		});
		render(None, None)
	}
}
