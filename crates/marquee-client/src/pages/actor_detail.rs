use super::{PORTRAIT_FALLBACK, loading, movie_list};
use crate::context::{AppContext, go};
use crate::routes;
use marquee_api::ActorDetail;
use marquee_pages::spawn::spawn_local;
use marquee_pages::{ElementView, IntoView, Page, PageContext, RouteParams, View, warn_log};

/// `/actors/{id}`: an actor's portrait and filmography.
pub struct ActorDetailPage {
	app: AppContext,
	params: RouteParams,
}

impl ActorDetailPage {
	pub fn new(app: AppContext) -> Self {
		Self {
			app,
			params: RouteParams::default(),
		}
	}
}

fn render(detail: &ActorDetail) -> View {
	let actor = &detail.actor;
	let portrait = actor
		.image_url
		.clone()
		.filter(|url| !url.is_empty())
		.unwrap_or_else(|| PORTRAIT_FALLBACK.to_string());

	ElementView::new("article")
		.attr("id", "actor")
		.child(ElementView::new("h2").child(actor.full_name()))
		.child(
			ElementView::new("img")
				.attr("src", portrait)
				.attr("alt", format!("Picture of {}", actor.last_name)),
		)
		.child(ElementView::new("h3").child("Movies"))
		.child(movie_list(&detail.related_movies).attr("id", "actor-movies"))
		.into_view()
}

impl Page for ActorDetailPage {
	fn name(&self) -> &'static str {
		"actor-detail"
	}

	fn set_params(&mut self, params: RouteParams) {
		self.params = params;
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		let Some(id) = self.params.parse::<i64>("id") else {
			warn_log!("actor page without a usable id at {}", cx.location());
			go(cx.handle().navigator(), routes::HOME);
			return View::empty();
		};

		let app = self.app.clone();
		let handle = cx.handle().clone();
		spawn_local(async move {
			match app.api().actor(id).await {
				Ok(detail) => {
					handle.render(render(&detail));
				}
				Err(err) => app.report_if_current(&err, &handle, true),
			}
		});
		loading().into_view()
	}
}
