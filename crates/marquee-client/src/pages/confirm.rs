use super::loading;
use crate::context::{AppContext, go};
use crate::routes;
use marquee_pages::spawn::spawn_local;
use marquee_pages::{IntoView, Page, PageContext, RouteParams, View, info_log};

/// Shown when a verification token is rejected or missing.
pub const VERIFY_FAILED: &str = "We couldn't verify your email, please try again";

/// `/account/verify`: the landing page of the verification mail link.
///
/// The token is read from the path (`/account/verify/{token}`) or from the
/// `token` query parameter.
pub struct ConfirmEmailPage {
	app: AppContext,
	params: RouteParams,
}

impl ConfirmEmailPage {
	pub fn new(app: AppContext) -> Self {
		Self {
			app,
			params: RouteParams::default(),
		}
	}
}

impl Page for ConfirmEmailPage {
	fn name(&self) -> &'static str {
		"confirm-email"
	}

	fn set_params(&mut self, params: RouteParams) {
		self.params = params;
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		let token = self
			.params
			.get("token")
			.or_else(|| cx.location().get("token"))
			.filter(|token| !token.is_empty())
			.map(str::to_string);
		let handle = cx.handle().clone();
		let navigator = handle.navigator().clone();

		let Some(token) = token else {
			self.app.alert(VERIFY_FAILED);
			go(&navigator, routes::VERIFY_NOTICE);
			return View::empty();
		};

		let app = self.app.clone();
		spawn_local(async move {
			match app.api().verify_email(&token).await {
				Ok(true) => {
					info_log!("email verified");
					app.set_pending_email(None);
					go(&navigator, routes::HOME);
				}
				Ok(false) => {
					app.alert(VERIFY_FAILED);
					go(&navigator, routes::VERIFY_NOTICE);
				}
				Err(err) => app.report_if_current(&err, &handle, false),
			}
		});
		loading().into_view()
	}
}
