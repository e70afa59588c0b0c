use super::login::field;
use crate::alert::GENERIC_ERROR;
use crate::context::{AppContext, go};
use crate::error::ClientError;
use crate::routes;
use crate::validation::validate_registration;
use marquee_pages::spawn::spawn_local;
use marquee_pages::{
	ElementView, EventFlow, EventKind, IntoView, Page, PageContext, UiEvent, View, info_log,
};

/// `/account/register`.
///
/// A successful registration leaves the account unverified: the email is
/// remembered for the verify-email notice and its resend button.
pub struct RegisterPage {
	app: AppContext,
}

impl RegisterPage {
	pub fn new(app: AppContext) -> Self {
		Self { app }
	}
}

impl Page for RegisterPage {
	fn name(&self) -> &'static str {
		"register"
	}

	fn mount(&mut self, _cx: &PageContext) -> View {
		ElementView::new("section")
			.attr("id", "register")
			.child(ElementView::new("h2").child("Register a New Account"))
			.child(
				ElementView::new("form")
					.action("register")
					.child(field("Name", "name", "text"))
					.child(field("Email", "email", "email"))
					.child(field("Password", "password", "password"))
					.child(field("Confirm Password", "passwordConfirm", "password"))
					.child(
						ElementView::new("button")
							.attr("type", "submit")
							.child("Register"),
					),
			)
			.child(
				ElementView::new("p")
					.child("Already have an account? ")
					.child(
						ElementView::new("a")
							.attr("href", self.app.settings().login_path.clone())
							.flag("data-link", true)
							.child("Log In"),
					),
			)
			.into_view()
	}

	fn on_event(&mut self, event: &UiEvent, cx: &PageContext) -> EventFlow {
		if event.kind != EventKind::Submit || event.action != "register" {
			return EventFlow::Ignored;
		}
		let name = event.field("name").trim().to_string();
		let email = event.field("email").trim().to_string();
		let password = event.field("password").to_string();
		let navigator = cx.handle().navigator().clone();
		if let Err(errors) =
			validate_registration(&name, &email, &password, event.field("passwordConfirm"))
		{
			self.app.fail(ClientError::from(errors), &navigator, false);
			return EventFlow::Handled;
		}

		let app = self.app.clone();
		spawn_local(async move {
			match app.api().register(&name, &email, &password).await {
				Ok(response) if response.success => {
					info_log!("registered {}, awaiting verification", email);
					app.set_pending_email(Some(&email));
					go(&navigator, routes::VERIFY_NOTICE);
				}
				Ok(response) if response.message.is_empty() => app.alert(GENERIC_ERROR),
				Ok(response) => app.alert(&response.message),
				Err(err) => app.report(&err, &navigator, false),
			}
		});
		EventFlow::Handled
	}
}
