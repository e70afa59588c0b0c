use crate::alert::GENERIC_ERROR;
use crate::context::{AppContext, go};
use crate::error::ClientError;
use crate::routes;
use crate::validation::validate_login;
use marquee_pages::spawn::spawn_local;
use marquee_pages::{
	ElementView, EventFlow, EventKind, IntoView, Page, PageContext, UiEvent, View, info_log,
};

/// A labelled form input.
pub(crate) fn field(label: &'static str, name: &'static str, kind: &'static str) -> ElementView {
	ElementView::new("label")
		.child(label)
		.child(
			ElementView::new("input")
				.attr("type", kind)
				.attr("name", name)
				.attr("id", name)
				.flag("required", true),
		)
}

/// `/account/login`.
pub struct LoginPage {
	app: AppContext,
}

impl LoginPage {
	pub fn new(app: AppContext) -> Self {
		Self { app }
	}
}

impl Page for LoginPage {
	fn name(&self) -> &'static str {
		"login"
	}

	fn mount(&mut self, _cx: &PageContext) -> View {
		ElementView::new("section")
			.attr("id", "login")
			.child(ElementView::new("h2").child("Log In"))
			.child(
				ElementView::new("form")
					.action("login")
					.child(field("Email", "email", "email"))
					.child(field("Password", "password", "password"))
					.child(
						ElementView::new("button")
							.attr("type", "submit")
							.child("Log In"),
					),
			)
			.child(
				ElementView::new("p")
					.child("Don't have an account? ")
					.child(
						ElementView::new("a")
							.attr("href", routes::REGISTER)
							.flag("data-link", true)
							.child("Register"),
					),
			)
			.into_view()
	}

	fn on_event(&mut self, event: &UiEvent, cx: &PageContext) -> EventFlow {
		if event.kind != EventKind::Submit || event.action != "login" {
			return EventFlow::Ignored;
		}
		let email = event.field("email").trim().to_string();
		let password = event.field("password").to_string();
		let navigator = cx.handle().navigator().clone();
		if let Err(errors) = validate_login(&email, &password) {
			self.app.fail(ClientError::from(errors), &navigator, false);
			return EventFlow::Handled;
		}

		let app = self.app.clone();
		spawn_local(async move {
			match app.api().authenticate(&email, &password).await {
				Ok(response) => match response.credential() {
					Some(credential) if response.success => {
						info_log!("logged in as {}", email);
						app.session().set_credential(Some(credential.to_string()));
						go(&navigator, routes::ACCOUNT);
					}
					_ if response.message.is_empty() => app.alert(GENERIC_ERROR),
					_ => app.alert(&response.message),
				},
				Err(err) => app.report(&err, &navigator, false),
			}
		});
		EventFlow::Handled
	}
}
