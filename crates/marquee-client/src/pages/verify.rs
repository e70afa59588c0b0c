use crate::context::AppContext;
use crate::cooldown::ResendCooldown;
use marquee_pages::spawn::spawn_local;
use marquee_pages::{
	ElementView, EventFlow, EventKind, IntoView, Page, PageContext, PageHandle, UiEvent, View,
	warn_log,
};

/// Shown when the verification mail cannot be requested.
pub const RESEND_FAILED: &str = "Unable to send the mail";

/// `/account/verifyEmail`: tells a new user to check their inbox and offers
/// to resend the mail once the cooldown has elapsed.
pub struct VerifyNoticePage {
	app: AppContext,
}

impl VerifyNoticePage {
	pub fn new(app: AppContext) -> Self {
		Self { app }
	}
}

fn render(app: &AppContext) -> View {
	let email = app.pending_email().unwrap_or_default();
	let remaining = app.resend_remaining();

	ElementView::new("section")
		.attr("id", "verify")
		.child(ElementView::new("h2").child("Verify your email"))
		.child(ElementView::new("p").attr("id", "verifyText").child(format!(
			"A confirmation link has been sent to {} mail address, please confirm your email address",
			email
		)))
		.child(
			ElementView::new("button")
				.attr("id", "resend-button")
				.action("resend-verification")
				.flag("disabled", remaining > 0)
				.child(
					ElementView::new("span")
						.attr("id", "timer")
						.child(ResendCooldown::label(remaining)),
				),
		)
		.into_view()
}

#[cfg(target_arch = "wasm32")]
async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		if let Some(window) = web_sys::window() {
			let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
		}
	});
	let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Re-renders every second until the cooldown ends or the page is replaced.
fn start_countdown(app: AppContext, handle: PageHandle) {
	spawn_local(async move {
		#[cfg(target_arch = "wasm32")]
		{
			while app.resend_remaining() > 0 {
				sleep(1000).await;
				if !handle.render(render(&app)) {
					return;
				}
			}
		}
		#[cfg(not(target_arch = "wasm32"))]
		{
			handle.render(render(&app));
		}
	});
}

impl Page for VerifyNoticePage {
	fn name(&self) -> &'static str {
		"verify-notice"
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		if self.app.resend_remaining() > 0 {
			start_countdown(self.app.clone(), cx.handle().clone());
		}
		render(&self.app)
	}

	fn on_event(&mut self, event: &UiEvent, cx: &PageContext) -> EventFlow {
		if event.kind != EventKind::Click || event.action != "resend-verification" {
			return EventFlow::Ignored;
		}
		if self.app.resend_remaining() > 0 {
			return EventFlow::Handled;
		}
		let Some(email) = self.app.pending_email() else {
			warn_log!("resend requested without a pending email");
			self.app.alert(RESEND_FAILED);
			return EventFlow::Handled;
		};

		self.app.mark_email_sent();
		let app = self.app.clone();
		spawn_local(async move {
			if let Err(err) = app.api().resend_verification(&email).await {
				warn_log!("resend failed: {}", err);
				app.alert(RESEND_FAILED);
			}
		});
		start_countdown(self.app.clone(), cx.handle().clone());
		EventFlow::Handled
	}
}
