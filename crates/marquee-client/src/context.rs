//! Services shared by every page.

use crate::alert::{Alerts, GENERIC_ERROR, RATE_LIMITED, SESSION_EXPIRED};
use crate::config::Settings;
use crate::cooldown::ResendCooldown;
use crate::error::ClientError;
use crate::routes;
use marquee_api::{ApiError, CatalogApi};
use marquee_pages::router::NavigatorHandle;
use marquee_pages::{
	ListController, Location, PageHandle, SessionStore, debug_log, error_log, info_log, warn_log,
};
use std::fmt;
use std::rc::Rc;

/// Current time in epoch milliseconds.
pub type Clock = Rc<dyn Fn() -> u64>;

/// Returns the platform clock.
pub fn system_clock() -> Clock {
	#[cfg(target_arch = "wasm32")]
	{
		Rc::new(|| js_sys::Date::now() as u64)
	}
	#[cfg(not(target_arch = "wasm32"))]
	{
		Rc::new(|| {
			std::time::SystemTime::now()
				.duration_since(std::time::UNIX_EPOCH)
				.map(|elapsed| elapsed.as_millis() as u64)
				.unwrap_or(0)
		})
	}
}

struct ContextInner {
	settings: Settings,
	session: SessionStore,
	api: Rc<dyn CatalogApi>,
	alerts: Rc<dyn Alerts>,
	clock: Clock,
}

/// Handle to the client's shared services. Cheap to clone.
#[derive(Clone)]
pub struct AppContext {
	inner: Rc<ContextInner>,
}

impl fmt::Debug for AppContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AppContext")
			.field("settings", &self.inner.settings)
			.field("session", &self.inner.session)
			.finish()
	}
}

impl AppContext {
	/// Bundles the services.
	pub fn new(
		settings: Settings,
		session: SessionStore,
		api: Rc<dyn CatalogApi>,
		alerts: Rc<dyn Alerts>,
		clock: Clock,
	) -> Self {
		Self {
			inner: Rc::new(ContextInner {
				settings,
				session,
				api,
				alerts,
				clock,
			}),
		}
	}

	/// Returns the settings.
	pub fn settings(&self) -> &Settings {
		&self.inner.settings
	}

	/// Returns the session.
	pub fn session(&self) -> &SessionStore {
		&self.inner.session
	}

	/// Returns the REST client.
	pub fn api(&self) -> Rc<dyn CatalogApi> {
		Rc::clone(&self.inner.api)
	}

	/// Returns the current time in epoch milliseconds.
	pub fn now_ms(&self) -> u64 {
		(self.inner.clock)()
	}

	/// Shows `message` in the alert modal.
	pub fn alert(&self, message: &str) {
		info_log!("alert: {}", message);
		self.inner.alerts.show(message);
	}

	/// Closes the alert modal.
	pub fn close_alert(&self) {
		self.inner.alerts.close();
	}

	/// Returns the email waiting for verification, if any.
	pub fn pending_email(&self) -> Option<String> {
		self.inner
			.session
			.storage()
			.get(&self.inner.settings.storage.unverified_email)
			.filter(|email| !email.is_empty())
	}

	/// Records or clears the email waiting for verification.
	pub fn set_pending_email(&self, email: Option<&str>) {
		let storage = self.inner.session.storage();
		let key = &self.inner.settings.storage.unverified_email;
		match email {
			Some(email) => storage.set(key, email),
			None => storage.remove(key),
		}
	}

	/// Returns when the last verification mail was requested.
	pub fn last_email_sent(&self) -> Option<u64> {
		self.inner
			.session
			.storage()
			.get(&self.inner.settings.storage.last_email_sent)
			.and_then(|value| value.parse().ok())
	}

	/// Records that a verification mail was requested now.
	pub fn mark_email_sent(&self) {
		self.inner.session.storage().set(
			&self.inner.settings.storage.last_email_sent,
			&self.now_ms().to_string(),
		);
	}

	/// Returns the verification mail cooldown.
	pub fn cooldown(&self) -> ResendCooldown {
		ResendCooldown::new(self.inner.settings.resend_delay_secs)
	}

	/// Seconds before another verification mail may be requested.
	pub fn resend_remaining(&self) -> u64 {
		self.cooldown()
			.remaining(self.last_email_sent(), self.now_ms())
	}

	/// Builds the list controller for a list page at `location`.
	pub fn list(&self, location: &Location) -> ListController {
		ListController::new(
			location.clone(),
			self.inner.settings.default_page_size,
			self.inner.settings.pagination_labels,
		)
	}

	/// Applies the remote-fault policy to a failed REST call.
	///
	/// - 401: the session is cleared and the user is told to log in again
	/// - 403: the user is sent to the verify-email notice when a
	///   registration is pending, otherwise to the login page
	/// - 429: a rate-limit alert
	/// - anything else: a generic alert, then home when `go_home` is set
	pub fn report(&self, err: &ApiError, navigator: &NavigatorHandle, go_home: bool) {
		warn_log!("remote fault: {}", err);
		match err {
			ApiError::Unauthorized(message) => {
				self.inner.session.clear();
				self.alert(if message.is_empty() {
					SESSION_EXPIRED
				} else {
					message.as_str()
				});
			}
			ApiError::Forbidden(_) => {
				let target = match self.pending_email() {
					Some(_) => routes::VERIFY_NOTICE,
					None => self.inner.settings.login_path.as_str(),
				};
				go(navigator, target);
			}
			ApiError::RateLimited => self.alert(RATE_LIMITED),
			ApiError::Status { .. } | ApiError::Network(_) | ApiError::Decode(_) => {
				self.alert(GENERIC_ERROR);
				if go_home {
					go(navigator, routes::HOME);
				}
			}
		}
	}

	/// Applies [`report`](Self::report) for a page's fetch, unless the page
	/// has been navigated away from since the fetch started.
	pub fn report_if_current(&self, err: &ApiError, handle: &PageHandle, go_home: bool) {
		if !handle.is_current() {
			debug_log!("dropping stale fault: {}", err);
			return;
		}
		self.report(err, handle.navigator(), go_home);
	}

	/// Turns any client error into an alert or a redirect.
	pub fn fail(&self, err: ClientError, navigator: &NavigatorHandle, go_home: bool) {
		match err {
			ClientError::Remote(err) => self.report(&err, navigator, go_home),
			ClientError::Validation(errors) => self.alert(&errors.to_string()),
			ClientError::Config(_) | ClientError::Router(_) => {
				error_log!("{}", err);
				self.alert(GENERIC_ERROR);
			}
		}
	}
}

/// Navigates, logging instead of failing when the navigator is gone.
pub(crate) fn go(navigator: &NavigatorHandle, target: &str) {
	if let Err(err) = navigator.navigate(target) {
		warn_log!("navigation to {} failed: {}", target, err);
	}
}
