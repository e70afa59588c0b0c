//! Login, registration, email verification and account actions.

mod common;

use common::{EMAIL, at, auth};
use marquee_api::ApiError;
use marquee_api::testing::FakeApi;
use marquee_client::alert::SESSION_EXPIRED;
use marquee_client::pages::{RESEND_FAILED, VERIFY_FAILED};
use marquee_client::shell::PASSWORD_CHANGED;
use marquee_pages::UiEvent;
use rstest::rstest;

fn login_event(email: &str, password: &str) -> UiEvent {
	UiEvent::submit("login", [("email", email), ("password", password)])
}

#[rstest]
#[case("/account/")]
#[case("/account/favorites")]
#[case("/account/watchlist")]
fn test_guarded_pages_redirect_to_login(#[case] url: &str) {
	let h = at(url).start();

	assert_eq!(h.page(), Some("login"));
	assert_eq!(h.url(), "/account/login");
	assert!(h.html().contains("data-action=\"login\""));
}

#[rstest]
fn test_guarded_page_mounts_with_session() {
	let h = at("/account/").logged_in().start();

	assert_eq!(h.page(), Some("account"));
	assert!(h.html().contains("href=\"/account/favorites\""));
}

#[rstest]
fn test_login_stores_credential() {
	let api = FakeApi::new().with_auth(auth(true, "", Some("jwt-42")));
	let h = at("/account/login").api(api).start();

	h.send(login_event(EMAIL, "secret1"));

	assert!(h.api.called("authenticate jane@doe.io"));
	assert_eq!(h.stored("jwt").as_deref(), Some("jwt-42"));
	assert_eq!(h.page(), Some("account"));
	assert_eq!(h.url(), "/account/");
}

#[rstest]
fn test_login_rejected_by_server() {
	let api = FakeApi::new().with_auth(auth(false, "Invalid credentials", None));
	let h = at("/account/login").api(api).start();

	h.send(login_event(EMAIL, "secret1"));

	assert_eq!(h.last_alert().as_deref(), Some("Invalid credentials"));
	assert_eq!(h.stored("jwt"), None);
	assert_eq!(h.page(), Some("login"));
}

#[rstest]
#[case("jane", "secret1", "Enter your complete email")]
#[case(EMAIL, "abc", "Enter a password with 6 characters")]
#[case("", "", "Enter your complete email. Enter a password with 6 characters")]
fn test_login_validation(#[case] email: &str, #[case] password: &str, #[case] alert: &str) {
	let h = at("/account/login").start();

	h.send(login_event(email, password));

	assert_eq!(h.last_alert().as_deref(), Some(alert));
	assert!(!h.api.called("authenticate"));
}

#[rstest]
fn test_register_remembers_pending_email() {
	let h = at("/account/register").start();

	h.send(UiEvent::submit(
		"register",
		[
			("name", "Jane Doe"),
			("email", EMAIL),
			("password", "secret1"),
			("passwordConfirm", "secret1"),
		],
	));

	assert!(h.api.called("register Jane Doe jane@doe.io"));
	assert_eq!(h.stored("unverifiedEmail").as_deref(), Some(EMAIL));
	assert_eq!(h.page(), Some("verify-notice"));
	assert!(h.html().contains("A confirmation link has been sent to jane@doe.io"));
}

#[rstest]
fn test_register_mismatched_passwords() {
	let h = at("/account/register").start();

	h.send(UiEvent::submit(
		"register",
		[
			("name", "Jane Doe"),
			("email", EMAIL),
			("password", "secret1"),
			("passwordConfirm", "secret2"),
		],
	));

	assert_eq!(h.last_alert().as_deref(), Some("Passwords don't match"));
	assert!(!h.api.called("register"));
	assert_eq!(h.stored("unverifiedEmail"), None);
}

#[rstest]
#[case(true, "verify-notice")]
#[case(false, "login")]
fn test_forbidden_routing(#[case] pending: bool, #[case] expected: &str) {
	let api = FakeApi::new();
	api.fail("collection", ApiError::Forbidden("not verified".to_string()));
	let setup = at("/account/favorites").api(api).logged_in();
	let setup = if pending { setup.pending(EMAIL) } else { setup };

	let h = setup.start();

	assert_eq!(h.page(), Some(expected));
}

#[rstest]
fn test_unauthorized_clears_session() {
	let api = FakeApi::new();
	api.fail("collection", ApiError::Unauthorized(String::new()));

	let h = at("/account/watchlist").api(api).logged_in().start();

	assert!(!h.app.context().session().is_logged_in());
	assert_eq!(h.stored("jwt"), None);
	assert_eq!(h.last_alert().as_deref(), Some(SESSION_EXPIRED));
}

#[rstest]
#[case("/account/verify?token=abc")]
#[case("/account/verify/abc")]
fn test_confirm_email(#[case] url: &str) {
	let h = at(url).pending(EMAIL).start();

	assert!(h.api.called("verify_email abc"));
	assert_eq!(h.page(), Some("home"));
	assert_eq!(h.stored("unverifiedEmail"), None);
}

#[rstest]
fn test_confirm_email_rejected() {
	let api = FakeApi::new().with_verified(false);
	let h = at("/account/verify?token=stale").api(api).pending(EMAIL).start();

	assert_eq!(h.last_alert().as_deref(), Some(VERIFY_FAILED));
	assert_eq!(h.page(), Some("verify-notice"));
	assert_eq!(h.stored("unverifiedEmail").as_deref(), Some(EMAIL));
}

#[rstest]
fn test_confirm_email_without_token() {
	let h = at("/account/verify").start();

	assert!(!h.api.called("verify_email"));
	assert_eq!(h.last_alert().as_deref(), Some(VERIFY_FAILED));
	assert_eq!(h.page(), Some("verify-notice"));
}

#[rstest]
fn test_resend_honours_cooldown() {
	let h = at("/account/verifyEmail").pending(EMAIL).start();
	assert!(h.html().contains(">Resend<"));

	h.send(UiEvent::click("resend-verification"));
	assert_eq!(h.stored("lastEmailSentTime").as_deref(), Some("1000000"));
	assert!(h.html().contains("Resend in 55 s"));

	h.advance_secs(30);
	h.send(UiEvent::click("resend-verification"));
	let resends = |h: &common::Harness| {
		h.api
			.calls()
			.iter()
			.filter(|call| call.starts_with("resend_verification"))
			.count()
	};
	assert_eq!(resends(&h), 1);

	h.advance_secs(25);
	h.send(UiEvent::click("resend-verification"));
	assert_eq!(resends(&h), 2);
}

#[rstest]
fn test_resend_failure_alerts() {
	let api = FakeApi::new();
	api.fail("resend_verification", ApiError::Network("offline".to_string()));
	let h = at("/account/verifyEmail").api(api).pending(EMAIL).start();

	h.send(UiEvent::click("resend-verification"));

	assert_eq!(h.last_alert().as_deref(), Some(RESEND_FAILED));
}

#[rstest]
fn test_logout() {
	let h = at("/account/").logged_in().start();

	h.send(UiEvent::click("logout"));

	assert_eq!(h.stored("jwt"), None);
	assert_eq!(h.page(), Some("home"));
}

#[rstest]
fn test_delete_account() {
	let h = at("/account/").logged_in().start();

	h.send(UiEvent::click("delete-account"));

	assert!(h.api.called("delete_account"));
	assert_eq!(h.stored("jwt"), None);
	assert_eq!(h.page(), Some("home"));
}

#[rstest]
#[case("secret2", "secret2", Some(PASSWORD_CHANGED), true)]
#[case("secret2", "secret3", Some("Passwords don't match"), false)]
#[case("abc", "abc", Some("Enter a password with 6 characters"), false)]
fn test_reset_password(
	#[case] new: &str,
	#[case] confirmation: &str,
	#[case] alert: Option<&str>,
	#[case] sent: bool,
) {
	let h = at("/account/").logged_in().start();

	h.send(UiEvent::submit(
		"reset-password",
		[
			("currentPassword", "secret1"),
			("newPassword", new),
			("newPasswordConfirm", confirmation),
		],
	));

	assert_eq!(h.last_alert().as_deref(), alert);
	assert_eq!(h.api.called("reset_password"), sent);
}

#[rstest]
fn test_close_alert() {
	let h = at("/account/verify").start();
	assert!(h.alerts.is_open());

	h.send(UiEvent::click("close-alert"));

	assert!(!h.alerts.is_open());
}
