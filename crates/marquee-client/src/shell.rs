//! Actions of the controls outside the page outlet.
//!
//! The header search, the account buttons, the collection buttons of the
//! movie page and the alert modal all report through the navigator; events a
//! page ignores end up here.

use crate::alert::GENERIC_ERROR;
use crate::context::{AppContext, go};
use crate::error::ClientError;
use crate::routes;
use crate::validation::validate_password_change;
use marquee_api::{ApiResult, AuthResponse, CollectionKind};
use marquee_pages::router::{NavigatorHandle, ShellHandler};
use marquee_pages::spawn::spawn_local;
use marquee_pages::{EventFlow, EventKind, Location, UiEvent, info_log, warn_log};

/// Search text shorter than this is ignored.
const MIN_SEARCH_LEN: usize = 2;

pub const SAVE_FAILED: &str = "We couldn't save the movie.";
pub const DELETE_FAILED: &str = "We couldn't delete the movie.";
pub const PASSWORD_CHANGED: &str = "Password successfully changed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectionChange {
	Add,
	Remove,
}

/// Handles shell actions against the shared services.
#[derive(Debug, Clone)]
pub struct AppShell {
	app: AppContext,
}

impl AppShell {
	pub fn new(app: AppContext) -> Self {
		Self { app }
	}

	fn search(&self, event: &UiEvent, navigator: &NavigatorHandle) {
		let query = event.field("q").trim();
		if query.chars().count() < MIN_SEARCH_LEN {
			return;
		}
		let target = Location::parse(routes::MOVIES).with("q", query).to_url();
		go(navigator, &target);
	}

	fn logout(&self, navigator: &NavigatorHandle) {
		info_log!("logging out");
		self.app.session().clear();
		go(navigator, routes::HOME);
	}

	fn delete_account(&self, navigator: &NavigatorHandle) {
		let app = self.app.clone();
		let navigator = navigator.clone();
		spawn_local(async move {
			match app.api().delete_account().await {
				Ok(response) if response.success => {
					info_log!("account deleted");
					app.session().clear();
					go(&navigator, routes::HOME);
				}
				Ok(response) => alert_response(&app, &response),
				Err(err) => app.report(&err, &navigator, false),
			}
		});
	}

	fn change_collection(
		&self,
		change: CollectionChange,
		kind: CollectionKind,
		movie_id: Option<&str>,
		score: Option<u8>,
		navigator: &NavigatorHandle,
	) {
		if !self.app.session().is_logged_in() {
			go(navigator, routes::ACCOUNT);
			return;
		}
		let Some(movie_id) = movie_id.and_then(|id| id.parse::<i64>().ok()) else {
			warn_log!("collection action without a movie id");
			return;
		};

		let app = self.app.clone();
		let navigator = navigator.clone();
		spawn_local(async move {
			let api = app.api();
			let (result, failure): (ApiResult<AuthResponse>, _) = match change {
				CollectionChange::Add => {
					(api.add_to_collection(movie_id, kind, score).await, SAVE_FAILED)
				}
				CollectionChange::Remove => {
					(api.remove_from_collection(movie_id, kind).await, DELETE_FAILED)
				}
			};
			match result {
				Ok(response) if response.success => go(&navigator, kind.page_path()),
				Ok(_) => {
					app.alert(failure);
					go(&navigator, routes::HOME);
				}
				Err(err) => app.report(&err, &navigator, false),
			}
		});
	}

	fn rate(&self, event: &UiEvent, navigator: &NavigatorHandle) {
		let score = event
			.field("score")
			.parse::<u8>()
			.ok()
			.filter(|score| (1..=10).contains(score));
		if score.is_none() {
			warn_log!("ignoring rating '{}'", event.field("score"));
			return;
		}
		self.change_collection(
			CollectionChange::Add,
			CollectionKind::Favorite,
			Some(event.field("movie_id")),
			score,
			navigator,
		);
	}

	fn reset_password(&self, event: &UiEvent, navigator: &NavigatorHandle) {
		let current = event.field("currentPassword").to_string();
		let new = event.field("newPassword").to_string();
		if let Err(errors) = validate_password_change(&new, event.field("newPasswordConfirm")) {
			self.app.fail(ClientError::from(errors), navigator, false);
			return;
		}

		let app = self.app.clone();
		let navigator = navigator.clone();
		spawn_local(async move {
			match app.api().reset_password(&current, &new).await {
				Ok(response) if response.success => app.alert(PASSWORD_CHANGED),
				Ok(response) => alert_response(&app, &response),
				Err(err) => app.report(&err, &navigator, false),
			}
		});
	}
}

fn alert_response(app: &AppContext, response: &AuthResponse) {
	if response.message.is_empty() {
		app.alert(GENERIC_ERROR);
	} else {
		app.alert(&response.message);
	}
}

fn collection_action(action: &str) -> Option<(CollectionChange, CollectionKind)> {
	let (verb, kind) = action.split_once('-')?;
	let change = match verb {
		"add" => CollectionChange::Add,
		"remove" => CollectionChange::Remove,
		_ => return None,
	};
	Some((change, kind.parse().ok()?))
}

impl ShellHandler for AppShell {
	fn handle(&self, event: &UiEvent, navigator: &NavigatorHandle) -> EventFlow {
		match (event.kind, event.action.as_str()) {
			(EventKind::Submit, "search") => self.search(event, navigator),
			(EventKind::Submit, "rate-favorite") => self.rate(event, navigator),
			(EventKind::Submit, "reset-password") => self.reset_password(event, navigator),
			(EventKind::Click, "logout") => self.logout(navigator),
			(EventKind::Click, "delete-account") => self.delete_account(navigator),
			(EventKind::Click, "close-alert") => self.app.close_alert(),
			(EventKind::Click, action) => match collection_action(action) {
				Some((change, kind)) => {
					self.change_collection(change, kind, event.value.as_deref(), None, navigator)
				}
				None => return EventFlow::Ignored,
			},
			_ => return EventFlow::Ignored,
		}
		EventFlow::Handled
	}
}
