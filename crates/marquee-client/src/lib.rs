//! Marquee Client - the browser application of the Marquee movie catalog
//!
//! Wires the navigation engine of `marquee-pages` to the REST service of
//! `marquee-api`: the route table, every page, the shell actions and the
//! remote-fault policy.
//!
//! ## Architecture
//!
//! - [`config`]: settings loaded from TOML
//! - [`context`]: [`AppContext`], the services every page receives
//! - [`routes`]: the URL map and its guards
//! - [`pages`]: one [`Page`](marquee_pages::Page) per route
//! - [`shell`]: actions of the controls outside the page outlet
//!
//! On `wasm32` the crate exports a `start` function that boots the
//! application against the browser's history, storage and `<main>` element.
//! Everywhere else [`App::new`] accepts any [`Platform`], which is how the
//! test suites drive it with in-memory backends.

pub mod alert;
pub mod config;
pub mod context;
pub mod cooldown;
pub mod error;
pub mod pages;
pub mod routes;
pub mod shell;
pub mod validation;

pub use alert::{Alerts, MemoryAlerts};
pub use config::Settings;
pub use context::{AppContext, Clock, system_clock};
pub use error::ClientError;
pub use shell::AppShell;

use marquee_api::CatalogApi;
use marquee_pages::platform::{History, Outlet, Storage};
use marquee_pages::{NavigationOutcome, Navigator, SessionStore, info_log};
use std::rc::Rc;

/// The runtime services the application is built on.
pub struct Platform {
	/// Durable storage for the session and the verification state.
	pub storage: Rc<dyn Storage>,
	/// Session history.
	pub history: Rc<dyn History>,
	/// Region hosting the mounted page.
	pub outlet: Rc<dyn Outlet>,
	/// The alert modal.
	pub alerts: Rc<dyn Alerts>,
	/// Wall clock, in epoch milliseconds.
	pub clock: Clock,
}

/// A fully wired client.
#[derive(Debug)]
pub struct App {
	navigator: Navigator,
	context: AppContext,
}

impl App {
	/// Validates `settings` and wires the application.
	///
	/// `api` receives the session so the REST client can read the current
	/// credential on every request.
	pub fn new<F>(settings: Settings, platform: Platform, api: F) -> Result<Self, ClientError>
	where
		F: FnOnce(&SessionStore) -> Rc<dyn CatalogApi>,
	{
		settings.validate()?;
		let session = SessionStore::load(platform.storage, settings.storage.credential.clone());
		let api = api(&session);
		let login_path = settings.login_path.clone();
		let context = AppContext::new(
			settings,
			session.clone(),
			api,
			platform.alerts,
			platform.clock,
		);

		let table = routes::route_table(&context)?;
		let navigator = Navigator::new(
			table,
			session,
			platform.history,
			platform.outlet,
			login_path,
		);
		navigator.set_shell(Rc::new(AppShell::new(context.clone())));
		Ok(Self { navigator, context })
	}

	/// Mounts the page for the current URL.
	pub fn start(&self) -> NavigationOutcome {
		info_log!("starting client");
		self.navigator.initialize()
	}

	/// Returns the navigator.
	pub fn navigator(&self) -> &Navigator {
		&self.navigator
	}

	/// Returns the shared services.
	pub fn context(&self) -> &AppContext {
		&self.context
	}
}

#[cfg(target_arch = "wasm32")]
mod entry {
	use super::*;
	use crate::alert::DialogAlerts;
	use marquee_api::HttpApi;
	use marquee_pages::error_log;
	use marquee_pages::platform::{BrowserHistory, DomOutlet, LocalStorage};
	use std::cell::RefCell;
	use wasm_bindgen::prelude::*;

	thread_local! {
		// Listeners only hold weak handles, so the app lives here.
		static APP: RefCell<Option<App>> = const { RefCell::new(None) };
	}

	fn boot() -> Result<App, JsValue> {
		let settings = Settings::bundled().map_err(|e| JsValue::from_str(&e.to_string()))?;
		let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
		let api_url = settings.api_url(&window.location().origin()?);
		let outlet = DomOutlet::query("main").ok_or_else(|| JsValue::from_str("no <main> outlet"))?;

		let platform = Platform {
			storage: LocalStorage::shared(),
			history: BrowserHistory::shared(),
			outlet,
			alerts: Rc::new(DialogAlerts),
			clock: system_clock(),
		};
		App::new(settings, platform, move |session| {
			let session = session.clone();
			Rc::new(HttpApi::new(api_url, move || session.credential())) as Rc<dyn CatalogApi>
		})
		.map_err(|e| JsValue::from_str(&e.to_string()))
	}

	#[wasm_bindgen(start)]
	pub fn start() -> Result<(), JsValue> {
		console_error_panic_hook::set_once();

		let app = boot().inspect_err(|err| error_log!("client failed to start: {:?}", err))?;
		app.start();
		APP.with(|slot| *slot.borrow_mut() = Some(app));
		Ok(())
	}
}
