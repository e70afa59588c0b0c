//! In-memory harness for driving the client end to end.

#![allow(dead_code)]

use marquee_api::testing::FakeApi;
use marquee_api::{AuthResponse, CatalogApi};
use marquee_client::{App, MemoryAlerts, Platform, Settings};
use marquee_pages::UiEvent;
use marquee_pages::platform::{History, MemoryHistory, MemoryOutlet, MemoryStorage, Storage};
use marquee_pages::spawn::run_until_stalled;
use std::cell::Cell;
use std::rc::Rc;

pub const EMAIL: &str = "jane@doe.io";

pub struct Harness {
	pub app: App,
	pub api: Rc<FakeApi>,
	pub storage: Rc<MemoryStorage>,
	pub history: Rc<MemoryHistory>,
	pub outlet: Rc<MemoryOutlet>,
	pub alerts: Rc<MemoryAlerts>,
	pub now: Rc<Cell<u64>>,
}

pub struct Setup {
	url: String,
	api: FakeApi,
	settings: Settings,
	credential: Option<&'static str>,
	pending_email: Option<&'static str>,
}

pub fn at(url: &str) -> Setup {
	Setup {
		url: url.to_string(),
		api: FakeApi::new(),
		settings: Settings::default(),
		credential: None,
		pending_email: None,
	}
}

impl Setup {
	pub fn api(mut self, api: FakeApi) -> Self {
		self.api = api;
		self
	}

	pub fn settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	pub fn logged_in(mut self) -> Self {
		self.credential = Some("token-1");
		self
	}

	pub fn pending(mut self, email: &'static str) -> Self {
		self.pending_email = Some(email);
		self
	}

	/// Wires the app, mounts the initial page and runs its fetches.
	pub fn start(self) -> Harness {
		let storage = MemoryStorage::shared();
		if let Some(credential) = self.credential {
			storage.set(&self.settings.storage.credential, credential);
		}
		if let Some(email) = self.pending_email {
			storage.set(&self.settings.storage.unverified_email, email);
		}
		let history = MemoryHistory::shared(self.url);
		let outlet = MemoryOutlet::shared();
		let alerts = Rc::new(MemoryAlerts::new());
		let now = Rc::new(Cell::new(1_000_000));
		let api = Rc::new(self.api);

		let clock = Rc::clone(&now);
		let fake = Rc::clone(&api);
		let platform = Platform {
			storage: storage.clone(),
			history: history.clone(),
			outlet: outlet.clone(),
			alerts: alerts.clone(),
			clock: Rc::new(move || clock.get()),
		};
		let app = App::new(self.settings, platform, move |_| fake as Rc<dyn CatalogApi>).unwrap();
		app.start();
		run_until_stalled();

		Harness {
			app,
			api,
			storage,
			history,
			outlet,
			alerts,
			now,
		}
	}
}

impl Harness {
	/// Dispatches `event` and runs the work it spawned.
	pub fn send(&self, event: UiEvent) {
		self.app.navigator().dispatch(&event);
		run_until_stalled();
	}

	/// Navigates through `urls` back to back, then runs every fetch they
	/// spawned.
	pub fn visit_all(&self, urls: &[&str]) {
		for url in urls {
			self.app.navigator().navigate(url, true);
		}
		run_until_stalled();
	}

	pub fn page(&self) -> Option<&'static str> {
		self.app.navigator().current_page()
	}

	pub fn url(&self) -> String {
		self.history.location()
	}

	pub fn html(&self) -> String {
		self.outlet.html()
	}

	pub fn last_alert(&self) -> Option<String> {
		self.alerts.last()
	}

	pub fn stored(&self, key: &str) -> Option<String> {
		self.storage.get(key)
	}

	pub fn advance_secs(&self, secs: u64) {
		self.now.set(self.now.get() + secs * 1000);
	}
}

pub fn auth(success: bool, message: &str, jwt: Option<&str>) -> AuthResponse {
	AuthResponse {
		success,
		message: message.to_string(),
		jwt: jwt.map(str::to_string),
	}
}
