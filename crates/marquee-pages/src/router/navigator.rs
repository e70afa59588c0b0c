//! The navigator: URL resolution, auth guard, history and page swaps.

use super::{Location, NavigationRequest, PageFactory, RouteTable, RouterError};
use crate::component::{EventFlow, IntoView, Page, PageContext, PageHandle, UiEvent, View};
use crate::platform::{History, Outlet};
use crate::session::SessionStore;
use crate::{debug_log, info_log, warn_log};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// What a call to [`Navigator::navigate`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
	/// A route matched and its page is now mounted.
	Mounted {
		/// The mounted page's name.
		page: &'static str,
		/// The generation the page was mounted in.
		generation: u64,
	},
	/// No route matched; the not-found page is mounted.
	NotFound {
		/// The unmatched path.
		path: String,
	},
	/// The route needs a session and none exists; the login page was
	/// navigated to instead.
	Redirected {
		/// The requested target.
		from: String,
		/// The login path.
		to: String,
	},
	/// The page started another navigation while mounting and was dropped.
	Superseded,
}

/// Receives UI events the mounted page does not handle.
///
/// Used for controls that live outside the page outlet, such as the search
/// bar and the logout button.
pub trait ShellHandler {
	/// Handles `event`.
	fn handle(&self, event: &UiEvent, navigator: &NavigatorHandle) -> EventFlow;
}

/// Fallback page for unmatched paths.
#[derive(Debug, Default)]
pub struct NotFoundPage;

impl Page for NotFoundPage {
	fn name(&self) -> &'static str {
		"not-found"
	}

	fn mount(&mut self, _cx: &PageContext) -> View {
		View::element("section")
			.class("not-found")
			.child(View::element("h1").child("Page not found"))
			.child(
				View::element("a")
					.attr("href", "/")
					.flag("data-link", true)
					.child("Back to the home page"),
			)
			.into_view()
	}
}

struct MountedPage {
	// Taken out while the page handles an event.
	page: Option<Box<dyn Page>>,
	name: &'static str,
	generation: u64,
	location: Location,
}

struct NavigatorInner {
	table: RouteTable,
	session: SessionStore,
	history: Rc<dyn History>,
	outlet: Rc<dyn Outlet>,
	login_path: String,
	not_found: RefCell<PageFactory>,
	shell: RefCell<Option<Rc<dyn ShellHandler>>>,
	generation: Cell<u64>,
	mounted: RefCell<Option<MountedPage>>,
}

/// Resolves URLs to pages and keeps history and the outlet in sync.
///
/// There is one navigator per application. Pages reach it through a
/// [`NavigatorHandle`], which does not keep it alive.
pub struct Navigator {
	inner: Rc<NavigatorInner>,
}

impl fmt::Debug for Navigator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Navigator")
			.field("routes", &self.inner.table.len())
			.field("login_path", &self.inner.login_path)
			.field("generation", &self.inner.generation.get())
			.field("current", &self.current_page())
			.finish()
	}
}

impl Navigator {
	/// Creates a navigator. Nothing is mounted until [`initialize`](Self::initialize).
	pub fn new(
		table: RouteTable,
		session: SessionStore,
		history: Rc<dyn History>,
		outlet: Rc<dyn Outlet>,
		login_path: impl Into<String>,
	) -> Self {
		let not_found: PageFactory = Rc::new(|| Box::new(NotFoundPage) as Box<dyn Page>);
		Self {
			inner: Rc::new(NavigatorInner {
				table,
				session,
				history,
				outlet,
				login_path: login_path.into(),
				not_found: RefCell::new(not_found),
				shell: RefCell::new(None),
				generation: Cell::new(0),
				mounted: RefCell::new(None),
			}),
		}
	}

	/// Replaces the page shown for unmatched paths.
	pub fn with_not_found<F, P>(self, factory: F) -> Self
	where
		F: Fn() -> P + 'static,
		P: Page + 'static,
	{
		*self.inner.not_found.borrow_mut() = Rc::new(move || Box::new(factory()) as Box<dyn Page>);
		self
	}

	/// Installs the handler for events the mounted page ignores.
	pub fn set_shell(&self, shell: Rc<dyn ShellHandler>) {
		*self.inner.shell.borrow_mut() = Some(shell);
	}

	/// Wires browser listeners (on the web) and mounts the page for the
	/// current URL without adding a history entry.
	pub fn initialize(&self) -> NavigationOutcome {
		#[cfg(target_arch = "wasm32")]
		crate::platform::install_listeners(self.handle());

		let location = self.inner.history.location();
		info_log!("initializing at {}", location);
		self.inner.navigate(&location, false)
	}

	/// Navigates to `target` (path plus optional query string).
	pub fn navigate(&self, target: &str, push_history: bool) -> NavigationOutcome {
		self.inner.navigate(target, push_history)
	}

	/// Navigates for an intercepted link click.
	pub fn follow_link(&self, href: &str) -> NavigationOutcome {
		self.inner.navigate(href, true)
	}

	/// Re-navigates to the history's current entry after back/forward.
	pub fn handle_pop_state(&self) -> NavigationOutcome {
		let location = self.inner.history.location();
		self.inner.navigate(&location, false)
	}

	/// Routes a UI event to the mounted page, then to the shell.
	pub fn dispatch(&self, event: &UiEvent) -> EventFlow {
		self.inner.dispatch(event)
	}

	/// Returns a weak handle for pages and listeners.
	pub fn handle(&self) -> NavigatorHandle {
		NavigatorHandle {
			inner: Rc::downgrade(&self.inner),
		}
	}

	/// Returns the session store guarding routes.
	pub fn session(&self) -> &SessionStore {
		&self.inner.session
	}

	/// Returns the route table.
	pub fn table(&self) -> &RouteTable {
		&self.inner.table
	}

	/// Returns the latest navigation generation, if any navigation happened.
	pub fn current_generation(&self) -> Option<u64> {
		self.inner.current_generation()
	}

	/// Returns the name of the mounted page.
	pub fn current_page(&self) -> Option<&'static str> {
		self.inner.mounted.borrow().as_ref().map(|mounted| mounted.name)
	}

	/// Returns the location of the mounted page.
	pub fn current_location(&self) -> Option<Location> {
		self.inner
			.mounted
			.borrow()
			.as_ref()
			.map(|mounted| mounted.location.clone())
	}
}

impl NavigatorInner {
	fn handle(self: &Rc<Self>) -> NavigatorHandle {
		NavigatorHandle {
			inner: Rc::downgrade(self),
		}
	}

	fn current_generation(&self) -> Option<u64> {
		let generation = self.generation.get();
		(generation > 0).then_some(generation)
	}

	fn navigate(self: &Rc<Self>, target: &str, push_history: bool) -> NavigationOutcome {
		let request = NavigationRequest::new(target, push_history);
		info_log!("navigate {} (push={})", request.target, push_history);

		// The URL updates even when the guard redirects below.
		if request.push_history {
			self.history.push(&request.target);
		}

		let path = request.path().to_string();
		let (page, outcome_path) = match self.table.match_path(&path) {
			Some(matched) => {
				let route = matched.route;
				if route.requires_auth() && !self.session.is_logged_in() {
					if path == self.login_path {
						warn_log!("login path {} is guarded, mounting it anyway", path);
					} else {
						info_log!("{} requires a session, redirecting to {}", path, self.login_path);
						let login_path = self.login_path.clone();
						self.navigate(&login_path, true);
						return NavigationOutcome::Redirected {
							from: request.target,
							to: login_path,
						};
					}
				}
				let mut page = route.instantiate();
				page.set_params(matched.params);
				page.set_requires_auth(route.requires_auth());
				(page, None)
			}
			None => {
				warn_log!("no route for {}", path);
				let factory = Rc::clone(&self.not_found.borrow());
				(factory(), Some(path))
			}
		};

		self.mount(page, request.location, outcome_path)
	}

	fn mount(
		self: &Rc<Self>,
		mut page: Box<dyn Page>,
		location: Location,
		not_found_path: Option<String>,
	) -> NavigationOutcome {
		let generation = self.generation.get() + 1;
		self.generation.set(generation);

		let previous = self.mounted.borrow_mut().take();
		if let Some(mut previous) = previous {
			if let Some(mut old) = previous.page.take() {
				debug_log!("unmounting {}", previous.name);
				old.unmount();
			}
		}

		let name = page.name();
		let cx = PageContext::new(PageHandle::new(self.handle(), generation), location.clone());
		let view = page.mount(&cx);

		if self.generation.get() != generation {
			debug_log!("{} navigated away while mounting", name);
			page.unmount();
			return NavigationOutcome::Superseded;
		}

		if self.outlet.supports_transitions() {
			self.outlet.replace_with_transition(view);
		} else {
			self.outlet.replace(view);
		}

		*self.mounted.borrow_mut() = Some(MountedPage {
			page: Some(page),
			name,
			generation,
			location,
		});
		info_log!("mounted {} (generation {})", name, generation);

		match not_found_path {
			Some(path) => NavigationOutcome::NotFound { path },
			None => NavigationOutcome::Mounted {
				page: name,
				generation,
			},
		}
	}

	fn commit(&self, generation: u64, view: View) -> bool {
		if self.generation.get() != generation {
			debug_log!(
				"discarding update from generation {} (current {})",
				generation,
				self.generation.get()
			);
			return false;
		}
		self.outlet.replace(view);
		true
	}

	fn dispatch(self: &Rc<Self>, event: &UiEvent) -> EventFlow {
		debug_log!("dispatch {:?} '{}'", event.kind, event.action);

		let taken = self.mounted.borrow_mut().as_mut().and_then(|mounted| {
			mounted
				.page
				.take()
				.map(|page| (page, mounted.generation, mounted.location.clone()))
		});

		let mut flow = EventFlow::Ignored;
		if let Some((mut page, generation, location)) = taken {
			let cx = PageContext::new(PageHandle::new(self.handle(), generation), location);
			flow = page.on_event(event, &cx);

			let orphan = {
				let mut mounted = self.mounted.borrow_mut();
				match mounted.as_mut() {
					Some(slot) if slot.generation == generation => {
						slot.page = Some(page);
						None
					}
					_ => Some(page),
				}
			};
			// Replaced by a navigation started from its own handler.
			if let Some(mut orphan) = orphan {
				orphan.unmount();
			}
		}

		if flow == EventFlow::Handled {
			return flow;
		}

		let shell = self.shell.borrow().clone();
		match shell {
			Some(shell) => shell.handle(event, &self.handle()),
			None => {
				debug_log!("unhandled event '{}'", event.action);
				EventFlow::Ignored
			}
		}
	}
}

/// A non-owning handle to the [`Navigator`].
///
/// Every operation fails softly once the navigator is gone.
#[derive(Clone)]
pub struct NavigatorHandle {
	inner: Weak<NavigatorInner>,
}

impl fmt::Debug for NavigatorHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigatorHandle")
			.field("alive", &(self.inner.strong_count() > 0))
			.finish()
	}
}

impl NavigatorHandle {
	fn upgrade(&self) -> Result<Rc<NavigatorInner>, RouterError> {
		self.inner
			.upgrade()
			.ok_or_else(|| RouterError::NavigationFailed("navigator dropped".to_string()))
	}

	/// Navigates to `target`, pushing a history entry.
	pub fn navigate(&self, target: &str) -> Result<NavigationOutcome, RouterError> {
		Ok(self.upgrade()?.navigate(target, true))
	}

	/// Navigates to `target` without touching history.
	pub fn replace(&self, target: &str) -> Result<NavigationOutcome, RouterError> {
		Ok(self.upgrade()?.navigate(target, false))
	}

	/// Navigates for an intercepted link click.
	pub fn follow_link(&self, href: &str) -> Result<NavigationOutcome, RouterError> {
		self.navigate(href)
	}

	/// Re-navigates to the history's current entry.
	pub fn handle_pop_state(&self) -> Result<NavigationOutcome, RouterError> {
		let inner = self.upgrade()?;
		let location = inner.history.location();
		Ok(inner.navigate(&location, false))
	}

	/// Routes a UI event through the navigator.
	pub fn dispatch(&self, event: &UiEvent) -> EventFlow {
		match self.inner.upgrade() {
			Some(inner) => inner.dispatch(event),
			None => EventFlow::Ignored,
		}
	}

	/// Replaces the outlet content if `generation` is still current.
	pub fn commit(&self, generation: u64, view: View) -> bool {
		self.inner
			.upgrade()
			.is_some_and(|inner| inner.commit(generation, view))
	}

	/// Returns the latest navigation generation.
	pub fn current_generation(&self) -> Option<u64> {
		self.inner.upgrade().and_then(|inner| inner.current_generation())
	}

	/// Returns the history's current URL.
	pub fn location(&self) -> Option<Location> {
		self.inner
			.upgrade()
			.map(|inner| Location::parse(&inner.history.location()))
	}
}
