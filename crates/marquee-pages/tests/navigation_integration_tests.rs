//! Navigator behavior against the in-memory platform backends.

use marquee_pages::platform::{MemoryHistory, MemoryOutlet, MemoryStorage};
use marquee_pages::router::{NavigatorHandle, ShellHandler};
use marquee_pages::spawn::{run_until_stalled, spawn_local};
use marquee_pages::{
	ElementView, EventFlow, IntoView, NavigationOutcome, Navigator, Page, PageContext,
	RouteParams, RouteTable, SessionStore, UiEvent, View,
};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::rc::Rc;

fn text(content: &str) -> View {
	ElementView::new("p").child(content.to_string()).into_view()
}

struct Static(&'static str);

impl Page for Static {
	fn name(&self) -> &'static str {
		self.0
	}

	fn mount(&mut self, _cx: &PageContext) -> View {
		text(self.0)
	}
}

/// Renders "loading", then commits its id once the fetch resolves.
#[derive(Default)]
struct Detail {
	id: String,
}

impl Page for Detail {
	fn name(&self) -> &'static str {
		"detail"
	}

	fn set_params(&mut self, params: RouteParams) {
		self.id = params.get("id").unwrap_or_default().to_string();
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		let handle = cx.handle().clone();
		let id = self.id.clone();
		spawn_local(async move {
			handle.render(text(&format!("movie {}", id)));
		});
		text("loading")
	}
}

/// Navigates home when its button is clicked.
struct Leaving {
	unmounted: Rc<RefCell<bool>>,
}

impl Page for Leaving {
	fn name(&self) -> &'static str {
		"leaving"
	}

	fn mount(&mut self, _cx: &PageContext) -> View {
		ElementView::new("button")
			.action("leave")
			.child("Leave")
			.into_view()
	}

	fn on_event(&mut self, event: &UiEvent, cx: &PageContext) -> EventFlow {
		if event.action != "leave" {
			return EventFlow::Ignored;
		}
		cx.navigate("/").unwrap();
		EventFlow::Handled
	}

	fn unmount(&mut self) {
		*self.unmounted.borrow_mut() = true;
	}
}

/// Redirects immediately while mounting.
struct Bounce;

impl Page for Bounce {
	fn name(&self) -> &'static str {
		"bounce"
	}

	fn mount(&mut self, cx: &PageContext) -> View {
		cx.navigate("/movies").unwrap();
		text("bounce")
	}
}

#[derive(Default)]
struct RecordingShell {
	actions: RefCell<Vec<String>>,
}

impl ShellHandler for RecordingShell {
	fn handle(&self, event: &UiEvent, navigator: &NavigatorHandle) -> EventFlow {
		self.actions.borrow_mut().push(event.action.clone());
		if event.action == "logout" {
			navigator.navigate("/").unwrap();
			return EventFlow::Handled;
		}
		EventFlow::Ignored
	}
}

struct Harness {
	navigator: Navigator,
	history: Rc<MemoryHistory>,
	outlet: Rc<MemoryOutlet>,
	unmounted: Rc<RefCell<bool>>,
}

fn build(outlet: Rc<MemoryOutlet>) -> Harness {
	let unmounted = Rc::new(RefCell::new(false));
	let flag = unmounted.clone();
	let table = RouteTable::builder()
		.exact("/", false, || Static("home"))
		.exact("/movies", false, || Static("movies"))
		.pattern("/movies/{id:int}", false, Detail::default)
		.exact("/leave", false, move || Leaving {
			unmounted: flag.clone(),
		})
		.exact("/bounce", false, || Bounce)
		.exact("/account/", true, || Static("account"))
		.exact("/account/favorites", true, || Static("favorites"))
		.exact("/account/login", false, || Static("login"))
		.build()
		.unwrap();
	let history = MemoryHistory::shared("/");
	let session = SessionStore::load(MemoryStorage::shared(), "jwt");
	let navigator = Navigator::new(
		table,
		session,
		history.clone(),
		outlet.clone(),
		"/account/login",
	);
	Harness {
		navigator,
		history,
		outlet,
		unmounted,
	}
}

#[fixture]
fn harness() -> Harness {
	build(MemoryOutlet::shared())
}

#[rstest]
fn test_initialize_mounts_current_url_without_push(harness: Harness) {
	let outcome = harness.navigator.initialize();

	assert!(matches!(outcome, NavigationOutcome::Mounted { page: "home", .. }));
	assert_eq!(harness.history.entries(), vec!["/"]);
	assert_eq!(harness.outlet.html(), "<p>home</p>");
}

#[rstest]
fn test_query_string_is_ignored_for_matching(harness: Harness) {
	harness.navigator.navigate("/movies?q=alien&page=2", true);

	assert_eq!(harness.navigator.current_page(), Some("movies"));
	assert_eq!(harness.history.entries(), vec!["/", "/movies?q=alien&page=2"]);
	assert_eq!(
		harness.navigator.current_location().unwrap().get("q"),
		Some("alien")
	);
}

#[rstest]
fn test_unknown_path_mounts_not_found(harness: Harness) {
	let outcome = harness.navigator.navigate("/nowhere", true);

	assert_eq!(
		outcome,
		NavigationOutcome::NotFound {
			path: "/nowhere".to_string()
		}
	);
	assert!(harness.outlet.html().contains("Page not found"));
	assert_eq!(harness.history.entries(), vec!["/", "/nowhere"]);
}

#[rstest]
fn test_guarded_route_redirects_then_allows_after_login(harness: Harness) {
	let outcome = harness.navigator.navigate("/account/favorites", true);
	assert!(matches!(outcome, NavigationOutcome::Redirected { .. }));
	assert_eq!(harness.outlet.html(), "<p>login</p>");
	assert_eq!(
		harness.history.entries(),
		vec!["/", "/account/favorites", "/account/login"]
	);

	harness
		.navigator
		.session()
		.set_credential(Some("jwt-token".to_string()));
	harness.navigator.navigate("/account/favorites", true);
	assert_eq!(harness.outlet.html(), "<p>favorites</p>");
}

#[rstest]
fn test_back_navigation_does_not_push(harness: Harness) {
	harness.navigator.initialize();
	harness.navigator.follow_link("/movies");
	harness.navigator.follow_link("/movies/3");
	run_until_stalled();

	assert!(harness.history.back());
	harness.navigator.handle_pop_state();

	assert_eq!(harness.navigator.current_page(), Some("movies"));
	assert_eq!(harness.history.len(), 3);
}

#[rstest]
fn test_async_fetch_commits_in_place(harness: Harness) {
	harness.navigator.navigate("/movies/42", true);
	assert_eq!(harness.outlet.html(), "<p>loading</p>");

	run_until_stalled();

	assert_eq!(harness.outlet.html(), "<p>movie 42</p>");
}

#[rstest]
fn test_stale_fetch_is_discarded(harness: Harness) {
	harness.navigator.navigate("/movies/42", true);
	harness.navigator.navigate("/movies", true);

	run_until_stalled();

	assert_eq!(harness.outlet.html(), "<p>movies</p>");
}

#[rstest]
fn test_navigation_from_event_handler(harness: Harness) {
	harness.navigator.navigate("/leave", true);

	let flow = harness.navigator.dispatch(&UiEvent::click("leave"));

	assert_eq!(flow, EventFlow::Handled);
	assert_eq!(harness.navigator.current_page(), Some("home"));
	assert!(*harness.unmounted.borrow());
}

#[rstest]
fn test_navigation_during_mount_supersedes(harness: Harness) {
	let outcome = harness.navigator.navigate("/bounce", true);

	assert_eq!(outcome, NavigationOutcome::Superseded);
	assert_eq!(harness.navigator.current_page(), Some("movies"));
	assert_eq!(harness.outlet.html(), "<p>movies</p>");
	assert_eq!(harness.history.entries(), vec!["/", "/bounce", "/movies"]);
}

#[rstest]
fn test_unhandled_events_reach_shell(harness: Harness) {
	let shell = Rc::new(RecordingShell::default());
	harness.navigator.set_shell(shell.clone());
	harness.navigator.navigate("/movies", true);

	assert_eq!(
		harness.navigator.dispatch(&UiEvent::click("logout")),
		EventFlow::Handled
	);
	assert_eq!(harness.navigator.current_page(), Some("home"));
	assert_eq!(*shell.actions.borrow(), vec!["logout".to_string()]);
}

#[rstest]
fn test_transitions_used_when_supported() {
	let harness = build(MemoryOutlet::with_transitions());

	harness.navigator.navigate("/movies/5", true);
	run_until_stalled();

	assert_eq!(harness.outlet.transitions(), 1);
	assert_eq!(harness.outlet.replacements(), 2);
	assert_eq!(harness.outlet.html(), "<p>movie 5</p>");
}
