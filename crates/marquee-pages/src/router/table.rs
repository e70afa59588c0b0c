//! The static, ordered route table.

use super::{RouteParams, RoutePattern, RouterError};
use crate::component::Page;
use std::fmt;
use std::rc::Rc;

/// Builds a fresh page instance for one navigation.
pub type PageFactory = Rc<dyn Fn() -> Box<dyn Page>>;

/// A single route: a pattern, a page factory and an auth requirement.
#[derive(Clone)]
pub struct Route {
	pattern: RoutePattern,
	factory: PageFactory,
	requires_auth: bool,
}

impl fmt::Debug for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern.as_str())
			.field("requires_auth", &self.requires_auth)
			.finish()
	}
}

impl Route {
	/// Creates a route.
	pub fn new(pattern: RoutePattern, requires_auth: bool, factory: PageFactory) -> Self {
		Self {
			pattern,
			factory,
			requires_auth,
		}
	}

	/// Returns the route's pattern.
	pub fn pattern(&self) -> &RoutePattern {
		&self.pattern
	}

	/// Returns true when the route needs a logged-in session.
	pub fn requires_auth(&self) -> bool {
		self.requires_auth
	}

	/// Builds a new page instance.
	pub fn instantiate(&self) -> Box<dyn Page> {
		(self.factory)()
	}
}

/// A successful table lookup.
#[derive(Debug)]
pub struct RouteMatch<'a> {
	/// The matched route.
	pub route: &'a Route,
	/// Parameters captured from the path.
	pub params: RouteParams,
}

/// Ordered, immutable list of routes. The first matching route wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: Vec<Route>,
}

impl RouteTable {
	/// Starts building a table.
	pub fn builder() -> RouteTableBuilder {
		RouteTableBuilder::default()
	}

	/// Returns the routes in declaration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Returns the number of routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns true when the table has no routes.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Finds the first route matching `path`.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
		self.routes.iter().find_map(|route| {
			route
				.pattern
				.matches(path)
				.map(|params| RouteMatch { route, params })
		})
	}

	/// Like [`match_path`](Self::match_path), reporting a miss as an error.
	pub fn lookup(&self, path: &str) -> Result<RouteMatch<'_>, RouterError> {
		self.match_path(path)
			.ok_or_else(|| RouterError::NotFound(path.to_string()))
	}
}

/// Collects routes and reports the first invalid pattern on [`build`](Self::build).
#[derive(Default)]
pub struct RouteTableBuilder {
	routes: Vec<Route>,
	error: Option<RouterError>,
}

impl RouteTableBuilder {
	/// Adds a route matching `path` exactly.
	pub fn exact<F, P>(self, path: &str, requires_auth: bool, factory: F) -> Self
	where
		F: Fn() -> P + 'static,
		P: Page + 'static,
	{
		self.route(Ok(RoutePattern::exact(path)), requires_auth, factory)
	}

	/// Adds a route using placeholder syntax (`/movies/{id:int}`).
	pub fn pattern<F, P>(self, pattern: &str, requires_auth: bool, factory: F) -> Self
	where
		F: Fn() -> P + 'static,
		P: Page + 'static,
	{
		self.route(RoutePattern::parse(pattern), requires_auth, factory)
	}

	/// Adds a route matching a raw regex with positional capture groups.
	pub fn regex<F, P>(self, pattern: &str, requires_auth: bool, factory: F) -> Self
	where
		F: Fn() -> P + 'static,
		P: Page + 'static,
	{
		self.route(RoutePattern::regex(pattern), requires_auth, factory)
	}

	fn route<F, P>(
		mut self,
		pattern: Result<RoutePattern, RouterError>,
		requires_auth: bool,
		factory: F,
	) -> Self
	where
		F: Fn() -> P + 'static,
		P: Page + 'static,
	{
		match pattern {
			Ok(pattern) => {
				let factory: PageFactory = Rc::new(move || Box::new(factory()) as Box<dyn Page>);
				self.routes.push(Route::new(pattern, requires_auth, factory));
			}
			Err(err) => {
				self.error.get_or_insert(err);
			}
		}
		self
	}

	/// Finishes the table.
	pub fn build(self) -> Result<RouteTable, RouterError> {
		match self.error {
			Some(err) => Err(err),
			None => Ok(RouteTable {
				routes: self.routes,
			}),
		}
	}
}
