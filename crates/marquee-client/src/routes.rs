//! The client's URL map.

use crate::context::AppContext;
use crate::pages::{
	AccountPage, ActorDetailPage, CatalogPage, CollectionPage, ConfirmEmailPage, HomePage,
	LoginPage, MovieDetailPage, RegisterPage, VerifyNoticePage,
};
use marquee_api::CollectionKind;
use marquee_pages::{RouteTable, RouterError};

pub const HOME: &str = "/";
pub const MOVIES: &str = "/movies";
pub const MOVIE: &str = "/movies/{id:int}";
pub const ACTOR: &str = "/actors/{id:int}";
pub const REGISTER: &str = "/account/register";
pub const ACCOUNT: &str = "/account/";
pub const FAVORITES: &str = "/account/favorites";
pub const WATCHLIST: &str = "/account/watchlist";
pub const VERIFY_NOTICE: &str = "/account/verifyEmail";
pub const CONFIRM: &str = "/account/verify";
pub const CONFIRM_TOKEN: &str = "/account/verify/{token}";

fn page<P>(app: &AppContext, build: impl Fn(AppContext) -> P + 'static) -> impl Fn() -> P + 'static {
	let app = app.clone();
	move || build(app.clone())
}

/// Builds the route table. The first match wins.
///
/// The login page is served at the configured login path so the guard's
/// redirect target always resolves.
pub fn route_table(app: &AppContext) -> Result<RouteTable, RouterError> {
	let login_path = app.settings().login_path.clone();
	RouteTable::builder()
		.exact(HOME, false, page(app, HomePage::new))
		.exact(MOVIES, false, page(app, CatalogPage::new))
		.pattern(MOVIE, false, page(app, MovieDetailPage::new))
		.pattern(ACTOR, false, page(app, ActorDetailPage::new))
		.exact(REGISTER, false, page(app, RegisterPage::new))
		.exact(&login_path, false, page(app, LoginPage::new))
		.exact(ACCOUNT, true, AccountPage::default)
		.exact(
			FAVORITES,
			true,
			page(app, |app| CollectionPage::new(app, CollectionKind::Favorite)),
		)
		.exact(
			WATCHLIST,
			true,
			page(app, |app| CollectionPage::new(app, CollectionKind::Watchlist)),
		)
		.exact(VERIFY_NOTICE, false, page(app, VerifyNoticePage::new))
		.exact(CONFIRM, false, page(app, ConfirmEmailPage::new))
		.pattern(CONFIRM_TOKEN, false, page(app, ConfirmEmailPage::new))
		.build()
}
