use super::login::field;
use crate::routes;
use marquee_pages::{ElementView, IntoView, Page, PageContext, View};

/// `/account/`: links to the user's collections and the account actions.
///
/// Logout, account deletion and the password form are shell actions, so
/// this page only renders.
#[derive(Debug, Default)]
pub struct AccountPage;

fn link(href: &'static str, label: &'static str) -> ElementView {
	ElementView::new("li").child(
		ElementView::new("a")
			.attr("href", href)
			.flag("data-link", true)
			.child(label),
	)
}

fn password_form() -> ElementView {
	ElementView::new("form")
		.attr("id", "reset-password")
		.action("reset-password")
		.child(ElementView::new("h3").child("Change Password"))
		.child(field("Current Password", "currentPassword", "password"))
		.child(field("New Password", "newPassword", "password"))
		.child(field("Confirm New Password", "newPasswordConfirm", "password"))
		.child(
			ElementView::new("button")
				.attr("type", "submit")
				.child("Change Password"),
		)
}

impl Page for AccountPage {
	fn name(&self) -> &'static str {
		"account"
	}

	fn mount(&mut self, _cx: &PageContext) -> View {
		ElementView::new("section")
			.attr("id", "account")
			.child(ElementView::new("h2").child("My Account"))
			.child(
				ElementView::new("ul")
					.child(link(routes::FAVORITES, "Favorites"))
					.child(link(routes::WATCHLIST, "Watchlist")),
			)
			.child(password_form())
			.child(
				ElementView::new("button")
					.action("logout")
					.child("Log out"),
			)
			.child(
				ElementView::new("button")
					.class("danger")
					.action("delete-account")
					.child("Delete Account"),
			)
			.into_view()
	}
}
