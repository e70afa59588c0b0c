//! Client-side form checks.

use std::fmt;

const MIN_NAME_LEN: usize = 4;
const MIN_EMAIL_LEN: usize = 8;
const MIN_PASSWORD_LEN: usize = 6;

/// Rejected form input. Displays as one sentence per problem, joined by
/// `". "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
	/// Returns the individual messages.
	pub fn messages(&self) -> &[String] {
		&self.0
	}

	/// Returns true when nothing was rejected.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn check(&mut self, ok: bool, message: &str) {
		if !ok {
			self.0.push(message.to_string());
		}
	}

	fn into_result(self) -> Result<(), Self> {
		if self.is_empty() { Ok(()) } else { Err(self) }
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join(". "))
	}
}

impl std::error::Error for ValidationErrors {}

fn long_enough(value: &str, min: usize) -> bool {
	value.chars().count() >= min
}

/// Checks the registration form.
pub fn validate_registration(
	name: &str,
	email: &str,
	password: &str,
	confirmation: &str,
) -> Result<(), ValidationErrors> {
	let mut errors = ValidationErrors::default();
	errors.check(long_enough(name, MIN_NAME_LEN), "Enter your complete name");
	errors.check(long_enough(email, MIN_EMAIL_LEN), "Enter your complete email");
	errors.check(
		long_enough(password, MIN_PASSWORD_LEN),
		"Enter a password with 6 characters",
	);
	errors.check(password == confirmation, "Passwords don't match");
	errors.into_result()
}

/// Checks the login form.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationErrors> {
	let mut errors = ValidationErrors::default();
	errors.check(long_enough(email, MIN_EMAIL_LEN), "Enter your complete email");
	errors.check(
		long_enough(password, MIN_PASSWORD_LEN),
		"Enter a password with 6 characters",
	);
	errors.into_result()
}

/// Checks the password change form.
pub fn validate_password_change(new: &str, confirmation: &str) -> Result<(), ValidationErrors> {
	let mut errors = ValidationErrors::default();
	errors.check(
		long_enough(new, MIN_PASSWORD_LEN),
		"Enter a password with 6 characters",
	);
	errors.check(new == confirmation, "Passwords don't match");
	errors.into_result()
}
