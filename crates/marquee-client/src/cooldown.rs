//! Rate limit for verification mails.

/// Minimum delay between two verification mails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCooldown {
	delay_secs: u64,
}

impl ResendCooldown {
	/// Creates a cooldown of `delay_secs`.
	pub fn new(delay_secs: u64) -> Self {
		Self { delay_secs }
	}

	/// Seconds left before another mail may be requested.
	///
	/// `last_sent_ms` and `now_ms` are epoch milliseconds; no previous send
	/// (or a zero timestamp) means no wait.
	pub fn remaining(&self, last_sent_ms: Option<u64>, now_ms: u64) -> u64 {
		match last_sent_ms {
			Some(last) if last > 0 => {
				let elapsed = now_ms.saturating_sub(last) / 1000;
				self.delay_secs.saturating_sub(elapsed)
			}
			_ => 0,
		}
	}

	/// Returns true when a mail may be requested now.
	pub fn ready(&self, last_sent_ms: Option<u64>, now_ms: u64) -> bool {
		self.remaining(last_sent_ms, now_ms) == 0
	}

	/// Label of the resend button.
	pub fn label(remaining: u64) -> String {
		if remaining == 0 {
			"Resend".to_string()
		} else {
			format!("Resend in {} s", remaining)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(None, 1_000_000, 0)]
	#[case(Some(0), 1_000_000, 0)]
	#[case(Some(1_000_000), 1_000_000, 55)]
	#[case(Some(1_000_000), 1_010_999, 45)]
	#[case(Some(1_000_000), 1_055_000, 0)]
	#[case(Some(1_000_000), 2_000_000, 0)]
	#[case(Some(2_000_000), 1_000_000, 55)]
	fn test_remaining(#[case] last: Option<u64>, #[case] now: u64, #[case] expected: u64) {
		assert_eq!(ResendCooldown::new(55).remaining(last, now), expected);
	}

	#[rstest]
	fn test_label() {
		assert_eq!(ResendCooldown::label(0), "Resend");
		assert_eq!(ResendCooldown::label(12), "Resend in 12 s");
	}
}
