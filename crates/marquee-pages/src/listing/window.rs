//! The visible page-number window of a paginated list.

use serde::{Deserialize, Serialize};

/// Number of entries beyond the current page in a long window.
const WINDOW_SPAN: u32 = 9;

/// Entries up to this page number keep their own number as label.
const LEGACY_LABEL_LIMIT: u32 = 7;

/// How page-number entries are labeled in a long window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
	/// Entries past page 7 show `total_pages - page` while still linking to
	/// `page`. Kept for parity with the markup users already know.
	#[default]
	Legacy,
	/// Every entry shows its own page number.
	Sequential,
}

/// One page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
	/// The page navigated to.
	pub page: u32,
	/// The number shown.
	pub label: u32,
	/// True for the current page.
	pub active: bool,
}

/// Pagination controls for one render of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationWindow {
	/// The requested page.
	pub current: u32,
	/// `ceil(total_count / page_size)`, at least 1.
	pub total_pages: u32,
	/// Visible page-number entries.
	pub entries: Vec<PageEntry>,
	/// True on the first page.
	pub prev_disabled: bool,
	/// True exactly on the last page.
	pub next_disabled: bool,
}

impl PaginationWindow {
	/// Computes the window.
	///
	/// When fewer than ten times `current` pages exist, every page from
	/// `current` to the last is shown. Otherwise ten entries starting at
	/// `current` are shown.
	pub fn compute(current: u32, total_count: u64, page_size: u32, style: LabelStyle) -> Self {
		let current = current.max(1);
		let total_pages = total_pages(total_count, page_size);

		let entries = if u64::from(total_pages) < 10 * u64::from(current) {
			(current..=total_pages)
				.map(|page| PageEntry {
					page,
					label: page,
					active: page == current,
				})
				.collect()
		} else {
			(current..=current.saturating_add(WINDOW_SPAN))
				.map(|page| PageEntry {
					page,
					label: match style {
						LabelStyle::Legacy if page > LEGACY_LABEL_LIMIT => {
							total_pages.saturating_sub(page)
						}
						_ => page,
					},
					active: page == current,
				})
				.collect()
		};

		Self {
			current,
			total_pages,
			entries,
			prev_disabled: current <= 1,
			next_disabled: current == total_pages,
		}
	}

	/// Returns the previous page, unless on the first.
	pub fn prev(&self) -> Option<u32> {
		(!self.prev_disabled).then(|| self.current - 1)
	}

	/// Returns the next page, unless on the last.
	pub fn next(&self) -> Option<u32> {
		(!self.next_disabled).then(|| self.current.saturating_add(1))
	}
}

/// `ceil(total_count / page_size)`, clamped to `1..=u32::MAX`.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
	let pages = total_count.div_ceil(u64::from(page_size.max(1))).max(1);
	u32::try_from(pages).unwrap_or(u32::MAX)
}
