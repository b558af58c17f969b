//! Pagination functionality for tables
//!
//! [`Pagination`] holds the fixed geometry (page size, item and page counts)
//! and [`PageState`] the cursor. The cursor only changes through the
//! transitions below, each of which returns the next state value.

use std::ops::Range;

use crate::error::{ConfigurationError, NavigationError};

/// Attribute naming the navigation action of a control
pub const ACTION_ATTR: &str = "data-nav-action";

/// Attribute carrying the target page of a `goto` control
pub const PAGE_ATTR: &str = "data-nav-page";

/// Pagination geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	page_size: usize,
	total_items: usize,
	page_count: usize,
}

impl Pagination {
	/// Creates the geometry for `total_items` split into pages of `page_size`
	///
	/// # Example
	///
	/// ```rust
	/// use paginated_table::pagination::Pagination;
	///
	/// let pagination = Pagination::new(3, 10).unwrap();
	/// assert_eq!(pagination.page_count(), 4);
	/// assert_eq!(pagination.window(4), 9..10);
	/// ```
	pub fn new(page_size: usize, total_items: usize) -> Result<Self, ConfigurationError> {
		if page_size == 0 {
			return Err(ConfigurationError::InvalidPageSize(page_size));
		}
		if total_items == 0 {
			return Err(ConfigurationError::EmptyDataset);
		}

		Ok(Self {
			page_size,
			total_items,
			page_count: total_items.div_ceil(page_size),
		})
	}

	/// Returns the number of items per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Returns the total number of items
	pub fn total_items(&self) -> usize {
		self.total_items
	}

	/// Returns the total number of pages
	pub fn page_count(&self) -> usize {
		self.page_count
	}

	/// Returns whether `page` is a valid 1-based page number
	pub fn contains(&self, page: usize) -> bool {
		(1..=self.page_count).contains(&page)
	}

	/// Returns the item range of `page`, clamped to the item count
	pub fn window(&self, page: usize) -> Range<usize> {
		let start = page
			.saturating_sub(1)
			.saturating_mul(self.page_size)
			.min(self.total_items);
		let end = start.saturating_add(self.page_size).min(self.total_items);
		start..end
	}

	/// Returns the number of items shown on `page`
	pub fn rows_on(&self, page: usize) -> usize {
		self.window(page).len()
	}

	/// Returns the state positioned on the first page
	pub fn first_page(&self) -> PageState {
		PageState { current_page: 1 }
	}

	/// Returns the state positioned on the last page
	pub fn last_page(&self) -> PageState {
		PageState {
			current_page: self.page_count,
		}
	}

	/// Returns the state positioned on `page`, if it exists
	pub fn page(&self, page: usize) -> Result<PageState, NavigationError> {
		if self.contains(page) {
			Ok(PageState { current_page: page })
		} else {
			Err(NavigationError::OutOfRange {
				page,
				page_count: self.page_count,
			})
		}
	}
}

/// The current-page cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageState {
	current_page: usize,
}

impl PageState {
	/// Returns the 1-based current page
	pub fn current_page(self) -> usize {
		self.current_page
	}

	/// Returns whether a previous page exists
	pub fn has_previous(self) -> bool {
		self.current_page > 1
	}

	/// Returns whether a next page exists
	pub fn has_next(self, pagination: &Pagination) -> bool {
		self.current_page < pagination.page_count
	}

	/// Moves to the previous page if available
	pub fn previous(self) -> Option<Self> {
		self.has_previous().then(|| Self {
			current_page: self.current_page - 1,
		})
	}

	/// Moves to the next page if available
	pub fn next(self, pagination: &Pagination) -> Option<Self> {
		self.has_next(pagination).then(|| Self {
			current_page: self.current_page + 1,
		})
	}
}

/// A navigation request coming from a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
	/// Go one page back
	Previous,
	/// Go one page forward
	Next,
	/// Jump to a 1-based page
	GoTo(usize),
}

impl NavAction {
	/// Applies the action to `state`
	///
	/// Returns `Ok(None)` when `Previous`/`Next` have nowhere to go, and an
	/// error when a `GoTo` target is out of range.
	pub fn apply(
		self,
		state: PageState,
		pagination: &Pagination,
	) -> Result<Option<PageState>, NavigationError> {
		match self {
			NavAction::Previous => Ok(state.previous()),
			NavAction::Next => Ok(state.next(pagination)),
			NavAction::GoTo(page) => pagination.page(page).map(Some),
		}
	}

	/// Returns the value stored in [`ACTION_ATTR`]
	pub fn action_name(self) -> &'static str {
		match self {
			NavAction::Previous => "previous",
			NavAction::Next => "next",
			NavAction::GoTo(_) => "goto",
		}
	}

	/// Returns the target page stored in [`PAGE_ATTR`], for `GoTo`
	pub fn target_page(self) -> Option<usize> {
		match self {
			NavAction::GoTo(page) => Some(page),
			_ => None,
		}
	}

	/// Reads an action back from control attributes
	pub fn from_attrs(action: Option<&str>, page: Option<&str>) -> Option<Self> {
		match action? {
			"previous" => Some(NavAction::Previous),
			"next" => Some(NavAction::Next),
			"goto" => page?.parse().ok().map(NavAction::GoTo),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(10, 3, 4)]
	#[case(9, 3, 3)]
	#[case(1, 5, 1)]
	#[case(6, 2, 3)]
	#[case(7, 1, 7)]
	fn test_page_count(#[case] total: usize, #[case] size: usize, #[case] expected: usize) {
		assert_eq!(Pagination::new(size, total).unwrap().page_count(), expected);
	}

	#[rstest]
	fn test_new_rejects_zero_page_size() {
		assert_eq!(
			Pagination::new(0, 10),
			Err(ConfigurationError::InvalidPageSize(0))
		);
	}

	#[rstest]
	fn test_new_rejects_empty() {
		assert_eq!(Pagination::new(3, 0), Err(ConfigurationError::EmptyDataset));
	}

	#[rstest]
	fn test_window_is_clamped() {
		let pagination = Pagination::new(3, 10).unwrap();
		assert_eq!(pagination.window(1), 0..3);
		assert_eq!(pagination.window(4), 9..10);
		assert_eq!(pagination.window(9), 10..10);
		assert_eq!(pagination.window(usize::MAX), 10..10);
		assert_eq!(pagination.rows_on(4), 1);
	}

	#[rstest]
	fn test_previous_at_first_page_is_none() {
		let pagination = Pagination::new(2, 5).unwrap();
		assert_eq!(pagination.first_page().previous(), None);
	}

	#[rstest]
	fn test_next_at_last_page_is_none() {
		let pagination = Pagination::new(2, 5).unwrap();
		assert_eq!(pagination.last_page().current_page(), 3);
		assert_eq!(pagination.last_page().next(&pagination), None);
	}

	#[rstest]
	fn test_go_to_out_of_range() {
		let pagination = Pagination::new(2, 5).unwrap();
		let state = pagination.first_page();
		assert_eq!(
			NavAction::GoTo(0).apply(state, &pagination),
			Err(NavigationError::OutOfRange {
				page: 0,
				page_count: 3
			})
		);
		assert!(NavAction::GoTo(4).apply(state, &pagination).is_err());
		assert_eq!(
			NavAction::GoTo(3).apply(state, &pagination),
			Ok(Some(pagination.page(3).unwrap()))
		);
	}

	#[rstest]
	#[case(NavAction::Previous, Some(1))]
	#[case(NavAction::Next, Some(3))]
	#[case(NavAction::GoTo(3), Some(3))]
	fn test_apply_from_middle(#[case] action: NavAction, #[case] expected: Option<usize>) {
		let pagination = Pagination::new(1, 3).unwrap();
		let state = pagination.page(2).unwrap();
		let next = action.apply(state, &pagination).unwrap();
		assert_eq!(next.map(PageState::current_page), expected);
	}

	#[rstest]
	#[case(NavAction::Previous)]
	#[case(NavAction::Next)]
	#[case(NavAction::GoTo(7))]
	fn test_action_attr_round_trip(#[case] action: NavAction) {
		let page = action.target_page().map(|p| p.to_string());
		assert_eq!(
			NavAction::from_attrs(Some(action.action_name()), page.as_deref()),
			Some(action)
		);
	}

	#[rstest]
	#[case(None, None)]
	#[case(Some("goto"), None)]
	#[case(Some("goto"), Some("two"))]
	#[case(Some("sideways"), None)]
	fn test_from_attrs_rejects_unknown(#[case] action: Option<&str>, #[case] page: Option<&str>) {
		assert_eq!(NavAction::from_attrs(action, page), None);
	}
}
