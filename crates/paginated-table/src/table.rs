//! The paginated table widget

use std::fmt;

use tracing::{debug, warn};

use crate::columns::ColumnSet;
use crate::error::{ConfigurationError, Result};
use crate::host::Host;
use crate::options::{NavLabels, TableOptions};
use crate::pagination::{NavAction, PageState, Pagination};
use crate::record::{Dataset, Record};
use crate::render::{RenderContext, render_table};
use crate::style::StyleConfig;
use crate::view::View;

/// A table showing one page of a dataset at a time, with previous, next and
/// jump-to-page controls
///
/// Every render is a full rebuild: the new page is mounted first, then the
/// previous subtree is removed through the handle kept from its mount. When
/// the host fails to mount, the table keeps its current page, view and mount.
///
/// # Example
///
/// ```rust
/// use paginated_table::{Dataset, MemoryHost, PaginatedTable, Record, TableOptions};
///
/// let dataset = Dataset::new(
///     (1..=10).map(|i| Record::new().field("id", i)).collect(),
/// );
/// let host = MemoryHost::new().with_container("#users");
/// let mut table = PaginatedTable::new(dataset, 3, host, "#users", TableOptions::new())?;
///
/// assert_eq!(table.page_count(), 4);
/// table.go_to(4)?;
/// assert_eq!(table.visible_records().len(), 1);
/// assert!(!table.next()?);
/// # Ok::<(), paginated_table::TableError>(())
/// ```
pub struct PaginatedTable<H: Host> {
	dataset: Dataset,
	columns: ColumnSet,
	pagination: Pagination,
	state: PageState,
	style: StyleConfig,
	labels: NavLabels,
	host: H,
	container: H::Container,
	mounted: Option<H::Mounted>,
	view: View,
}

impl<H: Host> PaginatedTable<H> {
	/// Builds the table, renders page 1 and mounts it into the container
	/// matching `selector`
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError`] when the dataset is empty, the page size
	/// is 0, the header labels do not match the first record or the selector
	/// cannot be resolved, and [`MountError`](crate::host::MountError) when the
	/// host fails to mount the first page.
	pub fn new(
		dataset: impl Into<Dataset>,
		page_size: usize,
		host: H,
		selector: &str,
		options: TableOptions,
	) -> Result<Self> {
		let dataset = dataset.into();
		let first = dataset.first().ok_or(ConfigurationError::EmptyDataset)?;
		let pagination = Pagination::new(page_size, dataset.len())?;
		let columns = match &options.headers {
			Some(headers) => ColumnSet::with_headers(first, headers.as_slice())?,
			None => ColumnSet::derive(first),
		};
		let container = host
			.resolve(selector)
			.ok_or_else(|| ConfigurationError::ContainerNotFound(selector.to_string()))?;

		debug!(
			selector,
			records = dataset.len(),
			page_size,
			page_count = pagination.page_count(),
			columns = columns.len(),
			"building paginated table"
		);

		let mut table = Self {
			style: options.resolved_style(),
			labels: options.labels,
			state: pagination.first_page(),
			dataset,
			columns,
			pagination,
			host,
			container,
			mounted: None,
			view: View::Empty,
		};
		table.render(None)?;
		Ok(table)
	}

	/// Renders `page`, or page 1 when `None`, and makes it the current page
	///
	/// # Errors
	///
	/// Returns [`NavigationError`](crate::error::NavigationError) when `page`
	/// is outside `1..=page_count`; the current page is left unchanged.
	pub fn render(&mut self, page: Option<usize>) -> Result<()> {
		let state = match page {
			None => self.pagination.first_page(),
			Some(page) => self.pagination.page(page).inspect_err(|err| {
				warn!(%err, "rejected render of out-of-range page");
			})?,
		};
		self.show(state)
	}

	/// Goes one page back; returns `false` without re-rendering on page 1
	pub fn previous(&mut self) -> Result<bool> {
		self.dispatch(NavAction::Previous)
	}

	/// Goes one page forward; returns `false` without re-rendering on the
	/// last page
	pub fn next(&mut self) -> Result<bool> {
		self.dispatch(NavAction::Next)
	}

	/// Jumps to `page`
	///
	/// # Errors
	///
	/// Returns [`NavigationError`](crate::error::NavigationError) when `page`
	/// is outside `1..=page_count`; the current page is left unchanged.
	pub fn go_to(&mut self, page: usize) -> Result<()> {
		self.dispatch(NavAction::GoTo(page)).map(|_| ())
	}

	/// Applies a navigation action, re-rendering when the page changes
	pub fn dispatch(&mut self, action: NavAction) -> Result<bool> {
		let next = action
			.apply(self.state, &self.pagination)
			.inspect_err(|err| warn!(?action, %err, "rejected navigation"))?;

		match next {
			Some(state) => {
				self.show(state)?;
				Ok(true)
			}
			None => {
				debug!(?action, page = self.current_page(), "navigation unavailable");
				Ok(false)
			}
		}
	}

	/// Handles a click on the control carrying `action`
	///
	/// Only enabled controls present in the current render react; clicking
	/// a disabled button or the current page indicator does nothing.
	pub fn click(&mut self, action: NavAction) -> Result<bool> {
		let clickable = self
			.view
			.controls()
			.into_iter()
			.any(|el| !el.has_attr("disabled") && el.nav_action() == Some(action));
		if !clickable {
			return Ok(false);
		}
		self.dispatch(action)
	}

	/// Removes the mounted table from the container
	pub fn unmount(&mut self) {
		if let Some(mounted) = self.mounted.take() {
			self.host.unmount(&self.container, mounted);
		}
	}

	/// Returns the 1-based current page
	pub fn current_page(&self) -> usize {
		self.state.current_page()
	}

	/// Returns the cursor
	pub fn state(&self) -> PageState {
		self.state
	}

	/// Returns the total number of pages
	pub fn page_count(&self) -> usize {
		self.pagination.page_count()
	}

	/// Returns the number of records per page
	pub fn page_size(&self) -> usize {
		self.pagination.page_size()
	}

	/// Returns the page geometry
	pub fn pagination(&self) -> &Pagination {
		&self.pagination
	}

	/// Returns the columns
	pub fn columns(&self) -> &ColumnSet {
		&self.columns
	}

	/// Returns the dataset
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	/// Returns the records of the current page
	pub fn visible_records(&self) -> &[Record] {
		self.dataset
			.slice(self.pagination.window(self.current_page()))
	}

	/// Returns the last rendered view
	pub fn view(&self) -> &View {
		&self.view
	}

	/// Returns the last rendered view as HTML
	pub fn to_html(&self) -> String {
		self.view.render_to_string()
	}

	/// Returns the host
	pub fn host(&self) -> &H {
		&self.host
	}

	/// Returns the resolved container
	pub fn container(&self) -> &H::Container {
		&self.container
	}

	fn build_view(&self, state: PageState) -> View {
		render_table(&RenderContext {
			records: self.dataset.slice(self.pagination.window(state.current_page())),
			columns: &self.columns,
			pagination: &self.pagination,
			state,
			style: &self.style,
			labels: &self.labels,
		})
	}

	/// Mounts `state`'s page and only then swaps it in for the current one
	fn show(&mut self, state: PageState) -> Result<()> {
		let view = self.build_view(state);
		let mounted = self
			.host
			.mount(&self.container, &view)
			.inspect_err(|err| warn!(%err, page = state.current_page(), "mount failed"))?;
		if let Some(previous) = self.mounted.replace(mounted) {
			self.host.unmount(&self.container, previous);
		}
		self.state = state;
		self.view = view;

		debug!(
			page = self.current_page(),
			page_count = self.page_count(),
			rows = self.visible_records().len(),
			"rendered table page"
		);
		Ok(())
	}
}

impl<H: Host> fmt::Debug for PaginatedTable<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PaginatedTable")
			.field("records", &self.dataset.len())
			.field("columns", &self.columns)
			.field("pagination", &self.pagination)
			.field("state", &self.state)
			.field("mounted", &self.mounted.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::{NavigationError, TableError};
	use crate::host::{ContainerId, MemoryHost, MountError, MountId};
	use rstest::{fixture, rstest};

	/// Memory host whose `fail_on`-th mount fails
	struct FailingHost {
		inner: MemoryHost,
		mounts: usize,
		fail_on: usize,
	}

	impl Host for FailingHost {
		type Container = ContainerId;
		type Mounted = MountId;

		fn resolve(&self, selector: &str) -> Option<ContainerId> {
			self.inner.resolve(selector)
		}

		fn mount(
			&mut self,
			container: &ContainerId,
			view: &View,
		) -> std::result::Result<MountId, MountError> {
			self.mounts += 1;
			if self.mounts == self.fail_on {
				return Err(MountError::AppendChildFailed);
			}
			self.inner.mount(container, view)
		}

		fn unmount(&mut self, container: &ContainerId, mounted: MountId) {
			self.inner.unmount(container, mounted);
		}
	}

	#[fixture]
	fn dataset() -> Dataset {
		Dataset::new(
			(0..7)
				.map(|i| Record::new().field("id", i).field("label", format!("row {i}")))
				.collect(),
		)
	}

	fn table(dataset: Dataset, page_size: usize) -> PaginatedTable<MemoryHost> {
		let host = MemoryHost::new().with_container("#table");
		PaginatedTable::new(dataset, page_size, host, "#table", TableOptions::new()).unwrap()
	}

	#[rstest]
	fn test_new_mounts_first_page(dataset: Dataset) {
		let table = table(dataset, 3);
		assert_eq!(table.current_page(), 1);
		assert_eq!(table.page_count(), 3);
		assert_eq!(table.host().mounted_count(*table.container()), 1);
		assert_eq!(table.host().inner_html(*table.container()), table.to_html());
	}

	#[rstest]
	fn test_navigation_keeps_a_single_mount(dataset: Dataset) {
		let mut table = table(dataset, 3);
		assert!(table.next().unwrap());
		assert!(table.next().unwrap());
		table.go_to(1).unwrap();

		assert_eq!(table.host().mounted_count(*table.container()), 1);
	}

	#[rstest]
	fn test_render_out_of_range_keeps_state(dataset: Dataset) {
		let mut table = table(dataset, 3);
		table.go_to(2).unwrap();

		let err = table.render(Some(9)).unwrap_err();
		assert_eq!(
			err,
			TableError::Navigation(NavigationError::OutOfRange {
				page: 9,
				page_count: 3
			})
		);
		assert_eq!(table.current_page(), 2);
	}

	#[rstest]
	fn test_render_none_returns_to_first_page(dataset: Dataset) {
		let mut table = table(dataset, 3);
		table.go_to(3).unwrap();
		table.render(None).unwrap();
		assert_eq!(table.current_page(), 1);
	}

	#[rstest]
	fn test_click_disabled_previous_is_ignored(dataset: Dataset) {
		let mut table = table(dataset, 3);
		let before = table.to_html();

		assert!(!table.click(NavAction::Previous).unwrap());
		assert_eq!(table.to_html(), before);
	}

	#[rstest]
	fn test_click_current_page_indicator_is_ignored(dataset: Dataset) {
		let mut table = table(dataset, 3);
		assert!(!table.click(NavAction::GoTo(1)).unwrap());
		assert!(table.click(NavAction::GoTo(3)).unwrap());
		assert_eq!(table.current_page(), 3);
	}

	#[rstest]
	fn test_unmount_clears_container(dataset: Dataset) {
		let mut table = table(dataset, 3);
		table.unmount();
		assert_eq!(table.host().mounted_count(*table.container()), 0);
	}

	#[rstest]
	fn test_failed_mount_keeps_current_page(dataset: Dataset) {
		let host = FailingHost {
			inner: MemoryHost::new().with_container("#table"),
			mounts: 0,
			fail_on: 2,
		};
		let mut table =
			PaginatedTable::new(dataset, 3, host, "#table", TableOptions::new()).unwrap();
		let container = *table.container();
		let before = table.to_html();

		let err = table.next().unwrap_err();

		assert_eq!(err, TableError::Mount(MountError::AppendChildFailed));
		assert_eq!(table.current_page(), 1);
		assert_eq!(table.to_html(), before);
		assert_eq!(table.host().inner.mounted_count(container), 1);
		assert_eq!(table.host().inner.inner_html(container), before);
		assert!(!table.click(NavAction::Previous).unwrap());

		// The host recovers; the same navigation now goes through
		assert!(table.next().unwrap());
		assert_eq!(table.current_page(), 2);
		assert_eq!(table.host().inner.mounted_count(container), 1);
		assert_eq!(table.host().inner.inner_html(container), table.to_html());
	}
}
