//! Pure table rendering
//!
//! [`render_table`] turns the visible slice, the columns and the cursor into
//! a [`View`]. It touches no host state, so rendering the same context twice
//! always yields the same tree.

use crate::columns::ColumnSet;
use crate::options::NavLabels;
use crate::pagination::{ACTION_ATTR, NavAction, PAGE_ATTR, PageState, Pagination};
use crate::record::Record;
use crate::style::{ElementKind, StyleConfig};
use crate::view::{ElementView, IntoView, View};

/// Marker attribute set on the root `<table>`
pub const TABLE_ATTR: &str = "data-paginated-table";

/// Marker attribute set on the page-index strip
pub const STRIP_ATTR: &str = "data-nav-strip";

/// Everything needed to render one page
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
	/// Records of the page being rendered
	pub records: &'a [Record],
	/// Table columns
	pub columns: &'a ColumnSet,
	/// Page geometry
	pub pagination: &'a Pagination,
	/// Cursor positioned on the page being rendered
	pub state: PageState,
	/// Styles
	pub style: &'a StyleConfig,
	/// Previous/next text
	pub labels: &'a NavLabels,
}

/// Renders a full table: header, one row per record and the navigation row
pub fn render_table(ctx: &RenderContext<'_>) -> View {
	let header = ElementView::new("thead").child(header_row(ctx));
	let body = ElementView::new("tbody").children(ctx.records.iter().map(|r| data_row(ctx, r)));
	let footer = ElementView::new("tfoot").child(navigation_row(ctx));

	ctx.style
		.apply(ElementKind::Table, ElementView::new("table").attr(TABLE_ATTR, ""))
		.child(header)
		.child(body)
		.child(footer)
		.into_view()
}

fn header_row(ctx: &RenderContext<'_>) -> ElementView {
	ctx.style
		.apply(ElementKind::Row, ElementView::new("tr"))
		.children(ctx.columns.iter().map(|column| {
			ctx.style
				.apply(ElementKind::HeaderCell, ElementView::new("th"))
				.child(column.label().to_string())
		}))
}

fn data_row(ctx: &RenderContext<'_>, record: &Record) -> ElementView {
	ctx.style
		.apply(ElementKind::Row, ElementView::new("tr"))
		.children(ctx.columns.iter().map(|column| {
			ctx.style
				.apply(ElementKind::DataCell, ElementView::new("td"))
				.child(column.render(record))
		}))
}

fn navigation_row(ctx: &RenderContext<'_>) -> ElementView {
	let state = ctx.state;
	let width = ctx.columns.len().max(1);

	let previous = control(ctx, NavAction::Previous, ctx.labels.previous.clone())
		.attr_if(!state.has_previous(), "disabled", "disabled");
	let next = control(ctx, NavAction::Next, ctx.labels.next.clone())
		.attr_if(!state.has_next(ctx.pagination), "disabled", "disabled");
	let row = ctx.style.apply(ElementKind::Row, ElementView::new("tr"));

	// Narrow tables get a single cell so the row never outgrows the body
	if width < 3 {
		return row.child(
			nav_cell(ctx)
				.attr("colspan", width.to_string())
				.child(previous)
				.child(page_strip(ctx))
				.child(next),
		);
	}

	row.child(nav_cell(ctx).child(previous))
		.child(
			nav_cell(ctx)
				.attr("colspan", (width - 2).to_string())
				.child(page_strip(ctx)),
		)
		.child(nav_cell(ctx).child(next))
}

fn page_strip(ctx: &RenderContext<'_>) -> ElementView {
	let current = ctx.state.current_page();
	ElementView::new("span")
		.attr(STRIP_ATTR, "")
		.children((1..=ctx.pagination.page_count()).map(|page| {
			if page == current {
				ElementView::new("strong")
					.attr("data-nav-current", page.to_string())
					.child(page.to_string())
			} else {
				control(ctx, NavAction::GoTo(page), page.to_string())
			}
		}))
}

fn nav_cell(ctx: &RenderContext<'_>) -> ElementView {
	ctx.style
		.apply(ElementKind::DataCell, ElementView::new("td"))
}

fn control(ctx: &RenderContext<'_>, action: NavAction, label: String) -> ElementView {
	let button = ElementView::new("button")
		.attr("type", "button")
		.attr(ACTION_ATTR, action.action_name());
	let button = match action.target_page() {
		Some(page) => button.attr(PAGE_ATTR, page.to_string()),
		None => button,
	};
	ctx.style
		.apply(ElementKind::Control, button)
		.child(label)
}
