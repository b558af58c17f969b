//! Integration tests for the paginated table widget

use paginated_table::{
	ConfigurationError, Dataset, ElementKind, ElementStyle, MemoryHost, NavAction,
	NavigationError, PaginatedTable, Record, StyleConfig, TableError, TableOptions, View,
};
use rstest::*;

#[fixture]
fn ten_records() -> Dataset {
	Dataset::new(
		(0..10)
			.map(|i| {
				Record::new()
					.field("id", i)
					.field("name", format!("user{i}"))
					.field("score", f64::from(i) / 2.0)
			})
			.collect(),
	)
}

#[fixture]
fn six_people() -> Dataset {
	Dataset::new(
		["Ann", "Ben", "Cid", "Dee", "Eve", "Fay"]
			.iter()
			.zip(20..)
			.map(|(name, age)| Record::new().field("name", *name).field("age", age))
			.collect(),
	)
}

fn host() -> MemoryHost {
	MemoryHost::new().with_container("#table")
}

fn build(dataset: Dataset, page_size: usize, options: TableOptions) -> PaginatedTable<MemoryHost> {
	PaginatedTable::new(dataset, page_size, host(), "#table", options).unwrap()
}

/// Header labels and body cell texts of the rendered view
fn rendered_rows(view: &View) -> (Vec<String>, Vec<Vec<String>>) {
	let headers = view
		.find_all("th")
		.into_iter()
		.map(|th| th.text_content())
		.collect();
	let body = view.find_all("tbody");
	let rows = body[0]
		.child_views()
		.iter()
		.filter_map(|row| match row {
			View::Element(tr) => Some(
				tr.child_views()
					.iter()
					.filter_map(|cell| match cell {
						View::Element(td) => Some(td.text_content()),
						_ => None,
					})
					.collect::<Vec<_>>(),
			),
			_ => None,
		})
		.collect();
	(headers, rows)
}

#[rstest]
fn test_ten_records_page_size_three(ten_records: Dataset) {
	let mut table = build(ten_records.clone(), 3, TableOptions::new());

	assert_eq!(table.page_count(), 4);
	assert_eq!(table.visible_records(), &ten_records.records()[0..3]);

	table.go_to(4).unwrap();
	assert_eq!(table.visible_records(), &ten_records.records()[9..10]);

	let (headers, rows) = rendered_rows(table.view());
	assert_eq!(headers, vec!["Id", "Name", "Score"]);
	assert_eq!(rows, vec![vec!["9", "user9", "4.5"]]);
}

#[rstest]
fn test_explicit_headers_and_go_to(six_people: Dataset) {
	let options = TableOptions::new().headers(["Name", "Age"]);
	let mut table = build(six_people.clone(), 2, options);

	let (headers, _) = rendered_rows(table.view());
	assert_eq!(headers, vec!["Name", "Age"]);

	table.go_to(3).unwrap();
	assert_eq!(table.visible_records(), &six_people.records()[4..6]);

	let (_, rows) = rendered_rows(table.view());
	assert_eq!(rows, vec![vec!["Eve", "24"], vec!["Fay", "25"]]);
}

#[rstest]
#[case(0)]
#[case(5)]
fn test_go_to_out_of_range_is_rejected(six_people: Dataset, #[case] target: usize) {
	let mut table = build(six_people, 2, TableOptions::new());
	table.go_to(2).unwrap();
	let before = table.to_html();

	let err = table.go_to(target).unwrap_err();

	assert_eq!(
		err,
		TableError::Navigation(NavigationError::OutOfRange {
			page: target,
			page_count: 3
		})
	);
	assert_eq!(table.current_page(), 2);
	assert_eq!(table.to_html(), before);
}

#[rstest]
fn test_previous_at_first_page_is_noop(six_people: Dataset) {
	let mut table = build(six_people, 2, TableOptions::new());
	assert!(!table.previous().unwrap());
	assert_eq!(table.current_page(), 1);
}

#[rstest]
fn test_next_at_last_page_is_noop(six_people: Dataset) {
	let mut table = build(six_people, 2, TableOptions::new());
	table.go_to(3).unwrap();
	assert!(!table.next().unwrap());
	assert!(!table.click(NavAction::Next).unwrap());
	assert_eq!(table.current_page(), 3);
}

#[rstest]
fn test_next_then_previous_round_trip(ten_records: Dataset) {
	let mut table = build(ten_records, 3, TableOptions::new());
	table.go_to(2).unwrap();

	assert!(table.next().unwrap());
	assert!(table.previous().unwrap());

	assert_eq!(table.current_page(), 2);
}

#[rstest]
fn test_render_is_idempotent(ten_records: Dataset) {
	let mut table = build(ten_records, 3, TableOptions::new());
	table.go_to(3).unwrap();

	table.render(Some(3)).unwrap();
	let first = table.view().clone();
	table.render(Some(3)).unwrap();

	assert_eq!(table.view(), &first);
	assert_eq!(table.host().mounted_count(*table.container()), 1);
}

#[rstest]
fn test_click_walks_through_pages(ten_records: Dataset) {
	let mut table = build(ten_records, 3, TableOptions::new());

	assert!(table.click(NavAction::Next).unwrap());
	assert!(table.click(NavAction::GoTo(4)).unwrap());
	assert!(table.click(NavAction::Previous).unwrap());

	assert_eq!(table.current_page(), 3);
	assert_eq!(
		table.host().inner_html(*table.container()),
		table.to_html()
	);
}

#[rstest]
fn test_empty_dataset_is_rejected() {
	let err = PaginatedTable::new(Dataset::new(vec![]), 3, host(), "#table", TableOptions::new())
		.unwrap_err();
	assert_eq!(err, TableError::Configuration(ConfigurationError::EmptyDataset));
}

#[rstest]
fn test_zero_page_size_is_rejected(six_people: Dataset) {
	let err = PaginatedTable::new(six_people, 0, host(), "#table", TableOptions::new())
		.unwrap_err();
	assert_eq!(
		err,
		TableError::Configuration(ConfigurationError::InvalidPageSize(0))
	);
}

#[rstest]
fn test_unknown_container_is_rejected(six_people: Dataset) {
	let err = PaginatedTable::new(six_people, 2, host(), "#missing", TableOptions::new())
		.unwrap_err();
	assert_eq!(
		err,
		TableError::Configuration(ConfigurationError::ContainerNotFound(
			"#missing".to_string()
		))
	);
}

#[rstest]
fn test_header_mismatch_is_rejected(six_people: Dataset) {
	let options = TableOptions::new().headers(["Name", "Age", "City"]);
	let err = PaginatedTable::new(six_people, 2, host(), "#table", options).unwrap_err();
	assert_eq!(
		err,
		TableError::Configuration(ConfigurationError::HeaderMismatch {
			expected: 2,
			actual: 3
		})
	);
}

#[rstest]
fn test_css_framework_classes(six_people: Dataset) {
	let table = build(six_people, 2, TableOptions::new().css_framework(true));
	let html = table.to_html();

	assert!(html.starts_with(r#"<table data-paginated-table="" class="table table-striped table-bordered">"#));
	assert!(html.contains(r#"class="btn btn-sm btn-outline-secondary""#));
	assert!(!html.contains("style="));
}

#[rstest]
fn test_custom_style_and_labels(six_people: Dataset) {
	let style = StyleConfig::unstyled().with(
		ElementKind::HeaderCell,
		ElementStyle::new().declare("color", "red"),
	);
	let options = TableOptions::new().style(style).labels("«", "»");
	let table = build(six_people, 2, options);
	let html = table.to_html();

	assert!(html.contains(r#"<th style="color: red">Name</th>"#));
	assert!(html.contains(">«</button>"));
	assert!(html.contains(">»</button>"));
}

#[rstest]
fn test_cell_values_are_escaped() {
	let dataset = Dataset::new(vec![Record::new().field("html", "<b>bold</b>")]);
	let table = build(
		dataset,
		1,
		TableOptions::new().style(StyleConfig::unstyled()),
	);
	assert!(table.to_html().contains("<td>&lt;b&gt;bold&lt;/b&gt;</td>"));
}

#[rstest]
fn test_later_records_with_other_shapes(six_people: Dataset) {
	let mut records = six_people.records().to_vec();
	records.push(Record::new().field("nickname", "Gus"));
	let table = build(Dataset::new(records), 10, TableOptions::new());

	let (headers, rows) = rendered_rows(table.view());
	assert_eq!(headers, vec!["Name", "Age"]);
	assert_eq!(rows.last().unwrap(), &vec!["".to_string(), "".to_string()]);
}
