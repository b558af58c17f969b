//! Column set derivation
//!
//! Columns are fixed once at construction, either from caller supplied
//! header labels or from the key order of the first record.

use crate::error::ConfigurationError;
use crate::record::Record;

/// A single table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
	key: String,
	label: String,
}

impl Column {
	/// Creates a column reading `key` and showing `label` in the header
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
		}
	}

	/// Returns the record field this column reads
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the header label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Renders the cell value for `record`
	pub fn render(&self, record: &Record) -> String {
		record.display(&self.key)
	}
}

/// The ordered, fixed set of columns of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
	columns: Vec<Column>,
}

impl ColumnSet {
	/// Derives columns from the keys of `first`, labelled with [`humanize`]
	pub fn derive(first: &Record) -> Self {
		Self {
			columns: first
				.keys()
				.map(|key| Column::new(key, humanize(key)))
				.collect(),
		}
	}

	/// Pairs `headers` positionally with the keys of `first`
	///
	/// Fails when the number of labels differs from the number of fields.
	pub fn with_headers<S: AsRef<str>>(
		first: &Record,
		headers: &[S],
	) -> Result<Self, ConfigurationError> {
		if headers.len() != first.len() {
			return Err(ConfigurationError::HeaderMismatch {
				expected: first.len(),
				actual: headers.len(),
			});
		}

		Ok(Self {
			columns: first
				.keys()
				.zip(headers)
				.map(|(key, label)| Column::new(key, label.as_ref()))
				.collect(),
		})
	}

	/// Returns the columns in display order
	pub fn iter(&self) -> std::slice::Iter<'_, Column> {
		self.columns.iter()
	}

	/// Returns the header labels in display order
	pub fn labels(&self) -> Vec<&str> {
		self.columns.iter().map(Column::label).collect()
	}

	/// Returns the number of columns
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Returns whether there are no columns
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}
}

impl<'a> IntoIterator for &'a ColumnSet {
	type Item = &'a Column;
	type IntoIter = std::slice::Iter<'a, Column>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.iter()
	}
}

/// Capitalizes the first character of a field name
///
/// # Example
///
/// ```rust
/// use paginated_table::columns::humanize;
///
/// assert_eq!(humanize("name"), "Name");
/// assert_eq!(humanize("created_at"), "Created_at");
/// ```
pub fn humanize(key: &str) -> String {
	let mut chars = key.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
