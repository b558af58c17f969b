//! Records and datasets
//!
//! A [`Record`] is an ordered mapping from field name to a scalar [`Value`].
//! Field order is insertion order and is what column derivation follows.
//! A [`Dataset`] is a shared, immutable sequence of records.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::error::ConfigurationError;

/// A renderable scalar held in a record field
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Missing value, rendered as an empty cell
	Null,
	/// Boolean value
	Bool(bool),
	/// Integer value
	Integer(i64),
	/// Floating point value
	Float(f64),
	/// Text value
	Text(String),
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => Ok(()),
			Value::Bool(b) => write!(f, "{b}"),
			Value::Integer(n) => write!(f, "{n}"),
			Value::Float(n) => write!(f, "{n}"),
			Value::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Integer(value.into())
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Integer(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::Integer(value.into())
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => match n.as_i64() {
				Some(i) => Value::Integer(i),
				None => n.as_f64().map_or(Value::Text(n.to_string()), Value::Float),
			},
			serde_json::Value::String(s) => Value::Text(s),
			// Nested structures are shown as their compact JSON text
			other => Value::Text(other.to_string()),
		}
	}
}

/// An ordered field-name to value mapping
///
/// # Example
///
/// ```rust
/// use paginated_table::record::Record;
///
/// let record = Record::new().field("name", "Alice").field("age", 30);
/// assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age"]);
/// assert_eq!(record.display("age"), "30");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	fields: Vec<(String, Value)>,
}

impl Record {
	/// Creates an empty record
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field, builder style
	pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	/// Sets a field, replacing any existing value under the same key in place
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		let key = key.into();
		let value = value.into();
		match self.fields.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => *slot = value,
			None => self.fields.push((key, value)),
		}
	}

	/// Returns the value stored under `key`
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields
			.iter()
			.find_map(|(k, v)| (k == key).then_some(v))
	}

	/// Returns the display string for `key`, empty when the field is absent
	pub fn display(&self, key: &str) -> String {
		self.get(key).map(ToString::to_string).unwrap_or_default()
	}

	/// Returns the field names in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(k, _)| k.as_str())
	}

	/// Returns the number of fields
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns whether the record has no fields
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
		Self {
			fields: object.into_iter().map(|(k, v)| (k, v.into())).collect(),
		}
	}
}

impl<K, V> FromIterator<(K, V)> for Record
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut record = Record::new();
		for (key, value) in iter {
			record.insert(key, value);
		}
		record
	}
}

/// A shared, immutable sequence of records
///
/// Cloning a dataset is cheap; all clones see the same records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
	records: Arc<[Record]>,
}

impl Dataset {
	/// Creates a dataset from owned records
	pub fn new(records: Vec<Record>) -> Self {
		Self {
			records: records.into(),
		}
	}

	/// Parses a JSON array of objects, keeping each object's key order
	pub fn from_json_str(source: &str) -> Result<Self, ConfigurationError> {
		let value: serde_json::Value = serde_json::from_str(source)
			.map_err(|e| ConfigurationError::InvalidDataset(e.to_string()))?;
		Self::from_json_value(value)
	}

	/// Converts a JSON array of objects into a dataset
	pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigurationError> {
		let serde_json::Value::Array(items) = value else {
			return Err(ConfigurationError::InvalidDataset(
				"expected a JSON array of objects".to_string(),
			));
		};

		let records = items
			.into_iter()
			.enumerate()
			.map(|(index, item)| match item {
				serde_json::Value::Object(object) => Ok(Record::from_json_object(object)),
				_ => Err(ConfigurationError::InvalidDataset(format!(
					"record {index} is not an object"
				))),
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self::new(records))
	}

	/// Returns all records
	pub fn records(&self) -> &[Record] {
		&self.records
	}

	/// Returns the first record
	pub fn first(&self) -> Option<&Record> {
		self.records.first()
	}

	/// Returns the records in `window`, clamped to the dataset bounds
	pub fn slice(&self, window: Range<usize>) -> &[Record] {
		let end = window.end.min(self.records.len());
		let start = window.start.min(end);
		&self.records[start..end]
	}

	/// Returns the number of records
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns whether the dataset is empty
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl From<Vec<Record>> for Dataset {
	fn from(records: Vec<Record>) -> Self {
		Self::new(records)
	}
}
