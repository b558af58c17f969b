//! Table options
//!
//! Options can be built in code or loaded from TOML or JSON:
//!
//! ```toml
//! headers = ["Name", "Age"]
//! css_framework = true
//!
//! [labels]
//! previous = "«"
//! next = "»"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::style::StyleConfig;

/// Text of the previous and next controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLabels {
	/// Previous control text
	pub previous: String,
	/// Next control text
	pub next: String,
}

impl Default for NavLabels {
	fn default() -> Self {
		Self {
			previous: "Previous".to_string(),
			next: "Next".to_string(),
		}
	}
}

/// Optional construction settings of a table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
	/// Header labels; derived from the first record when absent
	pub headers: Option<Vec<String>>,
	/// Explicit style configuration, takes precedence over `css_framework`
	pub style: Option<StyleConfig>,
	/// Use the CSS framework class preset instead of inline styles
	pub css_framework: bool,
	/// Navigation control text
	pub labels: NavLabels,
}

impl TableOptions {
	/// Creates default options
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses options from TOML
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
		toml::from_str(source).map_err(|e| ConfigurationError::InvalidOptions(e.to_string()))
	}

	/// Parses options from JSON
	pub fn from_json_str(source: &str) -> Result<Self, ConfigurationError> {
		serde_json::from_str(source).map_err(|e| ConfigurationError::InvalidOptions(e.to_string()))
	}

	/// Sets the header labels
	pub fn headers<I, S>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.headers = Some(headers.into_iter().map(Into::into).collect());
		self
	}

	/// Sets the style configuration
	pub fn style(mut self, style: StyleConfig) -> Self {
		self.style = Some(style);
		self
	}

	/// Selects the CSS framework class preset
	pub fn css_framework(mut self, enabled: bool) -> Self {
		self.css_framework = enabled;
		self
	}

	/// Sets the navigation control text
	pub fn labels(mut self, previous: impl Into<String>, next: impl Into<String>) -> Self {
		self.labels = NavLabels {
			previous: previous.into(),
			next: next.into(),
		};
		self
	}

	/// Returns the style configuration the table renders with
	pub fn resolved_style(&self) -> StyleConfig {
		match &self.style {
			Some(style) => style.clone(),
			None if self.css_framework => StyleConfig::bootstrap(),
			None => StyleConfig::inline(),
		}
	}
}
