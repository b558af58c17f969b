//! Inline style and CSS class configuration
//!
//! Each [`ElementKind`] gets an [`ElementStyle`] holding both CSS
//! declarations and class names. [`StyleMode`] picks which of the two is
//! written to the markup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::view::ElementView;

/// Kinds of elements that can be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
	/// The `<table>` element
	Table,
	/// Every `<tr>` element
	Row,
	/// Header `<th>` cells
	HeaderCell,
	/// Body `<td>` cells
	DataCell,
	/// Previous, next and page-index buttons
	Control,
}

/// How styles are written to the markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleMode {
	/// Write declarations into `style` attributes
	#[default]
	Inline,
	/// Write class names into `class` attributes
	Classes,
}

/// Declarations and classes for one element kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementStyle {
	/// CSS property to value
	pub declarations: BTreeMap<String, String>,
	/// CSS class names
	pub classes: Vec<String>,
}

impl ElementStyle {
	/// Creates an empty style
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a CSS declaration
	pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.declarations.insert(property.into(), value.into());
		self
	}

	/// Adds a class name
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}

	/// Returns the declarations as a `style` attribute value
	pub fn style_attr(&self) -> Option<String> {
		if self.declarations.is_empty() {
			return None;
		}
		Some(
			self.declarations
				.iter()
				.map(|(property, value)| format!("{property}: {value}"))
				.collect::<Vec<_>>()
				.join("; "),
		)
	}

	/// Returns the classes as a `class` attribute value
	pub fn class_attr(&self) -> Option<String> {
		(!self.classes.is_empty()).then(|| self.classes.join(" "))
	}
}

/// Style configuration for the whole table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
	/// Which attribute styles are written to
	pub mode: StyleMode,
	/// `<table>` style
	pub table: ElementStyle,
	/// `<tr>` style
	pub row: ElementStyle,
	/// `<th>` style
	pub header_cell: ElementStyle,
	/// `<td>` style
	pub data_cell: ElementStyle,
	/// Navigation button style
	pub control: ElementStyle,
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self::inline()
	}
}

impl StyleConfig {
	/// Plain bordered table using inline styles
	pub fn inline() -> Self {
		let cell = ElementStyle::new()
			.declare("border", "1px solid #ccc")
			.declare("padding", "4px 8px");
		Self {
			mode: StyleMode::Inline,
			table: ElementStyle::new()
				.declare("border-collapse", "collapse")
				.declare("width", "100%"),
			row: ElementStyle::new(),
			header_cell: cell.clone().declare("text-align", "left"),
			data_cell: cell,
			control: ElementStyle::new().declare("margin", "0 2px"),
		}
	}

	/// Bootstrap class names
	pub fn bootstrap() -> Self {
		Self {
			mode: StyleMode::Classes,
			table: ElementStyle::new()
				.class("table")
				.class("table-striped")
				.class("table-bordered"),
			row: ElementStyle::new(),
			header_cell: ElementStyle::new().class("text-start"),
			data_cell: ElementStyle::new(),
			control: ElementStyle::new()
				.class("btn")
				.class("btn-sm")
				.class("btn-outline-secondary"),
		}
	}

	/// No styling at all
	pub fn unstyled() -> Self {
		Self {
			mode: StyleMode::Inline,
			table: ElementStyle::new(),
			row: ElementStyle::new(),
			header_cell: ElementStyle::new(),
			data_cell: ElementStyle::new(),
			control: ElementStyle::new(),
		}
	}

	/// Returns the style of `kind`
	pub fn get(&self, kind: ElementKind) -> &ElementStyle {
		match kind {
			ElementKind::Table => &self.table,
			ElementKind::Row => &self.row,
			ElementKind::HeaderCell => &self.header_cell,
			ElementKind::DataCell => &self.data_cell,
			ElementKind::Control => &self.control,
		}
	}

	/// Replaces the style of `kind`
	pub fn with(mut self, kind: ElementKind, style: ElementStyle) -> Self {
		let slot = match kind {
			ElementKind::Table => &mut self.table,
			ElementKind::Row => &mut self.row,
			ElementKind::HeaderCell => &mut self.header_cell,
			ElementKind::DataCell => &mut self.data_cell,
			ElementKind::Control => &mut self.control,
		};
		*slot = style;
		self
	}

	/// Sets the mode
	pub fn mode(mut self, mode: StyleMode) -> Self {
		self.mode = mode;
		self
	}

	/// Writes the style of `kind` onto `element`
	pub(crate) fn apply(&self, kind: ElementKind, element: ElementView) -> ElementView {
		let style = self.get(kind);
		let attr = match self.mode {
			StyleMode::Inline => style.style_attr().map(|value| ("style", value)),
			StyleMode::Classes => style.class_attr().map(|value| ("class", value)),
		};
		match attr {
			Some((name, value)) => element.attr(name, value),
			None => element,
		}
	}
}
