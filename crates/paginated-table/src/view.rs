//! Markup tree produced by table rendering
//!
//! A [`View`] only describes markup: [`render_table`](crate::render::render_table)
//! builds one per page and a [`Host`](crate::host::Host) turns it into live
//! nodes. Navigation controls are plain elements carrying the
//! `data-nav-action` / `data-nav-page` attributes, so a tree can be compared,
//! cloned and queried without any event machinery attached.

use std::borrow::Cow;

use crate::pagination::{ACTION_ATTR, NavAction, PAGE_ATTR};

type Attr = (Cow<'static, str>, Cow<'static, str>);

/// A node of the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum View {
	/// An element with attributes and children
	Element(ElementView),
	/// Escaped text
	Text(Cow<'static, str>),
	/// Nothing; the state of a table before its first render
	Empty,
}

/// An element node, built with chained calls
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<Attr>,
	children: Vec<View>,
}

impl ElementView {
	/// Starts an element with no attributes or children
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Appends an attribute; attributes serialize in insertion order
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Appends an attribute only when `condition` holds
	pub fn attr_if(
		self,
		condition: bool,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		if condition {
			self.attr(name, value)
		} else {
			self
		}
	}

	/// Appends a child
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Appends every item of `children`
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoView::into_view));
		self
	}

	/// Returns the tag name
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order
	pub fn attrs(&self) -> &[Attr] {
		&self.attrs
	}

	/// Returns the value of the first attribute called `name`
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find_map(|(n, v)| (n == name).then_some(v.as_ref()))
	}

	/// Returns whether the attribute `name` is present
	pub fn has_attr(&self, name: &str) -> bool {
		self.get_attr(name).is_some()
	}

	/// Returns the children
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns the navigation action this element triggers when clicked
	pub fn nav_action(&self) -> Option<NavAction> {
		NavAction::from_attrs(self.get_attr(ACTION_ATTR), self.get_attr(PAGE_ATTR))
	}

	/// Returns the concatenated text of all descendants
	pub fn text_content(&self) -> String {
		let mut text = String::new();
		for child in &self.children {
			child.push_text(&mut text);
		}
		text
	}
}

impl View {
	/// Creates a text node
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Returns every element named `tag`, in document order
	pub fn find_all(&self, tag: &str) -> Vec<&ElementView> {
		self.elements_where(|el| el.tag_name() == tag)
	}

	/// Returns every element carrying a navigation action, in document order
	pub fn controls(&self) -> Vec<&ElementView> {
		self.elements_where(|el| el.nav_action().is_some())
	}

	/// Serializes the tree to HTML, escaping text and attribute values
	pub fn render_to_string(&self) -> String {
		let mut html = String::new();
		self.write_html(&mut html);
		html
	}

	fn elements_where(&self, predicate: impl Fn(&ElementView) -> bool) -> Vec<&ElementView> {
		let mut found = Vec::new();
		let mut pending = vec![self];
		while let Some(view) = pending.pop() {
			if let View::Element(el) = view {
				if predicate(el) {
					found.push(el);
				}
				// Reversed so the stack pops children left to right
				pending.extend(el.children.iter().rev());
			}
		}
		found
	}

	fn push_text(&self, text: &mut String) {
		match self {
			View::Element(el) => el.children.iter().for_each(|c| c.push_text(text)),
			View::Text(content) => text.push_str(content),
			View::Empty => {}
		}
	}

	fn write_html(&self, html: &mut String) {
		match self {
			View::Element(el) => {
				html.push('<');
				html.push_str(&el.tag);
				for (name, value) in &el.attrs {
					html.push(' ');
					html.push_str(name);
					html.push_str("=\"");
					html.push_str(&escape(value));
					html.push('"');
				}
				html.push('>');
				for child in &el.children {
					child.write_html(html);
				}
				html.push_str("</");
				html.push_str(&el.tag);
				html.push('>');
			}
			View::Text(content) => html.push_str(&escape(content)),
			View::Empty => {}
		}
	}
}

/// Conversion into a [`View`] node
pub trait IntoView {
	/// Converts `self` into a node
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

fn escape(raw: &str) -> Cow<'_, str> {
	if !raw.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(raw);
	}
	let mut escaped = String::with_capacity(raw.len() + 8);
	for c in raw.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
