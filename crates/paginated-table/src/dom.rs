//! Browser host backed by web-sys
//!
//! [`DomHost`] creates real DOM nodes from a [`View`]. [`attach`] wires a
//! single delegated click listener on the container; it reads the
//! `data-nav-action` / `data-nav-page` attributes of the clicked control
//! and dispatches the action to the table. The listener is registered once
//! on the container, so it outlives every re-render of the table inside it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, Node};

use crate::error::Result;
use crate::host::{Host, MountError};
use crate::pagination::{ACTION_ATTR, NavAction, PAGE_ATTR};
use crate::table::PaginatedTable;
use crate::view::{ElementView, View};

/// Host rendering into the page's document
#[derive(Debug, Clone)]
pub struct DomHost {
	document: Document,
}

impl DomHost {
	/// Creates a host for the current window's document
	pub fn new() -> std::result::Result<Self, MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		Ok(Self { document })
	}

	fn create_element(&self, view: &ElementView) -> std::result::Result<Element, MountError> {
		let element = self
			.document
			.create_element(view.tag_name())
			.map_err(|_| MountError::CreateElementFailed(view.tag_name().to_string()))?;

		for (name, value) in view.attrs() {
			element
				.set_attribute(name, value)
				.map_err(|_| MountError::SetAttributeFailed(name.to_string()))?;
		}

		for child in view.child_views() {
			self.append_view(&element, child)?;
		}

		Ok(element)
	}

	fn append_view(&self, parent: &Node, view: &View) -> std::result::Result<(), MountError> {
		match view {
			View::Element(el) => {
				let element = self.create_element(el)?;
				parent
					.append_child(&element)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Text(text) => {
				let text_node = self.document.create_text_node(text);
				parent
					.append_child(&text_node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Empty => {}
		}
		Ok(())
	}
}

impl Host for DomHost {
	type Container = Element;
	type Mounted = Element;

	fn resolve(&self, selector: &str) -> Option<Element> {
		self.document.query_selector(selector).ok().flatten()
	}

	fn mount(
		&mut self,
		container: &Element,
		view: &View,
	) -> std::result::Result<Element, MountError> {
		let View::Element(root) = view else {
			return Err(MountError::NotAnElement);
		};
		let element = self.create_element(root)?;
		container
			.append_child(&element)
			.map_err(|_| MountError::AppendChildFailed)?;
		Ok(element)
	}

	fn unmount(&mut self, _container: &Element, mounted: Element) {
		mounted.remove();
	}
}

/// A table bound to its container's click events
///
/// Dropping the handle removes the listener; the rendered table stays.
pub struct TableHandle {
	table: Rc<RefCell<PaginatedTable<DomHost>>>,
	container: Element,
	listener: Closure<dyn FnMut(Event)>,
}

impl TableHandle {
	/// Returns the shared table
	pub fn table(&self) -> &Rc<RefCell<PaginatedTable<DomHost>>> {
		&self.table
	}
}

impl Drop for TableHandle {
	fn drop(&mut self) {
		let _ = self
			.container
			.remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
	}
}

/// Makes the navigation controls of `table` respond to clicks
pub fn attach(table: PaginatedTable<DomHost>) -> Result<TableHandle> {
	let container = table.container().clone();
	let table = Rc::new(RefCell::new(table));
	let weak = Rc::downgrade(&table);

	let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		let Some(table) = weak.upgrade() else {
			return;
		};
		let Some(action) = clicked_action(&event) else {
			return;
		};
		// Clicks fired while the table is already handling one are dropped
		let Ok(mut table) = table.try_borrow_mut() else {
			return;
		};
		if let Err(err) = table.dispatch(action) {
			tracing::warn!(?action, %err, "click navigation failed");
		}
	});

	container
		.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
		.map_err(|_| MountError::ListenerFailed)?;

	Ok(TableHandle {
		table,
		container,
		listener,
	})
}

fn clicked_action(event: &Event) -> Option<NavAction> {
	let target = event.target()?.dyn_into::<Element>().ok()?;
	let control = target.closest(&format!("[{ACTION_ATTR}]")).ok()??;
	if control.has_attribute("disabled") {
		return None;
	}
	NavAction::from_attrs(
		control.get_attribute(ACTION_ATTR).as_deref(),
		control.get_attribute(PAGE_ATTR).as_deref(),
	)
}
