//! Host environment adapter
//!
//! A [`Host`] resolves a container from a selector, mounts a rendered
//! [`View`] into it and later removes exactly what it mounted. The table
//! keeps the handle returned by [`Host::mount`], so it never needs to look
//! its own markup up again.
//!
//! [`MemoryHost`] keeps mounted views in memory. It backs server-side
//! rendering and the test suite; the browser adapter lives in `dom`.

use thiserror::Error;

use crate::view::View;

/// Error type for mounting views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,
	/// Failed to create an element.
	#[error("Failed to create element `{0}`")]
	CreateElementFailed(String),
	/// Failed to set an attribute.
	#[error("Failed to set attribute `{0}`")]
	SetAttributeFailed(String),
	/// Failed to append a child element.
	#[error("Failed to append child")]
	AppendChildFailed,
	/// Failed to register an event listener.
	#[error("Failed to register event listener")]
	ListenerFailed,
	/// Only element views can be mounted at the top level.
	#[error("Only element views can be mounted")]
	NotAnElement,
	/// The container is no longer known to the host.
	#[error("Container is detached")]
	ContainerDetached,
}

/// The environment a table is rendered into
pub trait Host {
	/// Handle to a resolved container
	type Container;
	/// Handle to a mounted subtree
	type Mounted;

	/// Resolves `selector` to a container
	fn resolve(&self, selector: &str) -> Option<Self::Container>;

	/// Appends `view` to `container` and returns a handle to it
	fn mount(
		&mut self,
		container: &Self::Container,
		view: &View,
	) -> Result<Self::Mounted, MountError>;

	/// Removes a subtree previously returned by [`Host::mount`]
	fn unmount(&mut self, container: &Self::Container, mounted: Self::Mounted);
}

/// Container handle of a [`MemoryHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(usize);

/// Mounted subtree handle of a [`MemoryHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

#[derive(Debug)]
struct MemoryContainer {
	selector: String,
	mounted: Vec<(MountId, View)>,
}

/// In-memory document made of named containers
///
/// # Example
///
/// ```rust
/// use paginated_table::host::{Host, MemoryHost};
/// use paginated_table::view::{ElementView, IntoView};
///
/// let mut host = MemoryHost::new().with_container("#app");
/// let container = host.resolve("#app").unwrap();
/// let mounted = host.mount(&container, &ElementView::new("p").into_view()).unwrap();
/// assert_eq!(host.inner_html(container), "<p></p>");
///
/// host.unmount(&container, mounted);
/// assert_eq!(host.inner_html(container), "");
/// ```
#[derive(Debug, Default)]
pub struct MemoryHost {
	containers: Vec<MemoryContainer>,
	next_mount: u64,
}

impl MemoryHost {
	/// Creates a host with no containers
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a container, builder style
	pub fn with_container(mut self, selector: impl Into<String>) -> Self {
		self.add_container(selector);
		self
	}

	/// Adds a container reachable through `selector`
	pub fn add_container(&mut self, selector: impl Into<String>) -> ContainerId {
		self.containers.push(MemoryContainer {
			selector: selector.into(),
			mounted: Vec::new(),
		});
		ContainerId(self.containers.len() - 1)
	}

	/// Returns the views currently mounted in `container`, oldest first
	pub fn mounted_views(&self, container: ContainerId) -> impl Iterator<Item = &View> {
		self.containers
			.get(container.0)
			.into_iter()
			.flat_map(|c| c.mounted.iter().map(|(_, view)| view))
	}

	/// Returns the number of subtrees mounted in `container`
	pub fn mounted_count(&self, container: ContainerId) -> usize {
		self.mounted_views(container).count()
	}

	/// Serializes everything mounted in `container`
	pub fn inner_html(&self, container: ContainerId) -> String {
		self.mounted_views(container)
			.map(View::render_to_string)
			.collect()
	}
}

impl Host for MemoryHost {
	type Container = ContainerId;
	type Mounted = MountId;

	fn resolve(&self, selector: &str) -> Option<ContainerId> {
		self.containers
			.iter()
			.position(|c| c.selector == selector)
			.map(ContainerId)
	}

	fn mount(&mut self, container: &ContainerId, view: &View) -> Result<MountId, MountError> {
		let id = MountId(self.next_mount);
		let slot = self
			.containers
			.get_mut(container.0)
			.ok_or(MountError::ContainerDetached)?;
		slot.mounted.push((id, view.clone()));
		self.next_mount += 1;
		Ok(id)
	}

	fn unmount(&mut self, container: &ContainerId, mounted: MountId) {
		if let Some(slot) = self.containers.get_mut(container.0) {
			slot.mounted.retain(|(id, _)| *id != mounted);
		}
	}
}
