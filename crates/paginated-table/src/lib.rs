//! Paginated HTML tables
//!
//! Renders an in-memory dataset one page at a time, with previous, next and
//! jump-to-page controls, into a container of a host page.
//!
//! ## Architecture
//!
//! - [`record`]: Records and shared datasets
//! - [`columns`]: Column derivation from header labels or record keys
//! - [`pagination`]: Page geometry, the current-page cursor and navigation actions
//! - [`style`]: Inline style or CSS class configuration
//! - [`options`]: Construction options, loadable from TOML or JSON
//! - [`view`]: Declarative markup tree with HTML serialization
//! - [`render`]: Pure rendering of a page into a view
//! - [`host`]: Environment adapter trait and the in-memory host
//! - `dom`: Browser host and click wiring (wasm32 only)
//! - [`table`]: The [`PaginatedTable`] widget
//!
//! Rendering is a pure function of the visible records, the columns and the
//! cursor. A [`Host`] applies the resulting [`View`] to its environment and
//! hands back a handle, which the table keeps so it can remove exactly that
//! subtree on the next render.
//!
//! ## Example
//!
//! ```rust
//! use paginated_table::{Dataset, MemoryHost, NavAction, PaginatedTable, TableOptions};
//!
//! let dataset = Dataset::from_json_str(
//!     r#"[
//!         {"name": "Alice", "age": 31},
//!         {"name": "Bob", "age": 27},
//!         {"name": "Carol", "age": 45}
//!     ]"#,
//! )?;
//! let host = MemoryHost::new().with_container("#people");
//! let options = TableOptions::new().headers(["Name", "Age"]);
//! let mut table = PaginatedTable::new(dataset, 2, host, "#people", options)?;
//!
//! assert_eq!(table.columns().labels(), vec!["Name", "Age"]);
//! assert!(table.click(NavAction::Next)?);
//! assert_eq!(table.current_page(), 2);
//! assert!(table.to_html().contains(">Carol</td>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod columns;
pub mod error;
pub mod host;
pub mod options;
pub mod pagination;
pub mod record;
pub mod render;
pub mod style;
pub mod table;
pub mod view;

// Browser adapter
#[cfg(target_arch = "wasm32")]
pub mod dom;

// Re-exports for convenience
pub use columns::{Column, ColumnSet};
#[cfg(target_arch = "wasm32")]
pub use dom::{DomHost, TableHandle, attach};
pub use error::{ConfigurationError, NavigationError, Result, TableError};
pub use host::{Host, MemoryHost, MountError};
pub use options::{NavLabels, TableOptions};
pub use pagination::{NavAction, PageState, Pagination};
pub use record::{Dataset, Record, Value};
pub use render::{RenderContext, render_table};
pub use style::{ElementKind, ElementStyle, StyleConfig, StyleMode};
pub use table::PaginatedTable;
pub use view::{ElementView, IntoView, View};
