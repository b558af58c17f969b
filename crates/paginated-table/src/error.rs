//! Error types for table construction, navigation and mounting.

use thiserror::Error;

use crate::host::MountError;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Invalid arguments passed when building a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
	/// The dataset contains no records
	#[error("dataset must contain at least one record")]
	EmptyDataset,

	/// The page size is below 1
	#[error("page size must be at least 1, got {0}")]
	InvalidPageSize(usize),

	/// The container selector did not match anything in the host
	#[error("container `{0}` could not be resolved")]
	ContainerNotFound(String),

	/// Explicit header labels do not match the shape of the records
	#[error("expected {expected} header labels to match the record fields, got {actual}")]
	HeaderMismatch {
		/// Number of fields in the first record
		expected: usize,
		/// Number of labels supplied
		actual: usize,
	},

	/// The dataset source could not be parsed into records
	#[error("invalid dataset: {0}")]
	InvalidDataset(String),

	/// The options source could not be parsed
	#[error("invalid options: {0}")]
	InvalidOptions(String),
}

/// Navigation request that cannot be satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
	/// Target page is outside `1..=page_count`
	#[error("page {page} is outside 1..={page_count}")]
	OutOfRange {
		/// Requested page
		page: usize,
		/// Total number of pages
		page_count: usize,
	},
}

/// Any error a table operation can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// Invalid construction arguments
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),

	/// Invalid navigation target
	#[error(transparent)]
	Navigation(#[from] NavigationError),

	/// The host failed to attach the rendered table
	#[error(transparent)]
	Mount(#[from] MountError),
}
