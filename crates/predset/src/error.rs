//! Error types for predset

use thiserror::Error;

/// Main error type for filter-set operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Positional removal with an index past the end of the registry
    #[error("index {index} is out of range for a set of {len} filters")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of entries at the time of the call.
        len: usize,
    },
}

/// Result type alias for filter-set operations
pub type Result<T> = std::result::Result<T, FilterError>;
