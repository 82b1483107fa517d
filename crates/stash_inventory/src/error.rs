//! Error types for backpack operations

use crate::sort::SortKey;
use thiserror::Error;

/// Backpack errors
///
/// None of these are fatal: every operation reports them as a value and
/// leaves the store untouched, so the caller may re-prompt and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Insert attempted on a full store
    #[error("Backpack is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    /// No record with the requested name
    #[error("Item not found: {name}")]
    NotFound { name: String },
    /// Operation requires the store to be ordered by a specific key
    #[error("Backpack must be sorted by {required} first (currently sorted by {current})")]
    Precondition { required: SortKey, current: SortKey },
    /// Rejected field or parameter value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl InventoryError {
    /// Create a not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create an invalid-input error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, InventoryError>;
