//! Store Errors
//!
//! Every error here is absorbed by the dispatcher and only logged.

/// Common result type for board operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Board-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Add or rename with a blank title
    EmptyInput,
    /// No group is selected (or the named group does not exist)
    NoSelection,
    /// Referenced id is not in the list
    NotFound(String),
    /// Stored snapshot could not be parsed
    PersistenceCorrupt(String),
    /// Key-value medium refused a read or write
    Storage(String),
}

impl StoreError {
    /// Whether the error is worth a warning, as opposed to an expected no-op
    pub fn is_noteworthy(&self) -> bool {
        !matches!(self, StoreError::NotFound(_))
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::EmptyInput => write!(f, "Title is empty"),
            StoreError::NoSelection => write!(f, "No task selected"),
            StoreError::NotFound(id) => write!(f, "Not found: {}", id),
            StoreError::PersistenceCorrupt(msg) => write!(f, "Corrupt snapshot: {}", msg),
            StoreError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
