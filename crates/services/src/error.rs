//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `ProgressStore` when persisting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A persistence failure that did not interrupt gameplay.
///
/// The in-memory progress stays authoritative; the update may not be durable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistWarning {
    pub message: String,
}

impl From<ProgressError> for PersistWarning {
    fn from(err: ProgressError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl fmt::Display for PersistWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "progress not saved: {}", self.message)
    }
}
