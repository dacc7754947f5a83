use std::sync::{Arc, Mutex};

use kana_core::model::ProgressRecord;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Persistence contract for the learner's progress record.
///
/// Writes are whole-record; there is no partial update.
pub trait ProgressRepository: Send + Sync {
    /// Load the persisted record, `None` if nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored form cannot be read or parsed.
    fn load(&self) -> Result<Option<ProgressRecord>, StorageError>;

    /// Replace the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    fn save(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    record: Arc<Mutex<Option<ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of whatever was last saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn stored(&self) -> Result<Option<ProgressRecord>, StorageError> {
        self.load()
    }
}

impl ProgressRepository for InMemoryRepository {
    fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kana_core::model::Script;

    #[test]
    fn empty_repository_loads_nothing() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn round_trips_record() {
        let repo = InMemoryRepository::new();
        let mut record = ProgressRecord::default();
        record.record_correct(Script::Hiragana);
        record.mark_mastered(Script::Hiragana, "a");

        repo.save(&record).unwrap();

        assert_eq!(repo.load().unwrap(), Some(record));
    }

    #[test]
    fn clones_share_state() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.save(&ProgressRecord::default()).unwrap();
        assert!(other.stored().unwrap().is_some());
    }
}
