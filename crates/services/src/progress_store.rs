use std::sync::Arc;

use kana_core::model::{ProgressRecord, Script};
use storage::{InMemoryRepository, ProgressRepository};

use crate::error::ProgressError;

/// Durable counters, streaks and mastered sets.
///
/// Every mutator updates the in-memory record first and then flushes the
/// whole record. A failed flush is returned to the caller, but the in-memory
/// state is kept.
pub struct ProgressStore {
    repo: Arc<dyn ProgressRepository>,
    record: ProgressRecord,
}

impl ProgressStore {
    /// Open a store and load whatever the repository holds.
    ///
    /// Load problems never fail; they are logged and a zero record is used.
    #[must_use]
    pub fn open(repo: Arc<dyn ProgressRepository>) -> Self {
        let mut store = Self {
            repo,
            record: ProgressRecord::default(),
        };
        if let Err(err) = store.load() {
            log::warn!("could not persist fresh progress record: {err}");
        }
        store
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(Arc::new(InMemoryRepository::new()))
    }

    /// Populate in-memory state from the repository.
    ///
    /// A missing or unreadable record is replaced by a zero record which is
    /// saved right away.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` only if saving the fresh record fails.
    pub fn load(&mut self) -> Result<(), ProgressError> {
        match self.repo.load() {
            Ok(Some(record)) => {
                self.record = record;
                Ok(())
            }
            Ok(None) => {
                log::info!("no stored progress, starting fresh");
                self.record = ProgressRecord::default();
                self.save()
            }
            Err(err) => {
                log::warn!("stored progress unreadable, starting fresh: {err}");
                self.record = ProgressRecord::default();
                self.save()
            }
        }
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if the repository write fails.
    pub fn save(&self) -> Result<(), ProgressError> {
        self.repo.save(&self.record).map_err(|err| {
            log::warn!("failed to save progress: {err}");
            ProgressError::from(err)
        })
    }

    /// Count a correct answer for `script` and extend its streak.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the update could not be persisted.
    pub fn add_correct(&mut self, script: Script) -> Result<(), ProgressError> {
        self.record.record_correct(script);
        self.save()
    }

    /// Count a wrong answer for `script` and reset its streak.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the update could not be persisted.
    pub fn add_wrong(&mut self, script: Script) -> Result<(), ProgressError> {
        self.record.record_wrong(script);
        self.save()
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if the update could not be persisted.
    pub fn add_answered(&mut self, correct: bool) -> Result<(), ProgressError> {
        self.record.record_answered(correct);
        self.save()
    }

    /// Add a transliteration to the mastered set of `script`.
    ///
    /// Returns `Ok(false)` without writing if it was already mastered.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the update could not be persisted.
    pub fn mark_mastered(
        &mut self,
        script: Script,
        transliteration: &str,
    ) -> Result<bool, ProgressError> {
        if !self.record.mark_mastered(script, transliteration) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    #[must_use]
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    #[must_use]
    pub fn total_answered(&self) -> u32 {
        self.record.practice.total_answered
    }

    #[must_use]
    pub fn total_correct(&self) -> u32 {
        self.record.practice.total_correct
    }

    #[must_use]
    pub fn correct(&self, script: Script) -> u32 {
        self.record.script(script).correct
    }

    #[must_use]
    pub fn wrong(&self, script: Script) -> u32 {
        self.record.script(script).wrong
    }

    #[must_use]
    pub fn streak(&self, script: Script) -> u32 {
        self.record.script(script).streak
    }

    /// Mastered transliterations for `script`, sorted.
    #[must_use]
    pub fn mastered(&self, script: Script) -> Vec<String> {
        self.record.script(script).mastered.iter().cloned().collect()
    }

    #[must_use]
    pub fn is_mastered(&self, script: Script, transliteration: &str) -> bool {
        self.record.is_mastered(script, transliteration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::StorageError;

    struct BrokenRepository;

    impl ProgressRepository for BrokenRepository {
        fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }

        fn save(&self, _record: &ProgressRecord) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
    }

    /// Fails every load but keeps whatever is saved.
    #[derive(Default)]
    struct UnreadableRepository {
        saved: InMemoryRepository,
    }

    impl ProgressRepository for UnreadableRepository {
        fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
            Err(StorageError::Connection("garbled".into()))
        }

        fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
            self.saved.save(record)
        }
    }

    #[test]
    fn open_persists_fresh_record_when_missing() {
        let repo = InMemoryRepository::new();
        let store = ProgressStore::open(Arc::new(repo.clone()));

        assert_eq!(store.record(), &ProgressRecord::default());
        assert_eq!(repo.stored().unwrap(), Some(ProgressRecord::default()));
    }

    #[test]
    fn open_replaces_unreadable_record() {
        let repo = Arc::new(UnreadableRepository::default());
        let store = ProgressStore::open(repo.clone());

        assert_eq!(store.total_answered(), 0);
        assert_eq!(repo.saved.stored().unwrap(), Some(ProgressRecord::default()));
    }

    #[test]
    fn mutators_write_through() {
        let repo = InMemoryRepository::new();
        let mut store = ProgressStore::open(Arc::new(repo.clone()));

        store.add_correct(Script::Katakana).unwrap();
        store.add_answered(true).unwrap();

        let stored = repo.stored().unwrap().unwrap();
        assert_eq!(stored.katakana.correct, 1);
        assert_eq!(stored.katakana.streak, 1);
        assert_eq!(stored.practice.total_answered, 1);
        assert_eq!(stored.practice.total_correct, 1);
    }

    #[test]
    fn wrong_answer_resets_streak() {
        let mut store = ProgressStore::in_memory();
        store.add_correct(Script::Hiragana).unwrap();
        store.add_correct(Script::Hiragana).unwrap();
        store.add_wrong(Script::Hiragana).unwrap();

        assert_eq!(store.streak(Script::Hiragana), 0);
        assert_eq!(store.correct(Script::Hiragana), 2);
        assert_eq!(store.wrong(Script::Hiragana), 1);
    }

    #[test]
    fn mark_mastered_twice_keeps_one_entry() {
        let mut store = ProgressStore::in_memory();
        assert!(store.mark_mastered(Script::Hiragana, "ka").unwrap());
        assert!(!store.mark_mastered(Script::Hiragana, "ka").unwrap());
        assert_eq!(store.mastered(Script::Hiragana), vec!["ka".to_string()]);
    }

    #[test]
    fn reopening_restores_record() {
        let repo = InMemoryRepository::new();
        let mut store = ProgressStore::open(Arc::new(repo.clone()));
        store.add_correct(Script::Hiragana).unwrap();
        store.add_answered(true).unwrap();
        store.mark_mastered(Script::Katakana, "n").unwrap();

        let reopened = ProgressStore::open(Arc::new(repo));
        assert_eq!(reopened.record(), store.record());
    }

    #[test]
    fn broken_repository_keeps_memory_authoritative() {
        let mut store = ProgressStore::open(Arc::new(BrokenRepository));
        assert_eq!(store.total_answered(), 0);

        let err = store.add_correct(Script::Hiragana).unwrap_err();
        assert!(matches!(err, ProgressError::Storage(_)));
        assert_eq!(store.correct(Script::Hiragana), 1);
        assert_eq!(store.streak(Script::Hiragana), 1);
    }
}
