//! Whole-file JSON persistence for the progress record.
//!
//! ```text
//! data/user_stats.json
//! {
//!   "practice": { "totalAnswered": 0, "totalCorrect": 0 },
//!   "hiragana": { "correct": 0, "wrong": 0, "streak": 0, "mastered": [] },
//!   "katakana": { "correct": 0, "wrong": 0, "streak": 0, "mastered": [] }
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kana_core::model::ProgressRecord;

use crate::repository::{ProgressRepository, StorageError};

pub const DEFAULT_STATS_PATH: &str = "data/user_stats.json";

/// Progress repository backed by a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no progress file at {}", self.path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let record: ProgressRecord = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(record)?)?;
        Ok(())
    }
}
