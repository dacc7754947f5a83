#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{DEFAULT_STATS_PATH, JsonFileRepository};
pub use repository::{InMemoryRepository, ProgressRepository, StorageError};
