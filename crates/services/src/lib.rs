#![forbid(unsafe_code)]

pub mod error;
pub mod progress_store;
pub mod sessions;
pub mod statistics;

pub use kana_core::Clock;
pub use sessions as session;

pub use error::{PersistWarning, ProgressError};
pub use progress_store::ProgressStore;
pub use statistics::{MasteredSymbol, ScriptStatistics, StatisticsSnapshot};

pub use sessions::{
    AnswerChoice, AnswerFeedback, AnswerOutcome, FinishReason, MASTERY_STREAK_THRESHOLD, Question,
    SessionEngine, SessionPhase, SessionReport, SessionStep, SessionView,
};
