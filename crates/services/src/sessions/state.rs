use chrono::{DateTime, Utc};
use kana_core::model::{Script, SymbolEntry};

use super::question::Question;
use crate::error::PersistWarning;

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    AwaitingAnswer,
    Scored,
    Finished,
    /// The filtered pool was empty; terminal until the next start.
    NothingToPractice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The configured question limit was reached.
    Completed,
    /// The learner ended the session early.
    Stopped,
}

/// Result reported when a session finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub correct_count: u32,
    pub question_count: u32,
    pub reason: FinishReason,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// What the caller should show next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    Asked(Question),
    Finished(SessionReport),
    NothingToPractice,
}

/// Scoring details for one accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub chosen_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub correct_text: String,
    pub script: Script,
    /// Transliteration promoted to mastered by this answer.
    pub newly_mastered: Option<String>,
    pub warnings: Vec<PersistWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// No question was awaiting an answer.
    Ignored,
    Scored(AnswerFeedback),
}

/// Mutable per-session data owned by the engine.
#[derive(Debug, Clone)]
pub(crate) struct SessionState {
    pub(crate) pool: Vec<SymbolEntry>,
    pub(crate) question: Option<Question>,
    pub(crate) question_index: u32,
    pub(crate) correct_count: u32,
    pub(crate) started_at: DateTime<Utc>,
}

impl SessionState {
    pub(crate) fn new(pool: Vec<SymbolEntry>, started_at: DateTime<Utc>) -> Self {
        Self {
            pool,
            question: None,
            question_index: 0,
            correct_count: 0,
            started_at,
        }
    }
}
