//! Display strings for a practice session.
//!
//! Everything a front end shows while drilling is derived here, so callers
//! never inspect engine internals to build labels.

use kana_core::model::{PoolSource, QuestionLimit};

use super::question::{OPTION_COUNT, Question};
use super::state::{AnswerFeedback, SessionReport};

pub const SUBTITLE_SYMBOL_TO_ROMANIZATION: &str = "Kana → Romaji";
pub const SUBTITLE_ROMANIZATION_TO_SYMBOL: &str = "Romaji → Kana";

/// Everything needed to render the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub prompt: String,
    pub subtitle: &'static str,
    pub options: [String; OPTION_COUNT],
    pub counter: String,
    /// Early stopping is only offered for unlimited sessions.
    pub can_stop: bool,
}

impl SessionView {
    #[must_use]
    pub fn for_question(question: &Question, question_index: u32, limit: QuestionLimit) -> Self {
        Self {
            prompt: question.prompt().to_owned(),
            subtitle: direction_label(question.showing_symbol()),
            options: question.options().clone().map(|o| o.text().to_owned()),
            counter: counter_label(question_index, limit),
            can_stop: limit.is_unlimited(),
        }
    }
}

#[must_use]
pub fn direction_label(showing_symbol: bool) -> &'static str {
    if showing_symbol {
        SUBTITLE_SYMBOL_TO_ROMANIZATION
    } else {
        SUBTITLE_ROMANIZATION_TO_SYMBOL
    }
}

/// `"n"` for unlimited sessions, `"n / limit"` otherwise.
#[must_use]
pub fn counter_label(question_index: u32, limit: QuestionLimit) -> String {
    match limit.count() {
        Some(count) => format!("{question_index} / {count}"),
        None => question_index.to_string(),
    }
}

#[must_use]
pub fn feedback_text(feedback: &AnswerFeedback) -> String {
    if feedback.is_correct {
        "Correct!".to_owned()
    } else {
        format!("Wrong. Correct: {}", feedback.correct_text)
    }
}

#[must_use]
pub fn result_text(report: &SessionReport) -> String {
    format!(
        "Session finished\n\nCorrect: {}\nTotal: {}",
        report.correct_count, report.question_count
    )
}

/// Message shown instead of a question when the pool is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolMessage {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[must_use]
pub fn empty_pool_message(source: PoolSource) -> EmptyPoolMessage {
    match source {
        PoolSource::MasteredOnly => EmptyPoolMessage {
            title: "No mastered symbols yet",
            subtitle: "Practice some symbols first",
        },
        PoolSource::AllSymbols => EmptyPoolMessage {
            title: "Nothing to practice",
            subtitle: "",
        },
    }
}
