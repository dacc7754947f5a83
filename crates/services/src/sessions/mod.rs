mod engine;
mod mastery;
mod question;
mod state;
mod view;

// Public API of the session subsystem.
pub use engine::{SessionEngine, build_pool};
pub use mastery::{MASTERY_STREAK_THRESHOLD, reaches_mastery};
pub use question::{
    AnswerChoice, MAX_DISTRACTOR_ATTEMPTS, OPTION_COUNT, Question, UNAVAILABLE_PLACEHOLDER,
};
pub use state::{
    AnswerFeedback, AnswerOutcome, FinishReason, SessionPhase, SessionReport, SessionStep,
};
pub use view::{
    EmptyPoolMessage, SessionView, counter_label, direction_label, empty_pool_message,
    feedback_text, result_text,
};
