use std::fmt;
use std::sync::Arc;

use kana_core::model::{PoolSource, PracticeConfig, ProgressRecord, SymbolEntry};
use kana_core::{Catalog, Clock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::mastery::reaches_mastery;
use super::question::{self, Question};
use super::state::{
    AnswerFeedback, AnswerOutcome, FinishReason, SessionPhase, SessionReport, SessionState,
    SessionStep,
};
use super::view::SessionView;
use crate::error::{PersistWarning, ProgressError};
use crate::progress_store::ProgressStore;

/// Filter the catalog down to the symbols a session may ask about.
///
/// For `MasteredOnly`, an entry qualifies only if its transliteration is
/// mastered for its own script.
#[must_use]
pub fn build_pool(
    catalog: &[SymbolEntry],
    config: &PracticeConfig,
    progress: &ProgressRecord,
) -> Vec<SymbolEntry> {
    catalog
        .iter()
        .filter(|e| config.script().allows(e.script()))
        .filter(|e| match config.source() {
            PoolSource::AllSymbols => true,
            PoolSource::MasteredOnly => progress.is_mastered(e.script(), e.transliteration()),
        })
        .cloned()
        .collect()
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Stateful quiz controller.
///
/// Advances only on explicit calls: `start_session`, `answer`,
/// `next_question`, `stop_session` and `exit_session`. Progress is written
/// through the `ProgressStore` passed to the calls that need it.
pub struct SessionEngine<R = StdRng> {
    catalog: Arc<Catalog>,
    clock: Clock,
    rng: R,
    config: PracticeConfig,
    phase: SessionPhase,
    state: Option<SessionState>,
    report: Option<SessionReport>,
}

impl SessionEngine<StdRng> {
    /// Engine seeded from the operating system.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Engine with a reproducible question sequence.
    #[must_use]
    pub fn seeded(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SessionEngine<R> {
    #[must_use]
    pub fn with_rng(catalog: Arc<Catalog>, rng: R) -> Self {
        Self {
            catalog,
            clock: Clock::default(),
            rng,
            config: PracticeConfig::default(),
            phase: SessionPhase::Idle,
            state: None,
            report: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Reset all session state and pose the first question.
    ///
    /// Returns `SessionStep::NothingToPractice` when the filtered pool is empty.
    pub fn start_session(
        &mut self,
        config: PracticeConfig,
        progress: &ProgressStore,
    ) -> SessionStep {
        self.config = config;
        self.report = None;
        self.state = None;

        let pool = build_pool(self.catalog.all_symbols(), &config, progress.record());
        if pool.is_empty() {
            log::info!("nothing to practice for {config:?}");
            self.phase = SessionPhase::NothingToPractice;
            return SessionStep::NothingToPractice;
        }

        log::info!("session started with {} symbols", pool.len());
        self.state = Some(SessionState::new(pool, self.clock.now()));
        self.ask_question()
    }

    /// Score `index` against the current question and record the outcome.
    ///
    /// Ignored unless a question is awaiting an answer. An index outside the
    /// option range counts as wrong. Persistence failures are reported as
    /// warnings in the feedback.
    pub fn answer(&mut self, index: usize, progress: &mut ProgressStore) -> AnswerOutcome {
        if self.phase != SessionPhase::AwaitingAnswer {
            return AnswerOutcome::Ignored;
        }
        let Some(state) = self.state.as_mut() else {
            return AnswerOutcome::Ignored;
        };
        let Some(question) = state.question.as_ref() else {
            return AnswerOutcome::Ignored;
        };

        let entry = question.entry().clone();
        let script = entry.script();
        let is_correct = index == question.correct_index();
        let mut feedback = AnswerFeedback {
            chosen_index: index,
            correct_index: question.correct_index(),
            is_correct,
            correct_text: question.correct_text().to_owned(),
            script,
            newly_mastered: None,
            warnings: Vec::new(),
        };

        if is_correct {
            state.correct_count += 1;
            collect(progress.add_correct(script), &mut feedback.warnings);

            if reaches_mastery(progress.streak(script))
                && !progress.is_mastered(script, entry.transliteration())
            {
                // The set is updated in memory even if the write fails.
                collect(
                    progress.mark_mastered(script, entry.transliteration()),
                    &mut feedback.warnings,
                );
                log::info!("{} ({script}) mastered", entry.transliteration());
                feedback.newly_mastered = Some(entry.transliteration().to_owned());
            }
        } else {
            collect(progress.add_wrong(script), &mut feedback.warnings);
        }
        collect(progress.add_answered(is_correct), &mut feedback.warnings);

        self.phase = SessionPhase::Scored;
        AnswerOutcome::Scored(feedback)
    }

    /// Pose the next question, or finish once the limit is reached.
    ///
    /// Returns `None` unless the last question has been scored.
    pub fn next_question(&mut self) -> Option<SessionStep> {
        if self.phase != SessionPhase::Scored {
            return None;
        }
        Some(self.ask_question())
    }

    /// Finish early and report what was answered so far.
    ///
    /// Returns `None` when no session is running.
    pub fn stop_session(&mut self) -> Option<SessionReport> {
        match self.phase {
            SessionPhase::AwaitingAnswer | SessionPhase::Scored => {
                Some(self.finish(FinishReason::Stopped))
            }
            _ => None,
        }
    }

    /// Abandon the session without producing a report.
    pub fn exit_session(&mut self) {
        if self.state.is_some() {
            log::info!("session abandoned");
        }
        self.phase = SessionPhase::Idle;
        self.state = None;
        self.report = None;
    }

    fn ask_question(&mut self) -> SessionStep {
        let Some(asked) = self.state.as_ref().map(|s| s.question_index) else {
            self.phase = SessionPhase::NothingToPractice;
            return SessionStep::NothingToPractice;
        };
        if self.config.question_limit().is_reached(asked) {
            return SessionStep::Finished(self.finish(FinishReason::Completed));
        }

        let Some(state) = self.state.as_mut() else {
            return SessionStep::NothingToPractice;
        };
        let generated = question::generate(
            &mut self.rng,
            &state.pool,
            self.catalog.all_symbols(),
            self.config.mode(),
        );
        let Some(question) = generated else {
            self.phase = SessionPhase::NothingToPractice;
            return SessionStep::NothingToPractice;
        };

        state.question_index += 1;
        state.question = Some(question.clone());
        self.phase = SessionPhase::AwaitingAnswer;
        SessionStep::Asked(question)
    }

    fn finish(&mut self, reason: FinishReason) -> SessionReport {
        let finished_at = self.clock.now();
        let report = match self.state.as_mut() {
            Some(state) => {
                state.question = None;
                SessionReport {
                    correct_count: state.correct_count,
                    question_count: state.question_index,
                    reason,
                    started_at: state.started_at,
                    finished_at,
                }
            }
            None => SessionReport {
                correct_count: 0,
                question_count: 0,
                reason,
                started_at: finished_at,
                finished_at,
            },
        };

        log::info!(
            "session finished ({reason:?}): {}/{} correct",
            report.correct_count,
            report.question_count
        );
        self.phase = SessionPhase::Finished;
        self.report = Some(report.clone());
        report
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    /// True between a question being posed and its answer being accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::AwaitingAnswer
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.state.as_ref().and_then(|s| s.question.as_ref())
    }

    #[must_use]
    pub fn pool(&self) -> &[SymbolEntry] {
        self.state.as_ref().map_or(&[], |s| s.pool.as_slice())
    }

    #[must_use]
    pub fn question_index(&self) -> u32 {
        self.state.as_ref().map_or(0, |s| s.question_index)
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.state.as_ref().map_or(0, |s| s.correct_count)
    }

    /// Report of the last finished session, if any.
    #[must_use]
    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    /// Display strings for the current question.
    #[must_use]
    pub fn view(&self) -> Option<SessionView> {
        self.current_question().map(|q| {
            SessionView::for_question(q, self.question_index(), self.config.question_limit())
        })
    }
}

fn collect<T>(result: Result<T, ProgressError>, warnings: &mut Vec<PersistWarning>) {
    if let Err(err) = result {
        warnings.push(err.into());
    }
}

impl<R> fmt::Debug for SessionEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEngine")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("pool_len", &self.state.as_ref().map(|s| s.pool.len()))
            .field("question_index", &self.state.as_ref().map(|s| s.question_index))
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
