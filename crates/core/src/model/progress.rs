use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::Script;

/// Global answer counters across every practice session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticeTotals {
    pub total_answered: u32,
    pub total_correct: u32,
}

/// Counters and mastered transliterations for one script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptProgress {
    pub correct: u32,
    pub wrong: u32,
    pub streak: u32,
    pub mastered: BTreeSet<String>,
}

/// Persisted learner progress.
///
/// Any section missing from the persisted form deserializes to zeroes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    pub practice: PracticeTotals,
    pub hiragana: ScriptProgress,
    pub katakana: ScriptProgress,
}

impl ProgressRecord {
    #[must_use]
    pub fn script(&self, script: Script) -> &ScriptProgress {
        match script {
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.katakana,
        }
    }

    pub fn script_mut(&mut self, script: Script) -> &mut ScriptProgress {
        match script {
            Script::Hiragana => &mut self.hiragana,
            Script::Katakana => &mut self.katakana,
        }
    }

    pub fn record_correct(&mut self, script: Script) {
        let progress = self.script_mut(script);
        progress.correct = progress.correct.saturating_add(1);
        progress.streak = progress.streak.saturating_add(1);
    }

    pub fn record_wrong(&mut self, script: Script) {
        let progress = self.script_mut(script);
        progress.wrong = progress.wrong.saturating_add(1);
        progress.streak = 0;
    }

    pub fn record_answered(&mut self, correct: bool) {
        self.practice.total_answered = self.practice.total_answered.saturating_add(1);
        if correct {
            self.practice.total_correct = self.practice.total_correct.saturating_add(1);
        }
    }

    /// Returns `true` if the transliteration was not mastered before.
    pub fn mark_mastered(&mut self, script: Script, transliteration: &str) -> bool {
        let mastered = &mut self.script_mut(script).mastered;
        if mastered.contains(transliteration) {
            return false;
        }
        mastered.insert(transliteration.to_owned())
    }

    #[must_use]
    pub fn is_mastered(&self, script: Script, transliteration: &str) -> bool {
        self.script(script).mastered.contains(transliteration)
    }

    /// Share of correct answers, in percent; `0.0` before any answer.
    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        if self.practice.total_answered == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.practice.total_correct) / f64::from(self.practice.total_answered)
    }
}
