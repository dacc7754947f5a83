use kana_core::Catalog;
use kana_core::model::{ProgressRecord, Script};

/// A mastered transliteration paired with its symbol, when the catalog knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasteredSymbol {
    pub symbol: Option<String>,
    pub transliteration: String,
}

impl MasteredSymbol {
    /// `"か (ka)"`, or the bare transliteration if no symbol matches.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.symbol {
            Some(symbol) => format!("{symbol} ({})", self.transliteration),
            None => self.transliteration.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStatistics {
    pub script: Script,
    pub correct: u32,
    pub wrong: u32,
    pub streak: u32,
    pub mastered: Vec<MasteredSymbol>,
}

/// Read-only summary of stored progress for a statistics screen.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSnapshot {
    pub total_answered: u32,
    pub total_correct: u32,
    pub accuracy_percent: f64,
    pub scripts: Vec<ScriptStatistics>,
}

impl StatisticsSnapshot {
    #[must_use]
    pub fn from_record(record: &ProgressRecord, catalog: &Catalog) -> Self {
        let scripts = Script::ALL
            .into_iter()
            .map(|script| {
                let progress = record.script(script);
                ScriptStatistics {
                    script,
                    correct: progress.correct,
                    wrong: progress.wrong,
                    streak: progress.streak,
                    mastered: progress
                        .mastered
                        .iter()
                        .map(|translit| MasteredSymbol {
                            symbol: catalog.symbol_for(script, translit).map(str::to_owned),
                            transliteration: translit.clone(),
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            total_answered: record.practice.total_answered,
            total_correct: record.practice.total_correct,
            accuracy_percent: record.accuracy_percent(),
            scripts,
        }
    }

    #[must_use]
    pub fn accuracy_label(&self) -> String {
        format!("Accuracy: {:.1}%", self.accuracy_percent)
    }

    #[must_use]
    pub fn script(&self, script: Script) -> Option<&ScriptStatistics> {
        self.scripts.iter().find(|s| s.script == script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_reports_zero_accuracy() {
        let snapshot =
            StatisticsSnapshot::from_record(&ProgressRecord::default(), &Catalog::standard());
        assert_eq!(snapshot.total_answered, 0);
        assert_eq!(snapshot.accuracy_label(), "Accuracy: 0.0%");
        assert_eq!(snapshot.scripts.len(), 2);
    }

    #[test]
    fn accuracy_uses_one_decimal() {
        let mut record = ProgressRecord::default();
        record.record_answered(true);
        record.record_answered(true);
        record.record_answered(false);

        let snapshot = StatisticsSnapshot::from_record(&record, &Catalog::standard());
        assert_eq!(snapshot.accuracy_label(), "Accuracy: 66.7%");
    }

    #[test]
    fn mastered_entries_resolve_symbols_per_script() {
        let mut record = ProgressRecord::default();
        record.mark_mastered(Script::Hiragana, "ka");
        record.mark_mastered(Script::Katakana, "ka");
        record.mark_mastered(Script::Katakana, "xyz");

        let snapshot = StatisticsSnapshot::from_record(&record, &Catalog::standard());
        let hiragana = snapshot.script(Script::Hiragana).unwrap();
        assert_eq!(hiragana.mastered[0].label(), "か (ka)");

        let katakana = snapshot.script(Script::Katakana).unwrap();
        let labels: Vec<_> = katakana.mastered.iter().map(MasteredSymbol::label).collect();
        assert_eq!(labels, vec!["カ (ka)", "xyz"]);
    }
}
