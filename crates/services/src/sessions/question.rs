//! Multiple-choice question generation.
//!
//! The question symbol is drawn uniformly from the session pool. Distractors
//! are drawn by rejection sampling: first from the pool, then from the whole
//! catalog, each with a bounded number of attempts. A slot that cannot be
//! filled becomes [`AnswerChoice::Unavailable`].

use std::collections::HashSet;

use kana_core::model::{PracticeMode, SymbolEntry};
use rand::Rng;

pub const OPTION_COUNT: usize = 4;
pub const MAX_DISTRACTOR_ATTEMPTS: usize = 100;
pub const UNAVAILABLE_PLACEHOLDER: &str = "—";

/// One of the four option slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnswerChoice {
    Text(String),
    #[default]
    Unavailable,
}

impl AnswerChoice {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            AnswerChoice::Text(text) => text,
            AnswerChoice::Unavailable => UNAVAILABLE_PLACEHOLDER,
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AnswerChoice::Unavailable)
    }
}

/// A posed question: prompt, four options and the correct slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    entry: SymbolEntry,
    showing_symbol: bool,
    options: [AnswerChoice; OPTION_COUNT],
    correct_index: usize,
}

impl Question {
    /// The symbol backing this question.
    #[must_use]
    pub fn entry(&self) -> &SymbolEntry {
        &self.entry
    }

    /// `true` when the prompt is the symbol and the answer its transliteration.
    #[must_use]
    pub fn showing_symbol(&self) -> bool {
        self.showing_symbol
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        if self.showing_symbol {
            self.entry.symbol()
        } else {
            self.entry.transliteration()
        }
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerChoice; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        answer_text(&self.entry, self.showing_symbol)
    }
}

fn answer_text(entry: &SymbolEntry, showing_symbol: bool) -> &str {
    if showing_symbol {
        entry.transliteration()
    } else {
        entry.symbol()
    }
}

/// Symbols and transliterations already present in a question's options.
struct UsedOptions {
    symbols: HashSet<String>,
    transliterations: HashSet<String>,
}

impl UsedOptions {
    fn seeded_with(entry: &SymbolEntry) -> Self {
        let mut used = Self {
            symbols: HashSet::new(),
            transliterations: HashSet::new(),
        };
        used.insert(entry);
        used
    }

    fn insert(&mut self, entry: &SymbolEntry) {
        self.symbols.insert(entry.symbol().to_owned());
        self.transliterations
            .insert(entry.transliteration().to_owned());
    }

    fn overlaps(&self, entry: &SymbolEntry) -> bool {
        self.symbols.contains(entry.symbol())
            || self.transliterations.contains(entry.transliteration())
    }
}

/// Build a question from `pool`, or `None` if the pool is empty.
pub(crate) fn generate<R: Rng>(
    rng: &mut R,
    pool: &[SymbolEntry],
    catalog: &[SymbolEntry],
    mode: PracticeMode,
) -> Option<Question> {
    if pool.is_empty() {
        return None;
    }

    let current = pool[rng.random_range(0..pool.len())].clone();
    let showing_symbol = match mode {
        PracticeMode::SymbolToRomanization => true,
        PracticeMode::RomanizationToSymbol => false,
        PracticeMode::Mixed => rng.random_bool(0.5),
    };
    let correct_index = rng.random_range(0..OPTION_COUNT);

    let mut options: [AnswerChoice; OPTION_COUNT] = Default::default();
    options[correct_index] = AnswerChoice::Text(answer_text(&current, showing_symbol).to_owned());

    let mut used = UsedOptions::seeded_with(&current);
    for (slot, option) in options.iter_mut().enumerate() {
        if slot == correct_index {
            continue;
        }
        let candidate = pick_distractor(rng, pool, &current, showing_symbol, &used)
            .or_else(|| pick_distractor(rng, catalog, &current, showing_symbol, &used));

        match candidate {
            Some(entry) => {
                *option = AnswerChoice::Text(answer_text(entry, showing_symbol).to_owned());
                used.insert(entry);
            }
            None => {
                log::debug!("no distractor for slot {slot} of {}", current.symbol());
            }
        }
    }

    Some(Question {
        entry: current,
        showing_symbol,
        options,
        correct_index,
    })
}

fn pick_distractor<'a, R: Rng>(
    rng: &mut R,
    source: &'a [SymbolEntry],
    current: &SymbolEntry,
    showing_symbol: bool,
    used: &UsedOptions,
) -> Option<&'a SymbolEntry> {
    if source.is_empty() {
        return None;
    }

    for _ in 0..MAX_DISTRACTOR_ATTEMPTS {
        let candidate = &source[rng.random_range(0..source.len())];

        if candidate == current {
            continue;
        }
        // A symbol-valued answer from the other script could share the
        // correct transliteration.
        if !showing_symbol && candidate.script() != current.script() {
            continue;
        }
        if used.overlaps(candidate) {
            continue;
        }
        return Some(candidate);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use kana_core::Catalog;
    use kana_core::model::Script;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(symbol: &str, romaji: &str, script: Script) -> SymbolEntry {
        SymbolEntry::new(symbol, romaji, script).unwrap()
    }

    fn distinct_texts(question: &Question) -> bool {
        let texts: Vec<_> = question
            .options()
            .iter()
            .filter(|o| !o.is_unavailable())
            .map(AnswerChoice::text)
            .collect();
        let unique: HashSet<_> = texts.iter().collect();
        unique.len() == texts.len()
    }

    #[test]
    fn empty_pool_yields_no_question() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&mut rng, &[], &[], PracticeMode::Mixed).is_none());
    }

    #[test]
    fn options_are_distinct_across_seeds() {
        let catalog = Catalog::standard();
        let all = catalog.all_symbols();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = generate(&mut rng, all, all, PracticeMode::Mixed).unwrap();
            assert!(distinct_texts(&question), "seed {seed}: {question:?}");
            assert_eq!(
                question.options()[question.correct_index()].text(),
                question.correct_text()
            );
            assert!(question.options().iter().all(|o| !o.is_unavailable()));
        }
    }

    #[test]
    fn mode_fixes_direction() {
        let catalog = Catalog::standard();
        let all = catalog.all_symbols();
        let mut rng = StdRng::seed_from_u64(7);
        let q = generate(&mut rng, all, all, PracticeMode::SymbolToRomanization).unwrap();
        assert!(q.showing_symbol());
        assert_eq!(q.prompt(), q.entry().symbol());

        let q = generate(&mut rng, all, all, PracticeMode::RomanizationToSymbol).unwrap();
        assert!(!q.showing_symbol());
        assert_eq!(q.prompt(), q.entry().transliteration());
        assert_eq!(q.correct_text(), q.entry().symbol());
    }

    #[test]
    fn small_pool_falls_back_to_catalog() {
        let catalog = Catalog::standard();
        let pool = vec![entry("あ", "a", Script::Hiragana)];
        let mut rng = StdRng::seed_from_u64(3);
        let q = generate(
            &mut rng,
            &pool,
            catalog.all_symbols(),
            PracticeMode::RomanizationToSymbol,
        )
        .unwrap();

        assert!(q.options().iter().all(|o| !o.is_unavailable()));
        assert!(distinct_texts(&q));
    }

    #[test]
    fn exhausted_slots_become_placeholders() {
        let pool = vec![
            entry("あ", "a", Script::Hiragana),
            entry("い", "i", Script::Hiragana),
        ];
        let mut rng = StdRng::seed_from_u64(11);
        let q = generate(&mut rng, &pool, &pool, PracticeMode::SymbolToRomanization).unwrap();

        let unavailable = q.options().iter().filter(|o| o.is_unavailable()).count();
        assert_eq!(unavailable, 2);
        assert!(!q.options()[q.correct_index()].is_unavailable());
        assert!(q.options().iter().any(|o| o.text() == UNAVAILABLE_PLACEHOLDER));
    }

    #[test]
    fn symbol_answers_stay_in_the_question_script() {
        let pool = vec![
            entry("あ", "a", Script::Hiragana),
            entry("い", "i", Script::Hiragana),
            entry("う", "u", Script::Hiragana),
            entry("ア", "a", Script::Katakana),
            entry("カ", "ka", Script::Katakana),
            entry("キ", "ki", Script::Katakana),
        ];
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = generate(&mut rng, &pool, &pool, PracticeMode::RomanizationToSymbol).unwrap();
            let script = q.entry().script();
            for option in q.options().iter().filter(|o| !o.is_unavailable()) {
                let owner = pool.iter().find(|e| e.symbol() == option.text()).unwrap();
                assert_eq!(owner.script(), script, "seed {seed}: {q:?}");
            }
        }
    }
}
