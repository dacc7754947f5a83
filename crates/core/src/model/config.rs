use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use thiserror::Error;

use crate::model::Script;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question limit must be > 0")]
    ZeroQuestionLimit,

    #[error("unknown practice mode: {0}")]
    UnknownMode(String),

    #[error("unknown script filter: {0}")]
    UnknownScript(String),

    #[error("unknown pool source: {0}")]
    UnknownSource(String),

    #[error("invalid question limit: {0}")]
    InvalidLimit(String),
}

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// Which side of a symbol the learner is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PracticeMode {
    /// Show the symbol, answer with the transliteration.
    SymbolToRomanization,
    /// Show the transliteration, answer with the symbol.
    RomanizationToSymbol,
    /// Pick a direction at random for every question.
    #[default]
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptFilter {
    Hiragana,
    Katakana,
    #[default]
    Both,
}

impl ScriptFilter {
    #[must_use]
    pub fn allows(self, script: Script) -> bool {
        match self {
            ScriptFilter::Hiragana => script == Script::Hiragana,
            ScriptFilter::Katakana => script == Script::Katakana,
            ScriptFilter::Both => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolSource {
    #[default]
    AllSymbols,
    /// Only symbols whose transliteration is mastered for their own script.
    MasteredOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionLimit {
    Limited(NonZeroU32),
    #[default]
    Unlimited,
}

const fn preset(n: u32) -> QuestionLimit {
    match NonZeroU32::new(n) {
        Some(n) => QuestionLimit::Limited(n),
        None => QuestionLimit::Unlimited,
    }
}

impl QuestionLimit {
    /// Limits offered by the setup screen.
    pub const PRESETS: [QuestionLimit; 4] = [
        preset(10),
        preset(20),
        preset(50),
        QuestionLimit::Unlimited,
    ];

    /// # Errors
    ///
    /// Returns `ConfigError::ZeroQuestionLimit` for `0`.
    pub fn limited(count: u32) -> Result<Self, ConfigError> {
        NonZeroU32::new(count)
            .map(Self::Limited)
            .ok_or(ConfigError::ZeroQuestionLimit)
    }

    #[must_use]
    pub fn count(self) -> Option<u32> {
        match self {
            QuestionLimit::Limited(n) => Some(n.get()),
            QuestionLimit::Unlimited => None,
        }
    }

    /// True once `asked` questions exhaust the limit.
    #[must_use]
    pub fn is_reached(self, asked: u32) -> bool {
        self.count().is_some_and(|limit| asked >= limit)
    }

    #[must_use]
    pub fn is_unlimited(self) -> bool {
        matches!(self, QuestionLimit::Unlimited)
    }
}

impl fmt::Display for QuestionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionLimit::Limited(n) => write!(f, "{n}"),
            QuestionLimit::Unlimited => write!(f, "Infinite"),
        }
    }
}

//
// ─── PARSING ───────────────────────────────────────────────────────────────────
//

impl FromStr for PracticeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kana" | "symbol" | "kana-to-romaji" => Ok(Self::SymbolToRomanization),
            "romaji" | "romanization" | "romaji-to-kana" => Ok(Self::RomanizationToSymbol),
            "mixed" => Ok(Self::Mixed),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}

impl FromStr for ScriptFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hiragana" => Ok(Self::Hiragana),
            "katakana" => Ok(Self::Katakana),
            "both" => Ok(Self::Both),
            _ => Err(ConfigError::UnknownScript(s.to_owned())),
        }
    }
}

impl FromStr for PoolSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::AllSymbols),
            "mastered" => Ok(Self::MasteredOnly),
            _ => Err(ConfigError::UnknownSource(s.to_owned())),
        }
    }
}

impl FromStr for QuestionLimit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unlimited") || trimmed.eq_ignore_ascii_case("infinite") {
            return Ok(Self::Unlimited);
        }
        let count: u32 = trimmed
            .parse()
            .map_err(|_| ConfigError::InvalidLimit(s.to_owned()))?;
        Self::limited(count)
    }
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Immutable description of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PracticeConfig {
    mode: PracticeMode,
    script: ScriptFilter,
    source: PoolSource,
    question_limit: QuestionLimit,
}

impl PracticeConfig {
    #[must_use]
    pub fn new(
        mode: PracticeMode,
        script: ScriptFilter,
        source: PoolSource,
        question_limit: QuestionLimit,
    ) -> Self {
        Self {
            mode,
            script,
            source,
            question_limit,
        }
    }

    #[must_use]
    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    #[must_use]
    pub fn script(&self) -> ScriptFilter {
        self.script
    }

    #[must_use]
    pub fn source(&self) -> PoolSource {
        self.source
    }

    #[must_use]
    pub fn question_limit(&self) -> QuestionLimit {
        self.question_limit
    }
}

/// Setup-screen selections before validation.
///
/// `question_limit: None` means unlimited.
#[derive(Clone, Debug, Default)]
pub struct PracticeConfigDraft {
    pub mode: PracticeMode,
    pub script: ScriptFilter,
    pub source: PoolSource,
    pub question_limit: Option<u32>,
}

impl PracticeConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `ConfigError::ZeroQuestionLimit` if a limit of zero was chosen.
    pub fn validate(self) -> Result<PracticeConfig, ConfigError> {
        let question_limit = match self.question_limit {
            Some(count) => QuestionLimit::limited(count)?,
            None => QuestionLimit::Unlimited,
        };

        Ok(PracticeConfig::new(
            self.mode,
            self.script,
            self.source,
            question_limit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_setup_screen() {
        let config = PracticeConfig::default();
        assert_eq!(config.mode(), PracticeMode::Mixed);
        assert_eq!(config.script(), ScriptFilter::Both);
        assert_eq!(config.source(), PoolSource::AllSymbols);
        assert!(config.question_limit().is_unlimited());
    }

    #[test]
    fn draft_rejects_zero_limit() {
        let draft = PracticeConfigDraft {
            question_limit: Some(0),
            ..PracticeConfigDraft::new()
        };
        assert_eq!(draft.validate().unwrap_err(), ConfigError::ZeroQuestionLimit);
    }

    #[test]
    fn draft_without_limit_is_unlimited() {
        let config = PracticeConfigDraft::new().validate().unwrap();
        assert_eq!(config.question_limit(), QuestionLimit::Unlimited);
    }

    #[test]
    fn limit_is_reached_only_when_finite() {
        let ten = QuestionLimit::limited(10).unwrap();
        assert!(!ten.is_reached(9));
        assert!(ten.is_reached(10));
        assert!(!QuestionLimit::Unlimited.is_reached(u32::MAX));
    }

    #[test]
    fn presets_cover_setup_choices() {
        let counts: Vec<_> = QuestionLimit::PRESETS.iter().map(|l| l.count()).collect();
        assert_eq!(counts, vec![Some(10), Some(20), Some(50), None]);
    }

    #[test]
    fn parses_short_names() {
        assert_eq!(
            "kana".parse::<PracticeMode>().unwrap(),
            PracticeMode::SymbolToRomanization
        );
        assert_eq!("KATAKANA".parse::<ScriptFilter>().unwrap(), ScriptFilter::Katakana);
        assert_eq!("mastered".parse::<PoolSource>().unwrap(), PoolSource::MasteredOnly);
        assert_eq!("unlimited".parse::<QuestionLimit>().unwrap(), QuestionLimit::Unlimited);
        assert_eq!("20".parse::<QuestionLimit>().unwrap().count(), Some(20));
        assert!(matches!(
            "0".parse::<QuestionLimit>(),
            Err(ConfigError::ZeroQuestionLimit)
        ));
        assert!(matches!(
            "lots".parse::<QuestionLimit>(),
            Err(ConfigError::InvalidLimit(_))
        ));
    }

    #[test]
    fn script_filter_allows() {
        assert!(ScriptFilter::Both.allows(Script::Katakana));
        assert!(ScriptFilter::Hiragana.allows(Script::Hiragana));
        assert!(!ScriptFilter::Hiragana.allows(Script::Katakana));
    }
}
