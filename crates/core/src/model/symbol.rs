use thiserror::Error;

use crate::model::Script;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("transliteration for {symbol} cannot be empty")]
    EmptyTransliteration { symbol: String },
}

/// A drillable symbol with its romanization and script tag.
///
/// Entries are only created through [`SymbolEntry::new`], so the
/// transliteration is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    symbol: String,
    transliteration: String,
    script: Script,
}

impl SymbolEntry {
    /// # Errors
    ///
    /// Returns `SymbolError` if the symbol or the transliteration is blank.
    pub fn new(
        symbol: impl Into<String>,
        transliteration: impl Into<String>,
        script: Script,
    ) -> Result<Self, SymbolError> {
        let symbol = symbol.into().trim().to_owned();
        let transliteration = transliteration.into().trim().to_owned();

        if symbol.is_empty() {
            return Err(SymbolError::EmptySymbol);
        }
        if transliteration.is_empty() {
            return Err(SymbolError::EmptyTransliteration { symbol });
        }

        Ok(Self {
            symbol,
            transliteration,
            script,
        })
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn transliteration(&self) -> &str {
        &self.transliteration
    }

    #[must_use]
    pub fn script(&self) -> Script {
        self.script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_transliteration() {
        let err = SymbolEntry::new("あ", "  ", Script::Hiragana).unwrap_err();
        assert_eq!(
            err,
            SymbolError::EmptyTransliteration {
                symbol: "あ".into()
            }
        );
    }

    #[test]
    fn rejects_blank_symbol() {
        let err = SymbolEntry::new("", "a", Script::Hiragana).unwrap_err();
        assert_eq!(err, SymbolError::EmptySymbol);
    }

    #[test]
    fn trims_fields() {
        let entry = SymbolEntry::new(" ア ", " a ", Script::Katakana).unwrap();
        assert_eq!(entry.symbol(), "ア");
        assert_eq!(entry.transliteration(), "a");
        assert_eq!(entry.script(), Script::Katakana);
    }
}
