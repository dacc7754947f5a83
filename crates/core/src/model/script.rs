use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two Japanese syllabaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::Hiragana, Script::Katakana];
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Hiragana => write!(f, "Hiragana"),
            Script::Katakana => write!(f, "Katakana"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_persisted_section_key() {
        assert_eq!(
            serde_json::to_string(&Script::Hiragana).unwrap(),
            "\"hiragana\""
        );
        assert_eq!(
            serde_json::to_string(&Script::Katakana).unwrap(),
            "\"katakana\""
        );
    }
}
