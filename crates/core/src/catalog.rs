//! Static symbol tables for both syllabaries.
//!
//! The catalog walks fixed syllable grids (gojuon, dakuon, handakuon, yoon)
//! per script and pairs every non-empty cell with its transliteration.
//! Cells without a mapping are skipped, so every entry has a romanization.

use std::collections::HashSet;

use crate::model::{Script, SymbolEntry};

/// Grid rows; empty strings are holes in the table.
pub type Grid = &'static [&'static [&'static str]];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    /// Base syllables.
    Gojuon,
    /// Voiced variants (g, z, d, b rows).
    Dakuon,
    /// Semi-voiced variants (p row).
    Handakuon,
    /// Combination (palatalized) digraphs.
    Yoon,
}

impl GridKind {
    pub const ALL: [GridKind; 4] = [
        GridKind::Gojuon,
        GridKind::Dakuon,
        GridKind::Handakuon,
        GridKind::Yoon,
    ];
}

const HIRAGANA_GOJUON: Grid = &[
    &["あ", "い", "う", "え", "お"],
    &["か", "き", "く", "け", "こ"],
    &["さ", "し", "す", "せ", "そ"],
    &["た", "ち", "つ", "て", "と"],
    &["な", "に", "ぬ", "ね", "の"],
    &["は", "ひ", "ふ", "へ", "ほ"],
    &["ま", "み", "む", "め", "も"],
    &["や", "", "ゆ", "", "よ"],
    &["ら", "り", "る", "れ", "ろ"],
    &["わ", "", "", "", "を"],
    &["", "", "ん", "", ""],
];

const HIRAGANA_DAKUON: Grid = &[
    &["が", "ぎ", "ぐ", "げ", "ご"],
    &["ざ", "じ", "ず", "ぜ", "ぞ"],
    &["だ", "ぢ", "づ", "で", "ど"],
    &["ば", "び", "ぶ", "べ", "ぼ"],
];

const HIRAGANA_HANDAKUON: Grid = &[&["ぱ", "ぴ", "ぷ", "ぺ", "ぽ"]];

const HIRAGANA_YOON: Grid = &[
    &["きゃ", "きゅ", "きょ"],
    &["ぎゃ", "ぎゅ", "ぎょ"],
    &["しゃ", "しゅ", "しょ"],
    &["じゃ", "じゅ", "じょ"],
    &["ちゃ", "ちゅ", "ちょ"],
    &["にゃ", "にゅ", "にょ"],
    &["ひゃ", "ひゅ", "ひょ"],
    &["みゃ", "みゅ", "みょ"],
    &["りゃ", "りゅ", "りょ"],
];

const KATAKANA_GOJUON: Grid = &[
    &["ア", "イ", "ウ", "エ", "オ"],
    &["カ", "キ", "ク", "ケ", "コ"],
    &["サ", "シ", "ス", "セ", "ソ"],
    &["タ", "チ", "ツ", "テ", "ト"],
    &["ナ", "ニ", "ヌ", "ネ", "ノ"],
    &["ハ", "ヒ", "フ", "ヘ", "ホ"],
    &["マ", "ミ", "ム", "メ", "モ"],
    &["ヤ", "", "ユ", "", "ヨ"],
    &["ラ", "リ", "ル", "レ", "ロ"],
    &["ワ", "", "", "", "ヲ"],
    &["", "", "ン", "", ""],
];

const KATAKANA_DAKUON: Grid = &[
    &["ガ", "ギ", "グ", "ゲ", "ゴ"],
    &["ザ", "ジ", "ズ", "ゼ", "ゾ"],
    &["ダ", "ヂ", "ヅ", "デ", "ド"],
    &["バ", "ビ", "ブ", "ベ", "ボ"],
];

const KATAKANA_HANDAKUON: Grid = &[&["パ", "ピ", "プ", "ペ", "ポ"]];

const KATAKANA_YOON: Grid = &[
    &["キャ", "キュ", "キョ"],
    &["ギャ", "ギュ", "ギョ"],
    &["シャ", "シュ", "ショ"],
    &["ジャ", "ジュ", "ジョ"],
    &["チャ", "チュ", "チョ"],
    &["ニャ", "ニュ", "ニョ"],
    &["ヒャ", "ヒュ", "ヒョ"],
    &["ミャ", "ミュ", "ミョ"],
    &["リャ", "リュ", "リョ"],
];

/// Symbol → transliteration. Some entries (ぢゃ row) have no grid cell.
#[rustfmt::skip]
const TRANSLITERATIONS: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"), ("ん", "n"),
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("だ", "da"), ("ぢ", "ji(di)"), ("づ", "zu(du)"), ("で", "de"), ("ど", "do"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("ぢゃ", "ja(chi)"), ("ぢゅ", "ju(chi)"), ("ぢょ", "jo(chi)"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
    ("ア", "a"), ("イ", "i"), ("ウ", "u"), ("エ", "e"), ("オ", "o"),
    ("カ", "ka"), ("キ", "ki"), ("ク", "ku"), ("ケ", "ke"), ("コ", "ko"),
    ("サ", "sa"), ("シ", "shi"), ("ス", "su"), ("セ", "se"), ("ソ", "so"),
    ("タ", "ta"), ("チ", "chi"), ("ツ", "tsu"), ("テ", "te"), ("ト", "to"),
    ("ナ", "na"), ("ニ", "ni"), ("ヌ", "nu"), ("ネ", "ne"), ("ノ", "no"),
    ("ハ", "ha"), ("ヒ", "hi"), ("フ", "fu"), ("ヘ", "he"), ("ホ", "ho"),
    ("マ", "ma"), ("ミ", "mi"), ("ム", "mu"), ("メ", "me"), ("モ", "mo"),
    ("ヤ", "ya"), ("ユ", "yu"), ("ヨ", "yo"),
    ("ラ", "ra"), ("リ", "ri"), ("ル", "ru"), ("レ", "re"), ("ロ", "ro"),
    ("ワ", "wa"), ("ヲ", "wo"), ("ン", "n"),
    ("ガ", "ga"), ("ギ", "gi"), ("グ", "gu"), ("ゲ", "ge"), ("ゴ", "go"),
    ("ザ", "za"), ("ジ", "ji"), ("ズ", "zu"), ("ゼ", "ze"), ("ゾ", "zo"),
    ("ダ", "da"), ("ヂ", "ji(di)"), ("ヅ", "zu(du)"), ("デ", "de"), ("ド", "do"),
    ("バ", "ba"), ("ビ", "bi"), ("ブ", "bu"), ("ベ", "be"), ("ボ", "bo"),
    ("パ", "pa"), ("ピ", "pi"), ("プ", "pu"), ("ペ", "pe"), ("ポ", "po"),
    ("キャ", "kya"), ("キュ", "kyu"), ("キョ", "kyo"),
    ("ギャ", "gya"), ("ギュ", "gyu"), ("ギョ", "gyo"),
    ("シャ", "sha"), ("シュ", "shu"), ("ショ", "sho"),
    ("ジャ", "ja"), ("ジュ", "ju"), ("ジョ", "jo"),
    ("チャ", "cha"), ("チュ", "chu"), ("チョ", "cho"),
    ("ヂャ", "ja(chi)"), ("ヂュ", "ju(chi)"), ("ヂョ", "jo(chi)"),
    ("ニャ", "nya"), ("ニュ", "nyu"), ("ニョ", "nyo"),
    ("ヒャ", "hya"), ("ヒュ", "hyu"), ("ヒョ", "hyo"),
    ("ミャ", "mya"), ("ミュ", "myu"), ("ミョ", "myo"),
    ("リャ", "rya"), ("リュ", "ryu"), ("リョ", "ryo"),
];

/// Looks up the canonical transliteration of a symbol in the static table.
#[must_use]
pub fn transliteration_of(symbol: &str) -> Option<&'static str> {
    TRANSLITERATIONS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, t)| *t)
}

/// Read-only, deduplicated list of drillable symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<SymbolEntry>,
}

impl Catalog {
    /// Build the catalog from the built-in tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut candidates = Vec::new();
        for script in Script::ALL {
            for kind in GridKind::ALL {
                for row in Self::grid(script, kind) {
                    for cell in row.iter().filter(|cell| !cell.is_empty()) {
                        let Some(romaji) = transliteration_of(cell) else {
                            continue;
                        };
                        // Blank mappings are rejected by the constructor.
                        if let Ok(entry) = SymbolEntry::new(*cell, romaji, script) {
                            candidates.push(entry);
                        }
                    }
                }
            }
        }
        Self::from_entries(candidates)
    }

    /// Build a catalog from arbitrary entries, keeping the first occurrence
    /// of each (symbol, script) pair.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = SymbolEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|e| seen.insert((e.symbol().to_owned(), e.script())))
            .collect();
        Self { entries }
    }

    /// Reference table rows for a script and grid kind.
    #[must_use]
    pub fn grid(script: Script, kind: GridKind) -> Grid {
        match (script, kind) {
            (Script::Hiragana, GridKind::Gojuon) => HIRAGANA_GOJUON,
            (Script::Hiragana, GridKind::Dakuon) => HIRAGANA_DAKUON,
            (Script::Hiragana, GridKind::Handakuon) => HIRAGANA_HANDAKUON,
            (Script::Hiragana, GridKind::Yoon) => HIRAGANA_YOON,
            (Script::Katakana, GridKind::Gojuon) => KATAKANA_GOJUON,
            (Script::Katakana, GridKind::Dakuon) => KATAKANA_DAKUON,
            (Script::Katakana, GridKind::Handakuon) => KATAKANA_HANDAKUON,
            (Script::Katakana, GridKind::Yoon) => KATAKANA_YOON,
        }
    }

    #[must_use]
    pub fn all_symbols(&self) -> &[SymbolEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn transliteration_of(&self, symbol: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.symbol() == symbol)
            .map(SymbolEntry::transliteration)
    }

    /// Reverse lookup used to render mastered transliterations.
    #[must_use]
    pub fn symbol_for(&self, script: Script, transliteration: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.script() == script && e.transliteration() == transliteration)
            .map(SymbolEntry::symbol)
    }
}
