//! Character-level Unicode classification and kana normalization.

use serde::Serialize;

/// Script class of a single surface character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Kanji: receives furigana from the reading.
    Logographic,
    /// Hiragana or katakana: must match the reading verbatim.
    Phonetic,
    /// Anything else (digits, punctuation, Latin). Consumes no reading.
    Other,
}

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in dictionary readings,
/// so the block-level check is preferred over an exact range.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used symbols
/// (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn classify(c: char) -> CharClass {
    if is_kanji(c) {
        CharClass::Logographic
    } else if is_kana(c) {
        CharClass::Phonetic
    } else {
        CharClass::Other
    }
}

/// Map a single katakana character to hiragana.
///
/// Only ァ (U+30A1) through ヶ (U+30F6) have hiragana counterparts; the
/// prolonged sound mark ー and the other block symbols pass through.
pub fn to_hiragana_char(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Convert a katakana string to hiragana.
/// Non-katakana characters (ー, kanji, ASCII, etc.) are passed through unchanged,
/// so the output always has the same number of characters as the input.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(to_hiragana_char).collect()
}
