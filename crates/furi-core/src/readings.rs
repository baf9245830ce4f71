//! Per-kanji reading candidates.
//!
//! Raw candidates follow the kanjidic conventions: `.` separates the stem
//! from its okurigana (`い.る`), and a leading `-` marks a reading used only
//! as a suffix, typically in its rendaku form (`-い.り`). The alignment engine
//! never mutates a provider; build one up front and share it by reference.

use std::collections::HashMap;

use crate::unicode::katakana_to_hiragana;

const OKURIGANA_MARK: char = '.';
const SUFFIX_MARK: char = '-';

/// Source of raw reading candidates for single kanji.
///
/// Candidate order is significant: the aligner takes the first candidate
/// whose continuation succeeds.
pub trait ReadingProvider: Send + Sync {
    /// Raw candidates for `kanji`, or an empty slice when it is unknown.
    fn candidates(&self, kanji: char) -> &[String];
}

impl ReadingProvider for HashMap<char, Vec<String>> {
    fn candidates(&self, kanji: char) -> &[String] {
        self.get(&kanji).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Immutable kanji → candidates table.
#[derive(Debug, Clone, Default)]
pub struct ReadingTable {
    entries: HashMap<char, Vec<String>>,
}

impl ReadingTable {
    /// Build from `(kanji, candidates)` pairs. A kanji listed twice keeps
    /// both candidate lists, in order of appearance.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, Vec<S>)>,
        S: Into<String>,
    {
        let mut map: HashMap<char, Vec<String>> = HashMap::new();
        for (kanji, readings) in entries {
            map.entry(kanji)
                .or_default()
                .extend(readings.into_iter().map(Into::into));
        }
        Self { entries: map }
    }

    /// Returns (kanji_count, candidate_count).
    pub fn stats(&self) -> (usize, usize) {
        let candidates = self.entries.values().map(Vec::len).sum();
        (self.entries.len(), candidates)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(char, Vec<S>)> for ReadingTable {
    fn from_iter<T: IntoIterator<Item = (char, Vec<S>)>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

impl ReadingProvider for ReadingTable {
    fn candidates(&self, kanji: char) -> &[String] {
        self.entries.candidates(kanji)
    }
}

/// Strip okurigana and suffix markers and convert to hiragana.
pub fn normalize_candidate(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|&c| c != OKURIGANA_MARK && c != SUFFIX_MARK)
        .collect();
    katakana_to_hiragana(&stripped)
}

/// Usable reading variants of a raw candidate, in trial order.
///
/// 1. the whole reading with markers removed (`い.る` → `いる`)
/// 2. the stem before the okurigana mark (`い.る` → `い`)
/// 3. the reading without its suffix mark (`-り` → `り`)
///
/// Empty and duplicate variants are dropped.
pub fn candidate_variants(raw: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::with_capacity(3);
    let mut push = |v: String| {
        if !v.is_empty() && !variants.contains(&v) {
            variants.push(v);
        }
    };

    push(normalize_candidate(raw));
    if let Some((stem, _)) = raw.split_once(OKURIGANA_MARK) {
        push(normalize_candidate(stem));
    }
    if let Some(rest) = raw.strip_prefix(SUFFIX_MARK) {
        push(normalize_candidate(rest));
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_candidate() {
        assert_eq!(normalize_candidate("アキ"), "あき");
        assert_eq!(normalize_candidate("い.る"), "いる");
        assert_eq!(normalize_candidate("-い.り"), "いり");
        assert_eq!(normalize_candidate("お-"), "お");
        assert_eq!(normalize_candidate(""), "");
    }

    #[test]
    fn test_variants_plain_on_reading() {
        assert_eq!(candidate_variants("ケン"), vec!["けん"]);
    }

    #[test]
    fn test_variants_okurigana() {
        assert_eq!(candidate_variants("み.える"), vec!["みえる", "み"]);
    }

    #[test]
    fn test_variants_suffix_mark() {
        assert_eq!(candidate_variants("-い.り"), vec!["いり", "い"]);
        assert_eq!(candidate_variants("-かわ"), vec!["かわ"]);
    }

    #[test]
    fn test_variants_drop_empty() {
        assert!(candidate_variants("").is_empty());
        assert!(candidate_variants("-.").is_empty());
    }

    #[test]
    fn test_table_lookup() {
        let table = ReadingTable::from_entries([
            ('秋', vec!["シュウ", "あき"]),
            ('田', vec!["デン", "た"]),
        ]);
        assert_eq!(table.candidates('秋'), ["シュウ", "あき"]);
        assert!(table.candidates('川').is_empty());
        assert_eq!(table.stats(), (2, 4));
    }

    #[test]
    fn test_table_merges_duplicate_kanji() {
        let table: ReadingTable = [('川', vec!["セン"]), ('川', vec!["かわ"])]
            .into_iter()
            .collect();
        assert_eq!(table.candidates('川'), ["セン", "かわ"]);
    }

    #[test]
    fn test_hashmap_provider() {
        let mut map = HashMap::new();
        map.insert('内', vec!["ナイ".to_string()]);
        assert_eq!(map.candidates('内'), ["ナイ"]);
        assert!(map.candidates('外').is_empty());
    }
}
