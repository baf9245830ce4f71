//! Furigana alignment: split a reading across the characters of its surface.
//!
//! A depth-first search walks the surface left to right while consuming the
//! (hiragana-normalized) reading, trying each kanji's reading candidates in
//! provider order. When no full alignment exists, a proportional split is
//! returned instead, so `align` always yields one segment per surface char.

mod batch;
mod fallback;
mod search;
mod trace;

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::readings::ReadingProvider;
use crate::unicode::{classify, katakana_to_hiragana, CharClass};

pub use batch::align_batch;
pub use trace::{MatchKind, TraceStep};

/// What the last kanji does when none of its candidates fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    /// Take every remaining reading character.
    ///
    /// Kana after the last kanji are left with nothing to match once the
    /// rest is absorbed, so `謎る`/`なぞる` with no reading for 謎 still ends
    /// in the fallback split.
    #[default]
    Absorb,
    /// Fail the branch like any other kanji.
    Strict,
}

/// Order in which plain and voiced forms of a kanji's readings are tried.
///
/// A plain form and its own voiced form never both match at one position,
/// so the choice only matters between different candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RendakuPrecedence {
    /// Each variant's plain form, then its voiced form, variant by variant.
    #[default]
    PerVariant,
    /// Every plain form before any voiced form.
    LiteralFirst,
    /// Every voiced form before any plain form.
    RendakuFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlignOptions {
    #[serde(default)]
    pub tail_policy: TailPolicy,
    #[serde(default)]
    pub rendaku_precedence: RendakuPrecedence,
}

/// One surface character and the part of the reading assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The surface character, or empty for reading left over after the
    /// last unit.
    pub text: String,
    /// `None` only for the leftover-reading segment.
    pub class: Option<CharClass>,
    /// Furigana to display. Empty for kana that matched the reading.
    pub furigana: String,
    /// Reading chars consumed by this segment.
    pub reading: Range<usize>,
}

impl Segment {
    pub(crate) fn unit(ch: char, class: CharClass, furigana: String, reading: Range<usize>) -> Self {
        Self {
            text: ch.to_string(),
            class: Some(class),
            furigana,
            reading,
        }
    }

    pub fn is_logographic(&self) -> bool {
        self.class == Some(CharClass::Logographic)
    }

    pub fn consumed(&self) -> usize {
        self.reading.len()
    }
}

/// Ordered segments covering the whole surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub segments: Vec<Segment>,
}

impl Alignment {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Concatenated segment texts; always equals the aligned surface.
    pub fn surface(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Total reading chars consumed across all segments.
    pub fn consumed(&self) -> usize {
        self.segments.iter().map(Segment::consumed).sum()
    }

    /// Furigana of the kanji segments, in surface order.
    pub fn kanji_furigana(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.is_logographic())
            .map(|s| s.furigana.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Result of a single `align` call.
#[derive(Debug, Clone, Serialize)]
pub struct AlignOutcome {
    pub alignment: Alignment,
    /// `true` when the search consumed the whole reading; `false` when the
    /// proportional fallback produced `alignment`.
    pub succeeded: bool,
    pub trace: Vec<TraceStep>,
}

/// Aligns readings to surfaces using a shared, read-only reading provider.
#[derive(Debug)]
pub struct Aligner<'a, P: ReadingProvider + ?Sized> {
    provider: &'a P,
    options: AlignOptions,
}

impl<P: ReadingProvider + ?Sized> Clone for Aligner<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ReadingProvider + ?Sized> Copy for Aligner<'_, P> {}

impl<'a, P: ReadingProvider + ?Sized> Aligner<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self::with_options(provider, AlignOptions::default())
    }

    pub fn with_options(provider: &'a P, options: AlignOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> AlignOptions {
        self.options
    }

    /// Align `reading` (hiragana or katakana) to `surface`.
    ///
    /// Never fails: malformed or unmatched input falls back to a
    /// proportional split, reported by `succeeded == false`.
    pub fn align(&self, surface: &str, reading: &str) -> AlignOutcome {
        let _span = debug_span!("align", surface, reading).entered();
        let reading: Vec<char> = katakana_to_hiragana(reading).chars().collect();
        let units: Vec<(char, CharClass)> = surface.chars().map(|c| (c, classify(c))).collect();

        let mut search = search::Search::new(self.provider, self.options, &units, &reading);
        if let Some(segments) = search.run() {
            debug!(segments = segments.len(), "aligned");
            return AlignOutcome {
                alignment: Alignment { segments },
                succeeded: true,
                trace: search.into_trace(),
            };
        }

        let mut trace = search.into_trace();
        let segments = fallback::proportional(&units, &reading, &mut trace);
        debug!(segments = segments.len(), "no exact alignment, used fallback");
        AlignOutcome {
            alignment: Alignment { segments },
            succeeded: false,
            trace,
        }
    }
}
