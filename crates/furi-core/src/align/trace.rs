use serde::Serialize;

/// How a kanji variant was matched against the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Literal,
    Rendaku,
}

/// One decision taken by the aligner, in the order it was taken.
///
/// `position` is the surface char index and `reading_pos` the reading
/// cursor (both in chars) at the time of the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceStep {
    /// Raw candidates fetched for a kanji.
    Candidates {
        position: usize,
        reading_pos: usize,
        kanji: char,
        candidates: Vec<String>,
    },
    /// A variant matched a prefix of the remaining reading; the search descends.
    Match {
        position: usize,
        reading_pos: usize,
        variant: String,
        matched: String,
        kind: MatchKind,
    },
    /// A kana unit compared against the reading.
    Phonetic {
        position: usize,
        reading_pos: usize,
        kana: char,
        matched: bool,
    },
    /// A unit that consumes no reading.
    Other {
        position: usize,
        reading_pos: usize,
        ch: char,
    },
    /// The last kanji took every remaining reading character.
    TailAbsorbed {
        position: usize,
        reading_pos: usize,
        absorbed: String,
    },
    /// Every branch from this state failed.
    Backtrack { position: usize, reading_pos: usize },
    /// The search failed at the root; the proportional split was used.
    Fallback {
        logographic_units: usize,
        reading_len: usize,
    },
}
