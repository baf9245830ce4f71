use tracing::debug;

use crate::unicode::{to_hiragana_char, CharClass};

use super::trace::TraceStep;
use super::Segment;

/// Split `total` into `n` contiguous lengths as evenly as possible; the
/// first `total % n` parts get the extra char.
pub(super) fn even_split(total: usize, n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let base = total / n;
    let extra = total % n;
    (0..n).map(|i| base + usize::from(i < extra)).collect()
}

/// Best-effort alignment used when the search finds nothing.
///
/// Kanji share the reading evenly in surface order. Kana take one reading
/// char only when it is the same kana; other characters take nothing. A
/// surface without kanji leaves the unmatched reading in a trailing segment
/// with empty text.
pub(super) fn proportional(
    units: &[(char, CharClass)],
    reading: &[char],
    trace: &mut Vec<TraceStep>,
) -> Vec<Segment> {
    let kanji_count = units
        .iter()
        .filter(|&&(_, class)| class == CharClass::Logographic)
        .count();
    trace.push(TraceStep::Fallback {
        logographic_units: kanji_count,
        reading_len: reading.len(),
    });
    debug!(kanji_count, reading_len = reading.len(), "proportional fallback");

    let mut parts = even_split(reading.len(), kanji_count).into_iter();
    let mut cursor = 0;
    let mut segments = Vec::with_capacity(units.len() + 1);

    for &(ch, class) in units {
        let start = cursor;
        let furigana = match class {
            CharClass::Logographic => {
                let len = parts.next().unwrap_or(0).min(reading.len() - cursor);
                cursor += len;
                reading[start..cursor].iter().collect()
            }
            CharClass::Phonetic => {
                if reading.get(cursor) == Some(&to_hiragana_char(ch)) {
                    cursor += 1;
                    ch.to_string()
                } else {
                    String::new()
                }
            }
            CharClass::Other => String::new(),
        };
        segments.push(Segment::unit(ch, class, furigana, start..cursor));
    }

    if kanji_count == 0 && cursor < reading.len() {
        segments.push(Segment {
            text: String::new(),
            class: None,
            furigana: reading[cursor..].iter().collect(),
            reading: cursor..reading.len(),
        });
    }
    segments
}
