use std::collections::HashSet;

use tracing::debug;

use crate::readings::{candidate_variants, ReadingProvider};
use crate::rendaku::rendaku;
use crate::unicode::{to_hiragana_char, CharClass};

use super::trace::{MatchKind, TraceStep};
use super::{AlignOptions, RendakuPrecedence, Segment, TailPolicy};

/// Backtracking state for one (surface, reading) pair.
///
/// `step(j, k)` aligns `units[j..]` against `reading[k..]`. States that were
/// fully explored without success are remembered in `dead`; the search is
/// pure, so a dead state stays dead.
pub(super) struct Search<'s, P: ReadingProvider + ?Sized> {
    provider: &'s P,
    options: AlignOptions,
    units: &'s [(char, CharClass)],
    reading: &'s [char],
    last_kanji: Option<usize>,
    dead: HashSet<(usize, usize)>,
    trace: Vec<TraceStep>,
}

impl<'s, P: ReadingProvider + ?Sized> Search<'s, P> {
    pub(super) fn new(
        provider: &'s P,
        options: AlignOptions,
        units: &'s [(char, CharClass)],
        reading: &'s [char],
    ) -> Self {
        let last_kanji = units
            .iter()
            .rposition(|&(_, class)| class == CharClass::Logographic);
        Self {
            provider,
            options,
            units,
            reading,
            last_kanji,
            dead: HashSet::new(),
            trace: Vec::new(),
        }
    }

    /// Segments for the whole surface, or `None` if no branch consumes the
    /// reading exactly.
    pub(super) fn run(&mut self) -> Option<Vec<Segment>> {
        // Segments are pushed innermost-first while unwinding.
        let mut segments = self.step(0, 0)?;
        segments.reverse();
        Some(segments)
    }

    pub(super) fn into_trace(self) -> Vec<TraceStep> {
        self.trace
    }

    fn step(&mut self, j: usize, k: usize) -> Option<Vec<Segment>> {
        let Some(&(ch, class)) = self.units.get(j) else {
            return (k == self.reading.len()).then(Vec::new);
        };
        if self.dead.contains(&(j, k)) {
            return None;
        }

        let result = match class {
            CharClass::Logographic => self.step_kanji(j, k, ch),
            CharClass::Phonetic => self.step_kana(j, k, ch),
            CharClass::Other => {
                self.trace.push(TraceStep::Other {
                    position: j,
                    reading_pos: k,
                    ch,
                });
                self.step(j + 1, k).map(|mut rest| {
                    rest.push(Segment::unit(ch, class, String::new(), k..k));
                    rest
                })
            }
        };

        if result.is_none() {
            self.dead.insert((j, k));
            self.trace.push(TraceStep::Backtrack {
                position: j,
                reading_pos: k,
            });
        }
        result
    }

    fn step_kana(&mut self, j: usize, k: usize, kana: char) -> Option<Vec<Segment>> {
        let matched = self.reading.get(k) == Some(&to_hiragana_char(kana));
        self.trace.push(TraceStep::Phonetic {
            position: j,
            reading_pos: k,
            kana,
            matched,
        });
        if !matched {
            return None;
        }
        let mut rest = self.step(j + 1, k + 1)?;
        rest.push(Segment::unit(
            kana,
            CharClass::Phonetic,
            String::new(),
            k..k + 1,
        ));
        Some(rest)
    }

    fn step_kanji(&mut self, j: usize, k: usize, kanji: char) -> Option<Vec<Segment>> {
        let provider = self.provider;
        let raw = provider.candidates(kanji);
        self.trace.push(TraceStep::Candidates {
            position: j,
            reading_pos: k,
            kanji,
            candidates: raw.to_vec(),
        });

        for (form, variant, kind) in self.forms(raw, j > 0) {
            let len = form.chars().count();
            if !self.prefix_matches(k, &form) {
                continue;
            }
            self.trace.push(TraceStep::Match {
                position: j,
                reading_pos: k,
                variant,
                matched: form.clone(),
                kind,
            });
            if let Some(mut rest) = self.step(j + 1, k + len) {
                rest.push(Segment::unit(kanji, CharClass::Logographic, form, k..k + len));
                return Some(rest);
            }
        }

        let end = self.reading.len();
        if self.options.tail_policy == TailPolicy::Absorb && self.last_kanji == Some(j) && k < end
        {
            let absorbed: String = self.reading[k..].iter().collect();
            debug!(position = j, absorbed = %absorbed, "tail absorption");
            self.trace.push(TraceStep::TailAbsorbed {
                position: j,
                reading_pos: k,
                absorbed: absorbed.clone(),
            });
            if let Some(mut rest) = self.step(j + 1, end) {
                rest.push(Segment::unit(kanji, CharClass::Logographic, absorbed, k..end));
                return Some(rest);
            }
        }
        None
    }

    /// Every distinct form to try for a kanji, as `(form, variant, kind)`.
    fn forms(&self, raw: &[String], voiceable: bool) -> Vec<(String, String, MatchKind)> {
        let variants: Vec<String> = raw.iter().flat_map(|r| candidate_variants(r)).collect();
        let voiced = |v: &String| {
            let r = rendaku(v);
            (voiceable && r != *v).then_some(r)
        };

        let mut out: Vec<(String, String, MatchKind)> = Vec::new();
        let mut push = |form: Option<String>, variant: &String, kind: MatchKind| {
            if let Some(form) = form {
                if !out.iter().any(|(f, _, _)| *f == form) {
                    out.push((form, variant.clone(), kind));
                }
            }
        };
        match self.options.rendaku_precedence {
            RendakuPrecedence::PerVariant => {
                for v in &variants {
                    push(Some(v.clone()), v, MatchKind::Literal);
                    push(voiced(v), v, MatchKind::Rendaku);
                }
            }
            RendakuPrecedence::LiteralFirst => {
                for v in &variants {
                    push(Some(v.clone()), v, MatchKind::Literal);
                }
                for v in &variants {
                    push(voiced(v), v, MatchKind::Rendaku);
                }
            }
            RendakuPrecedence::RendakuFirst => {
                for v in &variants {
                    push(voiced(v), v, MatchKind::Rendaku);
                }
                for v in &variants {
                    push(Some(v.clone()), v, MatchKind::Literal);
                }
            }
        }
        out
    }

    fn prefix_matches(&self, k: usize, form: &str) -> bool {
        let mut rest = self.reading.get(k..).unwrap_or_default().iter();
        form.chars().all(|c| rest.next() == Some(&c))
    }
}
