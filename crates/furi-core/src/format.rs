//! Text rendering of alignments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::align::{Alignment, Segment};
use crate::unicode::CharClass;

/// Bracket style for [`format`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FuriganaDisplay {
    /// `秋[あき]田[た]`: furigana only where there is some.
    Sparse,
    /// `[あき][た]`: one bracket per kanji, empty or not, kanji omitted.
    #[default]
    Dense,
    /// `[秋|あき][田|た]`: each annotated kanji paired with its furigana.
    Inline,
}

impl FromStr for FuriganaDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sparse" => Ok(Self::Sparse),
            "dense" => Ok(Self::Dense),
            "inline" => Ok(Self::Inline),
            other => Err(format!("unknown furigana display: {other}")),
        }
    }
}

impl fmt::Display for FuriganaDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
            Self::Inline => "inline",
        })
    }
}

/// Whether a segment carries furigana that should be shown.
fn annotated(seg: &Segment) -> bool {
    !seg.furigana.is_empty() && seg.class != Some(CharClass::Phonetic)
}

/// Leftover reading is always bracketed so it never reads as surface kana.
fn push_bracketed(out: &mut String, furigana: &str) {
    if !furigana.is_empty() {
        out.push('[');
        out.push_str(furigana);
        out.push(']');
    }
}

/// Render an alignment as a single line.
pub fn format(alignment: &Alignment, display: FuriganaDisplay) -> String {
    let mut out = String::new();
    for seg in alignment {
        match display {
            FuriganaDisplay::Sparse => {
                out.push_str(&seg.text);
                if annotated(seg) {
                    out.push('[');
                    out.push_str(&seg.furigana);
                    out.push(']');
                }
            }
            FuriganaDisplay::Dense => match seg.class {
                Some(CharClass::Logographic) => {
                    out.push('[');
                    out.push_str(&seg.furigana);
                    out.push(']');
                }
                Some(_) => out.push_str(&seg.text),
                None => push_bracketed(&mut out, &seg.furigana),
            },
            FuriganaDisplay::Inline => match seg.class {
                Some(CharClass::Logographic) if annotated(seg) => {
                    out.push('[');
                    out.push_str(&seg.text);
                    out.push('|');
                    out.push_str(&seg.furigana);
                    out.push(']');
                }
                Some(_) => out.push_str(&seg.text),
                None => push_bracketed(&mut out, &seg.furigana),
            },
        }
    }
    out
}

/// Render as two lines, furigana above the surface, with each segment
/// padded to a common display width so readings sit over their kanji.
pub fn format_ruby_lines(alignment: &Alignment) -> (String, String) {
    let mut top = String::new();
    let mut bottom = String::new();
    for seg in alignment {
        let ruby = if annotated(seg) { seg.furigana.as_str() } else { "" };
        let width = seg.text.width().max(ruby.width());
        top.push_str(ruby);
        top.push_str(&" ".repeat(width - ruby.width()));
        bottom.push_str(&seg.text);
        bottom.push_str(&" ".repeat(width - seg.text.width()));
    }
    (
        top.trim_end().to_string(),
        bottom.trim_end().to_string(),
    )
}
