//! Furigana alignment for Japanese compounds.
//!
//! Given a surface form such as `入見内川` and its reading `イリミナイカワ`,
//! [`align::Aligner`] assigns each kanji the part of the reading it
//! contributes, and [`format`] renders the result.

pub mod align;
pub mod format;
pub mod readings;
pub mod rendaku;
pub mod settings;
pub mod unicode;

pub use align::{AlignOptions, AlignOutcome, Aligner, Alignment, Segment};
pub use format::{format, FuriganaDisplay};
pub use readings::{ReadingProvider, ReadingTable};
