//! Engine settings loaded from TOML.
//!
//! Default values are embedded via `include_str!("default_settings.toml")`.
//! Settings are plain values: parse once and pass them to the aligner and
//! formatter; nothing here is global.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::align::{AlignOptions, RendakuPrecedence, TailPolicy};
use crate::format::FuriganaDisplay;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub align: AlignSettings,
    pub format: FormatSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlignSettings {
    pub tail_policy: TailPolicy,
    pub rendaku_precedence: RendakuPrecedence,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatSettings {
    pub furigana_display: FuriganaDisplay,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    pub workers: usize,
}

impl Settings {
    /// Read and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        parse_settings_toml(&content)
    }

    pub fn align_options(&self) -> AlignOptions {
        AlignOptions {
            tail_policy: self.align.tail_policy,
            rendaku_precedence: self.align.rendaku_precedence,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.batch.workers == 0 {
        return Err(SettingsError::InvalidValue {
            field: "batch.workers".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.align.tail_policy, TailPolicy::Absorb);
        assert_eq!(s.align.rendaku_precedence, RendakuPrecedence::PerVariant);
        assert_eq!(s.format.furigana_display, FuriganaDisplay::Dense);
        assert_eq!(s.batch.workers, 4);
        assert_eq!(s.align_options(), AlignOptions::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[align]
tail_policy = "strict"
rendaku_precedence = "rendaku_first"

[format]
furigana_display = "sparse"

[batch]
workers = 2
"#;
        let s = parse_settings_toml(toml).unwrap();
        let opts = s.align_options();
        assert_eq!(opts.tail_policy, TailPolicy::Strict);
        assert_eq!(opts.rendaku_precedence, RendakuPrecedence::RendakuFirst);
        assert_eq!(s.format.furigana_display, FuriganaDisplay::Sparse);
        assert_eq!(s.batch.workers, 2);
    }

    #[test]
    fn parse_inline_display() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"dense\"", "\"inline\"");
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.format.furigana_display, FuriganaDisplay::Inline);
    }

    #[test]
    fn error_zero_workers() {
        let toml = DEFAULT_SETTINGS_TOML.replace("workers = 4", "workers = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "batch.workers")
        );
    }

    #[test]
    fn error_unknown_policy() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"absorb\"", "\"greedy\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFAULT_SETTINGS_TOML.as_bytes()).unwrap();
        let s = Settings::load(file.path()).unwrap();
        assert_eq!(s.batch.workers, 4);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn default_matches_embedded() {
        assert_eq!(Settings::default().batch.workers, 4);
    }
}
