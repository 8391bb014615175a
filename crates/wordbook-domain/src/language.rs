//! Input language classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of a looked-up word.
///
/// Wire format: `"chinese"` / `"english"` (also the value stored in `word_records.language`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Chinese,
    English,
}

/// Returned by [`Language::from_str`] for tags other than `chinese` / `english`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language tag: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Classify `text`: Chinese if it contains at least one CJK Unified Ideograph
    /// (U+4E00..=U+9FFF), English otherwise. Total; empty or symbol-only input is English.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_cjk_unified_ideograph) {
            Self::Chinese
        } else {
            Self::English
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chinese => "chinese",
            Self::English => "english",
        }
    }
}

fn is_cjk_unified_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chinese" => Ok(Self::Chinese),
            "english" => Ok(Self::English),
            other => Err(UnknownLanguage(other.to_owned())),
        }
    }
}
