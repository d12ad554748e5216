//! Language pair management.
//!
//! Sentences are kept only if their language code is one of the two codes
//! of the [LanguagePair]. The source language anchors the output records,
//! the target language provides their translations.
use crate::error::Error;

/// Tatoeba code for English.
pub const ENGLISH: &str = "eng";
/// Tatoeba code for Vietnamese.
pub const VIETNAMESE: &str = "vie";

/// Which end of the pair a sentence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    source: String,
    target: String,
}

impl LanguagePair {
    /// Create a new pair. Codes are compared literally (case-sensitive).
    pub fn new(source: &str, target: &str) -> Result<Self, Error> {
        if source.is_empty() || target.is_empty() {
            return Err(Error::Custom("language codes can't be empty".to_string()));
        }
        if source == target {
            return Err(Error::Custom(format!(
                "source and target languages must differ (got {} twice)",
                source
            )));
        }
        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get the side of `code`, or [None] if the language is out of scope.
    #[inline]
    pub fn side(&self, code: &str) -> Option<Side> {
        if code == self.source {
            Some(Side::Source)
        } else if code == self.target {
            Some(Side::Target)
        } else {
            None
        }
    }

    /// Language code of the provided side.
    pub fn code(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }
}

/// English to Vietnamese.
impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: ENGLISH.to_string(),
            target: VIETNAMESE.to_string(),
        }
    }
}
