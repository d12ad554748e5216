/*! Typed records

Rows coming from the three Tatoeba exports, and the [Translation] pairs built from them.

Each input row type implements [FromRow], which turns a raw tab-separated row into a typed record
or a [RowError] when the row is malformed.
!*/
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::RowError;

/// Tatoeba sentence identifier.
pub type SentenceId = u64;

/// Literal used by Tatoeba exports to denote an absent value.
pub const NULL_SENTINEL: &str = "\\N";

/// Build a typed record from a headerless tab-separated row.
pub trait FromRow: Sized {
    /// Minimum number of fields a row must have.
    const FIELDS: usize;

    fn from_row(row: &StringRecord) -> Result<Self, RowError>;
}

/// Fails if the row is too short for the schema.
fn check_len(row: &StringRecord, expected: usize) -> Result<(), RowError> {
    if row.len() < expected {
        Err(RowError::MissingField {
            expected,
            found: row.len(),
        })
    } else {
        Ok(())
    }
}

/// Parse an id field. Caller has already checked the row length.
fn parse_id(row: &StringRecord, idx: usize, field: &'static str) -> Result<SentenceId, RowError> {
    let value = &row[idx];
    value.parse::<SentenceId>().map_err(|_| RowError::InvalidId {
        field,
        value: value.to_string(),
    })
}

/// Map the null sentinel to [None].
fn nullable(value: &str) -> Option<String> {
    if value == NULL_SENTINEL {
        None
    } else {
        Some(value.to_string())
    }
}

/// Row of `sentences.csv`: `[id, lang, text]`.
///
/// The language is kept as-is: filtering happens when indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRow {
    pub id: SentenceId,
    pub lang: String,
    pub text: String,
}

impl SentenceRow {
    pub fn new(id: SentenceId, lang: &str, text: &str) -> Self {
        Self {
            id,
            lang: lang.to_string(),
            text: text.to_string(),
        }
    }
}

impl FromRow for SentenceRow {
    const FIELDS: usize = 3;

    fn from_row(row: &StringRecord) -> Result<Self, RowError> {
        check_len(row, Self::FIELDS)?;
        Ok(Self {
            id: parse_id(row, 0, "sentence id")?,
            lang: row[1].to_string(),
            text: row[2].to_string(),
        })
    }
}

/// Row of `links.csv`: `[sourceId, targetId]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub source: SentenceId,
    pub target: SentenceId,
}

impl Link {
    pub fn new(source: SentenceId, target: SentenceId) -> Self {
        Self { source, target }
    }
}

impl FromRow for Link {
    const FIELDS: usize = 2;

    fn from_row(row: &StringRecord) -> Result<Self, RowError> {
        check_len(row, Self::FIELDS)?;
        Ok(Self {
            source: parse_id(row, 0, "source id")?,
            target: parse_id(row, 1, "target id")?,
        })
    }
}

/// Row of `sentences_with_audio.csv`: `[sentenceId, username, license, attributionUrl]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioMeta {
    pub sentence_id: SentenceId,
    pub username: Option<String>,
    pub license: Option<String>,
    pub attribution_url: Option<String>,
}

impl AudioMeta {
    /// `license` is given in its raw form (`\N` for no license).
    pub fn new(sentence_id: SentenceId, username: &str, license: &str, attribution_url: &str) -> Self {
        Self {
            sentence_id,
            username: nullable(username),
            license: nullable(license),
            attribution_url: nullable(attribution_url),
        }
    }

    /// Audio is only available when the recording comes with a license.
    #[inline]
    pub fn is_licensed(&self) -> bool {
        matches!(&self.license, Some(license) if !license.is_empty())
    }
}

impl FromRow for AudioMeta {
    const FIELDS: usize = 4;

    fn from_row(row: &StringRecord) -> Result<Self, RowError> {
        check_len(row, Self::FIELDS)?;
        let sentence_id = parse_id(row, 0, "sentence id")?;
        Ok(Self::new(sentence_id, &row[1], &row[2], &row[3]))
    }
}

/// A source sentence and one of its translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub id: SentenceId,
    pub text: String,
    pub audio_url: Option<String>,
    pub translate_id: SentenceId,
    pub translate_text: String,
}
