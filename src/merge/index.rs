/*! Lookup structures built from the input rows.

All three indices are keyed by [SentenceId] and use [XxHash64] for hashing.
[SentenceIndex] is built first and acts as the existence and language filter for the two others.
!*/
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::BuildHasherDefault;

use log::warn;
use twox_hash::XxHash64;

use crate::lang::{LanguagePair, Side};
use crate::records::{AudioMeta, Link, SentenceId, SentenceRow};

use super::MergeStats;

type IdMap<V> = HashMap<SentenceId, V, BuildHasherDefault<XxHash64>>;
type IdSet = HashSet<SentenceId, BuildHasherDefault<XxHash64>>;

/// A sentence whose language is part of the [LanguagePair].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub side: Side,
    pub text: String,
}

/// `id -> sentence` for in-scope sentences.
#[derive(Debug, Default)]
pub struct SentenceIndex {
    inner: IdMap<Sentence>,
}

impl SentenceIndex {
    /// Index `rows`, discarding sentences that are not in `langs`.
    ///
    /// If an id appears more than once, the first in-scope row is kept.
    pub fn new<I>(rows: I, langs: &LanguagePair, stats: &mut MergeStats) -> Self
    where
        I: IntoIterator<Item = SentenceRow>,
    {
        let mut inner = IdMap::default();
        for row in rows {
            let side = match langs.side(&row.lang) {
                Some(side) => side,
                None => {
                    stats.sentences_discarded += 1;
                    continue;
                }
            };

            match inner.entry(row.id) {
                Entry::Occupied(_) => {
                    warn!("duplicate sentence id {}, keeping the first one", row.id);
                    stats.sentences_discarded += 1;
                }
                Entry::Vacant(e) => {
                    match side {
                        Side::Source => stats.source_sentences += 1,
                        Side::Target => stats.target_sentences += 1,
                    }
                    e.insert(Sentence {
                        side,
                        text: row.text,
                    });
                }
            }
        }

        Self { inner }
    }

    #[inline]
    pub fn get(&self, id: SentenceId) -> Option<&Sentence> {
        self.inner.get(&id)
    }

    /// Get the sentence if it exists and is on `side`.
    #[inline]
    pub fn get_on(&self, id: SentenceId, side: Side) -> Option<&Sentence> {
        self.get(id).filter(|sentence| sentence.side == side)
    }

    #[inline]
    pub fn contains(&self, id: SentenceId) -> bool {
        self.inner.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// `source id -> [target ids]`, for links whose both ends are known.
///
/// Source ids are iterated in the order they were first seen,
/// targets in the order of the link rows. Duplicate links are kept.
#[derive(Debug, Default)]
pub struct LinkIndex {
    order: Vec<SentenceId>,
    targets: IdMap<Vec<SentenceId>>,
}

impl LinkIndex {
    pub fn new<I>(links: I, sentences: &SentenceIndex, stats: &mut MergeStats) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        let mut index = Self::default();
        for link in links {
            if sentences.contains(link.source) && sentences.contains(link.target) {
                index.insert(link);
                stats.links_kept += 1;
            } else {
                stats.links_discarded += 1;
            }
        }
        index
    }

    fn insert(&mut self, link: Link) {
        match self.targets.entry(link.source) {
            Entry::Occupied(e) => e.into_mut().push(link.target),
            Entry::Vacant(e) => {
                self.order.push(link.source);
                e.insert(vec![link.target]);
            }
        }
    }

    /// Targets of `source`, empty if there are none.
    pub fn targets(&self, source: SentenceId) -> &[SentenceId] {
        self.targets
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate on `(source, targets)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SentenceId, &[SentenceId])> + '_ {
        self.order.iter().map(move |id| (*id, self.targets(*id)))
    }

    /// Number of distinct source ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Ids of known sentences that have a licensed recording.
#[derive(Debug, Default)]
pub struct AudioIndex {
    inner: IdSet,
}

impl AudioIndex {
    pub fn new<I>(rows: I, sentences: &SentenceIndex, stats: &mut MergeStats) -> Self
    where
        I: IntoIterator<Item = AudioMeta>,
    {
        let mut inner = IdSet::default();
        for row in rows {
            if sentences.contains(row.sentence_id) && row.is_licensed() {
                inner.insert(row.sentence_id);
                stats.audio_kept += 1;
            } else {
                stats.audio_discarded += 1;
            }
        }
        Self { inner }
    }

    #[inline]
    pub fn has_audio(&self, id: SentenceId) -> bool {
        self.inner.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
