/*! Merge engine

Joins sentences, links and audio metadata into [Translation] pairs.

# Processing
1. Sentences are indexed by id, keeping only the ones in the [LanguagePair]. Every other id is unknown from then on.
1. Links whose both ends are known are indexed by source id (see [LinkIndex]).
1. Audio rows of known sentences that carry a license mark the sentence as having audio.
1. For each source-language sentence of the link index, each target-language translation yields a [Translation].

Output follows the link index order. Nothing is sorted or deduplicated:
a link row present twice yields two identical records.
!*/
mod index;
mod stats;

use log::debug;

use crate::lang::{LanguagePair, Side};
use crate::records::{AudioMeta, Link, SentenceId, SentenceRow, Translation};

pub use index::{AudioIndex, LinkIndex, Sentence, SentenceIndex};
pub use stats::MergeStats;

pub const DEFAULT_AUDIO_BASE_URL: &str = "https://audio.tatoeba.org";

#[derive(Debug, Clone)]
pub struct Merge {
    langs: LanguagePair,
    audio_base_url: String,
}

impl Merge {
    pub fn new(langs: LanguagePair, audio_base_url: &str) -> Self {
        Self {
            langs,
            audio_base_url: audio_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn langs(&self) -> &LanguagePair {
        &self.langs
    }

    /// Audio url of a source sentence.
    ///
    /// The language segment is the source language of the pair.
    pub fn audio_url(&self, id: SentenceId) -> String {
        format!(
            "{}/{}/{}.mp3",
            self.audio_base_url,
            self.langs.source(),
            id
        )
    }

    /// Build translation pairs.
    pub fn build<S, L, A>(
        &self,
        sentences: S,
        links: L,
        audio: A,
    ) -> (Vec<Translation>, MergeStats)
    where
        S: IntoIterator<Item = SentenceRow>,
        L: IntoIterator<Item = Link>,
        A: IntoIterator<Item = AudioMeta>,
    {
        let mut stats = MergeStats::default();

        let sentences = SentenceIndex::new(sentences, &self.langs, &mut stats);
        debug!("indexed {} sentences", sentences.len());
        let links = LinkIndex::new(links, &sentences, &mut stats);
        debug!("indexed links of {} sentences", links.len());
        let audio = AudioIndex::new(audio, &sentences, &mut stats);
        debug!("{} sentences have audio", audio.len());

        let mut translations = Vec::new();
        for (source_id, targets) in links.iter() {
            let source = match sentences.get_on(source_id, Side::Source) {
                Some(source) => source,
                None => continue,
            };

            let audio_url = if audio.has_audio(source_id) {
                Some(self.audio_url(source_id))
            } else {
                None
            };

            for &target_id in targets {
                if let Some(target) = sentences.get_on(target_id, Side::Target) {
                    translations.push(Translation {
                        id: source_id,
                        text: source.text.clone(),
                        audio_url: audio_url.clone(),
                        translate_id: target_id,
                        translate_text: target.text.clone(),
                    });
                }
            }
        }

        stats.translations = translations.len();
        stats.log();
        (translations, stats)
    }
}

/// English to Vietnamese, with Tatoeba audio urls.
impl Default for Merge {
    fn default() -> Self {
        Self::new(LanguagePair::default(), DEFAULT_AUDIO_BASE_URL)
    }
}
