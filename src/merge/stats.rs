use log::info;

/// Counters gathered while merging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub source_sentences: usize,
    pub target_sentences: usize,
    /// Out of scope languages and duplicate ids.
    pub sentences_discarded: usize,
    pub links_kept: usize,
    pub links_discarded: usize,
    pub audio_kept: usize,
    pub audio_discarded: usize,
    pub translations: usize,
}

impl MergeStats {
    pub fn log(&self) {
        info!(
            "sentences: {} source, {} target, {} discarded",
            self.source_sentences, self.target_sentences, self.sentences_discarded
        );
        info!(
            "links: {} kept, {} discarded",
            self.links_kept, self.links_discarded
        );
        info!(
            "audio: {} kept, {} discarded",
            self.audio_kept, self.audio_discarded
        );
        info!("translations: {}", self.translations);
    }
}
