//! File to file merge pipeline.
//!
//! Loads the sentences, links and audio files, builds translation pairs with [Merge]
//! and writes them at `dst`.
//!
//! Any input that can't be opened or read aborts the run before anything is written.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::reader::{self, RowParser, DEFAULT_CHUNK_SIZE};
use crate::io::writer::{self, OutputFormat};
use crate::lang::LanguagePair;
use crate::merge::{Merge, MergeStats, DEFAULT_AUDIO_BASE_URL};
use crate::pipelines::pipeline::Pipeline;
use crate::records::{AudioMeta, Link, SentenceRow};

/// Tuning and output options.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub langs: LanguagePair,
    pub audio_base_url: String,
    pub format: OutputFormat,
    /// Parsing threads. `1` is sequential, `0` lets rayon decide.
    pub threads: usize,
    pub chunk_size: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            langs: LanguagePair::default(),
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
            format: OutputFormat::default(),
            threads: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

pub struct MergePipeline {
    sentences: PathBuf,
    links: PathBuf,
    audio: PathBuf,
    dst: PathBuf,
    options: MergeOptions,
}

impl MergePipeline {
    pub fn new(
        sentences: PathBuf,
        links: PathBuf,
        audio: PathBuf,
        dst: PathBuf,
        options: MergeOptions,
    ) -> Self {
        Self {
            sentences,
            links,
            audio,
            dst,
            options,
        }
    }
}

impl Pipeline<MergeStats> for MergePipeline {
    fn run(&self) -> Result<MergeStats, Error> {
        let parser = RowParser::new(self.options.threads, self.options.chunk_size)?;

        info!("loading sentences from {:?}", self.sentences);
        let sentences = reader::load::<SentenceRow>(&self.sentences, &parser)?;
        info!("loading links from {:?}", self.links);
        let links = reader::load::<Link>(&self.links, &parser)?;
        info!("loading audio metadata from {:?}", self.audio);
        let audio = reader::load::<AudioMeta>(&self.audio, &parser)?;

        let merge = Merge::new(self.options.langs.clone(), &self.options.audio_base_url);
        let (translations, stats) = merge.build(sentences.rows, links.rows, audio.rows);

        info!("writing {} translations to {:?}", translations.len(), self.dst);
        let mut w = writer::writer_for(&self.dst, self.options.format)?;
        w.write(&translations)?;
        w.flush()?;

        Ok(stats)
    }
}
