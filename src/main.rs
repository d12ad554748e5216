//! # tatoeba-pairs
//!
//! Builds a list of English–Vietnamese sentence pairs from the
//! [Tatoeba](https://tatoeba.org/downloads) exports, with a link to the
//! English recording when one is available under a license.
//!
//! ## Getting started
//!
//! ```sh
//! RUST_LOG=info tatoeba-pairs merge sentences.csv links.csv sentences_with_audio.csv pairs.jsonl
//! ```
//!
use log::debug;
use structopt::StructOpt;

use tatoeba_pairs::error::Error;
use tatoeba_pairs::lang::LanguagePair;
use tatoeba_pairs::pipelines::{MergeOptions, MergePipeline, Pipeline};

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::TatoebaPairs::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::TatoebaPairs::Merge(m) => {
            let options = MergeOptions {
                langs: LanguagePair::new(&m.source_lang, &m.target_lang)?,
                audio_base_url: m.audio_base_url,
                format: m.format,
                threads: m.threads,
                chunk_size: m.chunk_size,
            };
            let p = MergePipeline::new(m.sentences, m.links, m.audio, m.dst, options);
            p.run()?;
        }
    };
    Ok(())
}
