//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use tatoeba_pairs::io::writer::OutputFormat;

#[derive(Debug, StructOpt)]
#[structopt(name = "tatoeba-pairs", about = "Tatoeba sentence pairs builder.")]
/// Holds every command that is callable by the `tatoeba-pairs` command.
pub enum TatoebaPairs {
    #[structopt(about = "Merge sentences, links and audio metadata into translation pairs")]
    Merge(Merge),
}

#[derive(Debug, StructOpt)]
/// Merge command and parameters.
///
/// ```sh
/// tatoeba-pairs-merge 0.1.0
/// Merge sentences, links and audio metadata into translation pairs
///
/// USAGE:
///     tatoeba-pairs merge [OPTIONS] <sentences> <links> <audio> <dst>
///
/// OPTIONS:
///     -f, --format <format>                    output format (jsonl or tsv) [default: jsonl]
///     -t, --threads <threads>                  parsing threads. 0 uses all cores [default: 1]
///     -s, --chunk-size <chunk-size>            rows per parsing chunk [default: 10000]
///         --source-lang <source-lang>          [default: eng]
///         --target-lang <target-lang>          [default: vie]
///         --audio-base-url <audio-base-url>    [default: https://audio.tatoeba.org]
/// ```
pub struct Merge {
    #[structopt(parse(from_os_str), help = "sentences file (id, lang, text)")]
    pub sentences: PathBuf,
    #[structopt(parse(from_os_str), help = "links file (source id, target id)")]
    pub links: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "audio file (sentence id, username, license, attribution url)"
    )]
    pub audio: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(
        short = "f",
        long = "format",
        help = "output format (jsonl or tsv)",
        default_value = "jsonl"
    )]
    pub format: OutputFormat,
    #[structopt(
        short = "t",
        long = "threads",
        help = "parsing threads. 0 uses all cores",
        default_value = "1"
    )]
    pub threads: usize,
    #[structopt(
        short = "s",
        long = "chunk-size",
        help = "rows per parsing chunk",
        default_value = "10000"
    )]
    pub chunk_size: usize,
    #[structopt(long = "source-lang", default_value = "eng")]
    pub source_lang: String,
    #[structopt(long = "target-lang", default_value = "vie")]
    pub target_lang: String,
    #[structopt(long = "audio-base-url", default_value = "https://audio.tatoeba.org")]
    pub audio_base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tatoeba_pairs::io::reader::DEFAULT_CHUNK_SIZE;
    use tatoeba_pairs::merge::DEFAULT_AUDIO_BASE_URL;

    #[test]
    fn defaults() {
        let opt = TatoebaPairs::from_iter(&[
            "tatoeba-pairs",
            "merge",
            "s.csv",
            "l.csv",
            "a.csv",
            "out.jsonl",
        ]);
        let TatoebaPairs::Merge(m) = opt;
        assert_eq!(m.format, OutputFormat::Jsonl);
        assert_eq!(m.threads, 1);
        assert_eq!(m.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(m.source_lang, "eng");
        assert_eq!(m.target_lang, "vie");
        assert_eq!(m.audio_base_url, DEFAULT_AUDIO_BASE_URL);
    }

    #[test]
    fn tsv() {
        let opt = TatoebaPairs::from_iter(&[
            "tatoeba-pairs",
            "merge",
            "-f",
            "tsv",
            "-t",
            "4",
            "s.csv",
            "l.csv",
            "a.csv",
            "out.tsv",
        ]);
        let TatoebaPairs::Merge(m) = opt;
        assert_eq!(m.format, OutputFormat::Tsv);
        assert_eq!(m.threads, 4);
    }
}
