/*!
# Output writing

Merged [Translation]s are written either as JSON lines ([JsonlWriter]) or as a tab-separated file ([TsvWriter]).

Use [writer_for] to get a boxed writer for a destination file and an [OutputFormat].
!*/
mod jsonl;
mod tsv;
mod writertrait;

use std::{fs::File, path::Path, str::FromStr};

use crate::error::Error;
use crate::records::Translation;

pub use jsonl::JsonlWriter;
pub use tsv::TsvWriter;
pub use writertrait::WriterTrait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jsonl" | "json" => Ok(Self::Jsonl),
            "tsv" => Ok(Self::Tsv),
            other => Err(Error::Custom(format!("unknown output format: {}", other))),
        }
    }
}

/// Create (or truncate) `dst` and return a writer for `format`.
pub fn writer_for(
    dst: &Path,
    format: OutputFormat,
) -> Result<Box<dyn WriterTrait<Item = Translation>>, Error> {
    let f = File::create(dst)?;
    let w: Box<dyn WriterTrait<Item = Translation>> = match format {
        OutputFormat::Jsonl => Box::new(JsonlWriter::new(f)),
        OutputFormat::Tsv => Box::new(TsvWriter::new(f)),
    };
    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_str() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("parquet".parse::<OutputFormat>().is_err());
    }
}
