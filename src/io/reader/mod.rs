/*! Input reading

Input files are read in two steps:

- [TsvReader] reads raw rows from a tab-separated file,
- [RowParser] turns these rows into typed records (see [crate::records::FromRow]).

Malformed rows are skipped and counted in [Parsed::skipped], they never make the run fail.
!*/
mod rows;
mod tsvreader;

use std::path::Path;

use log::warn;

use crate::error::Error;
use crate::records::FromRow;

pub use rows::{RowParser, DEFAULT_CHUNK_SIZE};
pub use tsvreader::TsvReader;

/// Rows that could be read, along with the number of skipped ones.
#[derive(Debug)]
pub struct Parsed<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            skipped: 0,
        }
    }
}

/// Read and parse the file at `path`.
pub fn load<T>(path: &Path, parser: &RowParser) -> Result<Parsed<T>, Error>
where
    T: FromRow + Send,
{
    let raw = TsvReader::from_path(path)?.read_all()?;
    let parsed: Parsed<T> = parser.parse(raw);
    if parsed.skipped > 0 {
        warn!(
            "{:?}: skipped {} malformed rows ({} kept)",
            path,
            parsed.skipped,
            parsed.rows.len()
        );
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::records::AudioMeta;

    #[test]
    fn load_audio() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "1\tu\tCC0\turl\n2\tu\n3\tv\t\\N\t\\N\n").unwrap();

        let parsed: Parsed<AudioMeta> = load(f.path(), &RowParser::sequential()).unwrap();
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.rows.len(), 2);
        assert!(parsed.rows[0].is_licensed());
        assert!(!parsed.rows[1].is_licensed());
    }
}
