/*! Tab-separated file reading

Tatoeba exports are headerless, tab-separated and *not* quoted: a `"` in a sentence is a literal character.
Row lengths are not enforced here, short rows are detected when building typed records.

Files ending in `.gz` are decompressed on the fly.
!*/
use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use csv::StringRecord;
use flate2::read::MultiGzDecoder;
use log::{debug, error, info};

use crate::error::Error;

use super::Parsed;

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true);
    builder
}

#[inline]
fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// Reader over the raw rows of a tab-separated file.
pub struct TsvReader<R: Read> {
    path: PathBuf,
    inner: csv::Reader<R>,
}

impl TsvReader<Box<dyn Read>> {
    /// Open `path`, failing if the file can't be opened.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            error!("could not open {:?}: {}", path, e);
            e
        })?;

        let reader: Box<dyn Read> = if is_gzip(path) {
            debug!("{:?} is gzipped", path);
            Box::new(MultiGzDecoder::new(BufReader::new(file)))
        } else {
            Box::new(file)
        };

        Ok(Self {
            path: path.to_path_buf(),
            inner: builder().from_reader(reader),
        })
    }
}

impl<R: Read> TsvReader<R> {
    /// Read from an in-memory or already opened source.
    pub fn from_reader(reader: R) -> Self {
        Self {
            path: PathBuf::new(),
            inner: builder().from_reader(reader),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row.
    ///
    /// Rows that can't be decoded (invalid UTF-8) are skipped and counted.
    /// I/O errors abort the read: no partial content is returned.
    pub fn read_all(mut self) -> Result<Parsed<StringRecord>, Error> {
        let mut parsed = Parsed::default();
        for record in self.inner.records() {
            match record {
                Ok(record) => parsed.rows.push(record),
                Err(e) if e.is_io_error() => {
                    error!("error reading {:?}: {}", self.path, e);
                    return Err(e.into());
                }
                Err(e) => {
                    debug!("{:?}: skipping undecodable row: {}", self.path, e);
                    parsed.skipped += 1;
                }
            }
        }

        info!("{:?}: read {} rows", self.path, parsed.rows.len());
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use flate2::{write::GzEncoder, Compression};

    use super::*;

    #[test]
    fn tabs_no_quoting() {
        let data = "1\teng\tHe said \"hi\".\n2\tvie\tXin chào\n";
        let parsed = TsvReader::from_reader(Cursor::new(data)).read_all().unwrap();
        assert_eq!(parsed.skipped, 0);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(&parsed.rows[0][2], "He said \"hi\".");
        assert_eq!(&parsed.rows[1][2], "Xin chào");
    }

    #[test]
    fn ragged_rows() {
        let data = "1\teng\tHello\n2\tvie\n3\n";
        let parsed = TsvReader::from_reader(Cursor::new(data)).read_all().unwrap();
        let lens: Vec<usize> = parsed.rows.iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![3, 2, 1]);
    }

    #[test]
    fn invalid_utf8_is_skipped() {
        let mut data = b"1\teng\tHello\n2\tvie\t".to_vec();
        data.extend_from_slice(&[0xff, 0xfe]);
        data.extend_from_slice(b"\n3\tvie\tXin chao\n");
        let parsed = TsvReader::from_reader(Cursor::new(data)).read_all().unwrap();
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(&parsed.rows[1][0], "3");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = TsvReader::from_path(&dir.path().join("nope.csv"));
        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[test]
    fn gzipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.csv.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(b"1\t2\n1\t3\n").unwrap();
        enc.finish().unwrap();

        let parsed = TsvReader::from_path(&path).unwrap().read_all().unwrap();
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(&parsed.rows[1][1], "3");
    }
}
