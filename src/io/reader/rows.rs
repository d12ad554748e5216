/*! Row parsing

Turns raw rows into typed records, optionally on a dedicated [rayon] thread pool.

Rows are split into chunks, each chunk is parsed into its own buffer,
and buffers are then concatenated in chunk order on the calling thread.
The result is the same whatever the number of threads.
!*/
use csv::StringRecord;
use itertools::{Either, Itertools};
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Error, RowError};
use crate::records::FromRow;

use super::Parsed;

pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

pub struct RowParser {
    pool: Option<ThreadPool>,
    chunk_size: usize,
}

impl RowParser {
    /// Parse on the calling thread only.
    pub fn sequential() -> Self {
        Self {
            pool: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a parser using `threads` threads.
    ///
    /// `1` parses on the calling thread, `0` lets rayon pick the number of threads.
    pub fn new(threads: usize, chunk_size: usize) -> Result<Self, Error> {
        if chunk_size == 0 {
            return Err(Error::Custom("chunk size must be positive".to_string()));
        }

        let pool = match threads {
            1 => None,
            n => Some(ThreadPoolBuilder::new().num_threads(n).build()?),
        };

        Ok(Self { pool, chunk_size })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Parse `records` into `T`, skipping (and counting) malformed rows.
    ///
    /// Rows already skipped while reading are carried over in [Parsed::skipped].
    pub fn parse<T>(&self, records: Parsed<StringRecord>) -> Parsed<T>
    where
        T: FromRow + Send,
    {
        let chunks: Vec<Parsed<T>> = match &self.pool {
            Some(pool) => pool.install(|| {
                records
                    .rows
                    .par_chunks(self.chunk_size)
                    .map(parse_chunk::<T>)
                    .collect()
            }),
            None => records
                .rows
                .chunks(self.chunk_size)
                .map(parse_chunk::<T>)
                .collect(),
        };

        let init = Parsed {
            rows: Vec::with_capacity(records.rows.len()),
            skipped: records.skipped,
        };
        chunks.into_iter().fold(init, |mut acc, chunk| {
            acc.rows.extend(chunk.rows);
            acc.skipped += chunk.skipped;
            acc
        })
    }
}

impl Default for RowParser {
    fn default() -> Self {
        Self::sequential()
    }
}

/// Parse a chunk into a locally owned buffer.
fn parse_chunk<T: FromRow>(chunk: &[StringRecord]) -> Parsed<T> {
    let (rows, errors): (Vec<T>, Vec<RowError>) =
        chunk
            .iter()
            .partition_map(|record| match T::from_row(record) {
                Ok(row) => Either::Left(row),
                Err(e) => {
                    debug!(
                        "line {}: skipping row {:?}: {}",
                        record.position().map_or(0, |pos| pos.line()),
                        record,
                        e
                    );
                    Either::Right(e)
                }
            });

    Parsed {
        rows,
        skipped: errors.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Link, SentenceRow};

    fn records(rows: &[&[&str]]) -> Parsed<StringRecord> {
        Parsed {
            rows: rows.iter().map(|r| StringRecord::from(r.to_vec())).collect(),
            skipped: 0,
        }
    }

    #[test]
    fn skip_malformed() {
        let raw = records(&[
            &["1", "eng", "Hello"],
            &["x", "eng", "bad id"],
            &["2", "vie"],
            &["3", "vie", "Xin chào"],
        ]);
        let parsed: Parsed<SentenceRow> = RowParser::sequential().parse(raw);
        assert_eq!(parsed.skipped, 2);
        let ids: Vec<u64> = parsed.rows.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn carry_read_skips() {
        let mut raw = records(&[&["1", "2"]]);
        raw.skipped = 3;
        let parsed: Parsed<Link> = RowParser::sequential().parse(raw);
        assert_eq!(parsed.skipped, 3);
        assert_eq!(parsed.rows, vec![Link::new(1, 2)]);
    }

    #[test]
    fn parallel_keeps_order() {
        let rows: Vec<Vec<String>> = (0..1000u64)
            .map(|i| {
                if i % 7 == 0 {
                    vec![format!("bad{}", i), i.to_string()]
                } else {
                    vec![i.to_string(), (i + 1).to_string()]
                }
            })
            .collect();
        let raw = || Parsed {
            rows: rows.iter().map(|r| StringRecord::from(r.clone())).collect(),
            skipped: 0,
        };

        let sequential: Parsed<Link> = RowParser::sequential().parse(raw());
        let parallel: Parsed<Link> = RowParser::new(4, 13).unwrap().parse(raw());

        assert_eq!(sequential.rows, parallel.rows);
        assert_eq!(sequential.skipped, parallel.skipped);
        assert_eq!(parallel.skipped, 143);
    }

    #[test]
    fn zero_chunk_size() {
        assert!(RowParser::new(2, 0).is_err());
    }
}
