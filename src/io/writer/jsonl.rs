//! JSON lines writer: one [Translation] object per line.
use std::io::{BufWriter, Write};

use crate::error::Error;
use crate::records::Translation;

use super::WriterTrait;

pub struct JsonlWriter<W: Write> {
    handle: BufWriter<W>,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(w: W) -> Self {
        Self {
            handle: BufWriter::new(w),
        }
    }
}

impl<W: Write> WriterTrait for JsonlWriter<W> {
    type Item = Translation;

    fn write_single(&mut self, val: &Translation) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, val)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}
