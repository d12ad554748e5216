//! Tab-separated writer, with a header row.
//!
//! Missing audio urls are written as empty cells.
use std::io::Write;

use crate::error::Error;
use crate::records::Translation;

use super::WriterTrait;

pub struct TsvWriter<W: Write> {
    handle: csv::Writer<W>,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(w: W) -> Self {
        let handle = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(w);
        Self { handle }
    }
}

impl<W: Write> WriterTrait for TsvWriter<W> {
    type Item = Translation;

    fn write_single(&mut self, val: &Translation) -> Result<(), Error> {
        Ok(self.handle.serialize(val)?)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_empty_audio() {
        let translations = vec![
            Translation {
                id: 1,
                text: "Hello".to_string(),
                audio_url: Some("https://audio.tatoeba.org/eng/1.mp3".to_string()),
                translate_id: 2,
                translate_text: "Xin chào".to_string(),
            },
            Translation {
                id: 5,
                text: "Bye".to_string(),
                audio_url: None,
                translate_id: 6,
                translate_text: "Tạm biệt".to_string(),
            },
        ];

        let mut buf = Vec::new();
        {
            let mut wr = TsvWriter::new(&mut buf);
            wr.write(&translations).unwrap();
            wr.flush().unwrap();
        }

        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "id\ttext\taudioUrl\ttranslateId\ttranslateText",
                "1\tHello\thttps://audio.tatoeba.org/eng/1.mp3\t2\tXin chào",
                "5\tBye\t\t6\tTạm biệt",
            ]
        );
    }
}
