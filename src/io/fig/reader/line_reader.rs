//! Physical line reader with encoding fallback

use crate::error::Result;
use encoding_rs::Encoding;
use std::io::BufRead;

/// Reads lines, counting every physical line (comments and blanks too)
pub struct FigLineReader<R: BufRead> {
    reader: R,
    line_number: usize,
    /// Decoder for lines that are not valid UTF-8; `None` means Latin-1
    encoding: Option<&'static Encoding>,
}

impl<R: BufRead> FigLineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            encoding: None,
        }
    }

    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    /// 1-based number of the line last returned
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next line without its terminator (`\n` or `\r\n`)
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        while matches!(bytes.last(), Some(b'\n') | Some(b'\r')) {
            bytes.pop();
        }

        // UTF-8 first, then the configured encoding, then Latin-1
        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let bytes = e.into_bytes();
                match self.encoding {
                    Some(enc) => enc.decode(&bytes).0.into_owned(),
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };
        Ok(Some(line))
    }
}
