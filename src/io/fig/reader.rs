//! Fig file reader

mod line_reader;
mod record_reader;

pub use line_reader::FigLineReader;

use record_reader::RecordReader;

use crate::document::FigDocument;
use crate::error::Result;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Configuration for the fig reader.
#[derive(Debug, Clone)]
pub struct FigReaderConfiguration {
    /// When `true`, data beyond what a record declares (extra points or
    /// shape factors, stray continuation lines) is an error instead of a
    /// warning.
    ///
    /// Default: `false`.
    pub strict: bool,
    /// Decoder for lines that are not valid UTF-8. `None` decodes them as
    /// Latin-1. A `#encoding:` comment before the header overrides this.
    pub encoding: Option<&'static Encoding>,
    /// Name used in error messages; defaults to the quoted file name or
    /// `<unnamed>`.
    pub source_name: Option<String>,
}

impl Default for FigReaderConfiguration {
    fn default() -> Self {
        Self {
            strict: false,
            encoding: None,
            source_name: None,
        }
    }
}

/// Fig file reader
pub struct FigReader {
    reader: Box<dyn BufRead>,
    filename: Option<PathBuf>,
    config: FigReaderConfiguration,
}

impl FigReader {
    /// Create a reader for a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self {
            reader: Box::new(BufReader::new(file)),
            filename: Some(path.as_ref().to_path_buf()),
            config: FigReaderConfiguration::default(),
        })
    }

    /// Create a reader from any byte source
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(BufReader::new(reader)),
            filename: None,
            config: FigReaderConfiguration::default(),
        }
    }

    /// Create a reader over in-memory text
    pub fn from_text(text: &str) -> Self {
        Self {
            reader: Box::new(Cursor::new(text.as_bytes().to_vec())),
            filename: None,
            config: FigReaderConfiguration::default(),
        }
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: FigReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    fn source_name(&self) -> String {
        match (&self.config.source_name, &self.filename) {
            (Some(name), _) => name.clone(),
            (None, Some(path)) => format!("'{}'", path.display()),
            (None, None) => "<unnamed>".to_string(),
        }
    }

    /// Read the whole input into a document.
    ///
    /// Malformed input aborts with [`crate::FigError::Parse`] naming the
    /// physical line; recoverable oddities end up in
    /// [`FigDocument::notifications`].
    pub fn read(self) -> Result<FigDocument> {
        let source_name = self.source_name();
        let mut document = FigDocument::new();
        document.filename = self.filename.clone();

        let mut lines = FigLineReader::new(self.reader);
        if let Some(encoding) = self.config.encoding {
            lines.set_encoding(encoding);
        }

        let mut records = RecordReader::new(&mut document, source_name.as_str(), self.config.strict);
        while let Some(line) = lines.read_line()? {
            if records.in_preamble() {
                if let Some(label) = line.strip_prefix("#encoding:") {
                    match Encoding::for_label(label.trim().as_bytes()) {
                        Some(encoding) => lines.set_encoding(encoding),
                        None => tracing::warn!(label = label.trim(), "unknown encoding label"),
                    }
                }
            }
            records.feed(lines.line_number(), &line)?;
        }
        records.finish()?;

        tracing::debug!(
            source = %source_name,
            objects = document.entity_count(),
            colors = document.colors.len(),
            warnings = document.notifications.len(),
            "read fig document"
        );
        Ok(document)
    }
}
