//! Fig writer module

mod field_writer;
mod record_writer;

pub use field_writer::{format_float, format_number, FieldWriter};
pub use record_writer::RecordWriter;

use crate::document::{FigDocument, FIG_VERSION};
use crate::error::{FigError, Result};
use crate::io::fig::codes::{RecordCode, FIG_MAGIC};
use crate::query::Container;
use crate::tables::MAX_CUSTOM_COLORS;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Layout options for the fig writer.
#[derive(Debug, Clone)]
pub struct FigWriterConfiguration {
    /// Prefix of continuation lines (points, arrows, shape factors)
    pub continuation_indent: String,
    /// Points per continuation line
    ///
    /// Default: `6`.
    pub points_per_line: usize,
    /// Spline shape factors per continuation line
    ///
    /// Default: `8`.
    pub shape_factors_per_line: usize,
}

impl Default for FigWriterConfiguration {
    fn default() -> Self {
        Self {
            continuation_indent: "\t".to_string(),
            points_per_line: 6,
            shape_factors_per_line: 8,
        }
    }
}

/// Fig file writer
pub struct FigWriter<'a> {
    document: &'a FigDocument,
    config: FigWriterConfiguration,
}

impl<'a> FigWriter<'a> {
    pub fn new(document: &'a FigDocument) -> Self {
        Self {
            document,
            config: FigWriterConfiguration::default(),
        }
    }

    /// Set the writer configuration.
    pub fn with_configuration(mut self, config: FigWriterConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Check everything that would make the output unreadable
    fn validate(&self) -> Result<()> {
        if self.document.colors.len() > MAX_CUSTOM_COLORS {
            return Err(FigError::ColorTableFull {
                limit: MAX_CUSTOM_COLORS,
            });
        }
        for entity in self.document.all_objects(false) {
            match entity {
                crate::entities::EntityType::Ellipse(ellipse) => ellipse.validate()?,
                crate::entities::EntityType::Spline(spline) => spline.validate()?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Render the complete file text
    pub fn write_to_string(&self) -> Result<String> {
        self.validate()?;
        let document = self.document;
        let page = &document.page;

        let mut records = RecordWriter::new(&self.config);
        let out = records.fields();
        out.line(&format!("{} {}", FIG_MAGIC, FIG_VERSION));
        out.line(page.orientation.as_str());
        out.line(page.justification.as_str());
        out.line(page.units.as_str());
        out.line(page.paper_size.name());
        out.line(&format!("{:.2}", page.magnification));
        out.line(page.pagination.as_str());
        out.line(&page.transparent_color.to_string());
        out.comment(document.comment.as_deref());
        out.begin_line()
            .int(page.resolution)
            .int(page.coordinate_system);
        out.end_line();

        for color in document.colors.iter() {
            out.begin_line()
                .int(RecordCode::CustomColor.to_value())
                .int(color.index)
                .raw(color.hex_code());
        }
        out.end_line();

        for entity in document.entities() {
            records.write_entity(entity);
        }
        records.fields().comment(document.trailing_comment.as_deref());

        tracing::debug!(
            objects = records.record_count(),
            colors = document.colors.len(),
            "wrote fig document"
        );
        Ok(records.into_string())
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let text = self.write_to_string()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        Ok(self.write_to_string()?.into_bytes())
    }

    /// Write to a file; the file is not created when rendering fails
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.write_to_string()?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
