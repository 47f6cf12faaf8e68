//! Conversion of saved drawings to other formats through fig2dev

use crate::document::FigDocument;
use crate::error::{FigError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub output_path: PathBuf,
    pub stdout: String,
    pub stderr: String,
}

/// Converts a `.fig` file on disk into another format
pub trait Exporter {
    /// Convert `input` to the output language `lang` (`eps`, `pdf`, ...)
    fn export(&self, input: &Path, lang: &str) -> Result<ExportOutcome>;
}

/// Runs the `fig2dev` program
#[derive(Debug, Clone)]
pub struct Fig2Dev {
    pub program: String,
}

impl Fig2Dev {
    pub fn new() -> Self {
        Fig2Dev {
            program: "fig2dev".to_string(),
        }
    }

    /// Use another executable, e.g. an absolute path
    pub fn with_program(program: impl Into<String>) -> Self {
        Fig2Dev {
            program: program.into(),
        }
    }

    /// `drawing.fig` becomes `drawing.<lang>` next to it
    pub fn output_path(input: &Path, lang: &str) -> PathBuf {
        input.with_extension(lang)
    }
}

impl Default for Fig2Dev {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for Fig2Dev {
    fn export(&self, input: &Path, lang: &str) -> Result<ExportOutcome> {
        let file_name = input
            .file_name()
            .ok_or_else(|| FigError::Custom(format!("no file name in {}", input.display())))?;
        let output_path = Self::output_path(input, lang);
        let output_name = output_path
            .file_name()
            .ok_or_else(|| FigError::Custom(format!("no file name in {}", output_path.display())))?;

        let mut command = Command::new(&self.program);
        command.arg("-L").arg(lang).arg(file_name).arg(output_name);
        if let Some(dir) = input.parent().filter(|d| !d.as_os_str().is_empty()) {
            command.current_dir(dir);
        }

        tracing::info!(program = %self.program, input = %input.display(), lang, "running export");
        let output = command.output()?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::warn!(status = %output.status, "export failed");
            return Err(FigError::Export {
                lang: lang.to_string(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(ExportOutcome {
            output_path,
            stdout,
            stderr,
        })
    }
}

impl FigDocument {
    /// Export the file this document was last read from or saved to.
    ///
    /// Unsaved edits are not included; call [`FigDocument::save`] first.
    pub fn export(&self, exporter: &dyn Exporter, lang: &str) -> Result<ExportOutcome> {
        let path = self
            .filename
            .as_deref()
            .ok_or_else(|| FigError::Custom("document has not been saved".to_string()))?;
        exporter.export(path, lang)
    }
}
