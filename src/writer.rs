/*!
 * Markdown writer for projdoc
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use crate::document::RenderedDocument;
use crate::error::{Result, ResultExt};

/// Writes a rendered listing to disk
pub struct MarkdownWriter {
    /// Destination file
    output_file: PathBuf,
}

impl MarkdownWriter {
    /// Create a new writer for `output_file`
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// Write the document as UTF-8 Markdown, creating the parent directory if needed.
    ///
    /// Returns the number of bytes written.
    pub fn write(&self, document: &RenderedDocument) -> Result<u64> {
        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .writer_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let markdown = document.to_markdown();
        let file = File::create(&self.output_file)
            .writer_context(|| format!("creating {}", self.output_file.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(markdown.as_bytes())
            .and_then(|_| writer.flush())
            .writer_context(|| format!("writing {}", self.output_file.display()))?;

        info!("Wrote {} bytes to {}", markdown.len(), self.output_file.display());
        Ok(markdown.len() as u64)
    }
}
