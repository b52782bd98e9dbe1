//! Extension-based reader selection

use std::path::Path;

use core_kernel::{DocumentReader, PortError};
use crate::error::DocumentError;
use crate::pdf::PdfReader;
use crate::text::PlainTextReader;

/// Reads any supported document, choosing the adapter by file extension
///
/// | Extension | Reader |
/// |-----------|--------|
/// | `pdf` | [`PdfReader`] |
/// | `txt`, `text` | [`PlainTextReader`] |
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLoader {
    text: PlainTextReader,
    pdf: PdfReader,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reader for a path
    pub fn reader_for(&self, path: &Path) -> Result<&dyn DocumentReader, DocumentError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(&self.pdf),
            "txt" | "text" => Ok(&self.text),
            "" => Err(DocumentError::UnsupportedFormat("(no extension)".to_string())),
            other => Err(DocumentError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl DocumentReader for DocumentLoader {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>, PortError> {
        self.reader_for(path)?.read_pages(path)
    }
}
