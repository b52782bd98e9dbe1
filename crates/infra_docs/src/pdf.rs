//! PDF documents
//!
//! Handles digital PDFs with an embedded text layer via the `pdf-extract`
//! crate. Scanned forms without text come back as empty pages, which the
//! pipeline treats as a document with every field missing.

use std::path::Path;
use tracing::{debug, instrument, warn};

use core_kernel::{DocumentReader, PortError};
use crate::error::DocumentError;

/// PDF text extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl PdfReader {
    pub fn new() -> Self {
        Self
    }

    /// Extracts page texts from PDF bytes
    pub fn extract(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
        pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| DocumentError::PdfParsing(e.to_string()))
    }

    /// Reads a PDF file into pages
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn read(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        let bytes = std::fs::read(path).map_err(|e| DocumentError::from_io(path, e))?;
        let pages = self.extract(&bytes)?;

        let empty = pages.iter().filter(|p| p.trim().is_empty()).count();
        if empty > 0 {
            warn!(empty_pages = empty, "PDF pages without a text layer");
        }
        debug!(pages = pages.len(), "Read PDF document");
        Ok(pages)
    }
}

impl DocumentReader for PdfReader {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>, PortError> {
        Ok(self.read(path)?)
    }
}
