//! Plain text documents
//!
//! Text exports of FNOL forms mark page breaks with a form feed (`\x0c`), the
//! same separator `pdftotext` emits.

use std::path::Path;
use tracing::{debug, instrument};

use core_kernel::{DocumentReader, PortError};
use crate::error::DocumentError;

/// Page separator in text exports
pub const PAGE_BREAK: char = '\u{000C}';

/// Reads UTF-8 text files, replacing invalid sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReader;

impl PlainTextReader {
    pub fn new() -> Self {
        Self
    }

    /// Splits raw text into pages
    pub fn split_pages(text: &str) -> Vec<String> {
        text.split(PAGE_BREAK).map(str::to_string).collect()
    }

    /// Reads a file into pages
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn read(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        let bytes = std::fs::read(path).map_err(|e| DocumentError::from_io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        let pages = Self::split_pages(&text);

        debug!(pages = pages.len(), bytes = bytes.len(), "Read text document");
        Ok(pages)
    }
}

impl DocumentReader for PlainTextReader {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>, PortError> {
        Ok(self.read(path)?)
    }
}
