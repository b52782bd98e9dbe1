//! Document reading error types
//!
//! Adapters report failures with [`DocumentError`]; at the port boundary they
//! become [`PortError`] values.

use std::io;
use std::path::Path;
use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur while reading a document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file does not exist
    #[error("Document not found: {0}")]
    NotFound(String),

    /// No reader handles this file extension
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The PDF could not be parsed
    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),
}

impl DocumentError {
    /// Maps an I/O error for a path, singling out missing files
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            DocumentError::NotFound(path.display().to_string())
        } else {
            DocumentError::Io(error)
        }
    }

    /// Checks if this error indicates the file was missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound(_))
    }
}

impl From<DocumentError> for PortError {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::NotFound(path) => PortError::NotFound { path },
            DocumentError::UnsupportedFormat(format) => PortError::UnsupportedFormat { format },
            DocumentError::Io(e) => PortError::Read {
                message: e.to_string(),
                source: Some(Box::new(e)),
            },
            DocumentError::PdfParsing(message) => PortError::Parse { message },
        }
    }
}
