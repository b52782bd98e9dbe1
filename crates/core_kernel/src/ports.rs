//! Ports and Adapters Infrastructure
//!
//! The claim pipeline never opens files. Turning a stored document into text
//! is the job of a [`DocumentReader`] adapter living outside the domain.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        Outer surfaces (CLI / HTTP API)       │
//! └──────────────────────────────────────────────┘
//!           │ path                  ▲ text
//!           ▼                       │
//! ┌──────────────────────────────────────────────┐
//! │           DocumentReader (port)              │
//! └──────────────────────────────────────────────┘
//!           ▲                       ▲
//!  ┌────────┴────────┐     ┌────────┴────────┐
//!  │ PlainTextReader │     │    PdfReader    │
//!  │  (infra_docs)   │     │  (infra_docs)   │
//!  └─────────────────┘     └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_kernel::ports::{DocumentReader, read_document_text};
//!
//! let reader = DocumentLoader::new();
//! let text = read_document_text(&reader, Path::new("claim.pdf"))?;
//! let decision = pipeline.process(&text);
//! ```

use std::path::Path;
use thiserror::Error;

/// Error type for port operations
///
/// Every reader adapter reports failures through this type, so callers
/// handle PDF and plain-text sources the same way.
#[derive(Debug, Error)]
pub enum PortError {
    /// The document does not exist
    #[error("Document not found: {path}")]
    NotFound {
        path: String,
    },

    /// No adapter understands this kind of document
    #[error("Unsupported document format: {format}")]
    UnsupportedFormat {
        format: String,
    },

    /// Reading the underlying source failed
    #[error("Read error: {message}")]
    Read {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The source was read but its content could not be decoded
    #[error("Parse error: {message}")]
    Parse {
        message: String,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(path: &Path) -> Self {
        PortError::NotFound {
            path: path.display().to_string(),
        }
    }

    /// Creates an UnsupportedFormat error
    pub fn unsupported(format: impl Into<String>) -> Self {
        PortError::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Creates a Read error without an underlying source
    pub fn read(message: impl Into<String>) -> Self {
        PortError::Read {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        PortError::Parse {
            message: message.into(),
        }
    }

    /// Returns true if the document was missing rather than unreadable
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Port for turning a stored document into page-ordered text
///
/// Implementations own the file handle for the duration of the call and must
/// release it on every path, including failures.
pub trait DocumentReader: Send + Sync {
    /// Reads the pages of a document in order
    fn read_pages(&self, path: &Path) -> Result<Vec<String>, PortError>;
}

/// Joins page texts into a single document string
///
/// Each non-empty page is followed by a newline; empty pages contribute
/// nothing.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if !page.is_empty() {
            text.push_str(page);
            text.push('\n');
        }
    }
    text
}

/// Reads a document through a reader and returns its full text
pub fn read_document_text(reader: &dyn DocumentReader, path: &Path) -> Result<String, PortError> {
    let pages = reader.read_pages(path)?;
    Ok(join_pages(&pages))
}
