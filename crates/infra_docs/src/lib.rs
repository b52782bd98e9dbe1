//! Infrastructure Document Layer
//!
//! This crate provides the adapters behind the [`DocumentReader`] port. The
//! claim pipeline consumes plain text; these readers produce it from files
//! on disk.
//!
//! # Adapters
//!
//! - [`PlainTextReader`]: UTF-8 text, pages separated by form feeds
//! - [`PdfReader`]: PDFs with an embedded text layer
//! - [`DocumentLoader`]: picks one of the above from the file extension
//!
//! # Example
//!
//! ```rust,ignore
//! use core_kernel::read_document_text;
//! use infra_docs::DocumentLoader;
//!
//! let text = read_document_text(&DocumentLoader::new(), Path::new("fnol.pdf"))?;
//! ```
//!
//! [`DocumentReader`]: core_kernel::DocumentReader

pub mod error;
pub mod text;
pub mod pdf;
pub mod loader;

pub use error::DocumentError;
pub use text::PlainTextReader;
pub use pdf::PdfReader;
pub use loader::DocumentLoader;
