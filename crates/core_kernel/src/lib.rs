//! Core Kernel - Foundational types for FNOL claim routing
//!
//! This crate provides the building blocks shared by every other crate:
//! - The fixed set of claim fields and the extraction result keyed by them
//! - Claim type classification values
//! - The document reader port consumed by the outer surfaces

pub mod fields;
pub mod ports;
pub mod error;

pub use fields::{ClaimField, ClaimType, ExtractionResult};
pub use ports::{DocumentReader, PortError, read_document_text, join_pages};
pub use error::CoreError;
