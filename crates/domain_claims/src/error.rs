//! Claims domain errors
//!
//! Processing a document never fails. These errors only arise while a
//! pipeline is being built from a rule set.

use thiserror::Error;

use core_kernel::ClaimField;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Invalid pattern for {field}: {source}")]
    InvalidPattern {
        field: ClaimField,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern for {field} has no capture group {group}")]
    InvalidCaptureGroup { field: ClaimField, group: usize },

    #[error("Mandatory schema must name at least one field")]
    EmptySchema,

    #[error("Failed to load rule set: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to parse rule set: {0}")]
    Parse(#[from] serde_json::Error),
}
