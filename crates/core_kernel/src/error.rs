//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown claim field: {0}")]
    UnknownField(String),

    #[error("Unknown claim type: {0}")]
    UnknownClaimType(String),
}
