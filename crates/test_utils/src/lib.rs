//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FNOL router test suite.
//!
//! # Modules
//!
//! - `fixtures`: Sample FNOL documents and a shared pipeline
//! - `builders`: Builder for FNOL form text
//! - `assertions`: Assertion helpers for claim decisions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
