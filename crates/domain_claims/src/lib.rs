//! FNOL Claims Intake Domain
//!
//! This crate turns the text of a First Notice of Loss (FNOL) form into a
//! routing decision.
//!
//! # Pipeline
//!
//! ```text
//! text -> extraction -> enrichment -> validation -> routing -> ClaimDecision
//! ```
//!
//! Every stage is a pure function of its inputs and of configuration fixed
//! when the pipeline is built. Processing never fails; configuration errors
//! surface only when a [`ClaimPipeline`] is constructed.
//!
//! # Example
//!
//! ```rust
//! use domain_claims::{ClaimPipeline, Route};
//!
//! let pipeline = ClaimPipeline::standard().unwrap();
//! let decision = pipeline.process("");
//! assert_eq!(decision.recommended_route(), Route::ManualReview);
//! ```

pub mod extraction;
pub mod enrichment;
pub mod validation;
pub mod amount;
pub mod routing;
pub mod pipeline;
pub mod rule_set;
pub mod error;

pub use extraction::{CapturePolicy, FieldRule, PatternExtractor};
pub use enrichment::{EnrichmentConfig, FieldEnricher};
pub use validation::{MandatorySchema, MissingFieldReport, SchemaValidator};
pub use amount::parse_amount;
pub use routing::{Route, RoutingEngine, RoutingOutcome, RoutingRule, RuleCondition};
pub use pipeline::{ClaimDecision, ClaimPipeline};
pub use rule_set::{FieldRuleConfig, RuleSetConfig};
pub use error::ClaimError;
