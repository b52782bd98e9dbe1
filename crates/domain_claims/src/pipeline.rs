//! FNOL claim pipeline
//!
//! ```text
//! text -> PatternExtractor -> FieldEnricher -> SchemaValidator -> RoutingEngine -> ClaimDecision
//! ```
//!
//! The pipeline holds only read-only configuration. A single instance can
//! serve any number of threads, and every call builds its own result.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::ExtractionResult;
use crate::enrichment::FieldEnricher;
use crate::error::ClaimError;
use crate::extraction::PatternExtractor;
use crate::routing::{Route, RoutingEngine};
use crate::rule_set::RuleSetConfig;
use crate::validation::{MissingFieldReport, SchemaValidator};

/// Final output for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDecision {
    extracted_fields: ExtractionResult,
    missing_fields: MissingFieldReport,
    recommended_route: Route,
    reasoning: String,
}

impl ClaimDecision {
    pub fn extracted_fields(&self) -> &ExtractionResult {
        &self.extracted_fields
    }

    pub fn missing_fields(&self) -> &MissingFieldReport {
        &self.missing_fields
    }

    pub fn recommended_route(&self) -> Route {
        self.recommended_route
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Serializes the decision as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Composes extraction, enrichment, validation and routing
#[derive(Debug, Clone)]
pub struct ClaimPipeline {
    extractor: PatternExtractor,
    enricher: FieldEnricher,
    validator: SchemaValidator,
    router: RoutingEngine,
}

impl ClaimPipeline {
    pub fn new(
        extractor: PatternExtractor,
        enricher: FieldEnricher,
        validator: SchemaValidator,
        router: RoutingEngine,
    ) -> Self {
        Self {
            extractor,
            enricher,
            validator,
            router,
        }
    }

    /// Builds the pipeline for automobile FNOL forms
    pub fn standard() -> Result<Self, ClaimError> {
        Self::from_config(&RuleSetConfig::default())
    }

    /// Builds a pipeline from a rule set
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or the mandatory field list is
    /// empty.
    pub fn from_config(config: &RuleSetConfig) -> Result<Self, ClaimError> {
        let pipeline = Self::new(
            PatternExtractor::new(config.field_rules()?),
            FieldEnricher::from_config(&config.enrichment)?,
            SchemaValidator::new(config.mandatory_schema()?),
            RoutingEngine::new(config.routing_rules.clone()),
        );

        info!(
            field_rules = pipeline.extractor.rules().len(),
            mandatory_fields = pipeline.validator.schema().fields().len(),
            routing_rules = pipeline.router.rules().len(),
            "Claim pipeline configured"
        );
        Ok(pipeline)
    }

    pub fn extractor(&self) -> &PatternExtractor {
        &self.extractor
    }

    pub fn enricher(&self) -> &FieldEnricher {
        &self.enricher
    }

    pub fn validator(&self) -> &SchemaValidator {
        &self.validator
    }

    pub fn router(&self) -> &RoutingEngine {
        &self.router
    }

    /// Turns document text into a routing decision
    ///
    /// Never fails: empty or unrecognizable text produces a decision with
    /// every field missing, routed to manual review.
    pub fn process(&self, text: &str) -> ClaimDecision {
        let extracted = self.extractor.extract(text);
        let enriched = self.enricher.enrich(text, extracted);
        let missing = self.validator.validate(&enriched);
        let outcome = self.router.route(&enriched, &missing);

        debug!(
            route = %outcome.route,
            missing = missing.len(),
            "Processed claim document"
        );

        ClaimDecision {
            extracted_fields: enriched,
            missing_fields: missing,
            recommended_route: outcome.route,
            reasoning: outcome.reason,
        }
    }
}
