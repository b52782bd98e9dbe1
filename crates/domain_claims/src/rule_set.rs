//! Rule set configuration
//!
//! A [`RuleSetConfig`] describes everything the pipeline decides with: the
//! extraction patterns, the mandatory fields, the enrichment settings and the
//! routing rules. The default value is the built-in automobile FNOL rule set.
//! Any section left out of an external file keeps its default.
//!
//! # Example
//!
//! ```toml
//! mandatory_fields = ["Policy Number", "Date of Loss"]
//!
//! [[field_rules]]
//! field = "Policy Number"
//! pattern = 'POLICY NO\.?\s*:?\s*(.+)'
//!
//! [[routing_rules]]
//! name = "default"
//! route = "Manual Review"
//! reason = "Could not confidently auto-route claim"
//! condition = { when = "always" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use core_kernel::ClaimField;
use crate::enrichment::EnrichmentConfig;
use crate::error::ClaimError;
use crate::extraction::{CapturePolicy, FieldRule};
use crate::routing::RoutingRule;
use crate::validation::MandatorySchema;

/// Serializable form of a [`FieldRule`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRuleConfig {
    pub field: ClaimField,
    pub pattern: String,
    #[serde(default)]
    pub capture: CapturePolicy,
}

impl FieldRuleConfig {
    pub fn new(field: ClaimField, pattern: impl Into<String>) -> Self {
        Self {
            field,
            pattern: pattern.into(),
            capture: CapturePolicy::FirstNonEmpty,
        }
    }

    /// Compiles the rule
    pub fn compile(&self) -> Result<FieldRule, ClaimError> {
        FieldRule::with_capture(self.field, &self.pattern, self.capture)
    }
}

/// Complete decision configuration for a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    /// Extraction rules, tried in order
    pub field_rules: Vec<FieldRuleConfig>,
    /// Fields required for automatic routing, in report order
    pub mandatory_fields: Vec<ClaimField>,
    pub enrichment: EnrichmentConfig,
    /// Routing rules, highest priority first
    pub routing_rules: Vec<RoutingRule>,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            field_rules: standard_field_rules(),
            mandatory_fields: MandatorySchema::standard().fields().to_vec(),
            enrichment: EnrichmentConfig::default(),
            routing_rules: RoutingRule::standard_rules(),
        }
    }
}

impl RuleSetConfig {
    /// Loads a rule set from a TOML, JSON or YAML file
    ///
    /// The format follows the file extension.
    pub fn load(path: &Path) -> Result<Self, ClaimError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;
        let rules: RuleSetConfig = settings.try_deserialize()?;

        info!(
            path = %path.display(),
            field_rules = rules.field_rules.len(),
            routing_rules = rules.routing_rules.len(),
            "Loaded rule set"
        );
        Ok(rules)
    }

    /// Parses a rule set from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ClaimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compiles the extraction rules, preserving order
    pub fn field_rules(&self) -> Result<Vec<FieldRule>, ClaimError> {
        self.field_rules.iter().map(FieldRuleConfig::compile).collect()
    }

    /// Builds the mandatory schema
    pub fn mandatory_schema(&self) -> Result<MandatorySchema, ClaimError> {
        MandatorySchema::new(self.mandatory_fields.iter().copied())
    }
}

/// Extraction rules for automobile FNOL forms
pub fn standard_field_rules() -> Vec<FieldRuleConfig> {
    vec![
        FieldRuleConfig::new(ClaimField::PolicyNumber, r"POLICY NUMBER\s*:?\s*(.+)"),
        FieldRuleConfig::new(ClaimField::PolicyholderName, r"NAME OF INSURED\s*:?\s*(.+)"),
        FieldRuleConfig::new(ClaimField::DateOfLoss, r"DATE OF LOSS\s*(?:AND TIME)?\s*:?\s*(.+)"),
        FieldRuleConfig::new(ClaimField::Location, r"LOCATION OF LOSS\s*:?\s*(.+)"),
        FieldRuleConfig::new(ClaimField::EstimatedDamage, r"ESTIMATE AMOUNT\s*:?\s*(.+)"),
        FieldRuleConfig::new(ClaimField::Description, r"DESCRIPTION OF (?:ACCIDENT|LOSS)\s*:?\s*(.+)"),
    ]
}
