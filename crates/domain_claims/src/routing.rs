//! Claim routing
//!
//! Routing rules are tried strictly in priority order and the first one that
//! matches decides the route. Later rules are never consulted once a rule
//! matches, even if they would also apply.
//!
//! # Standard Rules
//!
//! | # | Condition | Route |
//! |---|-----------|-------|
//! | 1 | A mandatory field is missing | Manual Review |
//! | 2 | Description mentions fraud, staged, inconsistent | Investigation Flag |
//! | 3 | Claim type is injury | Specialist Queue |
//! | 4 | Estimated damage below 25,000 | Fast-track |
//! | 5 | Anything else | Manual Review |

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use core_kernel::{ClaimField, ClaimType, ExtractionResult};
use crate::amount::parse_amount;
use crate::validation::MissingFieldReport;

/// Damage amounts strictly below this are fast-tracked
pub const FAST_TRACK_THRESHOLD: u64 = 25_000;

/// Description keywords that send a claim to investigation
pub const FRAUD_KEYWORDS: [&str; 3] = ["fraud", "staged", "inconsistent"];

pub const REASON_MISSING_FIELDS: &str = "One or more mandatory fields are missing";
pub const REASON_SUSPICIOUS: &str = "Suspicious keywords found in description";
pub const REASON_INJURY: &str = "Claim involves injury";
pub const REASON_FAST_TRACK: &str = "Estimated damage below 25,000";
pub const REASON_DEFAULT: &str = "Could not confidently auto-route claim";

/// Downstream queue for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "Fast-track")]
    FastTrack,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,
    #[serde(rename = "Manual Review")]
    ManualReview,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::FastTrack => "Fast-track",
            Route::SpecialistQueue => "Specialist Queue",
            Route::InvestigationFlag => "Investigation Flag",
            Route::ManualReview => "Manual Review",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate a routing rule tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum RuleCondition {
    /// The missing-field report is non-empty
    MandatoryFieldsMissing,
    /// The field contains one of the keywords, ignoring case
    FieldContainsAny {
        field: ClaimField,
        keywords: Vec<String>,
    },
    /// The claim type field equals the given type
    ClaimTypeIs { claim_type: ClaimType },
    /// The field parses as an amount strictly below the threshold
    AmountBelow { field: ClaimField, threshold: u64 },
    /// Always matches
    Always,
}

impl RuleCondition {
    /// Tests the condition. Unparseable or absent values never match.
    pub fn matches(&self, result: &ExtractionResult, missing: &MissingFieldReport) -> bool {
        match self {
            RuleCondition::MandatoryFieldsMissing => !missing.is_empty(),
            RuleCondition::FieldContainsAny { field, keywords } => {
                let value = result.get(*field).unwrap_or_default().to_lowercase();
                keywords
                    .iter()
                    .any(|kw| !kw.is_empty() && value.contains(&kw.to_lowercase()))
            }
            RuleCondition::ClaimTypeIs { claim_type } => {
                result.get(ClaimField::ClaimType) == Some(claim_type.as_str())
            }
            RuleCondition::AmountBelow { field, threshold } => result
                .get(*field)
                .and_then(parse_amount)
                .map(|amount| amount < *threshold)
                .unwrap_or(false),
            RuleCondition::Always => true,
        }
    }
}

/// A prioritized routing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingRule {
    /// Short identifier used in logs
    pub name: String,
    pub condition: RuleCondition,
    pub route: Route,
    /// Justification reported with the route
    pub reason: String,
}

impl RoutingRule {
    pub fn new(
        name: impl Into<String>,
        condition: RuleCondition,
        route: Route,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            condition,
            route,
            reason: reason.into(),
        }
    }

    /// The standard rule list, in priority order
    pub fn standard_rules() -> Vec<RoutingRule> {
        vec![
            RoutingRule::new(
                "missing_mandatory_fields",
                RuleCondition::MandatoryFieldsMissing,
                Route::ManualReview,
                REASON_MISSING_FIELDS,
            ),
            RoutingRule::new(
                "suspicious_description",
                RuleCondition::FieldContainsAny {
                    field: ClaimField::Description,
                    keywords: FRAUD_KEYWORDS.iter().map(|k| k.to_string()).collect(),
                },
                Route::InvestigationFlag,
                REASON_SUSPICIOUS,
            ),
            RoutingRule::new(
                "injury_claim",
                RuleCondition::ClaimTypeIs { claim_type: ClaimType::Injury },
                Route::SpecialistQueue,
                REASON_INJURY,
            ),
            RoutingRule::new(
                "low_damage_estimate",
                RuleCondition::AmountBelow {
                    field: ClaimField::EstimatedDamage,
                    threshold: FAST_TRACK_THRESHOLD,
                },
                Route::FastTrack,
                REASON_FAST_TRACK,
            ),
            RoutingRule::new(
                "default",
                RuleCondition::Always,
                Route::ManualReview,
                REASON_DEFAULT,
            ),
        ]
    }
}

/// The route chosen for a claim and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingOutcome {
    pub route: Route,
    pub reason: String,
}

impl RoutingOutcome {
    /// Outcome used when no rule matches
    pub fn fallback() -> Self {
        Self {
            route: Route::ManualReview,
            reason: REASON_DEFAULT.to_string(),
        }
    }
}

/// First-match-wins rule evaluator
#[derive(Debug, Clone)]
pub struct RoutingEngine {
    rules: Vec<RoutingRule>,
}

impl RoutingEngine {
    /// Creates an engine trying the rules in the given order
    pub fn new(rules: Vec<RoutingRule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(RoutingRule::standard_rules())
    }

    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }

    /// Picks a route for the claim
    ///
    /// Total: if no configured rule matches, the claim goes to manual review.
    pub fn route(&self, result: &ExtractionResult, missing: &MissingFieldReport) -> RoutingOutcome {
        for rule in &self.rules {
            if rule.condition.matches(result, missing) {
                debug!(rule = %rule.name, route = %rule.route, "Routing rule matched");
                return RoutingOutcome {
                    route: rule.route,
                    reason: rule.reason.clone(),
                };
            }
        }

        debug!("No routing rule matched");
        RoutingOutcome::fallback()
    }
}

impl Default for RoutingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
