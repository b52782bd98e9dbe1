//! Claim routing DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::ClaimDecision;

/// Routes a single FNOL document given as plain text
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteClaimRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RouteBatchRequest {
    #[validate(length(min = 1, message = "at least one document is required"))]
    pub documents: Vec<String>,
}

/// Decisions in request order
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteBatchResponse {
    pub decisions: Vec<ClaimDecision>,
}
