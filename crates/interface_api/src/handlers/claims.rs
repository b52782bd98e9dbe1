//! Claim routing handlers

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use domain_claims::{ClaimDecision, RuleSetConfig};
use crate::{AppState, error::ApiError};
use crate::dto::claims::*;

/// Routes one FNOL document
pub async fn route_claim(
    State(state): State<AppState>,
    Json(request): Json<RouteClaimRequest>,
) -> Result<Json<ClaimDecision>, ApiError> {
    let pipeline = state.pipeline.clone();
    let decision = tokio::task::spawn_blocking(move || pipeline.process(&request.text)).await?;

    info!(route = %decision.recommended_route(), "Claim routed");
    Ok(Json(decision))
}

/// Routes a batch of FNOL documents
pub async fn route_batch(
    State(state): State<AppState>,
    Json(request): Json<RouteBatchRequest>,
) -> Result<Json<RouteBatchResponse>, ApiError> {
    request.validate()?;

    let max = state.config.max_batch_size;
    if request.documents.len() > max {
        return Err(ApiError::BadRequest(format!(
            "batch of {} documents exceeds the limit of {}",
            request.documents.len(),
            max
        )));
    }

    let pipeline = state.pipeline.clone();
    let decisions = tokio::task::spawn_blocking(move || {
        request
            .documents
            .iter()
            .map(|text| pipeline.process(text))
            .collect::<Vec<_>>()
    })
    .await?;

    info!(documents = decisions.len(), "Claim batch routed");
    Ok(Json(RouteBatchResponse { decisions }))
}

/// Returns the active rule set
pub async fn get_rules(State(state): State<AppState>) -> Json<RuleSetConfig> {
    Json(state.rules.as_ref().clone())
}
