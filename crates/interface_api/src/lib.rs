//! HTTP API Layer
//!
//! This crate exposes the FNOL claim pipeline over REST using Axum, and
//! ships the `fnol-route` command line tool.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for health and claim routing
//! - **Middleware**: Request IDs, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(config)?;
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod telemetry;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::{ClaimError, ClaimPipeline, RuleSetConfig};
use crate::config::ApiConfig;
use crate::handlers::{claims, health};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ClaimPipeline>,
    pub rules: Arc<RuleSetConfig>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds state from the configured rule set
    pub fn new(config: ApiConfig) -> Result<Self, ClaimError> {
        let rules = config.load_rule_set()?;
        Self::with_rules(config, rules)
    }

    /// Builds state from an explicit rule set
    pub fn with_rules(config: ApiConfig, rules: RuleSetConfig) -> Result<Self, ClaimError> {
        let pipeline = ClaimPipeline::from_config(&rules)?;
        Ok(Self {
            pipeline: Arc::new(pipeline),
            rules: Arc::new(rules),
            config,
        })
    }
}

/// Creates the main API router
///
/// # Routes
///
/// | Method | Path | Handler |
/// |--------|------|---------|
/// | GET | `/health` | liveness |
/// | GET | `/ready` | readiness |
/// | POST | `/api/v1/claims/route` | route one document |
/// | POST | `/api/v1/claims/route/batch` | route many documents |
/// | GET | `/api/v1/claims/rules` | active rule set |
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check));

    // Claim routes
    let claim_routes = Router::new()
        .route("/claims/route", post(claims::route_claim))
        .route("/claims/route/batch", post(claims::route_batch))
        .route("/claims/rules", get(claims::get_rules))
        .layer(axum_middleware::from_fn(request_logging));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", claim_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
