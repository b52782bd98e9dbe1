//! HTTP API tests
//!
//! # Test Organization
//!
//! - `health_tests` - liveness and readiness
//! - `route_tests` - single document routing
//! - `batch_tests` - batch routing and its limits
//! - `rules_tests` - rule set exposure and custom rule sets

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_claims::{ClaimDecision, Route, RuleSetConfig};
use interface_api::config::ApiConfig;
use interface_api::dto::claims::RouteBatchResponse;
use interface_api::error::ErrorResponse;
use interface_api::handlers::health::{HealthResponse, ReadinessResponse};
use interface_api::{create_router, AppState};
use test_utils::{assert_routed, FnolDocumentBuilder, FnolFixtures};

fn server_with(config: ApiConfig) -> TestServer {
    let state = AppState::new(config).expect("state builds");
    TestServer::new(create_router(state)).expect("test server starts")
}

fn server() -> TestServer {
    server_with(ApiConfig::default())
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let response = server().get("/health").await;

        response.assert_status_ok();
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ready_reports_rule_counts() {
        let response = server().get("/ready").await;

        response.assert_status_ok();
        let body: ReadinessResponse = response.json();
        assert_eq!(body.status, "ready");
        assert_eq!(body.field_rules, 6);
        assert_eq!(body.routing_rules, 5);
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let response = server().get("/health").await;
        assert!(response.headers().contains_key("x-request-id"));
    }
}

mod route_tests {
    use super::*;

    #[tokio::test]
    async fn test_route_fast_track_document() {
        let response = server()
            .post("/api/v1/claims/route")
            .json(&json!({ "text": FnolFixtures::fast_track() }))
            .await;

        response.assert_status_ok();
        let decision: ClaimDecision = response.json();
        assert_routed(&decision, Route::FastTrack);
    }

    #[tokio::test]
    async fn test_route_response_uses_camel_case_keys() {
        let response = server()
            .post("/api/v1/claims/route")
            .json(&json!({ "text": FnolFixtures::injury() }))
            .await;

        let body: Value = response.json();
        assert_eq!(body["recommendedRoute"], "Specialist Queue");
        assert_eq!(body["reasoning"], "Claim involves injury");
        assert_eq!(body["extractedFields"]["Claim Type"], "injury");
        assert_eq!(body["missingFields"], json!([]));
    }

    #[tokio::test]
    async fn test_route_empty_text_goes_to_manual_review() {
        let response = server()
            .post("/api/v1/claims/route")
            .json(&json!({ "text": "" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["recommendedRoute"], "Manual Review");
        assert_eq!(
            body["missingFields"],
            json!(["Policy Number", "Policyholder Name", "Date of Loss", "Estimated Damage"])
        );
    }

    #[tokio::test]
    async fn test_route_rejects_missing_text() {
        let response = server()
            .post("/api/v1/claims/route")
            .json(&json!({ "body": "nope" }))
            .await;

        assert!(response.status_code().is_client_error());
    }
}

mod batch_tests {
    use super::*;

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let documents = vec![
            FnolFixtures::suspicious().to_string(),
            FnolFixtures::fast_track().to_string(),
            FnolFixtures::missing_policy_number().to_string(),
        ];

        let response = server()
            .post("/api/v1/claims/route/batch")
            .json(&json!({ "documents": documents }))
            .await;

        response.assert_status_ok();
        let body: RouteBatchResponse = response.json();
        let routes: Vec<Route> = body.decisions.iter().map(|d| d.recommended_route()).collect();
        assert_eq!(
            routes,
            vec![Route::InvestigationFlag, Route::FastTrack, Route::ManualReview]
        );
    }

    #[tokio::test]
    async fn test_empty_batch_is_rejected() {
        let response = server()
            .post("/api/v1/claims/route/batch")
            .json(&json!({ "documents": [] }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "validation_error");
    }

    #[tokio::test]
    async fn test_oversized_batch_is_rejected() {
        let server = server_with(ApiConfig {
            max_batch_size: 2,
            ..ApiConfig::default()
        });
        let documents = vec![FnolDocumentBuilder::new().build(); 3];

        let response = server
            .post("/api/v1/claims/route/batch")
            .json(&json!({ "documents": documents }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "bad_request");
    }
}

mod rules_tests {
    use super::*;
    use test_utils::write_rule_set;

    #[tokio::test]
    async fn test_rules_endpoint_returns_standard_rule_set() {
        let response = server().get("/api/v1/claims/rules").await;

        response.assert_status_ok();
        let rules: RuleSetConfig = response.json();
        assert_eq!(rules, RuleSetConfig::default());
    }

    #[tokio::test]
    async fn test_custom_rule_set_changes_routing() {
        let file = write_rule_set(
            r#"
mandatory_fields = ["Policy Number"]

[[routing_rules]]
name = "everything_fast"
route = "Fast-track"
reason = "Pilot programme"
condition = { when = "always" }
"#,
            "toml",
        );
        let server = server_with(ApiConfig {
            rules_path: Some(file.path().display().to_string()),
            ..ApiConfig::default()
        });

        let text = FnolDocumentBuilder::new().with_estimate("$90,000").build();
        let response = server
            .post("/api/v1/claims/route")
            .json(&json!({ "text": text }))
            .await;

        let body: Value = response.json();
        assert_eq!(body["recommendedRoute"], "Fast-track");
        assert_eq!(body["reasoning"], "Pilot programme");
    }

    #[test]
    fn test_invalid_rule_set_fails_state_construction() {
        let file = write_rule_set(
            r#"
[[field_rules]]
field = "Policy Number"
pattern = "POLICY ("
"#,
            "toml",
        );
        let config = ApiConfig {
            rules_path: Some(file.path().display().to_string()),
            ..ApiConfig::default()
        };

        assert!(AppState::new(config).is_err());
    }
}
