//! Integration tests for the showcase HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.
//! The lead gateway is replaced by an in-process fake.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};
use axum::{Json, extract::State, response::IntoResponse};
use showcase::api::{
    AppState, CapabilityListResponse, CapabilityResponse, CaseStudyListResponse, FacetsResponse,
    HealthResponse, LeadResponse, create_router, submit_lead_handler,
};
use showcase::config::ServerConfig;
use showcase::gateway::{Acknowledgement, GatewayError, LeadGateway};
use showcase_core::{
    LeadStage, LeadSubmission, SubmissionState, builtin_case_studies, builtin_catalog,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// How the fake gateway answers.
#[derive(Clone)]
enum Behavior {
    Accept,
    Reject(String),
    Unreachable,
}

/// Gateway double recording every lead it receives.
struct FakeGateway {
    behavior: Behavior,
    received: Mutex<Vec<LeadSubmission>>,
}

impl FakeGateway {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            received: Mutex::new(Vec::new()),
        })
    }

    fn received(&self) -> Vec<LeadSubmission> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadGateway for FakeGateway {
    async fn submit(&self, lead: &LeadSubmission) -> Result<Acknowledgement, GatewayError> {
        self.received.lock().unwrap().push(lead.clone());
        match &self.behavior {
            Behavior::Accept => Ok(Acknowledgement {
                data: json!({ "id": "lead-1", "stage": lead.stage }),
            }),
            Behavior::Reject(message) => Err(GatewayError::Application {
                message: message.clone(),
            }),
            Behavior::Unreachable => Err(GatewayError::Transport("connection refused".to_string())),
        }
    }
}

/// Gateway that blocks every submission until released.
#[derive(Default)]
struct HoldingGateway {
    entered: Notify,
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait]
impl LeadGateway for HoldingGateway {
    async fn submit(&self, lead: &LeadSubmission) -> Result<Acknowledgement, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(Acknowledgement {
            data: json!({ "id": "lead-1", "stage": lead.stage }),
        })
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        rate_limit: 0,
        ..ServerConfig::default()
    }
}

fn test_state(gateway: Arc<FakeGateway>) -> AppState {
    AppState::new(
        builtin_catalog().unwrap(),
        builtin_case_studies().unwrap(),
        gateway,
    )
}

/// Create a test server over the builtin catalog.
fn create_test_server(behavior: Behavior) -> (TestServer, Arc<FakeGateway>) {
    let gateway = FakeGateway::new(behavior);
    let router = create_router(test_state(gateway.clone()), &test_config());
    (TestServer::new(router).unwrap(), gateway)
}

fn contact_lead() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "stage": "contact"
    })
}

fn ids(response: &CapabilityListResponse) -> Vec<&str> {
    response.records.iter().map(|r| r.id.as_str()).collect()
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// CAPABILITY ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_list_capabilities_returns_catalog_order() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server.get("/capabilities").await;

    response.assert_status_ok();
    let list: CapabilityListResponse = response.json();
    assert!(list.success);
    assert_eq!(list.count, list.total);
    assert_eq!(ids(&list)[0], "sap-s4hana-transformation");
}

#[tokio::test]
async fn test_facets_exclude_wildcard() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server.get("/capabilities/facets").await;

    response.assert_status_ok();
    let facets: FacetsResponse = response.json();
    assert!(!facets.facets.industries.iter().any(|i| i == "All Industries"));
    assert!(facets.facets.vendors.windows(2).all(|w| w[0] < w[1]));
    assert!(facets.counts.vendors.contains_key("SAP"));
}

#[tokio::test]
async fn test_filter_empty_state_returns_all() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server.post("/capabilities/filter").json(&json!({})).await;

    response.assert_status_ok();
    let list: CapabilityListResponse = response.json();
    assert_eq!(list.count, list.total);
}

#[tokio::test]
async fn test_filter_industry_includes_wildcard_records() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server
        .post("/capabilities/filter")
        .json(&json!({ "selectedIndustries": ["Higher Education"] }))
        .await;

    response.assert_status_ok();
    let list: CapabilityListResponse = response.json();
    assert_eq!(
        ids(&list),
        vec![
            "aws-cloud-migration",
            "servicenow-itsm",
            "workday-hcm",
            "google-cloud-ai",
            "crowdstrike-zero-trust"
        ]
    );
}

#[tokio::test]
async fn test_filter_combines_facets_and_search() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server
        .post("/capabilities/filter")
        .json(&json!({
            "selectedVendors": ["SAP", "Oracle"],
            "searchQuery": "  ORACLE  "
        }))
        .await;

    response.assert_status_ok();
    let list: CapabilityListResponse = response.json();
    assert_eq!(ids(&list), vec!["oracle-cloud-erp"]);
}

#[tokio::test]
async fn test_filter_unknown_vendor_returns_empty() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server
        .post("/capabilities/filter")
        .json(&json!({ "selectedVendors": ["Nonexistent Vendor"] }))
        .await;

    response.assert_status_ok();
    let list: CapabilityListResponse = response.json();
    assert!(list.success);
    assert_eq!(list.count, 0);
}

#[tokio::test]
async fn test_filter_rejects_oversized_query() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server
        .post("/capabilities/filter")
        .json(&json!({ "searchQuery": "x".repeat(10_000) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let list: CapabilityListResponse = response.json();
    assert!(!list.success);
    assert!(list.error.is_some());
}

#[tokio::test]
async fn test_get_capability_by_id() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server.get("/capabilities/workday-hcm").await;

    response.assert_status_ok();
    let body: CapabilityResponse = response.json();
    let record = body.record.unwrap();
    assert_eq!(record.id, "workday-hcm");
    assert!(record.path.starts_with('/'));
}

#[tokio::test]
async fn test_get_unknown_capability_is_404() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server.get("/capabilities/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: CapabilityResponse = response.json();
    assert!(!body.success);
    assert!(body.error.unwrap().contains("does-not-exist"));
}

// =============================================================================
// CASE STUDY ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_list_case_studies() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server.get("/case-studies").await;

    response.assert_status_ok();
    let list: CaseStudyListResponse = response.json();
    assert_eq!(list.count, list.total);
    assert!(list.industries.iter().any(|i| i == "Healthcare"));
}

#[tokio::test]
async fn test_filter_case_studies_all_label_is_no_restriction() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server
        .post("/case-studies/filter")
        .json(&json!({ "industry": "All" }))
        .await;

    response.assert_status_ok();
    let list: CaseStudyListResponse = response.json();
    assert_eq!(list.count, list.total);
}

#[tokio::test]
async fn test_filter_case_studies_by_industry_and_search() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server
        .post("/case-studies/filter")
        .json(&json!({ "industry": "Healthcare", "searchQuery": "merger" }))
        .await;

    response.assert_status_ok();
    let list: CaseStudyListResponse = response.json();
    assert_eq!(list.count, 1);
    assert_eq!(list.case_studies[0].id, "regional-health-system-workday");
}

// =============================================================================
// LEAD ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_submit_lead_success() {
    let (server, gateway) = create_test_server(Behavior::Accept);

    let response = server.post("/leads").json(&contact_lead()).await;

    response.assert_status_ok();
    let body: LeadResponse = response.json();
    assert_eq!(body.data.unwrap()["id"], "lead-1");
    assert!(body.error.is_none());

    let received = gateway.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].stage, LeadStage::Contact);
}

#[tokio::test]
async fn test_invalid_lead_never_reaches_gateway() {
    let (server, gateway) = create_test_server(Behavior::Accept);

    let response = server
        .post("/leads")
        .json(&json!({ "name": "", "email": "not-an-email", "stage": "assessment" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: LeadResponse = response.json();
    let fields: Vec<String> = body
        .error
        .unwrap()
        .fields
        .into_iter()
        .map(|f| f.field)
        .collect();
    assert!(fields.contains(&"name".to_string()));
    assert!(fields.contains(&"email".to_string()));
    assert!(fields.contains(&"companySize".to_string()));
    assert!(gateway.received().is_empty());
}

#[tokio::test]
async fn test_malformed_lead_body_rejected() {
    let (server, gateway) = create_test_server(Behavior::Accept);

    let response = server
        .post("/leads")
        .json(&json!({ "name": "Ada" }))
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
    assert!(gateway.received().is_empty());
}

#[tokio::test]
async fn test_gateway_application_error_is_bad_gateway() {
    let (server, _) = create_test_server(Behavior::Reject("Email already registered".to_string()));

    let response = server.post("/leads").json(&contact_lead()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: LeadResponse = response.json();
    assert_eq!(body.error.unwrap().message, "Email already registered");
}

#[tokio::test]
async fn test_gateway_transport_error_mentions_connection() {
    let (server, _) = create_test_server(Behavior::Unreachable);

    let response = server.post("/leads").json(&contact_lead()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: LeadResponse = response.json();
    assert!(body.error.unwrap().message.contains("connection"));
}

#[tokio::test]
async fn test_overlapping_submission_rejected() {
    let gateway = FakeGateway::new(Behavior::Accept);
    let state = test_state(gateway.clone());
    state.lock_submissions().begin("ada@example.com").unwrap();
    let server = TestServer::new(create_router(state, &test_config())).unwrap();

    let response = server.post("/leads").json(&contact_lead()).await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(gateway.received().is_empty());
}

#[tokio::test]
async fn test_concurrent_submissions_for_same_email_conflict() {
    let gateway = Arc::new(HoldingGateway::default());
    let state = AppState::new(
        builtin_catalog().unwrap(),
        builtin_case_studies().unwrap(),
        gateway.clone(),
    );
    let server = TestServer::new(create_router(state.clone(), &test_config())).unwrap();

    let first = async { server.post("/leads").json(&contact_lead()).await };
    let second = async {
        gateway.entered.notified().await;
        let response = server.post("/leads").json(&contact_lead()).await;
        gateway.release.notify_one();
        response
    };
    let (first, second) = tokio::join!(first, second);

    first.assert_status_ok();
    second.assert_status(StatusCode::CONFLICT);
    let body: LeadResponse = second.json();
    assert!(body.error.unwrap().message.contains("ada@example.com"));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    assert!(state.lock_submissions().is_empty());
}

#[tokio::test]
async fn test_dropped_submission_releases_email() {
    let holding = Arc::new(HoldingGateway::default());
    let state = AppState::new(
        builtin_catalog().unwrap(),
        builtin_case_studies().unwrap(),
        holding.clone(),
    );
    let lead = LeadSubmission::new("Ada Lovelace", "ada@example.com", LeadStage::Contact);

    // The gateway never answers; the handler future is dropped on timeout
    // the way a client disconnect drops it.
    let abandoned = tokio::time::timeout(
        Duration::from_millis(50),
        submit_lead_handler(State(state.clone()), Json(lead)),
    )
    .await;
    assert!(abandoned.is_err());
    assert_eq!(holding.calls.load(Ordering::SeqCst), 1);
    assert!(state.lock_submissions().is_empty());

    let accepting = FakeGateway::new(Behavior::Accept);
    let retry_state = AppState {
        gateway: accepting.clone(),
        ..state.clone()
    };
    let server = TestServer::new(create_router(retry_state, &test_config())).unwrap();

    server
        .post("/leads")
        .json(&contact_lead())
        .await
        .assert_status_ok();
    assert_eq!(accepting.received().len(), 1);
    assert!(state.lock_submissions().is_empty());
}

#[tokio::test]
async fn test_completed_handler_leaves_no_pending_entry() {
    let gateway = FakeGateway::new(Behavior::Accept);
    let state = test_state(gateway.clone());
    let lead = LeadSubmission::new("Ada Lovelace", "ada@example.com", LeadStage::Contact);

    let response = submit_lead_handler(State(state.clone()), Json(lead))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(gateway.received().len(), 1);
    assert!(state.lock_submissions().is_empty());
}

#[tokio::test]
async fn test_failed_submission_can_be_retried() {
    let gateway = FakeGateway::new(Behavior::Unreachable);
    let state = test_state(gateway.clone());
    let server = TestServer::new(create_router(state.clone(), &test_config())).unwrap();

    server
        .post("/leads")
        .json(&contact_lead())
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(
        state.lock_submissions().state("ada@example.com"),
        SubmissionState::Idle
    );

    server
        .post("/leads")
        .json(&contact_lead())
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(gateway.received().len(), 2);
    assert_eq!(state.lock_submissions().pending_count(), 0);
}

// =============================================================================
// MIDDLEWARE TESTS
// =============================================================================

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let config = ServerConfig {
        rate_limit: 1,
        ..ServerConfig::default()
    };
    let server = TestServer::new(create_router(
        test_state(FakeGateway::new(Behavior::Accept)),
        &config,
    ))
    .unwrap();

    server.get("/health").await.assert_status_ok();
    let response = server.get("/health").expect_failure().await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_configured_cors_origin_allowed() {
    let config = ServerConfig {
        rate_limit: 0,
        cors_origins: vec!["https://www.example.com".to_string()],
        ..ServerConfig::default()
    };
    let server = TestServer::new(create_router(
        test_state(FakeGateway::new(Behavior::Accept)),
        &config,
    ))
    .unwrap();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://www.example.com"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("https://www.example.com"))
    );
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_cors_header() {
    let (server, _) = create_test_server(Behavior::Accept);

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://evil.example"),
        )
        .await;

    assert!(response.headers().get("access-control-allow-origin").is_none());
}
