//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState, lock_tracker,
    types::{
        CapabilityListResponse, CapabilityResponse, CaseStudyFilterRequest, CaseStudyListResponse,
        FacetsResponse, HealthResponse, LeadResponse,
    },
};
use crate::gateway::{GatewayErrorKind, submit_lead};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use showcase_core::{
    FilterState, LeadSubmission, ShowcaseError, SubmissionState, SubmissionTracker,
    case_study_industries, filter_case_studies,
};
use std::sync::{Arc, Mutex};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// CAPABILITY HANDLERS
// =============================================================================

/// Every capability, in catalog order.
pub async fn list_capabilities_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = &state.catalog;
    (
        StatusCode::OK,
        Json(CapabilityListResponse::success(
            catalog.len(),
            catalog.iter().collect(),
        )),
    )
}

/// Facet options and counts for the filter sidebar.
pub async fn facets_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = FacetsResponse {
        facets: state.catalog.facets(),
        counts: state.catalog.facet_counts(),
    };
    (StatusCode::OK, Json(response))
}

/// Apply a multi-facet filter state.
pub async fn filter_capabilities_handler(
    State(state): State<AppState>,
    Json(request): Json<FilterState>,
) -> impl IntoResponse {
    let total = state.catalog.len();
    if let Err(e) = request.check_limits() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CapabilityListResponse::error(total, e.to_string())),
        );
    }

    let records = state.catalog.filter(&request);
    tracing::debug!(
        facets = request.active_facet_count(),
        matched = records.len(),
        total,
        "Filtered capabilities"
    );
    (
        StatusCode::OK,
        Json(CapabilityListResponse::success(total, records)),
    )
}

/// One capability by id.
pub async fn get_capability_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.get(&id) {
        Some(record) => (StatusCode::OK, Json(CapabilityResponse::found(record))),
        None => (StatusCode::NOT_FOUND, Json(CapabilityResponse::not_found(&id))),
    }
}

// =============================================================================
// CASE STUDY HANDLERS
// =============================================================================

/// Every case study, with the industry radio options.
pub async fn list_case_studies_handler(State(state): State<AppState>) -> impl IntoResponse {
    let studies = state.case_studies.as_slice();
    (
        StatusCode::OK,
        Json(CaseStudyListResponse::success(
            studies.len(),
            case_study_industries(studies),
            studies.iter().collect(),
        )),
    )
}

/// Apply the single-select industry filter and search.
pub async fn filter_case_studies_handler(
    State(state): State<AppState>,
    Json(request): Json<CaseStudyFilterRequest>,
) -> impl IntoResponse {
    let studies = state.case_studies.as_slice();
    let filter = request.to_filter();
    if let Err(e) = filter.to_filter_state().check_limits() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CaseStudyListResponse::error(studies.len(), e.to_string())),
        );
    }

    (
        StatusCode::OK,
        Json(CaseStudyListResponse::success(
            studies.len(),
            case_study_industries(studies),
            filter_case_studies(studies, &filter),
        )),
    )
}

// =============================================================================
// LEAD HANDLER
// =============================================================================

/// Validate and forward a lead to the gateway.
///
/// - 422: client-side validation failed, nothing was sent
/// - 409: a submission for the same email is still pending
/// - 502: the gateway failed or rejected the lead
pub async fn submit_lead_handler(
    State(state): State<AppState>,
    Json(lead): Json<LeadSubmission>,
) -> impl IntoResponse {
    let errors = lead.field_errors();
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LeadResponse::with_fields(
                "Please correct the highlighted fields.",
                errors,
            )),
        );
    }

    let submission = match InFlight::begin(&state.submissions, lead.submitter_key()) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::info!(stage = %lead.stage, "Rejected overlapping lead submission");
            return (StatusCode::CONFLICT, Json(LeadResponse::error(e.to_string())));
        }
    };

    let outcome = submit_lead(state.gateway.as_ref(), &lead).await;

    match outcome {
        Ok(ack) => {
            submission.succeed();
            (StatusCode::OK, Json(LeadResponse::success(ack.data)))
        }
        Err(e) => {
            let message = e.user_message();
            submission.fail(message.clone());
            let status = match e.kind() {
                GatewayErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
                GatewayErrorKind::Transport | GatewayErrorKind::Application => {
                    StatusCode::BAD_GATEWAY
                }
            };
            let fields = e.field_errors().to_vec();
            (status, Json(LeadResponse::with_fields(message, fields)))
        }
    }
}

/// A pending tracker entry owned by one request.
///
/// Completing it records the outcome. Dropping it first, as happens when the
/// client disconnects mid-submit, releases the submitter so a retry is not
/// rejected as overlapping.
struct InFlight {
    submissions: Arc<Mutex<SubmissionTracker>>,
    key: String,
    done: bool,
}

impl InFlight {
    fn begin(
        submissions: &Arc<Mutex<SubmissionTracker>>,
        key: String,
    ) -> Result<Self, ShowcaseError> {
        lock_tracker(submissions).begin(&key)?;
        Ok(Self {
            submissions: Arc::clone(submissions),
            key,
            done: false,
        })
    }

    fn succeed(mut self) {
        self.done = true;
        let result = lock_tracker(&self.submissions).succeed(&self.key);
        record_completion(result);
    }

    fn fail(mut self, message: String) {
        self.done = true;
        let result = lock_tracker(&self.submissions).fail(&self.key, message);
        record_completion(result);
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.done && lock_tracker(&self.submissions).abandon(&self.key) {
            tracing::warn!("Lead submission dropped before the gateway answered");
        }
    }
}

/// The entry is always pending here; a mismatch is logged, not returned.
fn record_completion(result: Result<SubmissionState, ShowcaseError>) {
    match result {
        Ok(state) => tracing::debug!(state = state.name(), "Lead submission finished"),
        Err(e) => tracing::error!("Submission tracker out of sync: {}", e),
    }
}
