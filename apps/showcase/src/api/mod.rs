//! # Showcase HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /capabilities` - Full capability catalog
//! - `GET /capabilities/facets` - Facet options and counts
//! - `POST /capabilities/filter` - Multi-facet filter and search
//! - `GET /capabilities/{id}` - One capability
//! - `GET /case-studies` - Case studies and industry options
//! - `POST /case-studies/filter` - Single-select industry filter and search
//! - `POST /leads` - Validate and forward a lead to the gateway
//!
//! CORS origins and the rate limit come from [`ServerConfig`].

mod handlers;
mod middleware;
mod types;

pub use middleware::{GlobalRateLimiter, create_rate_limiter};
// Re-export handlers and types for integration tests (via `showcase::api::*`)
#[allow(unused_imports)]
pub use handlers::{
    facets_handler, filter_capabilities_handler, filter_case_studies_handler,
    get_capability_handler, health_handler, list_capabilities_handler, list_case_studies_handler,
    submit_lead_handler,
};
#[allow(unused_imports)]
pub use types::{
    CapabilityListResponse, CapabilityResponse, CaseStudyFilterRequest, CaseStudyListResponse,
    FacetsResponse, HealthResponse, LeadErrorJson, LeadResponse,
};

use crate::config::ServerConfig;
use crate::gateway::LeadGateway;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use showcase_core::{CaseStudy, Catalog, ShowcaseError, SubmissionTracker};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Filter states and leads are small.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
///
/// The catalog and case studies are immutable after startup; only the
/// submission tracker is mutated, behind a mutex. The tracker lock is never
/// held across an await.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub case_studies: Arc<Vec<CaseStudy>>,
    pub gateway: Arc<dyn LeadGateway>,
    pub submissions: Arc<Mutex<SubmissionTracker>>,
}

impl AppState {
    /// Create new app state.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        case_studies: Vec<CaseStudy>,
        gateway: Arc<dyn LeadGateway>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            case_studies: Arc::new(case_studies),
            gateway,
            submissions: Arc::new(Mutex::new(SubmissionTracker::new())),
        }
    }

    /// Lock the submission tracker.
    ///
    /// The tracker holds plain data, so a panic while locked cannot leave it
    /// half-updated and a poisoned lock is recovered.
    pub fn lock_submissions(&self) -> MutexGuard<'_, SubmissionTracker> {
        lock_tracker(&self.submissions)
    }
}

pub(crate) fn lock_tracker(
    tracker: &Mutex<SubmissionTracker>,
) -> MutexGuard<'_, SubmissionTracker> {
    tracker.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from configured origins.
///
/// - `["*"]`: any origin
/// - empty: localhost only
/// - otherwise: the listed origins; invalid entries are skipped
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o.trim() == "*") {
        tracing::warn!("CORS: Allowing ALL origins. Restrict cors_origins in production!");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("CORS: No origins configured, defaulting to localhost only");
        return build_localhost_cors();
    }

    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            let trimmed = origin.trim();
            match trimmed.parse::<HeaderValue>() {
                Ok(hv) => {
                    tracing::info!("CORS: Allowing origin: {}", trimmed);
                    Some(hv)
                }
                Err(e) => {
                    tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect();

    if allowed_origins.is_empty() {
        tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
        return build_localhost_cors();
    }

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|origin| origin.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting - if enabled
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/capabilities", get(handlers::list_capabilities_handler))
        .route("/capabilities/facets", get(handlers::facets_handler))
        .route(
            "/capabilities/filter",
            post(handlers::filter_capabilities_handler),
        )
        .route("/capabilities/{id}", get(handlers::get_capability_handler))
        .route("/case-studies", get(handlers::list_case_studies_handler))
        .route(
            "/case-studies/filter",
            post(handlers::filter_case_studies_handler),
        )
        .route("/leads", post(handlers::submit_lead_handler));

    if config.rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", config.rate_limit);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(config.rate_limit),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer(&config.cors_origins))
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(state: AppState, config: &ServerConfig) -> Result<(), ShowcaseError> {
    let addr = config.addr();
    let router = create_router(state, config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ShowcaseError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Showcase HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| ShowcaseError::IoError(format!("Server error: {}", e)))
}
