//! # Lead Capture Gateway Client
//!
//! Sends validated leads to the remote lead capture function.
//!
//! Wire contract: `POST {base_url}/functions/v1/{function}` with the JSON
//! submission; the response body is `{ "data": ... }` on success or
//! `{ "error": { "message": ... } }` on failure.
//!
//! No retries and no idempotency key: a failed submission is surfaced to
//! the user, who may submit again.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use showcase_core::{FieldError, LeadSubmission, ShowcaseError};
use std::time::Duration;
use thiserror::Error;

use crate::config::GatewayConfig;

/// Longest slice of an unexpected response body kept in errors.
const MAX_ERROR_BODY: usize = 512;

// =============================================================================
// ERRORS
// =============================================================================

/// Coarse classification used for logging and HTTP status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    Validation,
    Transport,
    Application,
}

/// Errors from a lead submission.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Client-side checks failed; nothing was sent.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The gateway could not be reached or did not answer in time.
    #[error("Cannot reach lead gateway: {0}")]
    Transport(String),

    /// The gateway answered with an application-level error.
    #[error("Lead gateway error: {message}")]
    Application { message: String },

    /// The gateway answered with a non-success status and no error body.
    #[error("Lead gateway returned status {0}: {1}")]
    UnexpectedStatus(u16, String),

    /// A success response could not be parsed.
    #[error("Cannot parse gateway response: {0}")]
    Parse(String),
}

impl GatewayError {
    /// Coarse classification of the failure.
    #[must_use]
    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            Self::Validation(_) => GatewayErrorKind::Validation,
            Self::Transport(_) => GatewayErrorKind::Transport,
            Self::Application { .. } | Self::UnexpectedStatus(..) | Self::Parse(_) => {
                GatewayErrorKind::Application
            }
        }
    }

    /// Text shown to the user next to the retry button.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) => "Please correct the highlighted fields.".to_string(),
            Self::Transport(_) => {
                "We couldn't reach our servers. Check your connection and try again.".to_string()
            }
            Self::Application { message } => message.clone(),
            Self::UnexpectedStatus(..) | Self::Parse(_) => {
                "Something went wrong submitting your request. Please try again.".to_string()
            }
        }
    }

    /// Per-field failures, empty unless this is a validation error.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<GatewayError> for ShowcaseError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Validation(errors) => ShowcaseError::Validation(errors),
            other => ShowcaseError::Gateway(other.to_string()),
        }
    }
}

// =============================================================================
// RESPONSE HANDLING
// =============================================================================

/// Application-level acknowledgement returned by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub data: Value,
}

/// Pull `error.message` (or a bare `error` string) out of a body.
fn error_message(body: &Value) -> Option<String> {
    match body.get("error") {
        Some(Value::Object(error)) => Some(
            error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("The request could not be completed.")
                .to_string(),
        ),
        Some(Value::String(message)) => Some(message.clone()),
        _ => None,
    }
}

fn truncate(body: &str) -> String {
    let mut end = body.len().min(MAX_ERROR_BODY);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}

/// Interpret a gateway response.
///
/// - any body carrying `error` is an application error, whatever the status
/// - a 2xx body is success: its `data` member, or the whole body
/// - an empty 2xx body is success with `null` data
/// - anything else is an unexpected status
pub fn parse_response(status: u16, body: &str) -> Result<Acknowledgement, GatewayError> {
    let success = (200..300).contains(&status);

    if body.trim().is_empty() {
        return if success {
            Ok(Acknowledgement { data: Value::Null })
        } else {
            Err(GatewayError::UnexpectedStatus(status, String::new()))
        };
    }

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if success => return Err(GatewayError::Parse(e.to_string())),
        Err(_) => return Err(GatewayError::UnexpectedStatus(status, truncate(body))),
    };

    if let Some(message) = error_message(&parsed) {
        return Err(GatewayError::Application { message });
    }

    if !success {
        return match parsed.get("message").and_then(Value::as_str) {
            Some(message) => Err(GatewayError::Application {
                message: message.to_string(),
            }),
            None => Err(GatewayError::UnexpectedStatus(status, truncate(body))),
        };
    }

    let data = match parsed {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    Ok(Acknowledgement { data })
}

// =============================================================================
// GATEWAY
// =============================================================================

/// Anything that can accept a lead submission.
#[async_trait]
pub trait LeadGateway: Send + Sync {
    /// Deliver one submission. Callers validate first (see `submit_lead`).
    async fn submit(&self, lead: &LeadSubmission) -> Result<Acknowledgement, GatewayError>;
}

/// Gateway reached over HTTP with reqwest.
#[derive(Clone)]
pub struct HttpLeadGateway {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpLeadGateway {
    /// Build a client from configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, ShowcaseError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| ShowcaseError::ConfigError(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/functions/v1/{}",
                config.base_url.trim_end_matches('/'),
                config.function.trim_matches('/')
            ),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL submissions are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadGateway for HttpLeadGateway {
    async fn submit(&self, lead: &LeadSubmission) -> Result<Acknowledgement, GatewayError> {
        let mut request = self.http.post(&self.endpoint).json(lead);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("{}: {e}", self.endpoint)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("{}: {e}", self.endpoint)))?;

        parse_response(status, &body)
    }
}

/// Validate, then submit. An invalid lead never reaches the network.
pub async fn submit_lead(
    gateway: &dyn LeadGateway,
    lead: &LeadSubmission,
) -> Result<Acknowledgement, GatewayError> {
    let errors = lead.field_errors();
    if !errors.is_empty() {
        tracing::debug!(
            stage = %lead.stage,
            fields = errors.len(),
            "Lead rejected by client-side validation"
        );
        return Err(GatewayError::Validation(errors));
    }

    tracing::info!(stage = %lead.stage, "Submitting lead");
    match gateway.submit(lead).await {
        Ok(ack) => {
            tracing::info!(stage = %lead.stage, "Lead accepted by gateway");
            Ok(ack)
        }
        Err(e) => {
            tracing::warn!(
                event = "lead_submission_failed",
                kind = ?e.kind(),
                "Lead submission failed: {}",
                e
            );
            Err(e)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
