//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Filter requests reuse `FilterState` directly (`selectedVendors`,
//! `selectedCategories`, `selectedIndustries`, `searchQuery`); lead
//! requests reuse `LeadSubmission`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use showcase_core::{
    CapabilityRecord, CaseStudy, CaseStudyFilter, FacetCounts, FacetSet, FieldError,
    IndustrySelection,
};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// CAPABILITY RESPONSES
// =============================================================================

/// A list of capability records, optionally filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityListResponse {
    pub success: bool,
    /// Size of the whole catalog.
    pub total: usize,
    /// Number of records returned.
    pub count: usize,
    pub records: Vec<CapabilityRecord>,
    pub error: Option<String>,
}

impl CapabilityListResponse {
    pub fn success(total: usize, records: Vec<&CapabilityRecord>) -> Self {
        Self {
            success: true,
            total,
            count: records.len(),
            records: records.into_iter().cloned().collect(),
            error: None,
        }
    }

    pub fn error(total: usize, msg: impl Into<String>) -> Self {
        Self {
            success: false,
            total,
            count: 0,
            records: vec![],
            error: Some(msg.into()),
        }
    }
}

/// A single capability record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityResponse {
    pub success: bool,
    pub record: Option<CapabilityRecord>,
    pub error: Option<String>,
}

impl CapabilityResponse {
    pub fn found(record: &CapabilityRecord) -> Self {
        Self {
            success: true,
            record: Some(record.clone()),
            error: None,
        }
    }

    pub fn not_found(id: &str) -> Self {
        Self {
            success: false,
            record: None,
            error: Some(format!("No capability with id '{id}'")),
        }
    }
}

/// Facet options and per-value counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetsResponse {
    pub facets: FacetSet,
    pub counts: FacetCounts,
}

// =============================================================================
// CASE STUDY REQUEST/RESPONSE
// =============================================================================

/// Single-select case-study filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseStudyFilterRequest {
    /// Industry radio value; absent, blank or `"All"` means every industry.
    pub industry: Option<String>,
    pub search_query: String,
}

impl CaseStudyFilterRequest {
    /// Convert into the core filter.
    pub fn to_filter(&self) -> CaseStudyFilter {
        CaseStudyFilter::new(
            IndustrySelection::from_label(self.industry.as_deref()),
            self.search_query.clone(),
        )
    }
}

/// A list of case studies, optionally filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyListResponse {
    pub success: bool,
    pub total: usize,
    pub count: usize,
    /// Radio options for the industry selector.
    pub industries: Vec<String>,
    pub case_studies: Vec<CaseStudy>,
    pub error: Option<String>,
}

impl CaseStudyListResponse {
    pub fn success(total: usize, industries: Vec<String>, studies: Vec<&CaseStudy>) -> Self {
        Self {
            success: true,
            total,
            count: studies.len(),
            industries,
            case_studies: studies.into_iter().cloned().collect(),
            error: None,
        }
    }

    pub fn error(total: usize, msg: impl Into<String>) -> Self {
        Self {
            success: false,
            total,
            count: 0,
            industries: vec![],
            case_studies: vec![],
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// LEAD RESPONSE
// =============================================================================

/// Error body of a failed lead submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadErrorJson {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// Lead submission response: `{ "data": ... }` or `{ "error": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<LeadErrorJson>,
}

impl LeadResponse {
    pub fn success(data: Value) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::with_fields(msg, Vec::new())
    }

    pub fn with_fields(msg: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self {
            data: None,
            error: Some(LeadErrorJson {
                message: msg.into(),
                fields,
            }),
        }
    }
}
