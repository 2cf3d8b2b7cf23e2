//! # Core Type Definitions
//!
//! This module contains the core types of the showcase catalog:
//! - Industry tags, including the explicit wildcard (`Industry`)
//! - Capability records (`CapabilityRecord`)
//! - Per-field validation failures (`FieldError`)
//! - Error types (`ShowcaseError`)
//!
//! ## Validation
//!
//! Records are plain data with public fields so they can be written as
//! literals or deserialized from JSON. They are validated once, when a
//! `Catalog` is built from them, never again per filter call.

use crate::primitives::ALL_INDUSTRIES_LABEL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

// =============================================================================
// INDUSTRY
// =============================================================================

/// An industry tag on a catalog record.
///
/// `Any` is the wildcard: a record tagged `Any` passes every industry
/// selection. On the wire both variants are plain strings; the wildcard is
/// spelled `"All Industries"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    /// Matches every industry filter.
    Any,
    /// A real, selectable industry.
    Named(String),
}

impl Industry {
    /// Parse a display label into an industry tag.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == ALL_INDUSTRIES_LABEL {
            Self::Any
        } else {
            Self::Named(label.to_string())
        }
    }

    /// Create a named industry.
    #[must_use]
    pub fn named(label: impl Into<String>) -> Self {
        Self::Named(label.into())
    }

    /// The display label of this tag.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Any => ALL_INDUSTRIES_LABEL,
            Self::Named(name) => name,
        }
    }

    /// True for the wildcard tag.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// The selectable name, or `None` for the wildcard.
    #[must_use]
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl From<String> for Industry {
    fn from(label: String) -> Self {
        if label == ALL_INDUSTRIES_LABEL {
            Self::Any
        } else {
            Self::Named(label)
        }
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        match industry {
            Industry::Any => ALL_INDUSTRIES_LABEL.to_string(),
            Industry::Named(name) => name,
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// CAPABILITY RECORD
// =============================================================================

/// One vendor/solution capability card in the catalog.
///
/// `implementation_time` and `roi_range` are display-only and never take
/// part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRecord {
    /// Stable slug, unique across the catalog.
    pub id: String,
    /// Display title.
    pub name: String,
    /// Vendor names in display order.
    pub vendors: Vec<String>,
    /// Category labels in display order.
    pub categories: Vec<String>,
    /// Industry tags; may contain the wildcard.
    pub industries: Vec<Industry>,
    /// Free-text paragraph, searched case-insensitively.
    pub description: String,
    /// Display-only implementation estimate.
    #[serde(default)]
    pub implementation_time: String,
    /// Display-only ROI estimate.
    #[serde(default)]
    pub roi_range: String,
    /// Route of the detail view, unique across the catalog.
    pub path: String,
}

impl CapabilityRecord {
    /// True when any industry tag is the wildcard.
    #[must_use]
    pub fn serves_all_industries(&self) -> bool {
        self.industries.iter().any(Industry::is_any)
    }

    /// Check the per-record invariants.
    ///
    /// - `id`, `name` and `path` are non-blank, `path` starts with `/`
    /// - every facet list has at least one entry
    /// - no facet entry is blank or repeated within its list
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        let record = self.id.trim();
        if record.is_empty() {
            return Err(ShowcaseError::EmptyField {
                record: self.name.clone(),
                field: "id",
            });
        }

        for (field, value) in [("name", &self.name), ("path", &self.path)] {
            if value.trim().is_empty() {
                return Err(ShowcaseError::EmptyField {
                    record: record.to_string(),
                    field,
                });
            }
        }

        if !self.path.starts_with('/') {
            return Err(ShowcaseError::InvalidPath {
                record: record.to_string(),
                path: self.path.clone(),
            });
        }

        check_facet_list(record, "vendors", self.vendors.iter().map(String::as_str))?;
        check_facet_list(
            record,
            "categories",
            self.categories.iter().map(String::as_str),
        )?;
        check_facet_list(
            record,
            "industries",
            self.industries.iter().map(Industry::label),
        )?;

        Ok(())
    }
}

/// Reject empty lists, blank entries and entries repeated within one list.
fn check_facet_list<'a>(
    record: &str,
    field: &'static str,
    values: impl Iterator<Item = &'a str>,
) -> Result<(), ShowcaseError> {
    let mut seen = BTreeSet::new();
    for value in values {
        if value.trim().is_empty() {
            return Err(ShowcaseError::EmptyField {
                record: record.to_string(),
                field,
            });
        }
        if !seen.insert(value) {
            return Err(ShowcaseError::DuplicateFacetValue {
                record: record.to_string(),
                field,
                value: value.to_string(),
            });
        }
    }

    if seen.is_empty() {
        return Err(ShowcaseError::EmptyField {
            record: record.to_string(),
            field,
        });
    }
    Ok(())
}

// =============================================================================
// FIELD ERROR
// =============================================================================

/// A single failed field check, rendered inline next to the form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the field (`email`, `companySize`, ...).
    pub field: String,
    /// User-facing message.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the showcase system.
///
/// Filtering and facet building are total and never produce these; they
/// come from catalog loading, request bounds and lead capture.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// A required record field or facet list is empty.
    #[error("Record '{record}' has an empty {field}")]
    EmptyField {
        record: String,
        field: &'static str,
    },

    /// A facet value appears twice in the same record.
    #[error("Record '{record}' lists {field} value '{value}' more than once")]
    DuplicateFacetValue {
        record: String,
        field: &'static str,
        value: String,
    },

    /// A record's route is not an absolute path.
    #[error("Record '{record}' has invalid path '{path}'")]
    InvalidPath { record: String, path: String },

    /// Two records share an id.
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    /// Two records share a route.
    #[error("Duplicate record path: {0}")]
    DuplicatePath(String),

    /// The search query exceeds the request limit.
    #[error("Search query length {0} exceeds maximum {1} bytes")]
    QueryTooLong(usize, usize),

    /// Too many values selected in one facet.
    #[error("{facet} selection has {count} values, maximum is {max}")]
    TooManySelections {
        facet: &'static str,
        count: usize,
        max: usize,
    },

    /// Lead fields failed client-side validation.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// A submission for the same submitter is still pending.
    #[error("A submission for '{0}' is already in progress")]
    SubmissionInFlight(String),

    /// A submission state change that the state machine does not allow.
    #[error("Invalid submission transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// The lead capture gateway rejected or failed a submission.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
