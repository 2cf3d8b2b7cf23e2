//! # Proven Case Studies
//!
//! The smaller case-study list uses a single-select industry filter plus
//! free text. It runs through the same engine as the capability hub: the
//! selection becomes an empty or singleton industry set.

use crate::filter::{Facet, FilterState, Filterable, filter};
use crate::primitives::ALL_INDUSTRIES_LABEL;
use crate::{Industry, ShowcaseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Radio label that means "no industry restriction".
pub const ALL_SELECTION_LABEL: &str = "All";

/// A delivered client engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub industry: Industry,
    /// Category-equivalent facet: the solution delivered.
    pub solution: String,
    pub challenge: String,
    #[serde(default)]
    pub results: Vec<String>,
    pub path: String,
}

impl CaseStudy {
    /// Check the per-study invariants.
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        let record = self.id.trim();
        if record.is_empty() {
            return Err(ShowcaseError::EmptyField {
                record: self.title.clone(),
                field: "id",
            });
        }
        for (field, value) in [
            ("title", &self.title),
            ("solution", &self.solution),
            ("challenge", &self.challenge),
            ("path", &self.path),
        ] {
            if value.trim().is_empty() {
                return Err(ShowcaseError::EmptyField {
                    record: record.to_string(),
                    field,
                });
            }
        }
        if self.industry.label().trim().is_empty() {
            return Err(ShowcaseError::EmptyField {
                record: record.to_string(),
                field: "industry",
            });
        }
        if !self.path.starts_with('/') {
            return Err(ShowcaseError::InvalidPath {
                record: record.to_string(),
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}

impl Filterable for CaseStudy {
    fn vendors(&self) -> &[String] {
        &[]
    }

    fn categories(&self) -> &[String] {
        std::slice::from_ref(&self.solution)
    }

    fn industries(&self) -> &[Industry] {
        std::slice::from_ref(&self.industry)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.industry.label(),
            self.solution.as_str(),
            self.challenge.as_str(),
        ]
    }
}

/// Validate a case-study list, including unique ids and routes.
pub fn validate_case_studies(studies: &[CaseStudy]) -> Result<(), ShowcaseError> {
    let mut ids = BTreeSet::new();
    let mut paths = BTreeSet::new();
    for study in studies {
        study.validate()?;
        if !ids.insert(study.id.trim()) {
            return Err(ShowcaseError::DuplicateId(study.id.clone()));
        }
        if !paths.insert(study.path.trim()) {
            return Err(ShowcaseError::DuplicatePath(study.path.clone()));
        }
    }
    Ok(())
}

// =============================================================================
// SINGLE-SELECT FILTER
// =============================================================================

/// Single-valued industry selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IndustrySelection {
    #[default]
    All,
    Only(String),
}

impl IndustrySelection {
    /// Interpret a radio label. Blank, `"All"` and the wildcard label all
    /// mean no restriction.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("" | ALL_SELECTION_LABEL | ALL_INDUSTRIES_LABEL) => Self::All,
            Some(name) => Self::Only(name.to_string()),
        }
    }
}

/// Industry radio plus free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStudyFilter {
    pub industry: IndustrySelection,
    pub search_query: String,
}

impl CaseStudyFilter {
    /// Create a filter from a selection and query.
    #[must_use]
    pub fn new(industry: IndustrySelection, search_query: impl Into<String>) -> Self {
        Self {
            industry,
            search_query: search_query.into(),
        }
    }

    /// The equivalent multi-facet state.
    #[must_use]
    pub fn to_filter_state(&self) -> FilterState {
        let state = FilterState::new().with_search(self.search_query.clone());
        match &self.industry {
            IndustrySelection::All => state,
            IndustrySelection::Only(name) => state.select(Facet::Industry, name.clone()),
        }
    }
}

/// Case studies matching the filter, in list order.
#[must_use]
pub fn filter_case_studies<'a>(
    studies: &'a [CaseStudy],
    case_filter: &CaseStudyFilter,
) -> Vec<&'a CaseStudy> {
    filter(studies, &case_filter.to_filter_state())
}

/// Distinct named industries across the list, sorted.
#[must_use]
pub fn case_study_industries(studies: &[CaseStudy]) -> Vec<String> {
    studies
        .iter()
        .filter_map(|study| study.industry.as_named())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
