//! # Filter Engine
//!
//! Facet and free-text filtering over an in-memory list of records.
//!
//! - OR within a facet: any one selected value is enough
//! - AND across facets: every facet with a selection must be satisfied
//! - `Industry::Any` passes every industry selection
//! - Search is a trimmed, case-insensitive substring match
//!
//! The engine never reorders, duplicates or invents records: the result is
//! always a subsequence of the input.

use crate::primitives::{MAX_QUERY_LENGTH, MAX_SELECTIONS_PER_FACET};
use crate::{CapabilityRecord, Industry, ShowcaseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// FACET
// =============================================================================

/// A filterable dimension of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Vendor,
    Category,
    Industry,
}

impl Facet {
    /// All facets in display order.
    pub const ALL: [Facet; 3] = [Facet::Vendor, Facet::Category, Facet::Industry];

    /// Lowercase name used in messages and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::Category => "category",
            Self::Industry => "industry",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// FILTERABLE
// =============================================================================

/// Anything the engine can filter.
///
/// A facet the type does not have is an empty slice; an empty slice only
/// fails a predicate when that facet has an active selection.
pub trait Filterable {
    /// Vendor names.
    fn vendors(&self) -> &[String];

    /// Category labels.
    fn categories(&self) -> &[String];

    /// Industry tags, possibly including the wildcard.
    fn industries(&self) -> &[Industry];

    /// Text fields the search query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Filterable for CapabilityRecord {
    fn vendors(&self) -> &[String] {
        &self.vendors
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn industries(&self) -> &[Industry] {
        &self.industries
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(
            2 + self.vendors.len() + self.categories.len() + self.industries.len(),
        );
        fields.push(self.name.as_str());
        fields.push(self.description.as_str());
        fields.extend(self.vendors.iter().map(String::as_str));
        fields.extend(self.categories.iter().map(String::as_str));
        fields.extend(self.industries.iter().map(Industry::label));
        fields
    }
}

// =============================================================================
// FILTER STATE
// =============================================================================

/// The caller's current selections and search text.
///
/// An immutable value: every transition returns a new state. The default
/// state has no active predicate and lets every record through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub selected_vendors: BTreeSet<String>,
    pub selected_categories: BTreeSet<String>,
    pub selected_industries: BTreeSet<String>,
    pub search_query: String,
}

impl FilterState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selection set of a facet.
    #[must_use]
    pub fn selection(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Vendor => &self.selected_vendors,
            Facet::Category => &self.selected_categories,
            Facet::Industry => &self.selected_industries,
        }
    }

    fn selection_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Vendor => &mut self.selected_vendors,
            Facet::Category => &mut self.selected_categories,
            Facet::Industry => &mut self.selected_industries,
        }
    }

    /// Check whether a value is selected in a facet.
    #[must_use]
    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selection(facet).contains(value)
    }

    /// Add a value to a facet selection (builder style).
    #[must_use]
    pub fn select(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.selection_mut(facet).insert(value.into());
        self
    }

    /// Toggle a value: remove it when selected, add it otherwise.
    #[must_use]
    pub fn toggled(&self, facet: Facet, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        let selection = next.selection_mut(facet);
        if !selection.remove(&value) {
            selection.insert(value);
        }
        next
    }

    /// Replace the search text. Stored verbatim; trimming happens at match time.
    #[must_use]
    pub fn with_search(&self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self.clone()
        }
    }

    /// Drop every selection and the search text.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Number of facets with at least one selected value.
    #[must_use]
    pub fn active_facet_count(&self) -> usize {
        Facet::ALL
            .iter()
            .filter(|facet| !self.selection(**facet).is_empty())
            .count()
    }

    /// True when no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_facet_count() == 0 && normalized_query(&self.search_query).is_none()
    }

    /// Bound a state received from outside the process.
    pub fn check_limits(&self) -> Result<(), ShowcaseError> {
        if self.search_query.len() > MAX_QUERY_LENGTH {
            return Err(ShowcaseError::QueryTooLong(
                self.search_query.len(),
                MAX_QUERY_LENGTH,
            ));
        }
        for facet in Facet::ALL {
            let count = self.selection(facet).len();
            if count > MAX_SELECTIONS_PER_FACET {
                return Err(ShowcaseError::TooManySelections {
                    facet: facet.name(),
                    count,
                    max: MAX_SELECTIONS_PER_FACET,
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// PREDICATES
// =============================================================================

/// Trim and lowercase a query; `None` when nothing is left.
#[must_use]
pub fn normalized_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// OR-within-facet membership; vacuously true without a selection.
fn matches_selection(values: &[String], selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || values.iter().any(|value| selected.contains(value))
}

/// Industry membership with the wildcard rule.
fn matches_industries(industries: &[Industry], selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    industries.iter().any(|industry| match industry {
        Industry::Any => true,
        Industry::Named(name) => selected.contains(name),
    })
}

/// `needle` must already be normalized.
fn matches_search<T: Filterable>(item: &T, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_normalized<T: Filterable>(item: &T, state: &FilterState, needle: Option<&str>) -> bool {
    matches_selection(item.vendors(), &state.selected_vendors)
        && matches_selection(item.categories(), &state.selected_categories)
        && matches_industries(item.industries(), &state.selected_industries)
        && matches_search(item, needle)
}

/// Check a single item against every active predicate.
#[must_use]
pub fn matches<T: Filterable>(item: &T, state: &FilterState) -> bool {
    let needle = normalized_query(&state.search_query);
    matches_normalized(item, state, needle.as_deref())
}

/// Return the items passing every active predicate, in input order.
#[must_use]
pub fn filter<'a, T: Filterable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let needle = normalized_query(&state.search_query);
    items
        .iter()
        .filter(|item| matches_normalized(*item, state, needle.as_deref()))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
