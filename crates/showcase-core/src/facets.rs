//! # Facet Index Builder
//!
//! Derives the selectable filter options from a list of records.
//!
//! Values are deduplicated and sorted byte-wise (ascending, case-sensitive).
//! The industry wildcard is never a selectable option.

use crate::filter::{Facet, Filterable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Distinct facet values across a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSet {
    pub vendors: Vec<String>,
    pub categories: Vec<String>,
    pub industries: Vec<String>,
}

impl FacetSet {
    /// The values of one facet.
    #[must_use]
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Vendor => &self.vendors,
            Facet::Category => &self.categories,
            Facet::Industry => &self.industries,
        }
    }

    /// True when the value is a selectable option of the facet.
    #[must_use]
    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.values(facet)
            .binary_search_by(|probe| probe.as_str().cmp(value))
            .is_ok()
    }
}

/// Build the facet options of a record list. Pure; an empty input gives
/// three empty lists.
#[must_use]
pub fn build_facets<T: Filterable>(records: &[T]) -> FacetSet {
    let mut vendors = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut industries = BTreeSet::new();

    for record in records {
        vendors.extend(record.vendors().iter().map(String::as_str));
        categories.extend(record.categories().iter().map(String::as_str));
        industries.extend(record.industries().iter().filter_map(|i| i.as_named()));
    }

    FacetSet {
        vendors: vendors.into_iter().map(str::to_string).collect(),
        categories: categories.into_iter().map(str::to_string).collect(),
        industries: industries.into_iter().map(str::to_string).collect(),
    }
}

// =============================================================================
// FACET COUNTS
// =============================================================================

/// Number of records carrying each facet value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub vendors: BTreeMap<String, usize>,
    pub categories: BTreeMap<String, usize>,
    pub industries: BTreeMap<String, usize>,
}

impl FacetCounts {
    /// Count for one facet value, zero when unknown.
    #[must_use]
    pub fn count(&self, facet: Facet, value: &str) -> usize {
        let counts = match facet {
            Facet::Vendor => &self.vendors,
            Facet::Category => &self.categories,
            Facet::Industry => &self.industries,
        };
        counts.get(value).copied().unwrap_or(0)
    }
}

/// Count records per facet value. Wildcard tags are not counted.
#[must_use]
pub fn facet_counts<T: Filterable>(records: &[T]) -> FacetCounts {
    let mut counts = FacetCounts::default();

    for record in records {
        for vendor in record.vendors() {
            *counts.vendors.entry(vendor.clone()).or_insert(0) += 1;
        }
        for category in record.categories() {
            *counts.categories.entry(category.clone()).or_insert(0) += 1;
        }
        for industry in record.industries().iter().filter_map(|i| i.as_named()) {
            *counts.industries.entry(industry.to_string()).or_insert(0) += 1;
        }
    }

    counts
}

// =============================================================================
// TESTS
// =============================================================================
