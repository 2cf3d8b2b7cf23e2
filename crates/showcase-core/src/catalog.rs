//! # Catalog Store
//!
//! The validated, read-only list of capability records.
//!
//! A `Catalog` can only be built through `Catalog::new`, which checks every
//! record and the catalog-wide uniqueness of ids and routes. Once built it
//! is never mutated.

use crate::facets::{FacetCounts, FacetSet, build_facets, facet_counts};
use crate::filter::{FilterState, filter};
use crate::{CapabilityRecord, ShowcaseError};
use std::collections::BTreeSet;

/// Immutable, ordered capability catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CapabilityRecord>,
}

impl Catalog {
    /// Validate records and build a catalog preserving their order.
    ///
    /// Ids and paths are compared trimmed, the same way validation sees them.
    pub fn new(records: Vec<CapabilityRecord>) -> Result<Self, ShowcaseError> {
        let mut ids = BTreeSet::new();
        let mut paths = BTreeSet::new();

        for record in &records {
            record.validate()?;
            if !ids.insert(record.id.trim()) {
                return Err(ShowcaseError::DuplicateId(record.id.clone()));
            }
            if !paths.insert(record.path.trim()) {
                return Err(ShowcaseError::DuplicatePath(record.path.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Create an empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[CapabilityRecord] {
        &self.records
    }

    /// Iterate over records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CapabilityRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CapabilityRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Look up a record by its detail route.
    #[must_use]
    pub fn by_path(&self, path: &str) -> Option<&CapabilityRecord> {
        self.records.iter().find(|record| record.path == path)
    }

    /// Selectable facet options of this catalog.
    #[must_use]
    pub fn facets(&self) -> FacetSet {
        build_facets(&self.records)
    }

    /// Records per facet value.
    #[must_use]
    pub fn facet_counts(&self) -> FacetCounts {
        facet_counts(&self.records)
    }

    /// Records matching the state, in catalog order.
    #[must_use]
    pub fn filter(&self, state: &FilterState) -> Vec<&CapabilityRecord> {
        filter(&self.records, state)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CapabilityRecord;
    type IntoIter = std::slice::Iter<'a, CapabilityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Industry;

    fn record(id: &str, path: &str) -> CapabilityRecord {
        CapabilityRecord {
            id: id.to_string(),
            name: format!("Capability {id}"),
            vendors: vec!["SAP".to_string()],
            categories: vec!["ERP".to_string()],
            industries: vec![Industry::Any],
            description: "Enterprise resource planning".to_string(),
            implementation_time: "3 months".to_string(),
            roi_range: "100%".to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn builds_in_input_order() {
        let catalog = Catalog::new(vec![record("b", "/b"), record("a", "/a")]).expect("catalog");
        let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = Catalog::new(vec![record("a", "/a"), record("a", "/other")]);
        assert!(matches!(result, Err(ShowcaseError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn duplicate_path_rejected() {
        let result = Catalog::new(vec![record("a", "/same"), record("b", "/same")]);
        assert!(matches!(result, Err(ShowcaseError::DuplicatePath(p)) if p == "/same"));
    }

    #[test]
    fn padded_duplicates_rejected() {
        let result = Catalog::new(vec![record("erp", "/erp"), record("erp ", "/erp-2")]);
        assert!(matches!(result, Err(ShowcaseError::DuplicateId(id)) if id == "erp "));

        let result = Catalog::new(vec![record("a", "/same"), record("b", "/same ")]);
        assert!(matches!(result, Err(ShowcaseError::DuplicatePath(p)) if p == "/same "));
    }

    #[test]
    fn invalid_record_rejected() {
        let mut bad = record("a", "/a");
        bad.categories.clear();
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn lookups() {
        let catalog = Catalog::new(vec![record("a", "/a"), record("b", "/b")]).expect("catalog");
        assert_eq!(catalog.get("b").map(|r| r.path.as_str()), Some("/b"));
        assert_eq!(catalog.by_path("/a").map(|r| r.id.as_str()), Some("a"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.facets(), FacetSet::default());
        assert!(catalog.filter(&FilterState::new()).is_empty());
    }
}
