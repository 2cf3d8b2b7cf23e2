//! # Catalog Scenario Tests
//!
//! End-to-end checks of the capability hub and the case-study list
//! through the public API.
//!
//! ## Groups
//! - C0: Catalog loading
//! - C1: Facet options
//! - C2: Multi-facet filtering
//! - C3: Case studies

use showcase_core::{
    CapabilityRecord, Catalog, Facet, FilterState, Industry, ShowcaseError,
};

/// Record A: ERP suite sold by SAP and Oracle.
fn erp_suite() -> CapabilityRecord {
    CapabilityRecord {
        id: "erp-suite".to_string(),
        name: "ERP Suite".to_string(),
        vendors: vec!["SAP".to_string(), "Oracle".to_string()],
        categories: vec!["Data & Analytics".to_string()],
        industries: vec![Industry::named("Manufacturing"), Industry::named("Healthcare")],
        description: "Finance and supply chain consolidation on SAP".to_string(),
        implementation_time: "6-12 months".to_string(),
        roi_range: "150-250%".to_string(),
        path: "/capabilities/erp-suite".to_string(),
    }
}

/// Record B: cloud platform for every industry.
fn cloud_platform() -> CapabilityRecord {
    CapabilityRecord {
        id: "cloud-platform".to_string(),
        name: "Cloud Platform".to_string(),
        vendors: vec!["AWS".to_string()],
        categories: vec!["Cloud Computing".to_string()],
        industries: vec![Industry::Any],
        description: "Landing zones and migration waves".to_string(),
        implementation_time: "3-6 months".to_string(),
        roi_range: "120-200%".to_string(),
        path: "/capabilities/cloud-platform".to_string(),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![erp_suite(), cloud_platform()]).expect("catalog")
}

fn ids(records: &[&CapabilityRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

// =============================================================================
// GROUP C0: CATALOG LOADING
// =============================================================================

mod c0_catalog_loading {
    use super::*;

    /// C0.1: A catalog loaded from JSON keeps the wildcard as a tag.
    #[test]
    fn json_catalog_parses_wildcard() {
        let json = r#"[{
            "id": "cloud-platform",
            "name": "Cloud Platform",
            "vendors": ["AWS"],
            "categories": ["Cloud Computing"],
            "industries": ["All Industries"],
            "description": "Landing zones",
            "implementationTime": "3 months",
            "roiRange": "120%",
            "path": "/capabilities/cloud-platform"
        }]"#;

        let records: Vec<CapabilityRecord> = serde_json::from_str(json).expect("parse");
        let catalog = Catalog::new(records).expect("catalog");

        let record = catalog.get("cloud-platform").expect("record");
        assert_eq!(record.industries, vec![Industry::Any]);
    }

    /// C0.2: Duplicate ids are rejected at load time.
    #[test]
    fn duplicate_id_rejected() {
        let mut twin = cloud_platform();
        twin.path = "/capabilities/cloud-platform-2".to_string();
        let result = Catalog::new(vec![cloud_platform(), twin]);
        assert!(matches!(result, Err(ShowcaseError::DuplicateId(_))));
    }

    /// C0.3: Records without an industry are rejected.
    #[test]
    fn record_without_industry_rejected() {
        let mut bad = erp_suite();
        bad.industries.clear();
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(ShowcaseError::EmptyField {
                field: "industries",
                ..
            })
        ));
    }
}

// =============================================================================
// GROUP C1: FACET OPTIONS
// =============================================================================

mod c1_facet_options {
    use super::*;

    /// C1.1: Facets are the sorted union of record values.
    #[test]
    fn facets_of_scenario_catalog() {
        let facets = catalog().facets();
        assert_eq!(facets.vendors, vec!["AWS", "Oracle", "SAP"]);
        assert_eq!(facets.categories, vec!["Cloud Computing", "Data & Analytics"]);
        assert_eq!(facets.industries, vec!["Healthcare", "Manufacturing"]);
    }

    /// C1.2: Counts skip the wildcard.
    #[test]
    fn counts_of_scenario_catalog() {
        let counts = catalog().facet_counts();
        assert_eq!(counts.count(Facet::Industry, "Manufacturing"), 1);
        assert_eq!(counts.count(Facet::Industry, "All Industries"), 0);
        assert_eq!(counts.count(Facet::Vendor, "AWS"), 1);
    }
}

// =============================================================================
// GROUP C2: MULTI-FACET FILTERING
// =============================================================================

mod c2_filtering {
    use super::*;

    /// C2.1: Industry filter matches directly and through the wildcard.
    #[test]
    fn manufacturing_returns_both() {
        let state = FilterState::new().select(Facet::Industry, "Manufacturing");
        assert_eq!(ids(&catalog().filter(&state)), vec!["erp-suite", "cloud-platform"]);
    }

    /// C2.2: Search matches vendor names case-insensitively.
    #[test]
    fn oracle_search_returns_erp_suite() {
        let state = FilterState::new().with_search("oracle");
        assert_eq!(ids(&catalog().filter(&state)), vec!["erp-suite"]);
    }

    /// C2.3: An unknown vendor matches nothing.
    #[test]
    fn azure_vendor_returns_nothing() {
        let state = FilterState::new().select(Facet::Vendor, "Azure");
        assert!(catalog().filter(&state).is_empty());
    }

    /// C2.4: "SAP" and "sap" give the same result.
    #[test]
    fn search_case_insensitive() {
        let catalog = catalog();
        let upper = catalog.filter(&FilterState::new().with_search("SAP"));
        let lower = catalog.filter(&FilterState::new().with_search("sap"));
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&upper), vec!["erp-suite"]);
    }

    /// C2.5: Facets combine with AND even when each matches something.
    #[test]
    fn vendor_and_category_must_both_hold() {
        let state = FilterState::new()
            .select(Facet::Vendor, "AWS")
            .select(Facet::Category, "Data & Analytics");
        assert!(catalog().filter(&state).is_empty());
    }

    /// C2.6: Clearing returns to the full catalog in original order.
    #[test]
    fn clear_all_restores_catalog() {
        let state = FilterState::new()
            .toggled(Facet::Vendor, "SAP")
            .toggled(Facet::Industry, "Healthcare")
            .with_search("finance");
        let catalog = catalog();
        assert_eq!(ids(&catalog.filter(&state)), vec!["erp-suite"]);

        assert_eq!(
            ids(&catalog.filter(&state.cleared())),
            vec!["erp-suite", "cloud-platform"]
        );
    }
}

// =============================================================================
// GROUP C3: CASE STUDIES
// =============================================================================

mod c3_case_studies {
    use showcase_core::{
        CaseStudyFilter, IndustrySelection, builtin_case_studies, filter_case_studies,
    };

    /// C3.1: The builtin list filters by a single industry.
    #[test]
    fn builtin_single_industry() {
        let studies = builtin_case_studies().expect("case studies");
        let filter = CaseStudyFilter::new(IndustrySelection::Only("Healthcare".to_string()), "");
        let result = filter_case_studies(&studies, &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "regional-health-system-workday");
    }

    /// C3.2: Search covers the challenge text.
    #[test]
    fn builtin_challenge_search() {
        let studies = builtin_case_studies().expect("case studies");
        let filter = CaseStudyFilter::new(IndustrySelection::All, "MERGER");
        let result = filter_case_studies(&studies, &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "regional-health-system-workday");
    }
}
