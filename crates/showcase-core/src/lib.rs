//! # showcase-core
//!
//! The catalog engine behind the showcase site - THE LOGIC.
//!
//! This crate holds everything the site computes rather than renders:
//! - `catalog`: the validated, read-only capability catalog
//! - `facets`: selectable filter options derived from a catalog
//! - `filter`: facet + free-text filtering (OR within a facet, AND across)
//! - `case_study`: the single-select "proven case studies" list
//! - `lead`: lead capture payload and client-side validation
//! - `submission`: the lead submission state machine
//!
//! ## Architectural Constraints
//!
//! - NO async, NO network, NO I/O: the app crate owns those
//! - Filtering and facet building are total functions
//! - Catalog data is validated once at load time and never mutated

// =============================================================================
// MODULES
// =============================================================================

pub mod builtin;
pub mod case_study;
pub mod catalog;
pub mod facets;
pub mod filter;
pub mod lead;
pub mod primitives;
pub mod submission;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{CapabilityRecord, FieldError, Industry, ShowcaseError};

// =============================================================================
// RE-EXPORTS: Catalog Engine
// =============================================================================

pub use builtin::{builtin_case_studies, builtin_catalog};
pub use case_study::{
    CaseStudy, CaseStudyFilter, IndustrySelection, case_study_industries, filter_case_studies,
};
pub use catalog::Catalog;
pub use facets::{FacetCounts, FacetSet, build_facets, facet_counts};
pub use filter::{Facet, FilterState, Filterable, filter, matches};

// =============================================================================
// RE-EXPORTS: Lead Capture
// =============================================================================

pub use lead::{LeadStage, LeadSubmission};
pub use submission::{SubmissionState, SubmissionTracker};
