//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api::{self, AppState};
use crate::config::ShowcaseConfig;
use crate::gateway::{HttpLeadGateway, submit_lead};
use showcase_core::{
    CapabilityRecord, Catalog, CaseStudyFilter, Facet, FieldError, FilterState,
    IndustrySelection, LeadStage, LeadSubmission, ShowcaseError, builtin_case_studies,
    builtin_catalog, case_study_industries, filter_case_studies,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// =============================================================================
// FILE LOADING
// =============================================================================

/// Maximum catalog file size (10 MB).
const MAX_CATALOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), ShowcaseError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| ShowcaseError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(ShowcaseError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize a path and make sure it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, ShowcaseError> {
    let canonical = path.canonicalize().map_err(|e| {
        ShowcaseError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(ShowcaseError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Read a JSON catalog (an array of capability records) and validate it.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, ShowcaseError> {
    let path = validate_file_path(path)?;
    validate_file_size(&path, MAX_CATALOG_FILE_SIZE)?;

    let content = std::fs::read_to_string(&path)
        .map_err(|e| ShowcaseError::IoError(format!("Cannot read catalog: {}", e)))?;
    let records: Vec<CapabilityRecord> = serde_json::from_str(&content).map_err(|e| {
        ShowcaseError::SerializationError(format!("Invalid catalog JSON: {}", e))
    })?;

    let catalog = Catalog::new(records)?;
    tracing::info!(
        records = catalog.len(),
        "Loaded catalog from {}",
        path.display()
    );
    Ok(catalog)
}

/// The catalog file when given, the builtin catalog otherwise.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, ShowcaseError> {
    match path {
        Some(path) => load_catalog_file(path),
        None => builtin_catalog(),
    }
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_serve(
    config: &ShowcaseConfig,
    catalog_path: Option<&Path>,
) -> Result<(), ShowcaseError> {
    let catalog = load_catalog(catalog_path)?;
    let case_studies = builtin_case_studies()?;
    let gateway = HttpLeadGateway::new(&config.gateway)?;

    println!("Showcase Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Address:    {}", config.server.addr());
    println!(
        "  Catalog:    {} records ({})",
        catalog.len(),
        catalog_path.map_or_else(|| "builtin".to_string(), |p| p.display().to_string())
    );
    println!("  Gateway:    {}", gateway.endpoint());
    println!("  Rate limit: {} req/s", config.server.rate_limit);
    println!();
    println!("Endpoints:");
    println!("  GET  /capabilities         - Full catalog");
    println!("  GET  /capabilities/facets  - Facet options");
    println!("  POST /capabilities/filter  - Filter catalog");
    println!("  GET  /capabilities/{{id}}    - One capability");
    println!("  GET  /case-studies         - Case studies");
    println!("  POST /case-studies/filter  - Filter case studies");
    println!("  POST /leads                - Submit a lead");
    println!("  GET  /health               - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let state = AppState::new(catalog, case_studies, Arc::new(gateway));
    api::run_server(state, &config.server).await
}

// =============================================================================
// FACETS COMMAND
// =============================================================================

/// List facet options with record counts.
pub fn cmd_facets(catalog_path: Option<&Path>, json_mode: bool) -> Result<(), ShowcaseError> {
    let catalog = load_catalog(catalog_path)?;
    let facets = catalog.facets();
    let counts = catalog.facet_counts();

    if json_mode {
        print_json(&serde_json::json!({
            "records": catalog.len(),
            "facets": facets,
            "counts": counts,
        }));
        return Ok(());
    }

    println!("Capability Facets ({} records)", catalog.len());
    println!("==============================");
    for facet in Facet::ALL {
        println!();
        println!("{}:", facet.name());
        for value in facets.values(facet) {
            println!("  {:<32} {}", value, counts.count(facet, value));
        }
    }

    Ok(())
}

// =============================================================================
// FILTER COMMAND
// =============================================================================

/// Selections collected from the `filter` flags.
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
    pub vendors: Vec<String>,
    pub categories: Vec<String>,
    pub industries: Vec<String>,
    pub search: String,
}

impl FilterArgs {
    /// Build the equivalent filter state.
    #[must_use]
    pub fn to_state(&self) -> FilterState {
        let selections = [
            (Facet::Vendor, &self.vendors),
            (Facet::Category, &self.categories),
            (Facet::Industry, &self.industries),
        ];
        selections
            .into_iter()
            .flat_map(|(facet, values)| values.iter().map(move |value| (facet, value)))
            .fold(
                FilterState::new().with_search(self.search.clone()),
                |state, (facet, value)| state.select(facet, value.clone()),
            )
    }
}

/// Filter the capability catalog.
pub fn cmd_filter(
    catalog_path: Option<&Path>,
    json_mode: bool,
    verbose: bool,
    args: FilterArgs,
) -> Result<(), ShowcaseError> {
    let catalog = load_catalog(catalog_path)?;
    let state = args.to_state();
    state.check_limits()?;
    let records = catalog.filter(&state);

    if json_mode {
        print_json(&serde_json::json!({
            "total": catalog.len(),
            "count": records.len(),
            "filter": state,
            "records": records,
        }));
        return Ok(());
    }

    println!(
        "Showing {} of {} capabilities",
        records.len(),
        catalog.len()
    );
    if records.is_empty() {
        println!();
        println!("No capabilities match the current filters.");
        return Ok(());
    }

    for record in records {
        println!();
        println!("{} ({})", record.name, record.id);
        println!("  Vendors:    {}", record.vendors.join(", "));
        println!("  Categories: {}", record.categories.join(", "));
        println!(
            "  Industries: {}",
            record
                .industries
                .iter()
                .map(|industry| industry.label())
                .collect::<Vec<_>>()
                .join(", ")
        );
        if verbose {
            println!("  {}", record.description);
        }
    }

    Ok(())
}

// =============================================================================
// CASE STUDIES COMMAND
// =============================================================================

/// Filter the builtin case-study list.
pub fn cmd_case_studies(
    json_mode: bool,
    industry: Option<&str>,
    search: &str,
) -> Result<(), ShowcaseError> {
    let studies = builtin_case_studies()?;
    let filter = CaseStudyFilter::new(IndustrySelection::from_label(industry), search);
    filter.to_filter_state().check_limits()?;
    let matched = filter_case_studies(&studies, &filter);

    if json_mode {
        print_json(&serde_json::json!({
            "total": studies.len(),
            "count": matched.len(),
            "industries": case_study_industries(&studies),
            "caseStudies": matched,
        }));
        return Ok(());
    }

    println!("Showing {} of {} case studies", matched.len(), studies.len());
    for study in matched {
        println!();
        println!("{} [{}]", study.title, study.industry);
        println!("  Solution:  {}", study.solution);
        println!("  Challenge: {}", study.challenge);
        for result in &study.results {
            println!("  - {}", result);
        }
    }

    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Show one capability.
pub fn cmd_show(
    catalog_path: Option<&Path>,
    json_mode: bool,
    id: &str,
) -> Result<(), ShowcaseError> {
    let catalog = load_catalog(catalog_path)?;
    let record = catalog
        .get(id)
        .ok_or_else(|| ShowcaseError::NotFound(format!("capability '{}'", id)))?;

    if json_mode {
        print_json(&serde_json::json!(record));
        return Ok(());
    }

    println!("{}", record.name);
    println!("{}", "=".repeat(record.name.len()));
    println!("Id:                  {}", record.id);
    println!("Path:                {}", record.path);
    println!("Vendors:             {}", record.vendors.join(", "));
    println!("Categories:          {}", record.categories.join(", "));
    println!(
        "Industries:          {}",
        record
            .industries
            .iter()
            .map(|industry| industry.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Implementation time: {}", record.implementation_time);
    println!("ROI range:           {}", record.roi_range);
    println!();
    println!("{}", record.description);

    Ok(())
}

// =============================================================================
// VALIDATE CATALOG COMMAND
// =============================================================================

/// Validate a catalog file, or the builtin catalog when none is given.
pub fn cmd_validate_catalog(path: Option<&Path>, json_mode: bool) -> Result<(), ShowcaseError> {
    let catalog = load_catalog(path)?;
    let facets = catalog.facets();

    if json_mode {
        print_json(&serde_json::json!({
            "valid": true,
            "records": catalog.len(),
            "vendors": facets.vendors.len(),
            "categories": facets.categories.len(),
            "industries": facets.industries.len(),
        }));
        return Ok(());
    }

    println!(
        "Catalog OK: {} records, {} vendors, {} categories, {} industries",
        catalog.len(),
        facets.vendors.len(),
        facets.categories.len(),
        facets.industries.len()
    );
    Ok(())
}

// =============================================================================
// SUBMIT LEAD COMMAND
// =============================================================================

/// Raw `submit-lead` flags.
#[derive(Debug, Clone, Default)]
pub struct LeadArgs {
    pub name: String,
    pub email: String,
    pub stage: String,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub tags: Vec<String>,
}

/// Turn CLI flags into a submission.
pub fn build_lead(args: LeadArgs) -> Result<LeadSubmission, ShowcaseError> {
    let stage = LeadStage::parse(&args.stage).ok_or_else(|| {
        ShowcaseError::Validation(vec![FieldError::new(
            "stage",
            format!(
                "Unknown stage '{}' (expected contact, assessment or consultation)",
                args.stage
            ),
        )])
    })?;

    Ok(LeadSubmission {
        company_size: args.company_size,
        industry: args.industry,
        phone: args.phone,
        message: args.message,
        tags: args.tags,
        ..LeadSubmission::new(args.name, args.email, stage)
    })
}

/// Send a lead to the configured gateway.
pub async fn cmd_submit_lead(
    config: &ShowcaseConfig,
    json_mode: bool,
    lead: &LeadSubmission,
) -> Result<(), ShowcaseError> {
    let gateway = HttpLeadGateway::new(&config.gateway)?;

    match submit_lead(&gateway, lead).await {
        Ok(ack) => {
            if json_mode {
                print_json(&serde_json::json!({ "data": ack.data }));
            } else {
                println!("Lead submitted ({} stage).", lead.stage);
            }
            Ok(())
        }
        Err(e) => {
            if json_mode {
                print_json(&serde_json::json!({
                    "error": {
                        "message": e.user_message(),
                        "fields": e.field_errors(),
                    }
                }));
            } else {
                for field in e.field_errors() {
                    println!("  {}", field);
                }
                println!("{}", e.user_message());
            }
            Err(e.into())
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
