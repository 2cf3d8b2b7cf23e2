//! # Filter Benchmarks
//!
//! Performance benchmarks for the facet index builder and filter engine.
//!
//! Run with: `cargo bench -p showcase-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use showcase_core::{CapabilityRecord, Facet, FilterState, Industry, build_facets, filter};
use std::hint::black_box;

const VENDORS: [&str; 6] = ["SAP", "Oracle", "AWS", "Microsoft", "Salesforce", "Workday"];
const CATEGORIES: [&str; 4] = ["ERP", "Cloud Computing", "Data & Analytics", "CRM"];
const INDUSTRIES: [&str; 5] = [
    "Manufacturing",
    "Healthcare",
    "Retail",
    "Financial Services",
    "All Industries",
];

/// Create a synthetic catalog cycling through the facet pools.
fn create_catalog(size: usize) -> Vec<CapabilityRecord> {
    (0..size)
        .map(|i| CapabilityRecord {
            id: format!("capability-{i}"),
            name: format!("{} program {i}", VENDORS[i % VENDORS.len()]),
            vendors: vec![
                VENDORS[i % VENDORS.len()].to_string(),
                VENDORS[(i + 1) % VENDORS.len()].to_string(),
            ],
            categories: vec![CATEGORIES[i % CATEGORIES.len()].to_string()],
            industries: vec![Industry::parse(INDUSTRIES[i % INDUSTRIES.len()])],
            description: "Migration, integration and managed services".to_string(),
            implementation_time: "3-6 months".to_string(),
            roi_range: "100-200%".to_string(),
            path: format!("/capabilities/capability-{i}"),
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_build_facets(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_facets");

    for size in [100, 1000, 10000].iter() {
        let catalog = create_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(build_facets(catalog)));
        });
    }

    group.finish();
}

fn bench_filter_facets(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_facets");
    let state = FilterState::new()
        .select(Facet::Vendor, "SAP")
        .select(Facet::Vendor, "Oracle")
        .select(Facet::Industry, "Manufacturing");

    for size in [100, 1000, 10000].iter() {
        let catalog = create_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter(catalog, &state).len()));
        });
    }

    group.finish();
}

fn bench_filter_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_search");
    let state = FilterState::new().with_search("Managed");

    for size in [100, 1000, 10000].iter() {
        let catalog = create_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter(catalog, &state).len()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_facets,
    bench_filter_facets,
    bench_filter_search
);
criterion_main!(benches);
