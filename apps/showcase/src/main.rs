//! # Showcase - Catalog Filter and Lead Capture Backend
//!
//! The main binary for the consulting site's capability hub.
//!
//! This application provides:
//! - HTTP REST API server (axum-based) for the catalog and case studies
//! - CLI interface for browsing and validating catalogs
//! - Lead submission to the remote capture function
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   apps/showcase (THE BINARY)                    │
//! │                                                                 │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐    │
//! │  │   CLI       │    │   HTTP API  │    │  Lead Gateway    │    │
//! │  │  (clap)     │    │   (axum)    │    │  (reqwest)       │    │
//! │  └──────┬──────┘    └──────┬──────┘    └────────┬─────────┘    │
//! │         │                  │                    │               │
//! │         └──────────────────┼────────────────────┘               │
//! │                            ▼                                    │
//! │                    ┌───────────────┐                            │
//! │                    │ showcase-core │                            │
//! │                    │ (THE LOGIC)   │                            │
//! │                    └───────────────┘                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! showcase serve --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! showcase facets
//! showcase filter --vendor SAP --industry Manufacturing
//! showcase case-studies --industry Healthcare -s merger
//! ```

use clap::Parser;
use showcase::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // SHOWCASE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("SHOWCASE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "showcase=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┬ ┬┌─┐┬ ┬┌─┐┌─┐┌─┐┌─┐
  └─┐├─┤│ ││││├┤ ├─┤└─┐├┤
  └─┘┴ ┴└─┘└┴┘└─┘┴ ┴└─┘└─┘

  Capability Hub Backend v{}

  Filter • Discover • Connect
"#,
        env!("CARGO_PKG_VERSION")
    );
}
