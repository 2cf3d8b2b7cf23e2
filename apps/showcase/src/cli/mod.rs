//! # Showcase CLI Module
//!
//! This module implements the CLI interface for the showcase backend.
//!
//! ## Available Commands
//!
//! - `serve` - Start the HTTP server
//! - `facets` - List facet options with counts
//! - `filter` - Filter the capability catalog
//! - `case-studies` - Filter the case-study list
//! - `show` - Show one capability
//! - `validate-catalog` - Check a catalog file
//! - `submit-lead` - Send a lead to the gateway

mod commands;

use crate::config::ShowcaseConfig;
use clap::{Parser, Subcommand};
use showcase_core::ShowcaseError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Showcase - catalog filter engine and lead capture backend
///
/// Serves the capability catalog and case studies with faceted filtering,
/// and forwards contact, assessment and consultation requests.
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON catalog file replacing the builtin catalog
    #[arg(short = 'C', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Serve {
        /// Host to bind to (overrides configuration)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List facet options with record counts
    Facets,

    /// Filter the capability catalog
    Filter {
        /// Vendor to include (repeatable; values are ORed)
        #[arg(long)]
        vendor: Vec<String>,

        /// Category to include (repeatable; values are ORed)
        #[arg(long)]
        category: Vec<String>,

        /// Industry to include (repeatable; values are ORed)
        #[arg(long)]
        industry: Vec<String>,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Filter the case-study list
    CaseStudies {
        /// Single industry ("All" for every industry)
        #[arg(long)]
        industry: Option<String>,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one capability
    Show {
        /// Capability id
        id: String,
    },

    /// Validate a catalog file (defaults to the configured catalog)
    ValidateCatalog {
        /// Catalog JSON file
        file: Option<PathBuf>,
    },

    /// Send a lead to the lead capture gateway
    SubmitLead {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Form stage (contact, assessment, consultation)
        #[arg(long, default_value = "contact")]
        stage: String,

        /// Company size band
        #[arg(long)]
        company_size: Option<String>,

        /// Industry
        #[arg(long)]
        industry: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Free-text message
        #[arg(short, long)]
        message: Option<String>,

        /// Interest tag (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), ShowcaseError> {
    let config = ShowcaseConfig::load(cli.config.as_deref())?;
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let catalog_path = catalog_path.as_deref();
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd_serve(&config, catalog_path).await
        }
        Some(Commands::Facets) | None => cmd_facets(catalog_path, json_mode),
        Some(Commands::Filter {
            vendor,
            category,
            industry,
            search,
        }) => cmd_filter(
            catalog_path,
            json_mode,
            cli.verbose,
            FilterArgs {
                vendors: vendor,
                categories: category,
                industries: industry,
                search: search.unwrap_or_default(),
            },
        ),
        Some(Commands::CaseStudies { industry, search }) => cmd_case_studies(
            json_mode,
            industry.as_deref(),
            search.as_deref().unwrap_or_default(),
        ),
        Some(Commands::Show { id }) => cmd_show(catalog_path, json_mode, &id),
        Some(Commands::ValidateCatalog { file }) => {
            cmd_validate_catalog(file.as_deref().or(catalog_path), json_mode)
        }
        Some(Commands::SubmitLead {
            name,
            email,
            stage,
            company_size,
            industry,
            phone,
            message,
            tag,
        }) => {
            let lead = build_lead(LeadArgs {
                name,
                email,
                stage,
                company_size,
                industry,
                phone,
                message,
                tags: tag,
            })?;
            cmd_submit_lead(&config, json_mode, &lead).await
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
