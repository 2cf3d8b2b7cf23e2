//! # Configuration
//!
//! Settings come from an optional TOML file, then environment overrides.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! cors_origins = ["https://www.example.com"]
//! rate_limit = 20
//!
//! [gateway]
//! base_url = "https://project.functions.example.com"
//! function = "submit-lead"
//! api_key = "public-anon-key"
//! timeout_secs = 10
//!
//! [catalog]
//! path = "data/catalog.json"
//! ```
//!
//! ## Environment Variables
//!
//! - `SHOWCASE_HOST`, `SHOWCASE_PORT`
//! - `SHOWCASE_CORS_ORIGINS`: comma-separated origins, or `*` for all
//! - `SHOWCASE_RATE_LIMIT`: requests per second (0 disables)
//! - `SHOWCASE_GATEWAY_URL`, `SHOWCASE_GATEWAY_FUNCTION`
//! - `SHOWCASE_GATEWAY_KEY`: bearer key for the gateway
//! - `SHOWCASE_GATEWAY_TIMEOUT_SECS`
//! - `SHOWCASE_CATALOG`: catalog JSON file replacing the builtin catalog

use serde::{Deserialize, Serialize};
use showcase_core::ShowcaseError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default per-second request budget of the HTTP API.
pub const DEFAULT_RATE_LIMIT: u32 = 20;

/// Default gateway request timeout.
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub catalog: CatalogConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means localhost only, `["*"]` means any.
    pub cors_origins: Vec<String>,
    /// Requests per second; 0 disables rate limiting.
    pub rate_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
            rate_limit: DEFAULT_RATE_LIMIT,
        }
    }
}

impl ServerConfig {
    /// `host:port` bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Lead capture gateway settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Name of the remote function receiving leads.
    pub function: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:54321".to_string(),
            function: "submit-lead".to_string(),
            api_key: None,
            timeout_secs: DEFAULT_GATEWAY_TIMEOUT_SECS,
        }
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// JSON catalog file; the builtin catalog is used when unset.
    pub path: Option<PathBuf>,
}

impl ShowcaseConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ShowcaseError> {
        toml::from_str(source).map_err(|e| ShowcaseError::ConfigError(e.to_string()))
    }

    /// Load the file (if any) and apply process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ShowcaseError> {
        let mut config = match path {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|e| {
                    ShowcaseError::ConfigError(format!(
                        "Cannot read config '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                tracing::debug!("Loaded configuration from {}", path.display());
                Self::from_toml_str(&source)?
            }
            None => Self::default(),
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `SHOWCASE_*` overrides from an arbitrary lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ShowcaseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SHOWCASE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SHOWCASE_PORT") {
            self.server.port = parse_var("SHOWCASE_PORT", &port)?;
        }
        if let Some(origins) = lookup("SHOWCASE_CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(limit) = lookup("SHOWCASE_RATE_LIMIT") {
            self.server.rate_limit = parse_var("SHOWCASE_RATE_LIMIT", &limit)?;
        }
        if let Some(url) = lookup("SHOWCASE_GATEWAY_URL") {
            self.gateway.base_url = url;
        }
        if let Some(function) = lookup("SHOWCASE_GATEWAY_FUNCTION") {
            self.gateway.function = function;
        }
        if let Some(key) = lookup("SHOWCASE_GATEWAY_KEY") {
            self.gateway.api_key = Some(key).filter(|k| !k.is_empty());
        }
        if let Some(timeout) = lookup("SHOWCASE_GATEWAY_TIMEOUT_SECS") {
            self.gateway.timeout_secs = parse_var("SHOWCASE_GATEWAY_TIMEOUT_SECS", &timeout)?;
        }
        if let Some(path) = lookup("SHOWCASE_CATALOG") {
            self.catalog.path = Some(PathBuf::from(path)).filter(|p| !p.as_os_str().is_empty());
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, ShowcaseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ShowcaseError::ConfigError(format!("{name} has invalid value '{value}'")))
}

// =============================================================================
// TESTS
// =============================================================================
