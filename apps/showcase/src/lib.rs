//! # Showcase Application Library
//!
//! The async half of the showcase backend: HTTP API, CLI, configuration
//! and the lead capture gateway client. The binary in `main.rs` is a thin
//! wrapper over [`cli::execute`].

pub mod api;
pub mod cli;
pub mod config;
pub mod gateway;
