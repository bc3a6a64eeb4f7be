//! Configuration management for Roster.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation. The directory endpoint is an explicit configuration value
//! injected at startup rather than a hardcoded constant.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use roster::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("roster.toml")?;
//!
//! println!("Endpoint: {}", config.directory.endpoint);
//! println!("Output dir: {}", config.export.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (name, log level)
//! - [`DirectoryConfig`] - Directory endpoint (URL, timeout, TLS)
//! - [`ExportConfig`] - Export settings (output directory, fallback toggle)
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [directory]
//! endpoint = "https://directory.example.com/employees"
//! timeout_seconds = 30
//!
//! [export]
//! output_dir = "exports"
//! fallback_enabled = true
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution inside the
//! TOML file, and `ROSTER_<SECTION>_<KEY>` variables (for example
//! `ROSTER_DIRECTORY_ENDPOINT`) to override loaded values.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, DirectoryConfig, ExportConfig, LoggingConfig, RosterConfig};
