// Roster - Employee Directory Search & Export
// Copyright (c) 2025 Roster Contributors
// Licensed under the MIT License

//! # Roster - Employee Directory Search & Export
//!
//! Roster is a command-line client for a remote employee-directory API. It
//! searches employee records and downloads spreadsheet exports, normalizing
//! the export response shape (raw binary vs. base64 JSON envelope) into a
//! date-stamped `.xlsx` file.
//!
//! ## Architecture
//!
//! Roster follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export normalization, file saving, table rendering)
//! - [`adapters`] - The directory endpoint integration
//! - [`domain`] - Core domain types and the error hierarchy
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster::adapters::directory::DirectoryClient;
//! use roster::core::export::{normalize_export_response, save_spreadsheet};
//! use roster::domain::SearchCriteria;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = roster::config::load_config("roster.toml")?;
//!
//!     // Request an export and normalize whatever shape comes back
//!     let client = DirectoryClient::new(config.directory);
//!     let response = client
//!         .export_with_fallback(&SearchCriteria::new("", "Smith"))
//!         .await?;
//!     let file = normalize_export_response(response)?;
//!
//!     let path = save_spreadsheet(Path::new(&config.export.output_dir), &file)?;
//!     println!("Saved {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Response Normalization
//!
//! The directory endpoint answers an export request with either the raw
//! spreadsheet bytes or a JSON envelope whose `body` field carries the bytes
//! base64-encoded. [`core::export::normalize_export_response`] accepts both
//! and fails deterministically on anything else:
//!
//! ```rust
//! use roster::core::export::{normalize_export_response, ExportResponse};
//! use roster::domain::ExportError;
//!
//! let err = normalize_export_response(ExportResponse::Text("not json".into()));
//! assert!(matches!(err, Err(ExportError::MalformedEnvelope(_))));
//! ```
//!
//! ## Error Handling
//!
//! Roster uses the [`domain::RosterError`] hierarchy for all errors:
//!
//! ```rust,no_run
//! use roster::domain::RosterError;
//!
//! fn example() -> Result<(), RosterError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = roster::config::load_config("roster.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Roster uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting search");
//! warn!(count = 0, "No employees matched");
//! error!(error = "timeout", "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
