//! External system integrations for Roster.
//!
//! This module provides the adapter for the one external system Roster talks
//! to:
//!
//! - [`directory`] - the employee-directory HTTP endpoint
//!
//! # Design Pattern
//!
//! The adapter isolates the HTTP client and wire formats from the rest of the
//! application: transport failures are classified into domain errors before
//! they leave this layer, and response-shape quirks (stringified JSON search
//! results, binary-vs-envelope export bodies) are normalized here or handed
//! to [`crate::core`] as tagged values.
//!
//! ```rust,no_run
//! use roster::adapters::directory::DirectoryClient;
//! use roster::config::DirectoryConfig;
//! use roster::domain::SearchCriteria;
//!
//! # async fn example() -> roster::domain::Result<()> {
//! let config = DirectoryConfig {
//!     endpoint: "https://directory.example.com/employees".to_string(),
//!     timeout_seconds: 30,
//!     tls_verify: true,
//! };
//!
//! let client = DirectoryClient::new(config);
//! let response = client.export_with_fallback(&SearchCriteria::new("", "Smith")).await?;
//! # Ok(())
//! # }
//! ```

pub mod directory;
