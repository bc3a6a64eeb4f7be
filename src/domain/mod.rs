//! Domain models and types for Roster.
//!
//! This module contains the core domain models, types, and business rules:
//!
//! - **Search criteria** ([`SearchCriteria`]) - trimmed free-text filter terms
//! - **Employee records** ([`Employee`]) - directory rows with optional fields
//! - **Error types** ([`RosterError`], [`DirectoryError`], [`ExportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use roster::domain::{Result, RosterError};
//!
//! fn example() -> Result<()> {
//!     let config = roster::config::load_config("roster.toml")?;
//!     Ok(())
//! }
//! ```

pub mod criteria;
pub mod employee;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use criteria::SearchCriteria;
pub use employee::{Employee, NOT_AVAILABLE};
pub use errors::{DirectoryError, ExportError, RosterError};
pub use result::Result;
