//! Directory endpoint integration
//!
//! - [`client`] - HTTP client for search, export, and the GET fallback path
//! - [`models`] - Wire models and search-response shape normalization

pub mod client;
pub mod models;

// Re-export commonly used types
pub use client::DirectoryClient;
pub use models::{parse_search_response, ExportRequest, SearchRequest, EXPORT_DISCRIMINATOR};
