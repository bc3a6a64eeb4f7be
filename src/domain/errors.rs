//! Domain error types
//!
//! This module defines the error hierarchy for Roster. All errors are
//! domain-specific and don't expose third-party types: transport failures
//! from the HTTP layer are classified into [`DirectoryError`], and failures
//! while normalizing an export response into a spreadsheet payload are
//! classified into [`ExportError`].

use thiserror::Error;

/// Main Roster error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Directory API transport errors
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Export normalization errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Transport-level errors from the directory endpoint
///
/// Covers the network/HTTP-level failure class. A connection that never
/// reaches the server maps to `ConnectionFailed` (the browser status-0
/// analog); an HTTP 404 maps to `NotFound`. These two variants are the only
/// ones that trigger the fallback export path.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Failed to reach the directory endpoint (DNS, refused, reset)
    #[error("Failed to connect to directory endpoint: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Endpoint returned 404
    #[error("Directory endpoint not found: {url}")]
    NotFound { url: String },

    /// Client error (4xx other than 404)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Response body could not be read or parsed as employee records
    #[error("Invalid response from directory endpoint: {0}")]
    InvalidResponse(String),
}

impl DirectoryError {
    /// Whether this failure should trigger the fallback export path.
    ///
    /// Only connectivity-class (status-0 analog) and not-found-class (404)
    /// failures qualify; everything else is terminal for the attempt.
    pub fn triggers_fallback(&self) -> bool {
        matches!(
            self,
            DirectoryError::ConnectionFailed(_) | DirectoryError::NotFound { .. }
        )
    }
}

/// Export response normalization errors
///
/// All normalization failures are terminal for the current export attempt;
/// none of them trigger the fallback path.
#[derive(Debug, Error)]
pub enum ExportError {
    /// String response was not parseable as structured data
    #[error("Malformed export envelope: {0}")]
    MalformedEnvelope(String),

    /// Envelope parsed but carried no base64 `body` field
    ///
    /// The original client passed such responses through unchanged; that was
    /// a latent gap, so it is classified as a failure here.
    #[error("Export envelope has no usable `body` field")]
    EnvelopeMissingBody,

    /// `body` field was present but not valid base64
    #[error("Invalid base64 encoding in export envelope: {0}")]
    InvalidEncoding(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RosterError {
    fn from(err: toml::de::Error) -> Self {
        RosterError::Configuration(format!("TOML parse error: {err}"))
    }
}
