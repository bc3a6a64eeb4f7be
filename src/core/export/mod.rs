//! Export response normalization and file saving
//!
//! The directory endpoint answers an export request with one of two shapes:
//! the raw spreadsheet bytes, or a JSON envelope whose `body` field carries
//! the bytes base64-encoded (used when transport constraints require a
//! string-safe encoding). [`normalize_export_response`] turns either shape
//! into a [`SpreadsheetFile`], or fails with a classified [`ExportError`].
//! This is a pure transformation; writing the file is a separate step in
//! [`save`].

pub mod save;

use crate::domain::ExportError;
use base64::{engine::general_purpose, Engine as _};

// Re-export commonly used items
pub use save::{export_file_name, save_spreadsheet};

/// Content type tag applied to every normalized spreadsheet payload
pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// An export response as delivered by the transport layer
///
/// The transport classifies the raw HTTP response by content type; textual
/// bodies are candidate envelopes, anything else is already-binary content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportResponse {
    /// Raw byte payload, directly usable as file content
    Binary(Vec<u8>),
    /// Text payload that may be a JSON envelope with a base64 `body`
    Text(String),
}

/// A normalized spreadsheet payload ready to be written to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetFile {
    /// File content
    pub bytes: Vec<u8>,

    /// Fixed spreadsheet content-type tag
    pub content_type: &'static str,
}

impl SpreadsheetFile {
    fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: SPREADSHEET_CONTENT_TYPE,
        }
    }
}

/// Normalizes an export response of unknown shape into a spreadsheet payload
///
/// Binary responses pass through unchanged. Text responses must parse as a
/// JSON envelope carrying a base64 `body` string; every other outcome is a
/// classified failure and terminal for the current export attempt.
///
/// # Errors
///
/// - [`ExportError::MalformedEnvelope`] - text that is not valid JSON
/// - [`ExportError::EnvelopeMissingBody`] - JSON without a string `body`
/// - [`ExportError::InvalidEncoding`] - `body` that is not valid base64
pub fn normalize_export_response(
    response: ExportResponse,
) -> std::result::Result<SpreadsheetFile, ExportError> {
    let text = match response {
        ExportResponse::Binary(bytes) => return Ok(SpreadsheetFile::new(bytes)),
        ExportResponse::Text(text) => text,
    };

    let envelope: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| ExportError::MalformedEnvelope(e.to_string()))?;

    // A non-string `body` is as unusable as a missing one
    let body = match envelope.get("body") {
        Some(serde_json::Value::String(body)) => body,
        _ => return Err(ExportError::EnvelopeMissingBody),
    };

    let bytes = general_purpose::STANDARD
        .decode(body)
        .map_err(|e| ExportError::InvalidEncoding(e.to_string()))?;

    Ok(SpreadsheetFile::new(bytes))
}
