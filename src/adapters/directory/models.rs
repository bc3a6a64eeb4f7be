//! Directory API wire models
//!
//! This module defines the request and response structures for the directory
//! endpoint. These models are separate from domain models and handle the
//! serialization quirks of the endpoint, in particular search responses that
//! arrive as a JSON string wrapping the actual JSON array.

use crate::domain::{DirectoryError, Employee, SearchCriteria};
use serde::Serialize;

/// Fixed discriminator marking a request as a file-export request
pub const EXPORT_DISCRIMINATOR: &str = "excel";

/// Search request body
///
/// Always carries both criteria keys, even when empty, so the endpoint sees
/// a stable request shape.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    empid: &'a str,
    name: &'a str,
}

impl<'a> SearchRequest<'a> {
    /// Builds a search request from criteria
    pub fn new(criteria: &'a SearchCriteria) -> Self {
        Self {
            empid: criteria.empid(),
            name: criteria.name(),
        }
    }
}

/// Export request body: search criteria plus the export discriminator
#[derive(Debug, Serialize)]
pub struct ExportRequest<'a> {
    empid: &'a str,
    name: &'a str,
    download: &'static str,
}

impl<'a> ExportRequest<'a> {
    /// Builds an export request from criteria
    pub fn new(criteria: &'a SearchCriteria) -> Self {
        Self {
            empid: criteria.empid(),
            name: criteria.name(),
            download: EXPORT_DISCRIMINATOR,
        }
    }
}

/// Parses a search response body into employee records
///
/// The endpoint returns either a JSON array of employee records or a JSON
/// string that itself decodes to such an array (stringified JSON). Both
/// shapes are accepted; anything else is an invalid response.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidResponse`] if the body is not valid JSON
/// or does not decode to an employee array.
pub fn parse_search_response(body: &str) -> Result<Vec<Employee>, DirectoryError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| DirectoryError::InvalidResponse(format!("not valid JSON: {e}")))?;

    // Unwrap one level of stringification
    let value = match value {
        serde_json::Value::String(inner) => serde_json::from_str(&inner).map_err(|e| {
            DirectoryError::InvalidResponse(format!("stringified payload is not valid JSON: {e}"))
        })?,
        other => other,
    };

    serde_json::from_value(value)
        .map_err(|e| DirectoryError::InvalidResponse(format!("not an employee array: {e}")))
}
