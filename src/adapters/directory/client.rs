//! Directory endpoint client
//!
//! This module provides the HTTP client for the single configured directory
//! endpoint. Search and export both POST JSON to the same URL; the export
//! carries the `download: "excel"` discriminator. On connectivity-class or
//! not-found-class failures of the export POST, the same logical request can
//! be re-issued as a plain GET with the criteria in the query string.

use super::models::{parse_search_response, ExportRequest, SearchRequest, EXPORT_DISCRIMINATOR};
use crate::config::DirectoryConfig;
use crate::core::export::ExportResponse;
use crate::domain::{DirectoryError, Employee, Result, RosterError, SearchCriteria};
use reqwest::{header, Client, ClientBuilder, StatusCode};
use std::time::Duration;
use url::Url;

/// Content type sent with every POST body
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Client for the directory endpoint
///
/// Holds a pooled reqwest client configured from [`DirectoryConfig`]
/// (timeout, TLS verification). All methods issue at most one request;
/// [`DirectoryClient::export_with_fallback`] issues at most two.
///
/// # Example
///
/// ```no_run
/// use roster::adapters::directory::DirectoryClient;
/// use roster::config::DirectoryConfig;
/// use roster::domain::SearchCriteria;
///
/// # async fn example() -> roster::domain::Result<()> {
/// let config = DirectoryConfig::default();
/// let client = DirectoryClient::new(config);
///
/// let employees = client.search(&SearchCriteria::new("", "Smith")).await?;
/// println!("{} match(es)", employees.len());
/// # Ok(())
/// # }
/// ```
pub struct DirectoryClient {
    /// HTTP client for making requests
    client: Client,

    /// Directory configuration
    config: DirectoryConfig,
}

impl DirectoryClient {
    /// Create a new directory client from configuration
    pub fn new(config: DirectoryConfig) -> Self {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Searches the directory for employees matching the criteria
    ///
    /// POSTs `{empid, name}` and accepts either a JSON array of records or a
    /// JSON string wrapping such an array.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] classifying the transport failure or the
    /// unusable response body.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Employee>> {
        tracing::debug!(
            empid = criteria.empid(),
            name = criteria.name(),
            "Issuing search request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&SearchRequest::new(criteria))
            .send()
            .await
            .map_err(|e| RosterError::Directory(classify_request_error(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.classify_status(status, body).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::InvalidResponse(e.to_string()))
            .map_err(RosterError::Directory)?;

        let employees = parse_search_response(&body).map_err(RosterError::Directory)?;

        tracing::info!(count = employees.len(), "Search completed");
        Ok(employees)
    }

    /// Requests a spreadsheet export of the records matching the criteria
    ///
    /// POSTs `{empid, name, download: "excel"}` and classifies the response
    /// body as [`ExportResponse::Text`] (candidate envelope) or
    /// [`ExportResponse::Binary`] by content type. Normalization into a file
    /// payload is a separate step
    /// ([`crate::core::export::normalize_export_response`]).
    pub async fn export(&self, criteria: &SearchCriteria) -> Result<ExportResponse> {
        tracing::debug!(
            empid = criteria.empid(),
            name = criteria.name(),
            "Issuing export request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&ExportRequest::new(criteria))
            .send()
            .await
            .map_err(|e| RosterError::Directory(classify_request_error(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.classify_status(status, body).into());
        }

        read_export_body(response).await
    }

    /// Runs an export, falling back to the GET path on transport failure
    ///
    /// The fallback re-issues the same logical request as a plain GET with
    /// the criteria and `download=excel` in the query string. It triggers
    /// only on connectivity-class (status-0 analog) or not-found-class (404)
    /// failures of the POST; normalization failures never reach this code
    /// because normalization happens after the transport succeeds.
    pub async fn export_with_fallback(&self, criteria: &SearchCriteria) -> Result<ExportResponse> {
        match self.export(criteria).await {
            Ok(response) => Ok(response),
            Err(RosterError::Directory(e)) if e.triggers_fallback() => {
                tracing::warn!(
                    error = %e,
                    "Export request failed at transport level, retrying via GET fallback"
                );
                self.export_via_fallback(criteria).await
            }
            Err(e) => Err(e),
        }
    }

    /// Issues the fallback GET export request directly
    pub async fn export_via_fallback(&self, criteria: &SearchCriteria) -> Result<ExportResponse> {
        let url = self.fallback_export_url(criteria)?;
        tracing::debug!(url = %url, "Issuing fallback export request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RosterError::Directory(classify_request_error(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.classify_status(status, body).into());
        }

        read_export_body(response).await
    }

    /// Builds the fallback export URL: criteria and discriminator as a query string
    pub fn fallback_export_url(&self, criteria: &SearchCriteria) -> Result<Url> {
        let mut url = Url::parse(&self.config.endpoint).map_err(|e| {
            RosterError::Configuration(format!(
                "Invalid directory endpoint '{}': {e}",
                self.config.endpoint
            ))
        })?;

        url.query_pairs_mut()
            .append_pair("empid", criteria.empid())
            .append_pair("name", criteria.name())
            .append_pair("download", EXPORT_DISCRIMINATOR);

        Ok(url)
    }

    /// Classify a non-success HTTP status
    fn classify_status(&self, status: StatusCode, body: String) -> DirectoryError {
        match status {
            StatusCode::NOT_FOUND => DirectoryError::NotFound {
                url: self.config.endpoint.clone(),
            },
            s if s.is_server_error() => DirectoryError::ServerError {
                status: s.as_u16(),
                message: body,
            },
            s => DirectoryError::ClientError {
                status: s.as_u16(),
                message: body,
            },
        }
    }
}

/// Classify a reqwest send error into the transport taxonomy
fn classify_request_error(err: reqwest::Error) -> DirectoryError {
    if err.is_timeout() {
        DirectoryError::Timeout(err.to_string())
    } else {
        // Anything that never produced a response is the status-0 analog
        DirectoryError::ConnectionFailed(err.to_string())
    }
}

/// Classify a successful export response body as text or binary
async fn read_export_body(response: reqwest::Response) -> Result<ExportResponse> {
    let is_text = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(is_textual_content_type)
        .unwrap_or(false);

    if is_text {
        let text = response
            .text()
            .await
            .map_err(|e| RosterError::Directory(DirectoryError::InvalidResponse(e.to_string())))?;
        Ok(ExportResponse::Text(text))
    } else {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RosterError::Directory(DirectoryError::InvalidResponse(e.to_string())))?;
        Ok(ExportResponse::Binary(bytes.to_vec()))
    }
}

/// Textual content types are candidate envelopes. Everything else (the
/// spreadsheet MIME type, `application/octet-stream`, or no header at all)
/// is already-binary file content.
fn is_textual_content_type(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.starts_with("application/json") || ct.starts_with("text/")
}
