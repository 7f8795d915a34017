use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

use crate::{error::ProposalError, record::ProposalRecord};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Path of the document generation endpoint
pub const DEFAULT_ENDPOINT: &str = "/api/pdf";

/// Connection settings for [`DocumentClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub endpoint: String,
    /// Transport-level timeout; `None` leaves the request unbounded
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

/// Client for the PDF rendering endpoint
#[derive(Debug, Clone)]
pub struct DocumentClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl DocumentClient {
    /// Create a new client from connection settings
    pub fn new(config: ClientConfig) -> Result<Self, ProposalError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ProposalError::Transport { source: e })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Set a custom base URL for the endpoint
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL of the generation endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.endpoint.trim_start_matches('/')
        )
    }

    /// POST the record as JSON and return the rendered PDF bytes.
    ///
    /// Any status outside the 2xx range is a [`ProposalError::ServerRejection`];
    /// the response body of a rejection is not read.
    pub async fn request_pdf(&self, record: &ProposalRecord) -> Result<Vec<u8>, ProposalError> {
        let url = self.endpoint_url();
        let payload = serde_json::to_vec(record)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!("POST {} ({} bytes)", url, payload.len());

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .body(payload)
            .send()
            .await
            .map_err(|e| ProposalError::Transport { source: e })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Document endpoint returned status {}", status);
            return Err(ProposalError::server_rejection(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProposalError::unexpected(format!("Failed to read response body: {}", e)))?;

        debug!("Received document ({} bytes)", body.len());
        Ok(body.to_vec())
    }
}
