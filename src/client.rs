//! HTTP client for the complaint reporting API.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::Settings;
use crate::models::Complaint;

/// Path of the read-only complaint listing endpoint.
const REPORTS_PATH: &str = "_demo/reports";

/// Errors that can occur while fetching complaint records.
#[derive(Debug, thiserror::Error)]
pub enum ReportsError {
    /// Could not reach the reporting API.
    #[error("connection error: {0}")]
    Connection(String),
    /// The API answered with a non-success status.
    #[error("API returned {0}")]
    Status(u16),
    /// The response body was not a valid complaint list.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Client for the complaint reporting API.
#[derive(Debug, Clone)]
pub struct ReportsClient {
    client: Client,
    api_base: String,
}

impl ReportsClient {
    /// Create a client from application settings.
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(Duration::from_secs(settings.request_timeout))
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: settings.api_base.clone(),
        }
    }

    /// The API base this client talks to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Same client pointed at a different API base.
    pub fn with_api_base(&self, api_base: &str) -> Self {
        Self {
            client: self.client.clone(),
            api_base: api_base.to_string(),
        }
    }

    /// Fetch the complaint list from the reporting API.
    pub async fn fetch_complaints(&self) -> Result<Vec<Complaint>, ReportsError> {
        let url = format!("{}/{}", self.api_base.trim_end_matches('/'), REPORTS_PATH);
        debug!("Fetching complaints from {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ReportsError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ReportsError::Status(resp.status().as_u16()));
        }

        let complaints: Vec<Complaint> = resp
            .json()
            .await
            .map_err(|e| ReportsError::Parse(e.to_string()))?;

        debug!("Fetched {} complaints", complaints.len());
        Ok(complaints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_status_code() {
        let err = ReportsError::Status(503);
        assert_eq!(err.to_string(), "API returned 503");
    }

    #[test]
    fn test_with_api_base() {
        let client = ReportsClient::new(&Settings::default());
        let other = client.with_api_base("http://10.0.0.5:9000/");
        assert_eq!(other.api_base(), "http://10.0.0.5:9000/");
        // Original is untouched
        assert_eq!(client.api_base(), "http://localhost:8000");
    }
}
