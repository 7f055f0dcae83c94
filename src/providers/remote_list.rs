//! Remote List Client
//!
//! Reads a named list of experience records from a remote JSON document
//! shaped like `{ "experiences": [...] }`.
//!
//! One GET per call: no retry, no pagination, no auth. No timeout is set
//! beyond the transport's own termination.

use tracing::{debug, info};

use crate::models::{AppError, AppResult, ExperienceRecord, ExperiencesDocument};
use crate::utils::constants::USER_AGENT;

/// HTTP client for experience list resources
#[derive(Debug, Clone)]
pub struct RemoteListClient {
    client: reqwest::Client,
}

impl Default for RemoteListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteListClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Fetch the `experiences` list at `url`.
    ///
    /// Only a body that is not JSON at all is a parse failure. A missing or
    /// non-array `experiences` is an empty list, and invalid entries are
    /// skipped without failing the rest.
    pub async fn fetch_experiences(&self, url: &str) -> AppResult<Vec<ExperienceRecord>> {
        debug!(url, "Fetching experience list");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let document = ExperiencesDocument::from_value(serde_json::from_slice(&body)?);
        let skipped = document.skipped;
        let records = document.into_records();

        info!(url, count = records.len(), skipped, "Experience list fetched");

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorCode;

    #[tokio::test]
    async fn test_unreachable_host_is_transport_failure() {
        let client = RemoteListClient::new();
        // Port 9 (discard) on localhost is expected to refuse connections
        let err = client
            .fetch_experiences("http://127.0.0.1:9/work.json")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::FetchTransportFailed);
        assert!(!err.message.is_empty());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_failure() {
        let client = RemoteListClient::new();
        let err = client.fetch_experiences("not a url").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::FetchTransportFailed);
    }
}
