use crate::supplier::SupplierRecord;
use reqwest::{Client, Error as ReqwestError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ScoutApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Service responded with status {0}")]
    Status(u16),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Body of a search request
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// The remote search and persistence service (allows mocking for tests)
#[async_trait::async_trait]
pub trait SupplierApi: Send + Sync {
    /// Ranked supplier candidates for a free-text query
    async fn search(&self, query: &str) -> Result<Vec<SupplierRecord>, ScoutApiError>;
    /// Persist one record. Any 2xx counts as success; the body is ignored.
    async fn save(&self, supplier: &SupplierRecord) -> Result<(), ScoutApiError>;
    /// Records persisted so far
    async fn list_saved(&self) -> Result<Vec<SupplierRecord>, ScoutApiError>;
}

#[derive(Clone)]
pub struct HttpScoutClient {
    client: Client,
    base_url: String,
}

impl HttpScoutClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl SupplierApi for HttpScoutClient {
    async fn search(&self, query: &str) -> Result<Vec<SupplierRecord>, ScoutApiError> {
        let url = self.endpoint("/search");
        info!("📡 Scout API: POST {} query='{}'", url, query);

        let response = self
            .client
            .post(&url)
            .json(&SearchRequest { query })
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("✗ Search endpoint returned {}", status);
            return Err(ScoutApiError::Status(status.as_u16()));
        }

        // Decode separately so a non-list body surfaces as a serialization error
        let body = response.bytes().await?;
        let suppliers: Vec<SupplierRecord> = serde_json::from_slice(&body)?;

        info!("✓ Search returned {} supplier(s)", suppliers.len());
        Ok(suppliers)
    }

    async fn save(&self, supplier: &SupplierRecord) -> Result<(), ScoutApiError> {
        let url = self.endpoint("/suppliers");
        info!("📡 Scout API: POST {} name='{}'", url, supplier.name);

        let response = self.client.post(&url).json(supplier).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            warn!("✗ Save endpoint returned {}", status);
            Err(ScoutApiError::Status(status.as_u16()))
        }
    }

    async fn list_saved(&self) -> Result<Vec<SupplierRecord>, ScoutApiError> {
        let url = self.endpoint("/suppliers");
        info!("📡 Scout API: GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("✗ Saved suppliers endpoint returned {}", status);
            return Err(ScoutApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scout_client_creation() {
        let client = HttpScoutClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("/search"), "http://localhost:8000/search");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpScoutClient::new("https://scout.example/api/");
        assert_eq!(
            client.endpoint("/suppliers"),
            "https://scout.example/api/suppliers"
        );
    }

    #[test]
    fn test_search_request_body() {
        let body = serde_json::to_value(SearchRequest {
            query: "Find suppliers for industrial components",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "query": "Find suppliers for industrial components" })
        );
    }
}
