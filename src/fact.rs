//! Outbound fact lookup backing `Query.getFortuneCookie`.

use crate::error::{BlogError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
}

/// Fetches one fact per call from a JSON endpoint. No caching, no retries.
pub struct HttpFactSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFactSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| BlogError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    async fn fetch_fact(&self) -> Result<String> {
        debug!(url = %self.url, "fetching fact");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body: FactResponse = response.json().await?;
        Ok(body.fact)
    }
}

/// Install the process-wide rustls crypto provider used by the HTTP client.
///
/// Safe to call more than once.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
