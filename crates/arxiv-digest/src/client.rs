//! arXiv search client.
//!
//! One GET per search, no retry and no backoff. Timeouts are explicit on the
//! underlying `reqwest` client.

use reqwest::Client;

use crate::config::Config;
use crate::error::{ClientError, SearchError};
use crate::feed;
use crate::models::{Paper, SearchQuery};

/// Client for the arXiv export query endpoint.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    /// Shared HTTP client.
    client: Client,

    /// Query endpoint URL.
    api_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_url: config.arxiv_api_url.clone() })
    }

    /// Run one search and parse the result feed.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Client`] on transport failure or a non-200
    /// status (recoverable) and [`SearchError::Feed`] if the payload cannot
    /// be parsed (propagates).
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Paper>, SearchError> {
        tracing::debug!(search_query = %query.search_query(), "querying arXiv");

        let response = self
            .client
            .get(&self.api_url)
            .query(&query.params())
            .send()
            .await
            .map_err(ClientError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::unexpected_status(status.as_u16(), message).into());
        }

        let body = response.text().await.map_err(ClientError::from)?;
        let papers = feed::parse_feed(&body)?;

        tracing::debug!(count = papers.len(), "parsed search results");
        Ok(papers)
    }
}
