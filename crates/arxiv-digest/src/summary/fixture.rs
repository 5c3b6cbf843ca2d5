//! Fixture-backed completion source.
//!
//! Replays one captured response from a local JSON file instead of calling
//! the network. Used when no API key is configured, for demonstration and
//! testing without live credentials.

use std::path::PathBuf;

use super::{ChatRequest, ChatResponse, CompletionSource};
use crate::error::{SummaryError, SummaryResult};

/// Completion source reading a serialized [`ChatResponse`] from disk.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    /// Create a source reading from the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl CompletionSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn complete(&self, _request: &ChatRequest) -> SummaryResult<ChatResponse> {
        tracing::debug!(path = %self.path.display(), "loading fixture response");

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SummaryError::fixture(self.path.display().to_string(), e))?;

        serde_json::from_str(&raw).map_err(|e| {
            SummaryError::malformed(format!("fixture is not a valid completion response: {e}"))
        })
    }
}
