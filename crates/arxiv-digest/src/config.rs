//! Configuration for the arXiv digest session.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv export API query endpoint.
    pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

    /// OpenAI chat completions endpoint.
    pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

    /// Chat model used for summary extraction.
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";

    /// Request timeout. Both external calls are small single-shot requests.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Papers fetched per search.
    pub const MAX_RESULTS: u32 = 5;

    /// Lookback window when no start date is given.
    pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

    /// Reference time zone for date resolution (JST, fixed UTC+9).
    pub const JST_OFFSET_HOURS: i32 = 9;

    /// Captured completion response used when no API key is configured.
    pub const FIXTURE_PATH: &str = "fixtures/summary_response.json";
}

/// Session configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key (optional; fixture mode when absent).
    pub openai_api_key: Option<String>,

    /// arXiv query endpoint (overridable for mock servers).
    pub arxiv_api_url: String,

    /// Chat completions endpoint (overridable for mock servers).
    pub openai_api_url: String,

    /// Chat model for summary extraction.
    pub model: String,

    /// Path to the captured completion response for fixture mode.
    pub fixture_path: PathBuf,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with an optional OpenAI API key.
    #[must_use]
    pub fn new(openai_api_key: Option<String>) -> Self {
        Self {
            openai_api_key,
            arxiv_api_url: api::ARXIV_API_URL.to_string(),
            openai_api_url: api::OPENAI_API_URL.to_string(),
            model: api::OPENAI_MODEL.to_string(),
            fixture_path: PathBuf::from(api::FIXTURE_PATH),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with both endpoints pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            openai_api_key: None,
            arxiv_api_url: format!("{base_url}/api/query"),
            openai_api_url: format!("{base_url}/v1/chat/completions"),
            model: api::OPENAI_MODEL.to_string(),
            fixture_path: PathBuf::from(api::FIXTURE_PATH),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        Ok(Self::new(api_key))
    }

    /// Check if an OpenAI API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
