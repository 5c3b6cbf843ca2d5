//! Error types for the arXiv digest tool.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Recoverable failures (transport, HTTP status) degrade to
//! warnings at the session layer; parse and schema faults propagate.

/// Errors from the HTTP layer of either external call.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-200 response.
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body or message.
        message: String,
    },
}

impl ClientError {
    /// Create an unexpected status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }

    /// Returns the HTTP status code if this is a status error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Errors from Atom feed parsing.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// Malformed XML document.
    #[error("Malformed feed: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An entry is missing a required field.
    #[error("Feed entry {entry} is missing required field '{field}'")]
    MissingField {
        /// Zero-based entry index in document order.
        entry: usize,
        /// Name of the absent element.
        field: &'static str,
    },
}

impl FeedError {
    /// Create a missing field error.
    #[must_use]
    pub const fn missing_field(entry: usize, field: &'static str) -> Self {
        Self::MissingField { entry, field }
    }
}

/// Errors from the search pipeline (fetch + parse).
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// Error from the HTTP layer.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Error from the feed parser.
    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl SearchError {
    /// Returns true if the session may degrade this failure to a warning.
    ///
    /// Transport and status failures are recoverable; feed faults are
    /// data-integrity defects and must propagate.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}

/// Errors from summary extraction.
#[derive(thiserror::Error, Debug)]
pub enum SummaryError {
    /// Error from the HTTP layer of the completion call.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The function-call arguments are not valid JSON.
    #[error("Completion arguments are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response carries no structured function call.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    /// A required field is absent from the structured payload.
    #[error("Completion payload is missing required field '{field}'")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// The fixture response could not be loaded.
    #[error("Failed to load fixture '{path}': {source}")]
    Fixture {
        /// Fixture file path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SummaryError {
    /// Create a malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Create a missing field error.
    #[must_use]
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a fixture load error.
    #[must_use]
    pub fn fixture(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Fixture { path: path.into(), source }
    }

    /// Returns true if the session may degrade this failure to a warning.
    ///
    /// Only transport/status failures qualify; schema faults propagate.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}

/// Errors surfaced by session operations.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// Requested record index does not exist in the current result set.
    #[error("No paper {index} in the current results ({count} papers)")]
    UnknownPaper {
        /// One-based display index requested by the user.
        index: usize,
        /// Number of papers in the current result set.
        count: usize,
    },

    /// Non-recoverable summary extraction fault.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// Non-recoverable feed fault during search.
    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// Result type alias for summary extraction.
pub type SummaryResult<T> = Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_recoverability() {
        let status = SearchError::from(ClientError::unexpected_status(503, "unavailable"));
        assert!(status.is_recoverable());

        let feed = SearchError::from(FeedError::missing_field(0, "title"));
        assert!(!feed.is_recoverable());
    }

    #[test]
    fn test_summary_error_recoverability() {
        let client = SummaryError::from(ClientError::unexpected_status(500, "boom"));
        assert!(client.is_recoverable());

        assert!(!SummaryError::missing_field("result").is_recoverable());
        assert!(!SummaryError::malformed("no function call").is_recoverable());
    }

    #[test]
    fn test_client_error_status() {
        let err = ClientError::unexpected_status(404, "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_missing_field_message_names_field() {
        let err = FeedError::missing_field(2, "published");
        let msg = err.to_string();
        assert!(msg.contains("entry 2"));
        assert!(msg.contains("published"));
    }
}
