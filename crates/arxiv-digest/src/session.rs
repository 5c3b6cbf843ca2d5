//! Session state and orchestration.
//!
//! The session owns the per-search record list and applies the error policy:
//! transport/status failures degrade to warnings, parse/schema faults
//! propagate. There is exactly one logical thread of control per session, so
//! no locking is involved.

use crate::client::ArxivClient;
use crate::error::{SearchError, SessionError};
use crate::models::{Paper, SearchQuery, jst_now};
use crate::summary::SummaryExtractor;

/// Outcome of a search action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Papers found and stored.
    Found(usize),

    /// The search succeeded but matched nothing. Informational, not an error.
    Empty,

    /// Transport or status failure, degraded to a warning. Record list cleared.
    FetchFailed,
}

/// Outcome of a summarize action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizeOutcome {
    /// A fresh summary was produced and attached.
    Summarized,

    /// The record already carried a summary; nothing was re-invoked.
    Cached,

    /// Transport or status failure, degraded to a warning. Record intact and
    /// retryable.
    Unavailable,
}

/// One interactive session.
///
/// Created on session start; the record list is replaced wholesale on each
/// new search and discarded with the session.
pub struct Session {
    client: ArxivClient,
    extractor: SummaryExtractor,
    papers: Vec<Paper>,
}

impl Session {
    /// Create a session over a search client and a summary extractor.
    #[must_use]
    pub fn new(client: ArxivClient, extractor: SummaryExtractor) -> Self {
        Self { client, extractor, papers: Vec::new() }
    }

    /// Current result set, in the order returned by arXiv.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Name of the configured completion source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.extractor.source_name()
    }

    /// Run one search, replacing the current record list.
    ///
    /// Missing dates resolve against the current JST date (start: one week
    /// back, end: today).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Feed`] if the result payload is malformed;
    /// transport/status failures are degraded to
    /// [`SearchOutcome::FetchFailed`] instead.
    pub async fn search(
        &mut self,
        keyword: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<SearchOutcome, SessionError> {
        let query = SearchQuery::resolve(keyword, start_date, end_date, jst_now());

        match self.client.search(&query).await {
            Ok(papers) => {
                let count = papers.len();
                self.papers = papers;
                if count == 0 {
                    tracing::info!(keyword, "search matched no papers");
                    Ok(SearchOutcome::Empty)
                } else {
                    tracing::info!(keyword, count, "search stored new result set");
                    Ok(SearchOutcome::Found(count))
                }
            }
            Err(SearchError::Client(e)) => {
                tracing::warn!(error = %e, "failed to fetch papers from arXiv");
                self.papers.clear();
                Ok(SearchOutcome::FetchFailed)
            }
            Err(SearchError::Feed(e)) => Err(e.into()),
        }
    }

    /// Summarize the record at `index` (zero-based), caching the result.
    ///
    /// An already-summarized record is reported as [`SummarizeOutcome::Cached`]
    /// without re-invoking the extractor. On failure the record reverts to
    /// `Unsummarized` and stays retryable.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownPaper`] for an out-of-range index and
    /// [`SessionError::Summary`] for schema faults in the model payload;
    /// transport/status failures are degraded to
    /// [`SummarizeOutcome::Unavailable`] instead.
    pub async fn summarize(&mut self, index: usize) -> Result<SummarizeOutcome, SessionError> {
        let count = self.papers.len();
        let Some(paper) = self.papers.get_mut(index) else {
            return Err(SessionError::UnknownPaper { index: index + 1, count });
        };

        if paper.cached_summary().is_some() {
            tracing::debug!(paper = index + 1, "redisplaying cached summary");
            return Ok(SummarizeOutcome::Cached);
        }

        paper.begin_summary();
        match self.extractor.summarize(&paper.summary).await {
            Ok(summary) => {
                paper.attach_summary(summary);
                Ok(SummarizeOutcome::Summarized)
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(paper = index + 1, error = %e, "summary generation failed");
                paper.reset_summary_state();
                Ok(SummarizeOutcome::Unavailable)
            }
            Err(e) => {
                paper.reset_summary_state();
                Err(e.into())
            }
        }
    }
}
