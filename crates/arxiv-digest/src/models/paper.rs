//! Paper record and structured summary models.

use serde::{Deserialize, Serialize};

/// Per-record summarization state, observable from the interactive surface.
///
/// Transitions: `Unsummarized → Summarizing → Summarized` on success, or back
/// to `Unsummarized` on failure so the record stays retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SummaryState {
    /// No summary requested yet, or the last attempt failed.
    #[default]
    Unsummarized,
    /// A summary request is in flight.
    Summarizing,
    /// A summary is attached and cached.
    Summarized,
}

/// One paper from an arXiv search result.
///
/// `title`, `summary` and `published` hold the feed text verbatim. The record
/// lives for one search session and is replaced wholesale by the next search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    pub title: String,

    /// Abstract text.
    pub summary: String,

    /// Publication timestamp as returned by the feed.
    pub published: String,

    /// Structured summary, attached at most once per record.
    #[serde(default)]
    pub paper_summary: Option<StructuredSummary>,

    /// Current summarization state.
    #[serde(default)]
    pub summary_state: SummaryState,
}

impl Paper {
    /// Create a fresh record from one feed entry.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        published: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            published: published.into(),
            paper_summary: None,
            summary_state: SummaryState::Unsummarized,
        }
    }

    /// Mark a summary request as in flight.
    pub fn begin_summary(&mut self) {
        self.summary_state = SummaryState::Summarizing;
    }

    /// Attach a completed summary and mark the record summarized.
    pub fn attach_summary(&mut self, summary: StructuredSummary) {
        self.paper_summary = Some(summary);
        self.summary_state = SummaryState::Summarized;
    }

    /// Revert to `Unsummarized` after a failed attempt; the record stays retryable.
    pub fn reset_summary_state(&mut self) {
        self.summary_state = SummaryState::Unsummarized;
    }

    /// Get the cached summary, if one is attached.
    #[must_use]
    pub fn cached_summary(&self) -> Option<&StructuredSummary> {
        self.paper_summary.as_ref()
    }
}

/// The four-question structured summary of one abstract.
///
/// All fields are required in the model's structured response; decoding fails
/// if any is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSummary {
    /// One-line characterization of the work.
    pub short_summary: String,

    /// Limitation of prior work the paper addresses.
    pub problem: String,

    /// Methodological approach taken.
    pub how: String,

    /// Findings and conclusions.
    pub result: String,
}
