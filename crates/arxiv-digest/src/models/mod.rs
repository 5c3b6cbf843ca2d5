//! Data models for search queries and paper records.

mod paper;
mod query;

pub use paper::{Paper, StructuredSummary, SummaryState};
pub use query::{SearchQuery, SortBy, SortOrder, is_valid_date, jst_now};
