//! Search query construction and date resolution.
//!
//! Translates a keyword plus an optional YYYYMMDD date range into the arXiv
//! API query-string dialect. Dates are resolved against JST (fixed UTC+9),
//! the reference time zone of the original tool.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

use crate::config::api;

/// Sort key accepted by the arXiv query endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Relevance to the query.
    #[default]
    Relevance,
    /// Submission date.
    SubmittedDate,
    /// Last update date.
    LastUpdatedDate,
}

impl SortBy {
    /// Wire value for the `sortBy` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::SubmittedDate => "submittedDate",
            Self::LastUpdatedDate => "lastUpdatedDate",
        }
    }
}

/// Sort direction accepted by the arXiv query endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most relevant / newest first.
    #[default]
    Descending,
    /// Oldest first.
    Ascending,
}

impl SortOrder {
    /// Wire value for the `sortOrder` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descending => "descending",
            Self::Ascending => "ascending",
        }
    }
}

/// A fully resolved search query. Constructed fresh per search; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text keyword.
    pub keyword: String,

    /// Inclusive start of the submission window (YYYYMMDD).
    pub start_date: String,

    /// Inclusive end of the submission window (YYYYMMDD).
    pub end_date: String,

    /// Result cap per search.
    pub max_results: u32,

    /// Sort key.
    pub sort_by: SortBy,

    /// Sort direction.
    pub sort_order: SortOrder,
}

impl SearchQuery {
    /// Resolve a keyword and optional date bounds into a query.
    ///
    /// A missing start date becomes `now` minus seven days, a missing end
    /// date becomes `now`; both formatted YYYYMMDD in the time zone of `now`.
    #[must_use]
    pub fn resolve(
        keyword: impl Into<String>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        now: DateTime<FixedOffset>,
    ) -> Self {
        let start = start_date.map_or_else(
            || (now - Duration::days(api::DEFAULT_LOOKBACK_DAYS)).format("%Y%m%d").to_string(),
            str::to_owned,
        );
        let end = end_date.map_or_else(|| now.format("%Y%m%d").to_string(), str::to_owned);

        Self {
            keyword: keyword.into(),
            start_date: start,
            end_date: end,
            max_results: api::MAX_RESULTS,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }

    /// Compose the `search_query` parameter value.
    ///
    /// The end bound is widened to the last second of that day.
    #[must_use]
    pub fn search_query(&self) -> String {
        format!(
            "{} AND submittedDate:[{} TO {}235959]",
            self.keyword, self.start_date, self.end_date
        )
    }

    /// Full query-parameter list for the GET request.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        vec![
            ("search_query".to_string(), self.search_query()),
            ("max_results".to_string(), self.max_results.to_string()),
            ("sortBy".to_string(), self.sort_by.as_str().to_string()),
            ("sortOrder".to_string(), self.sort_order.as_str().to_string()),
        ]
    }
}

/// Current time in JST.
#[must_use]
pub fn jst_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

/// Check that a user-supplied date is a real calendar date in YYYYMMDD form.
#[must_use]
pub fn is_valid_date(input: &str) -> bool {
    NaiveDate::parse_from_str(input, "%Y%m%d").is_ok()
}

fn jst() -> FixedOffset {
    FixedOffset::east_opt(api::JST_OFFSET_HOURS * 3600).expect("valid JST offset")
}
