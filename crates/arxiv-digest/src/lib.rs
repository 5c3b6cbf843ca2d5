//! arXiv digest
//!
//! An interactive terminal tool that searches arXiv by keyword and date
//! range, then asks a chat-completion endpoint for a structured four-question
//! summary (in Japanese) of a paper's abstract.
//!
//! # Features
//!
//! - **Date-bounded search**: keyword plus `submittedDate` window, missing
//!   dates resolved against JST (one week back / today)
//! - **Atom parsing**: streaming feed parser producing records in document
//!   order with verbatim fields
//! - **Structured summaries**: function-calling completion decoded into four
//!   required fields, cached per record
//! - **Fixture mode**: runs without credentials by replaying a captured
//!   completion response
//!
//! # Example
//!
//! ```no_run
//! use arxiv_digest::client::ArxivClient;
//! use arxiv_digest::config::Config;
//! use arxiv_digest::models::{SearchQuery, jst_now};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ArxivClient::new(&config)?;
//!
//!     let query = SearchQuery::resolve("transformer", None, None, jst_now());
//!     let papers = client.search(&query).await?;
//!     println!("{} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod formatters;
pub mod models;
pub mod repl;
pub mod session;
pub mod summary;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, FeedError, SearchError, SessionError, SummaryError};
pub use session::Session;
