//! # Scrape Module
//!
//! Extraction of track listings from one HTML page built out of nested
//! tables. The page is scanned as a flat, forward-only token stream;
//! no DOM tree is ever built. A depth counter tells layout tables and
//! track-listing tables apart, and a per-row state machine turns cell
//! text into [`Track`](crate::types::Track) records.
//!
//! ## Pipeline
//!
//! ```text
//! HTTP fetch (reqwest)
//!      ↓ document bytes
//! Tokenizer           - pull-based, one token at a time
//!      ↓ tokens
//! Table-depth scanner - finds inner tables (cellspacing="0")
//!      ↓ per-table sub-streams
//! Row extractor       - Idle/InRow state machine, column counter
//!      ↓ raw cell text
//! Normalizer          - entity decoding + trimming
//! ```
//!
//! One broken table never aborts the page: its error is logged and the
//! scan moves on to sibling tables. Zero extracted tracks is always an
//! error, never an empty success.

mod extract;
mod text;
mod tokenizer;

use reqwest::Client;

pub use extract::{ColumnMap, ScrapeConfig, extract_table, extract_tracks};
pub use text::clean_text;
pub use tokenizer::{Token, TokenError, Tokenizer};

use crate::types::Track;

/// Everything that can go wrong between the fetch and the final track
/// sequence.
#[derive(Debug)]
pub enum ScrapeError {
    /// The document was scanned to the end without a single usable
    /// track table.
    NoTableFound,
    /// An inner table was matched but produced no valid rows.
    NoRowsInTable,
    /// The token stream failed mid-scan for a reason other than a clean
    /// end of input.
    Stream(TokenError),
    /// The page could not be fetched; nothing reached the parser.
    Http(reqwest::Error),
}

impl std::fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrapeError::NoTableFound => write!(f, "no table found in HTML content"),
            ScrapeError::NoRowsInTable => write!(f, "no rows found in table"),
            ScrapeError::Stream(e) => write!(f, "tokenizer error: {}", e),
            ScrapeError::Http(e) => write!(f, "failed to fetch URL: {}", e),
        }
    }
}

impl std::error::Error for ScrapeError {}

impl From<TokenError> for ScrapeError {
    fn from(err: TokenError) -> Self {
        ScrapeError::Stream(err)
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Http(err)
    }
}

/// Fetches the tracklist page and runs the extraction pipeline over it.
///
/// The fetch is a single GET with no retries or redirect handling of
/// its own; any HTTP failure surfaces as [`ScrapeError::Http`] and
/// never reaches the parser.
pub async fn fetch_tracks(url: &str, cfg: &ScrapeConfig) -> Result<Vec<Track>, ScrapeError> {
    let client = Client::new();
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    extract_tracks(&body, cfg)
}
