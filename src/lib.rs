//! Tracklist Scraper & Playlist CLI Library
//!
//! This library turns one nested-table HTML tracklist page into a
//! Spotify playlist. The page is scanned with a streaming tokenizer,
//! extracted tracks are persisted to a flat text file, and the file is
//! replayed against the Spotify Web API to build a playlist.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token cache and trackfile persistence
//! - `scrape` - Streaming HTML extraction of the track table
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tracklift::{config, scrape};
//!
//! #[tokio::main]
//! async fn main() -> tracklift::Res<()> {
//!     config::load_env().await?;
//!     let cfg = scrape::ScrapeConfig::default();
//!     let tracks = scrape::fetch_tracks(&config::target_url(), &cfg).await?;
//!     println!("{} tracks", tracks.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod scrape;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so
/// it composes across async boundaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Extracted {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the
/// program with code 1. Only for unrecoverable errors.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark for
/// recoverable issues the user should still notice.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
