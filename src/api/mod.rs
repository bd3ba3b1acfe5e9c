//! # API Module
//!
//! HTTP endpoints for the temporary local server that backs the OAuth
//! flow:
//!
//! - [`callback`] - receives Spotify's authorization redirect and
//!   completes the PKCE token exchange.
//! - [`health`] - status/version endpoint for checking that the
//!   callback server came up.
//!
//! Both handlers are plain async functions wired into an
//! [Axum](https://docs.rs/axum) router by [`crate::server`]. The
//! callback shares an `Arc<Mutex<Option<PkceToken>>>` with the auth
//! flow: the flow parks the code verifier there, the handler swaps in
//! the exchanged token.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
