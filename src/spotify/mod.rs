//! # Spotify Integration Module
//!
//! The integration layer between tracklift and the Spotify Web API:
//! authentication, track search, and playlist management. All HTTP
//! communication, OAuth plumbing and rate-limit handling lives here so
//! the CLI layer can stay declarative.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Track Search (resolve scraped tracks to URIs)
//!     └── Playlist Operations (Create, Add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 PKCE flow: a cryptographically
//! random code verifier, a SHA-256 challenge, a temporary local
//! callback server, a browser hand-off, and finally the code/token
//! exchange. No client secret is ever stored. Tokens land in the local
//! data directory and are refreshed with a safety buffer before expiry.
//!
//! ## Search and playlists
//!
//! [`search`] resolves one scraped track at a time with a
//! `track:<title> artist:<artist>` query, taking the first hit.
//! [`playlist`] checks for an existing playlist of the same name,
//! creates a private one, and adds resolved URIs in batches of at most
//! 100 per request, the API's hard ceiling.
//!
//! ## Error handling
//!
//! - `429 Too Many Requests` is retried after the `Retry-After` delay
//!   (up to 120 seconds; longer delays produce a warning instead).
//! - `502 Bad Gateway` is retried after a 10 second pause.
//! - All other failures are propagated as `reqwest::Error`.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - token exchange and refresh
//! - `GET /search` - track resolution
//! - `GET /me/playlists` - duplicate checking
//! - `POST /users/{user_id}/playlists` - playlist creation
//! - `POST /playlists/{playlist_id}/tracks` - batch track insertion

pub mod auth;
pub mod playlist;
pub mod search;
