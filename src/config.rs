//! Configuration management for tracklift.
//!
//! Configuration values come from environment variables, optionally
//! seeded from a `.env` file in the platform-specific local data
//! directory (`tracklift/.env`). Spotify credentials and endpoints are
//! required for the playlist commands; the scrape target URL has a
//! compiled-in default and only needs overriding when pointing the
//! extractor at a mirror of the page.

use dotenv;
use std::{env, path::PathBuf};

/// The tracklist page the extractor was written against.
const DEFAULT_TARGET_URL: &str = "https://www.zenial.nl/html/variourf.htm";

/// Loads environment variables from `tracklift/.env` in the local data
/// directory, creating the directory if needed. A missing `.env` file
/// is fine; plain environment variables still apply.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tracklift/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// URL of the tracklist page to scrape. Overridable with
/// `TRACKLIFT_TARGET_URL`.
pub fn target_url() -> String {
    env::var("TRACKLIFT_TARGET_URL").unwrap_or_else(|_| DEFAULT_TARGET_URL.to_string())
}

/// Address the local OAuth callback server binds to.
///
/// # Panics
///
/// Panics if `SERVER_ADDRESS` is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Spotify user the playlists are created under.
///
/// # Panics
///
/// Panics if `SPOTIFY_USER_ID` is not set.
pub fn spotify_user() -> String {
    env::var("SPOTIFY_USER_ID").expect("SPOTIFY_USER_ID must be set")
}

/// Client ID of the registered Spotify application.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_AUTH_CLIENT_ID` is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// OAuth redirect URI; must match the URI registered with Spotify.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_REDIRECT_URI` is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Scope string requested during authorization.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_AUTH_SCOPE` is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Base URL of Spotify's OAuth authorization endpoint.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_AUTH_URL` is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Base URL of the Spotify Web API.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_URL` is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Token exchange endpoint for the OAuth flow.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_TOKEN_URL` is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}
