use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config, error,
    management::TokenManager,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        GetUserPlaylistsResponse,
    },
};

/// Checks whether the current user already owns a playlist with this
/// exact name. Used as a duplicate guard before creation.
pub async fn exists(name: &str) -> Result<bool, reqwest::Error> {
    let api_url = format!("{uri}/me/playlists?limit=50", uri = &config::spotify_apiurl());

    let mut token_mgr = load_token_manager().await;

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<GetUserPlaylistsResponse>().await?;
        return Ok(json.items.iter().any(|p| p.name == name));
    }
}

/// Creates a private, non-collaborative playlist under the configured
/// user.
pub async fn create(
    name: String,
    description: String,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = &config::spotify_user()
    );

    let request = CreatePlaylistRequest {
        name,
        description,
        public: false,
        collaborative: false,
    };

    let mut token_mgr = load_token_manager().await;

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err);
                }
            },
            Err(err) => {
                return Err(err);
            }
        };

        let json = response.json::<CreatePlaylistResponse>().await?;
        return Ok(json);
    }
}

/// Adds track URIs to a playlist. Callers chunk the URI list to at
/// most 100 per call; the API rejects larger batches.
pub async fn add_tracks(
    playlist_id: String,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let request = AddTracksRequest { uris };

    let mut token_mgr = load_token_manager().await;

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err);
                }
            },
            Err(err) => {
                return Err(err);
            }
        };

        let json = response.json::<AddTracksResponse>().await?;
        return Ok(json);
    }
}

async fn load_token_manager() -> TokenManager {
    match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run tracklift auth\n Error: {}",
                e
            );
        }
    }
}
