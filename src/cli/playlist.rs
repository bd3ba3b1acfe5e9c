use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    management::{TokenManager, TrackfileManager},
    spotify, success, utils, warning,
};

pub async fn playlist(file: Option<PathBuf>, name: Option<String>, description: Option<String>) {
    let tracks = match TrackfileManager::load(file).await {
        Ok(manager) => manager.tracks().to_vec(),
        Err(e) => error!("Failed to read tracks from file: {}", e),
    };

    let name = match name {
        Some(name) => name,
        None => match utils::prompt_line("Enter playlist name: ") {
            Ok(name) => name,
            Err(e) => error!("Error reading input: {}", e),
        },
    };
    if name.is_empty() {
        error!("Playlist name cannot be empty");
    }

    let description = match description {
        Some(description) => description,
        None => match utils::prompt_line("Enter playlist description: ") {
            Ok(description) => description,
            Err(e) => error!("Error reading input: {}", e),
        },
    };

    let playlist_exists = match spotify::playlist::exists(&name).await {
        Ok(exists) => exists,
        Err(e) => {
            warning!("Failed to check if playlist exists: {}", e);
            false
        }
    };
    if playlist_exists {
        info!("Playlist {} already exists", name);
        return;
    }

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run tracklift auth\n Error: {}",
                e
            );
        }
    };

    info!("Searching Spotify for {} tracks", tracks.len());

    let pb = ProgressBar::new(tracks.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut uris: Vec<String> = Vec::new();
    for track in &tracks {
        pb.set_message(format!("{} - {}", track.artist, track.title));
        let token = token_mgr.get_valid_token().await;
        match spotify::search::find_track(&token, track).await {
            Ok(Some(found)) => uris.push(found.uri),
            Ok(None) => {
                pb.suspend(|| warning!("Track not found: {} by {}", track.title, track.artist))
            }
            Err(e) => pb.suspend(|| {
                warning!(
                    "Error searching for track {} by {}: {}",
                    track.title,
                    track.artist,
                    e
                )
            }),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if uris.is_empty() {
        error!("No tracks found to add to the playlist");
    }
    success!("Resolved {} of {} tracks", uris.len(), tracks.len());

    let created = match spotify::playlist::create(name.clone(), description).await {
        Ok(resp) => {
            success!("Created playlist: {} ({})", resp.name, resp.id);
            resp
        }
        Err(e) => error!("Failed to create playlist: {}", e),
    };

    // The add endpoint takes at most 100 URIs per call.
    for chunk in uris.chunks(100) {
        match spotify::playlist::add_tracks(created.id.clone(), chunk.to_vec()).await {
            Ok(_) => success!("Added {} tracks to playlist", chunk.len()),
            Err(e) => warning!("Failed to add tracks to playlist: {}", e),
        }
    }

    success!("Playlist '{}' created with {} tracks", name, uris.len());
}
