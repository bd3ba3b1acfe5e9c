use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error, info,
    management::TrackfileManager,
    scrape::{ScrapeConfig, fetch_tracks},
    success,
};

pub async fn fetch(output: Option<PathBuf>, verbose: bool) {
    let url = config::target_url();
    info!("Fetching {}", url);

    let cfg = ScrapeConfig {
        verbose,
        ..Default::default()
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Scanning tracklist page...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let tracks = match fetch_tracks(&url, &cfg).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to extract tracks: {}", e);
        }
    };

    success!("Extracted {} tracks", tracks.len());

    let manager = TrackfileManager::new(tracks, output);
    match manager.persist().await {
        Ok(()) => success!(
            "Wrote {} tracks to {}",
            manager.count(),
            manager.path().display()
        ),
        Err(e) => error!("Failed to write trackfile: {}", e),
    }
}
