use std::path::PathBuf;

use tabled::Table;

use crate::{management::TrackfileManager, types::TrackTableRow, warning};

pub async fn list_tracks(file: Option<PathBuf>) {
    match TrackfileManager::load(file).await {
        Ok(manager) => {
            let table_rows: Vec<TrackTableRow> = manager
                .tracks()
                .iter()
                .map(|t| TrackTableRow {
                    artist: t.artist.clone(),
                    title: t.title.clone(),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to load tracks. Err: {}", e),
    }
}
