use std::{
    io::Error,
    path::{Path, PathBuf},
};

use crate::types::Track;

/// Delimiter between artist and title in the flat file. A title or
/// artist containing this exact substring makes the line unparseable on
/// read; such lines are skipped, not repaired.
const FIELD_DELIMITER: &str = " - ";

#[derive(Debug)]
pub enum TrackfileError {
    IoError(Error),
    /// The file was read to the end without one parseable line.
    NoTracks,
}

impl From<Error> for TrackfileError {
    fn from(err: Error) -> Self {
        TrackfileError::IoError(err)
    }
}

impl std::fmt::Display for TrackfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackfileError::IoError(e) => write!(f, "{}", e),
            TrackfileError::NoTracks => write!(f, "no valid tracks found in file"),
        }
    }
}

impl std::error::Error for TrackfileError {}

/// Persistence for the extracted track sequence as a plain text file,
/// one `"<Artist> - <Title>"` line per track. Durations are not part of
/// the format and do not survive a round trip.
pub struct TrackfileManager {
    path: PathBuf,
    tracks: Vec<Track>,
}

impl TrackfileManager {
    pub fn new(tracks: Vec<Track>, path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(Self::default_path),
            tracks,
        }
    }

    pub async fn load(path: Option<PathBuf>) -> Result<Self, TrackfileError> {
        let path = path.unwrap_or_else(Self::default_path);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(TrackfileError::IoError)?;

        let tracks: Vec<Track> = content.lines().filter_map(parse_line).collect();
        if tracks.is_empty() {
            return Err(TrackfileError::NoTracks);
        }

        Ok(Self { path, tracks })
    }

    pub async fn persist(&self) -> Result<(), TrackfileError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(TrackfileError::IoError)?;
        }

        let mut out = String::new();
        for track in &self.tracks {
            out.push_str(&track.artist);
            out.push_str(FIELD_DELIMITER);
            out.push_str(&track.title);
            out.push('\n');
        }

        async_fs::write(&self.path, out)
            .await
            .map_err(TrackfileError::IoError)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tracklift/tracks.txt");
        path
    }
}

/// Parses one line of the flat format. Only lines splitting into
/// exactly two parts count; anything else (blank lines, extra
/// delimiters) is silently dropped.
fn parse_line(line: &str) -> Option<Track> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() != 2 {
        return None;
    }

    Some(Track {
        artist: parts[0].trim().to_string(),
        title: parts[1].trim().to_string(),
        duration: String::new(),
    })
}
