use serde::{Deserialize, Serialize};

/// A single playable track with its descriptive metadata
///
/// `file_path` is the de-facto primary key: two records with the same path
/// are the same track as far as list membership is concerned. All other
/// fields are descriptive and may be empty. Paths are stored verbatim as
/// provided by the host; this layer never opens the media files themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Path to the audio file (identity key, required)
    pub file_path: String,

    /// Path to the cover image, if any
    pub cover_path: String,

    /// Path to the synchronized lyrics (.lrc) file, if any
    pub lrc_path: String,

    /// Track duration in seconds
    pub duration_secs: u32,
}

impl Track {
    /// Create a track record from its seven fields
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        file_path: impl Into<String>,
        cover_path: impl Into<String>,
        lrc_path: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            file_path: file_path.into(),
            cover_path: cover_path.into(),
            lrc_path: lrc_path.into(),
            duration_secs,
        }
    }
}
