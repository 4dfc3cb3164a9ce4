//! Error types for the playlist store

use std::path::PathBuf;

/// Errors surfaced by catalog and store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The data directory could not be created during setup
    #[error("failed to initialize data directory {dir:?}")]
    Init {
        dir: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A track with this file path is already present in the target list
    #[error("track already present: {0}")]
    DuplicateTrack(String),

    /// The referenced playlist does not exist
    #[error("playlist not found: {0}")]
    PlaylistNotFound(String),

    /// No track with this file path exists in the list
    #[error("track not found: {0}")]
    TrackNotFound(String),

    /// An empty required field, a reserved name, or a name that sanitizes to nothing
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A read or write to disk failed; in-memory state is preserved
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

/// Specialized result type for playlist store operations
pub type Result<T> = std::result::Result<T, Error>;
