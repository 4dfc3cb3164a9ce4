//! Data directory layout

use crate::model::FAVORITES_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Extension shared by all playlist files
pub const PLAYLIST_EXT: &str = "csv";

/// Filename of the persisted name-to-token index
pub const INDEX_FILENAME: &str = "playlists.idx";

/// Owns the data directory and computes every path persisted under it
#[derive(Debug, Clone)]
pub struct DataLayout {
    /// Root folder for all playlist files
    data_dir: PathBuf,
}

impl DataLayout {
    /// Create a layout rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// The data directory root
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the favorites file (reserved name)
    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{FAVORITES_NAME}.{PLAYLIST_EXT}"))
    }

    /// Path of a user playlist file for the given token
    pub fn playlist_path(&self, token: &str) -> PathBuf {
        self.data_dir.join(format!("{token}.{PLAYLIST_EXT}"))
    }

    /// Path of the name-to-token index file
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join(INDEX_FILENAME)
    }

    /// Create the data directory if it does not exist
    ///
    /// Segments are created one at a time, iteratively. Drive-letter and
    /// network-share roots are path components that cannot be created, so
    /// they are carried into the running path without a create attempt.
    pub fn ensure_dirs(&self) -> Result<()> {
        if self.data_dir.is_dir() {
            return Ok(());
        }

        let mut current = PathBuf::new();
        for component in self.data_dir.components() {
            current.push(component);
            match component {
                Component::Prefix(_) | Component::RootDir => continue,
                Component::CurDir | Component::ParentDir => continue,
                Component::Normal(_) => {}
            }
            if current.is_dir() {
                continue;
            }
            if let Err(err) = fs::create_dir(&current) {
                // Tolerate a concurrent create; anything else is fatal
                if !current.is_dir() {
                    return Err(err).with_context(|| {
                        format!("failed to create directory {:?}", current)
                    });
                }
            }
        }

        if self.data_dir.is_dir() {
            Ok(())
        } else {
            anyhow::bail!("data directory {:?} could not be created", self.data_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_under_data_dir() {
        let layout = DataLayout::new(PathBuf::from("/data/playlists"));
        assert_eq!(
            layout.favorites_path(),
            PathBuf::from("/data/playlists/favorites.csv")
        );
        assert_eq!(
            layout.playlist_path("My_Mix"),
            PathBuf::from("/data/playlists/My_Mix.csv")
        );
        assert_eq!(
            layout.index_path(),
            PathBuf::from("/data/playlists/playlists.idx")
        );
    }

    #[test]
    fn test_ensure_dirs_creates_nested_segments() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("a").join("b").join("c");

        let layout = DataLayout::new(target.clone());
        layout.ensure_dirs().unwrap();
        assert!(target.is_dir());

        // Second call is a no-op
        layout.ensure_dirs().unwrap();
        assert!(target.is_dir());
    }
}
