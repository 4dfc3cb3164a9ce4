//! Manager façade for the host UI
//!
//! `PlaylistManager` is the single entry point the host calls. It owns the
//! catalog and the data directory layout, applies the
//! flush-everything-on-mutation persistence policy, and collapses the
//! typed errors of the inner layers into the boolean surface the host
//! expects. It is an explicit context object: every operation goes
//! through an instance, never through global state.
//!
//! The manager is synchronous and single-threaded by contract; callers
//! sharing one across threads must serialize access themselves.

use crate::error::{Error, Result};
use crate::metadata::MediaMetadata;
use crate::model::{Catalog, Track};
use crate::store::{reader, writer, DataLayout};
use std::fs;
use std::path::{Path, PathBuf};

/// Owns all favorites and playlist state for one data directory
pub struct PlaylistManager {
    catalog: Catalog,
    layout: DataLayout,
}

impl PlaylistManager {
    /// Bind a data directory and load the persisted catalog
    ///
    /// `data_dir` may start with `~`, which is expanded to the user's home
    /// directory. The directory is created if missing; failure to create
    /// it is the only fatal init error. A load failure is logged and
    /// leaves the affected lists empty.
    pub fn init(data_dir: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(data_dir);
        let layout = DataLayout::new(PathBuf::from(expanded.as_ref()));

        layout.ensure_dirs().map_err(|source| Error::Init {
            dir: layout.data_dir().to_path_buf(),
            source,
        })?;

        let mut manager = Self {
            catalog: Catalog::new(),
            layout,
        };

        if let Err(err) = reader::load_catalog(&manager.layout, &mut manager.catalog) {
            log::warn!("initial catalog load failed: {err:#}");
        }

        log::info!(
            "playlist store ready at {:?}: {} favorites, {} playlists",
            manager.layout.data_dir(),
            manager.catalog.favorites().len(),
            manager.catalog.playlist_count()
        );
        Ok(manager)
    }

    /// Add a track to favorites; persists the catalog on success
    pub fn add_to_favorites(&mut self, track: Track) -> bool {
        match self.catalog.add_to_favorites(track) {
            Ok(()) => self.flush(),
            Err(err) => {
                log::debug!("add_to_favorites rejected: {err}");
                false
            }
        }
    }

    /// Remove a track from favorites by file path; persists on success
    pub fn remove_from_favorites(&mut self, file_path: &str) -> bool {
        match self.catalog.remove_from_favorites(file_path) {
            Ok(()) => self.flush(),
            Err(err) => {
                log::debug!("remove_from_favorites rejected: {err}");
                false
            }
        }
    }

    /// Add the currently playing media to favorites
    ///
    /// The host's player supplies title and duration; the title falls
    /// back to the filename stem when the player has no tag for it.
    /// Cover and lyrics paths start empty.
    pub fn add_playing_to_favorites<M: MediaMetadata>(
        &mut self,
        file_path: &str,
        player: &M,
    ) -> bool {
        let title = player.title().unwrap_or_else(|| {
            Path::new(file_path)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string()
        });

        let track = Track::new(title, "", "", file_path, "", "", player.duration_secs());
        self.add_to_favorites(track)
    }

    /// Check whether a track is in favorites
    pub fn is_in_favorites(&self, file_path: &str) -> bool {
        self.catalog.is_in_favorites(file_path)
    }

    /// Favorites tracks in insertion order
    pub fn favorites_tracks(&self) -> impl Iterator<Item = &Track> {
        self.catalog.favorites().iter()
    }

    /// Number of favorite tracks
    pub fn favorites_count(&self) -> usize {
        self.catalog.favorites().len()
    }

    /// Create a user playlist; true for both a new and an existing one
    ///
    /// Idempotent: asking for an existing name succeeds without creating
    /// a duplicate. Only a newly created playlist triggers persistence.
    pub fn create_playlist(&mut self, name: &str) -> bool {
        match self.catalog.create_playlist(name) {
            Ok(true) => self.flush(),
            Ok(false) => true,
            Err(err) => {
                log::debug!("create_playlist rejected: {err}");
                false
            }
        }
    }

    /// Delete a user playlist and its backing file
    pub fn delete_playlist(&mut self, name: &str) -> bool {
        let playlist = match self.catalog.delete_playlist(name) {
            Ok(playlist) => playlist,
            Err(err) => {
                log::debug!("delete_playlist rejected: {err}");
                return false;
            }
        };

        let path = self.layout.playlist_path(playlist.token());
        if let Err(err) = fs::remove_file(&path) {
            // The file may legitimately never have been written
            log::debug!("could not remove playlist file {:?}: {err}", path);
        }

        // Rewrite the index so the deleted name does not linger
        self.flush()
    }

    /// Names of all user playlists, in unspecified order
    pub fn playlist_names(&self) -> Vec<String> {
        self.catalog.playlist_names()
    }

    /// Number of user playlists
    pub fn playlist_count(&self) -> usize {
        self.catalog.playlist_count()
    }

    /// Add a track to the named playlist; persists the catalog on success
    pub fn add_to_playlist(&mut self, name: &str, track: Track) -> bool {
        match self.catalog.add_to_playlist(name, track) {
            Ok(()) => self.flush(),
            Err(err) => {
                log::debug!("add_to_playlist rejected: {err}");
                false
            }
        }
    }

    /// Remove a track from the named playlist; persists on success
    pub fn remove_from_playlist(&mut self, name: &str, file_path: &str) -> bool {
        match self.catalog.remove_from_playlist(name, file_path) {
            Ok(()) => self.flush(),
            Err(err) => {
                log::debug!("remove_from_playlist rejected: {err}");
                false
            }
        }
    }

    /// Tracks of the named playlist, empty when the playlist is unknown
    pub fn playlist_tracks(&self, name: &str) -> impl Iterator<Item = &Track> {
        self.catalog
            .get_playlist(name)
            .into_iter()
            .flat_map(|playlist| playlist.tracks().iter())
    }

    /// Persist the whole catalog to disk
    pub fn save(&self) -> bool {
        self.flush()
    }

    /// Re-read persisted state from disk into the catalog
    ///
    /// Favorites rows merge with a duplicate skip; discovered playlists
    /// whose names are already present are left alone.
    pub fn load(&mut self) -> bool {
        match reader::load_catalog(&self.layout, &mut self.catalog) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("catalog load failed: {err:#}");
                false
            }
        }
    }

    /// Flush and release the manager
    ///
    /// Dropping the manager performs the same best-effort final save;
    /// this method just makes the teardown point explicit in host code.
    pub fn shutdown(self) {
        log::debug!("shutting down playlist store");
    }

    fn flush(&self) -> bool {
        match writer::save_catalog(&self.layout, &self.catalog) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("catalog save failed, on-disk state is stale: {err:#}");
                false
            }
        }
    }
}

impl Drop for PlaylistManager {
    fn drop(&mut self) {
        if let Err(err) = writer::save_catalog(&self.layout, &self.catalog) {
            log::warn!("final catalog save failed: {err:#}");
        }
    }
}
