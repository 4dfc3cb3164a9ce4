use super::{Playlist, Track, TrackList};
use crate::error::{Error, Result};
use crate::sanitize::sanitize;

/// Reserved name of the system-owned favorites list
///
/// This name can never be used to create or delete a user playlist, and
/// the favorites file always persists under this stem.
pub const FAVORITES_NAME: &str = "favorites";

/// The in-memory playlist catalog
///
/// Owns the favorites list and every user playlist reachable from it; no
/// other component mutates this state directly. User playlist names are
/// unique (case-sensitive) and each playlist carries a catalog-unique
/// filesystem token. The internal playlist order is most-recently-created
/// first; callers must treat it as unspecified.
#[derive(Debug, Default)]
pub struct Catalog {
    /// The reserved, always-present favorites list
    favorites: TrackList,

    /// User playlists, newest first
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The favorites list
    pub fn favorites(&self) -> &TrackList {
        &self.favorites
    }

    /// Add a track to favorites
    pub fn add_to_favorites(&mut self, track: Track) -> Result<()> {
        self.favorites.add(track)
    }

    /// Remove a track from favorites by file path
    pub fn remove_from_favorites(&mut self, file_path: &str) -> Result<()> {
        self.favorites.remove(file_path)
    }

    /// Check whether a track is in favorites
    pub fn is_in_favorites(&self, file_path: &str) -> bool {
        self.favorites.contains(file_path)
    }

    pub(crate) fn favorites_mut(&mut self) -> &mut TrackList {
        &mut self.favorites
    }

    /// Create a user playlist, or return the existing one unchanged
    ///
    /// Idempotent: requesting a name that already exists is a no-op and
    /// reports `Ok(false)`. A newly created playlist is prepended to the
    /// catalog and reported as `Ok(true)`. The empty string and the
    /// reserved favorites name are rejected.
    pub fn create_playlist(&mut self, name: &str) -> Result<bool> {
        if name.is_empty() {
            return Err(Error::InvalidInput("playlist name is empty".to_string()));
        }
        if name == FAVORITES_NAME {
            return Err(Error::InvalidInput(format!(
                "playlist name {name:?} is reserved"
            )));
        }
        if self.get_playlist(name).is_some() {
            return Ok(false);
        }

        let base = sanitize(name).ok_or_else(|| {
            Error::InvalidInput(format!("playlist name {name:?} sanitizes to nothing"))
        })?;
        let token = self.unique_token(&base);

        self.playlists.insert(0, Playlist::new(name, token));
        Ok(true)
    }

    /// Delete a user playlist, returning the removed playlist
    ///
    /// The caller is responsible for removing the playlist's backing file
    /// (the returned playlist carries the token it persisted under).
    pub fn delete_playlist(&mut self, name: &str) -> Result<Playlist> {
        if name == FAVORITES_NAME {
            return Err(Error::InvalidInput(format!(
                "playlist name {name:?} is reserved"
            )));
        }
        let position = self
            .playlists
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| Error::PlaylistNotFound(name.to_string()))?;

        Ok(self.playlists.remove(position))
    }

    /// Look up a user playlist by name
    pub fn get_playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name() == name)
    }

    fn get_playlist_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.name() == name)
    }

    /// Add a track to the named user playlist
    pub fn add_to_playlist(&mut self, name: &str, track: Track) -> Result<()> {
        let playlist = self
            .get_playlist_mut(name)
            .ok_or_else(|| Error::PlaylistNotFound(name.to_string()))?;
        playlist.tracks_mut().add(track)
    }

    /// Remove a track from the named user playlist by file path
    pub fn remove_from_playlist(&mut self, name: &str, file_path: &str) -> Result<()> {
        let playlist = self
            .get_playlist_mut(name)
            .ok_or_else(|| Error::PlaylistNotFound(name.to_string()))?;
        playlist.tracks_mut().remove(file_path)
    }

    /// Names of all user playlists
    ///
    /// The order reflects the catalog's internal newest-first layout and
    /// is not part of the contract.
    pub fn playlist_names(&self) -> Vec<String> {
        self.playlists.iter().map(|p| p.name().to_string()).collect()
    }

    /// All user playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Number of user playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Adopt a playlist rebuilt from disk
    ///
    /// Used by the loader. Refuses (without mutating) playlists whose name
    /// is empty, reserved, or already present, or whose token is taken.
    pub(crate) fn adopt_playlist(&mut self, playlist: Playlist) -> bool {
        if playlist.name().is_empty()
            || playlist.name() == FAVORITES_NAME
            || self.get_playlist(playlist.name()).is_some()
            || self.token_taken(playlist.token())
        {
            return false;
        }
        self.playlists.insert(0, playlist);
        true
    }

    fn token_taken(&self, token: &str) -> bool {
        token == FAVORITES_NAME || self.playlists.iter().any(|p| p.token() == token)
    }

    /// Pick a token not yet claimed by any playlist (or the favorites file)
    fn unique_token(&self, base: &str) -> String {
        if !self.token_taken(base) {
            return base.to_string();
        }
        let mut n = 2u32;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.token_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
