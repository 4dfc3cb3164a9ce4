//! Unified data model for the playlist catalog
//!
//! This module defines the in-memory structures that are independent of
//! the on-disk text format: track records, ordered track lists, and the
//! catalog that owns the favorites list and all user playlists.

mod catalog;
mod playlist;
mod track;

pub use catalog::{Catalog, FAVORITES_NAME};
pub use playlist::{Playlist, TrackList};
pub use track::Track;
