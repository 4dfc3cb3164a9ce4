//! Playlist Store - favorites and playlist persistence for a media player
//!
//! This library keeps an in-memory catalog of track records (one reserved
//! favorites list plus named user playlists) durable on disk as one delimited
//! text file per playlist under a data directory.

pub mod codec;
pub mod error;
pub mod manager;
pub mod metadata;
pub mod model;
pub mod sanitize;
pub mod store;

pub use error::{Error, Result};
pub use manager::PlaylistManager;
pub use metadata::MediaMetadata;
pub use model::{Catalog, Playlist, Track, TrackList};
