//! Playlist file writing
//!
//! Every save fully rewrites each playlist file in a single pass: the
//! header line, then one encoded line per track. Writes land in a
//! temporary file next to the target and are renamed over it, so a crash
//! mid-write never leaves a truncated playlist behind.

use super::index;
use super::layout::DataLayout;
use crate::codec::{encode_track, HEADER};
use crate::model::{Catalog, TrackList};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Persist the entire catalog: favorites, every user playlist, the index
///
/// Each file write is self-contained, but there is no atomicity across
/// files; a failure part-way leaves earlier files already updated.
pub fn save_catalog(layout: &DataLayout, catalog: &Catalog) -> Result<()> {
    layout.ensure_dirs()?;

    write_track_list(&layout.favorites_path(), catalog.favorites())?;

    for playlist in catalog.playlists() {
        write_track_list(&layout.playlist_path(playlist.token()), playlist.tracks())?;
    }

    write_atomic(&layout.index_path(), &index::encode_index(catalog.playlists()))?;

    log::debug!(
        "saved catalog: {} favorites, {} playlists",
        catalog.favorites().len(),
        catalog.playlist_count()
    );
    Ok(())
}

/// Write one track list to its playlist file
pub fn write_track_list(path: &Path, tracks: &TrackList) -> Result<()> {
    let mut contents = String::with_capacity(HEADER.len() + 1 + tracks.len() * 64);
    contents.push_str(HEADER);
    contents.push('\n');
    for track in tracks.iter() {
        contents.push_str(&encode_track(track));
        contents.push('\n');
    }

    write_atomic(path, &contents)
}

/// Write a file through a sibling temp file renamed over the target
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("no parent directory for {:?}", path))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {:?}", dir))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {:?}", path))?;
    tmp.persist(path)
        .with_context(|| format!("failed to replace {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_written_file_has_header_and_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mix.csv");

        let mut tracks = TrackList::new();
        tracks
            .add(Track::new("Song A", "Artist", "Album", "/music/a.mp3", "", "", 200))
            .unwrap();

        write_track_list(&path, &tracks).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "title;artist;album;file_path;cover_path;lrc_path;duration\n\
             Song A;Artist;Album;/music/a.mp3;;;200\n"
        );
    }

    #[test]
    fn test_rewrite_replaces_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mix.csv");

        let mut tracks = TrackList::new();
        tracks
            .add(Track::new("Song A", "", "", "/music/a.mp3", "", "", 1))
            .unwrap();
        tracks
            .add(Track::new("Song B", "", "", "/music/b.mp3", "", "", 2))
            .unwrap();
        write_track_list(&path, &tracks).unwrap();

        tracks.remove("/music/a.mp3").unwrap();
        write_track_list(&path, &tracks).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("/music/a.mp3"));
        assert!(contents.contains("/music/b.mp3"));
    }
}
