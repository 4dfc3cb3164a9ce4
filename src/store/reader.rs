//! Startup load and playlist discovery
//!
//! Reads the favorites file if present, then scans the data directory for
//! playlist files and rebuilds one user playlist per file. Missing files
//! are not errors; the corresponding lists simply start empty.

use super::index;
use super::layout::{DataLayout, PLAYLIST_EXT};
use crate::codec::decode_track;
use crate::model::{Catalog, Playlist, Track};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

/// Load persisted state into the catalog
///
/// Favorites rows merge into the existing favorites list, skipping file
/// paths already present. Discovered playlist files become new user
/// playlists; a file whose display name is already taken is left alone.
pub fn load_catalog(layout: &DataLayout, catalog: &mut Catalog) -> Result<()> {
    load_favorites(layout, catalog)?;
    load_user_playlists(layout, catalog)?;

    log::info!(
        "loaded catalog from {:?}: {} favorites, {} playlists",
        layout.data_dir(),
        catalog.favorites().len(),
        catalog.playlist_count()
    );
    Ok(())
}

fn load_favorites(layout: &DataLayout, catalog: &mut Catalog) -> Result<()> {
    let path = layout.favorites_path();
    if !path.is_file() {
        log::debug!("no favorites file at {:?}", path);
        return Ok(());
    }

    for track in read_tracks(&path)? {
        if catalog.is_in_favorites(&track.file_path) {
            log::debug!("skipping favorite already present: {}", track.file_path);
            continue;
        }
        if let Err(err) = catalog.favorites_mut().add(track) {
            log::debug!("skipping favorites row: {err}");
        }
    }
    Ok(())
}

fn load_user_playlists(layout: &DataLayout, catalog: &mut Catalog) -> Result<()> {
    if !layout.data_dir().is_dir() {
        return Ok(());
    }

    let names_by_token = index::read_index(&layout.index_path())?;
    let favorites_file = layout.favorites_path();

    for entry in WalkDir::new(layout.data_dir()).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable directory entry: {err}");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file()
            || path == favorites_file
            || path.extension().and_then(|e| e.to_str()) != Some(PLAYLIST_EXT)
        {
            continue;
        }

        let Some(token) = path.file_stem().and_then(|s| s.to_str()) else {
            log::warn!("skipping playlist file with unusable name: {:?}", path);
            continue;
        };

        // Display name comes from the index when known, else the file stem
        let name = names_by_token
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string());

        let rows = match read_tracks(path) {
            Ok(rows) => rows,
            Err(err) => {
                log::warn!("skipping unreadable playlist file {:?}: {err:#}", path);
                continue;
            }
        };

        let mut playlist = Playlist::new(name, token);
        for track in rows {
            if let Err(err) = playlist.tracks_mut().add(track) {
                log::debug!("skipping row in {:?}: {err}", path);
            }
        }

        let name = playlist.name().to_string();
        if !catalog.adopt_playlist(playlist) {
            log::debug!("skipping playlist file {:?}: name {name:?} unusable", path);
        }
    }

    Ok(())
}

/// Parse one playlist file into track records
///
/// The first line is the column header and is skipped. Rows that do not
/// decode (no file path) are dropped with a debug log.
fn read_tracks(path: &Path) -> Result<Vec<Track>> {
    let file =
        File::open(path).with_context(|| format!("failed to open playlist file {:?}", path))?;
    let reader = BufReader::new(file);

    let mut tracks = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {:?}", path))?;
        if number == 0 {
            continue;
        }
        match decode_track(&line) {
            Some(track) => tracks.push(track),
            None => log::debug!("skipping unparsable row {} in {:?}", number + 1, path),
        }
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn layout(tmp: &TempDir) -> DataLayout {
        DataLayout::new(tmp.path().to_path_buf())
    }

    #[test]
    fn test_missing_files_load_empty() {
        let tmp = TempDir::new().unwrap();
        let mut catalog = Catalog::new();
        load_catalog(&layout(&tmp), &mut catalog).unwrap();
        assert_eq!(catalog.favorites().len(), 0);
        assert_eq!(catalog.playlist_count(), 0);
    }

    #[test]
    fn test_favorites_rows_deduplicated() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("favorites.csv"),
            "title;artist;album;file_path;cover_path;lrc_path;duration\n\
             Song A;Artist;Album;/music/a.mp3;;;200\n\
             Song A;Artist;Album;/music/a.mp3;;;200\n\
             Song B;Artist;Album;/music/b.mp3;;;100\n",
        )
        .unwrap();

        let mut catalog = Catalog::new();
        load_catalog(&layout(&tmp), &mut catalog).unwrap();
        assert_eq!(catalog.favorites().len(), 2);
        assert!(catalog.is_in_favorites("/music/a.mp3"));
        assert!(catalog.is_in_favorites("/music/b.mp3"));
    }

    #[test]
    fn test_playlist_discovered_from_stem() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("Roadtrip.csv"),
            "title;artist;album;file_path;cover_path;lrc_path;duration\n\
             Song A;Artist;Album;/music/a.mp3;;;200\n",
        )
        .unwrap();

        let mut catalog = Catalog::new();
        load_catalog(&layout(&tmp), &mut catalog).unwrap();
        assert_eq!(catalog.playlist_names(), vec!["Roadtrip".to_string()]);
        assert_eq!(catalog.get_playlist("Roadtrip").unwrap().len(), 1);
    }

    #[test]
    fn test_display_name_recovered_from_index() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("My_Mix.csv"),
            "title;artist;album;file_path;cover_path;lrc_path;duration\n",
        )
        .unwrap();
        fs::write(tmp.path().join("playlists.idx"), "My Mix;My_Mix\n").unwrap();

        let mut catalog = Catalog::new();
        load_catalog(&layout(&tmp), &mut catalog).unwrap();
        assert!(catalog.get_playlist("My Mix").is_some());
        assert_eq!(catalog.get_playlist("My Mix").unwrap().token(), "My_Mix");
    }

    #[test]
    fn test_favorites_file_not_a_playlist() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("favorites.csv"),
            "title;artist;album;file_path;cover_path;lrc_path;duration\n",
        )
        .unwrap();

        let mut catalog = Catalog::new();
        load_catalog(&layout(&tmp), &mut catalog).unwrap();
        assert_eq!(catalog.playlist_count(), 0);
    }

    #[test]
    fn test_non_playlist_files_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.txt"), "not a playlist").unwrap();
        fs::create_dir(tmp.path().join("sub.csv")).unwrap();

        let mut catalog = Catalog::new();
        load_catalog(&layout(&tmp), &mut catalog).unwrap();
        assert_eq!(catalog.playlist_count(), 0);
    }

    #[test]
    fn test_read_tracks_skips_header_and_bad_rows() {
        let tmp = TempDir::new().unwrap();
        let path: PathBuf = tmp.path().join("mix.csv");
        fs::write(
            &path,
            "title;artist;album;file_path;cover_path;lrc_path;duration\n\
             no path here;;;;;;12\n\
             \"Track;With;Semicolons\";Artist;;/music/b.mp3;;;73\n",
        )
        .unwrap();

        let tracks = read_tracks(&path).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Track;With;Semicolons");
        assert_eq!(tracks[0].duration_secs, 73);
    }
}
