//! Walk through the playlist store API against a local data directory
//!
//! Run with: cargo run --example basic_usage [data-dir]

use anyhow::Result;
use playlist_store::{PlaylistManager, Track};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./playlist-data".to_string());

    let mut manager = PlaylistManager::init(&data_dir)?;

    let song = Track::new(
        "Blue in Green",
        "Miles Davis",
        "Kind of Blue",
        "/music/blue_in_green.flac",
        "/covers/kind_of_blue.jpg",
        "",
        337,
    );

    if manager.add_to_favorites(song.clone()) {
        log::info!("added {} to favorites", song.title);
    } else {
        log::info!("{} was already a favorite", song.title);
    }

    manager.create_playlist("Late Night");
    manager.add_to_playlist("Late Night", song);

    log::info!("favorites ({}):", manager.favorites_count());
    for track in manager.favorites_tracks() {
        log::info!("  {} - {} ({}s)", track.artist, track.title, track.duration_secs);
    }

    log::info!("playlists: {:?}", manager.playlist_names());

    manager.shutdown();
    Ok(())
}
