//! Record-level encoding and decoding

use super::fields::{escape_field, split_fields};
use crate::model::Track;

/// Header line naming the seven columns, written first in every file
pub const HEADER: &str = "title;artist;album;file_path;cover_path;lrc_path;duration";

/// Encode a track record as one text line (without trailing newline)
///
/// Absent optional fields are written as empty strings, not omitted.
pub fn encode_track(track: &Track) -> String {
    format!(
        "{};{};{};{};{};{};{}",
        escape_field(&track.title),
        escape_field(&track.artist),
        escape_field(&track.album),
        escape_field(&track.file_path),
        escape_field(&track.cover_path),
        escape_field(&track.lrc_path),
        track.duration_secs
    )
}

/// Decode one text line into a track record
///
/// Short rows are padded with empty fields, a malformed duration decodes
/// to 0, and a row without a non-empty `file_path` decodes to `None`.
pub fn decode_track(line: &str) -> Option<Track> {
    let mut fields = split_fields(line);
    fields.resize(7, String::new());

    let duration_secs = fields[6].trim().parse().unwrap_or(0);
    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();

    let track = Track {
        title: next(),
        artist: next(),
        album: next(),
        file_path: next(),
        cover_path: next(),
        lrc_path: next(),
        duration_secs,
    };

    if track.file_path.is_empty() {
        return None;
    }
    Some(track)
}
