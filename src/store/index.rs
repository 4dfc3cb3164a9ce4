//! Persisted name-to-token index
//!
//! Two distinct playlist names can sanitize to the same filesystem token;
//! the catalog disambiguates tokens with a numeric suffix, and this index
//! records which display name each token belongs to so names survive a
//! reload instead of degrading to their sanitized stems.

use crate::codec::{escape_field, split_fields};
use crate::model::Playlist;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Render the index as one `name;token` row per playlist
pub fn encode_index(playlists: &[Playlist]) -> String {
    let mut out = String::new();
    for playlist in playlists {
        out.push_str(&escape_name(playlist.name()));
        out.push(';');
        out.push_str(&escape_field(playlist.token()));
        out.push('\n');
    }
    out
}

/// Escape a display name for an index row
///
/// Names keep surrounding whitespace, which the field parser would trim
/// from an unquoted field, so such names are quoted unconditionally.
fn escape_name(name: &str) -> Cow<'_, str> {
    if name.trim() == name {
        return escape_field(name);
    }
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for c in name.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    Cow::Owned(out)
}

/// Read the index file into a token-to-name map
///
/// A missing file is not an error: files dropped into the data directory
/// by hand simply keep their filename stem as display name.
pub fn read_index(path: &Path) -> Result<HashMap<String, String>> {
    if !path.is_file() {
        return Ok(HashMap::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read playlist index {:?}", path))?;

    let mut names_by_token = HashMap::new();
    for line in contents.lines() {
        let fields = split_fields(line);
        if fields.len() < 2 || fields[0].is_empty() || fields[1].is_empty() {
            log::debug!("skipping malformed index row: {line:?}");
            continue;
        }
        let mut fields = fields.into_iter();
        let name = fields.next().unwrap_or_default();
        let token = fields.next().unwrap_or_default();
        names_by_token.insert(token, name);
    }

    Ok(names_by_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_index_roundtrip() {
        let playlists = vec![
            Playlist::new("My Mix", "My_Mix"),
            Playlist::new("My*Mix", "My_Mix-2"),
            Playlist::new(" padded ", "padded"),
        ];
        let encoded = encode_index(&playlists);

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("playlists.idx");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(encoded.as_bytes()).unwrap();

        let names = read_index(&path).unwrap();
        assert_eq!(names.get("My_Mix").map(String::as_str), Some("My Mix"));
        assert_eq!(names.get("My_Mix-2").map(String::as_str), Some("My*Mix"));
        assert_eq!(names.get("padded").map(String::as_str), Some(" padded "));
    }

    #[test]
    fn test_missing_index_is_empty() {
        let tmp = TempDir::new().unwrap();
        let names = read_index(&tmp.path().join("playlists.idx")).unwrap();
        assert!(names.is_empty());
    }
}
