//! Playlist name sanitization
//!
//! Turns a user-supplied playlist name into a token safe to use as a
//! filename stem. Uniqueness across playlists is not this function's
//! concern; the catalog disambiguates colliding tokens.

/// Sanitize a playlist name into a filesystem token
///
/// Trims surrounding whitespace, keeps alphanumerics plus `.`, `-` and
/// `_`, and replaces every other character with `_`. Returns `None` when
/// nothing usable remains.
pub fn sanitize(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }

    let token: String = trimmed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(sanitize("Road-Trip_2024.v1"), Some("Road-Trip_2024.v1".to_string()));
    }

    #[test]
    fn test_spaces_and_specials_replaced() {
        assert_eq!(sanitize("My Mix"), Some("My_Mix".to_string()));
        assert_eq!(sanitize("a/b\\c:d"), Some("a_b_c_d".to_string()));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(sanitize("  mix\t"), Some("mix".to_string()));
    }

    #[test]
    fn test_non_ascii_replaced() {
        // One replacement per character, not per byte
        assert_eq!(sanitize("日本語"), Some("___".to_string()));
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("   "), None);
    }
}
