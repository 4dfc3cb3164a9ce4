//! Field-level escaping and splitting

use super::DELIMITER;
use std::borrow::Cow;

/// Escape one field for output
///
/// A field containing the delimiter, a double quote or a newline is
/// wrapped in double quotes with every embedded quote doubled; anything
/// else is written literally.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if !field.contains([DELIMITER, '"', '\n', '\r']) {
        return Cow::Borrowed(field);
    }

    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    Cow::Owned(out)
}

/// Split one line into its fields
///
/// Leading spaces and tabs are skipped for every field. An unquoted field
/// runs to the next delimiter and loses trailing spaces and tabs. A field
/// starting with `"` runs to the unescaped closing quote (`""` decodes to
/// a literal quote); whatever follows a closing quote up to the next
/// delimiter is discarded.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    while chars.peek().is_some() {
        while matches!(chars.peek(), Some(' ' | '\t')) {
            chars.next();
        }

        let mut field = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            while let Some(c) = chars.next() {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        break;
                    }
                } else {
                    field.push(c);
                }
            }
            // Discard anything between the closing quote and the delimiter
            for c in chars.by_ref() {
                if c == DELIMITER {
                    break;
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c == DELIMITER {
                    break;
                }
                field.push(c);
                chars.next();
            }
            if chars.peek() == Some(&DELIMITER) {
                chars.next();
            }
            field.truncate(field.trim_end_matches([' ', '\t']).len());
        }

        fields.push(field);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_untouched() {
        assert_eq!(escape_field("Blue Train"), "Blue Train");
        assert!(matches!(escape_field("Blue Train"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_delimiter_forces_quoting() {
        assert_eq!(escape_field("a;b"), "\"a;b\"");
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_newline_forces_quoting() {
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
        assert_eq!(escape_field("line1\rline2"), "\"line1\rline2\"");
    }

    #[test]
    fn test_split_simple() {
        assert_eq!(split_fields("a;b;c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_interior_empties() {
        assert_eq!(split_fields("a;;c"), vec!["a", "", "c"]);
        assert_eq!(split_fields(";b;c"), vec!["", "b", "c"]);
    }

    #[test]
    fn test_split_trims_unquoted() {
        assert_eq!(split_fields("  a  ;\tb\t;c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_quoted_with_delimiters() {
        assert_eq!(
            split_fields("\"a;b\";c"),
            vec!["a;b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_split_quoted_escaped_quotes() {
        assert_eq!(split_fields("\"say \"\"hi\"\"\";x"), vec!["say \"hi\"", "x"]);
    }

    #[test]
    fn test_split_quoted_preserves_surrounding_spaces() {
        assert_eq!(split_fields("\" a \";b"), vec![" a ", "b"]);
    }

    #[test]
    fn test_junk_after_closing_quote_discarded() {
        assert_eq!(split_fields("\"a\"junk;b"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_line_has_no_fields() {
        assert!(split_fields("").is_empty());
    }
}
