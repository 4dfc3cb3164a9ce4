//! Delimited text codec for playlist files
//!
//! One text line per track record, seven `;`-separated fields in fixed
//! order, preceded by a header line naming the columns. Fields containing
//! the delimiter, a double quote or a newline are quoted with embedded
//! quotes doubled; decoding is the exact inverse of encoding.

mod fields;
mod record;

pub use fields::{escape_field, split_fields};
pub use record::{decode_track, encode_track, HEADER};

/// Field separator used by the playlist files
pub const DELIMITER: char = ';';
