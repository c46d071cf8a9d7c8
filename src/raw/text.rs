//! ISO-8859-1 text, the encoding used for every string in a puzzle file.
//!
//! Each byte maps to the code point of the same value, so conversion in both
//! directions is lossless for strings produced by [`decode`].

use alloc::{string::String, vec::Vec};

/// Decode Latin-1 bytes into a string.
pub fn decode(r: &[u8]) -> String {
    r.iter().map(|&b| char::from(b)).collect()
}

/// Encode a string back into Latin-1 bytes.
///
/// Characters outside Latin-1 cannot originate from a puzzle file; they are
/// replaced with `?`.
pub fn encode(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(|c| u8::try_from(c).unwrap_or(b'?'))
}

/// Encode a string into Latin-1 bytes, followed by a null terminator.
pub(crate) fn encode_terminated(s: &str) -> Vec<u8> {
    encode(s).chain([0]).collect()
}
