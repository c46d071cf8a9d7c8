//! Helper for computing the rolling checksums stored in puzzle files.

/// Accumulate a region of bytes into a checksum value, starting from `seed`.
///
/// Chain calls by passing the result of one region as the seed of the next.
pub fn checksum_region(r: &[u8], seed: u16) -> u16 {
    checksum_bytes(r.iter().copied(), seed)
}

/// Accumulate a sequence of bytes into a checksum value.
pub(crate) fn checksum_bytes(r: impl IntoIterator<Item = u8>, seed: u16) -> u16 {
    r.into_iter().fold(seed, checksum_byte)
}

/// Accumulate a single byte into a checksum value.
fn checksum_byte(acc: u16, b: u8) -> u16 {
    acc.rotate_right(1).wrapping_add(u16::from(b))
}
