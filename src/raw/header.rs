//! The fixed-size header at the start of every puzzle file.

use core::ops::Range;

use thiserror::Error;
use zerocopy::{FromBytes, byteorder::little_endian::U16};

use super::cursor::ByteCursor;

/// Length of the header in bytes; the solution grid begins here.
pub const HEADER_LEN: usize = 0x34;

/// Offset of the whole-file checksum.
pub const CHECKSUM: Range<usize> = 0x00..0x02;
/// Offset of the CIB checksum.
pub const CIB_CHECKSUM: Range<usize> = 0x0E..0x10;
/// Offset of the four low bytes of the masked checksums.
pub const MASKED_LOW: Range<usize> = 0x10..0x14;
/// Offset of the four high bytes of the masked checksums.
pub const MASKED_HIGH: Range<usize> = 0x14..0x18;
/// The control information block: width, height, clue count, puzzle type
/// and scrambled tag.
pub const CIB: Range<usize> = 0x2C..0x34;

/// Magic string identifying the format.
const MAGIC: &[u8; 12] = b"ACROSS&DOWN\0";

/// An error decoding a header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Not enough bytes for a header.
    #[error("File is too short for a header ({len} bytes).")]
    Truncated { len: usize },
    /// A grid with no cells.
    #[error("Grid has no cells ({width}x{height}).")]
    EmptyGrid { width: u8, height: u8 },
}

/// A decoded file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Stored whole-file checksum.
    pub checksum: u16,
    /// Stored CIB checksum.
    pub cib_checksum: u16,
    /// Stored masked checksums, low bytes then high bytes.
    pub masked: [u8; 8],
    /// Format version, as a null-padded string such as `1.3`.
    pub version: [u8; 4],
    /// Grid width in cells.
    pub width: u8,
    /// Grid height in cells.
    pub height: u8,
    /// Number of clues declared in the file.
    pub clue_count: u16,
    /// Puzzle type bitmask (1 for a normal puzzle).
    pub puzzle_type: u16,
    /// Non-zero when the solution is scrambled.
    pub scrambled_tag: u16,
}

impl Header {
    /// Decode a header from the start of a cursor.
    pub fn decode(r: &mut ByteCursor<'_>) -> Result<Self, HeaderError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FileHeader {
            checksum: U16,
            magic: [u8; 12],
            cib_checksum: U16,
            masked_low: [u8; 4],
            masked_high: [u8; 4],
            version: [u8; 4],
            _reserved_1c: [u8; 2],
            _scrambled_checksum: U16,
            _reserved_20: [u8; 12],
            width: u8,
            height: u8,
            clue_count: U16,
            puzzle_type: U16,
            scrambled_tag: U16,
        }

        let len = r.remaining();
        let bytes: [u8; HEADER_LEN] = r.read_array().ok_or(HeaderError::Truncated { len })?;

        let FileHeader {
            checksum,
            magic,
            cib_checksum,
            masked_low,
            masked_high,
            version,
            width,
            height,
            clue_count,
            puzzle_type,
            scrambled_tag,
            ..
        } = zerocopy::transmute!(bytes);

        if &magic != MAGIC {
            log::warn!("Unexpected file magic {magic:02x?}.");
        }

        if width == 0 || height == 0 {
            Err(HeaderError::EmptyGrid { width, height })?;
        }

        let mut masked = [0; 8];
        masked[..4].copy_from_slice(&masked_low);
        masked[4..].copy_from_slice(&masked_high);

        Ok(Self {
            checksum: checksum.get(),
            cib_checksum: cib_checksum.get(),
            masked,
            version,
            width,
            height,
            clue_count: clue_count.get(),
            puzzle_type: puzzle_type.get(),
            scrambled_tag: scrambled_tag.get(),
        })
    }

    /// Number of cells in the grid.
    pub fn grid_len(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// The format version, with null padding removed.
    pub fn version(&self) -> &str {
        let end = self.version.iter().position(|&b| b == 0).unwrap_or(4);
        core::str::from_utf8(&self.version[..end]).unwrap_or("")
    }

    /// Whether the solution grid is scrambled.
    pub fn is_scrambled(&self) -> bool {
        self.scrambled_tag != 0
    }
}
