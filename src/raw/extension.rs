//! Tagged sections following the puzzle strings.
//!
//! Each section is a four byte ASCII tag, a little-endian data length, a
//! checksum of the data, the data itself, and a single pad byte. Only `GEXT`
//! (per-cell markup) is interpreted; all sections are retained verbatim.

use alloc::vec::Vec;
use core::fmt;

use tartan_bitfield::bitfield;

use super::cursor::ByteCursor;

/// Tag of the per-cell markup section.
pub const GEXT: [u8; 4] = *b"GEXT";

/// A tagged section.
#[derive(Clone, PartialEq, Eq)]
pub struct Extension {
    /// Section tag, such as `GEXT` or `LTIM`.
    pub tag: [u8; 4],
    /// Stored checksum of the data (not verified).
    pub checksum: u16,
    /// Section data, excluding the pad byte.
    pub data: Vec<u8>,
}

impl Extension {
    /// The section tag as text, if it is ASCII.
    pub fn name(&self) -> Option<&str> {
        core::str::from_utf8(&self.tag)
            .ok()
            .filter(|s| s.is_ascii())
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension")
            .field("tag", &self.name().unwrap_or("????"))
            .field("checksum", &self.checksum)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Read sections until the buffer is exhausted.
///
/// A section cut short ends the scan; whatever was decoded before it is
/// returned.
pub fn decode_all(r: &mut ByteCursor<'_>) -> Vec<Extension> {
    let mut sections = Vec::new();

    while r.remaining() > 0 {
        let start = r.position();

        let (Some(tag), Some(len), Some(checksum)) =
            (r.read_array(), r.read_array(), r.read_array())
        else {
            log::warn!("Truncated extension header at offset {start:#x}.");
            break;
        };

        let len = usize::from(u16::from_le_bytes(len));
        let data = r.read_n(len);

        let section = Extension {
            tag,
            checksum: u16::from_le_bytes(checksum),
            data: data.to_vec(),
        };

        if data.len() < len {
            log::warn!(
                "Truncated {:?} section: expected {len} bytes, found {}.",
                section,
                data.len()
            );
            break;
        }

        log::debug!("Found {section:?} at offset {start:#x}.");
        sections.push(section);

        // Pad byte; a missing one at the very end of the file is tolerated.
        r.read_one();
    }

    sections
}

/// Markup flags for a single cell, as stored in a `GEXT` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markup {
    /// The cell was marked incorrect at some point.
    pub previously_incorrect: bool,
    /// The cell is currently marked incorrect.
    pub incorrect: bool,
    /// The solution was revealed for this cell.
    pub revealed: bool,
    /// The cell is drawn with a circle.
    pub circled: bool,
}

impl From<u8> for Markup {
    fn from(r: u8) -> Self {
        bitfield! {
            struct GextByte(u8) {
                [4] previously_incorrect,
                [5] incorrect,
                [6] revealed,
                [7] circled,
            }
        }

        let byte = GextByte(r);

        Self {
            previously_incorrect: byte.previously_incorrect(),
            incorrect: byte.incorrect(),
            revealed: byte.revealed(),
            circled: byte.circled(),
        }
    }
}
