//! The Across Lite binary format.

use alloc::{string::String, vec::Vec};
use core::fmt;

use thiserror::Error;

use crate::{
    puzzle::{ClueCountMismatch, Parts, Puzzle, Source},
    raw::{
        check::{checksum_bytes, checksum_region},
        cursor::ByteCursor,
        extension::{self, GEXT, Markup},
        header::{
            CHECKSUM, CIB, CIB_CHECKSUM, HEADER_LEN, Header, HeaderError, MASKED_HIGH, MASKED_LOW,
        },
        text,
    },
};

use super::Format;

/// Mask applied to the masked checksums, low bytes then high bytes.
const MASK: &[u8; 8] = b"ICHEATED";

/// One of the two grids of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The solution grid.
    Solution,
    /// The player's grid.
    Input,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solution => "solution",
            Self::Input => "input",
        })
    }
}

/// A null-terminated string of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The title.
    Title,
    /// The author.
    Author,
    /// The copyright notice.
    Copyright,
    /// A clue, by its position in the file.
    Clue(usize),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Author => f.write_str("author"),
            Self::Copyright => f.write_str("copyright"),
            Self::Clue(i) => write!(f, "clue {i}"),
        }
    }
}

/// Errors occurring while decoding a file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Incorrect file header.
    #[error("Incorrect file header: {0}")]
    Header(#[from] HeaderError),
    /// A grid is shorter than the declared dimensions.
    #[error("Missing {region} grid: expected {expected} bytes, found {found}.")]
    TruncatedGrid {
        region: Region,
        expected: usize,
        found: usize,
    },
    /// A string runs to the end of the file.
    #[error("Missing null terminator in {0}.")]
    MissingTerminator(Field),
    /// The grid has a different number of answers than declared clues.
    #[error("Declared {declared} clues, but the grid has {found} answers.")]
    ClueCountMismatch { declared: usize, found: usize },
}

impl From<ClueCountMismatch> for DecodeError {
    fn from(err: ClueCountMismatch) -> Self {
        let ClueCountMismatch { declared, found } = err;
        Self::ClueCountMismatch { declared, found }
    }
}

/// Errors occurring while validating a file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Calculated and found CIB checksums do not match.
    #[error("Calculated ({calculated:#06x}) and found ({found:#06x}) CIB checksums do not match.")]
    Cib { found: u16, calculated: u16 },
    /// Calculated and found file checksums do not match.
    #[error("Calculated ({calculated:#06x}) and found ({found:#06x}) file checksums do not match.")]
    Checksum { found: u16, calculated: u16 },
    /// Calculated and found masked checksums do not match.
    #[error("Calculated ({calculated:02x?}) and found ({found:02x?}) masked checksums do not match.")]
    MaskedChecksum { found: [u8; 8], calculated: [u8; 8] },
}

/// Codec for `.puz` files.
///
/// By default, only the CIB and whole-file checksums are validated and
/// rewritten. Enable [`with_masked_checksums`](Self::with_masked_checksums) to
/// include the masked checksums as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct Puz {
    masked_checksums: bool,
}

impl Puz {
    /// A codec with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and rewrite the masked checksums at 0x10..0x18.
    pub fn with_masked_checksums(mut self, enabled: bool) -> Self {
        self.masked_checksums = enabled;
        self
    }
}

impl Format for Puz {
    fn decode(&self, r: &[u8]) -> Result<Puzzle, DecodeError> {
        let c = &mut ByteCursor::new(r);

        let header = Header::decode(c)?;
        let size = header.grid_len();

        let solution = take_grid(c, size, Region::Solution)?;
        let input = take_grid(c, size, Region::Input)?;

        let title = take_string(c, Field::Title)?;
        let author = take_string(c, Field::Author)?;
        let copyright = take_string(c, Field::Copyright)?;

        let clues = (0..usize::from(header.clue_count))
            .map(|i| take_string(c, Field::Clue(i)))
            .collect::<Result<Vec<_>, _>>()?;

        // Notes are optional; without a terminator the cursor stays put.
        let notes = c
            .read_cstring()
            .map(|(s, _)| text::decode(s))
            .unwrap_or_default();

        let extensions = extension::decode_all(c);

        let circled: Vec<usize> = extensions
            .iter()
            .filter(|e| e.tag == GEXT)
            .flat_map(|e| {
                if e.data.len() < size {
                    log::warn!(
                        "GEXT section covers {} of {size} cells.",
                        e.data.len()
                    );
                }
                e.data.iter().take(size).enumerate()
            })
            .filter(|&(_, &b)| Markup::from(b).circled)
            .map(|(i, _)| i)
            .collect();

        let source = Source {
            raw: r.to_vec(),
            solution: HEADER_LEN..HEADER_LEN + size,
            input: HEADER_LEN + size..HEADER_LEN + 2 * size,
            header: header.clone(),
        };

        let mut puzzle = Puzzle::assemble(Parts {
            width: usize::from(header.width),
            height: usize::from(header.height),
            solution,
            input,
            title,
            author,
            copyright,
            notes,
            clues,
            extensions,
            source,
        })?;

        for i in circled {
            puzzle.cells[i].is_circled = true;
        }

        log::debug!("Decoded {puzzle} (version {}).", header.version());

        Ok(puzzle)
    }

    fn validate(&self, puzzle: &Puzzle) -> Result<(), ValidationError> {
        let Source {
            header,
            raw,
            solution,
            input,
        } = &puzzle.source;

        let calculated = checksum_region(&raw[CIB], 0);
        if calculated != header.cib_checksum {
            Err(ValidationError::Cib {
                found: header.cib_checksum,
                calculated,
            })?;
        }

        let (solution, input) = (&raw[solution.clone()], &raw[input.clone()]);

        let cib = calculated;
        let calculated = file_checksum(cib, solution, input, puzzle);
        if calculated != header.checksum {
            Err(ValidationError::Checksum {
                found: header.checksum,
                calculated,
            })?;
        }

        if self.masked_checksums {
            let calculated = masked_checksums(cib, solution, input, puzzle);
            if calculated != header.masked {
                Err(ValidationError::MaskedChecksum {
                    found: header.masked,
                    calculated,
                })?;
            }
        }

        Ok(())
    }

    fn encode(&self, puzzle: &Puzzle) -> Vec<u8> {
        let Source { raw, input, .. } = &puzzle.source;

        // Everything not rewritten here, including unrecognised sections,
        // passes through unchanged.
        let mut w = raw.clone();
        w[input.clone()].copy_from_slice(&puzzle.input);

        let cib = checksum_region(&w[CIB], 0);
        let checksum = file_checksum(cib, &puzzle.solution, &puzzle.input, puzzle);

        w[CIB_CHECKSUM].copy_from_slice(&cib.to_le_bytes());
        w[CHECKSUM].copy_from_slice(&checksum.to_le_bytes());

        if self.masked_checksums {
            let masked = masked_checksums(cib, &puzzle.solution, &puzzle.input, puzzle);
            w[MASKED_LOW].copy_from_slice(&masked[..4]);
            w[MASKED_HIGH].copy_from_slice(&masked[4..]);
        }

        w
    }
}

/// Take a whole grid from a cursor.
fn take_grid(c: &mut ByteCursor<'_>, size: usize, region: Region) -> Result<Vec<u8>, DecodeError> {
    let r = c.read_n(size);

    if r.len() != size {
        Err(DecodeError::TruncatedGrid {
            region,
            expected: size,
            found: r.len(),
        })?;
    }

    Ok(r.to_vec())
}

/// Take a null-terminated string from a cursor.
fn take_string(c: &mut ByteCursor<'_>, field: Field) -> Result<String, DecodeError> {
    let (r, _) = c
        .read_cstring()
        .ok_or(DecodeError::MissingTerminator(field))?;

    Ok(text::decode(r))
}

/// Checksum of the strings of a document, in file order.
///
/// Empty title, author, copyright and notes are skipped; the others include
/// their terminator. Clues never include a terminator.
fn text_checksum(puzzle: &Puzzle, seed: u16) -> u16 {
    let mut c = seed;

    for s in [puzzle.title(), puzzle.author(), puzzle.copyright()] {
        if !s.is_empty() {
            c = checksum_region(&text::encode_terminated(s), c);
        }
    }

    for clue in puzzle.clues() {
        c = checksum_bytes(text::encode(clue.text()), c);
    }

    if !puzzle.notes().is_empty() {
        c = checksum_region(&text::encode_terminated(puzzle.notes()), c);
    }

    c
}

/// The whole-file checksum, seeded with the CIB checksum.
fn file_checksum(cib: u16, solution: &[u8], input: &[u8], puzzle: &Puzzle) -> u16 {
    let c = checksum_region(solution, cib);
    let c = checksum_region(input, c);
    text_checksum(puzzle, c)
}

/// The eight masked checksum bytes, low bytes then high bytes.
fn masked_checksums(cib: u16, solution: &[u8], input: &[u8], puzzle: &Puzzle) -> [u8; 8] {
    let sums = [
        cib,
        checksum_region(solution, 0),
        checksum_region(input, 0),
        text_checksum(puzzle, 0),
    ];

    let mut masked = [0; 8];
    for (i, sum) in sums.into_iter().enumerate() {
        let [low, high] = sum.to_le_bytes();
        masked[i] = MASK[i] ^ low;
        masked[i + 4] = MASK[i + 4] ^ high;
    }

    masked
}
