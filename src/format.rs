//! Decoding, validating and encoding puzzle documents.
//!
//! A [`Format`] turns the bytes of a file into a [`Puzzle`], checks that the
//! file is internally consistent, and produces updated bytes once the player's
//! grid has been edited. [`Puz`] implements the Across Lite binary format.
//!
//! ```
//! let mut puzzle = Puz::default().decode(&bytes)?;
//! Puz::default().validate(&puzzle)?;
//!
//! puzzle.set_input(0, 0, "a");
//! let bytes = Puz::default().encode(&puzzle);
//! ```

use alloc::vec::Vec;

use crate::puzzle::Puzzle;

#[cfg(feature = "std")]
pub mod file;
pub mod puz;

pub use puz::{DecodeError, Puz, ValidationError};

/// A file format for puzzle documents.
pub trait Format {
    /// Decode a document from the bytes of a file.
    fn decode(&self, r: &[u8]) -> Result<Puzzle, DecodeError>;

    /// Check the checksums of the file a document was decoded from.
    fn validate(&self, puzzle: &Puzzle) -> Result<(), ValidationError>;

    /// Produce the bytes of a file holding the document's current state.
    fn encode(&self, puzzle: &Puzzle) -> Vec<u8>;
}
