#![no_std]

//! A byte-exact reader and writer for Across Lite crossword puzzle files.
//!
//! Crosshatch decodes a `.puz` file into a [`Puzzle`] of numbered across and
//! down answers, lets an application edit the player's grid in place, and
//! writes the edits back into a copy of the original file. Every byte other
//! than the player's grid and the checksums is preserved, including extension
//! sections this crate does not interpret.
//!
//! Most users should begin with [`format::file::PuzzleFile`], or with the
//! [`Format`] implementation [`Puz`] when the bytes come from elsewhere. The
//! [`raw`] module exposes the underlying cursor, checksum and section parsing
//! for finer control.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable file-based opening and saving (default).

extern crate alloc;

pub mod format;
pub mod puzzle;
pub mod raw;

pub use format::{Format, Puz};
pub use puzzle::{Cell, CellMut, Clue, ClueId, Direction, Puzzle};
