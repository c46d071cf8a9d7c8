//! Byte-level machinery underlying the puzzle codec.
//!
//! This module is intended for applications that need to inspect a puzzle
//! file below the level of [`crate::puzzle::Puzzle`], such as tools that
//! report on unrecognised extension sections or verify checksums of regions
//! by hand. See [`crate::format`] for decoding and encoding whole documents.
//!
//! # Layout
//!
//! A puzzle file consists of:
//!
//! - A fixed [`header`] of [`header::HEADER_LEN`] bytes, holding checksums,
//! the grid dimensions and the number of clues.
//!
//! - The solution grid, then the player's grid, each one byte per cell in
//! row-major order. A `.` in the solution marks a blank cell, and a `-` in the
//! player's grid marks an empty one.
//!
//! - Null-terminated Latin-1 strings (see [`text`]): title, author,
//! copyright, one per clue, then notes.
//!
//! - Zero or more tagged [`extension`] sections.
//!
//! Reading is done through a forgiving [`cursor`]; checksums over any region
//! are available from [`check`].

pub mod check;
pub mod cursor;
pub mod extension;
pub mod header;
pub mod text;
