//! Opening and saving puzzle files.
//!
//! _Requires Cargo feature `std`._

use std::{
    boxed::Box,
    io,
    path::{Path, PathBuf},
    string::{String, ToString},
};

use thiserror::Error;

use crate::puzzle::Puzzle;

use super::{DecodeError, Format, Puz, ValidationError};

extern crate std;

/// Errors occurring while opening or saving a file.
#[derive(Debug, Error)]
pub enum Error {
    /// An error reading or writing the file.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// No format is known for the file extension.
    #[error("No format for file extension {0:?}.")]
    UnsupportedExtension(Option<String>),
    /// The file could not be decoded.
    #[error("Malformed file: {0}")]
    Decode(#[from] DecodeError),
    /// The file failed validation.
    #[error("Invalid file: {0}")]
    Validation(#[from] ValidationError),
}

/// Select a format by file extension.
pub fn format_for(path: impl AsRef<Path>) -> Result<Box<dyn Format>, Error> {
    let extension = path.as_ref().extension().and_then(|e| e.to_str());

    match extension {
        Some(e) if e.eq_ignore_ascii_case("puz") => Ok(Box::new(Puz::default())),
        _ => Err(Error::UnsupportedExtension(extension.map(ToString::to_string))),
    }
}

/// A document together with the file it was read from.
pub struct PuzzleFile {
    path: PathBuf,
    format: Box<dyn Format>,
    puzzle: Puzzle,
}

impl PuzzleFile {
    /// Read, decode and validate a file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let format = format_for(&path)?;
        Self::open_with(path, format)
    }

    /// Read, decode and validate a file with a given format, regardless of its
    /// extension.
    pub fn open_with(path: impl Into<PathBuf>, format: Box<dyn Format>) -> Result<Self, Error> {
        let path = path.into();

        let r = std::fs::read(&path)?;
        let puzzle = format.decode(&r)?;
        format.validate(&puzzle)?;

        log::info!("Opened {puzzle} from {}.", path.display());

        Ok(Self {
            path,
            format,
            puzzle,
        })
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The document, for editing.
    pub fn puzzle_mut(&mut self) -> &mut Puzzle {
        &mut self.puzzle
    }

    /// Encode the document and overwrite the file.
    pub fn save(&mut self) -> Result<(), Error> {
        let w = self.format.encode(&self.puzzle);
        std::fs::write(&self.path, &w)?;

        log::debug!("Saved {} bytes to {}.", w.len(), self.path.display());

        self.puzzle.replace_source(w);
        Ok(())
    }

    /// Release the document.
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }
}
