//! Numbered answers and their placement in the grid.

use alloc::string::String;
use core::{
    fmt,
    iter::StepBy,
    ops::Range,
};

use either::Either::{self, Left, Right};

/// Orientation of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// The other direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Across => "across",
            Self::Down => "down",
        })
    }
}

/// Handle to a clue, by its position in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClueId(pub(crate) usize);

impl ClueId {
    /// Position of the clue among all clues in the file.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A numbered answer.
///
/// A clue covers a contiguous run of at least one cell, beginning at its
/// anchor cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub(crate) text: String,
    pub(crate) number: u16,
    pub(crate) direction: Direction,
    pub(crate) anchor: usize,
    pub(crate) len: usize,
    pub(crate) stride: usize,
}

impl Clue {
    /// The clue text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The number printed in the anchor cell.
    pub fn number(&self) -> u16 {
        self.number
    }

    /// Orientation of the answer.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Index of the first cell of the answer.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Number of cells in the answer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the answer has no cells, which a decoded clue never does.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of the cells of the answer, in reading order.
    pub fn cells(&self) -> Either<Range<usize>, StepBy<Range<usize>>> {
        let end = self.anchor + self.len * self.stride;
        match self.direction {
            Direction::Across => Left(self.anchor..end),
            Direction::Down => Right((self.anchor..end).step_by(self.stride)),
        }
    }

    /// Whether the answer covers a cell.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.anchor
            && (index - self.anchor) % self.stride == 0
            && (index - self.anchor) / self.stride < self.len
    }
}
