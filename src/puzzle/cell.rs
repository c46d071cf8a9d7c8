//! Grid positions and their state.

use core::fmt;

use super::{
    Puzzle,
    clue::{Clue, ClueId, Direction},
};

/// Solution byte marking a blank cell.
pub const BLANK: u8 = b'.';
/// Input byte marking an empty cell.
pub const EMPTY: u8 = b'-';

/// Per-cell state other than the solution and input letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CellState {
    pub(crate) across: Option<ClueId>,
    pub(crate) down: Option<ClueId>,
    pub(crate) is_selected: bool,
    pub(crate) show_checked: bool,
    pub(crate) is_circled: bool,
}

/// A read-only view of one grid position.
#[derive(Clone, Copy)]
pub struct Cell<'a> {
    pub(crate) puzzle: &'a Puzzle,
    pub(crate) index: usize,
}

impl<'a> Cell<'a> {
    fn state(&self) -> &'a CellState {
        &self.puzzle.cells[self.index]
    }

    /// Row-major index of the cell.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Column and row of the cell.
    pub fn position(&self) -> (usize, usize) {
        (self.index % self.puzzle.width, self.index / self.puzzle.width)
    }

    /// The correct letter, or `None` for a blank cell.
    pub fn solution(&self) -> Option<u8> {
        Some(self.puzzle.solution[self.index]).filter(|&b| b != BLANK)
    }

    /// The player's entry, [`EMPTY`] if nothing has been entered.
    pub fn input(&self) -> u8 {
        self.puzzle.input[self.index]
    }

    /// Whether the cell is blank (not part of any answer).
    pub fn is_blank(&self) -> bool {
        self.solution().is_none()
    }

    /// Whether the player has not entered a letter.
    pub fn is_empty(&self) -> bool {
        self.input() == EMPTY
    }

    /// Whether the player's entry matches the solution.
    pub fn is_correct(&self) -> bool {
        self.solution() == Some(self.input())
    }

    /// The number printed in this cell, if it anchors an answer.
    pub fn number(&self) -> Option<u16> {
        [self.state().across, self.state().down]
            .into_iter()
            .flatten()
            .map(|id| self.puzzle.clue(id))
            .find(|clue| clue.anchor == self.index)
            .map(Clue::number)
    }

    /// Handle to the answer covering this cell in a direction.
    pub fn clue_id(&self, direction: Direction) -> Option<ClueId> {
        match direction {
            Direction::Across => self.state().across,
            Direction::Down => self.state().down,
        }
    }

    /// The answer covering this cell in a direction.
    pub fn clue(&self, direction: Direction) -> Option<&'a Clue> {
        let puzzle = self.puzzle;
        self.clue_id(direction).map(|id| puzzle.clue(id))
    }

    /// The across answer covering this cell.
    pub fn across_clue(&self) -> Option<&'a Clue> {
        self.clue(Direction::Across)
    }

    /// The down answer covering this cell.
    pub fn down_clue(&self) -> Option<&'a Clue> {
        self.clue(Direction::Down)
    }

    /// Whether the cell holds the selection.
    pub fn is_selected(&self) -> bool {
        self.state().is_selected
    }

    /// Whether the entry should be displayed as checked.
    pub fn show_checked(&self) -> bool {
        self.state().show_checked
    }

    /// Whether the cell is drawn with a circle.
    pub fn is_circled(&self) -> bool {
        self.state().is_circled
    }
}

impl fmt::Debug for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("position", &self.position())
            .field("solution", &self.solution().map(char::from))
            .field("input", &char::from(self.input()))
            .field("state", self.state())
            .finish()
    }
}

impl<'b> PartialEq<Cell<'b>> for Cell<'_> {
    fn eq(&self, other: &Cell<'b>) -> bool {
        self.solution() == other.solution()
            && self.input() == other.input()
            && self.state() == other.state()
    }
}

/// A mutable view of one grid position.
pub struct CellMut<'a> {
    pub(crate) puzzle: &'a mut Puzzle,
    pub(crate) index: usize,
}

impl CellMut<'_> {
    /// Read-only view of the same cell.
    pub fn as_cell(&self) -> Cell<'_> {
        Cell {
            puzzle: &*self.puzzle,
            index: self.index,
        }
    }

    fn state(&mut self) -> &mut CellState {
        &mut self.puzzle.cells[self.index]
    }

    /// Enter a letter, upper-cased.
    ///
    /// Does nothing and returns `false` unless `letter` is exactly one ASCII
    /// letter and the cell is not blank.
    pub fn set_input(&mut self, letter: &str) -> bool {
        let mut chars = letter.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };

        if !c.is_ascii_alphabetic() || self.as_cell().is_blank() {
            return false;
        }

        // Alphabetic ASCII always fits in a byte.
        self.puzzle.input[self.index] = c.to_ascii_uppercase() as u8;
        true
    }

    /// Remove the player's entry. Does nothing for a blank cell.
    pub fn clear_input(&mut self) {
        if !self.as_cell().is_blank() {
            self.puzzle.input[self.index] = EMPTY;
        }
    }

    /// Replace the player's entry with the solution. Does nothing for a blank
    /// cell.
    pub fn reveal(&mut self) {
        if let Some(b) = self.as_cell().solution() {
            self.puzzle.input[self.index] = b;
        }
    }

    /// Mark the entry as checked. Does nothing for a blank cell.
    pub fn set_show_checked(&mut self, show_checked: bool) {
        if !self.as_cell().is_blank() {
            self.state().show_checked = show_checked;
        }
    }

    /// Set whether the cell is drawn with a circle.
    pub fn set_circled(&mut self, is_circled: bool) {
        self.state().is_circled = is_circled;
    }
}
