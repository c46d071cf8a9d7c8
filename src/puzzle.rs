//! The in-memory puzzle document.
//!
//! A [`Puzzle`] owns its cells and clues in flat arrays; cells refer to clues
//! by [`ClueId`], and clues compute their cells from an anchor, a length and a
//! direction. The player's letters live in a single byte array, which is also
//! what the codec writes back to the file, so an edit is visible to the next
//! encode without any synchronisation.
//!
//! Documents are created by a [`Format`](crate::format::Format) and mutated in
//! place. Their structure (dimensions, blank cells, numbering) never changes
//! after decoding.

use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Range};

use crate::raw::{extension::Extension, header::Header};

mod assemble;
pub mod cell;
pub mod clue;

pub(crate) use assemble::ClueCountMismatch;
pub use cell::{Cell, CellMut};
pub use clue::{Clue, ClueId, Direction};

use cell::CellState;

/// The file a document was decoded from, kept to re-encode it.
#[derive(Debug, Clone)]
pub(crate) struct Source {
    pub(crate) header: Header,
    pub(crate) raw: Vec<u8>,
    pub(crate) solution: Range<usize>,
    pub(crate) input: Range<usize>,
}

/// Decoded pieces of a document, before clue assignment.
#[derive(Debug)]
pub(crate) struct Parts {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) solution: Vec<u8>,
    pub(crate) input: Vec<u8>,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) copyright: String,
    pub(crate) notes: String,
    pub(crate) clues: Vec<String>,
    pub(crate) extensions: Vec<Extension>,
    pub(crate) source: Source,
}

/// A crossword puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) solution: Vec<u8>,
    pub(crate) input: Vec<u8>,
    pub(crate) cells: Vec<CellState>,
    clues: Vec<Clue>,
    across: Vec<ClueId>,
    down: Vec<ClueId>,
    title: String,
    author: String,
    copyright: String,
    notes: String,
    extensions: Vec<Extension>,
    pub(crate) source: Source,
}

impl Puzzle {
    /// Build a document, numbering its answers and assigning clue texts.
    pub(crate) fn assemble(parts: Parts) -> Result<Self, ClueCountMismatch> {
        let Parts {
            width,
            height,
            solution,
            input,
            title,
            author,
            copyright,
            notes,
            clues,
            extensions,
            source,
        } = parts;

        let assembly = assemble::assemble(width, height, &solution, clues)?;

        Ok(Self {
            width,
            height,
            solution,
            input,
            cells: assembly.cells,
            clues: assembly.clues,
            across: assembly.across,
            down: assembly.down,
            title,
            author,
            copyright,
            notes,
            extensions,
            source,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Puzzle title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Puzzle author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Copyright notice.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Free-form notes, empty if the file has none.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Header of the file the document was decoded from.
    pub fn header(&self) -> &Header {
        &self.source.header
    }

    /// Tagged sections of the file, in file order.
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// The solution grid, one byte per cell in row-major order.
    pub fn solution_bytes(&self) -> &[u8] {
        &self.solution
    }

    /// The player's grid, one byte per cell in row-major order.
    pub fn input_bytes(&self) -> &[u8] {
        &self.input
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// The cell at a column and row, or `None` outside the grid.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<Cell<'_>> {
        self.index(x, y).map(|index| Cell {
            puzzle: self,
            index,
        })
    }

    /// A mutable view of the cell at a column and row, or `None` outside the
    /// grid.
    pub fn cell_at_mut(&mut self, x: usize, y: usize) -> Option<CellMut<'_>> {
        self.index(x, y).map(|index| CellMut {
            puzzle: self,
            index,
        })
    }

    /// All cells, in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell<'_>> {
        (0..self.cells.len()).map(move |index| Cell {
            puzzle: self,
            index,
        })
    }

    /// Enter a letter at a column and row.
    ///
    /// Does nothing and returns `false` if the position is outside the grid or
    /// blank, or if `letter` is not exactly one ASCII letter.
    pub fn set_input(&mut self, x: usize, y: usize, letter: &str) -> bool {
        self.cell_at_mut(x, y)
            .is_some_and(|mut cell| cell.set_input(letter))
    }

    /// Remove the player's entry at a column and row.
    pub fn clear_input(&mut self, x: usize, y: usize) {
        if let Some(mut cell) = self.cell_at_mut(x, y) {
            cell.clear_input();
        }
    }

    /// A clue by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle belongs to a different document.
    pub fn clue(&self, id: ClueId) -> &Clue {
        &self.clues[id.0]
    }

    /// All clues, in file order.
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Across clues, in numbering order.
    pub fn across_clues(&self) -> impl ExactSizeIterator<Item = &Clue> {
        self.across.iter().map(move |&id| self.clue(id))
    }

    /// Down clues, in numbering order.
    pub fn down_clues(&self) -> impl ExactSizeIterator<Item = &Clue> {
        self.down.iter().map(move |&id| self.clue(id))
    }

    /// Handles of the clues in a direction, in numbering order.
    pub fn clue_ids(&self, direction: Direction) -> &[ClueId] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// The clue with a number and direction.
    pub fn find_clue(&self, number: u16, direction: Direction) -> Option<ClueId> {
        self.clue_ids(direction)
            .iter()
            .copied()
            .find(|&id| self.clue(id).number == number)
    }

    /// The cells of a clue, in reading order.
    pub fn clue_cells(&self, id: ClueId) -> impl Iterator<Item = Cell<'_>> {
        self.clue(id).cells().map(move |index| Cell {
            puzzle: self,
            index,
        })
    }

    /// Move the selection to a column and row.
    ///
    /// Clears any previous selection. Returns `false`, leaving nothing
    /// selected, if the position is outside the grid or blank.
    pub fn select(&mut self, x: usize, y: usize) -> bool {
        self.cells
            .iter_mut()
            .for_each(|state| state.is_selected = false);

        let Some(index) = self.index(x, y) else {
            return false;
        };

        if self.solution[index] == cell::BLANK {
            return false;
        }

        self.cells[index].is_selected = true;
        true
    }

    /// Column and row of the selected cell.
    pub fn selected(&self) -> Option<(usize, usize)> {
        self.cells().find(Cell::is_selected).map(|c| c.position())
    }

    /// Mark the entry at a column and row as checked.
    pub fn check_cell(&mut self, x: usize, y: usize) {
        if let Some(mut cell) = self.cell_at_mut(x, y) {
            cell.set_show_checked(true);
        }
    }

    /// Mark every entry of a clue as checked.
    pub fn check_clue(&mut self, id: ClueId) {
        for index in self.clue(id).cells() {
            self.cells[index].show_checked = true;
        }
    }

    /// Mark every entry in the grid as checked.
    pub fn check_all(&mut self) {
        for (state, &b) in self.cells.iter_mut().zip(&self.solution) {
            if b != cell::BLANK {
                state.show_checked = true;
            }
        }
    }

    /// Fill in the solution of every cell of a clue.
    pub fn reveal_clue(&mut self, id: ClueId) {
        for index in self.clue(id).cells() {
            self.input[index] = self.solution[index];
        }
    }

    /// Whether every non-blank cell holds the correct letter.
    pub fn is_solved(&self) -> bool {
        self.cells().all(|c| c.is_blank() || c.is_correct())
    }

    /// Adopt a newly written file as the source for further encoding.
    ///
    /// The layout of the file must be unchanged.
    #[cfg(feature = "std")]
    pub(crate) fn replace_source(&mut self, raw: Vec<u8>) {
        debug_assert_eq!(raw.len(), self.source.raw.len());

        use crate::raw::cursor::ByteCursor;

        if let Ok(header) = Header::decode(&mut ByteCursor::new(&raw)) {
            self.source.header = header;
        }
        self.source.raw = raw;
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}, {} clues)",
            self.title,
            self.width,
            self.height,
            self.clues.len()
        )
    }
}
