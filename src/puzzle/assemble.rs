//! Clue numbering and cell membership.
//!
//! The grid is scanned once in row-major order. A non-blank cell starts an
//! across answer when the cell to its left is blank or off the grid and the
//! cell to its right is not, and likewise a down answer looking up and down.
//! Each start takes the next clue from the file, in file order, and shares the
//! running clue number with any other answer starting at the same cell.

use alloc::{string::String, vec, vec::Vec};

use super::{
    cell::{BLANK, CellState},
    clue::{Clue, ClueId, Direction},
};

/// The grid did not have exactly one answer per declared clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClueCountMismatch {
    pub(crate) declared: usize,
    pub(crate) found: usize,
}

/// Grid structure produced by [`assemble`].
#[derive(Debug)]
pub(crate) struct Assembly {
    pub(crate) cells: Vec<CellState>,
    pub(crate) clues: Vec<Clue>,
    pub(crate) across: Vec<ClueId>,
    pub(crate) down: Vec<ClueId>,
}

struct Grid<'a> {
    width: usize,
    height: usize,
    solution: &'a [u8],
}

impl Grid<'_> {
    /// Whether a position is off the grid or blank.
    fn is_blank(&self, x: Option<usize>, y: Option<usize>) -> bool {
        match (x, y) {
            (Some(x), Some(y)) if x < self.width && y < self.height => {
                self.solution[y * self.width + x] == BLANK
            }
            _ => true,
        }
    }

    fn starts(&self, x: usize, y: usize, direction: Direction) -> bool {
        let (before, after) = match direction {
            Direction::Across => ((x.checked_sub(1), Some(y)), (Some(x + 1), Some(y))),
            Direction::Down => ((Some(x), y.checked_sub(1)), (Some(x), Some(y + 1))),
        };

        !self.is_blank(Some(x), Some(y))
            && self.is_blank(before.0, before.1)
            && !self.is_blank(after.0, after.1)
    }

    /// Length of the run of non-blank cells from a position.
    fn run(&self, x: usize, y: usize, direction: Direction) -> usize {
        (0..)
            .take_while(|&i| match direction {
                Direction::Across => !self.is_blank(Some(x + i), Some(y)),
                Direction::Down => !self.is_blank(Some(x), Some(y + i)),
            })
            .count()
    }
}

/// Number the answers of a grid and assign them clue texts, in file order.
///
/// `solution` holds one byte per cell in row-major order and must be
/// `width * height` bytes long.
pub(crate) fn assemble(
    width: usize,
    height: usize,
    solution: &[u8],
    texts: Vec<String>,
) -> Result<Assembly, ClueCountMismatch> {
    debug_assert_eq!(solution.len(), width * height);

    let grid = Grid {
        width,
        height,
        solution,
    };

    let declared = texts.len();
    let mut pool = texts.into_iter();

    let mut cells = vec![CellState::default(); width * height];
    let mut clues = Vec::with_capacity(declared);
    let mut across = Vec::new();
    let mut down = Vec::new();

    let mut number: u16 = 1;
    let mut found = 0;

    for y in 0..height {
        for x in 0..width {
            let mut started = false;

            for direction in [Direction::Across, Direction::Down] {
                if !grid.starts(x, y, direction) {
                    continue;
                }

                started = true;
                found += 1;

                // Keep counting starts past an exhausted pool to report the total.
                let Some(text) = pool.next() else {
                    continue;
                };

                let id = ClueId(clues.len());
                let clue = Clue {
                    text,
                    number,
                    direction,
                    anchor: y * width + x,
                    len: grid.run(x, y, direction),
                    stride: match direction {
                        Direction::Across => 1,
                        Direction::Down => width,
                    },
                };

                for i in clue.cells() {
                    let state = &mut cells[i];
                    match direction {
                        Direction::Across => state.across = Some(id),
                        Direction::Down => state.down = Some(id),
                    }
                }

                match direction {
                    Direction::Across => across.push(id),
                    Direction::Down => down.push(id),
                }
                clues.push(clue);
            }

            if started {
                number += 1;
            }
        }
    }

    if found != declared {
        Err(ClueCountMismatch { declared, found })?;
    }

    log::trace!(
        "Assembled {} across and {} down answers.",
        across.len(),
        down.len()
    );

    Ok(Assembly {
        cells,
        clues,
        across,
        down,
    })
}
