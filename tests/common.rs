use std::path::Path;

use crosshatch::{Direction, Format, Puz, Puzzle};
use csv::ReaderBuilder;

fn decode(path: &str) -> Puzzle {
    let _ = env_logger::builder().is_test(true).try_init();
    let data = std::fs::read(path).unwrap();
    Puz::default().decode(&data).unwrap()
}

#[test]
fn decode_slice_garden() {
    const PATH: &str = "fixtures/garden.puz";
    let puzzle = decode(PATH);
    Validator::new(PATH).validate(&puzzle);
}

#[test]
fn garden_metadata() {
    let puzzle = decode("fixtures/garden.puz");

    assert_eq!((puzzle.width(), puzzle.height()), (5, 5));
    assert_eq!(puzzle.title(), "Garden Party");
    assert_eq!(puzzle.author(), "A. Setter");
    assert_eq!(puzzle.copyright(), "\u{a9} 2026 Crosshatch");
    assert_eq!(puzzle.notes(), "Circled letters spell a hint.");
    assert_eq!(puzzle.header().version(), "1.3");
    assert!(!puzzle.header().is_scrambled());
    assert_eq!(puzzle.to_string(), "Garden Party (5x5, 8 clues)");

    let tags: Vec<_> = puzzle.extensions().iter().map(|e| e.name()).collect();
    assert_eq!(tags, [Some("GEXT"), Some("LTIM")]);
    assert_eq!(puzzle.extensions()[1].data, b"42,1");
}

#[test]
fn garden_numbering() {
    let puzzle = decode("fixtures/garden.puz");

    let across: Vec<_> = puzzle.across_clues().map(|c| c.number()).collect();
    let down: Vec<_> = puzzle.down_clues().map(|c| c.number()).collect();
    assert_eq!(across, [1, 4, 6, 7]);
    assert_eq!(down, [1, 2, 3, 5]);

    let numbers: Vec<_> = puzzle.cells().filter_map(|c| c.number()).collect();
    assert_eq!(numbers, [1, 2, 3, 4, 5, 6, 7]);

    // Every non-blank cell belongs to some answer in this grid.
    for cell in puzzle.cells().filter(|c| !c.is_blank()) {
        assert!(cell.across_clue().is_some() || cell.down_clue().is_some());
    }

    let id = puzzle.find_clue(5, Direction::Down).unwrap();
    let letters: Vec<_> = puzzle
        .clue_cells(id)
        .map(|c| c.solution().unwrap())
        .collect();
    assert_eq!(letters, b"RA");
}

#[test]
fn garden_cell_state() {
    let puzzle = decode("fixtures/garden.puz");

    let blank = puzzle.cell_at(3, 0).unwrap();
    assert!(blank.is_blank());
    assert_eq!(blank.solution(), None);
    assert!(blank.across_clue().is_none() && blank.down_clue().is_none());

    let filled = puzzle.cell_at(1, 0).unwrap();
    assert!(!filled.is_empty());
    assert!(filled.is_correct());

    let empty = puzzle.cell_at(2, 0).unwrap();
    assert!(empty.is_empty());
    assert!(!empty.is_correct());

    let circled: Vec<_> = puzzle
        .cells()
        .filter(|c| c.is_circled())
        .map(|c| c.position())
        .collect();
    assert_eq!(circled, [(0, 0), (2, 2)]);
}

struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn validate(self, puzzle: &Puzzle) {
        assert_eq!(puzzle.clues().len(), self.0.len());

        for (clue, row) in puzzle.clues().iter().zip(self.0) {
            let (x, y) = (clue.anchor() % puzzle.width(), clue.anchor() / puzzle.width());

            assert_eq!(row[0], clue.direction().to_string());
            assert_eq!(row[1], clue.number().to_string());
            assert_eq!(row[2], clue.text());
            assert_eq!(row[3], x.to_string());
            assert_eq!(row[4], y.to_string());
            assert_eq!(row[5], clue.len().to_string());
        }
    }
}
