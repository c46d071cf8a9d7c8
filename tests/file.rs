#![cfg(feature = "std")]

use std::{io::ErrorKind, path::PathBuf};

use crosshatch::{
    Format, Puz,
    format::{
        ValidationError,
        file::{Error, PuzzleFile, format_for},
    },
};

/// Copy a fixture to a scratch path unique to a test.
fn scratch(fixture: &str, name: &str) -> PathBuf {
    let _ = env_logger::builder().is_test(true).try_init();

    let path = std::env::temp_dir().join(format!(
        "crosshatch-{}-{name}.puz",
        std::process::id()
    ));
    std::fs::copy(fixture, &path).unwrap();
    path
}

#[test]
fn open_and_save() {
    let path = scratch("fixtures/garden.puz", "open_and_save");
    let original = std::fs::read(&path).unwrap();

    let mut file = PuzzleFile::open(&path).unwrap();
    assert_eq!(file.puzzle().title(), "Garden Party");

    assert!(file.puzzle_mut().set_input(0, 2, "t"));
    file.save().unwrap();

    let saved = std::fs::read(&path).unwrap();
    assert_ne!(saved, original);
    assert_eq!(saved.len(), original.len());

    let reopened = PuzzleFile::open(&path).unwrap();
    assert_eq!(reopened.puzzle().cell_at(0, 2).unwrap().input(), b'T');

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn repeated_saves_stay_valid() {
    let path = scratch("fixtures/garden.puz", "repeated_saves");

    let mut file = PuzzleFile::open(&path).unwrap();
    for (x, letter) in [(0, "t"), (1, "o"), (2, "t")] {
        file.puzzle_mut().set_input(x, 2, letter);
        file.save().unwrap();

        // The document now describes the saved file.
        Puz::default().validate(file.puzzle()).unwrap();
    }

    let puzzle = PuzzleFile::open(&path).unwrap().into_puzzle();
    assert_eq!(&puzzle.input_bytes()[10..13], b"TOT");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn restore_after_edit() {
    let path = scratch("fixtures/tiny.puz", "restore_after_edit");
    let original = std::fs::read(&path).unwrap();

    let mut file = PuzzleFile::open(&path).unwrap();
    file.puzzle_mut().set_input(1, 0, "z");
    file.save().unwrap();
    file.puzzle_mut().clear_input(1, 0);
    file.save().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), original);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn corrupted_file_is_rejected() {
    let path = scratch("fixtures/garden.puz", "corrupted");

    let mut r = std::fs::read(&path).unwrap();
    r[0x34 + 25] = b'Q';
    std::fs::write(&path, &r).unwrap();

    assert!(matches!(
        PuzzleFile::open(&path),
        Err(Error::Validation(ValidationError::Checksum { .. }))
    ));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn unsupported_extension() {
    assert!(matches!(
        PuzzleFile::open("puzzle.ipuz"),
        Err(Error::UnsupportedExtension(Some(e))) if e == "ipuz"
    ));
    assert!(matches!(
        format_for("puzzle"),
        Err(Error::UnsupportedExtension(None))
    ));
    assert!(format_for("PUZZLE.PUZ").is_ok());
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("crosshatch-does-not-exist.puz");
    let err = PuzzleFile::open(path).err().unwrap();
    assert!(matches!(err, Error::Io(e) if e.kind() == ErrorKind::NotFound));
}

#[test]
fn open_with_explicit_format() {
    let path = std::env::temp_dir().join(format!(
        "crosshatch-{}-explicit.bin",
        std::process::id()
    ));
    std::fs::copy("fixtures/island.puz", &path).unwrap();

    let format: Box<dyn Format> = Box::new(Puz::new().with_masked_checksums(true));
    let file = PuzzleFile::open_with(&path, format).unwrap();
    assert_eq!(file.path(), path);
    assert_eq!(file.puzzle().title(), "Island");

    std::fs::remove_file(&path).unwrap();
}
