//! Input files for each puzzle, read from one directory

use crate::error::InputError;
use aoc_kit::PuzzleKind;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/{file name}` where the file name is
/// [`PuzzleKind::input_file_name`], e.g. `inputs/day4_bingo.txt`.
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the input path for a puzzle
    pub fn input_path(&self, kind: PuzzleKind) -> PathBuf {
        self.dir.join(kind.input_file_name())
    }

    /// Check if the input file exists
    pub fn contains(&self, kind: PuzzleKind) -> bool {
        self.input_path(kind).is_file()
    }

    /// Read the whole input document for a puzzle
    pub fn read(&self, kind: PuzzleKind) -> Result<String, InputError> {
        let path = self.input_path(kind);
        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(puzzle = %kind, path = %path.display(), bytes = content.len(), "read input");
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing(path)),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(
            store.input_path(PuzzleKind::Bingo),
            PathBuf::from("inputs/day4_bingo.txt")
        );
        assert_eq!(
            store.input_path(PuzzleKind::ExpenseReport),
            PathBuf::from("inputs/day1_expenses.txt")
        );
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(PuzzleKind::Navigation));

        let input = "forward 5\ndown 5\n";
        fs::write(store.input_path(PuzzleKind::Navigation), input).unwrap();

        assert!(store.contains(PuzzleKind::Navigation));
        assert_eq!(store.read(PuzzleKind::Navigation).unwrap(), input);
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let err = store.read(PuzzleKind::Calibration).unwrap_err();
        let InputError::Missing(path) = err else {
            panic!("expected missing input, got {err:?}");
        };
        assert!(path.ends_with("day1_calibration.txt"));
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir(store.input_path(PuzzleKind::Bingo)).unwrap();

        assert!(!store.contains(PuzzleKind::Bingo));
        assert!(matches!(
            store.read(PuzzleKind::Bingo),
            Err(InputError::Io { .. })
        ));
    }
}
