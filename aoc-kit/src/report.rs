//! Structured results, one variant per puzzle kind

use crate::puzzle::PuzzleKind;

/// Side length of a bingo board
pub const GRID_SIZE: usize = 5;

/// Outcome of exactly one solver invocation
///
/// Each variant carries only the fields its puzzle produces. Rendering is
/// left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult {
    Calibration(CalibrationReport),
    Navigation(NavigationReport),
    ExpenseReport(ExpenseReport),
    PasswordValidation(PasswordReport),
    Bingo(BingoReport),
}

impl SolverResult {
    /// The puzzle this result belongs to
    pub fn kind(&self) -> PuzzleKind {
        match self {
            SolverResult::Calibration(_) => PuzzleKind::Calibration,
            SolverResult::Navigation(_) => PuzzleKind::Navigation,
            SolverResult::ExpenseReport(_) => PuzzleKind::ExpenseReport,
            SolverResult::PasswordValidation(_) => PuzzleKind::PasswordValidation,
            SolverResult::Bingo(_) => PuzzleKind::Bingo,
        }
    }
}

/// Per-line calibration values in file order and their sum
///
/// Lines without any digit are absent from `values`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalibrationReport {
    pub values: Vec<u32>,
    pub total: u32,
}

impl CalibrationReport {
    pub fn lines_processed(&self) -> usize {
        self.values.len()
    }
}

/// Final submarine position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationReport {
    /// Number of commands read, including ignored ones
    pub commands: usize,
    pub horizontal: i64,
    pub depth: i64,
    /// `horizontal * depth`, wider than either factor
    pub product: i128,
}

/// Entries that add up to the target, in enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination<const N: usize> {
    pub values: [i32; N],
    /// Widened so three 32-bit entries never overflow
    pub product: i128,
}

impl<const N: usize> Combination<N> {
    pub fn new(values: [i32; N]) -> Self {
        Self {
            values,
            product: values.iter().map(|&v| i128::from(v)).product(),
        }
    }

    /// Never overflows for `N` up to 3
    pub fn sum(&self) -> i64 {
        self.values.iter().map(|&v| i64::from(v)).sum()
    }
}

/// Pair and triple search results over one expense list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseReport {
    /// Count of entries searched
    pub entries: usize,
    pub target: i64,
    /// `None` when no pair reaches the target
    pub pair: Option<Combination<2>>,
    /// `None` when no triple reaches the target
    pub triple: Option<Combination<3>>,
}

/// Both policy verdicts for one password record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    pub password: String,
    pub character: char,
    pub low: usize,
    pub high: usize,
    /// How often `character` occurs in `password`
    pub occurrences: usize,
    pub occurrence_ok: bool,
    pub position_ok: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordReport {
    pub records: Vec<PasswordCheck>,
    pub occurrence_valid: usize,
    pub position_valid: usize,
}

impl PasswordReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }
}

/// A board cell as seen at the end of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkedCell {
    pub value: u32,
    pub marked: bool,
}

pub type MarkedGrid = [[MarkedCell; GRID_SIZE]; GRID_SIZE];

/// Snapshot taken the moment the first board completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoWin {
    /// 0-based index of the winning board
    pub board: usize,
    /// The drawn number that completed the board
    pub number: u32,
    /// 0-based index of that number in the draw sequence
    pub turn: usize,
    pub unmarked_sum: u64,
    /// `unmarked_sum * number`
    pub score: u128,
    pub grid: MarkedGrid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BingoOutcome {
    Won(BingoWin),
    /// Every number was drawn and no board completed
    NoWinner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoReport {
    /// Length of the draw sequence
    pub draws: usize,
    /// Number of boards in play
    pub boards: usize,
    pub outcome: BingoOutcome,
}

impl BingoReport {
    pub fn winner(&self) -> Option<&BingoWin> {
        match &self.outcome {
            BingoOutcome::Won(win) => Some(win),
            BingoOutcome::NoWinner => None,
        }
    }
}

macro_rules! impl_from_report {
    ($($report:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$report> for SolverResult {
                fn from(report: $report) -> Self {
                    SolverResult::$variant(report)
                }
            }
        )*
    };
}

impl_from_report! {
    CalibrationReport => Calibration,
    NavigationReport => Navigation,
    ExpenseReport => ExpenseReport,
    PasswordReport => PasswordValidation,
    BingoReport => Bingo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_product_and_sum() {
        let pair = Combination::new([1721, 299]);
        assert_eq!(pair.product, 514579);
        assert_eq!(pair.sum(), 2020);
    }

    #[test]
    fn test_combination_extremes_are_widened() {
        let triple = Combination::new([i32::MIN, i32::MIN, i32::MIN]);
        assert_eq!(triple.sum(), 3 * i64::from(i32::MIN));
        assert_eq!(triple.product, i128::from(i32::MIN).pow(3));
    }

    #[test]
    fn test_result_kind_follows_variant() {
        let result: SolverResult = NavigationReport::default().into();
        assert_eq!(result.kind(), PuzzleKind::Navigation);

        let result: SolverResult = BingoReport {
            draws: 0,
            boards: 0,
            outcome: BingoOutcome::NoWinner,
        }
        .into();
        assert_eq!(result.kind(), PuzzleKind::Bingo);
    }
}
