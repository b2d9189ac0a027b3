//! The closed set of puzzles the framework knows about

use crate::error::UnknownPuzzleError;
use std::fmt;
use std::str::FromStr;

/// One of the five challenge puzzles
///
/// Used as the registry key. The set is closed: every solver, result and
/// input document belongs to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PuzzleKind {
    /// Digit-pair calibration values
    Calibration,
    /// Submarine command accumulation
    Navigation,
    /// Pair/triple subset-sum search
    ExpenseReport,
    /// Occurrence and position password policies
    PasswordValidation,
    /// First winning bingo board
    Bingo,
}

impl PuzzleKind {
    /// Number of kinds, used for flat storage
    pub const COUNT: usize = 5;

    /// All kinds in their canonical order
    pub const ALL: [PuzzleKind; Self::COUNT] = [
        PuzzleKind::Calibration,
        PuzzleKind::Navigation,
        PuzzleKind::ExpenseReport,
        PuzzleKind::PasswordValidation,
        PuzzleKind::Bingo,
    ];

    /// Dense index in `0..COUNT`
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable command-line name
    pub const fn slug(self) -> &'static str {
        match self {
            PuzzleKind::Calibration => "calibration",
            PuzzleKind::Navigation => "navigation",
            PuzzleKind::ExpenseReport => "expense-report",
            PuzzleKind::PasswordValidation => "password-validation",
            PuzzleKind::Bingo => "bingo",
        }
    }

    /// Human readable title
    pub const fn title(self) -> &'static str {
        match self {
            PuzzleKind::Calibration => "Trebuchet Calibration",
            PuzzleKind::Navigation => "Submarine Navigation",
            PuzzleKind::ExpenseReport => "Expense Report",
            PuzzleKind::PasswordValidation => "Password Validation",
            PuzzleKind::Bingo => "Giant Squid Bingo",
        }
    }

    /// File name of the input document inside an input directory
    pub const fn input_file_name(self) -> &'static str {
        match self {
            PuzzleKind::Calibration => "day1_calibration.txt",
            PuzzleKind::Navigation => "day2_navigation.txt",
            PuzzleKind::ExpenseReport => "day1_expenses.txt",
            PuzzleKind::PasswordValidation => "day2_passwords.txt",
            PuzzleKind::Bingo => "day4_bingo.txt",
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PuzzleKind {
    type Err = UnknownPuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PuzzleKind::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPuzzleError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position_in_all() {
        for (i, kind) in PuzzleKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_slug_parses_back() {
        for kind in PuzzleKind::ALL {
            assert_eq!(kind.to_string().parse::<PuzzleKind>(), Ok(kind));
        }
        assert_eq!("  BINGO ".parse::<PuzzleKind>(), Ok(PuzzleKind::Bingo));
    }

    #[test]
    fn test_unknown_slug_rejected() {
        let err = "day3".parse::<PuzzleKind>().unwrap_err();
        assert_eq!(err, UnknownPuzzleError("day3".to_string()));
    }
}
