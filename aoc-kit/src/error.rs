//! Error types for the solver library

use crate::puzzle::PuzzleKind;
use thiserror::Error;

/// Error type for parsing an input document
///
/// Any parse error is fatal for the whole document: solvers never skip a
/// malformed record and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input shape doesn't match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A single record does not follow the record grammar
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based physical line number inside the document
        line: usize,
        reason: String,
    },
}

impl ParseError {
    /// Shorthand for [`ParseError::MalformedRecord`]
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input is valid but holds no answer for this part
    #[error("No solution: {0}")]
    NoSolution(String),
}

impl SolveError {
    /// `true` for the non-fatal "nothing qualifies" outcome
    pub fn is_no_solution(&self) -> bool {
        matches!(self, SolveError::NoSolution(_))
    }
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given puzzle
    #[error("No solver registered for puzzle '{0}'")]
    NotRegistered(PuzzleKind),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a second solver for the same puzzle
    #[error("Duplicate solver registration for puzzle '{0}'")]
    DuplicateSolver(PuzzleKind),
}

/// Returned when a puzzle name does not match any [`PuzzleKind`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown puzzle '{0}' (expected one of: calibration, navigation, expense-report, password-validation, bingo)")]
pub struct UnknownPuzzleError(pub String);
