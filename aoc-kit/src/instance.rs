//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::puzzle::PuzzleKind;
use crate::report::SolverResult;
use crate::solver::{Solver, SolverExt, Summarize};
use chrono::{DateTime, TimeDelta, Utc};

/// A value together with the wall-clock span it took to produce
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    /// When work started (UTC)
    pub start: DateTime<Utc>,
    /// When work completed (UTC)
    pub end: DateTime<Utc>,
}

impl<T> Timed<T> {
    /// Run `f` and record its start and end time
    pub fn measure<E>(f: impl FnOnce() -> Result<T, E>) -> Result<Self, E> {
        let start = Utc::now();
        let value = f()?;
        let end = Utc::now();
        Ok(Self { value, start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// A solver instance bound to one parsed document
///
/// Holds the shared data and the parse timing. Created fresh for every
/// document and dropped once the caller is done with it.
pub struct SolverInstance<'a, S: Solver> {
    kind: PuzzleKind,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Create a new solver instance by parsing input
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Parsed document with timing
    /// * `Err(ParseError)` - Parsing failed; nothing was partially processed
    pub fn new(kind: PuzzleKind, input: &'a str) -> Result<Self, ParseError> {
        let parsed = Timed::measure(|| S::parse(input))?;
        tracing::debug!(puzzle = %kind, elapsed = ?parsed.duration(), "parsed input");

        Ok(Self {
            kind,
            shared: parsed.value,
            parse_start: parsed.start,
            parse_end: parsed.end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_kit::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let answer = solver.solve(1)?;
///     println!("Part 1: {} (took {:?})", answer.value, answer.duration());
///
///     let report = solver.summarize()?;
///     println!("{:?}", report.value);
///
///     println!("Parse took {:?}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    fn solve(&mut self, part: u8) -> Result<Timed<String>, SolveError>;

    /// Build the structured result for the whole document with timing
    fn summarize(&mut self) -> Result<Timed<SolverResult>, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the puzzle this solver handles
    fn kind(&self) -> PuzzleKind;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt + Summarize> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<Timed<String>, SolveError> {
        Timed::measure(|| S::solve_part_checked_range(&mut self.shared, part))
    }

    fn summarize(&mut self) -> Result<Timed<SolverResult>, SolveError> {
        let report = Timed::measure(|| S::summarize(&mut self.shared))?;
        debug_assert_eq!(report.value.kind(), self.kind);
        Ok(report)
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn kind(&self) -> PuzzleKind {
        self.kind
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
