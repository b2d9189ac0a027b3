//! Advent of Code style challenge framework
//!
//! A type-safe framework for solving small text-input puzzles. Each puzzle is
//! implemented as a solver with its own input parsing, one or more numbered
//! part answers, and a structured [`SolverResult`] for the whole document.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers
//! - The closed set of puzzles ([`PuzzleKind`]) and their results ([`SolverResult`])
//! - Type-safe parsing with record-level error reporting
//! - A registry keyed by puzzle kind, filled by hand or through plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_kit::{
//!     AocParser, AocSolver, CalibrationReport, ParseError, PartSolver, PuzzleKind,
//!     RegistryBuilder, SolveError, SolverResult, Summarize,
//! };
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! pub struct Digits;
//!
//! impl AocParser for Digits {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(line.into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Digits {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! impl Summarize for Digits {
//!     fn summarize(shared: &mut Self::SharedData<'_>) -> Result<SolverResult, SolveError> {
//!         let total = shared.iter().sum();
//!         Ok(CalibrationReport { values: shared.clone(), total }.into())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Digits>(PuzzleKind::Calibration, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(PuzzleKind::Calibration, "12\n38").unwrap();
//! assert_eq!(solver.solve(1).unwrap().value, "50");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] turns a document into `SharedData`.
//! - [`PartSolver<N>`] answers part `N`; `#[derive(AocSolver)]` wires the parts
//!   into [`Solver::solve_part`].
//! - [`Summarize`] builds the full [`SolverResult`].
//! - [`DynSolver`] erases the concrete type so the registry can hand out any solver.
//! - `#[derive(AutoRegisterSolver)]` with `#[aoc(kind = ..., tags = [...])]`
//!   submits a [`SolverPlugin`] picked up by [`RegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod puzzle;
mod registry;
mod report;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError, UnknownPuzzleError};
pub use instance::{DynSolver, SolverInstance, Timed};
pub use puzzle::PuzzleKind;
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use report::{
    BingoOutcome, BingoReport, BingoWin, CalibrationReport, Combination, ExpenseReport,
    GRID_SIZE, MarkedCell, MarkedGrid, NavigationReport, PasswordCheck, PasswordReport,
    SolverResult,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt, Summarize};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_kit_macros::{AocSolver, AutoRegisterSolver};
