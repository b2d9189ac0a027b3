//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ExecutorError, RunError};
use crate::inputs::InputStore;
use aoc_kit::{DynSolver, PuzzleKind, SolveError, SolverRegistry, SolverResult};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Answer for one part of a puzzle
#[derive(Debug)]
pub struct PartAnswer {
    pub part: u8,
    pub answer: Result<String, SolveError>,
    pub solve_duration: TimeDelta,
}

/// Everything produced from one successfully parsed document
#[derive(Debug)]
pub struct SolvedPuzzle {
    pub parse_duration: TimeDelta,
    pub parts: Vec<PartAnswer>,
    pub report: Result<SolverResult, SolveError>,
    pub report_duration: TimeDelta,
}

/// Result of running one puzzle end to end
#[derive(Debug)]
pub struct PuzzleRun {
    pub kind: PuzzleKind,
    pub outcome: Result<SolvedPuzzle, RunError>,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub kind: PuzzleKind,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    thread_pool: rayon::ThreadPool,
    parallelize_by: ParallelizeBy,
    puzzle_filter: Vec<PuzzleKind>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            thread_pool,
            parallelize_by: config.parallelize_by,
            puzzle_filter: config.puzzles.clone(),
            part_filter: config.part_filter,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata, in kind order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.puzzle_filter.is_empty() || self.puzzle_filter.contains(&info.kind))
            .map(|info| WorkItem {
                kind: info.kind,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Run every work item; results come back in work-item order
    pub fn execute(&self) -> Vec<PuzzleRun> {
        let work_items = self.collect_work_items();

        match self.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .map(|work| run_puzzle(work, &self.registry, &self.inputs))
                .collect(),
            ParallelizeBy::Puzzle => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .map(|work| run_puzzle(work, &self.registry, &self.inputs))
                    .collect()
            }),
        }
    }
}

/// Read, parse and solve one puzzle
///
/// A missing input or a parse failure is fatal for this puzzle only.
fn run_puzzle(work: &WorkItem, registry: &SolverRegistry, inputs: &InputStore) -> PuzzleRun {
    let outcome = inputs
        .read(work.kind)
        .map_err(RunError::from)
        .and_then(|input| solve_document(work, registry, &input));

    match &outcome {
        Ok(_) => tracing::info!(puzzle = %work.kind, "puzzle finished"),
        Err(e) => tracing::warn!(puzzle = %work.kind, error = %e, "puzzle failed"),
    }
    PuzzleRun {
        kind: work.kind,
        outcome,
    }
}

fn solve_document(
    work: &WorkItem,
    registry: &SolverRegistry,
    input: &str,
) -> Result<SolvedPuzzle, RunError> {
    let mut solver = registry.create_solver(work.kind, input)?;

    let parts = work
        .parts
        .clone()
        .map(|part| solve_part(&mut *solver, part))
        .collect();

    let (report, report_duration) = match solver.summarize() {
        Ok(timed) => {
            let duration = timed.duration();
            (Ok(timed.value), duration)
        }
        Err(e) => (Err(e), TimeDelta::zero()),
    };

    Ok(SolvedPuzzle {
        parse_duration: solver.parse_duration(),
        parts,
        report,
        report_duration,
    })
}

fn solve_part(solver: &mut dyn DynSolver, part: u8) -> PartAnswer {
    match solver.solve(part) {
        Ok(timed) => PartAnswer {
            part,
            solve_duration: timed.duration(),
            answer: Ok(timed.value),
        },
        Err(e) => PartAnswer {
            part,
            answer: Err(e),
            solve_duration: TimeDelta::zero(),
        },
    }
}
