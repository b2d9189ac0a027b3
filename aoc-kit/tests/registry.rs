//! Registry behaviour with hand-registered solvers

use aoc_kit::{
    AocParser, AocSolver, CalibrationReport, ParseError, PartSolver, PuzzleKind,
    RegistrationError, RegistryBuilder, SolveError, SolverError, SolverResult, Summarize,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Numbers;

impl AocParser for Numbers {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(idx, l)| {
                l.trim()
                    .parse()
                    .map_err(|_| ParseError::malformed(idx + 1, "bad int"))
            })
            .collect()
    }
}

impl PartSolver<1> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u32>().to_string())
    }
}

impl PartSolver<2> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::NoSolution("empty list".into()))
    }
}

impl Summarize for Numbers {
    fn summarize(shared: &mut Self::SharedData<'_>) -> Result<SolverResult, SolveError> {
        Ok(CalibrationReport {
            values: shared.clone(),
            total: shared.iter().sum(),
        }
        .into())
    }
}

fn registry() -> aoc_kit::SolverRegistry {
    RegistryBuilder::new()
        .register_solver::<Numbers>(PuzzleKind::Calibration, &["sum"])
        .unwrap()
        .build()
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = RegistryBuilder::new()
        .register_solver::<Numbers>(PuzzleKind::Calibration, &[])
        .unwrap()
        .register_solver::<Numbers>(PuzzleKind::Calibration, &[]);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(PuzzleKind::Calibration))
    ));
}

#[test]
fn test_same_solver_under_two_kinds() {
    let registry = RegistryBuilder::new()
        .register_solver::<Numbers>(PuzzleKind::Calibration, &[])
        .unwrap()
        .register_solver::<Numbers>(PuzzleKind::Navigation, &[])
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    let kinds: Vec<_> = registry.iter_info().map(|info| info.kind).collect();
    assert_eq!(kinds, vec![PuzzleKind::Calibration, PuzzleKind::Navigation]);
}

#[test]
fn test_unregistered_kind() {
    let registry = registry();
    assert!(!registry.contains(PuzzleKind::Bingo));
    assert!(matches!(
        registry.create_solver(PuzzleKind::Bingo, "1"),
        Err(SolverError::NotRegistered(PuzzleKind::Bingo))
    ));
}

#[test]
fn test_parse_failure_surfaces_as_solver_error() {
    let registry = registry();
    let err = registry
        .create_solver(PuzzleKind::Calibration, "1\nnope\n3")
        .err()
        .expect("parse should fail");
    assert!(matches!(
        err,
        SolverError::ParseError(ParseError::MalformedRecord { line: 2, .. })
    ));
}

#[test]
fn test_instance_metadata_and_timing() {
    let registry = registry();
    let mut solver = registry
        .create_solver(PuzzleKind::Calibration, "4\n5")
        .unwrap();

    assert_eq!(solver.kind(), PuzzleKind::Calibration);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_end() >= solver.parse_start());

    let answer = solver.solve(2).unwrap();
    assert_eq!(answer.value, "5");
    assert!(answer.duration() >= chrono::TimeDelta::zero());

    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Summaries do not depend on which parts were solved first
    #[test]
    fn prop_summary_independent_of_part_order(
        numbers in prop::collection::vec(0u32..1000, 0..20),
        solve_first in prop::bool::ANY,
    ) {
        let input = numbers.iter().map(u32::to_string).collect::<Vec<_>>().join("\n");
        let registry = registry();

        let mut fresh = registry.create_solver(PuzzleKind::Calibration, &input).unwrap();
        let mut used = registry.create_solver(PuzzleKind::Calibration, &input).unwrap();
        if solve_first {
            let _ = used.solve(1);
            let _ = used.solve(2);
        }

        prop_assert_eq!(fresh.summarize().unwrap().value, used.summarize().unwrap().value);
    }
}
