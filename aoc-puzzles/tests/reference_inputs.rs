//! Every solver against the bundled `inputs/` data set

use aoc_kit::{BingoOutcome, DynSolver, PuzzleKind, RegistryBuilder, SolverRegistry, SolverResult};
use aoc_puzzles::{Bingo, Calibration, ExpenseReport, Navigation, PasswordPolicySolver};
use std::path::PathBuf;

fn read_input(kind: PuzzleKind) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../inputs")
        .join(kind.input_file_name());
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_solver::<Calibration>(PuzzleKind::Calibration, &[])
        .unwrap()
        .register_solver::<Navigation>(PuzzleKind::Navigation, &[])
        .unwrap()
        .register_solver::<ExpenseReport>(PuzzleKind::ExpenseReport, &[])
        .unwrap()
        .register_solver::<PasswordPolicySolver>(PuzzleKind::PasswordValidation, &[])
        .unwrap()
        .register_solver::<Bingo>(PuzzleKind::Bingo, &[])
        .unwrap()
        .build()
}

fn answers(solver: &mut dyn DynSolver) -> Vec<String> {
    (1..=solver.parts())
        .map(|part| solver.solve(part).unwrap().value)
        .collect()
}

#[test]
fn test_reference_answers() {
    let registry = registry();
    let expected: [(PuzzleKind, &[&str]); 5] = [
        (PuzzleKind::Calibration, &["153"]),
        (PuzzleKind::Navigation, &["640"]),
        (PuzzleKind::ExpenseReport, &["514579", "241861950"]),
        (PuzzleKind::PasswordValidation, &["25", "2"]),
        (PuzzleKind::Bingo, &["4512"]),
    ];

    for (kind, want) in expected {
        let input = read_input(kind);
        let mut solver = registry.create_solver(kind, &input).unwrap();
        assert_eq!(answers(&mut *solver), want, "{kind}");
    }
}

#[test]
fn test_reference_reports() {
    let registry = registry();

    let input = read_input(PuzzleKind::Calibration);
    let mut solver = registry.create_solver(PuzzleKind::Calibration, &input).unwrap();
    let SolverResult::Calibration(report) = solver.summarize().unwrap().value else {
        panic!("wrong result variant");
    };
    assert_eq!(report.lines_processed(), 5);

    let input = read_input(PuzzleKind::PasswordValidation);
    let mut solver = registry
        .create_solver(PuzzleKind::PasswordValidation, &input)
        .unwrap();
    let SolverResult::PasswordValidation(report) = solver.summarize().unwrap().value else {
        panic!("wrong result variant");
    };
    assert_eq!(report.total(), 26);

    let input = read_input(PuzzleKind::Bingo);
    let mut solver = registry.create_solver(PuzzleKind::Bingo, &input).unwrap();
    let SolverResult::Bingo(report) = solver.summarize().unwrap().value else {
        panic!("wrong result variant");
    };
    let BingoOutcome::Won(win) = report.outcome else {
        panic!("reference game has a winner");
    };
    assert_eq!((win.board, win.number, win.turn), (2, 24, 11));
    assert_eq!(win.unmarked_sum, 188);
}

#[test]
fn test_parsing_twice_gives_same_answers() {
    let registry = registry();
    for kind in PuzzleKind::ALL {
        let input = read_input(kind);
        let first = answers(&mut *registry.create_solver(kind, &input).unwrap());
        let second = answers(&mut *registry.create_solver(kind, &input).unwrap());
        assert_eq!(first, second, "{kind}");
    }
}
