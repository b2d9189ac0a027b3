//! Output formatting for solver results

use crate::executor::{PuzzleRun, SolvedPuzzle};
use aoc_kit::{
    BingoOutcome, BingoReport, CalibrationReport, ExpenseReport, MarkedCell, NavigationReport,
    PasswordReport, SolveError, SolverResult,
};
use chrono::TimeDelta;
use itertools::Itertools;

/// Password records shown in full before the list is cut short
const PASSWORD_DETAIL_LIMIT: usize = 10;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print one puzzle run
    pub fn print_run(&self, run: &PuzzleRun) {
        if self.quiet {
            self.print_quiet(run);
        } else {
            self.print_full(run);
        }
    }

    /// Print in quiet mode (just the answers)
    fn print_quiet(&self, run: &PuzzleRun) {
        match &run.outcome {
            Ok(solved) => {
                for part in &solved.parts {
                    match &part.answer {
                        Ok(answer) => println!("{}", answer),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing and the rendered report
    fn print_full(&self, run: &PuzzleRun) {
        println!("=== {} ({}) ===", run.kind.title(), run.kind);
        match &run.outcome {
            Ok(solved) => {
                for line in part_lines(solved) {
                    println!("{}", line);
                }
                match &solved.report {
                    Ok(report) => {
                        for line in render_report(report) {
                            println!("  {}", line);
                        }
                    }
                    Err(e) => eprintln!("  Report unavailable: {}", e),
                }
            }
            Err(e) => eprintln!("Error - {}", e),
        }
        println!();
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, runs: &[PuzzleRun]) {
        if self.quiet {
            return;
        }

        let solved: Vec<&SolvedPuzzle> = runs.iter().filter_map(|r| r.outcome.as_ref().ok()).collect();
        let failures = runs.len() - solved.len();
        let answered = solved
            .iter()
            .flat_map(|s| &s.parts)
            .filter(|p| p.answer.is_ok())
            .count();
        let unanswered = solved.iter().map(|s| s.parts.len()).sum::<usize>() - answered;

        let total_parse_time: TimeDelta = solved.iter().map(|s| s.parse_duration).sum();
        let total_solve_time: TimeDelta = solved
            .iter()
            .flat_map(|s| &s.parts)
            .map(|p| p.solve_duration)
            .sum();

        println!("--- Summary ---");
        println!("Puzzles: {} solved, {} failed", solved.len(), failures);
        println!("Parts: {} answered, {} without answer", answered, unanswered);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn part_lines(solved: &SolvedPuzzle) -> Vec<String> {
    let mut lines = vec![format!("Parsed in {}", format_duration(solved.parse_duration))];
    lines.extend(solved.parts.iter().map(|part| match &part.answer {
        Ok(answer) => format!(
            "Part {}: {} (solve: {})",
            part.part,
            answer,
            format_duration(part.solve_duration)
        ),
        Err(SolveError::NoSolution(msg)) => format!("Part {}: no solution ({})", part.part, msg),
        Err(e) => format!("Part {}: Error - {}", part.part, e),
    }));
    lines
}

/// Render a structured result as display lines
pub fn render_report(result: &SolverResult) -> Vec<String> {
    match result {
        SolverResult::Calibration(report) => render_calibration(report),
        SolverResult::Navigation(report) => render_navigation(report),
        SolverResult::ExpenseReport(report) => render_expenses(report),
        SolverResult::PasswordValidation(report) => render_passwords(report),
        SolverResult::Bingo(report) => render_bingo(report),
    }
}

fn render_calibration(report: &CalibrationReport) -> Vec<String> {
    let mut lines = vec![format!("Lines processed: {}", report.lines_processed())];
    lines.extend(
        report
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| format!("  #{}: {}", i + 1, value)),
    );
    lines.push(format!("Total calibration value: {}", report.total));
    lines
}

fn render_navigation(report: &NavigationReport) -> Vec<String> {
    vec![
        format!("Commands processed: {}", report.commands),
        format!("Horizontal position: {}", report.horizontal),
        format!("Depth: {}", report.depth),
        format!("Product: {}", report.product),
    ]
}

fn render_expenses(report: &ExpenseReport) -> Vec<String> {
    let pair = match &report.pair {
        Some(pair) => format!(
            "Pair: {} = {}, product {}",
            pair.values.iter().join(" + "),
            report.target,
            pair.product
        ),
        None => format!("No pair found summing to {}", report.target),
    };
    let triple = match &report.triple {
        Some(triple) => format!(
            "Triple: {} = {}, product {}",
            triple.values.iter().join(" + "),
            report.target,
            triple.product
        ),
        None => format!("No triple found summing to {}", report.target),
    };
    vec![format!("Entries searched: {}", report.entries), pair, triple]
}

fn render_passwords(report: &PasswordReport) -> Vec<String> {
    let total = report.total();
    let mut lines = vec![
        format!("Records: {}", total),
        format!(
            "Occurrence policy: {} valid, {} invalid",
            report.occurrence_valid,
            total - report.occurrence_valid
        ),
        format!(
            "Position policy: {} valid, {} invalid",
            report.position_valid,
            total - report.position_valid
        ),
    ];
    lines.extend(report.records.iter().take(PASSWORD_DETAIL_LIMIT).map(|r| {
        format!(
            "  {}-{} {}: {} (occurs {}) occurrence {}, position {}",
            r.low,
            r.high,
            r.character,
            r.password,
            r.occurrences,
            verdict(r.occurrence_ok),
            verdict(r.position_ok)
        )
    }));
    if total > PASSWORD_DETAIL_LIMIT {
        lines.push(format!("  ... {} more", total - PASSWORD_DETAIL_LIMIT));
    }
    lines
}

fn verdict(ok: bool) -> &'static str {
    if ok { "valid" } else { "invalid" }
}

fn render_bingo(report: &BingoReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Draws: {}, boards: {}",
        report.draws, report.boards
    )];
    match &report.outcome {
        BingoOutcome::Won(win) => {
            lines.push(format!(
                "Winning board: #{} on number {} (draw {})",
                win.board + 1,
                win.number,
                win.turn + 1
            ));
            lines.extend(
                win.grid
                    .iter()
                    .map(|row| format!("  {}", row.iter().map(format_cell).join(" "))),
            );
            lines.push(format!("Unmarked sum: {}", win.unmarked_sum));
            lines.push(format!("Score: {}", win.score));
        }
        BingoOutcome::NoWinner => lines.push("No winning board".to_string()),
    }
    lines
}

/// Marked cells carry a trailing `X`
fn format_cell(cell: &MarkedCell) -> String {
    let mark = if cell.marked { 'X' } else { ' ' };
    format!("{:>2}{}", cell.value, mark)
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_kit::{BingoWin, Combination, GRID_SIZE, PasswordCheck};
    use proptest::prelude::*;

    #[test]
    fn test_expense_lines() {
        let report = ExpenseReport {
            entries: 6,
            target: 2020,
            pair: Some(Combination::new([1721, 299])),
            triple: None,
        };
        let lines = render_report(&report.into());
        assert_eq!(lines[1], "Pair: 1721 + 299 = 2020, product 514579");
        assert_eq!(lines[2], "No triple found summing to 2020");
    }

    #[test]
    fn test_password_details_are_capped() {
        let check = PasswordCheck {
            password: "abcde".into(),
            character: 'a',
            low: 1,
            high: 3,
            occurrences: 1,
            occurrence_ok: true,
            position_ok: true,
        };
        let report = PasswordReport {
            records: vec![check; 12],
            occurrence_valid: 12,
            position_valid: 12,
        };
        let lines = render_report(&report.into());
        assert_eq!(lines[1], "Occurrence policy: 12 valid, 0 invalid");
        assert_eq!(lines[3], "  1-3 a: abcde (occurs 1) occurrence valid, position valid");
        assert_eq!(lines.len(), 3 + PASSWORD_DETAIL_LIMIT + 1);
        assert_eq!(lines.last().unwrap(), "  ... 2 more");
    }

    #[test]
    fn test_bingo_grid_marks() {
        let mut grid = [[MarkedCell::default(); GRID_SIZE]; GRID_SIZE];
        grid[0] = [14, 21, 17, 24, 4].map(|value| MarkedCell {
            value,
            marked: true,
        });
        grid[1][0] = MarkedCell {
            value: 10,
            marked: false,
        };
        let report = BingoReport {
            draws: 27,
            boards: 3,
            outcome: BingoOutcome::Won(BingoWin {
                board: 2,
                number: 24,
                turn: 11,
                unmarked_sum: 188,
                score: 4512,
                grid,
            }),
        };
        let lines = render_report(&report.into());
        assert_eq!(lines[1], "Winning board: #3 on number 24 (draw 12)");
        assert_eq!(lines[2], "  14X 21X 17X 24X  4X");
        assert!(lines[3].starts_with("  10  "));
        assert_eq!(lines.last().unwrap(), "Score: 4512");
    }

    #[test]
    fn test_no_winner() {
        let report = BingoReport {
            draws: 3,
            boards: 0,
            outcome: BingoOutcome::NoWinner,
        };
        assert_eq!(
            render_report(&report.into()),
            vec!["Draws: 3, boards: 0", "No winning board"]
        );
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(2)), "2.00s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    proptest! {
        #[test]
        fn prop_calibration_lists_every_value(values in prop::collection::vec(10u32..100, 0..20)) {
            let total = values.iter().sum();
            let lines = render_report(&CalibrationReport { values: values.clone(), total }.into());
            prop_assert_eq!(lines.len(), values.len() + 2);
            let expected_total = format!("Total calibration value: {}", total);
            prop_assert_eq!(lines.last().map(String::as_str), Some(expected_total.as_str()));
        }
    }
}
