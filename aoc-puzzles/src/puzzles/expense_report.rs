use crate::utils::text::{non_blank_lines, parse_field};
use aoc_kit::{
    AocParser, AocSolver, AutoRegisterSolver, Combination, ExpenseReport as ExpenseSummary,
    ParseError, PartSolver, SolveError, SolverResult, Summarize,
};
use itertools::Itertools;
use std::cell::OnceCell;

/// Sum the reference data set is searched for
pub const DEFAULT_TARGET: i64 = 2020;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(kind = ExpenseReport, tags = ["search"])]
pub struct ExpenseReport;

#[derive(Debug, Clone)]
pub struct SharedData {
    entries: Vec<i32>,
    target: i64,
    pair: OnceCell<Option<Combination<2>>>,
    triple: OnceCell<Option<Combination<3>>>,
}

impl SharedData {
    fn new(entries: Vec<i32>, target: i64) -> Self {
        Self {
            entries,
            target,
            pair: OnceCell::new(),
            triple: OnceCell::new(),
        }
    }

    fn pair(&self) -> Option<Combination<2>> {
        *self.pair.get_or_init(|| find_pair(&self.entries, self.target))
    }

    fn triple(&self) -> Option<Combination<3>> {
        *self.triple.get_or_init(|| find_triple(&self.entries, self.target))
    }
}

/// First `i < j` in enumeration order with `entries[i] + entries[j] == target`
///
/// Enumeration is `i` ascending, then `j` ascending; the scan stops at the
/// first hit. Sums are taken in `i64`, which no pair of 32-bit entries
/// can overflow.
pub fn find_pair(entries: &[i32], target: i64) -> Option<Combination<2>> {
    entries
        .iter()
        .copied()
        .tuple_combinations()
        .find(|&(a, b)| i64::from(a) + i64::from(b) == target)
        .map(|(a, b)| Combination::new([a, b]))
}

/// First `i < j < k` in enumeration order summing to `target`
pub fn find_triple(entries: &[i32], target: i64) -> Option<Combination<3>> {
    entries
        .iter()
        .copied()
        .tuple_combinations()
        .find(|&(a, b, c)| i64::from(a) + i64::from(b) + i64::from(c) == target)
        .map(|(a, b, c)| Combination::new([a, b, c]))
}

/// Parse one entry per non-blank line
///
/// Entries are limited to 32-bit values so that sums and products of up to
/// three of them cannot overflow once widened.
pub fn parse_entries(input: &str) -> Result<Vec<i32>, ParseError> {
    non_blank_lines(input)
        .map(|(line_no, line)| parse_field(line, line_no, "entry"))
        .collect()
}

impl AocParser for ExpenseReport {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let entries = parse_entries(input)?;
        tracing::debug!(entries = entries.len(), "expense report parsed");
        Ok(SharedData::new(entries, DEFAULT_TARGET))
    }
}

impl PartSolver<1> for ExpenseReport {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .pair()
            .map(|pair| pair.product.to_string())
            .ok_or_else(|| SolveError::NoSolution(format!("no pair sums to {}", shared.target)))
    }
}

impl PartSolver<2> for ExpenseReport {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .triple()
            .map(|triple| triple.product.to_string())
            .ok_or_else(|| SolveError::NoSolution(format!("no triple sums to {}", shared.target)))
    }
}

impl Summarize for ExpenseReport {
    fn summarize(shared: &mut Self::SharedData<'_>) -> Result<SolverResult, SolveError> {
        Ok(summarize_entries(shared).into())
    }
}

/// Run both searches over already-parsed data
pub fn summarize_entries(shared: &SharedData) -> ExpenseSummary {
    ExpenseSummary {
        entries: shared.entries.len(),
        target: shared.target,
        pair: shared.pair(),
        triple: shared.triple(),
    }
}
