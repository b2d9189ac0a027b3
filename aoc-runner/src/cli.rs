//! CLI argument parsing using clap

use aoc_kit::PuzzleKind;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; run puzzles one after another in order
    Sequential,
    /// Run puzzles concurrently; parts run sequentially within each puzzle (default)
    #[default]
    Puzzle,
}

/// Puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run the bundled puzzle solvers", version)]
pub struct Args {
    /// Puzzles to run, comma-separated (runs all registered puzzles if omitted)
    #[arg(short, long, value_delimiter = ',')]
    pub puzzle: Vec<PuzzleKind>,

    /// Part to run (runs all parts if omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding the puzzle input files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential or puzzle
    #[arg(long, value_enum, default_value = "puzzle")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzles_are_comma_separated() {
        let args = Args::try_parse_from(["aoc", "-p", "bingo,calibration"]).unwrap();
        assert_eq!(args.puzzle, vec![PuzzleKind::Bingo, PuzzleKind::Calibration]);
        assert_eq!(args.parallelize_by, ParallelizeBy::Puzzle);
    }

    #[test]
    fn test_unknown_puzzle_rejected() {
        assert!(Args::try_parse_from(["aoc", "--puzzle", "day7"]).is_err());
    }

    #[test]
    fn test_part_range() {
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        let args = Args::try_parse_from(["aoc", "--part", "2"]).unwrap();
        assert_eq!(args.part, Some(2));
    }

    #[test]
    fn test_verbose_counts() {
        let args = Args::try_parse_from(["aoc", "-vv", "--parallelize-by", "sequential"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.parallelize_by, ParallelizeBy::Sequential);
    }
}
