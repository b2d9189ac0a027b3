use crate::utils::text::{non_blank_lines, split_whitespace_fields};
use anyhow::{Context, anyhow};
use aoc_kit::{
    AocParser, AocSolver, AutoRegisterSolver, NavigationReport, ParseError, PartSolver,
    SolveError, SolverResult, Summarize,
};
use itertools::Itertools;
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(kind = Navigation, tags = ["simulation"])]
pub struct Navigation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Down,
    Up,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Direction::Forward),
            "down" => Ok(Direction::Down),
            "up" => Ok(Direction::Up),
            _ => Err(anyhow!("unknown direction '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationCommand {
    /// `None` for a direction token the submarine does not understand
    pub direction: Option<Direction>,
    pub magnitude: u32,
}

impl FromStr for NavigationCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (direction, magnitude) = split_whitespace_fields(line)
            .into_iter()
            .collect_tuple()
            .ok_or_else(|| anyhow!("expected '<direction> <magnitude>'"))?;

        let magnitude = magnitude
            .parse::<u32>()
            .with_context(|| format!("invalid magnitude '{}'", magnitude))?;

        Ok(NavigationCommand {
            direction: direction.parse().ok(),
            magnitude,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
}

impl Position {
    pub fn apply(&mut self, command: NavigationCommand) {
        let magnitude = i64::from(command.magnitude);
        match command.direction {
            Some(Direction::Forward) => self.horizontal += magnitude,
            Some(Direction::Down) => self.depth += magnitude,
            Some(Direction::Up) => self.depth -= magnitude,
            None => {}
        }
    }

    /// Widened since two 32-bit sums of magnitudes can exceed `i64`
    pub fn product(&self) -> i128 {
        i128::from(self.horizontal) * i128::from(self.depth)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedData {
    commands: Vec<NavigationCommand>,
}

impl AocParser for Navigation {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        non_blank_lines(input)
            .map(|(line_no, line)| {
                let command = line
                    .parse::<NavigationCommand>()
                    .map_err(|e| ParseError::malformed(line_no, format!("{:#}", e)))?;
                if command.direction.is_none() {
                    tracing::warn!(line = line_no, "unrecognized direction ignored");
                }
                Ok(command)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|commands| SharedData { commands })
    }
}

/// Apply every command in file order from the origin
pub fn navigate(commands: &[NavigationCommand]) -> Position {
    commands
        .iter()
        .fold(Position::default(), |mut position, &command| {
            position.apply(command);
            position
        })
}

impl PartSolver<1> for Navigation {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(navigate(&shared.commands).product().to_string())
    }
}

impl Summarize for Navigation {
    fn summarize(shared: &mut Self::SharedData<'_>) -> Result<SolverResult, SolveError> {
        let position = navigate(&shared.commands);
        Ok(NavigationReport {
            commands: shared.commands.len(),
            horizontal: position.horizontal,
            depth: position.depth,
            product: position.product(),
        }
        .into())
    }
}
