//! Giant squid bingo
//!
//! Every board is marked after each draw, then boards are scanned in index
//! order. The first board with a complete row or column wins and the game
//! stops there. Diagonals never count.

use crate::utils::text::{blocks_with_line_numbers, parse_field, split_whitespace_fields};
use aoc_kit::{
    AocParser, AocSolver, AutoRegisterSolver, BingoOutcome, BingoReport, BingoWin, GRID_SIZE,
    MarkedCell, MarkedGrid, ParseError, PartSolver, SolveError, SolverResult, Summarize,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(kind = Bingo, tags = ["grid", "state-machine"])]
pub struct Bingo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoBoard {
    numbers: [[u32; GRID_SIZE]; GRID_SIZE],
    marked: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl BingoBoard {
    pub fn new(numbers: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self {
            numbers,
            marked: [[false; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Parse a block of exactly five lines of five numbers
    ///
    /// `first_line` is the document line the block starts on.
    pub fn parse_block(block: &str, first_line: usize) -> Result<Self, ParseError> {
        let rows: Vec<&str> = block.lines().collect();
        if rows.len() != GRID_SIZE {
            return Err(ParseError::malformed(
                first_line,
                format!("board has {} rows, expected {GRID_SIZE}", rows.len()),
            ));
        }

        let mut numbers = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, (cells, text)) in numbers.iter_mut().zip(rows).enumerate() {
            let line_no = first_line + row;
            let fields = split_whitespace_fields(text);
            if fields.len() != GRID_SIZE {
                return Err(ParseError::malformed(
                    line_no,
                    format!("board row has {} numbers, expected {GRID_SIZE}", fields.len()),
                ));
            }
            for (cell, field) in cells.iter_mut().zip(fields) {
                *cell = parse_field(field, line_no, "board number")?;
            }
        }

        Ok(Self::new(numbers))
    }

    /// Mark every cell holding `number`
    pub fn mark(&mut self, number: u32) {
        for (values, marks) in self.numbers.iter().zip(self.marked.iter_mut()) {
            for (&value, mark) in values.iter().zip(marks.iter_mut()) {
                if value == number {
                    *mark = true;
                }
            }
        }
    }

    /// A full row or a full column is marked
    pub fn is_complete(&self) -> bool {
        let full_row = self.marked.iter().any(|row| row.iter().all(|&m| m));
        let full_column = (0..GRID_SIZE).any(|col| self.marked.iter().all(|row| row[col]));
        full_row || full_column
    }

    /// Accumulated in `u64`; 25 cells of `u32::MAX` fit comfortably
    pub fn unmarked_sum(&self) -> u64 {
        self.cells()
            .filter(|cell| !cell.marked)
            .map(|cell| u64::from(cell.value))
            .sum()
    }

    pub fn snapshot(&self) -> MarkedGrid {
        let mut grid = [[MarkedCell::default(); GRID_SIZE]; GRID_SIZE];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = MarkedCell {
                    value: self.numbers[row][col],
                    marked: self.marked[row][col],
                };
            }
        }
        grid
    }

    fn cells(&self) -> impl Iterator<Item = MarkedCell> + '_ {
        self.numbers
            .iter()
            .flatten()
            .zip(self.marked.iter().flatten())
            .map(|(&value, &marked)| MarkedCell { value, marked })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won(BingoWin),
}

/// One game over a set of boards, advanced one draw at a time
#[derive(Debug, Clone)]
pub struct BingoGame {
    boards: Vec<BingoBoard>,
    drawn: usize,
    state: GameState,
}

impl BingoGame {
    pub fn new(boards: Vec<BingoBoard>) -> Self {
        Self {
            boards,
            drawn: 0,
            state: GameState::Playing,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn boards(&self) -> &[BingoBoard] {
        &self.boards
    }

    /// Apply one draw; a no-op once a board has won
    pub fn draw(&mut self, number: u32) -> &GameState {
        if let GameState::Won(_) = self.state {
            return &self.state;
        }

        let turn = self.drawn;
        self.drawn += 1;
        for board in &mut self.boards {
            board.mark(number);
        }

        if let Some((index, board)) = self.boards.iter().enumerate().find(|(_, b)| b.is_complete())
        {
            let unmarked_sum = board.unmarked_sum();
            tracing::debug!(board = index, number, turn, "board completed");
            self.state = GameState::Won(BingoWin {
                board: index,
                number,
                turn,
                unmarked_sum,
                score: u128::from(unmarked_sum) * u128::from(number),
                grid: board.snapshot(),
            });
        }
        &self.state
    }
}

/// Play `draws` in order until the first board completes
pub fn play(draws: &[u32], boards: Vec<BingoBoard>) -> BingoReport {
    let board_count = boards.len();
    let mut game = BingoGame::new(boards);
    for &number in draws {
        if let GameState::Won(_) = game.draw(number) {
            break;
        }
    }

    let outcome = match game.state {
        GameState::Won(win) => BingoOutcome::Won(win),
        GameState::Playing => BingoOutcome::NoWinner,
    };
    BingoReport {
        draws: draws.len(),
        boards: board_count,
        outcome,
    }
}

/// Re-run a finished game from unmarked boards
///
/// Only the draws up to and including the winning turn are replayed, so a
/// deterministic game reproduces the same win.
pub fn replay(boards: &[BingoBoard], draws: &[u32], report: &BingoReport) -> BingoReport {
    let fresh: Vec<BingoBoard> = boards.iter().map(|b| BingoBoard::new(b.numbers)).collect();
    match report.winner() {
        Some(win) => play(draws.get(..=win.turn).unwrap_or(draws), fresh),
        None => play(draws, fresh),
    }
}

#[derive(Debug, Clone)]
pub struct SharedData {
    draws: Vec<u32>,
    boards: Vec<BingoBoard>,
    report: Option<BingoReport>,
}

impl SharedData {
    pub fn draws(&self) -> &[u32] {
        &self.draws
    }

    pub fn boards(&self) -> &[BingoBoard] {
        &self.boards
    }
}

fn parse_draws(block: &str, first_line: usize) -> Result<Vec<u32>, ParseError> {
    block
        .lines()
        .enumerate()
        .flat_map(|(offset, line)| line.split(',').map(move |token| (first_line + offset, token)))
        .map(|(line_no, token)| parse_field(token.trim(), line_no, "draw"))
        .collect()
}

impl AocParser for Bingo {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut blocks = blocks_with_line_numbers(input).into_iter();
        let (draw_line, draw_block) = blocks
            .next()
            .ok_or_else(|| ParseError::MissingData("no draw sequence".into()))?;

        let draws = parse_draws(draw_block, draw_line)?;
        let boards = blocks
            .map(|(line_no, block)| BingoBoard::parse_block(block, line_no))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(draws = draws.len(), boards = boards.len(), "bingo parsed");
        Ok(SharedData {
            draws,
            boards,
            report: None,
        })
    }
}

fn play_once(shared: &mut SharedData) -> &BingoReport {
    shared
        .report
        .get_or_insert_with(|| play(&shared.draws, shared.boards.clone()))
}

impl PartSolver<1> for Bingo {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let draws = shared.draws.len();
        play_once(shared)
            .winner()
            .map(|win| win.score.to_string())
            .ok_or_else(|| SolveError::NoSolution(format!("no board completed after {draws} draws")))
    }
}

impl Summarize for Bingo {
    fn summarize(shared: &mut Self::SharedData<'_>) -> Result<SolverResult, SolveError> {
        Ok(play_once(shared).clone().into())
    }
}
