//! The five puzzle solvers
//!
//! Each solver derives `AocSolver` for part dispatch and `AutoRegisterSolver`
//! so that linking this crate (`use aoc_puzzles as _;`) is enough for
//! [`RegistryBuilder::register_all_plugins`](aoc_kit::RegistryBuilder::register_all_plugins)
//! to find it. Solvers can also be registered by hand:
//!
//! ```
//! use aoc_kit::{PuzzleKind, RegistryBuilder};
//! use aoc_puzzles::Calibration;
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Calibration>(PuzzleKind::Calibration, &["strings"])
//!     .unwrap()
//!     .build();
//! let mut solver = registry
//!     .create_solver(PuzzleKind::Calibration, "1abc2\npqr3stu8vwx")
//!     .unwrap();
//! assert_eq!(solver.solve(1).unwrap().value, "50");
//! ```

pub mod puzzles;
pub mod utils;

pub use puzzles::bingo::{Bingo, BingoBoard, BingoGame, GameState, play, replay};
pub use puzzles::calibration::{Calibration, calibration_value};
pub use puzzles::expense_report::{DEFAULT_TARGET, ExpenseReport, find_pair, find_triple};
pub use puzzles::navigation::{Direction, Navigation, NavigationCommand, Position, navigate};
pub use puzzles::password_policy::{PasswordPolicy, PasswordPolicySolver};
