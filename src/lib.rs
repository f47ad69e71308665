//! Local search for the 3x3 sliding puzzle.
//!
//! Boards are scored by a heuristic distance to a fixed goal. A climb repeatedly
//! slides the blank toward the cheapest neighbour until nothing improves, and the
//! random-restart driver repeats that from shuffled boards, keeping the cheapest
//! result. Neither guarantees reaching the goal: climbs stop at local minima and
//! plateaus, and nothing is ever backtracked.
//!
//! ```
//! use slider_hill_climb::{hill_climb, Goal, SearchParams, State};
//!
//! let goal = Goal::new("1,2,3,8,0,4,7,6,5".parse::<State>().unwrap());
//! let start: State = "1,2,3,8,6,0,7,5,4".parse().unwrap();
//!
//! let outcome = hill_climb(start, &goal, &SearchParams::default());
//! assert!(outcome.reached_goal(&goal));
//! ```

pub mod climb;
pub mod config;
pub mod error;
pub mod goal;
pub mod heuristic;
pub mod puzzle;
pub mod restart;

pub use climb::{
    climb_step, hill_climb, hill_climb_with, ClimbOutcome, SearchParams, Step, Termination,
};
pub use config::{ConfigError, SearchConfig};
pub use error::PuzzleError;
pub use goal::Goal;
pub use heuristic::Heuristic;
pub use puzzle::{legal_moves, Move, State};
pub use restart::{random_restart, random_restart_parallel, Best, BestSoFar, RestartOutcome};
