//! Distance-to-goal estimates. Lower is better and zero means the board is solved.
//!
//! The blank is scored like any other tile.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::goal::Goal;
use crate::puzzle::{State, CELLS, SIDE};

/// Number of cells whose tile is not where the goal puts it (h1).
pub fn misplaced_tiles(state: &State, goal: &Goal) -> u32 {
    (0..CELLS)
        .filter(|&i| goal.position(state.tile(i)) != i)
        .count() as u32
}

/// Sum of row and column distances between each tile and its goal cell (h2).
pub fn manhattan(state: &State, goal: &Goal) -> u32 {
    let mut distance = 0;
    for i in 0..CELLS {
        let target = goal.position(state.tile(i));
        distance += (i % SIDE).abs_diff(target % SIDE);
        distance += (i / SIDE).abs_diff(target / SIDE);
    }
    distance as u32
}

/// h1 + h2 (h3).
pub fn combined(state: &State, goal: &Goal) -> u32 {
    misplaced_tiles(state, goal) + manhattan(state, goal)
}

/// Selects which estimate drives the climb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    MisplacedTiles,
    /// Gives the widest spread of values, so the climb sees more gradient.
    #[default]
    Manhattan,
    Combined,
}

impl Heuristic {
    pub fn evaluate(self, state: &State, goal: &Goal) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state, goal),
            Heuristic::Manhattan => manhattan(state, goal),
            Heuristic::Combined => combined(state, goal),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heuristic::MisplacedTiles => "misplaced_tiles",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Combined => "combined",
        };
        f.write_str(s)
    }
}
