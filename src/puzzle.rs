use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PuzzleError, Result};

/// Board width and height.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// The direction the blank travels when a move is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every direction, in the order candidates are evaluated. Earlier entries win cost ties.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Whether the blank at `blank` can travel in this direction without leaving the grid.
    pub fn is_legal(self, blank: usize) -> bool {
        let row = blank / SIDE;
        let col = blank % SIDE;

        match self {
            Move::Up => row != 0,
            Move::Down => row != SIDE - 1,
            Move::Left => col != 0,
            Move::Right => col != SIDE - 1,
        }
    }

    /// Index of the cell the blank swaps with, or `None` when the move leaves the grid.
    pub fn target(self, blank: usize) -> Option<usize> {
        if blank >= CELLS || !self.is_legal(blank) {
            return None;
        }

        Some(match self {
            Move::Up => blank - SIDE,
            Move::Down => blank + SIDE,
            Move::Left => blank - 1,
            Move::Right => blank + 1,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Legal directions for a blank at `blank`, in priority order.
pub fn legal_moves(blank: usize) -> impl Iterator<Item = Move> {
    Move::ALL.into_iter().filter(move |m| m.is_legal(blank))
}

/// A row-major 3x3 board holding each of 0..=8 exactly once, 0 being the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct State {
    tiles: [u8; CELLS],
    blank: usize,
}

impl State {
    /// Validates `tiles` as a permutation of 0..=8.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &value in &tiles {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(PuzzleError::OutOfRange(value))?;
            if *slot {
                return Err(PuzzleError::Duplicate(value));
            }
            *slot = true;
        }

        Ok(Self::from_permutation(tiles))
    }

    /// Skips validation; `tiles` must already be a permutation of 0..=8.
    pub(crate) fn from_permutation(tiles: [u8; CELLS]) -> Self {
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        Self { tiles, blank }
    }

    /// A uniformly random permutation of 0..=8.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        tiles.shuffle(rng);
        Self::from_permutation(tiles)
    }

    /// A uniformly random permutation that can be slid into `goal`.
    pub fn shuffled_reachable<R: Rng + ?Sized>(goal: &State, rng: &mut R) -> Self {
        loop {
            let state = Self::shuffled(rng);
            if state.same_parity(goal) {
                return state;
            }
        }
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> u8 {
        self.tiles[index]
    }

    /// Index of the blank tile.
    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Copy of this board with the blank moved, or `None` when the move leaves the grid.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let target = movement.target(self.blank)?;
        let mut tiles = self.tiles;
        tiles.swap(self.blank, target);

        Some(Self {
            tiles,
            blank: target,
        })
    }

    /// Pairs of numbered tiles appearing out of order, ignoring the blank.
    pub fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// On an odd-width board, two layouts are connected by slides exactly when
    /// their inversion counts share parity.
    pub fn same_parity(&self, other: &State) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }
}

impl TryFrom<&[u8]> for State {
    type Error = PuzzleError;

    fn try_from(values: &[u8]) -> Result<Self> {
        let tiles: [u8; CELLS] = values
            .try_into()
            .map_err(|_| PuzzleError::WrongLength(values.len()))?;
        Self::new(tiles)
    }
}

impl TryFrom<Vec<u8>> for State {
    type Error = PuzzleError;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        Self::try_from(values.as_slice())
    }
}

impl From<State> for Vec<u8> {
    fn from(state: State) -> Self {
        state.tiles.to_vec()
    }
}

impl FromStr for State {
    type Err = PuzzleError;

    /// Accepts digits separated by commas and/or whitespace, e.g. `"1,2,3,8,6,0,7,5,4"`.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|e| PuzzleError::Parse(format!("{token:?}: {e}")))
            })
            .collect::<Result<Vec<u8>>>()?;

        Self::try_from(values)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/=====|")?;
        for row in self.tiles.chunks(SIDE) {
            write!(f, "|")?;
            for (col, val) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", val)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "=====/")
    }
}
