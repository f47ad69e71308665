//! The target board and its tile position lookup.

use crate::puzzle::{State, CELLS};

/// A goal board together with where each tile value lives on it.
///
/// Built once per search session and shared read-only with every heuristic call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    state: State,
    positions: [usize; CELLS],
}

impl Goal {
    pub fn new(state: State) -> Self {
        let mut positions = [0; CELLS];
        for (index, &value) in state.tiles().iter().enumerate() {
            positions[value as usize] = index;
        }

        Self { state, positions }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Index of `value` on the goal board.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a tile value (greater than 8). Tiles taken from a
    /// `State` are always in range.
    #[inline]
    pub fn position(&self, value: u8) -> usize {
        self.positions[value as usize]
    }

    pub fn is_goal(&self, state: &State) -> bool {
        self.state == *state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_invert_goal_board() {
        let goal = Goal::new(State::new([1, 2, 3, 8, 0, 4, 7, 6, 5]).unwrap());

        for i in 0..CELLS {
            assert_eq!(goal.position(goal.state().tile(i)), i);
        }
        assert_eq!(goal.position(0), 4);
        assert_eq!(goal.position(5), 8);
    }

    #[test]
    #[should_panic]
    fn position_panics_outside_tile_range() {
        let goal = Goal::new(State::new([1, 2, 3, 8, 0, 4, 7, 6, 5]).unwrap());
        goal.position(9);
    }
}
