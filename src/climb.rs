//! Steepest-descent hill climbing over a depth-augmented cost.
//!
//! Every step scores each legal neighbour as `depth + h(neighbour)` and moves to the
//! cheapest. A climb never backtracks; it stops as soon as the best neighbour is no
//! cheaper than the cost accepted on the previous step.
//!
//! Logging levels:
//! - **DEBUG**: accepted steps and the reason a climb stopped
//! - **TRACE**: every candidate evaluation

use tracing::{debug, trace};

use crate::goal::Goal;
use crate::heuristic::Heuristic;
use crate::puzzle::{legal_moves, Move, State};

/// Default cap on climb steps per attempt.
pub const DEFAULT_ITERATIONS: usize = 20;

/// Default depth past which a step is refused.
pub const DEFAULT_DEPTH_LIMIT: u32 = 10;

/// Default number of random restarts.
pub const DEFAULT_RESTARTS: usize = 4000;

/// Knobs shared by plain and random-restart climbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub heuristic: Heuristic,
    /// Outer safety bound on climb steps, independent of `depth_limit`.
    pub iterations: usize,
    pub depth_limit: u32,
    pub restarts: usize,
    /// Only restart from boards that can actually slide into the goal.
    pub reachable_restarts: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            iterations: DEFAULT_ITERATIONS,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            restarts: DEFAULT_RESTARTS,
            reachable_restarts: false,
        }
    }
}

/// Result of a single climb step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cheapest neighbour and the direction the blank moved to reach it.
    Advanced {
        state: State,
        cost: u32,
        direction: Move,
    },
    /// `depth` exceeded the limit; no neighbour was evaluated.
    DepthLimitReached,
}

/// Picks the cheapest neighbour of `current`.
///
/// Candidates are scored in `Move::ALL` order and only a strictly lower cost replaces
/// the incumbent, so ties go to Up, then Down, Left, Right.
pub fn climb_step<F>(current: &State, depth: u32, depth_limit: u32, heuristic: F) -> Step
where
    F: Fn(&State) -> u32,
{
    if depth > depth_limit {
        return Step::DepthLimitReached;
    }

    let mut best: Option<(State, u32, Move)> = None;
    for direction in legal_moves(current.blank()) {
        let Some(candidate) = current.apply(direction) else {
            continue;
        };
        // saturate so an extreme heuristic cannot wrap below a real cost
        let cost = depth.saturating_add(heuristic(&candidate));
        trace!(event = "candidate", %direction, cost);

        if best.map_or(true, |(_, best_cost, _)| cost < best_cost) {
            best = Some((candidate, cost, direction));
        }
    }

    let Some((state, cost, direction)) = best else {
        unreachable!("every cell of a 3x3 board has at least two neighbours");
    };
    Step::Advanced {
        state,
        cost,
        direction,
    }
}

/// Why a climb stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The best neighbour at `iteration` (1-based) was no cheaper than the last accepted cost.
    Converged { iteration: usize },
    /// The step at `iteration` (1-based) was refused by the depth limit.
    DepthLimitReached { iteration: usize },
    /// Every allowed iteration advanced.
    IterationCapReached,
}

/// Where a climb ended and how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbOutcome {
    pub start: State,
    pub state: State,
    /// Cost accepted on the last step, `None` if no step was taken.
    pub cost: Option<u32>,
    pub path: Vec<Move>,
    pub termination: Termination,
}

impl ClimbOutcome {
    pub fn reached_goal(&self, goal: &Goal) -> bool {
        goal.is_goal(&self.state)
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Climbs from `start` using the configured heuristic against `goal`.
pub fn hill_climb(start: State, goal: &Goal, params: &SearchParams) -> ClimbOutcome {
    let heuristic = params.heuristic;
    hill_climb_with(start, params.iterations, params.depth_limit, |s| {
        heuristic.evaluate(s, goal)
    })
}

/// Climbs from `start` with an arbitrary heuristic.
pub fn hill_climb_with<F>(
    start: State,
    iterations: usize,
    depth_limit: u32,
    heuristic: F,
) -> ClimbOutcome
where
    F: Fn(&State) -> u32,
{
    let mut current = start;
    let mut previous_cost: Option<u32> = None;
    let mut depth = 0;
    let mut path = Vec::new();
    let mut termination = Termination::IterationCapReached;

    for iteration in 1..=iterations {
        match climb_step(&current, depth, depth_limit, &heuristic) {
            Step::DepthLimitReached => {
                debug!(event = "depth_limit", iteration, depth);
                termination = Termination::DepthLimitReached { iteration };
                break;
            }
            Step::Advanced {
                state,
                cost,
                direction,
            } => {
                if previous_cost.is_some_and(|previous| previous <= cost) {
                    debug!(event = "extremum", iteration, cost);
                    termination = Termination::Converged { iteration };
                    break;
                }

                debug!(event = "step", iteration, %direction, cost);
                current = state;
                previous_cost = Some(cost);
                depth += 1;
                path.push(direction);
            }
        }
    }

    ClimbOutcome {
        start,
        state: current,
        cost: previous_cost,
        path,
        termination,
    }
}
