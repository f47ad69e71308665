//! Random-restart hill climbing.
//!
//! Each restart climbs from a freshly shuffled board. Only a strictly cheaper
//! result replaces the best record, so among equal costs the earliest restart wins.

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::climb::{hill_climb, ClimbOutcome, SearchParams};
use crate::goal::Goal;
use crate::puzzle::State;

/// The cheapest converged board seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Best {
    pub state: State,
    pub cost: u32,
    /// Zero-based index of the restart that produced it.
    pub restart: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BestSoFar {
    best: Option<Best>,
}

impl BestSoFar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of `restart` if it is strictly cheaper than the current best.
    /// Returns whether the record changed.
    pub fn offer(&mut self, state: State, cost: u32, restart: usize) -> bool {
        if self.best.is_some_and(|best| best.cost <= cost) {
            return false;
        }
        self.best = Some(Best {
            state,
            cost,
            restart,
        });
        true
    }

    pub fn best(&self) -> Option<&Best> {
        self.best.as_ref()
    }

    pub fn into_best(self) -> Option<Best> {
        self.best
    }
}

/// Summary of a random-restart run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartOutcome {
    /// `None` only when no restart accepted a single step.
    pub best: Option<Best>,
    pub restarts: usize,
    /// Restarts whose climb ended on the goal board.
    pub goal_hits: usize,
}

impl RestartOutcome {
    pub fn reached_goal(&self, goal: &Goal) -> bool {
        self.best.is_some_and(|best| goal.is_goal(&best.state))
    }
}

fn draw_start<R: Rng + ?Sized>(goal: &Goal, params: &SearchParams, rng: &mut R) -> State {
    if params.reachable_restarts {
        State::shuffled_reachable(goal.state(), rng)
    } else {
        State::shuffled(rng)
    }
}

struct Tally {
    record: BestSoFar,
    goal_hits: usize,
}

impl Tally {
    fn new() -> Self {
        Self {
            record: BestSoFar::new(),
            goal_hits: 0,
        }
    }

    fn record(&mut self, restart: usize, outcome: &ClimbOutcome, goal: &Goal) {
        if outcome.reached_goal(goal) {
            self.goal_hits += 1;
        }

        let improved = outcome
            .cost
            .is_some_and(|cost| self.record.offer(outcome.state, cost, restart));
        debug!(
            event = "restart",
            restart,
            cost = ?outcome.cost,
            termination = ?outcome.termination,
            improved,
        );
    }

    fn finish(self, restarts: usize) -> RestartOutcome {
        let outcome = RestartOutcome {
            best: self.record.into_best(),
            restarts,
            goal_hits: self.goal_hits,
        };
        info!(
            event = "restarts_end",
            restarts,
            goal_hits = outcome.goal_hits,
            best_cost = ?outcome.best.map(|b| b.cost),
            best_restart = ?outcome.best.map(|b| b.restart),
        );
        outcome
    }
}

/// Runs `params.restarts` climbs one after another, drawing each start from `rng`.
pub fn random_restart<R: Rng + ?Sized>(
    goal: &Goal,
    params: &SearchParams,
    rng: &mut R,
) -> RestartOutcome {
    info!(
        event = "restarts_start",
        restarts = params.restarts,
        heuristic = %params.heuristic,
        parallel = false,
    );

    let mut tally = Tally::new();
    for restart in 0..params.restarts {
        let start = draw_start(goal, params, rng);
        let outcome = hill_climb(start, goal, params);
        tally.record(restart, &outcome, goal);
    }
    tally.finish(params.restarts)
}

/// Same result as [`random_restart`] for the same `rng` state, with climbs spread over
/// the rayon pool.
///
/// Starts are drawn sequentially before any climbing and outcomes are folded in
/// restart order, so ties resolve exactly as in the sequential run.
pub fn random_restart_parallel<R: Rng + ?Sized>(
    goal: &Goal,
    params: &SearchParams,
    rng: &mut R,
) -> RestartOutcome {
    info!(
        event = "restarts_start",
        restarts = params.restarts,
        heuristic = %params.heuristic,
        parallel = true,
    );

    let starts: Vec<State> = (0..params.restarts)
        .map(|_| draw_start(goal, params, rng))
        .collect();
    let outcomes: Vec<ClimbOutcome> = starts
        .into_par_iter()
        .map(|start| hill_climb(start, goal, params))
        .collect();

    let mut tally = Tally::new();
    for (restart, outcome) in outcomes.iter().enumerate() {
        tally.record(restart, outcome, goal);
    }
    tally.finish(params.restarts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board(tiles: [u8; 9]) -> State {
        State::new(tiles).unwrap()
    }

    fn goal() -> Goal {
        Goal::new(board([1, 2, 3, 8, 0, 4, 7, 6, 5]))
    }

    #[test]
    fn best_updates_only_on_strict_improvement() {
        let a = board([1, 2, 3, 8, 0, 4, 7, 6, 5]);
        let b = board([1, 2, 3, 8, 6, 0, 7, 5, 4]);
        let mut record = BestSoFar::new();

        assert!(record.offer(a, 5, 0));
        assert!(!record.offer(b, 5, 1));
        assert!(!record.offer(b, 9, 2));
        assert_eq!(
            record.best(),
            Some(&Best {
                state: a,
                cost: 5,
                restart: 0
            })
        );

        assert!(record.offer(b, 4, 3));
        assert_eq!(record.best().map(|best| best.restart), Some(3));
    }

    #[test]
    fn seeded_runs_repeat() {
        let goal = goal();
        let params = SearchParams {
            restarts: 200,
            ..SearchParams::default()
        };

        let first = random_restart(&goal, &params, &mut ChaCha8Rng::seed_from_u64(42));
        let second = random_restart(&goal, &params, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
        assert!(first.best.is_some());
    }

    #[test]
    fn parallel_matches_sequential() {
        let goal = goal();
        let params = SearchParams {
            restarts: 300,
            ..SearchParams::default()
        };

        let sequential = random_restart(&goal, &params, &mut ChaCha8Rng::seed_from_u64(9));
        let parallel =
            random_restart_parallel(&goal, &params, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn no_restarts_no_best() {
        let params = SearchParams {
            restarts: 0,
            ..SearchParams::default()
        };
        let outcome = random_restart(&goal(), &params, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.goal_hits, 0);
    }
}
