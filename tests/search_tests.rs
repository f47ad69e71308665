use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slider_hill_climb::{
    hill_climb, random_restart, random_restart_parallel, Goal, Heuristic, Move, SearchConfig,
    SearchParams, State, Termination,
};

fn board(s: &str) -> State {
    s.parse().unwrap()
}

fn luger_goal() -> Goal {
    Goal::new(board("1,2,3,8,0,4,7,6,5"))
}

#[test]
fn worked_example_reaches_goal() {
    let goal = luger_goal();
    let start = board("1,2,3,8,6,0,7,5,4");

    let outcome = hill_climb(start, &goal, &SearchParams::default());

    assert!(outcome.reached_goal(&goal));
    assert_eq!(outcome.path, vec![Move::Down, Move::Left, Move::Up]);
    // goal was accepted at depth 2 with h = 0
    assert_eq!(outcome.cost, Some(2));
    assert_eq!(outcome.termination, Termination::Converged { iteration: 4 });
}

#[test]
fn replaying_path_reproduces_final_state() {
    let goal = luger_goal();
    let start = board("2,8,3,1,6,4,7,0,5");
    let outcome = hill_climb(start, &goal, &SearchParams::default());
    assert_eq!(outcome.start, start);

    let replayed = outcome
        .path
        .iter()
        .try_fold(outcome.start, |state, &m| state.apply(m))
        .unwrap();
    assert_eq!(replayed, outcome.state);
}

#[test]
fn default_config_matches_worked_example() {
    let config = SearchConfig::default();
    let goal = config.goal();

    let outcome = hill_climb(config.initial_state, &goal, &config.params());
    assert!(outcome.reached_goal(&goal));
}

#[test]
fn climb_from_goal_steps_away_and_back() {
    let goal = luger_goal();
    let outcome = hill_climb(*goal.state(), &goal, &SearchParams::default());

    // the blank has to move off the goal first; sliding it back is then the cheapest step
    assert_eq!(outcome.path, vec![Move::Up, Move::Down]);
    assert_eq!(outcome.cost, Some(1));
    assert!(outcome.reached_goal(&goal));
    assert_eq!(outcome.termination, Termination::Converged { iteration: 3 });
}

#[test]
fn seeded_restarts_are_deterministic() {
    let goal = luger_goal();
    let params = SearchParams {
        heuristic: Heuristic::Combined,
        restarts: 250,
        ..SearchParams::default()
    };

    let a = random_restart(&goal, &params, &mut ChaCha8Rng::seed_from_u64(2024));
    let b = random_restart(&goal, &params, &mut ChaCha8Rng::seed_from_u64(2024));
    assert_eq!(a, b);
    assert_eq!(a.restarts, 250);
}

#[test]
fn parallel_restarts_keep_sequential_tie_break() {
    let goal = luger_goal();
    let params = SearchParams {
        restarts: 500,
        reachable_restarts: true,
        ..SearchParams::default()
    };

    let sequential = random_restart(&goal, &params, &mut ChaCha8Rng::seed_from_u64(5));
    let parallel = random_restart_parallel(&goal, &params, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(sequential, parallel);
}

#[test]
fn reachable_restarts_share_goal_parity() {
    let goal = luger_goal();
    let params = SearchParams {
        restarts: 100,
        reachable_restarts: true,
        ..SearchParams::default()
    };

    let outcome = random_restart(&goal, &params, &mut ChaCha8Rng::seed_from_u64(17));
    let best = outcome.best.unwrap();
    assert!(best.state.same_parity(goal.state()));
    assert!(best.restart < 100);
}

#[test]
fn config_file_drives_search() {
    let path = std::env::temp_dir().join(format!("slider-hill-climb-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "heuristic = \"misplaced_tiles\"\nrestarts = 10\nrandom_seed = 3\n",
    )
    .unwrap();

    let config = SearchConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.heuristic, Heuristic::MisplacedTiles);
    let seed = config.random_seed.unwrap();
    let outcome = random_restart(
        &config.goal(),
        &config.params(),
        &mut ChaCha8Rng::seed_from_u64(seed),
    );
    assert_eq!(outcome.restarts, 10);
}
