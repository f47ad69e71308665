//! Search configuration.
//!
//! Boards, heuristic and search bounds can be loaded from TOML so runs can be
//! repeated without code changes. Every field is optional; missing fields take
//! the defaults below.
//!
//! ```
//! use slider_hill_climb::{Heuristic, SearchConfig};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     heuristic = "combined"
//!     restarts = 500
//!     random_seed = 7
//!     goal_state = [1, 2, 3, 4, 5, 6, 7, 8, 0]
//! "#).unwrap();
//!
//! assert_eq!(config.heuristic, Heuristic::Combined);
//! assert_eq!(config.params().restarts, 500);
//! assert_eq!(config.iterations, 20);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::climb::{SearchParams, DEFAULT_DEPTH_LIMIT, DEFAULT_ITERATIONS, DEFAULT_RESTARTS};
use crate::goal::Goal;
use crate::heuristic::Heuristic;
use crate::puzzle::State;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything a run needs besides a source of randomness.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Board the plain climb starts from.
    pub initial_state: State,

    /// Target board. Other arrangements could serve as goals, but a run commits to one.
    pub goal_state: State,

    pub heuristic: Heuristic,

    /// Climb steps allowed per attempt.
    pub iterations: usize,

    pub depth_limit: u32,

    pub restarts: usize,

    /// Seed for the restart shuffles. Drawn at startup when absent.
    pub random_seed: Option<u64>,

    /// Spread restarts across threads.
    pub parallel: bool,

    /// Restart only from boards that can reach the goal.
    pub reachable_restarts: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_state: State::from_permutation([1, 2, 3, 8, 6, 0, 7, 5, 4]),
            goal_state: State::from_permutation([1, 2, 3, 8, 0, 4, 7, 6, 5]),
            heuristic: Heuristic::default(),
            iterations: DEFAULT_ITERATIONS,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            restarts: DEFAULT_RESTARTS,
            random_seed: None,
            parallel: false,
            reachable_restarts: false,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string. Boards are validated while parsing.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would make a search meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid("iterations must be at least 1".into()));
        }
        Ok(())
    }

    pub fn with_initial_state(mut self, state: State) -> Self {
        self.initial_state = state;
        self
    }

    pub fn with_goal_state(mut self, state: State) -> Self {
        self.goal_state = state;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_reachable_restarts(mut self, reachable: bool) -> Self {
        self.reachable_restarts = reachable;
        self
    }

    pub fn goal(&self) -> Goal {
        Goal::new(self.goal_state)
    }

    pub fn params(&self) -> SearchParams {
        SearchParams {
            heuristic: self.heuristic,
            iterations: self.iterations,
            depth_limit: self.depth_limit,
            restarts: self.restarts,
            reachable_restarts: self.reachable_restarts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = SearchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.params(), SearchParams::default());
        assert_eq!(config.goal().position(0), 4);
    }

    #[test]
    fn toml_overrides_fields() {
        let config = SearchConfig::from_toml_str(
            r#"
            initial_state = [8, 1, 3, 2, 0, 4, 7, 6, 5]
            heuristic = "misplaced_tiles"
            depth_limit = 15
            parallel = true
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_state.tile(0), 8);
        assert_eq!(config.heuristic, Heuristic::MisplacedTiles);
        assert_eq!(config.depth_limit, 15);
        assert!(config.parallel);
        assert_eq!(config.restarts, DEFAULT_RESTARTS);
    }

    #[test]
    fn malformed_board_rejected() {
        let err = SearchConfig::from_toml_str("goal_state = [1, 2, 3, 8, 0, 4, 7, 6, 6]")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("more than once"));

        let err = SearchConfig::from_toml_str("initial_state = [1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("expected 9 tiles"));
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(SearchConfig::from_toml_str("restart = 3").is_err());
    }

    #[test]
    fn zero_iterations_rejected() {
        let err = SearchConfig::from_toml_str("iterations = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = SearchConfig::new()
            .with_heuristic(Heuristic::Combined)
            .with_random_seed(99);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SearchConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SearchConfig::load("/nonexistent/search.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
