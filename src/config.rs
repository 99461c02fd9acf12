//! Configuration options for the search engines and the move exchange
//!
//! Budgets are passed into each engine explicitly rather than baked in as
//! constants. Use the builder methods to derive a configuration from the
//! defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::{AgentError, Result};

/// Configuration for the alpha-beta engine
///
/// # Example
///
/// ```
/// use kinrow_agent::AlphaBetaConfig;
///
/// let config = AlphaBetaConfig::default().with_depth_limit(6);
/// assert_eq!(config.depth_limit, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaBetaConfig {
    /// Plies searched from the root, counting the candidate move itself
    pub depth_limit: usize,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        AlphaBetaConfig { depth_limit: 4 }
    }
}

impl AlphaBetaConfig {
    /// Sets the depth limit
    pub fn with_depth_limit(mut self, depth: usize) -> Self {
        self.depth_limit = depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth_limit == 0 {
            return Err(AgentError::InvalidConfiguration(
                "depth limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the MCTS engine
///
/// # Example
///
/// ```
/// use kinrow_agent::MctsConfig;
/// use std::time::Duration;
///
/// let config = MctsConfig::default()
///     .with_max_time(Duration::from_secs(2))
///     .with_max_iterations(50_000)
///     .with_exploration_weight(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Wall-clock budget for growing the tree
    pub max_time: Duration,

    /// Optional cap on completed iterations; whichever budget runs out first
    /// stops the search
    pub max_iterations: Option<usize>,

    /// Weight of the UCB1 exploration term. Zero selects on win rate alone.
    pub exploration_weight: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            max_time: Duration::from_secs(5),
            max_iterations: None,
            exploration_weight: 0.0,
        }
    }
}

impl MctsConfig {
    /// Sets the wall-clock budget
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = duration;
        self
    }

    /// Caps the number of iterations
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Sets the UCB1 exploration weight
    pub fn with_exploration_weight(mut self, weight: f64) -> Self {
        self.exploration_weight = weight;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.exploration_weight.is_finite() || self.exploration_weight < 0.0 {
            return Err(AgentError::InvalidConfiguration(format!(
                "exploration weight must be a finite non-negative number, got {}",
                self.exploration_weight
            )));
        }
        if self.max_time.is_zero() && self.max_iterations.is_none() {
            return Err(AgentError::InvalidConfiguration(
                "zero time budget without an iteration cap".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the file-based move exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Directory holding `xmoves.txt` and `omoves.txt`
    pub directory: PathBuf,

    /// Delay between re-reads of an existing opponent log
    pub poll_interval: Duration,

    /// Delay between checks for an opponent log that does not exist yet
    pub missing_file_interval: Duration,

    /// Give up waiting for a move after this long. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        ExchangeConfig {
            directory: PathBuf::from("."),
            poll_interval: Duration::from_secs(1),
            missing_file_interval: Duration::from_millis(100),
            timeout: None,
        }
    }
}

impl ExchangeConfig {
    /// Sets the directory for both move logs
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Sets the re-read delay
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the delay used while the opponent log is missing
    pub fn with_missing_file_interval(mut self, interval: Duration) -> Self {
        self.missing_file_interval = interval;
        self
    }

    /// Bounds the wait for each opponent move
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval.is_zero() || self.missing_file_interval.is_zero() {
            return Err(AgentError::InvalidConfiguration(
                "poll intervals must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
