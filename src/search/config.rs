//! Search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration parameters for the construction + guided local search
/// engine.
///
/// The default mirrors a dispatch job: a fixed one-second budget, whatever
/// the problem size. Tests that need reproducible output drop the time
/// limit and bound the search by iterations instead.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_cvrp::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_time_limit(Duration::from_secs(3))
///     .with_max_iterations(1000)
///     .with_max_no_improve(100);
/// assert_eq!(config.time_limit, Some(Duration::from_secs(3)));
/// assert_eq!(config.max_iterations, 1000);
///
/// let deterministic = SearchConfig::default().without_time_limit();
/// assert!(deterministic.time_limit.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget for the whole solve, exact packing included (None:
    /// bounded by iterations only).
    pub time_limit: Option<Duration>,
    /// Maximum number of guided local search iterations (penalise + descend).
    pub max_iterations: usize,
    /// Stop after this many consecutive iterations without a new best.
    pub max_no_improve: usize,
    /// Scales the penalty weight lambda relative to the average arc cost of
    /// the first local optimum.
    pub penalty_factor: f64,
    /// Evaluate candidate moves on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: Some(Duration::from_secs(1)),
            max_iterations: 10_000,
            max_no_improve: 500,
            penalty_factor: 0.1,
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Removes the wall-clock budget.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit = None;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the maximum iterations without improvement.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the penalty factor.
    pub fn with_penalty_factor(mut self, factor: f64) -> Self {
        self.penalty_factor = factor;
        self
    }

    /// Enables or disables parallel move evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
