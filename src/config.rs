//! Solver configuration

use std::time::Duration;

/// Default per-turn compute budget
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(5);

/// Precomputed optimal first guess
///
/// The exhaustive first-turn search is identical every game, so its result
/// is baked in rather than recomputed.
pub const OPTIMAL_FIRST_GUESS: &str = "SALET";

/// Tunable knobs for guess selection
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Soft per-turn compute budget
    pub time_budget: Duration,
    /// Worker pool size; `None` derives it from available parallelism
    pub max_workers: Option<usize>,
    /// First-turn guess, returned without any search
    pub first_guess: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            max_workers: None,
            first_guess: OPTIMAL_FIRST_GUESS.to_string(),
        }
    }
}

impl SolverConfig {
    /// Config with a specific time budget, other knobs at defaults
    #[must_use]
    pub fn with_time_budget(time_budget: Duration) -> Self {
        Self {
            time_budget,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.time_budget, Duration::from_secs(5));
        assert_eq!(config.max_workers, None);
        assert_eq!(config.first_guess, "SALET");
    }

    #[test]
    fn with_time_budget_overrides_only_budget() {
        let config = SolverConfig::with_time_budget(Duration::from_millis(100));
        assert_eq!(config.time_budget, Duration::from_millis(100));
        assert_eq!(config.first_guess, OPTIMAL_FIRST_GUESS);
    }
}
