//! Experiment configuration.

use serde::{Deserialize, Serialize};

use crate::strategy::DEFAULT_NUM_ROLLS;

/// Configuration for the strategy experiments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Calls averaged per measurement (dice rolls or games).
    pub trials: u32,

    /// Seed for every dice stream used by the experiments.
    pub seed: u64,

    /// Dice rolled each turn by the baseline strategy.
    pub baseline_rolls: u32,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: 0,
            baseline_rolls: DEFAULT_NUM_ROLLS,
        }
    }
}

impl ExperimentConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trials per measurement.
    #[must_use]
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the dice count of the baseline strategy.
    #[must_use]
    pub fn with_baseline_rolls(mut self, rolls: u32) -> Self {
        self.baseline_rolls = rolls;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::default();
        assert_eq!(config.trials, 1000);
        assert_eq!(config.baseline_rolls, 6);
    }

    #[test]
    fn test_builder() {
        let config = ExperimentConfig::new()
            .with_trials(50)
            .with_seed(7)
            .with_baseline_rolls(4);
        assert_eq!(config, ExperimentConfig { trials: 50, seed: 7, baseline_rolls: 4 });
    }
}
