//! Game configuration.
//!
//! `HogConfig` holds the rule constants a game is played under. The defaults
//! are the standard game: first to 100, at most 10 dice per turn.

use serde::{Deserialize, Serialize};

/// The goal of Hog is to score 100 points.
pub const GOAL_SCORE: u32 = 100;

/// Largest number of dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

/// Rule constants for a game of Hog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HogConfig {
    /// The game ends when either score reaches this value.
    pub goal: u32,

    /// Largest number of dice allowed in a single turn.
    pub max_rolls: u32,
}

impl Default for HogConfig {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            max_rolls: MAX_ROLLS,
        }
    }
}

impl HogConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal score.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        assert!(goal > 0, "Goal must be positive");
        self.goal = goal;
        self
    }

    /// Set the maximum number of dice per turn (1 to `MAX_ROLLS`).
    #[must_use]
    pub fn with_max_rolls(mut self, max_rolls: u32) -> Self {
        assert!(
            (1..=MAX_ROLLS).contains(&max_rolls),
            "Max rolls must be 1-{}",
            MAX_ROLLS
        );
        self.max_rolls = max_rolls;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HogConfig::default();
        assert_eq!(config.goal, 100);
        assert_eq!(config.max_rolls, 10);
    }

    #[test]
    fn test_config_builder() {
        let config = HogConfig::new().with_goal(50).with_max_rolls(5);
        assert_eq!(config.goal, 50);
        assert_eq!(config.max_rolls, 5);
    }

    #[test]
    #[should_panic(expected = "Goal must be positive")]
    fn test_zero_goal() {
        let _ = HogConfig::new().with_goal(0);
    }

    #[test]
    #[should_panic(expected = "Max rolls must be 1-10")]
    fn test_max_rolls_above_limit() {
        let _ = HogConfig::new().with_max_rolls(11);
    }

    #[test]
    fn test_config_serde() {
        let config = HogConfig::new().with_goal(30);
        let json = serde_json::to_string(&config).unwrap();
        let back: HogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
