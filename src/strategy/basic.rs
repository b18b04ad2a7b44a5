//! The built-in strategies.

use serde::{Deserialize, Serialize};

use crate::rules::{more_boar, piggy_points};

use super::Strategy;

/// Piggy Points needed before the threshold strategies stop rolling.
pub const DEFAULT_CUTOFF: u32 = 8;

/// Dice the threshold strategies roll otherwise.
pub const DEFAULT_NUM_ROLLS: u32 = 6;

/// Always rolls the same number of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlwaysRoll(pub u32);

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }
}

/// A strategy that always rolls `n` dice.
///
/// ```
/// use rust_hog::strategy::{always_roll, Strategy};
///
/// let strategy = always_roll(5);
/// assert_eq!(strategy.num_rolls(0, 0), 5);
/// assert_eq!(strategy.num_rolls(99, 99), 5);
/// ```
pub fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll(n)
}

/// Takes Piggy Points when they are worth at least `cutoff`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiggyPointsStrategy {
    /// Smallest Piggy Points worth taking.
    pub cutoff: u32,
    /// Dice rolled when Piggy Points fall short.
    pub num_rolls: u32,
}

impl Default for PiggyPointsStrategy {
    fn default() -> Self {
        piggypoints_strategy(DEFAULT_CUTOFF, DEFAULT_NUM_ROLLS)
    }
}

impl Strategy for PiggyPointsStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if piggy_points(opponent_score) >= self.cutoff {
            0
        } else {
            self.num_rolls
        }
    }
}

/// Rolls 0 dice if that gives at least `cutoff` points, `num_rolls` otherwise.
pub fn piggypoints_strategy(cutoff: u32, num_rolls: u32) -> PiggyPointsStrategy {
    PiggyPointsStrategy { cutoff, num_rolls }
}

/// Takes Piggy Points when they earn an extra turn or reach `cutoff`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoreBoarStrategy {
    /// Smallest Piggy Points worth taking without an extra turn.
    pub cutoff: u32,
    /// Dice rolled when rolling 0 gains nothing.
    pub num_rolls: u32,
}

impl Default for MoreBoarStrategy {
    fn default() -> Self {
        more_boar_strategy(DEFAULT_CUTOFF, DEFAULT_NUM_ROLLS)
    }
}

impl Strategy for MoreBoarStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let piggy = piggy_points(opponent_score);
        if more_boar(score.saturating_add(piggy), opponent_score) || piggy >= self.cutoff {
            0
        } else {
            self.num_rolls
        }
    }
}

/// Rolls 0 dice when that triggers an extra turn, or when it gives at least
/// `cutoff` points. Otherwise rolls `num_rolls`.
pub fn more_boar_strategy(cutoff: u32, num_rolls: u32) -> MoreBoarStrategy {
    MoreBoarStrategy { cutoff, num_rolls }
}
