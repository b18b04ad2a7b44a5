//! Strategies: how many dice to roll given both scores.
//!
//! A strategy sees its own score and the opponent's score and answers with a
//! dice count from 0 to 10, where 0 takes Piggy Points. Closures of type
//! `Fn(u32, u32) -> u32` are strategies too.

mod basic;

pub use basic::{
    always_roll, more_boar_strategy, piggypoints_strategy, AlwaysRoll, MoreBoarStrategy,
    PiggyPointsStrategy, DEFAULT_CUTOFF, DEFAULT_NUM_ROLLS,
};

/// Maps (own score, opponent score) to a number of dice.
pub trait Strategy {
    /// Number of dice to roll this turn.
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> u32,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}
