//! Error types for Hog.

use thiserror::Error;

/// Input-contract violations raised by the rules, the turn loop, and the experiments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HogError {
    /// `roll_dice` was asked to roll zero dice.
    #[error("must roll at least once")]
    NoDice,

    /// A strategy or caller asked for more dice than a turn allows.
    #[error("cannot roll {num_rolls} dice, at most {max} allowed")]
    TooManyDice {
        /// Requested number of dice
        num_rolls: u32,
        /// Largest legal number of dice
        max: u32,
    },

    /// A turn was requested after the opponent already reached the goal.
    #[error("the game should be over: opponent has {opponent_score} of {goal}")]
    GameOver {
        /// Score of the player not taking the turn
        opponent_score: u32,
        /// Goal score of the game
        goal: u32,
    },

    /// Player index outside 0 and 1.
    #[error("invalid player {0}, expected 0 or 1")]
    InvalidPlayer(u8),

    /// Averaging over zero trials.
    #[error("trials count must be positive")]
    NoTrials,

    /// Test dice need at least one outcome, each at least 1.
    #[error("invalid test dice outcomes: {0:?}")]
    InvalidOutcomes(Vec<u32>),
}

/// Result type alias for Hog operations
pub type Result<T> = std::result::Result<T, HogError>;
