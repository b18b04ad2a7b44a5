//! # rust-hog
//!
//! The two-player dice game Hog: a simulator, pluggable commentary, and
//! simple strategies with an experiment harness to compare them.
//!
//! ## Rules
//!
//! 1. **Turns**: players alternate, each choosing 0 to 10 dice. Player 0 goes first.
//!
//! 2. **Sow Sad**: if any die shows 1 the turn scores 1, otherwise the sum.
//!
//! 3. **Piggy Points**: rolling zero dice scores the absolute difference of
//!    the opponent's tens and ones digits, plus 4.
//!
//! 4. **More Boar**: after scoring, a player whose largest digit beats the
//!    opponent's largest digit and whose smallest digit is below the
//!    opponent's smallest digit takes another turn.
//!
//! 5. **Goal**: the first player to reach 100 wins.
//!
//! ## Determinism
//!
//! All randomness comes from a seeded `GameRng`, and test dice replay a fixed
//! sequence, so every game and experiment is reproducible.
//!
//! ## Modules
//!
//! - `core`: Players, scores, RNG, configuration
//! - `dice`: Fair and fixed dice
//! - `rules`: Scoring rules and single turns
//! - `game`: The turn loop
//! - `commentary`: Announcements after each turn
//! - `strategy`: Dice-count strategies
//! - `experiments`: Averaging and win-rate measurements

pub mod core;
pub mod error;
pub mod dice;
pub mod rules;
pub mod game;
pub mod commentary;
pub mod strategy;
pub mod experiments;

// Re-export commonly used types
pub use crate::core::{next_player, GameRng, HogConfig, PlayerId, PlayerPair, Scores, GOAL_SCORE, MAX_ROLLS};

pub use crate::error::{HogError, Result};

pub use crate::dice::{four_sided, make_test_dice, six_sided, Dice, FairDice, TestDice};

pub use crate::rules::{more_boar, piggy_points, roll_dice, take_turn, TurnOutcome};

pub use crate::game::{play, Game, GameBuilder, GameResult, TurnRecord};

pub use crate::commentary::{
    announce_highest, announce_lead_changes, both, say_scores, silence,
    Announcer, Commentary, StdoutAnnouncer, Transcript,
};

pub use crate::strategy::{
    always_roll, more_boar_strategy, piggypoints_strategy,
    AlwaysRoll, MoreBoarStrategy, PiggyPointsStrategy, Strategy,
};

pub use crate::experiments::{
    average_win_rate, make_averaged, max_scoring_num_rolls, run_experiments, winner,
    ExperimentConfig, ExperimentReport, WinRate,
};
