//! Core types: players, scores, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{next_player, PlayerId, PlayerPair, Scores};
pub use rng::GameRng;
pub use config::{HogConfig, GOAL_SCORE, MAX_ROLLS};
