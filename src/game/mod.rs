//! The Hog turn loop.
//!
//! Players alternate turns, each rolling the number of dice their strategy
//! picks (or taking Piggy Points with zero dice), until one reaches the goal.
//! A player who triggers More Boar goes again. Commentary runs after every
//! turn.

mod play;

pub use play::{play, Game, GameBuilder, GameResult, TurnRecord};
