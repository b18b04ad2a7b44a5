//! Hog scoring rules.
//!
//! - **Sow Sad**: rolling any 1 makes the whole turn worth 1 point
//! - **Piggy Points**: rolling zero dice scores from the opponent's digits
//! - **More Boar**: a player whose digits straddle the opponent's goes again

pub mod scoring;
pub mod turn;

pub use scoring::{faces_points, more_boar, piggy_points, roll_dice, roll_faces, Faces};
pub use turn::{play_turn, take_turn, TurnOutcome};
