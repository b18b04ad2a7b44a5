//! A single turn: either roll dice or take Piggy Points.

use serde::{Deserialize, Serialize};

use crate::core::HogConfig;
use crate::dice::Dice;
use crate::error::{HogError, Result};

use super::scoring::{faces_points, piggy_points, roll_faces, Faces};

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Dice rolled. Empty when Piggy Points were taken.
    pub faces: Faces,
    /// Points scored this turn.
    pub points: u32,
}

impl TurnOutcome {
    /// Whether the turn used Piggy Points instead of rolling.
    #[must_use]
    pub fn is_piggy(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Play one turn and keep the rolled faces.
pub fn play_turn<D: Dice + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    dice: &mut D,
    config: &HogConfig,
) -> Result<TurnOutcome> {
    if num_rolls > config.max_rolls {
        return Err(HogError::TooManyDice {
            num_rolls,
            max: config.max_rolls,
        });
    }
    if opponent_score >= config.goal {
        return Err(HogError::GameOver {
            opponent_score,
            goal: config.goal,
        });
    }

    if num_rolls == 0 {
        return Ok(TurnOutcome {
            faces: Faces::new(),
            points: piggy_points(opponent_score),
        });
    }

    let faces = roll_faces(num_rolls, dice)?;
    let points = faces_points(&faces);
    Ok(TurnOutcome { faces, points })
}

/// Simulate a turn rolling `num_rolls` dice, which may be 0 to take Piggy Points.
///
/// Returns the points scored for the turn by the current player.
pub fn take_turn<D: Dice + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    dice: &mut D,
    goal: u32,
) -> Result<u32> {
    let config = HogConfig {
        goal,
        ..HogConfig::default()
    };
    play_turn(num_rolls, opponent_score, dice, &config).map(|outcome| outcome.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GOAL_SCORE;
    use crate::dice::make_test_dice;

    #[test]
    fn test_take_turn_rolls() {
        let mut dice = make_test_dice(&[4, 6, 6]).unwrap();
        assert_eq!(take_turn(2, 0, &mut dice, GOAL_SCORE), Ok(10));
    }

    #[test]
    fn test_take_turn_piggy_points_rolls_nothing() {
        let mut dice = make_test_dice(&[2, 3]).unwrap();
        assert_eq!(take_turn(0, 46, &mut dice, GOAL_SCORE), Ok(6));
        // Dice untouched by a zero-dice turn.
        assert_eq!(take_turn(1, 0, &mut dice, GOAL_SCORE), Ok(2));
    }

    #[test]
    fn test_take_turn_too_many_dice() {
        let mut dice = make_test_dice(&[3]).unwrap();
        assert_eq!(
            take_turn(11, 0, &mut dice, GOAL_SCORE),
            Err(HogError::TooManyDice { num_rolls: 11, max: 10 })
        );
    }

    #[test]
    fn test_take_turn_after_goal() {
        let mut dice = make_test_dice(&[3]).unwrap();
        assert_eq!(
            take_turn(2, 100, &mut dice, GOAL_SCORE),
            Err(HogError::GameOver { opponent_score: 100, goal: 100 })
        );
        assert_eq!(take_turn(2, 24, &mut dice, 25), Ok(6));
    }

    #[test]
    fn test_play_turn_respects_config_max() {
        let config = HogConfig::new().with_max_rolls(3);
        let mut dice = make_test_dice(&[5]).unwrap();
        assert_eq!(
            play_turn(4, 0, &mut dice, &config),
            Err(HogError::TooManyDice { num_rolls: 4, max: 3 })
        );

        let outcome = play_turn(3, 0, &mut dice, &config).unwrap();
        assert_eq!(outcome.points, 15);
        assert_eq!(outcome.faces.as_slice(), &[5, 5, 5]);
        assert!(!outcome.is_piggy());
    }

    #[test]
    fn test_play_turn_piggy_outcome() {
        let mut dice = make_test_dice(&[5]).unwrap();
        let outcome = play_turn(0, 19, &mut dice, &HogConfig::default()).unwrap();
        assert!(outcome.is_piggy());
        assert_eq!(outcome.points, 12);
    }
}
