//! Scoring rules: Sow Sad, Piggy Points, and More Boar.

use smallvec::SmallVec;

use crate::core::MAX_ROLLS;
use crate::dice::Dice;
use crate::error::{HogError, Result};

/// Outcomes of a single turn's dice, inline up to the maximum dice count.
pub type Faces = SmallVec<[u32; MAX_ROLLS as usize]>;

/// Roll `num_rolls` dice and keep every face.
///
/// All dice are rolled even after a 1 shows up, so a shared dice sequence
/// advances by exactly `num_rolls` outcomes.
pub fn roll_faces<D: Dice + ?Sized>(num_rolls: u32, dice: &mut D) -> Result<Faces> {
    if num_rolls == 0 {
        return Err(HogError::NoDice);
    }
    if num_rolls > MAX_ROLLS {
        return Err(HogError::TooManyDice {
            num_rolls,
            max: MAX_ROLLS,
        });
    }
    Ok((0..num_rolls).map(|_| dice.roll()).collect())
}

/// Points for a set of faces: 1 if any face is 1, else their sum.
#[must_use]
pub fn faces_points(faces: &[u32]) -> u32 {
    if faces.contains(&1) {
        1
    } else {
        faces.iter().sum()
    }
}

/// Simulate rolling `dice` exactly `num_rolls` times.
///
/// Returns the sum of the outcomes unless any of them is 1, in which case
/// the turn scores 1.
pub fn roll_dice<D: Dice + ?Sized>(num_rolls: u32, dice: &mut D) -> Result<u32> {
    roll_faces(num_rolls, dice).map(|faces| faces_points(&faces))
}

/// Points scored from rolling zero dice, given the opponent's score.
///
/// The absolute difference between the opponent's tens and ones digits, plus 4.
#[must_use]
pub fn piggy_points(opponent_score: u32) -> u32 {
    let ones = opponent_score % 10;
    let tens = opponent_score % 100 / 10;
    ones.abs_diff(tens) + 4
}

/// Smallest and largest decimal digit of `n`.
fn digit_extremes(mut n: u32) -> (u32, u32) {
    let mut lowest = n % 10;
    let mut highest = lowest;
    n /= 10;
    while n > 0 {
        let digit = n % 10;
        lowest = lowest.min(digit);
        highest = highest.max(digit);
        n /= 10;
    }
    (lowest, highest)
}

/// Whether the player whose score just changed gets an extra turn.
///
/// True when the player's largest digit beats the opponent's largest digit and
/// the player's smallest digit is below the opponent's smallest digit.
///
/// ```
/// use rust_hog::rules::more_boar;
///
/// assert!(more_boar(38, 44));
/// assert!(!more_boar(22, 43));
/// ```
#[must_use]
pub fn more_boar(player_score: u32, opponent_score: u32) -> bool {
    let (player_low, player_high) = digit_extremes(player_score);
    let (opponent_low, opponent_high) = digit_extremes(opponent_score);
    player_high > opponent_high && player_low < opponent_low
}
