//! Averaging and win-rate measurements.

use crate::core::{GameRng, PlayerId, MAX_ROLLS};
use crate::dice::{six_sided, Dice};
use crate::error::{HogError, Result};
use crate::game::play;
use crate::rules::roll_dice;
use crate::strategy::Strategy;

/// Return a function that averages `trials_count` calls of `function`.
///
/// Fails up front when `trials_count` is zero; the returned function fails
/// with the first error `function` produces.
pub fn make_averaged<F>(mut function: F, trials_count: u32) -> Result<impl FnMut() -> Result<f64>>
where
    F: FnMut() -> Result<f64>,
{
    if trials_count == 0 {
        return Err(HogError::NoTrials);
    }
    Ok(move || {
        let mut total = 0.0;
        for _ in 0..trials_count {
            total += function()?;
        }
        Ok(total / f64::from(trials_count))
    })
}

/// The number of dice (1 to 10) with the highest average turn score.
///
/// Ties go to the smaller number of dice.
pub fn max_scoring_num_rolls<D: Dice + ?Sized>(dice: &mut D, trials_count: u32) -> Result<u32> {
    let mut best = (1, f64::MIN);
    for num_rolls in 1..=MAX_ROLLS {
        let mut averaged = make_averaged(|| roll_dice(num_rolls, dice).map(f64::from), trials_count)?;
        let average = averaged()?;
        log::debug!("{:<32}{:<8}{:.4}", "average turn score", num_rolls, average);
        if average > best.1 {
            best = (num_rolls, average);
        }
    }
    Ok(best.0)
}

/// Play one game and report the winning player.
pub fn winner<D: Dice + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut D,
) -> Result<PlayerId> {
    let (score0, score1) = play(strategy0, strategy1, dice)?;
    Ok(if score0 > score1 {
        PlayerId::ZERO
    } else {
        PlayerId::ONE
    })
}

/// Fraction of games `strategy` wins against `baseline`.
///
/// Averages the win rate when moving first and when moving second, each over
/// `trials_count` games. Every game rolls a fresh six-sided die forked from `rng`.
pub fn average_win_rate(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    trials_count: u32,
    rng: &mut GameRng,
) -> Result<f64> {
    let mut seat_average = |strategy0: &dyn Strategy, strategy1: &dyn Strategy| -> Result<f64> {
        let mut averaged = make_averaged(
            || winner(strategy0, strategy1, &mut six_sided(rng.fork())).map(|p| p.index() as f64),
            trials_count,
        )?;
        averaged()
    };

    let win_rate_as_player_0 = 1.0 - seat_average(strategy, baseline)?;
    let win_rate_as_player_1 = seat_average(baseline, strategy)?;

    Ok((win_rate_as_player_0 + win_rate_as_player_1) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::make_test_dice;
    use crate::strategy::always_roll;

    #[test]
    fn test_make_averaged_roll_dice() {
        let mut dice = make_test_dice(&[4, 2, 5, 1]).unwrap();
        let mut averaged_dice =
            make_averaged(|| roll_dice(1, &mut dice).map(f64::from), 1000).unwrap();
        assert_eq!(averaged_dice().unwrap(), 3.0);
    }

    #[test]
    fn test_make_averaged_zero_trials() {
        assert!(matches!(make_averaged(|| Ok(1.0), 0), Err(HogError::NoTrials)));
    }

    #[test]
    fn test_make_averaged_propagates_errors() {
        let mut dice = make_test_dice(&[3]).unwrap();
        let mut averaged = make_averaged(|| roll_dice(0, &mut dice).map(f64::from), 10).unwrap();
        assert_eq!(averaged(), Err(HogError::NoDice));
    }

    #[test]
    fn test_max_scoring_num_rolls() {
        let mut dice = make_test_dice(&[1, 6]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 1000), Ok(1));
    }

    #[test]
    fn test_max_scoring_prefers_fewer_dice_on_tie() {
        // Always 1: every dice count averages exactly 1.
        let mut dice = make_test_dice(&[1]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 10), Ok(1));
    }

    #[test]
    fn test_max_scoring_without_ones() {
        // Never a 1, so more dice always score more.
        let mut dice = make_test_dice(&[3, 5]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 10), Ok(10));
    }

    #[test]
    fn test_winner() {
        let mut dice = make_test_dice(&[5]).unwrap();
        assert_eq!(winner(&always_roll(10), &always_roll(1), &mut dice), Ok(PlayerId::ZERO));
        let mut dice = make_test_dice(&[5]).unwrap();
        assert_eq!(winner(&always_roll(1), &always_roll(10), &mut dice), Ok(PlayerId::ONE));
    }

    #[test]
    fn test_average_win_rate_against_itself_is_fair() {
        let mut rng = GameRng::new(11);
        let rate = average_win_rate(&always_roll(6), &always_roll(6), 200, &mut rng).unwrap();
        assert!((0.35..=0.65).contains(&rate), "rate {}", rate);
    }

    #[test]
    fn test_average_win_rate_deterministic() {
        let a = average_win_rate(&always_roll(4), &always_roll(6), 50, &mut GameRng::new(3));
        let b = average_win_rate(&always_roll(4), &always_roll(6), 50, &mut GameRng::new(3));
        assert_eq!(a, b);
    }
}
