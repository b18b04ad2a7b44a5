//! Dice: sources of single die outcomes.
//!
//! A `Dice` value is anything that can produce one outcome per call. Fair dice
//! draw from a `GameRng`; test dice cycle through a fixed list so that game
//! outcomes are fully predictable. Plain closures work too.

mod fair;
mod fixed;

pub use fair::{four_sided, six_sided, FairDice};
pub use fixed::{make_test_dice, TestDice};

/// A source of die outcomes, each at least 1.
pub trait Dice {
    /// Roll once.
    fn roll(&mut self) -> u32;
}

impl<F> Dice for F
where
    F: FnMut() -> u32,
{
    fn roll(&mut self) -> u32 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_dice() {
        let mut next = 0;
        let mut dice = || {
            next += 1;
            next
        };
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.roll(), 2);
    }

    #[test]
    fn test_dyn_dice() {
        let mut inner = make_test_dice(&[3]).unwrap();
        let dice: &mut dyn Dice = &mut inner;
        assert_eq!(dice.roll(), 3);
    }
}
