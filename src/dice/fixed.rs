//! Test dice that cycle through a fixed sequence of outcomes.

use crate::error::{HogError, Result};

use super::Dice;

/// Dice that return `outcomes` in order, wrapping around forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestDice {
    outcomes: Vec<u32>,
    index: usize,
}

impl TestDice {
    /// Create dice from a non-empty list of outcomes, each at least 1.
    pub fn new(outcomes: Vec<u32>) -> Result<Self> {
        if outcomes.is_empty() || outcomes.contains(&0) {
            return Err(HogError::InvalidOutcomes(outcomes));
        }
        Ok(Self { outcomes, index: 0 })
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> u32 {
        let outcome = self.outcomes[self.index];
        self.index = (self.index + 1) % self.outcomes.len();
        outcome
    }
}

/// Dice that cycle deterministically through `outcomes`.
///
/// ```
/// use rust_hog::dice::{make_test_dice, Dice};
///
/// let mut dice = make_test_dice(&[4, 1]).unwrap();
/// assert_eq!(dice.roll(), 4);
/// assert_eq!(dice.roll(), 1);
/// assert_eq!(dice.roll(), 4);
/// ```
pub fn make_test_dice(outcomes: &[u32]) -> Result<TestDice> {
    TestDice::new(outcomes.to_vec())
}
