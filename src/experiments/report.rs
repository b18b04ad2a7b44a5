//! The strategy experiment report.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::dice::six_sided;
use crate::error::Result;
use crate::strategy::{always_roll, MoreBoarStrategy, PiggyPointsStrategy, Strategy};

use super::averaged::{average_win_rate, max_scoring_num_rolls};
use super::config::ExperimentConfig;

/// Win rate of one named strategy against the baseline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinRate {
    /// Strategy name as printed in the report.
    pub strategy: String,
    /// Fraction of games won, averaged over both seats.
    pub win_rate: f64,
}

/// Results of `run_experiments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Configuration the report was produced with.
    pub config: ExperimentConfig,
    /// Best number of dice for a fair six-sided die.
    pub six_sided_max: u32,
    /// Win rates in the order they were measured.
    pub win_rates: Vec<WinRate>,
}

impl std::fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Max scoring num rolls for six-sided dice: {}", self.six_sided_max)?;
        for entry in &self.win_rates {
            writeln!(f, "{} win rate: {}", entry.strategy, entry.win_rate)?;
        }
        Ok(())
    }
}

/// Run the strategy experiments.
///
/// Each measurement draws from its own RNG stream derived from the seed, so
/// adding or reordering strategies leaves the other numbers unchanged.
pub fn run_experiments(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let root = GameRng::new(config.seed);

    log::info!("{:<32}{:<32}", "measuring max scoring rolls", config.trials);
    let mut dice = six_sided(root.for_context("max_scoring_num_rolls"));
    let six_sided_max = max_scoring_num_rolls(&mut dice, config.trials)?;

    let baseline = always_roll(config.baseline_rolls);
    let piggypoints = PiggyPointsStrategy::default();
    let more_boar = MoreBoarStrategy::default();
    let strategies = [
        (
            format!("always_roll({})", config.baseline_rolls),
            &baseline as &dyn Strategy,
        ),
        ("piggypoints_strategy".to_string(), &piggypoints as &dyn Strategy),
        ("more_boar_strategy".to_string(), &more_boar as &dyn Strategy),
    ];

    let mut win_rates = Vec::with_capacity(strategies.len());
    for (name, strategy) in strategies {
        log::info!("{:<32}{:<32}", "measuring win rate", name);
        let mut rng = root.for_context(&name);
        let win_rate = average_win_rate(strategy, &baseline, config.trials, &mut rng)?;
        win_rates.push(WinRate {
            strategy: name,
            win_rate,
        });
    }

    Ok(ExperimentReport {
        config: *config,
        six_sided_max,
        win_rates,
    })
}
