//! Strategy experiments.
//!
//! Measures which dice count scores best on average and how often each
//! built-in strategy beats a fixed baseline, averaged over many seeded games.

pub mod averaged;
pub mod config;
pub mod report;

pub use averaged::{average_win_rate, make_averaged, max_scoring_num_rolls, winner};
pub use config::ExperimentConfig;
pub use report::{run_experiments, ExperimentReport, WinRate};
