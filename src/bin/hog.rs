use clap::Parser;
use rust_hog::experiments::{run_experiments, ExperimentConfig};

/// Play Hog
#[derive(Parser, Debug)]
#[command(name = "hog", about = "Play Hog")]
struct Args {
    /// Runs strategy experiments
    #[arg(short = 'r', long = "run-experiments", alias = "run_experiments")]
    run_experiments: bool,

    /// Calls averaged per measurement
    #[arg(long, default_value_t = ExperimentConfig::default().trials)]
    trials: u32,

    /// Seed for the dice
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Experiment settings, or `None` when experiments were not requested.
    fn experiment_config(&self) -> Option<ExperimentConfig> {
        self.run_experiments.then(|| {
            ExperimentConfig::new()
                .with_trials(self.trials)
                .with_seed(self.seed)
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match args.experiment_config() {
        Some(config) => {
            let report = run_experiments(&config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
        None => log::info!("nothing to do without --run-experiments"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_does_nothing() {
        let args = parse(&[]);
        assert!(!args.run_experiments);
        assert!(!args.json);
        assert_eq!(args.experiment_config(), None);
    }

    #[test]
    fn test_run_experiments_spellings() {
        for flag in ["-r", "--run-experiments", "--run_experiments"] {
            assert_eq!(
                parse(&[flag]).experiment_config(),
                Some(ExperimentConfig::default()),
                "flag {}",
                flag
            );
        }
    }

    #[test]
    fn test_trials_and_seed_reach_config() {
        let args = parse(&["--run_experiments", "--trials", "50", "--seed", "3", "--json"]);
        assert!(args.json);
        assert_eq!(
            args.experiment_config(),
            Some(ExperimentConfig::new().with_trials(50).with_seed(3))
        );
    }

    #[test]
    fn test_trials_without_run_flag_is_ignored() {
        assert_eq!(parse(&["--trials", "50"]).experiment_config(), None);
    }

    #[test]
    fn test_zero_trials_fails_the_run() {
        let config = parse(&["-r", "--trials", "0"]).experiment_config().unwrap();
        assert_eq!(
            run_experiments(&config).unwrap_err().to_string(),
            "trials count must be positive"
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["hog", "--run"]).is_err());
    }
}
