use std::path::PathBuf;

use tilemerge_solver::batch_runner::{self, BatchParams};

use crate::util::Output;

use super::{GameArg, PolicyArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BatchArg {
    #[clap(flatten)]
    game: GameArg,
    #[clap(flatten)]
    policy: PolicyArg,
    /// Number of games to play
    #[clap(long, default_value_t = 1000)]
    runs: usize,
    /// Log progress every this many games (0 disables)
    #[clap(long, default_value_t = 1000)]
    progress_interval: usize,
    /// Write the JSON report to this file instead of stdout
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BatchArg) -> anyhow::Result<()> {
    let BatchArg {
        game,
        policy,
        runs,
        progress_interval,
        output,
    } = arg;

    let params = BatchParams {
        runs: *runs,
        progress_interval: *progress_interval,
        config: game.config()?,
    };
    let report = batch_runner::run_batch(&params, game.seed(), policy.policy_factory()?)?;

    eprintln!(
        "Results - Total Games: {} Max Value: {}",
        report.total_games, report.max_value
    );
    eprintln!("Max Value Breakdown:");
    for (value, count) in report.max_value_counts.iter().rev() {
        #[expect(clippy::cast_precision_loss)]
        let percent = count as f64 * 100.0 / report.total_games as f64;
        eprintln!("  {value:>6}: {count:>6} ({percent:5.1}%)");
    }
    eprintln!("Wins: {}", report.wins);
    if let Some(stats) = &report.score_stats {
        eprintln!("Score Stats:");
        eprintln!("  Min:    {:.0}", stats.min);
        eprintln!("  Max:    {:.0}", stats.max);
        eprintln!("  Mean:   {:.1}", stats.mean);
        eprintln!("  Median: {:.0}", stats.median);
        eprintln!("  StdDev: {:.1}", stats.std_dev);
    }

    Output::save_json(&report, output.clone())?;
    Ok(())
}
