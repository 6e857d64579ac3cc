use std::path::PathBuf;

use chrono::Utc;
use tilemerge_training::tuner::{self, TunerParams};

use crate::{model::tuned_weights::TunedWeights, util::Output};

use super::GameArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TuneArg {
    #[clap(flatten)]
    game: GameArg,
    /// Number of generations
    #[clap(long, default_value_t = 10)]
    generations: usize,
    /// Games played per candidate
    #[clap(long, default_value_t = 100)]
    playouts: usize,
    /// Amount each weight is shifted to build neighbors
    #[clap(long, default_value_t = TunerParams::DEFAULT_STEP)]
    step: i32,
    /// Name stored in the weights file
    #[clap(long, default_value = "tuned")]
    name: String,
    /// Output file path
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &TuneArg) -> anyhow::Result<()> {
    let TuneArg {
        game,
        generations,
        playouts,
        step,
        name,
        output,
    } = arg;

    let params = TunerParams {
        generations: *generations,
        playouts_per_candidate: *playouts,
        step: *step,
        start: TunerParams::START_WEIGHTS,
        config: game.config()?,
    };
    let result = tuner::tune(&params, game.seed())?;

    for report in &result.generations {
        eprintln!("Generation #{}:", report.generation);
        for (i, candidate) in report.candidates.iter().enumerate() {
            let mark = if i == report.best_index { '*' } else { ' ' };
            eprintln!(
                "  {mark} {:>5} {:>5} => {:.1}",
                candidate.weights.empty_space, candidate.weights.merge, candidate.fitness
            );
        }
    }

    let Some(mean_score) = result.fitness else {
        eprintln!("No generations run; nothing to save");
        return Ok(());
    };
    let model = TunedWeights {
        name: name.clone(),
        trained_at: Utc::now(),
        mean_score,
        weights: result.best,
    };
    Output::save_json(&model, output.clone())?;

    eprintln!();
    eprintln!("Weights saved successfully");
    if let Some(path) = &output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Name: {}", model.name);
    eprintln!("  Trained at: {}", model.trained_at);
    eprintln!("  Mean score: {:.1}", model.mean_score);
    eprintln!(
        "  Weights: empty_space={} merge={}",
        model.weights.empty_space, model.weights.merge
    );

    Ok(())
}
