use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tilemerge_engine::{GameConfig, RngSeed};
use tilemerge_solver::{
    move_scorer::ScoreWeights,
    policy::{DirectionPolicy, PolicyKind},
};
use tilemerge_training::tuner::TunerParams;

use crate::util;

use self::{auto_play::AutoPlayArg, batch::BatchArg, tune::TuneArg};

mod auto_play;
mod batch;
mod tune;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play one game with a solver and print the final board
    AutoPlay(#[clap(flatten)] AutoPlayArg),
    /// Play many games with a solver and report the largest tiles reached
    Batch(#[clap(flatten)] BatchArg),
    /// Tune the move-scoring weights
    Tune(#[clap(flatten)] TuneArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::AutoPlay(AutoPlayArg::default())) {
        Mode::AutoPlay(arg) => auto_play::run(&arg)?,
        Mode::Batch(arg) => batch::run(&arg)?,
        Mode::Tune(arg) => tune::run(&arg)?,
    }
    Ok(())
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Width and height of the board
    #[clap(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    size: usize,
    /// Tile value that wins the game
    #[clap(long, default_value_t = GameConfig::DEFAULT_WIN_VALUE)]
    win_value: u32,
    /// Random seed (a fresh one is drawn if omitted)
    #[clap(long)]
    seed: Option<u128>,
}

impl Default for GameArg {
    fn default() -> Self {
        Self {
            size: GameConfig::DEFAULT_SIZE,
            win_value: GameConfig::DEFAULT_WIN_VALUE,
            seed: None,
        }
    }
}

impl GameArg {
    fn config(&self) -> anyhow::Result<GameConfig> {
        GameConfig::new(self.size, self.win_value, GameConfig::DEFAULT_BASE_VALUE)
            .context("Invalid game configuration")
    }

    fn seed(&self) -> RngSeed {
        let seed = self.seed.unwrap_or_else(rand::random);
        eprintln!("Seed: {seed}");
        RngSeed::from_u128(seed)
    }
}

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct PolicyArg {
    /// Solver to use (random, circular, avoidup, leftcorner, simplescore, weighted)
    #[clap(long, default_value_t = PolicyKind::default())]
    policy: PolicyKind,
    /// Tuned weights file (JSON) for the weighted solver
    #[clap(long)]
    weights: Option<PathBuf>,
}

impl PolicyArg {
    fn weights(&self) -> anyhow::Result<ScoreWeights> {
        match &self.weights {
            Some(path) => {
                let model = util::read_weights_file(path)?;
                eprintln!("Loaded weights \"{}\": {:?}", model.name, model.weights);
                Ok(model.weights)
            }
            None => Ok(TunerParams::START_WEIGHTS),
        }
    }

    fn policy_factory(&self) -> anyhow::Result<impl FnMut(RngSeed) -> Box<dyn DirectionPolicy>> {
        let kind = self.policy;
        let weights = self.weights()?;
        if self.weights.is_some() && kind != PolicyKind::Weighted {
            log::warn!("--weights is only used by the weighted solver (selected: {kind})");
        }
        Ok(move |seed| kind.build(seed, weights))
    }
}
