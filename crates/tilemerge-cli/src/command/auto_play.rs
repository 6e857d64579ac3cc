use rand::Rng as _;
use tilemerge_engine::{Game, RngSeed};
use tilemerge_solver::playout;

use super::{GameArg, PolicyArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    #[clap(flatten)]
    game: GameArg,
    #[clap(flatten)]
    policy: PolicyArg,
    /// Stop after this many moves
    #[clap(long)]
    turn_limit: Option<usize>,
    /// Print the board after every move
    #[clap(long, default_value_t = false)]
    verbose: bool,
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg {
        game,
        policy,
        turn_limit,
        verbose,
    } = arg;

    let config = game.config()?;
    let mut make_policy = policy.policy_factory()?;
    let mut rng = game.seed().to_rng();
    let game_seed: RngSeed = rng.random();
    let mut policy = make_policy(rng.random());

    let mut game = Game::with_seed(config, game_seed);
    game.start()?;
    if *verbose {
        println!("{}\n", game.board());
    }

    let mut moves = 0;
    let stuck = loop {
        if turn_limit.is_some_and(|limit| moves >= limit) {
            break false;
        }
        let Some(direction) = playout::step(&mut game, &mut policy)? else {
            break true;
        };
        moves += 1;
        if *verbose {
            println!("Turn {}: {direction}", game.current_turn());
            println!("{}\n", game.board());
        }
    };

    println!("{}", game.board());
    println!(
        "Max value of {} in {} turns",
        game.largest_value(),
        game.current_turn()
    );
    eprintln!("Score: {}", game.score());
    if game.has_won() {
        eprintln!("Reached {}", config.win_value());
    }
    if !stuck {
        eprintln!("Stopped at turn limit");
    }
    Ok(())
}
