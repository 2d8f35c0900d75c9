//! Random-play driver.
//!
//! Loads a game from a game string, plays independent uniformly random
//! trajectories in parallel, and reports mean returns per player.
//!
//! Example: `simulate --game "bertrand_oligopoly(players=3,num_turns=20)" --episodes 64`

use bertrand::*;
use clap::Parser;
use colored::Colorize;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Play random Bertrand oligopoly trajectories", long_about = None)]
struct Args {
    /// Game string, `name(key=value,...)`.
    #[arg(long, default_value = GAME_NAME)]
    game: String,
    #[arg(long, default_value_t = 16)]
    episodes: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Print the final state of the first episode.
    #[arg(long)]
    show: bool,
    #[arg(short, long)]
    verbose: bool,
}

/// Plays one trajectory to the end with uniformly random prices.
fn episode(game: &dyn Game, seed: u64) -> Box<dyn State> {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut state = game.new_initial_state();
    while !state.is_terminal() {
        let joint = (0..game.num_players())
            .map(|p| state.legal_actions(Turn::from(p)))
            .map(|legal| legal[rng.random_range(0..legal.len())])
            .collect::<Vec<Action>>();
        state.apply_actions(&joint);
    }
    state
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose);
    let game = load_game(&args.game)?;
    log::info!("simulating {} episodes of {}", args.episodes, game.to_game_string());
    let finals = (0..args.episodes)
        .into_par_iter()
        .map(|i| episode(game.as_ref(), args.seed.wrapping_add(i as u64)))
        .collect::<Vec<_>>();
    for (i, state) in finals.iter().enumerate() {
        log::debug!("episode {} returns {:?}", i, state.returns());
    }
    if args.show {
        if let Some(state) = finals.first() {
            println!("{}", state);
        }
    }
    let n = game.num_players();
    let mut means = vec![0.; n];
    for state in finals.iter() {
        for (mean, r) in means.iter_mut().zip(state.returns()) {
            *mean += r / finals.len().max(1) as Utility;
        }
    }
    println!("{}", "mean returns".bold());
    for (p, mean) in means.iter().enumerate() {
        println!("  {} {:>+12.6}", Turn::from(p).to_string().cyan(), mean);
    }
    println!(
        "  {} [{:.4}, {:.4}]",
        "bounds".dimmed(),
        game.min_utility(),
        game.max_utility()
    );
    Ok(())
}
