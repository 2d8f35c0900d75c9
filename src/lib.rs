//! Repeated Bertrand price competition with logit demand.
//!
//! Each round every player simultaneously picks one of `num_options`
//! discrete price levels. A multinomial-logit demand model turns the joint
//! price vector into per-player profit, profits accumulate over a fixed
//! number of rounds, and the terminal returns follow one of three policies.
//!
//! # Module Structure
//!
//! - `game` — Game/State capability traits, turns, parameters, joint actions
//! - `registry` — Name → factory mapping for constructing games
//! - `pricing` — Discrete price grid between the reference prices
//! - `demand` — Logit demand and per-round profit
//! - `market` — The oligopoly descriptor and its state machine
//! - `observe` — Player-visible strings and tensors under visibility policies

pub mod demand;
pub mod game;
pub mod market;
pub mod observe;
pub mod pricing;
pub mod registry;

pub use demand::*;
pub use game::*;
pub use market::*;
pub use observe::*;
pub use pricing::*;
pub use registry::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index of a player, in `[0, players)`.
pub type Player = usize;
/// Discrete price level chosen by a player, in `[0, num_options)`.
pub type Action = usize;
/// Continuous price obtained from an action through the price grid.
pub type Price = f64;
/// Profits, points and returns.
pub type Utility = f64;
/// Single entry of an observation tensor.
pub type Feature = f32;

// ============================================================================
// PRICE ANCHORS
// Approximate equilibrium prices for the default demand parameters. They are
// not re-derived from the configuration.
// ============================================================================
/// Approximate Bertrand-Nash price under logit demand.
pub const NASH_PRICE: Price = 1.47292;
/// Approximate joint-monopoly price under logit demand.
pub const MONOPOLY_PRICE: Price = 1.92498;
/// Product quality shared by every player (no vertical asymmetry).
pub const VERTICAL_DIFFERENTIATION: Utility = 2.0;

// ============================================================================
// PARAMETER DEFAULTS
// ============================================================================
/// Registered short name of the game.
pub const GAME_NAME: &str = "bertrand_oligopoly";
pub const DEFAULT_PLAYERS: usize = 2;
/// Price levels available to each player.
pub const DEFAULT_NUM_OPTIONS: usize = 15;
pub const DEFAULT_NUM_TURNS: usize = 100;
/// Extension of the price interval beyond the anchors, as a fraction of
/// `MONOPOLY_PRICE - NASH_PRICE`.
pub const DEFAULT_INTERVAL_SIZE: f64 = 0.1;
/// Unit cost of production.
pub const DEFAULT_MARGINAL_COST: Utility = 1.0;
/// How interchangeable the products are, bounded on (0, 1].
pub const DEFAULT_HORIZONTAL_DIFFERENTIATION: f64 = 0.25;
/// Utility of not buying at all.
pub const DEFAULT_OUTSIDE_GOOD: Utility = 0.0;
pub const DEFAULT_RETURNS_TYPE: &str = "total_points";
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging for binaries.
/// Verbose runs log DEBUG and above, otherwise INFO.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
