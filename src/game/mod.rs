//! Contract between a simultaneous-move game and whatever drives it.
//!
//! - [`Turn`] — Who acts next (everyone at once, one seat, or nobody)
//! - [`Params`] — Parameter dictionary and `name(key=value)` game strings
//! - [`GameType`] — Static facts about a registered game
//! - [`Game`] — Descriptor capability: bounds, shapes, new states
//! - [`State`] — Per-trajectory capability: actions, returns, views
//! - [`Joint`] — Flat joint-action codec

mod game;
mod joint;
mod kind;
mod params;
mod state;
mod turn;

pub use game::*;
pub use joint::*;
pub use kind::*;
pub use params::*;
pub use state::*;
pub use turn::*;
