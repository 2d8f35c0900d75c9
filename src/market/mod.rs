//! The Bertrand oligopoly: descriptor, state machine, scoring.
//!
//! - [`Settings`] — Validated parameters with serde defaults
//! - [`Returns`] — Terminal scoring policy
//! - [`Oligopoly`] — Immutable descriptor, implements [`Game`](crate::Game)
//! - [`Market`] — One trajectory, implements [`State`](crate::State)

mod market;
mod oligopoly;
mod returns;
mod settings;

pub use market::*;
pub use oligopoly::*;
pub use returns::*;
pub use settings::*;
