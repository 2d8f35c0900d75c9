//! Discrete price levels between the reference prices.
mod grid;

pub use grid::*;
