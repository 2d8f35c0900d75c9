//! Multinomial-logit demand and per-round profit.
mod logit;

pub use logit::*;
