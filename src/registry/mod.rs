//! Construct games by name.
mod registry;

pub use registry::*;
