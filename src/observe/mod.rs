//! What each player gets to see.
//!
//! An [`Observer`] pairs a [`Visibility`] policy with the egocentric flag
//! and renders a [`Market`](crate::Market) into a string or an
//! [`Observation`] of named tensor blocks. Rendering never mutates the
//! state.

mod observation;
mod observer;
mod visibility;

pub use observation::*;
pub use observer::*;
pub use visibility::*;
