//! Two-pointer step simulation and playback.
//!
//! `simulate` turns an ordered node sequence into a finite, immutable
//! sequence of discrete algorithm steps; `Playback` is the explicit
//! state machine the presentation layer advances over time.

pub mod playback;
pub mod simulator;
pub mod step;

pub use playback::{PlayState, Playback};
pub use simulator::simulate;
pub use step::Step;
