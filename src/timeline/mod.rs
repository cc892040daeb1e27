//! Timeline module - frame sequence storage and playback control.

mod player;
mod sequence;

pub use player::*;
pub use sequence::*;
