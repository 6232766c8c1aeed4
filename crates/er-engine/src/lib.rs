//! Control core for the euclidean grid sequencer.
//!
//! Advances rhythm channels on clock ticks, turns grid presses into
//! parameter edits and projects the current pattern onto the grid. All
//! hardware access goes through the traits in [`interface`], so the same
//! code runs on the module and against fakes in tests.

#![cfg_attr(not(feature = "std"), no_std)]

mod config;
mod control;
pub mod euclidean;
pub mod input;
pub mod interface;
pub mod layout;
pub mod render;
pub mod sequencer;
mod timed;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ControlConfig, DEFAULT_GATE_LENGTH_MS};
pub use control::Control;
pub use euclidean::is_step_active;
pub use input::KeyOutcome;
pub use interface::{
    GateOutput, GridDisplay, Platform, PresetStore, Timer, TimerId, TimerMode, GATE_OFF_TIMER,
};
pub use timed::{QueueFull, TimedEvents};
