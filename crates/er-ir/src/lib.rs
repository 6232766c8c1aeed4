//! Core data types for the euclidean grid sequencer.
//!
//! This crate defines the in-memory model shared by the engine and the
//! platform: rhythm channels grouped into patterns and presets, the
//! device-wide selection state, and the closed set of control events the
//! platform delivers.
//!
//! Designed to be `no_std` compatible. Nothing here allocates.

#![cfg_attr(not(feature = "std"), no_std)]

mod channel;
mod event;
mod led;
mod pattern;
mod shared;

pub use channel::Channel;
pub use event::{ControlEvent, DecodeError, EventKind, I2C_MAX_LEN};
pub use led::{Brightness, GRID_LED_HIGH, GRID_LED_LOW, GRID_LED_MEDIUM};
pub use pattern::{Pattern, PresetData};
pub use shared::{ActiveParam, PresetMeta, SharedData, META_NAME_LEN};

/// Number of independent rhythm lanes per pattern.
pub const ER_COUNT: usize = 4;

/// Number of patterns stored in one preset.
pub const PATTERN_COUNT: usize = 16;

/// Longest cycle a channel can have (one LED per step on a 16-wide grid).
pub const MAX_STEPS: u8 = 16;
