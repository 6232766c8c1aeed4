//! Headless host for the euclidean grid sequencer.
//!
//! Provides a desktop implementation of every platform capability (flash,
//! grid, gates, timer) and a simulator that drives the controller from a
//! synthetic clock, either on a deterministic millisecond timeline or in
//! real time through a lock-free event queue.

mod config;
mod display;
mod flash;
mod gates;
mod platform;
mod sim;

pub use config::{ConfigError, SimConfig};
pub use display::TextGrid;
pub use flash::MemoryFlash;
pub use gates::{GateEvent, GateLog};
pub use platform::{HostPlatform, TIMER_SLOTS};
pub use sim::Simulator;
