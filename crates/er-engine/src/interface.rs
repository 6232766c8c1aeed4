//! Capabilities the platform provides to the controller.
//!
//! Each trait is the narrow slice of hardware one part of the engine needs.
//! A platform implements all of them and gets [`Platform`] for free.

use er_ir::{Brightness, PresetData, PresetMeta, SharedData, ER_COUNT};

/// LED grid.
pub trait GridDisplay {
    /// False when no grid is attached. Rendering is skipped entirely.
    fn is_connected(&self) -> bool;

    /// Turn every LED off.
    fn clear_all(&mut self);

    /// Set one LED. Coordinates past the device edge are ignored by the device.
    fn set_led(&mut self, x: u8, y: u8, brightness: Brightness);
}

/// Gate/trigger outputs, one per channel.
pub trait GateOutput {
    fn set_gate(&mut self, channel: u8, on: bool);
}

/// First timer id used for gate-off events. Channel `c` uses `GATE_OFF_TIMER + c`.
pub const GATE_OFF_TIMER: u8 = 0;

/// Identifier of a timed event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u8);

impl TimerId {
    /// The timer that ends the gate pulse on `channel`.
    pub const fn gate_off(channel: usize) -> Self {
        TimerId(GATE_OFF_TIMER + channel as u8)
    }

    /// The channel whose gate this timer ends, if it is a gate-off timer.
    pub fn gate_channel(self) -> Option<u8> {
        let channel = self.0.checked_sub(GATE_OFF_TIMER)?;
        ((channel as usize) < ER_COUNT).then_some(channel)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimerMode {
    #[default]
    Once,
    Repeat,
}

/// One-shot and periodic timed events.
///
/// Firing comes back through the controller's event entry point as
/// `ControlEvent::Timed`, never as a direct callback.
pub trait Timer {
    /// Fire `id` after `delay_ms`. Any pending event with the same id is
    /// replaced, never duplicated.
    fn schedule(&mut self, id: TimerId, delay_ms: u16, mode: TimerMode);
}

/// Persistent storage for presets and shared state.
///
/// Calls are treated as atomic. A `None` from a load means nothing usable
/// was stored and the caller keeps its defaults.
pub trait PresetStore {
    fn preset_count(&self) -> u8;
    fn load_preset(&mut self, index: u8) -> Option<PresetData>;
    fn load_preset_meta(&mut self, index: u8) -> Option<PresetMeta>;
    fn store_preset(&mut self, index: u8, meta: &PresetMeta, preset: &PresetData);
    fn load_shared(&mut self) -> Option<SharedData>;
    fn store_shared(&mut self, shared: &SharedData);
    fn preset_index(&self) -> u8;
    fn store_preset_index(&mut self, index: u8);
}

/// Everything the controller talks to.
pub trait Platform: GridDisplay + GateOutput + Timer + PresetStore {}

impl<T: GridDisplay + GateOutput + Timer + PresetStore> Platform for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_off_ids_map_back_to_channels() {
        for ch in 0..ER_COUNT {
            assert_eq!(TimerId::gate_off(ch).gate_channel(), Some(ch as u8));
        }
        assert_eq!(TimerId(GATE_OFF_TIMER + ER_COUNT as u8).gate_channel(), None);
    }
}
