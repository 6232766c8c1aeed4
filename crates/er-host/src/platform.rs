//! The host platform: every capability the controller needs, on one clock.

use er_engine::{
    GateOutput, GridDisplay, PresetStore, TimedEvents, Timer, TimerId, TimerMode,
};
use er_ir::{Brightness, PresetData, PresetMeta, SharedData};
use tracing::warn;

use crate::display::TextGrid;
use crate::flash::MemoryFlash;
use crate::gates::GateLog;

/// Concurrent timed events the software timer can hold.
pub const TIMER_SLOTS: usize = 8;

/// Host implementation of the platform.
///
/// Time is whatever the driver last set with [`set_time`](Self::set_time);
/// gate writes are stamped with it and timers are scheduled relative to it.
#[derive(Clone, Debug)]
pub struct HostPlatform {
    pub grid: TextGrid,
    pub gates: GateLog,
    pub flash: MemoryFlash,
    timers: TimedEvents<TIMER_SLOTS>,
    now_ms: u64,
}

impl HostPlatform {
    pub fn new(grid: TextGrid, flash: MemoryFlash) -> Self {
        Self {
            grid,
            gates: GateLog::new(),
            flash,
            timers: TimedEvents::new(),
            now_ms: 0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn set_time(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Deadline of the next pending timer.
    pub fn next_timer(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Pop the next timer due at or before the current time.
    pub fn pop_due_timer(&mut self) -> Option<TimerId> {
        self.timers.pop_due(self.now_ms)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

impl GridDisplay for HostPlatform {
    fn is_connected(&self) -> bool {
        self.grid.is_connected()
    }

    fn clear_all(&mut self) {
        self.grid.clear_all();
    }

    fn set_led(&mut self, x: u8, y: u8, brightness: Brightness) {
        self.grid.set_led(x, y, brightness);
    }
}

impl GateOutput for HostPlatform {
    fn set_gate(&mut self, channel: u8, on: bool) {
        self.gates.set(self.now_ms, channel, on);
    }
}

impl Timer for HostPlatform {
    fn schedule(&mut self, id: TimerId, delay_ms: u16, mode: TimerMode) {
        if let Err(err) = self.timers.schedule(self.now_ms, id, delay_ms, mode) {
            warn!(%err, "dropping timed event");
        }
    }
}

impl PresetStore for HostPlatform {
    fn preset_count(&self) -> u8 {
        self.flash.preset_count()
    }

    fn load_preset(&mut self, index: u8) -> Option<PresetData> {
        self.flash.load_preset(index)
    }

    fn load_preset_meta(&mut self, index: u8) -> Option<PresetMeta> {
        self.flash.load_preset_meta(index)
    }

    fn store_preset(&mut self, index: u8, meta: &PresetMeta, preset: &PresetData) {
        self.flash.store_preset(index, meta, preset);
    }

    fn load_shared(&mut self) -> Option<SharedData> {
        self.flash.load_shared()
    }

    fn store_shared(&mut self, shared: &SharedData) {
        self.flash.store_shared(shared);
    }

    fn preset_index(&self) -> u8 {
        self.flash.preset_index()
    }

    fn store_preset_index(&mut self, index: u8) {
        self.flash.store_preset_index(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> HostPlatform {
        HostPlatform::new(TextGrid::new(16, 8), MemoryFlash::new(1))
    }

    #[test]
    fn gate_writes_are_stamped_with_current_time() {
        let mut hw = platform();
        hw.set_time(42);
        hw.set_gate(1, true);
        assert_eq!(hw.gates.events()[0].time_ms, 42);
    }

    #[test]
    fn timers_are_relative_to_current_time() {
        let mut hw = platform();
        hw.set_time(100);
        hw.schedule(TimerId(2), 5, TimerMode::Once);
        assert_eq!(hw.next_timer(), Some(105));
        assert_eq!(hw.pop_due_timer(), None);
        hw.set_time(105);
        assert_eq!(hw.pop_due_timer(), Some(TimerId(2)));
    }

    #[test]
    fn full_timer_queue_drops_new_ids() {
        let mut hw = platform();
        for id in 0..=TIMER_SLOTS as u8 {
            hw.schedule(TimerId(id), 5, TimerMode::Once);
        }
        assert_eq!(hw.pending_timers(), TIMER_SLOTS);
    }
}
