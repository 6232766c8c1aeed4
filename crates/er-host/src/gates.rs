//! Gate outputs recorded on a millisecond timeline.

use er_ir::ER_COUNT;

/// One gate transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateEvent {
    pub time_ms: u64,
    pub channel: u8,
    pub on: bool,
}

/// Current gate levels plus every transition written.
#[derive(Clone, Debug, Default)]
pub struct GateLog {
    levels: [bool; ER_COUNT],
    events: Vec<GateEvent>,
}

impl GateLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a gate write at `time_ms`.
    pub fn set(&mut self, time_ms: u64, channel: u8, on: bool) {
        if let Some(level) = self.levels.get_mut(channel as usize) {
            *level = on;
            self.events.push(GateEvent { time_ms, channel, on });
        }
    }

    pub fn is_high(&self, channel: u8) -> bool {
        self.levels.get(channel as usize).copied().unwrap_or(false)
    }

    pub fn events(&self) -> &[GateEvent] {
        &self.events
    }

    /// Writes for one channel, in order.
    pub fn channel_events(&self, channel: u8) -> impl Iterator<Item = &GateEvent> {
        self.events.iter().filter(move |e| e.channel == channel)
    }

    /// Completed (rise, fall) pairs for `channel`. A re-trigger while high
    /// extends the current pulse.
    pub fn pulses(&self, channel: u8) -> Vec<(u64, u64)> {
        let mut pulses = Vec::new();
        let mut rise = None;
        for event in self.channel_events(channel) {
            match (event.on, rise) {
                (true, None) => rise = Some(event.time_ms),
                (false, Some(start)) => {
                    pulses.push((start, event.time_ms));
                    rise = None;
                }
                _ => {}
            }
        }
        pulses
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
