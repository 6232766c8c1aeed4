//! Recording fake of every platform capability, for unit tests.

use er_ir::{Brightness, PresetData, PresetMeta, SharedData};

use crate::interface::{GateOutput, GridDisplay, PresetStore, Timer, TimerId, TimerMode};

pub(crate) struct FakePlatform {
    pub connected: bool,
    pub leds: [[u8; 16]; 16],
    pub led_calls: usize,
    pub clear_calls: usize,
    pub gate_events: Vec<(u8, bool)>,
    pub scheduled: Vec<(TimerId, u16, TimerMode)>,
    pub presets: Vec<Option<(PresetMeta, PresetData)>>,
    pub shared: Option<SharedData>,
    pub preset_index: u8,
    pub preset_stores: usize,
    pub shared_stores: usize,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::with_presets(4)
    }

    pub fn with_presets(count: usize) -> Self {
        Self {
            connected: true,
            leds: [[0; 16]; 16],
            led_calls: 0,
            clear_calls: 0,
            gate_events: Vec::new(),
            scheduled: Vec::new(),
            presets: vec![None; count],
            shared: None,
            preset_index: 0,
            preset_stores: 0,
            shared_stores: 0,
        }
    }

    /// Number of full redraws seen so far.
    pub fn renders(&self) -> usize {
        self.clear_calls
    }
}

impl GridDisplay for FakePlatform {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn clear_all(&mut self) {
        self.clear_calls += 1;
        self.leds = [[0; 16]; 16];
    }

    fn set_led(&mut self, x: u8, y: u8, brightness: Brightness) {
        self.led_calls += 1;
        if let Some(cell) = self.leds.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
            *cell = brightness.level();
        }
    }
}

impl GateOutput for FakePlatform {
    fn set_gate(&mut self, channel: u8, on: bool) {
        self.gate_events.push((channel, on));
    }
}

impl Timer for FakePlatform {
    fn schedule(&mut self, id: TimerId, delay_ms: u16, mode: TimerMode) {
        self.scheduled.push((id, delay_ms, mode));
    }
}

impl PresetStore for FakePlatform {
    fn preset_count(&self) -> u8 {
        self.presets.len() as u8
    }

    fn load_preset(&mut self, index: u8) -> Option<PresetData> {
        self.presets.get(index as usize)?.as_ref().map(|(_, data)| data.clone())
    }

    fn load_preset_meta(&mut self, index: u8) -> Option<PresetMeta> {
        self.presets.get(index as usize)?.as_ref().map(|(meta, _)| *meta)
    }

    fn store_preset(&mut self, index: u8, meta: &PresetMeta, preset: &PresetData) {
        self.preset_stores += 1;
        if let Some(slot) = self.presets.get_mut(index as usize) {
            *slot = Some((*meta, preset.clone()));
        }
    }

    fn load_shared(&mut self) -> Option<SharedData> {
        self.shared
    }

    fn store_shared(&mut self, shared: &SharedData) {
        self.shared_stores += 1;
        self.shared = Some(*shared);
    }

    fn preset_index(&self) -> u8 {
        self.preset_index
    }

    fn store_preset_index(&mut self, index: u8) {
        self.preset_index = index;
    }
}
