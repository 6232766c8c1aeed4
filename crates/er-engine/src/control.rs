//! Top-level controller: owns the model, dispatches platform events.

use er_ir::{ControlEvent, Pattern, PresetData, PresetMeta, SharedData, PATTERN_COUNT};
use tracing::{debug, trace, warn};

use crate::config::ControlConfig;
use crate::input::{handle_grid_key, KeyOutcome};
use crate::interface::{Platform, TimerId};
use crate::render;
use crate::sequencer::{advance_pattern, handle_timer, is_effective_tick};

/// The sequencer controller.
///
/// Owns the loaded preset, the shared selection state and the platform.
/// Every handler runs to completion on the caller's thread; nothing here
/// blocks or allocates.
pub struct Control<P> {
    platform: P,
    config: ControlConfig,
    meta: PresetMeta,
    preset: PresetData,
    shared: SharedData,
    selected_preset: u8,
    selected_pattern: usize,
}

impl<P: Platform> Control<P> {
    /// Create a controller with default model state. Call [`init_control`](Self::init_control)
    /// (after [`init_presets`](Self::init_presets) on blank storage) before dispatching events.
    pub fn new(platform: P, config: ControlConfig) -> Self {
        Self {
            platform,
            config,
            meta: PresetMeta::default(),
            preset: PresetData::default(),
            shared: SharedData::default(),
            selected_preset: 0,
            selected_pattern: 0,
        }
    }

    /// Write default presets and shared state to storage.
    ///
    /// Called once when storage holds nothing yet.
    pub fn init_presets(&mut self) {
        self.meta = PresetMeta::default();
        self.preset = PresetData::default();
        self.shared = SharedData::default();

        let count = self.platform.preset_count();
        for i in 0..count {
            self.platform.store_preset(i, &self.meta, &self.preset);
        }
        self.platform.store_shared(&self.shared);
        self.platform.store_preset_index(0);
        self.selected_preset = 0;
        debug!(count, "initialised presets");
    }

    /// Load shared state and the stored preset, then draw the first frame.
    pub fn init_control(&mut self) {
        self.shared = self.platform.load_shared().unwrap_or_else(|| {
            warn!("no shared data stored, using defaults");
            SharedData::default()
        });

        let index = self.platform.preset_index();
        self.selected_preset = if index < self.platform.preset_count() {
            index
        } else {
            warn!(index, "stored preset index out of range, using 0");
            0
        };
        self.load_selected_preset();
        self.render_grid();
    }

    /// Decode and dispatch a raw platform event. Unknown or malformed events are dropped.
    pub fn process_event(&mut self, kind: u8, data: &[u8]) {
        #[cfg(feature = "alloc_check")]
        assert_no_alloc::assert_no_alloc(|| self.dispatch_raw(kind, data));
        #[cfg(not(feature = "alloc_check"))]
        self.dispatch_raw(kind, data);
    }

    fn dispatch_raw(&mut self, kind: u8, data: &[u8]) {
        match ControlEvent::decode(kind, data) {
            Ok(Some(event)) => self.handle_event(&event),
            Ok(None) => trace!(kind, "ignoring unknown event kind"),
            Err(err) => debug!(%err, "dropping malformed event"),
        }
    }

    /// Dispatch a decoded event.
    pub fn handle_event(&mut self, event: &ControlEvent) {
        match *event {
            ControlEvent::MainClock { external, phase } => {
                if is_effective_tick(external, phase) {
                    self.clock_tick();
                }
            }
            ControlEvent::GridKey { x, y, pressed } => self.grid_key(x, y, pressed),
            ControlEvent::Timed { id } => {
                handle_timer(TimerId(id), &mut self.platform);
            }
            ControlEvent::GridConnected { connected: true } => self.render_grid(),
            ControlEvent::FrontButtonHeld => self.save_preset(),
            ControlEvent::GridConnected { connected: false }
            | ControlEvent::ClockSwitched { .. }
            | ControlEvent::GateReceived { .. }
            | ControlEvent::GridKeyHeld { .. }
            | ControlEvent::ArcEncoder { .. }
            | ControlEvent::FrontButton { .. }
            | ControlEvent::Button { .. }
            | ControlEvent::I2c { .. } => {}
        }
    }

    /// Redraw the full grid from the current pattern and selection.
    pub fn render_grid(&mut self) {
        render::render_grid(&self.preset.patterns[self.selected_pattern], &self.shared, &mut self.platform);
    }

    /// No arc layout; arcs stay dark.
    pub fn render_arc(&mut self) {}

    /// Switch to another stored preset. Returns false if `index` is out of range.
    pub fn select_preset(&mut self, index: u8) -> bool {
        if index >= self.platform.preset_count() {
            return false;
        }
        self.selected_preset = index;
        self.platform.store_preset_index(index);
        self.load_selected_preset();
        self.render_grid();
        true
    }

    /// Persist the current preset, its metadata and the shared state.
    pub fn save_preset(&mut self) {
        self.platform.store_preset(self.selected_preset, &self.meta, &self.preset);
        self.platform.store_shared(&self.shared);
        debug!(preset = self.selected_preset, "stored preset");
    }

    /// Switch the playing pattern within the current preset. Returns false if out of range.
    pub fn select_pattern(&mut self, index: usize) -> bool {
        if index >= PATTERN_COUNT {
            return false;
        }
        self.selected_pattern = index;
        self.render_grid();
        true
    }

    fn clock_tick(&mut self) {
        let pattern = &mut self.preset.patterns[self.selected_pattern];
        advance_pattern(pattern, self.config.gate_length_ms, &mut self.platform);
        self.render_grid();
    }

    fn grid_key(&mut self, x: u8, y: u8, pressed: bool) {
        let pattern = &mut self.preset.patterns[self.selected_pattern];
        let outcome = handle_grid_key(pattern, &mut self.shared, x, y, pressed);
        if outcome.needs_render() {
            self.render_grid();
        }
        if let KeyOutcome::Edited { channel, param } = outcome {
            trace!(channel, ?param, "edited channel");
        }
    }

    fn load_selected_preset(&mut self) {
        let index = self.selected_preset;
        self.preset = self.platform.load_preset(index).unwrap_or_else(|| {
            warn!(index, "preset missing from storage, using defaults");
            PresetData::default()
        });
        let repaired = self.preset.clamp_to_invariants();
        if repaired > 0 {
            warn!(index, repaired, "stored preset had out-of-range channels");
        }
        self.meta = self.platform.load_preset_meta(index).unwrap_or_default();
        debug!(index, "loaded preset");
    }

    pub fn pattern(&self) -> &Pattern {
        &self.preset.patterns[self.selected_pattern]
    }

    pub fn preset(&self) -> &PresetData {
        &self.preset
    }

    pub fn shared(&self) -> &SharedData {
        &self.shared
    }

    pub fn meta(&self) -> &PresetMeta {
        &self.meta
    }

    pub fn selected_preset(&self) -> u8 {
        self.selected_preset
    }

    pub fn selected_pattern(&self) -> usize {
        self.selected_pattern
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}
