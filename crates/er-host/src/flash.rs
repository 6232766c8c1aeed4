//! In-memory stand-in for the module's flash.

use er_engine::PresetStore;
use er_ir::{PresetData, PresetMeta, SharedData};

/// Preset storage held in RAM. Slots start blank, like erased flash.
#[derive(Clone, Debug, Default)]
pub struct MemoryFlash {
    presets: Vec<Option<(PresetMeta, PresetData)>>,
    shared: Option<SharedData>,
    preset_index: u8,
    writes: usize,
}

impl MemoryFlash {
    pub fn new(preset_count: u8) -> Self {
        Self {
            presets: vec![None; preset_count as usize],
            ..Default::default()
        }
    }

    /// True if nothing was ever stored; the controller needs `init_presets` first.
    pub fn is_blank(&self) -> bool {
        self.shared.is_none() && self.presets.iter().all(Option::is_none)
    }

    /// Number of store operations performed.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn preset(&self, index: u8) -> Option<&PresetData> {
        self.presets.get(index as usize)?.as_ref().map(|(_, data)| data)
    }
}

impl PresetStore for MemoryFlash {
    fn preset_count(&self) -> u8 {
        self.presets.len() as u8
    }

    fn load_preset(&mut self, index: u8) -> Option<PresetData> {
        self.preset(index).cloned()
    }

    fn load_preset_meta(&mut self, index: u8) -> Option<PresetMeta> {
        self.presets.get(index as usize)?.as_ref().map(|(meta, _)| *meta)
    }

    fn store_preset(&mut self, index: u8, meta: &PresetMeta, preset: &PresetData) {
        if let Some(slot) = self.presets.get_mut(index as usize) {
            *slot = Some((*meta, preset.clone()));
            self.writes += 1;
        }
    }

    fn load_shared(&mut self) -> Option<SharedData> {
        self.shared
    }

    fn store_shared(&mut self, shared: &SharedData) {
        self.shared = Some(*shared);
        self.writes += 1;
    }

    fn preset_index(&self) -> u8 {
        self.preset_index
    }

    fn store_preset_index(&mut self, index: u8) {
        self.preset_index = index;
        self.writes += 1;
    }
}
