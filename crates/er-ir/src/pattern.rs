//! Patterns and presets.

use crate::channel::Channel;
use crate::{ER_COUNT, PATTERN_COUNT};

/// A set of channels sounding together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    pub channels: [Channel; ER_COUNT],
}

impl Pattern {
    /// Get a channel by index.
    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    /// Get a mutable channel by index.
    pub fn channel_mut(&mut self, index: usize) -> Option<&mut Channel> {
        self.channels.get_mut(index)
    }

    /// Re-clamp every channel. Returns the number of channels that changed.
    pub fn clamp_to_invariants(&mut self) -> usize {
        self.channels
            .iter_mut()
            .map(|ch| ch.clamp_to_invariants())
            .filter(|changed| *changed)
            .count()
    }
}

/// The patterns persisted together as one preset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetData {
    pub patterns: [Pattern; PATTERN_COUNT],
}

impl Default for PresetData {
    fn default() -> Self {
        Self {
            patterns: [Pattern::default(); PATTERN_COUNT],
        }
    }
}

impl PresetData {
    /// Get a pattern by index.
    pub fn pattern(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    /// Get a mutable pattern by index.
    pub fn pattern_mut(&mut self, index: usize) -> Option<&mut Pattern> {
        self.patterns.get_mut(index)
    }

    /// Re-clamp every channel of every pattern. Returns the number of channels that changed.
    pub fn clamp_to_invariants(&mut self) -> usize {
        self.patterns.iter_mut().map(Pattern::clamp_to_invariants).sum()
    }
}
