//! Simulator configuration, loaded from TOML.

use std::path::{Path, PathBuf};

use er_engine::{ControlConfig, DEFAULT_GATE_LENGTH_MS};
use serde::Deserialize;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Host simulator settings. Every key is optional.
///
/// ```toml
/// tempo_bpm = 120
/// ticks_per_beat = 4
/// ticks = 32
/// gate_length_ms = 5
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Clock tempo in beats per minute
    pub tempo_bpm: u32,
    /// Clock pulses per beat
    pub ticks_per_beat: u32,
    /// Clock pulses to run
    pub ticks: u32,
    /// Gate pulse width in milliseconds
    pub gate_length_ms: u16,
    pub grid_width: u8,
    pub grid_height: u8,
    /// Presets held by the simulated flash
    pub preset_count: u8,
    /// Drive the clock from a thread in wall-clock time
    pub realtime: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tempo_bpm: 120,
            ticks_per_beat: 4,
            ticks: 32,
            gate_length_ms: DEFAULT_GATE_LENGTH_MS,
            grid_width: 16,
            grid_height: 8,
            preset_count: 8,
            realtime: false,
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tempo_bpm == 0 || self.ticks_per_beat == 0 {
            return Err(ConfigError::Invalid("tempo_bpm and ticks_per_beat must be non-zero"));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::Invalid("grid dimensions must be non-zero"));
        }
        if self.preset_count == 0 {
            return Err(ConfigError::Invalid("preset_count must be at least 1"));
        }
        Ok(())
    }

    /// Milliseconds between clock pulses (at least 2, so each pulse has a falling half).
    pub fn tick_interval_ms(&self) -> u64 {
        let per_minute = self.tempo_bpm as u64 * self.ticks_per_beat as u64;
        (60_000 / per_minute.max(1)).max(2)
    }

    pub fn control_config(&self) -> ControlConfig {
        ControlConfig {
            gate_length_ms: self.gate_length_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SimConfig::from_toml_str("").unwrap(), SimConfig::default());
    }

    #[test]
    fn partial_document_overrides() {
        let config = SimConfig::from_toml_str("tempo_bpm = 150\ngate_length_ms = 12\n").unwrap();
        assert_eq!(config.tempo_bpm, 150);
        assert_eq!(config.control_config().gate_length_ms, 12);
        assert_eq!(config.ticks, 32);
    }

    #[test]
    fn tick_interval_from_tempo() {
        assert_eq!(SimConfig::default().tick_interval_ms(), 125);
        let fast = SimConfig { tempo_bpm: 60_000, ..Default::default() };
        assert_eq!(fast.tick_interval_ms(), 2);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(SimConfig::from_toml_str("tempo = 1"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn zero_tempo_is_invalid() {
        assert!(matches!(
            SimConfig::from_toml_str("tempo_bpm = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimConfig::load(Path::new("/nonexistent/er.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/er.toml"));
    }
}
