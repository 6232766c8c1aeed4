//! Controller configuration.

/// Gate pulse width used when nothing else is configured.
pub const DEFAULT_GATE_LENGTH_MS: u16 = 5;

/// Tunables for [`Control`](crate::Control).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlConfig {
    /// Gate pulse width in milliseconds, independent of clock tempo
    pub gate_length_ms: u16,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            gate_length_ms: DEFAULT_GATE_LENGTH_MS,
        }
    }
}
