//! State shared across presets and opaque preset metadata.

use arrayvec::ArrayString;

use crate::ER_COUNT;

/// Which parameter a channel's step strip currently edits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveParam {
    #[default]
    Steps,
    Fill,
    Rotation,
}

impl ActiveParam {
    /// All parameters in selector-strip order.
    pub const ALL: [ActiveParam; 3] = [ActiveParam::Steps, ActiveParam::Fill, ActiveParam::Rotation];
}

/// Device-wide state that survives preset switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SharedData {
    /// Selected parameter per channel
    pub active: [ActiveParam; ER_COUNT],
}

/// Maximum length of a preset name.
pub const META_NAME_LEN: usize = 16;

/// Device-defined tag stored alongside a preset. The engine carries it
/// through storage calls and never looks inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresetMeta {
    pub name: ArrayString<META_NAME_LEN>,
    pub glyph: [u8; 8],
}

impl PresetMeta {
    /// Create metadata with a name, truncated to `META_NAME_LEN` bytes.
    pub fn named(name: &str) -> Self {
        let mut meta = Self::default();
        for c in name.chars() {
            if meta.name.try_push(c).is_err() {
                break;
            }
        }
        meta
    }
}
