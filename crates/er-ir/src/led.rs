//! Grid LED brightness levels.

pub const GRID_LED_LOW: u8 = 3;
pub const GRID_LED_MEDIUM: u8 = 6;
pub const GRID_LED_HIGH: u8 = 9;

/// The three brightness levels the renderer uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Brightness {
    Low,
    Medium,
    High,
}

impl Brightness {
    /// Raw level on the 0-15 scale used by varibright grids.
    pub const fn level(self) -> u8 {
        match self {
            Brightness::Low => GRID_LED_LOW,
            Brightness::Medium => GRID_LED_MEDIUM,
            Brightness::High => GRID_LED_HIGH,
        }
    }

    /// Medium when `on`, low otherwise.
    pub const fn lit(on: bool) -> Self {
        if on {
            Brightness::Medium
        } else {
            Brightness::Low
        }
    }
}
