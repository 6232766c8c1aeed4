//! Grid layout: which rows and columns belong to which channel and control.
//!
//! Every channel owns two rows. The even row is the step strip, one LED per
//! step. The odd row below it is the parameter selector:
//!
//! ```text
//! col:  0 1 2 3 4 5 6 7 8 9 10
//!       [steps] . [fill ] . [rot  ]
//! ```
//!
//! Columns 3 and 7 are spacers, as is everything from 11 on.

use er_ir::{ActiveParam, ER_COUNT};

/// Width of each selector zone in columns.
pub const ZONE_WIDTH: u8 = 3;

/// Which strip a grid row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridRow {
    Steps { channel: usize },
    Selector { channel: usize },
}

/// Decode a grid row, `None` if it is below the last channel.
pub fn decode_row(y: u8) -> Option<GridRow> {
    let channel = (y / 2) as usize;
    if channel >= ER_COUNT {
        return None;
    }
    Some(if y % 2 == 0 {
        GridRow::Steps { channel }
    } else {
        GridRow::Selector { channel }
    })
}

/// First column of a parameter's selector zone.
pub const fn zone_start(param: ActiveParam) -> u8 {
    match param {
        ActiveParam::Steps => 0,
        ActiveParam::Fill => 4,
        ActiveParam::Rotation => 8,
    }
}

/// The selector zone containing column `x`, if any.
pub fn zone_at(x: u8) -> Option<ActiveParam> {
    ActiveParam::ALL.into_iter().find(|&param| {
        let start = zone_start(param);
        x >= start && x < start + ZONE_WIDTH
    })
}

pub const fn step_row(channel: usize) -> u8 {
    (channel * 2) as u8
}

pub const fn selector_row(channel: usize) -> u8 {
    (channel * 2 + 1) as u8
}
