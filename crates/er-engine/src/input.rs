//! Grid key presses to selection changes and parameter edits.

use er_ir::{ActiveParam, Pattern, SharedData, MAX_STEPS};

use crate::layout::{decode_row, zone_at, GridRow};

/// What a grid key press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Release, spacer, out-of-range row, or a rejected edit. Nothing changed.
    Ignored,
    /// A channel's active parameter was selected.
    Selected { channel: usize, param: ActiveParam },
    /// A channel's parameter was edited.
    Edited { channel: usize, param: ActiveParam },
}

impl KeyOutcome {
    /// True if the grid has to be redrawn.
    pub fn needs_render(self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Apply a grid key event to the selection state or the current pattern.
pub fn handle_grid_key(
    pattern: &mut Pattern,
    shared: &mut SharedData,
    x: u8,
    y: u8,
    pressed: bool,
) -> KeyOutcome {
    if !pressed {
        return KeyOutcome::Ignored;
    }
    match decode_row(y) {
        Some(GridRow::Selector { channel }) => select_param(shared, channel, x),
        Some(GridRow::Steps { channel }) => {
            let param = shared.active[channel];
            edit_param(pattern, channel, param, x)
        }
        None => KeyOutcome::Ignored,
    }
}

fn select_param(shared: &mut SharedData, channel: usize, x: u8) -> KeyOutcome {
    match zone_at(x) {
        Some(param) => {
            shared.active[channel] = param;
            KeyOutcome::Selected { channel, param }
        }
        None => KeyOutcome::Ignored,
    }
}

fn edit_param(pattern: &mut Pattern, channel: usize, param: ActiveParam, x: u8) -> KeyOutcome {
    let Some(ch) = pattern.channel_mut(channel) else {
        return KeyOutcome::Ignored;
    };
    let accepted = match param {
        // Column 0 would make a one-step cycle; the strip starts at two.
        ActiveParam::Steps => x > 0 && x < MAX_STEPS && ch.set_steps(x + 1),
        ActiveParam::Fill => x < ch.steps && ch.set_fill(x + 1),
        // The last column wraps back to no rotation.
        ActiveParam::Rotation => x < ch.steps && ch.set_rotation((x + 1) % ch.steps),
    };
    if accepted {
        KeyOutcome::Edited { channel, param }
    } else {
        KeyOutcome::Ignored
    }
}
