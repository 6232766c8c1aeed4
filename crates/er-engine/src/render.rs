//! Projection of the current pattern and selection onto the grid.
//!
//! Never mutates engine state. Called on demand after anything visible changes.

use er_ir::{ActiveParam, Brightness, Pattern, SharedData};

use crate::euclidean::is_step_active;
use crate::interface::GridDisplay;
use crate::layout::{selector_row, step_row, zone_start, ZONE_WIDTH};

/// Redraw the whole grid. A disconnected grid gets no calls at all.
pub fn render_grid<G: GridDisplay>(pattern: &Pattern, shared: &SharedData, grid: &mut G) {
    if !grid.is_connected() {
        return;
    }
    grid.clear_all();

    for (i, ch) in pattern.channels.iter().enumerate() {
        let row = step_row(i);
        for x in 0..ch.steps {
            let on = is_step_active(ch.fill, ch.steps, ch.rotated(x));
            grid.set_led(x, row, Brightness::lit(on));
        }
        grid.set_led(ch.index, row, Brightness::High);

        let active = shared.active[i];
        for param in ActiveParam::ALL {
            let brightness = Brightness::lit(param == active);
            filled_rect(grid, zone_start(param), selector_row(i), ZONE_WIDTH, 1, brightness);
        }
    }
}

fn filled_rect<G: GridDisplay>(grid: &mut G, x: u8, y: u8, width: u8, height: u8, brightness: Brightness) {
    for dx in 0..width {
        for dy in 0..height {
            grid.set_led(x + dx, y + dy, brightness);
        }
    }
}
