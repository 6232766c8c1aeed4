//! Clock-driven advancement of the rhythm channels.

use er_ir::Pattern;

use crate::euclidean::is_step_active;
use crate::interface::{GateOutput, Timer, TimerId, TimerMode};

/// Only external rising-edge ticks move the sequencer.
#[inline]
pub fn is_effective_tick(external: bool, phase: bool) -> bool {
    external && phase
}

/// Advance every channel of `pattern` one step.
///
/// Each channel whose new position is an onset raises its gate and
/// (re)schedules its gate-off `gate_length_ms` later. Returns a bitmask of
/// the channels that fired. The caller re-renders once afterwards.
pub fn advance_pattern<H>(pattern: &mut Pattern, gate_length_ms: u16, hw: &mut H) -> u8
where
    H: GateOutput + Timer,
{
    let mut fired = 0u8;
    for (i, channel) in pattern.channels.iter_mut().enumerate() {
        let index = channel.advance();
        if is_step_active(channel.fill, channel.steps, channel.rotated(index)) {
            hw.set_gate(i as u8, true);
            hw.schedule(TimerId::gate_off(i), gate_length_ms, TimerMode::Once);
            fired |= 1 << i;
        }
    }
    fired
}

/// React to a fired timer. Gate-off timers lower their channel's gate.
///
/// Returns true if the id was a gate-off timer.
pub fn handle_timer<O: GateOutput>(id: TimerId, gates: &mut O) -> bool {
    match id.gate_channel() {
        Some(channel) => {
            gates.set_gate(channel, false);
            true
        }
        None => false,
    }
}
