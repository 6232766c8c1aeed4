//! A single euclidean rhythm channel.

use crate::MAX_STEPS;

/// One euclidean rhythm generator.
///
/// Fields are public so platforms can move channels in and out of storage,
/// but every mutation made by the sequencer goes through the methods below,
/// which keep `fill <= steps`, `index < steps` and `rotation < steps`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Channel {
    /// Positions in one cycle (1..=MAX_STEPS)
    pub steps: u8,
    /// Active positions in one cycle (0..=steps)
    pub fill: u8,
    /// Phase offset applied before evaluating a position (0..steps)
    pub rotation: u8,
    /// Current playhead position (0..steps)
    pub index: u8,
}

impl Default for Channel {
    fn default() -> Self {
        Self {
            steps: MAX_STEPS,
            fill: 0,
            rotation: 0,
            index: 0,
        }
    }
}

impl Channel {
    /// Create a channel with the playhead at 0, clamping out-of-range values.
    pub fn new(steps: u8, fill: u8, rotation: u8) -> Self {
        let mut channel = Self {
            steps,
            fill,
            rotation,
            index: 0,
        };
        channel.clamp_to_invariants();
        channel
    }

    /// Change the cycle length. Shrinking re-clamps `index`, `fill` and `rotation`.
    ///
    /// Returns false (and leaves the channel untouched) if `steps` is outside
    /// `1..=MAX_STEPS`.
    pub fn set_steps(&mut self, steps: u8) -> bool {
        if steps == 0 || steps > MAX_STEPS {
            return false;
        }
        self.steps = steps;
        let last = steps - 1;
        self.index = self.index.min(last);
        self.rotation = self.rotation.min(last);
        self.fill = self.fill.min(steps);
        true
    }

    /// Set the number of active positions. Rejected if `fill > steps`.
    pub fn set_fill(&mut self, fill: u8) -> bool {
        if fill > self.steps {
            return false;
        }
        self.fill = fill;
        true
    }

    /// Set the phase offset. Rejected if `rotation >= steps`.
    pub fn set_rotation(&mut self, rotation: u8) -> bool {
        if rotation >= self.steps {
            return false;
        }
        self.rotation = rotation;
        true
    }

    /// Move the playhead. Rejected if `index >= steps`.
    pub fn set_index(&mut self, index: u8) -> bool {
        if index >= self.steps {
            return false;
        }
        self.index = index;
        true
    }

    /// Advance the playhead one step, wrapping at `steps`, and return the new index.
    pub fn advance(&mut self) -> u8 {
        let next = self.index + 1;
        self.index = if next >= self.steps { 0 } else { next };
        self.index
    }

    /// Position fed to the euclidean generator for strip cell `position`.
    pub fn rotated(&self, position: u8) -> u8 {
        ((position as u16 + self.rotation as u16) % self.steps.max(1) as u16) as u8
    }

    /// Force the fields back into range. Returns true if anything changed.
    ///
    /// Used on data that came from outside the engine (storage, tests).
    pub fn clamp_to_invariants(&mut self) -> bool {
        let before = *self;
        self.steps = self.steps.clamp(1, MAX_STEPS);
        let last = self.steps - 1;
        self.fill = self.fill.min(self.steps);
        self.rotation = self.rotation.min(last);
        self.index = self.index.min(last);
        *self != before
    }

    /// Returns true if all invariants hold.
    pub fn is_valid(&self) -> bool {
        self.steps >= 1
            && self.steps <= MAX_STEPS
            && self.fill <= self.steps
            && self.rotation < self.steps
            && self.index < self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full_width_and_empty() {
        let ch = Channel::default();
        assert_eq!(ch.steps, 16);
        assert_eq!(ch.fill, 0);
        assert!(ch.is_valid());
    }

    #[test]
    fn advance_wraps_after_steps_calls() {
        let mut ch = Channel::new(5, 2, 0);
        ch.index = 3;
        for _ in 0..5 {
            ch.advance();
        }
        assert_eq!(ch.index, 3);
    }

    #[test]
    fn advance_from_last_step_returns_to_zero() {
        let mut ch = Channel::new(4, 1, 0);
        ch.index = 3;
        assert_eq!(ch.advance(), 0);
    }

    #[test]
    fn shrinking_steps_clamps_everything() {
        let mut ch = Channel::new(16, 12, 10);
        ch.index = 14;
        assert!(ch.set_steps(8));
        assert_eq!(ch.index, 7);
        assert_eq!(ch.fill, 8);
        assert_eq!(ch.rotation, 7);
        assert!(ch.is_valid());
    }

    #[test]
    fn growing_steps_keeps_values() {
        let mut ch = Channel::new(4, 3, 1);
        ch.index = 2;
        assert!(ch.set_steps(12));
        assert_eq!((ch.fill, ch.rotation, ch.index), (3, 1, 2));
    }

    #[test]
    fn out_of_range_setters_are_rejected() {
        let mut ch = Channel::new(8, 3, 0);
        assert!(!ch.set_steps(0));
        assert!(!ch.set_steps(17));
        assert!(!ch.set_fill(9));
        assert!(!ch.set_rotation(8));
        assert!(!ch.set_index(8));
        assert_eq!(ch, Channel::new(8, 3, 0));
    }

    #[test]
    fn clamp_repairs_corrupt_values() {
        let mut ch = Channel { steps: 0, fill: 40, rotation: 9, index: 200 };
        assert!(ch.clamp_to_invariants());
        assert_eq!(ch, Channel { steps: 1, fill: 1, rotation: 0, index: 0 });
        assert!(!ch.clamp_to_invariants());
    }

    #[test]
    fn rotated_position_wraps() {
        let ch = Channel::new(8, 3, 6);
        assert_eq!(ch.rotated(0), 6);
        assert_eq!(ch.rotated(3), 1);
    }
}
