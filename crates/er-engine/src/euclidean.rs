//! Euclidean rhythm generator.
//!
//! Position `p` of a `steps`-long cycle is active when `(p * fill) mod steps < fill`.
//! This spreads `fill` onsets as evenly as possible, always puts an onset on
//! position 0, and is a rotation of the pattern Bjorklund's algorithm yields
//! for the same pair. Constant time, no tables.

/// Returns true if `position` is an onset of the (`fill`, `steps`) rhythm.
///
/// Total over all inputs: `steps == 0` is never active, `fill` is clamped to
/// `steps` and `position` is taken modulo `steps`.
#[inline]
pub fn is_step_active(fill: u8, steps: u8, position: u8) -> bool {
    if steps == 0 || fill == 0 {
        return false;
    }
    let steps = steps as u16;
    let fill = (fill as u16).min(steps);
    let position = position as u16 % steps;
    (position * fill) % steps < fill
}

/// The whole cycle as a bitmask, bit `p` set when position `p` is active.
pub fn pattern_mask(fill: u8, steps: u8) -> u32 {
    (0..steps.min(32))
        .filter(|&p| is_step_active(fill, steps, p))
        .fold(0, |mask, p| mask | (1 << p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use er_ir::MAX_STEPS;

    fn render(fill: u8, steps: u8) -> String {
        (0..steps)
            .map(|p| if is_step_active(fill, steps, p) { 'x' } else { '.' })
            .collect()
    }

    fn is_rotation_of(a: &str, b: &str) -> bool {
        a.len() == b.len() && format!("{}{}", b, b).contains(a)
    }

    #[test]
    fn active_count_equals_fill() {
        for steps in 1..=MAX_STEPS {
            for fill in 0..=steps {
                let count = (0..steps).filter(|&p| is_step_active(fill, steps, p)).count();
                assert_eq!(count, fill as usize, "fill {} steps {}", fill, steps);
            }
        }
    }

    #[test]
    fn empty_and_full_cycles() {
        for steps in 1..=MAX_STEPS {
            for p in 0..steps {
                assert!(!is_step_active(0, steps, p));
                assert!(is_step_active(steps, steps, p));
            }
        }
    }

    #[test]
    fn repeated_calls_agree() {
        for steps in 1..=MAX_STEPS {
            for fill in 0..=steps {
                assert_eq!(pattern_mask(fill, steps), pattern_mask(fill, steps));
            }
        }
    }

    #[test]
    fn tresillo() {
        assert_eq!(render(3, 8), "x..x..x.");
    }

    #[test]
    fn matches_reference_table_exactly() {
        assert_eq!(render(3, 4), "x.xx");
        assert_eq!(render(4, 12), "x..x..x..x..");
        assert_eq!(render(5, 12), "x..x.x..x.x.");
        assert_eq!(render(7, 16), "x..x.x.x..x.x.x.");
    }

    #[test]
    fn matches_reference_table_up_to_rotation() {
        let table = [
            (2, 5, "x.x.."),
            (3, 7, "x.x.x.."),
            (5, 8, "x.xx.xx."),
            (4, 9, "x.x.x.x.."),
            (5, 13, "x..x.x..x.x.."),
        ];
        for (fill, steps, reference) in table {
            let ours = render(fill, steps);
            assert!(
                is_rotation_of(&ours, reference),
                "E({},{}) = {} is not a rotation of {}",
                fill,
                steps,
                ours,
                reference
            );
        }
    }

    #[test]
    fn position_zero_is_onset_when_filled() {
        for steps in 1..=MAX_STEPS {
            for fill in 1..=steps {
                assert!(is_step_active(fill, steps, 0));
            }
        }
    }

    #[test]
    fn degenerate_inputs_are_total() {
        assert!(!is_step_active(3, 0, 0));
        assert!(is_step_active(20, 8, 5));
        assert_eq!(is_step_active(3, 8, 11), is_step_active(3, 8, 3));
    }

    #[test]
    fn mask_bits() {
        assert_eq!(pattern_mask(3, 8), 0b0100_1001);
        assert_eq!(pattern_mask(0, 16), 0);
        assert_eq!(pattern_mask(16, 16), 0xffff);
    }
}
