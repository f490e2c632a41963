//! One full cycle of sine, sampled at the window length.
//!
//! Amplitude is 1000 so a product with a gained sample stays well inside `i32`.

use crate::config::{QUARTER_CYCLE, WINDOW_LEN};

/// Peak value stored in the table.
pub const TABLE_AMPLITUDE: i16 = 1000;

/// `round(1000 * sin(2*pi*i / 32))`
pub static SINE_TABLE: [i16; WINDOW_LEN] = [
    0, 195, 383, 556, 707, 831, 924, 981, //
    1000, 981, 924, 831, 707, 556, 383, 195, //
    0, -195, -383, -556, -707, -831, -924, -981, //
    -1000, -981, -924, -831, -707, -556, -383, -195,
];

/// Sine at a phase index. The index is reduced modulo the window length.
#[inline]
pub fn sin(phase: usize) -> i16 {
    SINE_TABLE[phase % WINDOW_LEN]
}

/// Cosine read from the same table a quarter cycle ahead.
#[inline]
pub fn cos(phase: usize) -> i16 {
    SINE_TABLE[(phase + QUARTER_CYCLE) % WINDOW_LEN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_points() {
        assert_eq!(sin(0), 0);
        assert_eq!(sin(8), TABLE_AMPLITUDE);
        assert_eq!(sin(16), 0);
        assert_eq!(sin(24), -TABLE_AMPLITUDE);
        assert_eq!(cos(0), TABLE_AMPLITUDE);
        assert_eq!(cos(16), -TABLE_AMPLITUDE);
    }

    #[test]
    fn test_odd_symmetry() {
        for i in 1..WINDOW_LEN {
            assert_eq!(SINE_TABLE[i], -SINE_TABLE[WINDOW_LEN - i], "index {}", i);
        }
    }

    #[test]
    fn test_phase_wraps() {
        assert_eq!(sin(33), sin(1));
        assert_eq!(cos(31), sin(7));
    }
}
