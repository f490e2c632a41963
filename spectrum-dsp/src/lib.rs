#![no_std]

pub mod acquisition;
pub mod config;
pub mod error;
pub mod hal;
pub mod sine_table;

pub use acquisition::{AcquisitionState, SampleAcquisition, SampleWindow, TickOutcome};
pub use config::{SpectrumConfig, BIN_COUNT, WINDOW_LEN};
pub use error::ConfigError;
pub use hal::{AnalogInput, SampleTimer};

use config::{ADC_FULL_SCALE, MAGNITUDE_DIVISOR, SAMPLE_GAIN_SHIFT, TRANSFORM_SCALE_DIVISOR};
use sine_table::TABLE_AMPLITUDE;

/// K magnitude estimates, lowest frequency first. Not clipped.
pub type SpectrumBins = [i32; BIN_COUNT];

// A full window of worst-case products must fit the i32 accumulators.
const _: () = assert!(
    (ADC_FULL_SCALE as i64) * (1 << SAMPLE_GAIN_SHIFT) * (TABLE_AMPLITUDE as i64) * (WINDOW_LEN as i64)
        <= i32::MAX as i64
);

/// Accumulate the real and imaginary parts of bin `u` over the window.
pub fn correlate(window: &SampleWindow, u: usize) -> (i32, i32) {
    let mut re: i32 = 0;
    let mut im: i32 = 0;
    for (k, &x) in window.iter().enumerate() {
        // u * k runs past the table, so wrap it back to one cycle.
        let phase = (u * k) % WINDOW_LEN;
        let x = x as i32;
        re += x * sine_table::cos(phase) as i32;
        im -= x * sine_table::sin(phase) as i32;
    }
    (re, im)
}

/// Cheap stand-in for `hypot(re, im)` after the fixed downscale.
pub fn compute_magnitude(re: i32, im: i32) -> i32 {
    let re = (re / TRANSFORM_SCALE_DIVISOR).abs();
    let im = (im / TRANSFORM_SCALE_DIVISOR).abs();
    (re + im) / MAGNITUDE_DIVISOR
}

/// Run the table-based transform over one complete window.
pub fn process_window(window: &SampleWindow) -> SpectrumBins {
    let mut bins = [0; BIN_COUNT];
    for (u, bin) in bins.iter_mut().enumerate() {
        let (re, im) = correlate(window, u);
        *bin = compute_magnitude(re, im);
    }
    bins
}
