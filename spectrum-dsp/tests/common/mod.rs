#![allow(dead_code)]

use spectrum_dsp::sine_table;
use spectrum_dsp::{AnalogInput, SampleTimer, SampleWindow, WINDOW_LEN};

/// Window holding a tone at one of the table's own basis frequencies.
pub fn tone_window(bin: usize, gain: i16) -> SampleWindow {
    let mut window = [0i16; WINDOW_LEN];
    for (k, sample) in window.iter_mut().enumerate() {
        *sample = sine_table::sin(bin * k) * gain;
    }
    window
}

/// Raw converter readings for the same tone riding on the input bias.
///
/// `peak` is the swing in ADC counts around `offset`.
pub fn raw_tone(bin: usize, offset: u16, peak: i32) -> [u16; WINDOW_LEN] {
    let mut raw = [0u16; WINDOW_LEN];
    for (k, reading) in raw.iter_mut().enumerate() {
        let swing = sine_table::sin(bin * k) as i32 * peak / 1000;
        *reading = (offset as i32 + swing) as u16;
    }
    raw
}

#[derive(Debug, Default)]
pub struct RecordingTimer {
    pub running: bool,
    pub stops: u32,
    pub restarts: u32,
}

impl SampleTimer for RecordingTimer {
    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }

    fn restart(&mut self) {
        self.running = true;
        self.restarts += 1;
    }
}

/// Converter that finishes when the test says so.
#[derive(Debug, Default)]
pub struct ManualAdc {
    pub busy: bool,
    pub requests: u32,
}

impl AnalogInput for ManualAdc {
    fn is_busy(&self) -> bool {
        self.busy
    }

    fn start_conversion(&mut self) {
        self.busy = true;
        self.requests += 1;
    }
}
