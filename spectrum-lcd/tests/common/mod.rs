#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use spectrum_dsp::{sine_table, SampleAcquisition, SampleTimer, WINDOW_LEN};
use spectrum_lcd::{CharacterDisplay, GlyphBitmap};

/// Everything the display was asked to do, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOp {
    Initialize,
    Clear,
    Cursor(u8, u8),
    Char(u8),
    Glyph(u8, GlyphBitmap),
}

#[derive(Debug, PartialEq, Eq)]
pub struct WriteRejected;

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub ops: Vec<DisplayOp>,
    /// Fail every write once this many operations have been recorded.
    pub fail_after: Option<usize>,
}

impl RecordingDisplay {
    fn record(&mut self, op: DisplayOp) -> Result<(), WriteRejected> {
        if let Some(limit) = self.fail_after {
            if self.ops.len() >= limit {
                return Err(WriteRejected);
            }
        }
        self.ops.push(op);
        Ok(())
    }

    /// Characters written, ignoring cursor moves.
    pub fn text(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DisplayOp::Char(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl CharacterDisplay for RecordingDisplay {
    type Error = WriteRejected;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        self.record(DisplayOp::Initialize)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.record(DisplayOp::Clear)
    }

    fn set_cursor(&mut self, row: u8, column: u8) -> Result<(), Self::Error> {
        self.record(DisplayOp::Cursor(row, column))
    }

    fn write_char(&mut self, code: u8) -> Result<(), Self::Error> {
        self.record(DisplayOp::Char(code))
    }

    fn define_custom_glyph(&mut self, index: u8, bitmap: &GlyphBitmap) -> Result<(), Self::Error> {
        self.record(DisplayOp::Glyph(index, *bitmap))
    }
}

#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

#[derive(Debug, Default)]
pub struct TimerLog {
    pub running: bool,
    pub stops: u32,
    pub restarts: u32,
}

/// Timer handle shared by the "interrupt" side of a test and the scheduler.
#[derive(Debug, Clone, Default)]
pub struct SharedTimer(pub Rc<RefCell<TimerLog>>);

impl SharedTimer {
    pub fn running(&self) -> bool {
        self.0.borrow().running
    }

    pub fn restarts(&self) -> u32 {
        self.0.borrow().restarts
    }

    pub fn stops(&self) -> u32 {
        self.0.borrow().stops
    }
}

impl SampleTimer for SharedTimer {
    fn stop(&mut self) {
        let mut log = self.0.borrow_mut();
        log.running = false;
        log.stops += 1;
    }

    fn restart(&mut self) {
        let mut log = self.0.borrow_mut();
        log.running = true;
        log.restarts += 1;
    }
}

/// Deliver a whole window of readings as the conversion-complete interrupt would.
pub fn fill_window(acquisition: &SampleAcquisition, timer: &mut SharedTimer, raw: &[u16; WINDOW_LEN]) {
    for &reading in raw.iter() {
        acquisition.on_conversion_complete(reading, timer);
    }
}

/// Readings of a basis-frequency tone swinging `peak` counts around `offset`.
pub fn raw_tone(bin: usize, offset: u16, peak: i32) -> [u16; WINDOW_LEN] {
    let mut raw = [0u16; WINDOW_LEN];
    for (k, reading) in raw.iter_mut().enumerate() {
        let swing = sine_table::sin(bin * k) as i32 * peak / 1000;
        *reading = (offset as i32 + swing) as u16;
    }
    raw
}
