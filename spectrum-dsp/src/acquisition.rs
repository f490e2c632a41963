//! Timer-paced sample collection and the handoff of a finished window.
//!
//! The interrupt side calls [`SampleAcquisition::on_timer_tick`] and
//! [`SampleAcquisition::on_conversion_complete`]; the foreground polls
//! [`SampleAcquisition::is_ready`], copies the frozen window with
//! [`SampleAcquisition::read_window`] and hands sampling back with
//! [`SampleAcquisition::rearm`]. Every step runs inside one critical section,
//! so the foreground never sees a half-written window and the interrupt side
//! never writes while a window is waiting to be read.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

#[cfg(feature = "logging")]
use defmt::trace;

use crate::config::{ADC_FULL_SCALE, SAMPLE_GAIN_SHIFT, WINDOW_LEN};
use crate::hal::{AnalogInput, SampleTimer};

/// N de-biased, gained samples in acquisition order.
pub type SampleWindow = [i16; WINDOW_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquisitionState {
    /// Conversions are being appended to the window.
    Collecting,
    /// The window is complete, the timer is stopped and the window is ready to read.
    Full,
}

/// What a timer tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    Requested,
    /// The previous conversion was still running. The tick is dropped.
    Skipped,
    /// A full window is waiting for the consumer.
    Stopped,
}

struct Collector {
    window: SampleWindow,
    fill: usize,
    state: AcquisitionState,
}

pub struct SampleAcquisition {
    calibration_offset: u16,
    shared: Mutex<CriticalSectionRawMutex, RefCell<Collector>>,
}

impl SampleAcquisition {
    /// Creates an empty, collecting acquisition. `const` so it can live in a `static`.
    pub const fn new(calibration_offset: u16) -> Self {
        Self {
            calibration_offset,
            shared: Mutex::new(RefCell::new(Collector {
                window: [0; WINDOW_LEN],
                fill: 0,
                state: AcquisitionState::Collecting,
            })),
        }
    }

    pub fn calibration_offset(&self) -> u16 {
        self.calibration_offset
    }

    /// Removes the input bias from a raw reading and applies the fixed gain.
    pub fn debias(&self, raw: u16) -> i16 {
        let raw = raw.min(ADC_FULL_SCALE) as i16;
        let offset = self.calibration_offset.min(ADC_FULL_SCALE) as i16;
        (raw - offset) << SAMPLE_GAIN_SHIFT
    }

    /// Starts the timer for the first window.
    pub fn start<T: SampleTimer>(&self, timer: &mut T) {
        self.shared.lock(|cell| {
            let mut collector = cell.borrow_mut();
            collector.fill = 0;
            collector.state = AcquisitionState::Collecting;
            timer.restart();
        });
    }

    /// Timer compare handler: request one conversion unless one is still in flight.
    pub fn on_timer_tick<A: AnalogInput>(&self, adc: &mut A) -> TickOutcome {
        self.shared.lock(|cell| {
            if cell.borrow().state == AcquisitionState::Full {
                return TickOutcome::Stopped;
            }
            if adc.is_busy() {
                #[cfg(feature = "logging")]
                trace!("Conversion still running, tick dropped");
                return TickOutcome::Skipped;
            }
            adc.start_conversion();
            TickOutcome::Requested
        })
    }

    /// Conversion-complete handler. Returns true when this reading completed the window.
    ///
    /// On the last slot the timer is stopped, the fill index is reset and the
    /// window is marked full, all in the same critical section as the write.
    /// Readings that arrive while a window is full are discarded.
    pub fn on_conversion_complete<T: SampleTimer>(&self, raw: u16, timer: &mut T) -> bool {
        let sample = self.debias(raw);
        self.shared.lock(|cell| {
            let mut collector = cell.borrow_mut();
            if collector.state == AcquisitionState::Full {
                return false;
            }

            let slot = collector.fill;
            collector.window[slot] = sample;
            collector.fill += 1;

            if collector.fill < WINDOW_LEN {
                return false;
            }

            timer.stop();
            collector.fill = 0;
            collector.state = AcquisitionState::Full;

            #[cfg(feature = "logging")]
            trace!("Sample window full");

            true
        })
    }

    /// The ready signal.
    pub fn is_ready(&self) -> bool {
        self.state() == AcquisitionState::Full
    }

    pub fn state(&self) -> AcquisitionState {
        self.shared.lock(|cell| cell.borrow().state)
    }

    /// Samples written into the window currently being collected.
    pub fn fill_level(&self) -> usize {
        self.shared.lock(|cell| cell.borrow().fill)
    }

    /// Copies the completed window. `None` while still collecting.
    ///
    /// The window stays frozen until [`SampleAcquisition::rearm`] is called.
    pub fn read_window(&self) -> Option<SampleWindow> {
        self.shared.lock(|cell| {
            let collector = cell.borrow();
            match collector.state {
                AcquisitionState::Full => Some(collector.window),
                AcquisitionState::Collecting => None,
            }
        })
    }

    /// Clears the ready signal and restarts the timer. Call only after the window has been read.
    ///
    /// Returns false, and leaves the timer alone, if no window was waiting.
    pub fn rearm<T: SampleTimer>(&self, timer: &mut T) -> bool {
        self.shared.lock(|cell| {
            let mut collector = cell.borrow_mut();
            if collector.state != AcquisitionState::Full {
                return false;
            }
            collector.fill = 0;
            collector.state = AcquisitionState::Collecting;
            timer.restart();
            true
        })
    }
}
