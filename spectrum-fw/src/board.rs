//! esp32s3 adapters for the sampling capabilities.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use esp_hal::{
    analog::adc::{Adc, AdcPin},
    gpio::GpioPin,
    peripherals::ADC1,
    Blocking,
};

use spectrum_dsp::{AnalogInput, SampleTimer};

/// The S3 converter is 12-bit; the spectrum expects 10-bit readings.
const ADC_DROP_BITS: u32 = 2;

/// Microphone input on GPIO1 (ADC1 channel 0).
pub type MicPin = GpioPin<1>;

/// Run/stop flag for the sampling ticker, plus a wakeup for when it restarts.
pub struct SamplingGate {
    running: AtomicBool,
    resume: Signal<CriticalSectionRawMutex, ()>,
}

impl SamplingGate {
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
            resume: Signal::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub async fn wait_until_running(&self) {
        while !self.is_running() {
            self.resume.wait().await;
        }
    }
}

/// Copyable handle so both the sampler and the frame loop can drive the gate.
#[derive(Clone, Copy)]
pub struct GateHandle(&'static SamplingGate);

impl GateHandle {
    pub const fn new(gate: &'static SamplingGate) -> Self {
        Self(gate)
    }

    pub fn is_running(&self) -> bool {
        self.0.is_running()
    }

    pub async fn wait_until_running(&self) {
        self.0.wait_until_running().await
    }
}

impl SampleTimer for GateHandle {
    fn stop(&mut self) {
        self.0.running.store(false, Ordering::Release);
    }

    fn restart(&mut self) {
        self.0.running.store(true, Ordering::Release);
        self.0.resume.signal(());
    }
}

/// One-shot conversions on the microphone pin.
pub struct MicAdc {
    adc: Adc<'static, ADC1, Blocking>,
    pin: AdcPin<MicPin, ADC1>,
    busy: bool,
    finished: Option<u16>,
}

impl MicAdc {
    pub fn new(adc: Adc<'static, ADC1, Blocking>, pin: AdcPin<MicPin, ADC1>) -> Self {
        Self {
            adc,
            pin,
            busy: false,
            finished: None,
        }
    }

    fn read(&mut self) -> Option<u16> {
        match self.adc.read_oneshot(&mut self.pin) {
            Ok(value) => Some(value >> ADC_DROP_BITS),
            Err(nb::Error::WouldBlock) => None,
            Err(nb::Error::Other(())) => {
                // Give the slot back so the next tick can try again.
                self.busy = false;
                None
            }
        }
    }

    /// Collect the reading of the conversion in flight, if it has finished.
    pub fn poll(&mut self) -> Option<u16> {
        if !self.busy {
            return None;
        }
        let reading = self.finished.take().or_else(|| self.read());
        if reading.is_some() {
            self.busy = false;
        }
        reading
    }
}

impl AnalogInput for MicAdc {
    fn is_busy(&self) -> bool {
        self.busy
    }

    fn start_conversion(&mut self) {
        self.busy = true;
        // The first call kicks off the conversion; it may already be done.
        self.finished = self.read();
    }
}
