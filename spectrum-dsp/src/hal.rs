//! Hardware capabilities the acquisition state machine drives.
//!
//! Boards implement these over their timer and converter peripherals; tests
//! implement them with recording doubles.

/// Periodic tick source that paces conversions.
pub trait SampleTimer {
    /// Stop counting. No ticks are delivered until [`SampleTimer::restart`].
    fn stop(&mut self);

    /// Clear the count and start ticking again.
    fn restart(&mut self);
}

/// Single-channel converter returning readings in `0..=ADC_FULL_SCALE`.
///
/// The finished reading is delivered separately, by the board calling
/// [`SampleAcquisition::on_conversion_complete`](crate::acquisition::SampleAcquisition::on_conversion_complete).
pub trait AnalogInput {
    /// True while a previously requested conversion has not completed.
    fn is_busy(&self) -> bool;

    /// Begin one conversion.
    fn start_conversion(&mut self);
}

impl<T: SampleTimer + ?Sized> SampleTimer for &mut T {
    fn stop(&mut self) {
        (**self).stop()
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}

impl<A: AnalogInput + ?Sized> AnalogInput for &mut A {
    fn is_busy(&self) -> bool {
        (**self).is_busy()
    }

    fn start_conversion(&mut self) {
        (**self).start_conversion()
    }
}
