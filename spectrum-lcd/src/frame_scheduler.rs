//! Foreground loop: wait for a full window, transform it, hand sampling back, draw, pace.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

#[cfg(feature = "logging")]
use defmt::{info, trace};

use spectrum_dsp::{process_window, SampleAcquisition, SampleTimer, SpectrumBins, SpectrumConfig};

use crate::bar_graph::BarGraph;
use crate::display::CharacterDisplay;
use crate::glyphs::load_bar_glyphs;
use crate::splash::Splash;

/// What one call to [`FrameScheduler::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No complete window yet.
    Waiting,
    /// A frame was transformed and drawn; these are the unclipped bins.
    Rendered(SpectrumBins),
}

pub struct FrameScheduler<'a, T, D, P> {
    acquisition: &'a SampleAcquisition,
    timer: T,
    display: D,
    delay: P,
    graph: BarGraph,
    config: SpectrumConfig,
    frames_rendered: u32,
}

impl<'a, T, D, P> FrameScheduler<'a, T, D, P>
where
    T: SampleTimer,
    D: CharacterDisplay,
    P: DelayNs,
{
    pub fn new(
        acquisition: &'a SampleAcquisition,
        timer: T,
        display: D,
        delay: P,
        config: SpectrumConfig,
    ) -> Self {
        Self {
            acquisition,
            timer,
            display,
            delay,
            graph: BarGraph::new(),
            config,
            frames_rendered: 0,
        }
    }

    /// Bring up the display, program the bar glyphs, show the splash and start sampling.
    ///
    /// Sampling starts even if a display step fails; the error is returned
    /// afterwards and the remaining display steps are skipped.
    pub fn start(&mut self, splash: &Splash<'_>) -> Result<(), D::Error> {
        let shown = self.bring_up_display(splash);
        self.acquisition.start(&mut self.timer);

        #[cfg(feature = "logging")]
        info!("Sampling started at {} Hz", self.config.sample_rate_hz);

        shown
    }

    fn bring_up_display(&mut self, splash: &Splash<'_>) -> Result<(), D::Error> {
        self.display.initialize()?;
        load_bar_glyphs(&mut self.display)?;
        splash.show(
            &mut self.display,
            &mut self.delay,
            self.config.sample_rate_hz,
            self.config.splash_hold_ms,
        )
    }

    /// Check the ready signal once and, if a window is waiting, run one full frame.
    ///
    /// Sampling is re-armed only after the window has been copied out and
    /// transformed, and before drawing, so the next window fills while the
    /// display is being written.
    pub fn poll(&mut self) -> Result<FrameOutcome, D::Error> {
        let Some(window) = self.acquisition.read_window() else {
            return Ok(FrameOutcome::Waiting);
        };

        let bins = process_window(&window);
        let rearmed = self.acquisition.rearm(&mut self.timer);
        // Only this loop leaves Full, so the window just read is still waiting.
        debug_assert!(rearmed);

        self.graph.draw(&mut self.display, &bins)?;
        self.frames_rendered = self.frames_rendered.wrapping_add(1);

        #[cfg(feature = "logging")]
        trace!("Frame {} drawn: {}", self.frames_rendered, bins);

        self.delay.delay_ms(self.config.frame_interval_ms);

        Ok(FrameOutcome::Rendered(bins))
    }

    /// Busy-poll forever. Only returns if the display reports an error.
    ///
    /// A converter that never completes keeps this spinning with no frames.
    pub fn run(&mut self) -> Result<Infallible, D::Error> {
        loop {
            self.poll()?;
        }
    }

    pub fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn delay(&self) -> &P {
        &self.delay
    }
}
