use crate::error::ConfigError;

// --- Window Config ---
pub const WINDOW_LEN: usize = 32; // Samples per transform window (N)
pub const BIN_COUNT: usize = WINDOW_LEN / 2; // Magnitude bins per frame (K)
pub const QUARTER_CYCLE: usize = WINDOW_LEN / 4; // Table offset from sine to cosine

// --- ADC Config ---
pub const ADC_FULL_SCALE: u16 = 1023; // 10-bit converter
pub const DEFAULT_CALIBRATION_OFFSET: u16 = 504; // Reading with no signal on the input
pub const SAMPLE_GAIN_SHIFT: u32 = 3; // De-biased readings are scaled by 8

// --- Transform Config ---
// Empirical amplitude response of the display. Do not replace with a normalization.
pub const TRANSFORM_SCALE_DIVISOR: i32 = 1_000_000;
pub const MAGNITUDE_DIVISOR: i32 = 4; // (|re| + |im|) / 4

// --- Timing Config ---
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 10_000;
pub const MICROS_PER_SECOND: u32 = 1_000_000;
pub const MAX_SAMPLE_RATE_HZ: u32 = MICROS_PER_SECOND; // Sample period must be at least 1 us
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 100; // Minimum time between two rendered frames
pub const DEFAULT_SPLASH_HOLD_MS: u32 = 2_000;

/// Parameters fixed once at startup. Nothing here changes while sampling runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpectrumConfig {
    pub sample_rate_hz: u32,
    pub calibration_offset: u16,
    pub frame_interval_ms: u32,
    pub splash_hold_ms: u32,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            calibration_offset: DEFAULT_CALIBRATION_OFFSET,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            splash_hold_ms: DEFAULT_SPLASH_HOLD_MS,
        }
    }
}

impl SpectrumConfig {
    pub const fn with_sample_rate_hz(mut self, sample_rate_hz: u32) -> Self {
        self.sample_rate_hz = sample_rate_hz;
        self
    }

    pub const fn with_calibration_offset(mut self, calibration_offset: u16) -> Self {
        self.calibration_offset = calibration_offset;
        self
    }

    pub const fn with_frame_interval_ms(mut self, frame_interval_ms: u32) -> Self {
        self.frame_interval_ms = frame_interval_ms;
        self
    }

    pub const fn with_splash_hold_ms(mut self, splash_hold_ms: u32) -> Self {
        self.splash_hold_ms = splash_hold_ms;
        self
    }

    /// Checks that the configuration describes a timing and bias the board can run with.
    ///
    /// A failure here means the firmware must not start sampling at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.sample_rate_hz > MAX_SAMPLE_RATE_HZ {
            return Err(ConfigError::SampleRateTooHigh {
                sample_rate_hz: self.sample_rate_hz,
            });
        }
        // The ticker counts whole microseconds; a remainder here would drift.
        if MICROS_PER_SECOND % self.sample_rate_hz != 0 {
            return Err(ConfigError::PeriodNotWholeMicros {
                sample_rate_hz: self.sample_rate_hz,
            });
        }
        if self.calibration_offset > ADC_FULL_SCALE {
            return Err(ConfigError::CalibrationOutOfRange {
                offset: self.calibration_offset,
            });
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        #[cfg(feature = "logging")]
        defmt::info!("SpectrumConfig accepted: {}", self);

        Ok(())
    }

    /// Period between two timer ticks, in microseconds.
    pub fn sample_period_us(&self) -> u32 {
        MICROS_PER_SECOND / self.sample_rate_hz.max(1)
    }

    /// Compare value for an up-counting timer clocked at `clock_hz`.
    ///
    /// 16 MHz at 10 kHz gives 1600.
    pub fn timer_compare_value(&self, clock_hz: u32) -> u32 {
        clock_hz / self.sample_rate_hz.max(1)
    }
}
