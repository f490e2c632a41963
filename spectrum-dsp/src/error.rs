use core::fmt;

/// Reasons a [`SpectrumConfig`](crate::config::SpectrumConfig) is refused at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    ZeroSampleRate,
    SampleRateTooHigh { sample_rate_hz: u32 },
    PeriodNotWholeMicros { sample_rate_hz: u32 },
    CalibrationOutOfRange { offset: u16 },
    ZeroFrameInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSampleRate => write!(f, "sample rate must be greater than 0"),
            ConfigError::SampleRateTooHigh { sample_rate_hz } => {
                write!(f, "sample rate {} Hz is above 1 MHz", sample_rate_hz)
            }
            ConfigError::PeriodNotWholeMicros { sample_rate_hz } => write!(
                f,
                "sample rate {} Hz does not divide 1 MHz into whole microseconds",
                sample_rate_hz
            ),
            ConfigError::CalibrationOutOfRange { offset } => {
                write!(f, "calibration offset {} exceeds the ADC full scale", offset)
            }
            ConfigError::ZeroFrameInterval => write!(f, "frame interval must be greater than 0"),
        }
    }
}
