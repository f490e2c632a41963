use embedded_hal::delay::DelayNs;

use crate::display::CharacterDisplay;

/// Banner shown once at power-up: a title over the configured sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splash<'a> {
    pub title: &'a str,
    pub column: u8,
}

impl Default for Splash<'_> {
    fn default() -> Self {
        Self {
            title: "Spectrum",
            column: 4,
        }
    }
}

impl Splash<'_> {
    /// Draw the banner, hold it for `hold_ms`, then clear the screen.
    pub fn show<D, P>(
        &self,
        display: &mut D,
        delay: &mut P,
        sample_rate_hz: u32,
        hold_ms: u32,
    ) -> Result<(), D::Error>
    where
        D: CharacterDisplay,
        P: DelayNs,
    {
        display.set_cursor(0, self.column)?;
        display.write_str(self.title)?;
        display.set_cursor(1, self.column)?;
        display.write_number(sample_rate_hz)?;
        display.write_str(" Hz")?;

        delay.delay_ms(hold_ms);

        display.clear()
    }
}
