//! HD44780-compatible 16x2 character LCD on a 4-bit parallel bus.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use spectrum_lcd::{CharacterDisplay, GlyphBitmap};

const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FOUR_BIT_TWO_LINE: u8 = 0x28;
const CMD_SET_CGRAM: u8 = 0x40;
const CMD_SET_DDRAM: u8 = 0x80;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Register {
    Command,
    Data,
}

pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    fn pulse_enable(&mut self) -> Result<(), P::Error> {
        self.en.set_high()?;
        self.delay.delay_us(1);
        self.en.set_low()?;
        self.delay.delay_us(100);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), P::Error> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(PinState::from(nibble & (1 << bit) != 0))?;
        }
        self.pulse_enable()
    }

    fn write(&mut self, value: u8, register: Register) -> Result<(), P::Error> {
        match register {
            Register::Command => self.rs.set_low()?,
            Register::Data => self.rs.set_high()?,
        }
        self.write_nibble(value >> 4)?;
        self.write_nibble(value & 0x0F)
    }

    fn command(&mut self, value: u8) -> Result<(), P::Error> {
        self.write(value, Register::Command)
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    type Error = P::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        self.rs.set_low()?;
        self.en.set_low()?;
        self.delay.delay_ms(15);

        // Two nibbles each: force 8-bit mode, then drop to 4-bit.
        self.command(0x33)?;
        self.delay.delay_ms(5);
        self.command(0x32)?;
        self.delay.delay_us(100);

        self.command(CMD_FOUR_BIT_TWO_LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_INCREMENT)?;
        self.set_cursor(0, 0)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, column: u8) -> Result<(), Self::Error> {
        let offset = ROW_OFFSETS[(row as usize).min(ROW_OFFSETS.len() - 1)];
        self.command(CMD_SET_DDRAM | (offset + (column & 0x3F)))
    }

    fn write_char(&mut self, code: u8) -> Result<(), Self::Error> {
        self.write(code, Register::Data)
    }

    fn define_custom_glyph(&mut self, index: u8, bitmap: &GlyphBitmap) -> Result<(), Self::Error> {
        self.command(CMD_SET_CGRAM | ((index & 0x07) << 3))?;
        for &row in bitmap.iter() {
            self.write(row, Register::Data)?;
        }
        // Data writes go to CGRAM until an address in DDRAM is selected again.
        self.command(CMD_SET_DDRAM)
    }
}
