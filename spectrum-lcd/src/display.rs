use core::fmt::Write;

use heapless::String;

/// Eight pixel rows, top first. Only the low five bits of each row are shown.
pub type GlyphBitmap = [u8; 8];

pub const ROWS: u8 = 2;
pub const COLUMNS: u8 = 16;

/// A two-row character display with a handful of programmable glyphs.
///
/// Character codes `0..=7` select the custom glyphs, everything else is the
/// display's built-in character set.
pub trait CharacterDisplay {
    type Error;

    /// Bring the controller up. Leaves the screen empty with the cursor at (0, 0).
    fn initialize(&mut self) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error>;

    /// `row` in `0..ROWS`, `column` in `0..COLUMNS`.
    fn set_cursor(&mut self, row: u8, column: u8) -> Result<(), Self::Error>;

    /// Write one character code at the cursor and advance it.
    fn write_char(&mut self, code: u8) -> Result<(), Self::Error>;

    /// Program custom glyph `index` (`0..=7`).
    fn define_custom_glyph(&mut self, index: u8, bitmap: &GlyphBitmap) -> Result<(), Self::Error>;

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        for byte in text.bytes() {
            self.write_char(byte)?;
        }
        Ok(())
    }

    /// Decimal, no padding.
    fn write_number(&mut self, value: u32) -> Result<(), Self::Error> {
        let mut text: String<10> = String::new();
        // u32::MAX has ten digits, so this cannot run out of room.
        let _ = write!(text, "{}", value);
        self.write_str(&text)
    }
}

impl<D: CharacterDisplay + ?Sized> CharacterDisplay for &mut D {
    type Error = D::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        (**self).initialize()
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        (**self).clear()
    }

    fn set_cursor(&mut self, row: u8, column: u8) -> Result<(), Self::Error> {
        (**self).set_cursor(row, column)
    }

    fn write_char(&mut self, code: u8) -> Result<(), Self::Error> {
        (**self).write_char(code)
    }

    fn define_custom_glyph(&mut self, index: u8, bitmap: &GlyphBitmap) -> Result<(), Self::Error> {
        (**self).define_custom_glyph(index, bitmap)
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).write_str(text)
    }
}
