//! Partial-block glyphs for sub-cell bar resolution.

#[cfg(feature = "logging")]
use defmt::info;

use crate::display::{CharacterDisplay, GlyphBitmap};

pub const GLYPH_ROWS: usize = 8;
pub const GLYPH_COUNT: u8 = 8;

/// All five pixels of a row lit.
pub const LIT_ROW: u8 = 0x1F;

/// Pattern with the bottom `lit_rows` rows lit and the rest blank.
pub const fn bar_glyph(lit_rows: usize) -> GlyphBitmap {
    let mut bitmap = [0u8; GLYPH_ROWS];
    let mut row = GLYPH_ROWS;
    while row > GLYPH_ROWS - lit_rows {
        row -= 1;
        bitmap[row] = LIT_ROW;
    }
    bitmap
}

/// Slot `c` holds the pattern with `c + 1` lit rows.
pub const BAR_GLYPHS: [GlyphBitmap; GLYPH_COUNT as usize] = [
    bar_glyph(1),
    bar_glyph(2),
    bar_glyph(3),
    bar_glyph(4),
    bar_glyph(5),
    bar_glyph(6),
    bar_glyph(7),
    bar_glyph(8),
];

/// Program the eight fill patterns into the display's custom glyph slots.
pub fn load_bar_glyphs<D: CharacterDisplay>(display: &mut D) -> Result<(), D::Error> {
    for (slot, bitmap) in BAR_GLYPHS.iter().enumerate() {
        display.define_custom_glyph(slot as u8, bitmap)?;
    }

    #[cfg(feature = "logging")]
    info!("Loaded {} bar glyphs", GLYPH_COUNT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_rows(bitmap: &GlyphBitmap) -> usize {
        bitmap.iter().filter(|&&row| row == LIT_ROW).count()
    }

    #[test]
    fn test_bar_glyph_fills_from_bottom() {
        assert_eq!(bar_glyph(0), [0; 8]);
        assert_eq!(bar_glyph(3), [0, 0, 0, 0, 0, LIT_ROW, LIT_ROW, LIT_ROW]);
        assert_eq!(bar_glyph(8), [LIT_ROW; 8]);
    }

    #[test]
    fn test_glyphs_are_monotonic() {
        for (slot, bitmap) in BAR_GLYPHS.iter().enumerate() {
            let fill = slot + 1;
            assert_eq!(lit_rows(bitmap), fill);
            assert_eq!(bitmap.iter().filter(|&&row| row == 0).count(), GLYPH_ROWS - fill);
            // Lit rows sit below the blank ones.
            assert!(bitmap[..GLYPH_ROWS - fill].iter().all(|&row| row == 0));
            assert!(bitmap[GLYPH_ROWS - fill..].iter().all(|&row| row == LIT_ROW));
        }

        for pair in BAR_GLYPHS.windows(2) {
            for (lower, higher) in pair[0].iter().zip(pair[1].iter()) {
                assert_eq!(lower & higher, *lower, "next glyph must keep every lit row");
            }
            assert!(lit_rows(&pair[1]) > lit_rows(&pair[0]));
        }
    }
}
