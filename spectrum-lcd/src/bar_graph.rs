use spectrum_dsp::{SpectrumBins, BIN_COUNT};

use crate::display::{CharacterDisplay, COLUMNS};

// Every bin gets its own column.
const _: () = assert!(BIN_COUNT <= COLUMNS as usize);

/// Highest level a bar can show. Two cells of eight rows would allow 15, the top step is unused.
pub const MAX_BAR_LEVEL: i32 = 14;
/// Levels above this spill into the top cell.
const BOTTOM_CELL_LEVEL: u8 = 7;

/// Built-in character with every pixel lit.
pub const FULL_BLOCK: u8 = 0xFF;
pub const BLANK: u8 = b' ';

pub const TOP_ROW: u8 = 0;
pub const BOTTOM_ROW: u8 = 1;

/// Clip a transform magnitude into the displayable range.
pub fn clip_level(magnitude: i32) -> u8 {
    magnitude.clamp(0, MAX_BAR_LEVEL) as u8
}

/// Character codes for the two cells of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarCell {
    pub top: u8,
    pub bottom: u8,
}

impl BarCell {
    /// The bottom cell fills first; past that the top cell takes over with a full block underneath.
    pub fn from_level(level: u8) -> Self {
        if level > BOTTOM_CELL_LEVEL {
            Self {
                top: level - BOTTOM_CELL_LEVEL,
                bottom: FULL_BLOCK,
            }
        } else {
            Self {
                top: BLANK,
                bottom: level,
            }
        }
    }
}

/// Renders one frame of bins as sixteen two-cell bars, bin `u` in column `u`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarGraph;

impl BarGraph {
    pub const fn new() -> Self {
        Self
    }

    pub fn cells(&self, bins: &SpectrumBins) -> [BarCell; BIN_COUNT] {
        let mut cells = [BarCell::from_level(0); BIN_COUNT];
        for (cell, &magnitude) in cells.iter_mut().zip(bins.iter()) {
            *cell = BarCell::from_level(clip_level(magnitude));
        }
        cells
    }

    /// Redraw every column. No state carries over between frames.
    pub fn draw<D: CharacterDisplay>(&self, display: &mut D, bins: &SpectrumBins) -> Result<(), D::Error> {
        for (column, cell) in (0..COLUMNS).zip(self.cells(bins).iter()) {
            display.set_cursor(TOP_ROW, column)?;
            display.write_char(cell.top)?;
            display.set_cursor(BOTTOM_ROW, column)?;
            display.write_char(cell.bottom)?;
        }
        Ok(())
    }
}
