//! Glyph cell geometry for a 16×16 font sheet.

use log::{debug, warn};

use crate::bits;
use crate::error::GridError;
use crate::image::Bitmap;
use crate::types::{Mode, GRID_COLUMNS, GRID_ROWS};

/// Per-glyph cell size derived from the sheet dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGrid {
    pub char_width: u32,
    pub char_height: u32,
}

impl GlyphGrid {
    /// Cell size by integer division; remainder pixels on the right and
    /// bottom edges are dropped.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        let grid = GlyphGrid {
            char_width: width / GRID_COLUMNS,
            char_height: height / GRID_ROWS,
        };
        let (dropped_x, dropped_y) = (width % GRID_COLUMNS, height % GRID_ROWS);
        if dropped_x != 0 || dropped_y != 0 {
            warn!(
                "sheet {}x{} is not a multiple of {}x{}; ignoring {} rightmost columns and {} bottom rows",
                width, height, GRID_COLUMNS, GRID_ROWS, dropped_x, dropped_y
            );
        }
        debug!(
            "glyph cells are {}x{} pixels, {} bytes per line",
            grid.char_width,
            grid.char_height,
            grid.bytes_per_line()
        );
        grid
    }

    /// Like [`GlyphGrid::from_dimensions`] but refuses sheets that would be truncated.
    pub fn checked(width: u32, height: u32) -> Result<Self, GridError> {
        if width < GRID_COLUMNS || height < GRID_ROWS {
            return Err(GridError::TooSmall { width, height });
        }
        if width % GRID_COLUMNS != 0 || height % GRID_ROWS != 0 {
            return Err(GridError::NotDivisible { width, height });
        }
        Ok(Self::from_dimensions(width, height))
    }

    /// Top-left pixel of the cell holding `code`.
    pub fn origin(&self, code: u8) -> (u32, u32) {
        let code = code as u32;
        (
            (code % GRID_COLUMNS) * self.char_width,
            (code / GRID_COLUMNS) * self.char_height,
        )
    }

    /// Packed bytes per encoded line. Sized from the cell width in both
    /// modes, so column lines keep only their first `char_width` bits.
    pub fn bytes_per_line(&self) -> usize {
        bits::bytes_per_line(self.char_width as usize)
    }

    /// Number of encoded lines per glyph for the given mode.
    pub fn line_count(&self, mode: Mode) -> usize {
        match mode {
            Mode::Row => self.char_height as usize,
            Mode::Column => self.char_width as usize,
        }
    }

    /// Extract the lines of a glyph cell.
    ///
    /// Row mode yields scanlines top to bottom. Column mode yields pixel
    /// columns left to right, each read from the bottom row of the cell up.
    pub fn cell_lines(&self, bitmap: &Bitmap, code: u8, mode: Mode) -> Vec<Vec<bool>> {
        let (ox, oy) = self.origin(code);
        match mode {
            Mode::Row => (0..self.char_height)
                .map(|y| {
                    (0..self.char_width)
                        .map(|x| bitmap.get(ox + x, oy + y))
                        .collect()
                })
                .collect(),
            Mode::Column => (0..self.char_width)
                .map(|x| {
                    (0..self.char_height)
                        .rev()
                        .map(|y| bitmap.get(ox + x, oy + y))
                        .collect()
                })
                .collect(),
        }
    }
}
