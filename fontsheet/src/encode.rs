//! Glyph encoding: slice a binarized sheet into 256 cells and pack each
//! cell line by line.

use crate::bits::{self, PackedLine};
use crate::error::GridError;
use crate::grid::GlyphGrid;
use crate::image::{Bitmap, SampleImage};
use crate::types::{EncodeOptions, Mode, GLYPH_COUNT};

/// One row or column of a glyph: the packed bytes and the bits they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLine {
    pub bytes: PackedLine,
    pub bits: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedGlyph {
    pub code: u8,
    pub lines: Vec<EncodedLine>,
}

/// A whole sheet encoded in glyph-code order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFont {
    pub char_width: u32,
    pub char_height: u32,
    pub mode: Mode,
    pub glyphs: Vec<EncodedGlyph>,
}

impl EncodedFont {
    /// C identifier of the emitted array, e.g. `console_font_8x8`.
    pub fn array_name(&self) -> String {
        format!("console_font_{}x{}", self.char_width, self.char_height)
    }

    pub fn glyph(&self, code: u8) -> &EncodedGlyph {
        &self.glyphs[code as usize]
    }
}

/// Encode a single glyph cell.
///
/// Every line packs `char_width` bits, in column mode too. Column lines keep
/// their full bit sequence for the comment either way.
pub fn encode_glyph(bitmap: &Bitmap, grid: &GlyphGrid, code: u8, mode: Mode) -> EncodedGlyph {
    let width = grid.char_width as usize;
    let lines = grid
        .cell_lines(bitmap, code, mode)
        .into_iter()
        .map(|bits| EncodedLine {
            bytes: bits::pack_line(&bits, width),
            bits,
        })
        .collect();
    EncodedGlyph { code, lines }
}

/// Encode all 256 glyphs of a sheet with an explicit grid.
pub fn encode_with_grid(bitmap: &Bitmap, grid: GlyphGrid, mode: Mode) -> EncodedFont {
    let glyphs = (0..GLYPH_COUNT)
        .map(|code| encode_glyph(bitmap, &grid, code as u8, mode))
        .collect();
    EncodedFont {
        char_width: grid.char_width,
        char_height: grid.char_height,
        mode,
        glyphs,
    }
}

/// Encode all 256 glyphs, deriving the cell size from the bitmap.
///
/// Sheets that are not a multiple of 16 in either direction are truncated.
pub fn encode(bitmap: &Bitmap, mode: Mode) -> EncodedFont {
    let grid = GlyphGrid::from_dimensions(bitmap.width, bitmap.height);
    encode_with_grid(bitmap, grid, mode)
}

/// Validate (when strict), binarize and encode a decoded sheet.
pub fn encode_image(image: &SampleImage, options: &EncodeOptions) -> Result<EncodedFont, GridError> {
    let grid = if options.strict {
        GlyphGrid::checked(image.width, image.height)?
    } else {
        GlyphGrid::from_dimensions(image.width, image.height)
    };
    let bitmap = image.binarize(options.threshold);
    Ok(encode_with_grid(&bitmap, grid, options.mode))
}
