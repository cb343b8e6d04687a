use std::fmt;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Glyph columns across a font sheet.
pub const GRID_COLUMNS: u32 = 16;
/// Glyph rows down a font sheet.
pub const GRID_ROWS: u32 = 16;
/// Number of glyph codes in a sheet.
pub const GLYPH_COUNT: usize = (GRID_COLUMNS * GRID_ROWS) as usize;

/// Orientation in which a glyph's pixels are packed into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(rename_all = "lowercase"))]
pub enum Mode {
    /// One line per scanline, top to bottom.
    #[default]
    Row,
    /// One line per pixel column, left to right, each read bottom to top.
    Column,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Row => "row",
            Mode::Column => "column",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which channel of a decoded colour image supplies the per-pixel sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(rename_all = "lowercase"))]
pub enum Channel {
    /// The G component of RGB.
    #[default]
    Green,
    /// Luminance of the RGB triple.
    Luma,
}

/// Binarization level: a sample is foreground iff it is at least `level`.
///
/// The default level of 255 only accepts fully white samples, which assumes
/// the sheet was already thresholded to pure black and white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(transparent))]
pub struct Threshold(pub u8);

impl Threshold {
    pub const MAX: Threshold = Threshold(u8::MAX);

    #[inline]
    pub fn is_set(self, sample: u8) -> bool {
        sample >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::MAX
    }
}

/// Fully resolved options for turning a decoded sheet into an encoded font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    pub mode: Mode,
    pub threshold: Threshold,
    pub channel: Channel,
    /// Reject sheets whose dimensions are not multiples of the grid size.
    pub strict: bool,
}
