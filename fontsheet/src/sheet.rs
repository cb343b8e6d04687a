/// Synthetic font sheets: compose a 16×16 grid of glyph cells into an image.
use crate::image::SampleImage;
use crate::types::{GRID_COLUMNS, GRID_ROWS};

/// Sample value for foreground pixels.
pub const INK: u8 = 255;
/// Sample value for background pixels.
pub const PAPER: u8 = 0;

/// Builder for constructing font sheets glyph by glyph.
pub struct SheetBuilder {
    char_width: u32,
    char_height: u32,
    image: SampleImage,
}

impl SheetBuilder {
    /// Start from a sheet with every pixel set to [`PAPER`].
    pub fn new(char_width: u32, char_height: u32) -> Self {
        Self {
            char_width,
            char_height,
            image: SampleImage::new(char_width * GRID_COLUMNS, char_height * GRID_ROWS),
        }
    }

    /// Fill the whole cell of `code` with `value`.
    pub fn fill_glyph(mut self, code: u8, value: u8) -> Self {
        for y in 0..self.char_height {
            for x in 0..self.char_width {
                self.put(code, x, y, value);
            }
        }
        self
    }

    /// Set one pixel inside the cell of `code`, in cell-local coordinates.
    pub fn pixel(mut self, code: u8, x: u32, y: u32, value: u8) -> Self {
        self.put(code, x, y, value);
        self
    }

    /// Draw glyph rows from strings where `#` is ink and anything else is paper.
    pub fn glyph_rows(mut self, code: u8, rows: &[&str]) -> Self {
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let value = if ch == '#' { INK } else { PAPER };
                self.put(code, x as u32, y as u32, value);
            }
        }
        self
    }

    /// Fill every glyph cell with `value`.
    pub fn fill(mut self, value: u8) -> Self {
        self.image.buf.fill(value);
        self
    }

    pub fn build(self) -> SampleImage {
        self.image
    }

    fn put(&mut self, code: u8, x: u32, y: u32, value: u8) {
        assert!(x < self.char_width && y < self.char_height);
        let code = code as u32;
        let ox = (code % GRID_COLUMNS) * self.char_width;
        let oy = (code / GRID_COLUMNS) * self.char_height;
        self.image.set(ox + x, oy + y, value);
    }
}
