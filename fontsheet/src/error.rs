use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("sheet size {width}x{height} is not a multiple of the 16x16 glyph grid")]
    NotDivisible { width: u32, height: u32 },

    #[error("sheet size {width}x{height} is too small to hold a 16x16 glyph grid")]
    TooSmall { width: u32, height: u32 },
}
