use crate::types::Threshold;

/// Decoded sheet: one 8-bit sample per pixel, rows packed back to back.
#[derive(Debug, Clone)]
pub struct SampleImage {
    pub width: u32,
    pub height: u32,
    pub buf: Vec<u8>,
}

impl SampleImage {
    /// A sheet with every sample at zero (background).
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_raw(width, height, vec![0u8; (width * height) as usize])
    }

    /// Wrap decoder output; `buf` holds exactly `width * height` samples.
    pub fn from_raw(width: u32, height: u32, buf: Vec<u8>) -> Self {
        assert_eq!(buf.len(), (width * height) as usize);
        Self { width, height, buf }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.buf[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, val: u8) {
        self.buf[(y * self.width + x) as usize] = val;
    }

    /// Reduce every sample to a single foreground/background bit.
    pub fn binarize(&self, threshold: Threshold) -> Bitmap {
        Bitmap {
            width: self.width,
            height: self.height,
            bits: self.buf.iter().map(|&s| threshold.is_set(s)).collect(),
        }
    }
}

/// Binarized image, one `bool` per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub bits: Vec<bool>,
}

impl Bitmap {
    /// Create a bitmap with every pixel clear.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// `bits` must hold exactly `width * height` values.
    pub fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Self {
        assert_eq!(bits.len(), (width * height) as usize);
        Self { width, height, bits }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, val: bool) {
        self.bits[(y * self.width + x) as usize] = val;
    }
}
