use smallvec::SmallVec;

/// Packed bytes of one glyph line. Lines up to 64 pixels stay inline.
pub type PackedLine = SmallVec<[u8; 8]>;

/// Bytes needed to hold `bit_count` bits.
#[inline]
pub fn bytes_per_line(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// Pack the first `width` pixels of a line into `bytes_per_line(width)`
/// bytes, most significant bit first.
///
/// Pixels at index `width` and beyond are not packed. A line shorter than
/// `width` reads as clear past its end. Bits past `width` are never written,
/// so the low bits of the final byte stay zero.
pub fn pack_line(bits: &[bool], width: usize) -> PackedLine {
    let mut packed = PackedLine::new();
    for b in 0..bytes_per_line(width) {
        let mut byte = 0u8;
        let mut mask = 0x80u8;
        for x in 0..8 {
            let i = b * 8 + x;
            if i >= width {
                break;
            }
            if bits.get(i).copied().unwrap_or(false) {
                byte |= mask;
            }
            mask >>= 1;
        }
        packed.push(byte);
    }
    packed
}

/// Inverse of [`pack_line`]: recover `bit_count` bits from packed bytes.
pub fn unpack_line(bytes: &[u8], bit_count: usize) -> Vec<bool> {
    assert!(bytes.len() >= bytes_per_line(bit_count));
    (0..bit_count)
        .map(|i| bytes[i / 8] & (0x80 >> (i % 8)) != 0)
        .collect()
}
