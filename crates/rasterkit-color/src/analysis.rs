//! Color analysis
//!
//! Frequency counting over the distinct colors of a buffer. The
//! frequency table is transient: built, consumed by the quantizer (or a
//! caller), and dropped.

use rasterkit_core::{Pixel, PixelBuffer, Raster, Sample};
use std::collections::HashMap;

/// Occurrence count for every distinct color in a raster.
pub fn color_frequencies<S: Sample>(raster: &Raster<S>) -> HashMap<Pixel<S>, u64> {
    let mut frequencies = HashMap::new();
    for pixel in raster.pixels() {
        *frequencies.entry(*pixel).or_insert(0) += 1;
    }
    frequencies
}

/// Number of distinct colors in a buffer.
pub fn count_colors(buffer: &PixelBuffer) -> usize {
    match buffer {
        PixelBuffer::EightBit(raster) => color_frequencies(raster).len(),
        PixelBuffer::SixteenBit(raster) => color_frequencies(raster).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_test::buffer_8;

    #[test]
    fn test_frequencies() {
        let buffer = buffer_8(
            2,
            2,
            255,
            &[(1, 2, 3), (1, 2, 3), (9, 9, 9), (1, 2, 3)],
        );
        let PixelBuffer::EightBit(raster) = &buffer else {
            panic!("expected 8-bit buffer");
        };
        let freq = color_frequencies(raster);
        assert_eq!(freq.len(), 2);
        assert_eq!(freq[&Pixel::new(1, 2, 3)], 3);
        assert_eq!(freq[&Pixel::new(9, 9, 9)], 1);
        assert_eq!(count_colors(&buffer), 2);
    }
}
