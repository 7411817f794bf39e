//! Least-frequent-color quantization
//!
//! Removes the `n` rarest colors from an image and repaints their
//! pixels with the nearest surviving color:
//!
//! 1. Count occurrences of every distinct color.
//! 2. If `n` covers every color, return the buffer unchanged.
//! 3. Order colors by ascending count; equal counts break by
//!    descending blue, then green, then red. The first `n` are removed.
//! 4. The rest form the palette.
//! 5. Each removed color maps to the palette color at the smallest
//!    squared Euclidean RGB distance; distance ties keep the earliest
//!    palette entry in the ordering above.
//! 6. Matching pixels are rewritten in place.
//!
//! The nearest-color search is bounded to removed x kept pairs.

use crate::analysis::color_frequencies;
use rasterkit_core::{Pixel, PixelBuffer, Raster, Sample};
use std::collections::HashMap;

/// Remove the `n` least frequent colors, repainting with the nearest
/// surviving color.
///
/// With `n` at or above the distinct-color count the buffer is
/// returned unchanged.
pub fn reduce_colors(buffer: PixelBuffer, n: usize) -> PixelBuffer {
    match buffer {
        PixelBuffer::EightBit(raster) => reduce_raster(raster, n).into(),
        PixelBuffer::SixteenBit(raster) => reduce_raster(raster, n).into(),
    }
}

/// Rarity ordering: ascending count, ties by descending blue, green,
/// red. Distinct colors never compare equal, so the order is total and
/// the removal set is deterministic.
fn rarity_order<S: Sample>(a: &(Pixel<S>, u64), b: &(Pixel<S>, u64)) -> std::cmp::Ordering {
    a.1.cmp(&b.1)
        .then_with(|| b.0.blue.cmp(&a.0.blue))
        .then_with(|| b.0.green.cmp(&a.0.green))
        .then_with(|| b.0.red.cmp(&a.0.red))
}

fn reduce_raster<S: Sample>(mut raster: Raster<S>, n: usize) -> Raster<S> {
    let frequencies = color_frequencies(&raster);
    if n == 0 || n >= frequencies.len() {
        return raster;
    }

    let mut ordered: Vec<(Pixel<S>, u64)> = frequencies.into_iter().collect();
    ordered.sort_unstable_by(rarity_order);
    let (removed, kept) = ordered.split_at(n);

    let mut replacement: HashMap<Pixel<S>, Pixel<S>> = HashMap::with_capacity(n);
    for &(color, _) in removed {
        let mut best = kept[0].0;
        let mut best_dist = color.distance_squared(best);
        for &(candidate, _) in &kept[1..] {
            let dist = color.distance_squared(candidate);
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        replacement.insert(color, best);
    }

    for pixel in raster.pixels_mut() {
        if let Some(&color) = replacement.get(pixel) {
            *pixel = color;
        }
    }
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(r: u8, g: u8, b: u8, count: u64) -> (Pixel<u8>, u64) {
        (Pixel::new(r, g, b), count)
    }

    #[test]
    fn test_rarity_order_count_first() {
        let rare = entry(0, 0, 0, 1);
        let common = entry(255, 255, 255, 10);
        assert_eq!(rarity_order(&rare, &common), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_rarity_order_tie_break() {
        // Equal counts: higher blue is rarer, then green, then red
        let high_blue = entry(0, 0, 200, 5);
        let low_blue = entry(0, 0, 100, 5);
        assert_eq!(rarity_order(&high_blue, &low_blue), std::cmp::Ordering::Less);

        let high_green = entry(0, 200, 50, 5);
        let low_green = entry(0, 100, 50, 5);
        assert_eq!(
            rarity_order(&high_green, &low_green),
            std::cmp::Ordering::Less
        );

        let high_red = entry(200, 50, 50, 5);
        let low_red = entry(100, 50, 50, 5);
        assert_eq!(rarity_order(&high_red, &low_red), std::cmp::Ordering::Less);
    }
}
