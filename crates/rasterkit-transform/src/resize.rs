//! Bilinear resizing
//!
//! Each destination pixel `(xp, yp)` maps onto the source at
//! `sx = xp * src_w / new_w`, `sy = yp * src_h / new_h` (full-image
//! mapping, no pixel-center offset). The four surrounding source pixels
//! are blended horizontally at `wx = sx - floor(sx)` and then
//! vertically at `wy`, rounding half away from zero once at the end.
//! The upper corner indices clamp to the last row/column whenever
//! `ceil` lands past the edge.
//!
//! A target dimension of 1 samples the source midpoint `(src - 1) / 2`
//! on that axis, so shrinking any image to 1x1 yields a genuinely
//! interpolated pixel rather than a copy of a corner.

use crate::{TransformError, TransformResult};
use rasterkit_core::{Pixel, PixelBuffer, Raster, Sample};

/// Resize a buffer to new dimensions with bilinear interpolation.
///
/// The max intensity and storage tier are unchanged.
///
/// # Errors
///
/// Returns [`TransformError::InvalidDimensions`] if either target
/// dimension is zero.
pub fn resize(
    buffer: &PixelBuffer,
    new_width: u32,
    new_height: u32,
) -> TransformResult<PixelBuffer> {
    if new_width == 0 || new_height == 0 {
        return Err(TransformError::InvalidDimensions {
            width: new_width,
            height: new_height,
        });
    }
    let buffer = match buffer {
        PixelBuffer::EightBit(raster) => resize_raster(raster, new_width, new_height)?.into(),
        PixelBuffer::SixteenBit(raster) => resize_raster(raster, new_width, new_height)?.into(),
    };
    Ok(buffer)
}

/// Source coordinate for destination index `dst` along one axis.
#[inline]
fn source_coord(dst: u32, dst_size: u32, src_size: u32) -> f64 {
    if dst_size == 1 {
        (src_size - 1) as f64 / 2.0
    } else {
        dst as f64 * src_size as f64 / dst_size as f64
    }
}

fn resize_raster<S: Sample>(
    src: &Raster<S>,
    new_width: u32,
    new_height: u32,
) -> TransformResult<Raster<S>> {
    let header = src.header().with_dimensions(new_width, new_height)?;
    let src_w = src.width();
    let src_h = src.height();
    let mut pixels = Vec::with_capacity(header.pixel_count());
    for yp in 0..new_height {
        let sy = source_coord(yp, new_height, src_h);
        let lower_y = sy.floor() as u32;
        let upper_y = (sy.ceil() as u32).min(src_h - 1);
        let wy = sy - lower_y as f64;
        for xp in 0..new_width {
            let sx = source_coord(xp, new_width, src_w);
            let lower_x = sx.floor() as u32;
            let upper_x = (sx.ceil() as u32).min(src_w - 1);
            let wx = sx - lower_x as f64;
            pixels.push(blend(
                src.pixel(lower_x, lower_y),
                src.pixel(upper_x, lower_y),
                src.pixel(lower_x, upper_y),
                src.pixel(upper_x, upper_y),
                wx,
                wy,
            ));
        }
    }
    Ok(Raster::new(header, pixels)?)
}

#[inline]
fn lerp(a: f64, b: f64, weight: f64) -> f64 {
    a + weight * (b - a)
}

/// Blend four corner pixels: horizontally at `wx`, then vertically at
/// `wy`. `f64::round` is half-away-from-zero, as required.
fn blend<S: Sample>(
    p00: Pixel<S>,
    p10: Pixel<S>,
    p01: Pixel<S>,
    p11: Pixel<S>,
    wx: f64,
    wy: f64,
) -> Pixel<S> {
    let channel = |c00: S, c10: S, c01: S, c11: S| -> S {
        let top = lerp(c00.to_u32() as f64, c10.to_u32() as f64, wx);
        let bottom = lerp(c01.to_u32() as f64, c11.to_u32() as f64, wx);
        let value = lerp(top, bottom, wy).round();
        S::from_u32((value as u32).min(S::MAX))
    };
    Pixel::new(
        channel(p00.red, p10.red, p01.red, p11.red),
        channel(p00.green, p10.green, p01.green, p11.green),
        channel(p00.blue, p10.blue, p01.blue, p11.blue),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_coord_mapping() {
        // Full-image mapping: xp * src / new
        assert_eq!(source_coord(0, 4, 2), 0.0);
        assert_eq!(source_coord(1, 4, 2), 0.5);
        assert_eq!(source_coord(3, 4, 2), 1.5);
        // Identity when sizes match
        assert_eq!(source_coord(3, 5, 5), 3.0);
        // Size-1 target samples the midpoint
        assert_eq!(source_coord(0, 1, 2), 0.5);
        assert_eq!(source_coord(0, 1, 1), 0.0);
        assert_eq!(source_coord(0, 1, 5), 2.0);
    }

    #[test]
    fn test_blend_rounds_half_up() {
        let p = |v: u32| Pixel::<u8>::gray(v as u8);
        // 100 -> 101 at wx = 0.5 between 100 and 101: 100.5 rounds away from zero
        let out = blend(p(100), p(101), p(100), p(101), 0.5, 0.0);
        assert_eq!(out, Pixel::gray(101));
        // Weight 0 keeps the lower corner exactly
        let out = blend(p(7), p(200), p(90), p(200), 0.0, 0.0);
        assert_eq!(out, Pixel::gray(7));
    }
}
