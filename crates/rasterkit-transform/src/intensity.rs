//! Linear intensity rescaling
//!
//! Remaps every channel from the buffer's declared max intensity to a
//! new one: `new = floor(old * new_max / old_max)`. Division truncates,
//! it does not round. When old and new max fall in the same storage
//! tier the pixels are rewritten in place; crossing the 255/256
//! boundary always allocates a buffer at the other channel width.

use crate::{TransformError, TransformResult};
use rasterkit_core::{EIGHT_BIT_MAX, PixelBuffer, Raster, SIXTEEN_BIT_MAX, Sample};

/// Rescale every channel to a new max intensity.
///
/// # Errors
///
/// Returns [`TransformError::InvalidMaxValue`] if `new_max` is zero or
/// greater than 65535.
pub fn rescale(buffer: PixelBuffer, new_max: u32) -> TransformResult<PixelBuffer> {
    if new_max == 0 || new_max > SIXTEEN_BIT_MAX {
        return Err(TransformError::InvalidMaxValue(new_max));
    }
    let sixteen_bit = new_max > EIGHT_BIT_MAX;
    let buffer = match buffer {
        PixelBuffer::EightBit(raster) if !sixteen_bit => rescale_in_place(raster, new_max)?.into(),
        PixelBuffer::EightBit(raster) => rescale_converting::<u8, u16>(raster, new_max)?.into(),
        PixelBuffer::SixteenBit(raster) if sixteen_bit => rescale_in_place(raster, new_max)?.into(),
        PixelBuffer::SixteenBit(raster) => rescale_converting::<u16, u8>(raster, new_max)?.into(),
    };
    Ok(buffer)
}

/// One channel: exact integer scaling, truncating toward zero.
#[inline]
fn scale_channel(value: u32, old_max: u32, new_max: u32) -> u32 {
    (value as u64 * new_max as u64 / old_max as u64) as u32
}

/// Same tier: rewrite the owned pixel storage.
fn rescale_in_place<S: Sample>(mut raster: Raster<S>, new_max: u32) -> TransformResult<Raster<S>> {
    let old_max = raster.max_value();
    for pixel in raster.pixels_mut() {
        // Samples above the declared max can scale past the tier; clamp.
        *pixel = pixel.map(|c| S::from_u32(scale_channel(c.to_u32(), old_max, new_max).min(S::MAX)));
    }
    raster.set_max_value(new_max)?;
    Ok(raster)
}

/// Tier crossing: allocate storage at the other channel width.
fn rescale_converting<Src: Sample, Dst: Sample>(
    raster: Raster<Src>,
    new_max: u32,
) -> TransformResult<Raster<Dst>> {
    let old_max = raster.max_value();
    let header = raster.header().with_max_value(new_max)?;
    let pixels = raster
        .into_pixels()
        .into_iter()
        .map(|pixel| {
            pixel.map(|c| Dst::from_u32(scale_channel(c.to_u32(), old_max, new_max).min(Dst::MAX)))
        })
        .collect();
    Ok(Raster::new(header, pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_channel_truncates() {
        // 100 * 128 / 255 = 50.19... -> 50, never 51
        assert_eq!(scale_channel(100, 255, 128), 50);
        assert_eq!(scale_channel(255, 255, 128), 128);
        assert_eq!(scale_channel(0, 255, 128), 0);
        // 16-bit headroom: no overflow at the extremes
        assert_eq!(scale_channel(65535, 65535, 65535), 65535);
        assert_eq!(scale_channel(65535, 1, 65535), 65535 * 65535);
    }
}
