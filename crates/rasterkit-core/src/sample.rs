//! Channel samples and pixels
//!
//! The format stores channels at one of two widths, chosen by the
//! declared max intensity. Rather than dispatching per pixel, the two
//! tiers are a tagged variant at the buffer level ([`crate::PixelBuffer`])
//! and the algorithms are generic over [`Sample`].

use std::fmt::Debug;
use std::hash::Hash;

/// Channel storage tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleDepth {
    /// One byte per channel (max intensity <= 255)
    Eight,
    /// Two bytes per channel (max intensity > 255)
    Sixteen,
}

impl SampleDepth {
    /// Bytes per encoded channel sample.
    pub fn bytes(self) -> usize {
        match self {
            SampleDepth::Eight => 1,
            SampleDepth::Sixteen => 2,
        }
    }

    /// Largest channel value storable at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            SampleDepth::Eight => u8::MAX as u32,
            SampleDepth::Sixteen => u16::MAX as u32,
        }
    }
}

/// A channel sample: `u8` or `u16`.
///
/// Conversions go through `u32`, which covers both widths; callers
/// guarantee range when narrowing with [`Sample::from_u32`].
pub trait Sample: Copy + Eq + Ord + Hash + Debug + Default + Send + Sync + 'static {
    /// Largest value representable at this width.
    const MAX: u32;

    /// Storage tier of this width.
    const DEPTH: SampleDepth;

    /// Narrow from `u32`. The value must be `<= Self::MAX`.
    fn from_u32(value: u32) -> Self;

    /// Widen to `u32`.
    fn to_u32(self) -> u32;
}

impl Sample for u8 {
    const MAX: u32 = u8::MAX as u32;
    const DEPTH: SampleDepth = SampleDepth::Eight;

    #[inline]
    fn from_u32(value: u32) -> Self {
        debug_assert!(value <= <Self as Sample>::MAX);
        value as u8
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
}

impl Sample for u16 {
    const MAX: u32 = u16::MAX as u32;
    const DEPTH: SampleDepth = SampleDepth::Sixteen;

    #[inline]
    fn from_u32(value: u32) -> Self {
        debug_assert!(value <= <Self as Sample>::MAX);
        value as u16
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
}

/// An RGB pixel at one channel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel<S> {
    pub red: S,
    pub green: S,
    pub blue: S,
}

impl<S> Pixel<S> {
    /// Construct a pixel from its three channels.
    pub fn new(red: S, green: S, blue: S) -> Self {
        Self { red, green, blue }
    }

    /// Apply `f` to each channel.
    #[inline]
    pub fn map<T, F: FnMut(S) -> T>(self, mut f: F) -> Pixel<T> {
        Pixel {
            red: f(self.red),
            green: f(self.green),
            blue: f(self.blue),
        }
    }
}

impl<S: Sample> Pixel<S> {
    /// A gray pixel (all channels equal).
    pub fn gray(level: S) -> Self {
        Self::new(level, level, level)
    }

    /// Channels widened to `u32`, in R, G, B order.
    #[inline]
    pub fn channels(self) -> [u32; 3] {
        [
            self.red.to_u32(),
            self.green.to_u32(),
            self.blue.to_u32(),
        ]
    }

    /// Squared Euclidean distance to another pixel in RGB space.
    #[inline]
    pub fn distance_squared(self, other: Self) -> u64 {
        let dr = self.red.to_u32() as i64 - other.red.to_u32() as i64;
        let dg = self.green.to_u32() as i64 - other.green.to_u32() as i64;
        let db = self.blue.to_u32() as i64 - other.blue.to_u32() as i64;
        (dr * dr + dg * dg + db * db) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_roundtrip() {
        assert_eq!(u8::from_u32(200u8.to_u32()), 200);
        assert_eq!(u16::from_u32(40000u16.to_u32()), 40000);
        assert_eq!(u8::MAX, 255);
        assert_eq!(u16::MAX as u32, SampleDepth::Sixteen.max_value());
    }

    #[test]
    fn test_pixel_map_widens() {
        let p: Pixel<u8> = Pixel::new(1, 2, 3);
        let q: Pixel<u16> = p.map(|c| c as u16 * 257);
        assert_eq!(q, Pixel::new(257, 514, 771));
    }

    #[test]
    fn test_distance_squared() {
        let a: Pixel<u8> = Pixel::gray(100);
        let b: Pixel<u8> = Pixel::gray(200);
        assert_eq!(a.distance_squared(b), 30000);
        assert_eq!(a.distance_squared(a), 0);
    }
}
