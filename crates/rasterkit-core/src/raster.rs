//! Pixel buffers
//!
//! [`Raster<S>`] is a decoded image at one channel width: a validated
//! header plus a row-major pixel sequence. [`PixelBuffer`] is the tagged
//! variant over the two widths that the codec and the transforms trade
//! in. The variant always agrees with the header tier; constructors
//! enforce it.
//!
//! Pixels are stored interleaved (one `Pixel` per element). Planar
//! storage would be behaviorally equivalent; this is not part of the
//! contract.

use crate::error::{Error, Result};
use crate::header::RasterHeader;
use crate::sample::{Pixel, Sample, SampleDepth};

/// A decoded image at a single channel width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<S: Sample> {
    header: RasterHeader,
    pixels: Vec<Pixel<S>>,
}

impl<S: Sample> Raster<S> {
    /// Build a raster from a header and its full pixel sequence.
    ///
    /// # Errors
    ///
    /// - [`Error::DepthMismatch`] if the header tier does not match `S`
    /// - [`Error::PixelCountMismatch`] if `pixels.len() != width * height`
    pub fn new(header: RasterHeader, pixels: Vec<Pixel<S>>) -> Result<Self> {
        if header.depth() != S::DEPTH {
            return Err(Error::DepthMismatch {
                max_value: header.max_value(),
                expected: header.bytes_per_channel(),
                actual: S::DEPTH.bytes(),
            });
        }
        if pixels.len() != header.pixel_count() {
            return Err(Error::PixelCountMismatch {
                expected: header.pixel_count(),
                actual: pixels.len(),
            });
        }
        Ok(Self { header, pixels })
    }

    /// Build a raster with every pixel zeroed.
    pub fn filled(header: RasterHeader) -> Result<Self> {
        let count = header.pixel_count();
        Self::new(header, vec![Pixel::default(); count])
    }

    /// Image header.
    pub fn header(&self) -> RasterHeader {
        self.header
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.header.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.header.height()
    }

    /// Declared maximum channel intensity.
    pub fn max_value(&self) -> u32 {
        self.header.max_value()
    }

    /// Row-major index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width() as usize + x as usize
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel<S>> {
        if x < self.width() && y < self.height() {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Pixel at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel<S> {
        let idx = self.index(x, y);
        self.pixels[idx]
    }

    /// Row-major pixel sequence.
    pub fn pixels(&self) -> &[Pixel<S>] {
        &self.pixels
    }

    /// Mutable row-major pixel sequence.
    pub fn pixels_mut(&mut self) -> &mut [Pixel<S>] {
        &mut self.pixels
    }

    /// Consume the raster, yielding its pixel sequence.
    pub fn into_pixels(self) -> Vec<Pixel<S>> {
        self.pixels
    }

    /// Replace the declared max intensity without touching pixel data.
    ///
    /// # Errors
    ///
    /// - [`Error::MaxValueOutOfRange`] if `max_value` is outside `1..=65535`
    /// - [`Error::DepthMismatch`] if the new value would change tier
    pub fn set_max_value(&mut self, max_value: u32) -> Result<()> {
        let header = self.header.with_max_value(max_value)?;
        if header.depth() != S::DEPTH {
            return Err(Error::DepthMismatch {
                max_value,
                expected: header.bytes_per_channel(),
                actual: S::DEPTH.bytes(),
            });
        }
        self.header = header;
        Ok(())
    }
}

/// A decoded image at either channel width.
///
/// The variant is determined by the header's max intensity: `EightBit`
/// for `max <= 255`, `SixteenBit` above. Tier-crossing operations
/// (intensity rescale across the 255/256 boundary) convert between
/// variants explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBuffer {
    EightBit(Raster<u8>),
    SixteenBit(Raster<u16>),
}

impl PixelBuffer {
    /// Build a buffer from a header and 8-bit pixels.
    pub fn from_pixels_8(header: RasterHeader, pixels: Vec<Pixel<u8>>) -> Result<Self> {
        Ok(PixelBuffer::EightBit(Raster::new(header, pixels)?))
    }

    /// Build a buffer from a header and 16-bit pixels.
    pub fn from_pixels_16(header: RasterHeader, pixels: Vec<Pixel<u16>>) -> Result<Self> {
        Ok(PixelBuffer::SixteenBit(Raster::new(header, pixels)?))
    }

    /// Image header.
    pub fn header(&self) -> RasterHeader {
        match self {
            PixelBuffer::EightBit(r) => r.header(),
            PixelBuffer::SixteenBit(r) => r.header(),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.header().width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.header().height()
    }

    /// Declared maximum channel intensity.
    pub fn max_value(&self) -> u32 {
        self.header().max_value()
    }

    /// Storage tier of this buffer.
    pub fn depth(&self) -> SampleDepth {
        match self {
            PixelBuffer::EightBit(_) => SampleDepth::Eight,
            PixelBuffer::SixteenBit(_) => SampleDepth::Sixteen,
        }
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.header().pixel_count()
    }
}

impl From<Raster<u8>> for PixelBuffer {
    fn from(raster: Raster<u8>) -> Self {
        PixelBuffer::EightBit(raster)
    }
}

impl From<Raster<u16>> for PixelBuffer {
    fn from(raster: Raster<u16>) -> Self {
        PixelBuffer::SixteenBit(raster)
    }
}
