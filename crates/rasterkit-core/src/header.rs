//! Raster header: validated image geometry and intensity range
//!
//! The header carries everything needed to size and interpret the pixel
//! payload. The magic tag itself is fixed and owned by the codec in
//! `rasterkit-io`.

use crate::error::{Error, Result};
use crate::sample::SampleDepth;

/// Highest max intensity representable in one byte per channel.
pub const EIGHT_BIT_MAX: u32 = 255;

/// Highest max intensity the format supports.
pub const SIXTEEN_BIT_MAX: u32 = 65535;

/// Validated image metadata.
///
/// Invariants (enforced by [`RasterHeader::new`]):
/// - `width > 0` and `height > 0`
/// - `max_value` in `1..=65535`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterHeader {
    width: u32,
    height: u32,
    max_value: u32,
}

impl RasterHeader {
    /// Create a header, validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero dimension and
    /// [`Error::MaxValueOutOfRange`] for a max intensity outside
    /// `1..=65535`.
    pub fn new(width: u32, height: u32, max_value: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if max_value == 0 || max_value > SIXTEEN_BIT_MAX {
            return Err(Error::MaxValueOutOfRange(max_value));
        }
        Ok(Self {
            width,
            height,
            max_value,
        })
    }

    /// Image width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Declared maximum channel intensity.
    pub fn max_value(self) -> u32 {
        self.max_value
    }

    /// Storage tier implied by the max intensity.
    pub fn depth(self) -> SampleDepth {
        if self.max_value <= EIGHT_BIT_MAX {
            SampleDepth::Eight
        } else {
            SampleDepth::Sixteen
        }
    }

    /// Bytes per encoded channel sample: 1 for the 8-bit tier, 2 for 16-bit.
    pub fn bytes_per_channel(self) -> usize {
        self.depth().bytes()
    }

    /// Number of pixels in the image.
    ///
    /// Saturates at `usize::MAX`; dimensions near the u32 limit can
    /// exceed the address space on 32-bit targets.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Encoded payload length in bytes: `width * height * 3 * bytes_per_channel`.
    ///
    /// Saturates at `usize::MAX`. A header can declare dimensions whose
    /// payload no real input could hold; callers comparing against an
    /// actual byte count still get the right ordering.
    pub fn payload_len(self) -> usize {
        self.pixel_count()
            .saturating_mul(3)
            .saturating_mul(self.bytes_per_channel())
    }

    /// Same geometry with a different max intensity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MaxValueOutOfRange`] if `max_value` is outside
    /// `1..=65535`.
    pub fn with_max_value(self, max_value: u32) -> Result<Self> {
        Self::new(self.width, self.height, max_value)
    }

    /// Same max intensity with different geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero dimension.
    pub fn with_dimensions(self, width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, self.max_value)
    }
}
