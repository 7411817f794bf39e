//! rasterkit - Pixel transform engine for binary truecolor rasters
//!
//! Decodes the binary PPM (P6) format into an owned pixel buffer,
//! applies one of four operations, and encodes the result:
//!
//! - intensity rescaling with 8/16-bit tier promotion and demotion
//! - spatial resizing via bilinear interpolation
//! - least-frequent-color quantization
//! - passthrough re-encoding (decode followed by encode)
//!
//! Data flow: bytes -> [`io::decode`] -> [`PixelBuffer`] -> one
//! transform -> [`io::encode`] -> bytes. Every transform is a pure
//! function over an owned buffer; there is no shared state.
//!
//! # Example
//!
//! ```
//! use rasterkit::{Pixel, PixelBuffer, RasterHeader};
//!
//! let header = RasterHeader::new(2, 1, 255).unwrap();
//! let buffer =
//!     PixelBuffer::from_pixels_8(header, vec![Pixel::gray(10), Pixel::gray(250)]).unwrap();
//! let half = rasterkit::transform::rescale(buffer, 127).unwrap();
//! assert_eq!(half.max_value(), 127);
//!
//! let bytes = rasterkit::io::encode(&half);
//! assert_eq!(rasterkit::io::decode(&bytes).unwrap(), half);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_color as color;
pub use rasterkit_io as io;
pub use rasterkit_transform as transform;
