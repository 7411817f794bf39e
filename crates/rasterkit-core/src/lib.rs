//! rasterkit-core - Data structures for the rasterkit transform engine
//!
//! This crate provides the types shared by the codec and the pixel
//! transforms:
//!
//! - [`RasterHeader`] - validated image geometry and intensity range
//! - [`Sample`] / [`Pixel`] - channel samples at 8- or 16-bit width
//! - [`Raster`] - header plus row-major pixels at one width
//! - [`PixelBuffer`] - tagged variant over the two storage tiers
//!
//! The tier (8- or 16-bit channel storage) is decided by the declared
//! max intensity: one byte per channel up to 255, two bytes above.
//! Algorithms in the sibling crates are generic over [`Sample`] and
//! cross tiers only through explicit conversion.

pub mod error;
pub mod header;
pub mod raster;
pub mod sample;

pub use error::{Error, Result};
pub use header::{EIGHT_BIT_MAX, RasterHeader, SIXTEEN_BIT_MAX};
pub use raster::{PixelBuffer, Raster};
pub use sample::{Pixel, Sample, SampleDepth};
