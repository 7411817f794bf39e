//! rasterkit-transform - Pixel transforms for the rasterkit engine
//!
//! This crate provides the two geometry/intensity operations:
//!
//! - [`rescale`] - linear per-channel intensity remapping, in place
//!   within a storage tier and via explicit reallocation across the
//!   255/256 boundary
//! - [`resize`] - bilinear resampling to new dimensions
//!
//! Both consume or borrow an owned [`rasterkit_core::PixelBuffer`] and
//! are pure: no shared state, one buffer in, one buffer out.

mod error;
pub mod intensity;
pub mod resize;

pub use error::{TransformError, TransformResult};
pub use intensity::rescale;
pub use resize::resize;
