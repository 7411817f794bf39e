//! rasterkit-color - Color analysis and quantization
//!
//! This crate provides the color-level operations of the rasterkit
//! engine:
//!
//! - **Analysis** ([`analysis`]): distinct-color counting, per-color
//!   frequency tables
//! - **Quantization** ([`quantize`]): least-frequent-color removal with
//!   nearest-palette replacement

pub mod analysis;
pub mod quantize;

pub use analysis::{color_frequencies, count_colors};
pub use quantize::reduce_colors;
