//! rasterkit-io - Binary truecolor raster codec
//!
//! Decodes and encodes the binary PPM (P6) format used by the rasterkit
//! transform engine:
//!
//! - [`ppm::decode`] / [`ppm::encode`] - in-memory codec
//! - [`ppm::read_header`] - metadata without pixel decoding
//! - [`read_image`] / [`write_image`] - path-level wrappers; writes are
//!   staged and renamed so failures never corrupt an existing file

mod error;
mod files;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use files::{read_image, read_image_header, write_image};
pub use ppm::{MAGIC, decode, encode, read_header};
