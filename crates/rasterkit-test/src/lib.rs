//! rasterkit-test - Shared fixtures for the rasterkit test suites
//!
//! Small constructors for pixel buffers, a seeded random-image
//! generator for codec round-trips, and scratch paths for file tests.
//! Consumed from the domain crates' `[dev-dependencies]`.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rasterkit_core::{Pixel, PixelBuffer, Raster, RasterHeader};
use std::path::PathBuf;
use std::process;

/// Build an 8-bit buffer from channel triples in row-major order.
///
/// Panics on invalid geometry; fixtures are expected to be in-domain.
pub fn buffer_8(width: u32, height: u32, max_value: u32, triples: &[(u8, u8, u8)]) -> PixelBuffer {
    let header = RasterHeader::new(width, height, max_value).expect("fixture header");
    let pixels = triples
        .iter()
        .map(|&(r, g, b)| Pixel::new(r, g, b))
        .collect();
    PixelBuffer::from_pixels_8(header, pixels).expect("fixture buffer")
}

/// Build a 16-bit buffer from channel triples in row-major order.
pub fn buffer_16(
    width: u32,
    height: u32,
    max_value: u32,
    triples: &[(u16, u16, u16)],
) -> PixelBuffer {
    let header = RasterHeader::new(width, height, max_value).expect("fixture header");
    let pixels = triples
        .iter()
        .map(|&(r, g, b)| Pixel::new(r, g, b))
        .collect();
    PixelBuffer::from_pixels_16(header, pixels).expect("fixture buffer")
}

/// Build an 8-bit gray buffer, one gray level per pixel.
pub fn gray_buffer_8(width: u32, height: u32, max_value: u32, levels: &[u8]) -> PixelBuffer {
    let triples: Vec<(u8, u8, u8)> = levels.iter().map(|&v| (v, v, v)).collect();
    buffer_8(width, height, max_value, &triples)
}

/// Deterministic pseudo-random buffer at the tier implied by `max_value`.
///
/// Channel values are uniform in `0..=max_value`; the same seed always
/// produces the same image.
pub fn random_buffer(width: u32, height: u32, max_value: u32, seed: u64) -> PixelBuffer {
    let header = RasterHeader::new(width, height, max_value).expect("fixture header");
    let mut rng = StdRng::seed_from_u64(seed);
    let count = header.pixel_count();
    if max_value <= 255 {
        let pixels: Vec<Pixel<u8>> = (0..count)
            .map(|_| {
                Pixel::new(
                    rng.random_range(0..=max_value) as u8,
                    rng.random_range(0..=max_value) as u8,
                    rng.random_range(0..=max_value) as u8,
                )
            })
            .collect();
        Raster::new(header, pixels).expect("fixture raster").into()
    } else {
        let pixels: Vec<Pixel<u16>> = (0..count)
            .map(|_| {
                Pixel::new(
                    rng.random_range(0..=max_value) as u16,
                    rng.random_range(0..=max_value) as u16,
                    rng.random_range(0..=max_value) as u16,
                )
            })
            .collect();
        Raster::new(header, pixels).expect("fixture raster").into()
    }
}

/// Scratch file path unique to this test process.
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rasterkit-{}-{}", process::id(), name))
}
