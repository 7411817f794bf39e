//! Binary PPM (P6) codec
//!
//! The format is an ASCII header followed by a raw pixel payload:
//!
//! ```text
//! P6
//! <width> <height>
//! <max intensity>
//! <width * height * 3 channel samples>
//! ```
//!
//! Header tokens are whitespace-separated; exactly one whitespace byte
//! separates the max intensity from the payload. Channels are one byte
//! each when the max intensity is at most 255, two bytes above that.
//!
//! # 16-bit sample order
//!
//! Two-byte samples are stored low byte first (little-endian). This is
//! the canonical order for this codec; no byte-swapped variant is
//! exposed.

use crate::{IoError, IoResult};
use rasterkit_core::{Pixel, PixelBuffer, RasterHeader, SampleDepth};

/// Magic tag opening every file.
pub const MAGIC: &[u8] = b"P6";

/// Skip ASCII whitespace, then return the next run of non-whitespace
/// bytes, advancing `pos` to just past it.
fn next_token<'a>(data: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    while *pos < data.len() && data[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    let start = *pos;
    while *pos < data.len() && !data[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    if *pos > start { Some(&data[start..*pos]) } else { None }
}

/// Parse one numeric header field.
fn parse_field(data: &[u8], pos: &mut usize, field: &'static str) -> IoResult<u32> {
    let token = next_token(data, pos).ok_or(IoError::MissingField(field))?;
    let text = std::str::from_utf8(token).map_err(|_| IoError::InvalidField {
        field,
        value: String::from_utf8_lossy(token).into_owned(),
    })?;
    text.parse::<u32>().map_err(|_| IoError::InvalidField {
        field,
        value: text.to_string(),
    })
}

/// Parse the header, returning it together with the payload offset.
fn parse_header(data: &[u8]) -> IoResult<(RasterHeader, usize)> {
    let mut pos = 0;
    let magic = next_token(data, &mut pos).ok_or(IoError::MissingField("magic"))?;
    if magic != MAGIC {
        return Err(IoError::BadMagic(
            String::from_utf8_lossy(magic).into_owned(),
        ));
    }
    let width = parse_field(data, &mut pos, "width")?;
    let height = parse_field(data, &mut pos, "height")?;
    let max_value = parse_field(data, &mut pos, "max intensity")?;
    // Exactly one whitespace byte separates the header from the payload.
    if pos < data.len() && data[pos].is_ascii_whitespace() {
        pos += 1;
    }
    let header = RasterHeader::new(width, height, max_value)?;
    Ok((header, pos))
}

/// Read image metadata without decoding pixel data.
///
/// # Errors
///
/// Fails like [`decode`] does on the header, but never looks at the
/// payload, so a truncated payload is not detected here.
pub fn read_header(data: &[u8]) -> IoResult<RasterHeader> {
    parse_header(data).map(|(header, _)| header)
}

/// Decode a binary PPM image.
///
/// # Errors
///
/// - [`IoError::BadMagic`] if the file does not start with `P6`
/// - [`IoError::MissingField`] / [`IoError::InvalidField`] for absent or
///   malformed header tokens
/// - [`IoError::Core`] for a zero dimension or a max intensity outside
///   `1..=65535`
/// - [`IoError::TruncatedPayload`] if fewer payload bytes remain than
///   the header declares
///
/// Bytes past the declared payload length are ignored.
pub fn decode(data: &[u8]) -> IoResult<PixelBuffer> {
    let (header, offset) = parse_header(data)?;
    let available = data.len() - offset;
    let expected = header.payload_len();
    if available < expected {
        return Err(IoError::TruncatedPayload {
            expected,
            actual: available,
        });
    }
    let payload = &data[offset..offset + expected];

    let buffer = match header.depth() {
        SampleDepth::Eight => {
            let pixels: Vec<Pixel<u8>> = payload
                .chunks_exact(3)
                .map(|c| Pixel::new(c[0], c[1], c[2]))
                .collect();
            PixelBuffer::from_pixels_8(header, pixels)?
        }
        SampleDepth::Sixteen => {
            let pixels: Vec<Pixel<u16>> = payload
                .chunks_exact(6)
                .map(|c| {
                    Pixel::new(
                        u16::from_le_bytes([c[0], c[1]]),
                        u16::from_le_bytes([c[2], c[3]]),
                        u16::from_le_bytes([c[4], c[5]]),
                    )
                })
                .collect();
            PixelBuffer::from_pixels_16(header, pixels)?
        }
    };
    Ok(buffer)
}

/// Encode a buffer as binary PPM.
///
/// The output decodes back to an identical buffer; for data produced by
/// [`decode`], re-encoding is byte-exact.
pub fn encode(buffer: &PixelBuffer) -> Vec<u8> {
    let header = buffer.header();
    let mut out = Vec::with_capacity(32 + header.payload_len());
    out.extend_from_slice(
        format!(
            "P6\n{} {}\n{}\n",
            header.width(),
            header.height(),
            header.max_value()
        )
        .as_bytes(),
    );
    match buffer {
        PixelBuffer::EightBit(raster) => {
            for pixel in raster.pixels() {
                out.push(pixel.red);
                out.push(pixel.green);
                out.push(pixel.blue);
            }
        }
        PixelBuffer::SixteenBit(raster) => {
            for pixel in raster.pixels() {
                out.extend_from_slice(&pixel.red.to_le_bytes());
                out.extend_from_slice(&pixel.green.to_le_bytes());
                out.extend_from_slice(&pixel.blue.to_le_bytes());
            }
        }
    }
    out
}
