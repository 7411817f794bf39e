//! Codec regression test
//!
//! Exercises decode/encode against hand-written byte images, the
//! byte-exact round-trip property, and the path-level wrappers.

use rasterkit_core::{Pixel, PixelBuffer, SampleDepth};
use rasterkit_io::{IoError, decode, encode, read_header, read_image, read_image_header, write_image};
use rasterkit_test::{buffer_16, random_buffer, scratch_path};

fn image_8() -> Vec<u8> {
    let mut data = b"P6\n2 2\n255\n".to_vec();
    data.extend_from_slice(&[
        10, 20, 30, //
        40, 50, 60, //
        70, 80, 90, //
        100, 110, 120,
    ]);
    data
}

#[test]
fn decode_8bit() {
    let buffer = decode(&image_8()).expect("decode 8-bit");
    assert_eq!(buffer.width(), 2);
    assert_eq!(buffer.height(), 2);
    assert_eq!(buffer.max_value(), 255);
    assert_eq!(buffer.depth(), SampleDepth::Eight);
    let PixelBuffer::EightBit(raster) = &buffer else {
        panic!("expected 8-bit variant");
    };
    assert_eq!(raster.pixel(0, 0), Pixel::new(10, 20, 30));
    assert_eq!(raster.pixel(1, 1), Pixel::new(100, 110, 120));
}

#[test]
fn encode_is_byte_exact_inverse() {
    let data = image_8();
    let buffer = decode(&data).unwrap();
    assert_eq!(encode(&buffer), data);
}

#[test]
fn sixteen_bit_samples_are_low_byte_first() {
    let mut data = b"P6\n1 1\n1000\n".to_vec();
    // red = 0x0201, green = 0x0403, blue = 0x0605
    data.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    let buffer = decode(&data).expect("decode 16-bit");
    assert_eq!(buffer.depth(), SampleDepth::Sixteen);
    let PixelBuffer::SixteenBit(raster) = &buffer else {
        panic!("expected 16-bit variant");
    };
    assert_eq!(raster.pixel(0, 0), Pixel::new(0x0201, 0x0403, 0x0605));
    assert_eq!(encode(&buffer), data);
}

#[test]
fn roundtrip_random_buffers() {
    for (max, seed) in [(255u32, 7u64), (100, 8), (65535, 9), (1000, 10), (1, 11)] {
        let buffer = random_buffer(5, 4, max, seed);
        let bytes = encode(&buffer);
        let decoded = decode(&bytes).expect("roundtrip decode");
        assert_eq!(decoded, buffer, "roundtrip failed for max={max}");
        // Payload re-encodes byte-exact
        assert_eq!(encode(&decoded), bytes);
    }
}

#[test]
fn truncated_payload_rejected() {
    let mut data = image_8();
    data.truncate(data.len() - 1);
    assert!(matches!(
        decode(&data),
        Err(IoError::TruncatedPayload {
            expected: 12,
            actual: 11
        })
    ));
}

#[test]
fn trailing_bytes_ignored() {
    let mut data = image_8();
    let buffer = decode(&data).unwrap();
    data.extend_from_slice(&[0xde, 0xad]);
    assert_eq!(decode(&data).unwrap(), buffer);
}

#[test]
fn oversized_header_reports_truncation() {
    // Parseable header whose declared payload overflows naive usize
    // math; decode must report the short payload, not panic
    let data = b"P6\n4294967295 4294967295\n255\n";
    assert!(matches!(
        decode(data),
        Err(IoError::TruncatedPayload { .. })
    ));
    let header = read_header(data).expect("header itself is in-domain");
    assert_eq!(header.width(), u32::MAX);
}

#[test]
fn missing_max_intensity_rejected() {
    assert!(matches!(
        decode(b"P6\n2 2\n"),
        Err(IoError::MissingField("max intensity"))
    ));
}

#[test]
fn header_only_read() {
    let header = read_header(&image_8()).expect("read header");
    assert_eq!(
        (header.width(), header.height(), header.max_value()),
        (2, 2, 255)
    );
    // Header reads do not touch the payload
    assert!(read_header(b"P6\n9999 9999\n255\n").is_ok());
}

#[test]
fn file_roundtrip_and_atomic_write() {
    let buffer = buffer_16(2, 1, 65535, &[(0, 32768, 65535), (1, 2, 3)]);
    let path = scratch_path("ppmio-roundtrip.ppm");

    write_image(&buffer, &path).expect("write image");
    assert_eq!(read_image(&path).expect("read image"), buffer);
    let header = read_image_header(&path).expect("read file header");
    assert_eq!(header, buffer.header());

    // The staging file is gone after a successful write
    let staging = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        std::path::PathBuf::from(name)
    };
    assert!(!staging.exists());

    // Overwriting replaces the file wholesale
    let smaller = random_buffer(1, 1, 255, 3);
    write_image(&smaller, &path).expect("overwrite image");
    assert_eq!(read_image(&path).unwrap(), smaller);

    std::fs::remove_file(&path).ok();
}

#[test]
fn read_missing_file_is_io_error() {
    let path = scratch_path("ppmio-definitely-missing.ppm");
    assert!(matches!(read_image(&path), Err(IoError::Io(_))));
}
