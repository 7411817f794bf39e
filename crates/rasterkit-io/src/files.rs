//! Path-level image reading and writing
//!
//! Thin wrappers over the in-memory codec. Writing stages the encoded
//! bytes into a sibling temp file and renames it over the target, so an
//! interrupted write never leaves a corrupt output file behind.

use crate::ppm;
use crate::{IoError, IoResult};
use rasterkit_core::{PixelBuffer, RasterHeader};
use std::fs;
use std::path::{Path, PathBuf};

/// Read and decode an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let data = fs::read(path)?;
    ppm::decode(&data)
}

/// Read image metadata from a file path without decoding pixel data.
pub fn read_image_header<P: AsRef<Path>>(path: P) -> IoResult<RasterHeader> {
    let data = fs::read(path)?;
    ppm::read_header(&data)
}

/// Encode a buffer and write it to a file path.
///
/// The file at `path` is either fully replaced or left untouched.
pub fn write_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let staging = staging_path(path);
    let bytes = ppm::encode(buffer);
    if let Err(e) = fs::write(&staging, &bytes) {
        let _ = fs::remove_file(&staging);
        return Err(IoError::Io(e));
    }
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(IoError::Io(e));
    }
    Ok(())
}

/// Sibling temp path for staged writes: `<path>.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_keeps_extension() {
        let staged = staging_path(Path::new("/tmp/out.ppm"));
        assert_eq!(staged, Path::new("/tmp/out.ppm.tmp"));
    }
}
