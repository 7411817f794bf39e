//! Error types for rasterkit-core
//!
//! Provides a unified error type for buffer and header construction.
//! Every variant is a deterministic input-domain failure; nothing here
//! is retryable.

use thiserror::Error;

/// rasterkit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions (zero width or height)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Maximum intensity outside [1, 65535]
    #[error("max intensity out of range: {0}")]
    MaxValueOutOfRange(u32),

    /// Pixel sequence length does not match width * height
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// Header tier does not match the sample width of the storage
    #[error("sample depth mismatch: max intensity {max_value} needs {expected} byte(s) per channel, storage has {actual}")]
    DepthMismatch {
        max_value: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
