//! I/O error types
//!
//! One error type for the whole codec. Format violations (bad magic,
//! malformed header fields, short payload) and file-system failures are
//! separate variants so callers can tell a broken input from a broken
//! disk.

use thiserror::Error;

/// Error type for raster I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The magic tag is not `P6`
    #[error("bad magic tag: expected \"P6\", found {0:?}")]
    BadMagic(String),

    /// A header field is absent
    #[error("missing header field: {0}")]
    MissingField(&'static str),

    /// A header field is present but not a valid number
    #[error("malformed {field} field: {value:?}")]
    InvalidField {
        field: &'static str,
        value: String,
    },

    /// The pixel payload is shorter than the header declares
    #[error("truncated payload: header declares {expected} bytes, found {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    /// A header value is outside its domain (zero dimension, bad max intensity)
    #[error("header error: {0}")]
    Core(#[from] rasterkit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
