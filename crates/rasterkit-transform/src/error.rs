//! Error types for rasterkit-transform

use thiserror::Error;

/// Errors that can occur during pixel transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Target max intensity outside [1, 65535]
    #[error("invalid target max intensity: {0}")]
    InvalidMaxValue(u32),

    /// Target dimensions outside the domain (zero width or height)
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
