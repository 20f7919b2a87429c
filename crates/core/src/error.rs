//! Error types for the encoder and the color tables.

use thiserror::Error;

/// Result type alias for encoder operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors raised by [`crate::png::encode`] and friends.
///
/// Every variant is detected before any output byte is produced, so a
/// failed encode never leaves a partial PNG behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Width or height is zero, or beyond what a PNG header can hold.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Explicit pixel buffer does not hold exactly `width * height * 4` bytes.
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    PixelBufferSizeMismatch {
        /// `width * height * 4`.
        expected: usize,
        /// Length of the buffer that was passed in.
        actual: usize,
    },
    /// The deflate compressor could not finish the zlib stream.
    #[error("compression failed: {0}")]
    CompressionFailure(String),
}

/// A hex color string that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color {0:?} must have 6 or 8 hex digits")]
    Length(String),
    #[error("color {0:?} contains a non-hex digit")]
    Digit(String),
}
