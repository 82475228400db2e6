// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the codec.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The output sink failed while the encoder was writing the stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with the expected magic byte.
    #[error("Invalid format: magic byte {0:#04x} (expected 0x77)")]
    InvalidMagic(u8),

    /// The stream is too short to contain the fixed header.
    #[error("Truncated header: {len} bytes available, 6 required")]
    TruncatedHeader { len: usize },

    /// Only RGB and RGBA sample layouts are supported.
    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannelCount(u8),

    /// Width or height is zero, or does not fit the 16-bit header fields.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The pixel buffer length does not match its geometry.
    #[error("Dimension mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The range encoder was already finalized.
    #[error("Attempted to use the encoder after the stream was finished")]
    Finished,

    /// A symbol announced an exponent longer than 31 bits.
    #[error("Invalid exponent in residual symbol")]
    InvalidExponent,
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CodecError::InvalidMagic(0x12).to_string(),
            "Invalid format: magic byte 0x12 (expected 0x77)"
        );
        assert_eq!(
            CodecError::DimensionMismatch {
                expected: 12,
                actual: 9
            }
            .to_string(),
            "Dimension mismatch: expected 12 bytes, got 9"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::WriteZero, "sink full");
        let err: CodecError = io.into();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
