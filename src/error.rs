use alloc::string::String;
use enough::StopReason;

/// Errors from BIF decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BifError {
    #[error("invalid dimensions: {width}x{height} (width and height must be non-zero)")]
    InvalidDimensions { width: u16, height: u16 },

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("header too short: need 14 bytes, got {actual}")]
    TooShort { actual: u64 },

    #[error("unrecognized format magic bytes {0:02x?}")]
    BadMagic([u8; 4]),

    #[error("unsupported format version {0} (only version 100 is supported)")]
    UnsupportedVersion(u16),

    #[error("truncated file: need {expected} bytes, got {actual}")]
    TruncatedFile { expected: u64, actual: u64 },

    #[error("cannot allocate pixel buffer of {bytes} bytes")]
    AllocationFailure { bytes: u64 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BifError {
    fn from(r: StopReason) -> Self {
        BifError::Cancelled(r)
    }
}
