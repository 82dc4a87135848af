use alloc::string::String;
use enough::StopReason;

/// Errors from BMP encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("pixel data is missing")]
    MissingPixels,

    #[error("invalid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("pixel buffer length mismatch: need {needed} bytes, got {actual}")]
    BufferSizeMismatch { needed: usize, actual: usize },

    #[error("unsupported pixel size: {0} bytes (32-bit BMP needs 4)")]
    UnsupportedPixelSize(usize),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i32, height: i32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Coarse classification of a [`BitmapError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a missing, mis-sized, or otherwise unusable grid.
    InvalidArgument,
    /// A configured [`crate::Limits`] bound was exceeded.
    LimitExceeded,
    /// The [`enough::Stop`] token requested cancellation.
    Cancelled,
}

impl BitmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingPixels
            | Self::InvalidDimensions { .. }
            | Self::BufferSizeMismatch { .. }
            | Self::UnsupportedPixelSize(_)
            | Self::DimensionsTooLarge { .. } => ErrorKind::InvalidArgument,
            Self::LimitExceeded(_) => ErrorKind::LimitExceeded,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
