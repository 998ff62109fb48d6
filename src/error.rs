use crate::format::PixelFormat;
use alloc::string::String;
use enough::StopReason;

/// Errors from LIMG encoding and decoding.
///
/// Variants fall into four groups: structural (grid shape), content (pixel
/// values), format (wire framing), and ambient (limits, cancellation, I/O).
/// All are reported synchronously; nothing is retried internally and no
/// partial grid is ever returned on failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LimgError {
    /// Grid has zero rows or a zero-width first row.
    #[error("empty grid: at least one row and one column required")]
    EmptyGrid,

    /// A row's length differs from the width established by row 0.
    #[error("ragged row {row}: expected {expected} pixels, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Dimensions exceed the 2-byte wire fields, or a size computation
    /// overflowed.
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    /// A cell holds a value outside its format's legal range.
    #[error("pixel value {value} at ({row}, {col}) out of range for {format:?}")]
    PixelOutOfRange {
        row: usize,
        col: usize,
        value: u8,
        format: PixelFormat,
    },

    #[error("bad signature: input does not start with \"LIMG\"")]
    BadSignature,

    #[error("truncated header: width, height, and format tag missing or incomplete")]
    TruncatedHeader,

    /// The format tag byte does not map to a known [`PixelFormat`].
    #[error("unknown format tag {0:#04x}")]
    UnknownFormat(u8),

    #[error("truncated payload: need {needed} bytes, got {actual}")]
    TruncatedPayload { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    /// Filesystem failure, surfaced unmasked from the collaborator.
    #[cfg(feature = "std")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for LimgError {
    fn from(r: StopReason) -> Self {
        LimgError::Cancelled(r)
    }
}
