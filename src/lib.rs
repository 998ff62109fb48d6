//! # limg
//!
//! Encoder and decoder for LIMG, a minimal bit-packed raster container.
//!
//! A LIMG stream is a 4-byte `"LIMG"` magic, width and height as big-endian
//! `u16`, a one-byte pixel format tag, then the pixel payload: fixed-width
//! bit groups (one per pixel, MSB-first), concatenated row-major with no
//! inter-pixel padding and zero-padded to the next byte boundary. The
//! payload carries no length field — its size derives from
//! `width * height * bits_per_pixel(format)`.
//!
//! The whole grid is materialized in memory on both sides; there is no
//! streaming mode. [`Grid`] values are immutable once constructed, so the
//! codec is a pure, reentrant function set with no process-wide state.
//!
//! ## Non-Goals
//!
//! - Image manipulation (scaling, filtering, color conversion)
//! - Multi-frame or compressed encoding
//! - A headerless legacy mode — the format byte is mandatory
//!
//! ## Usage
//!
//! ```
//! use limg::{Grid, ImageInfo, PixelFormat, Unstoppable};
//!
//! let grid = Grid::from_rows(
//!     &[vec![1u8, 0, 1], vec![0, 1, 0]],
//!     PixelFormat::BlackAndWhite,
//! )?;
//!
//! let encoded = limg::encode(&grid, Unstoppable)?;
//!
//! // Probe the header without decoding the payload
//! let info = ImageInfo::from_bytes(&encoded)?;
//! assert_eq!((info.width, info.height), (3, 2));
//!
//! let decoded = limg::decode(&encoded, Unstoppable)?;
//! assert_eq!(decoded, grid);
//! # Ok::<(), limg::LimgError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bits;
mod decode;
mod encode;
mod error;
mod format;
mod grid;
mod info;
mod limits;

#[cfg(feature = "std")]
pub mod fs;

use alloc::vec::Vec;

// Re-exports
pub use enough::{Stop, Unstoppable};
pub use error::LimgError;
pub use format::PixelFormat;
pub use grid::Grid;
pub use info::ImageInfo;
pub use limits::Limits;

/// Magic bytes every LIMG stream starts with.
pub const SIGNATURE: [u8; 4] = *b"LIMG";

/// Header size in bytes: signature + width + height + format tag.
pub(crate) const HEADER_LEN: usize = 9;

/// Encode a [`Grid`] to a LIMG byte stream.
///
/// Total over valid grids except for dimensions that do not fit the 2-byte
/// wire fields: width or height above 65535 is
/// [`LimgError::DimensionsTooLarge`], never silent truncation.
pub fn encode(grid: &Grid, stop: impl Stop) -> Result<Vec<u8>, LimgError> {
    encode::encode_limg(grid, &stop)
}

/// Decode a LIMG byte stream into a [`Grid`].
///
/// Fails with a typed [`LimgError`] on any framing problem; never returns a
/// partial grid. Trailing bytes beyond the declared payload are ignored,
/// mirroring the encoder's padding freedom.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Grid, LimgError> {
    decode::decode_limg(data, None, &stop)
}

/// Decode with resource [`Limits`] enforced after the header is parsed and
/// before the payload buffer is allocated.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Grid, LimgError> {
    decode::decode_limg(data, Some(limits), &stop)
}
