//! LIMG encoder: header framing plus MSB-first payload packing.

use alloc::vec::Vec;
use enough::Stop;

use crate::bits::BitWriter;
use crate::error::LimgError;
use crate::grid::Grid;
use crate::{HEADER_LEN, SIGNATURE};

/// Encode a grid to a complete LIMG stream.
pub(crate) fn encode_limg(grid: &Grid, stop: &dyn Stop) -> Result<Vec<u8>, LimgError> {
    // The wire fields are u16; reject rather than truncate.
    let (width, height) = match (u16::try_from(grid.width()), u16::try_from(grid.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(LimgError::DimensionsTooLarge {
                width: grid.width(),
                height: grid.height(),
            });
        }
    };

    let bpp = grid.format().bits_per_pixel();
    let payload_bytes = grid
        .cells()
        .len()
        .checked_mul(bpp as usize)
        .map(|bits| bits.div_ceil(8))
        .ok_or(LimgError::DimensionsTooLarge {
            width: grid.width(),
            height: grid.height(),
        })?;

    stop.check()?;

    let mut out = Vec::with_capacity(HEADER_LEN + payload_bytes);
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.push(grid.format().tag());

    let mut bits = BitWriter::with_capacity(payload_bytes);
    for (row_idx, row) in grid.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for &value in row {
            bits.push(value, bpp);
        }
    }
    out.extend_from_slice(&bits.into_bytes());

    Ok(out)
}
