//! LIMG decoder: header validation plus MSB-first payload unpacking.

use alloc::vec::Vec;
use enough::Stop;

use crate::bits::BitReader;
use crate::error::LimgError;
use crate::format::PixelFormat;
use crate::grid::Grid;
use crate::limits::Limits;
use crate::{HEADER_LEN, SIGNATURE};

/// Parsed LIMG header.
pub(crate) struct LimgHeader {
    pub width: u16,
    pub height: u16,
    pub format: PixelFormat,
}

/// Parse and validate the 9-byte header.
pub(crate) fn parse_header(data: &[u8]) -> Result<LimgHeader, LimgError> {
    if data.len() < SIGNATURE.len() || data[..SIGNATURE.len()] != SIGNATURE {
        return Err(LimgError::BadSignature);
    }
    if data.len() < HEADER_LEN {
        return Err(LimgError::TruncatedHeader);
    }

    // Width before height, matching the encoder's emission order.
    let width = u16::from_be_bytes([data[4], data[5]]);
    let height = u16::from_be_bytes([data[6], data[7]]);
    let tag = data[8];
    let format = PixelFormat::from_tag(tag).ok_or(LimgError::UnknownFormat(tag))?;

    if width == 0 || height == 0 {
        return Err(LimgError::EmptyGrid);
    }

    Ok(LimgHeader {
        width,
        height,
        format,
    })
}

/// Decode a LIMG stream into a grid.
///
/// The resulting grid's invariants hold by construction: every cell is
/// produced by unpacking exactly `bits_per_pixel` bits, which cannot fall
/// outside the format's range.
pub(crate) fn decode_limg(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Grid, LimgError> {
    let header = parse_header(data)?;
    let w = header.width as usize;
    let h = header.height as usize;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }

    let bpp = header.format.bits_per_pixel() as usize;
    let cell_count = w
        .checked_mul(h)
        .ok_or(LimgError::DimensionsTooLarge { width: w, height: h })?;
    let expected_bytes = cell_count
        .checked_mul(bpp)
        .map(|bits| bits.div_ceil(8))
        .ok_or(LimgError::DimensionsTooLarge { width: w, height: h })?;

    if let Some(limits) = limits {
        limits.check_memory(cell_count)?;
    }

    let payload = &data[HEADER_LEN..];
    if payload.len() < expected_bytes {
        return Err(LimgError::TruncatedPayload {
            needed: expected_bytes,
            actual: payload.len(),
        });
    }

    stop.check()?;

    // Trailing bytes past expected_bytes are ignored; padding bits in the
    // last payload byte fall past the final group and are never read.
    let mut reader = BitReader::new(&payload[..expected_bytes]);
    let mut cells = Vec::with_capacity(cell_count);
    let bpp = header.format.bits_per_pixel();
    for row in 0..h {
        if row % 16 == 0 {
            stop.check()?;
        }
        for _ in 0..w {
            let value = reader.read(bpp).ok_or(LimgError::TruncatedPayload {
                needed: expected_bytes,
                actual: payload.len(),
            })?;
            cells.push(value);
        }
    }

    Ok(Grid::from_unpacked(w, h, cells, header.format))
}
