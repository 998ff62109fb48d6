use crate::decode::parse_header;
use crate::error::LimgError;
use crate::format::PixelFormat;

/// Image metadata probed from a LIMG header without decoding the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u16,
    pub height: u16,
    pub format: PixelFormat,
}

impl ImageInfo {
    /// Parse the 9-byte header. Fails with the same framing errors as
    /// [`crate::decode`]; a truncated or missing payload is not detected
    /// here since the payload is never touched.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LimgError> {
        let header = parse_header(data)?;
        Ok(ImageInfo {
            width: header.width,
            height: header.height,
            format: header.format,
        })
    }
}
