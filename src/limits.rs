/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Checked after the header is
/// parsed, before the cell buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum cell count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded cell buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check declared dimensions against limits.
    pub(crate) fn check(&self, width: u16, height: u16) -> Result<(), crate::LimgError> {
        if let Some(max_w) = self.max_width {
            if u32::from(width) > max_w {
                return Err(crate::LimgError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u32::from(height) > max_h {
                return Err(crate::LimgError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(crate::LimgError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that the decoded cell buffer fits the memory limit.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), crate::LimgError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(crate::LimgError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
