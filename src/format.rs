/// Pixel encoding identified by the one-byte wire tag.
///
/// Each variant fixes its per-pixel bit width and legal value range; the
/// codec dispatches packing and unpacking on the variant. New formats slot
/// in by adding a variant and its entries here.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 1 bit per pixel, values 0 or 1. Wire tag 0.
    BlackAndWhite,
}

impl PixelFormat {
    /// The tag byte written to the stream header.
    pub const fn tag(self) -> u8 {
        match self {
            PixelFormat::BlackAndWhite => 0,
        }
    }

    /// Map a wire tag back to a format. `None` for unrecognized tags —
    /// decode reports those as [`crate::LimgError::UnknownFormat`].
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(PixelFormat::BlackAndWhite),
            _ => None,
        }
    }

    /// Fixed bit width of one pixel's group in the packed payload.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::BlackAndWhite => 1,
        }
    }

    /// Largest legal cell value. Follows directly from the bit width, so
    /// anything unpacked from the payload is legal by construction.
    pub const fn max_value(self) -> u8 {
        ((1u16 << self.bits_per_pixel()) - 1) as u8
    }

    /// Whether `value` is legal for this format.
    pub const fn contains(self, value: u8) -> bool {
        value <= self.max_value()
    }
}
