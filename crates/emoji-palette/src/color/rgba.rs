//! Pixel type with straight (non-premultiplied) alpha.

use super::srgb::Srgb;

/// One decoded pixel: sRGB channels plus straight alpha, each 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque pixel of the given color.
    #[inline]
    pub const fn opaque(color: Srgb) -> Self {
        Self::new(color.r, color.g, color.b, 255)
    }

    /// Fully transparent black, the usual "nothing here" pixel.
    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Create from a byte array [R, G, B, A].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// The color channels without alpha.
    #[inline]
    pub const fn rgb(self) -> Srgb {
        Srgb::from_u8(self.r, self.g, self.b)
    }

    /// True when alpha is at or above `threshold`.
    #[inline]
    pub const fn is_opaque(self, threshold: u8) -> bool {
        self.a >= threshold
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}
