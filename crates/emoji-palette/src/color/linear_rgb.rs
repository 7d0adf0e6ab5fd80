//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate,
//! and the space the RGB→XYZ matrix is defined in.

use super::lut::srgb8_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power,
/// in the range 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode each channel via the build-time lookup table.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb8_to_linear(srgb.r),
            g: srgb8_to_linear(srgb.g),
            b: srgb8_to_linear(srgb.b),
        }
    }
}
