//! CIE 1931 XYZ tristimulus values
//!
//! The bridge between device RGB and CIE L\*a\*b\*. Values are scaled so
//! that the D65 reference white has Y = 100.

use super::linear_rgb::LinearRgb;

/// A color in CIE XYZ space (D65 illuminant, 2° observer, scaled to 0..=100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// D65 reference white, the normalization point for L\*a\*b\*.
    pub const D65_WHITE: Xyz = Xyz {
        x: 95.047,
        y: 100.0,
        z: 108.883,
    };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    /// Linear sRGB (D65) to XYZ using the four-decimal IEC 61966-2-1 matrix.
    fn from(rgb: LinearRgb) -> Self {
        let r = rgb.r * 100.0;
        let g = rgb.g * 100.0;
        let b = rgb.b * 100.0;

        Xyz {
            x: r * 0.4124 + g * 0.3576 + b * 0.1805,
            y: r * 0.2126 + g * 0.7152 + b * 0.0722,
            z: r * 0.0193 + g * 0.1192 + b * 0.9505,
        }
    }
}
