//! CIE L\*a\*b\* perceptual color space
//!
//! CIELAB (CIE 1976) is designed so that Euclidean distance roughly tracks
//! how different two colors look. Palette matching happens here.

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;
use super::xyz::Xyz;

/// Below this normalized tristimulus value the cube root is replaced by a line.
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment near black.
const KAPPA_SLOPE: f64 = 7.787;
/// Offset of the linear segment near black.
const LINEAR_OFFSET: f64 = 16.0 / 116.0;

/// A color in CIE L\*a\*b\* space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = reference white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in L\*a\*b\* (CIE76 ΔE).
    ///
    /// # Example
    ///
    /// ```
    /// use emoji_palette::Lab;
    ///
    /// let white = Lab::new(100.0, 0.0, 0.0);
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// assert_eq!(white.distance(black), 100.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance, for comparisons that don't need the root.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Chroma magnitude `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + LINEAR_OFFSET
    }
}

impl From<Xyz> for Lab {
    /// XYZ to L\*a\*b\*, normalized against the D65 reference white.
    fn from(xyz: Xyz) -> Self {
        let white = Xyz::D65_WHITE;
        let fx = lab_f(xyz.x / white.x);
        let fy = lab_f(xyz.y / white.y);
        let fz = lab_f(xyz.z / white.z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<LinearRgb> for Lab {
    fn from(linear: LinearRgb) -> Self {
        Lab::from(Xyz::from(linear))
    }
}

impl From<Srgb> for Lab {
    /// Full chain: gamma decode, XYZ matrix, L\*a\*b\* transform.
    fn from(srgb: Srgb) -> Self {
        Lab::from(LinearRgb::from(srgb))
    }
}
