//! Pixel classification against a glyph palette.
//!
//! Classification runs in two stages:
//!
//! 1. **Neutral gate.** Pixels whose channel spread is below
//!    [`Classifier::NEUTRAL_CHROMA`] are near-grey. Very dark greys become
//!    black and very bright greys become white without any distance search.
//!    Mid-tone greys fall through.
//! 2. **Perceptual match.** The pixel is converted to CIE L\*a\*b\* and the
//!    nearest palette reference (including auxiliaries) wins.

use crate::color::{Lab, Srgb};
use crate::palette::{ColorName, Palette};

/// Which stage of [`Classifier`] produced a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Near-grey and darker than the black gate
    DarkNeutral,
    /// Near-grey and brighter than the white gate
    BrightNeutral,
    /// Nearest Lab reference
    Nearest {
        /// CIE76 distance to the winning reference
        distance: f64,
        /// Label of the auxiliary reference that won, if any
        auxiliary: Option<&'static str>,
    },
}

/// A classification with the reasoning that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub name: ColorName,
    pub decision: Decision,
}

/// Maps sRGB pixels to palette colors.
///
/// Stateless apart from its palette reference, so one classifier can be
/// shared freely across threads and requests.
///
/// # Example
///
/// ```
/// use emoji_palette::{Classifier, ColorName, Srgb};
///
/// let classifier = Classifier::standard();
/// assert_eq!(classifier.classify(Srgb::from_u8(255, 0, 0)), ColorName::Red);
/// assert_eq!(classifier.classify(Srgb::from_u8(135, 206, 250)), ColorName::Blue);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'p> {
    palette: &'p Palette,
}

impl Classifier<'static> {
    /// Classifier over [`Palette::standard()`].
    pub fn standard() -> Self {
        Self::new(Palette::standard())
    }
}

impl<'p> Classifier<'p> {
    /// Channel spread below which a pixel is treated as near-grey.
    pub const NEUTRAL_CHROMA: u8 = 30;
    /// Near-grey pixels with luminance below this are black.
    pub const BLACK_LUMINANCE: f64 = 30.0;
    /// Near-grey pixels with luminance above this are white.
    pub const WHITE_LUMINANCE: f64 = 235.0;

    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Classify a pixel to a palette color.
    #[inline]
    pub fn classify(&self, color: Srgb) -> ColorName {
        self.classify_detailed(color).name
    }

    /// Classify a pixel and report which stage decided.
    ///
    /// The neutral gate only fires when the palette actually has the
    /// black/white entry it would produce; otherwise the pixel goes to the
    /// distance search like any other.
    pub fn classify_detailed(&self, color: Srgb) -> Classification {
        if color.chroma() < Self::NEUTRAL_CHROMA {
            let luminance = color.luminance();
            if luminance < Self::BLACK_LUMINANCE && self.palette.contains(ColorName::Black) {
                return Classification {
                    name: ColorName::Black,
                    decision: Decision::DarkNeutral,
                };
            }
            if luminance > Self::WHITE_LUMINANCE && self.palette.contains(ColorName::White) {
                return Classification {
                    name: ColorName::White,
                    decision: Decision::BrightNeutral,
                };
            }
        }

        let nearest = self.palette.find_nearest(Lab::from(color));
        Classification {
            name: nearest.name,
            decision: Decision::Nearest {
                distance: nearest.distance,
                auxiliary: nearest.auxiliary,
            },
        }
    }
}

/// Classify an (r, g, b) triple against the standard palette.
///
/// Total over all byte triples and deterministic.
///
/// ```
/// use emoji_palette::{classify, ColorName};
///
/// assert_eq!(classify(0, 0, 0), ColorName::Black);
/// assert_eq!(classify(255, 255, 255), ColorName::White);
/// ```
pub fn classify(r: u8, g: u8, b: u8) -> ColorName {
    Classifier::standard().classify(Srgb::from_u8(r, g, b))
}
