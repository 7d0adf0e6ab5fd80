//! sRGB color type
//!
//! sRGB is the encoding every decoded image hands us: three gamma-encoded
//! 8-bit channels. The classifier's cheap luminance/chroma gates operate
//! directly on these values before any color-space conversion.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Rec. 709 luma weights applied to raw 8-bit channels.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// A color in sRGB color space with 8-bit channels.
///
/// This is the pixel representation produced by image decoders and the
/// one palette reference values are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Srgb {
    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use emoji_palette::Srgb;
    /// let crimson = Srgb::from_u8(220, 20, 60);
    /// assert_eq!(crimson.g, 20);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Weighted brightness estimate on the raw gamma-encoded channels.
    ///
    /// Uses `0.2126 r + 0.7152 g + 0.0722 b`, giving a value in 0.0..=255.0.
    ///
    /// # Example
    /// ```
    /// use emoji_palette::Srgb;
    /// assert_eq!(Srgb::from_u8(0, 0, 0).luminance(), 0.0);
    /// assert!((Srgb::from_u8(255, 255, 255).luminance() - 255.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn luminance(self) -> f64 {
        LUMA_R * self.r as f64 + LUMA_G * self.g as f64 + LUMA_B * self.b as f64
    }

    /// Spread between the largest and smallest channel.
    ///
    /// Zero for pure greys, 255 for fully saturated primaries.
    #[inline]
    pub fn chroma(self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }
}

impl fmt::Display for Srgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse the hex digits at `range`, rejecting ranges that split a UTF-8 character.
fn hex_digits(s: &str, range: Range<usize>) -> Result<u8, ParseColorError> {
    let digits = s.get(range).ok_or(ParseColorError::InvalidLength)?;
    // at most two digits, so no overflow
    digits.chars().try_fold(0u8, |acc, c| {
        c.to_digit(16)
            .map(|d| acc * 16 + d as u8)
            .ok_or(ParseColorError::InvalidHex(c))
    })
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Reads `rrggbb` or `rgb` hex, with or without a leading `#`.
    ///
    /// Case does not matter and surrounding whitespace is ignored. The short
    /// form doubles each digit, so `#f80` is `#ff8800`.
    ///
    /// ```
    /// use emoji_palette::Srgb;
    ///
    /// let crimson: Srgb = "#DC143C".parse().unwrap();
    /// assert_eq!(crimson, Srgb::from_u8(220, 20, 60));
    ///
    /// let red: Srgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Srgb::from_u8(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // x * 17 == 0xXX
                let r = hex_digits(s, 0..1)? * 17;
                let g = hex_digits(s, 1..2)? * 17;
                let b = hex_digits(s, 2..3)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = hex_digits(s, 0..2)?;
                let g = hex_digits(s, 2..4)?;
                let b = hex_digits(s, 4..6)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_array_round_trip() {
        let color = Srgb::from_u8(255, 128, 0);
        assert_eq!(Srgb::from_bytes([255, 128, 0]), color);
        assert_eq!(color.to_bytes(), [255, 128, 0]);
    }

    #[test]
    fn test_luminance_uses_rec709_weights() {
        assert!((Srgb::from_u8(255, 0, 0).luminance() - 54.213).abs() < 1e-9);
        assert!((Srgb::from_u8(0, 255, 0).luminance() - 182.376).abs() < 1e-9);
        assert!((Srgb::from_u8(0, 0, 255).luminance() - 18.411).abs() < 1e-9);
    }

    #[test]
    fn test_chroma_is_channel_spread() {
        assert_eq!(Srgb::from_u8(128, 128, 128).chroma(), 0);
        assert_eq!(Srgb::from_u8(255, 0, 0).chroma(), 255);
        assert_eq!(Srgb::from_u8(10, 40, 25).chroma(), 30);
    }

    #[test]
    fn test_displays_lowercase_hex() {
        assert_eq!(Srgb::from_u8(220, 20, 60).to_string(), "#dc143c");
        assert_eq!(Srgb::from_u8(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_parses_long_form() {
        assert_eq!("#FFA500".parse::<Srgb>().unwrap(), Srgb::from_u8(255, 165, 0));
        let no_hash: Srgb = "87CEFA".parse().unwrap();
        assert_eq!(no_hash, Srgb::from_u8(135, 206, 250));
    }

    #[test]
    fn test_expands_short_form() {
        assert_eq!("#0f0".parse::<Srgb>().unwrap(), Srgb::from_u8(0, 255, 0));
        assert_eq!("9C4".parse::<Srgb>().unwrap(), Srgb::from_u8(0x99, 0xCC, 0x44));
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert!(matches!("#12x".parse::<Srgb>(), Err(ParseColorError::InvalidHex('x'))));
        for bad in ["#1234", "", "#", "#1234567"] {
            assert!(
                matches!(bad.parse::<Srgb>(), Err(ParseColorError::InvalidLength)),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_sign_characters_are_rejected() {
        assert!(matches!("#+1+2+3".parse::<Srgb>(), Err(ParseColorError::InvalidHex('+'))));
        assert!("+f+f+f".parse::<Srgb>().is_err());
        assert!("#-10000".parse::<Srgb>().is_err());
    }

    #[test]
    fn test_non_ascii_input_is_an_error() {
        // three bytes, two chars
        assert!("#aé".parse::<Srgb>().is_err());
    }

    #[test]
    fn test_ignores_case_and_padding() {
        let upper: Srgb = "  #ABCDEF  ".parse().unwrap();
        let lower: Srgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }
}
