//! The closed set of public palette colors and their glyphs.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorNameError;

/// One of the nine colored-square glyph colors.
///
/// Classification always lands on one of these; auxiliary references used
/// internally during matching are remapped before a `ColorName` is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorName {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Black,
    White,
    Brown,
}

impl ColorName {
    /// Every color, in palette table order.
    pub const ALL: [ColorName; 9] = [
        ColorName::Red,
        ColorName::Orange,
        ColorName::Yellow,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Black,
        ColorName::White,
        ColorName::Brown,
    ];

    /// Lowercase name, e.g. `"red"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Yellow => "yellow",
            ColorName::Green => "green",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Black => "black",
            ColorName::White => "white",
            ColorName::Brown => "brown",
        }
    }

    /// The square glyph rendered for this color.
    ///
    /// Black and white carry a trailing U+FE0F variation selector so they
    /// render as emoji rather than text-style squares.
    pub const fn glyph(self) -> &'static str {
        match self {
            ColorName::Red => "\u{1F7E5}",
            ColorName::Orange => "\u{1F7E7}",
            ColorName::Yellow => "\u{1F7E8}",
            ColorName::Green => "\u{1F7E9}",
            ColorName::Blue => "\u{1F7E6}",
            ColorName::Purple => "\u{1F7EA}",
            ColorName::Black => "\u{2B1B}\u{FE0F}",
            ColorName::White => "\u{2B1C}\u{FE0F}",
            ColorName::Brown => "\u{1F7EB}",
        }
    }

    /// Whether this color counts toward a "mostly light" image when inferring
    /// the background for transparent cells.
    ///
    /// Brown and purple are deliberately not light.
    pub const fn is_light(self) -> bool {
        matches!(
            self,
            ColorName::White
                | ColorName::Yellow
                | ColorName::Green
                | ColorName::Blue
                | ColorName::Orange
        )
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = ParseColorNameError;

    /// Case-insensitive lookup by name.
    ///
    /// ```
    /// use emoji_palette::ColorName;
    /// assert_eq!("Purple".parse::<ColorName>().unwrap(), ColorName::Purple);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ColorName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseColorNameError {
                input: trimmed.to_string(),
            })
    }
}
