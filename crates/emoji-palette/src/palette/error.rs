//! Failures raised while reading colors or assembling a palette.

use std::fmt;

/// A `#rgb` / `#rrggbb` string could not be turned into an [`Srgb`](crate::Srgb).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count other than 3 or 6 once the optional `#` is removed
    InvalidLength,
    /// A character outside `0-9a-fA-F`, signs included
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "color must have 3 or 6 hex digits")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "bad hex digit in color: {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// The string is not one of the nine palette color names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorNameError {
    /// The rejected input, trimmed
    pub input: String,
}

impl fmt::Display for ParseColorNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown palette color '{}'", self.input)
    }
}

impl std::error::Error for ParseColorNameError {}

/// A palette definition was rejected by [`Palette::new`](crate::Palette::new).
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Zero entries
    EmptyPalette,
    /// A name appears twice; the second occurrence is at the specified index
    DuplicateName {
        /// Index where the duplicate was found
        index: usize,
    },
    /// An auxiliary reference remaps to a name that has no palette entry
    UnknownAuxiliaryTarget {
        /// Index of the offending auxiliary reference
        index: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette has no entries")
            }
            PaletteError::DuplicateName { index } => {
                write!(f, "color name at index {} is already used", index)
            }
            PaletteError::UnknownAuxiliaryTarget { index } => {
                write!(
                    f,
                    "auxiliary reference {} targets a color missing from the palette",
                    index
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_error_messages() {
        assert_eq!(PaletteError::EmptyPalette.to_string(), "palette has no entries");
        assert_eq!(
            PaletteError::DuplicateName { index: 3 }.to_string(),
            "color name at index 3 is already used"
        );
        assert_eq!(
            PaletteError::UnknownAuxiliaryTarget { index: 0 }.to_string(),
            "auxiliary reference 0 targets a color missing from the palette"
        );
    }

    #[test]
    fn test_parse_color_error_messages() {
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "color must have 3 or 6 hex digits"
        );
        assert_eq!(
            ParseColorError::InvalidHex('+').to_string(),
            "bad hex digit in color: '+'"
        );
    }

    #[test]
    fn test_parse_color_name_error_message() {
        let err = ParseColorNameError {
            input: "teal".to_string(),
        };
        assert_eq!(err.to_string(), "unknown palette color 'teal'");
    }
}
