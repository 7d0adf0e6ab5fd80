//! Palette types and utilities
//!
//! This module provides the closed set of glyph colors, the reference values
//! they are matched against, and error types for parsing and validation.

mod color_name;
mod error;
mod palette;

pub use color_name::ColorName;
pub use error::{PaletteError, ParseColorError, ParseColorNameError};
pub use palette::{
    AuxiliaryReference, Nearest, Palette, PaletteEntry, LIGHT_BLUE, STANDARD_ENTRIES,
};
