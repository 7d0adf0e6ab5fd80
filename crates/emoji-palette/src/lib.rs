// Generated LUT literals carry more digits than f64 keeps
#![allow(clippy::excessive_precision, clippy::module_inception)]

//! emoji-palette: turn pixels into colored-square emoji
//!
//! This library classifies sRGB pixels into a closed palette of nine
//! colored-square glyphs using CIE L\*a\*b\* distance, and renders small
//! RGBA cell grids as newline-terminated glyph text.
//!
//! # Quick Start
//!
//! ```
//! use emoji_palette::{classify, ColorName};
//!
//! assert_eq!(classify(0, 0, 0), ColorName::Black);
//! assert_eq!(classify(255, 255, 255), ColorName::White);
//! assert_eq!(ColorName::Red.glyph(), "🟥");
//! ```
//!
//! For whole images, size the cell grid with [`EmojiRenderer::target_size`],
//! resample the image to that size (decoding and resampling are left to the
//! caller), then call [`EmojiRenderer::render`]:
//!
//! ```
//! use emoji_palette::{EmojiRenderer, ResampleFilter, Rgba};
//!
//! let renderer = EmojiRenderer::new();
//! let size = renderer.target_size(640, 480);
//! assert_eq!((size.width, size.height), (32, 24));
//! assert_eq!(size.filter, ResampleFilter::Nearest);
//!
//! let cells = vec![Rgba::new(220, 20, 60, 255); size.cell_count()];
//! let grid = renderer
//!     .render(&cells, size.width as usize, size.height as usize)
//!     .unwrap();
//!
//! assert_eq!(grid.rows().count(), 24);
//! assert!(grid.to_text().starts_with("🟥🟥"));
//! ```
//!
//! # Classification
//!
//! 1. Luminance `0.2126r + 0.7152g + 0.0722b` and chroma `max - min` are
//!    computed on the raw 8-bit channels.
//! 2. Near-grey pixels (chroma below 30) darker than 30 are black, brighter
//!    than 235 are white. Mid greys are not forced.
//! 3. Everything else goes sRGB -> linear -> XYZ (D65) -> Lab and takes the
//!    nearest palette reference by Euclidean distance. A sky-blue auxiliary
//!    reference sits alongside the nine glyph colors and reports as blue.
//!
//! # Transparency
//!
//! Cells with alpha below 128 are filled with a contrasting background:
//! black when more than 60% of the opaque cells are light colors (white,
//! yellow, green, blue, orange), white otherwise. An image with no opaque
//! cells renders as all white.

pub mod api;
pub mod classifier;
pub mod color;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{EmojiRenderer, RenderError};
pub use classifier::{classify, Classification, Classifier, Decision};
pub use color::{Lab, LinearRgb, Rgba, Srgb, Xyz};
pub use output::GlyphGrid;
pub use palette::{
    AuxiliaryReference, ColorName, Nearest, Palette, PaletteEntry, PaletteError,
    ParseColorError, ParseColorNameError, LIGHT_BLUE, STANDARD_ENTRIES,
};
pub use preprocess::{target_size, Background, ResampleFilter, TargetSize, DEFAULT_MAX_SIDE};
