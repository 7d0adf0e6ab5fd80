//! Output types for the glyph pipeline.
//!
//! [`GlyphGrid`] is the result of every render: one [`ColorName`] per cell,
//! row-major, with the background summary that decided transparent cells.
//! Text is produced on demand with [`GlyphGrid::to_text`].
//!
//! [`ColorName`]: crate::palette::ColorName

mod glyph_grid;

pub use glyph_grid::GlyphGrid;
