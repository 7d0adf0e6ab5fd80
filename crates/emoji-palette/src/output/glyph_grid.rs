//! GlyphGrid: classified cells plus text rendering.

use std::collections::BTreeMap;
use std::fmt;

use crate::palette::ColorName;
use crate::preprocess::Background;

/// A classified cell grid, ready to be emitted as glyph text.
///
/// # Example
///
/// ```
/// use emoji_palette::{Background, ColorName, GlyphGrid};
///
/// let cells = vec![ColorName::Black, ColorName::White];
/// let background = Background::from_classified(cells.iter().copied().map(Some), 0.6);
/// let grid = GlyphGrid::new(cells, 2, 1, background);
///
/// assert_eq!(grid.to_text(), "\u{2B1B}\u{FE0F}\u{2B1C}\u{FE0F}\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphGrid {
    /// One name per cell, row-major, top row first.
    cells: Vec<ColorName>,
    width: usize,
    height: usize,
    background: Background,
}

impl GlyphGrid {
    /// Wrap classified cells.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == width * height`.
    pub fn new(cells: Vec<ColorName>, width: usize, height: usize, background: Background) -> Self {
        debug_assert_eq!(
            cells.len(),
            width * height,
            "cells length ({}) must match width * height ({}x{})",
            cells.len(),
            width,
            height,
        );
        Self {
            cells,
            width,
            height,
            background,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cells(&self) -> &[ColorName] {
        &self.cells
    }

    /// Background summary used for transparent cells.
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<ColorName> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorName]> {
        // chunks() rejects a zero chunk size; an empty grid has no rows anyway
        self.cells.chunks(self.width.max(1))
    }

    /// Number of glyphs in the grid (`width * height`).
    pub fn glyph_count(&self) -> usize {
        self.cells.len()
    }

    /// Render as text: glyphs row by row, every row terminated by `\n`.
    pub fn to_text(&self) -> String {
        // Glyphs are at most 6 bytes in UTF-8
        let mut out = String::with_capacity(self.cells.len() * 6 + self.height);
        for row in self.rows() {
            for name in row {
                out.push_str(name.glyph());
            }
            out.push('\n');
        }
        out
    }

    /// Rows as individual strings without terminators.
    pub fn row_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|name| name.glyph()).collect())
            .collect()
    }

    /// Cell count per color, in palette table order. Colors that do not
    /// occur are omitted.
    pub fn histogram(&self) -> BTreeMap<ColorName, usize> {
        let mut counts = BTreeMap::new();
        for &name in &self.cells {
            *counts.entry(name).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
