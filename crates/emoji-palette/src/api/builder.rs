//! EmojiRenderer builder: the entry point for turning a cell grid into glyphs.

use crate::classifier::Classifier;
use crate::color::Rgba;
use crate::output::GlyphGrid;
use crate::palette::{ColorName, Palette};
use crate::preprocess::{target_size, Background, TargetSize, DEFAULT_MAX_SIDE};

use super::RenderError;

/// Renders RGBA cell grids as glyph grids.
///
/// Configuration methods consume and return `self`; [`render()`](Self::render)
/// takes `&self`, so one renderer can be shared across conversions. The
/// renderer holds no mutable state.
///
/// # Example
///
/// ```
/// use emoji_palette::{EmojiRenderer, Rgba};
///
/// let renderer = EmojiRenderer::new();
/// let cells = [Rgba::new(0, 0, 0, 255), Rgba::new(255, 255, 255, 255)];
/// let grid = renderer.render(&cells, 2, 1).unwrap();
///
/// assert_eq!(grid.to_text(), "⬛️⬜️\n");
/// ```
#[derive(Debug, Clone)]
pub struct EmojiRenderer {
    palette: Palette,
    max_side: u32,
    alpha_threshold: u8,
    light_threshold: f64,
}

impl Default for EmojiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiRenderer {
    /// Alpha at or above which a cell is opaque.
    pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

    /// Renderer over the standard palette with default thresholds.
    pub fn new() -> Self {
        Self::with_palette(Palette::standard().clone())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            max_side: DEFAULT_MAX_SIDE,
            alpha_threshold: Self::DEFAULT_ALPHA_THRESHOLD,
            light_threshold: Background::DEFAULT_LIGHT_THRESHOLD,
        }
    }

    /// Longest allowed side of the cell grid. Zero is treated as one.
    #[inline]
    pub fn max_side(mut self, max_side: u32) -> Self {
        self.max_side = max_side.max(1);
        self
    }

    #[inline]
    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Light fraction that must be exceeded for a black background.
    #[inline]
    pub fn light_threshold(mut self, threshold: f64) -> Self {
        self.light_threshold = threshold;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn max_side_value(&self) -> u32 {
        self.max_side
    }

    /// Target cell grid for a `width` x `height` source.
    pub fn target_size(&self, width: u32, height: u32) -> TargetSize {
        target_size(width, height, self.max_side)
    }

    /// Classify a cell grid and emit glyphs.
    ///
    /// `cells` is row-major and must hold exactly `width * height` pixels,
    /// already resampled to the target size.
    ///
    /// # Errors
    ///
    /// [`RenderError::InvalidDimensions`] for a zero side,
    /// [`RenderError::PixelCountMismatch`] when the slice length is off.
    pub fn render(
        &self,
        cells: &[Rgba],
        width: usize,
        height: usize,
    ) -> Result<GlyphGrid, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        if cells.len() != expected {
            return Err(RenderError::PixelCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let classifier = Classifier::new(&self.palette);

        // Classify opaque cells once; the results feed both passes
        let classified: Vec<Option<ColorName>> = cells
            .iter()
            .map(|px| {
                px.is_opaque(self.alpha_threshold)
                    .then(|| classifier.classify(px.rgb()))
            })
            .collect();

        let background =
            Background::from_classified(classified.iter().copied(), self.light_threshold);
        let fill = background.transparent_glyph_name();

        let names = classified
            .into_iter()
            .map(|name| name.unwrap_or(fill))
            .collect();

        Ok(GlyphGrid::new(names, width, height, background))
    }
}
