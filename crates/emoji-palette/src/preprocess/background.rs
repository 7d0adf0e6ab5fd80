//! Background inference for transparent cells.
//!
//! Transparent cells get whichever of black or white contrasts with the
//! opaque content, so a silhouette stays visible once pasted as text.

use crate::classifier::Classifier;
use crate::color::Rgba;
use crate::palette::ColorName;

/// Summary of the opaque content of a cell grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    opaque_cells: usize,
    light_cells: usize,
    light_fraction: f64,
    mostly_light: bool,
}

impl Background {
    /// Fraction of light opaque cells above which the image is "mostly light".
    pub const DEFAULT_LIGHT_THRESHOLD: f64 = 0.6;

    /// Classify every opaque cell and summarize.
    pub fn infer(
        classifier: &Classifier<'_>,
        cells: &[Rgba],
        alpha_threshold: u8,
        light_threshold: f64,
    ) -> Self {
        Self::from_classified(
            cells.iter().map(|px| {
                px.is_opaque(alpha_threshold)
                    .then(|| classifier.classify(px.rgb()))
            }),
            light_threshold,
        )
    }

    /// Summarize cells that were already classified; `None` marks a
    /// transparent cell.
    pub fn from_classified<I>(cells: I, light_threshold: f64) -> Self
    where
        I: IntoIterator<Item = Option<ColorName>>,
    {
        let mut opaque_cells = 0usize;
        let mut light_cells = 0usize;
        for name in cells.into_iter().flatten() {
            opaque_cells += 1;
            if name.is_light() {
                light_cells += 1;
            }
        }

        let light_fraction = if opaque_cells == 0 {
            0.0
        } else {
            light_cells as f64 / opaque_cells as f64
        };

        Self {
            opaque_cells,
            light_cells,
            light_fraction,
            mostly_light: light_fraction > light_threshold,
        }
    }

    pub fn opaque_cells(&self) -> usize {
        self.opaque_cells
    }

    pub fn light_cells(&self) -> usize {
        self.light_cells
    }

    /// Light opaque cells over all opaque cells; 0.0 with no opaque cells.
    pub fn light_fraction(&self) -> f64 {
        self.light_fraction
    }

    pub fn is_mostly_light(&self) -> bool {
        self.mostly_light
    }

    /// Color for transparent cells: black behind light content, white otherwise.
    pub fn transparent_glyph_name(&self) -> ColorName {
        if self.mostly_light {
            ColorName::Black
        } else {
            ColorName::White
        }
    }
}
