//! Palette struct with precomputed Lab references and nearest-color matching.
//!
//! A palette holds the public glyph colors plus optional auxiliary
//! references. Auxiliaries take part in distance comparison but are always
//! reported as the public color they remap to.

use std::collections::HashSet;
use std::sync::OnceLock;

use super::color_name::ColorName;
use super::error::PaletteError;
use crate::color::{Lab, Srgb};

/// A public palette color and the sRGB value it is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: ColorName,
    pub reference: Srgb,
}

impl PaletteEntry {
    pub const fn new(name: ColorName, reference: Srgb) -> Self {
        Self { name, reference }
    }
}

/// An extra matching target that is never exposed under its own name.
///
/// When an auxiliary wins the nearest-color search, the result is reported
/// as `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxiliaryReference {
    /// Internal label, only surfaced in diagnostics
    pub label: &'static str,
    pub reference: Srgb,
    pub target: ColorName,
}

impl AuxiliaryReference {
    pub const fn new(label: &'static str, reference: Srgb, target: ColorName) -> Self {
        Self {
            label,
            reference,
            target,
        }
    }
}

/// The outcome of [`Palette::find_nearest()`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Public color the winning reference maps to
    pub name: ColorName,
    /// CIE76 distance to the winning reference
    pub distance: f64,
    /// Label of the winning auxiliary reference, if an auxiliary won
    pub auxiliary: Option<&'static str>,
}

/// The nine glyph colors and their reference values, in table order.
pub const STANDARD_ENTRIES: [PaletteEntry; 9] = [
    PaletteEntry::new(ColorName::Red, Srgb::from_u8(220, 20, 60)),
    PaletteEntry::new(ColorName::Orange, Srgb::from_u8(255, 140, 0)),
    PaletteEntry::new(ColorName::Yellow, Srgb::from_u8(255, 215, 0)),
    PaletteEntry::new(ColorName::Green, Srgb::from_u8(0, 200, 40)),
    PaletteEntry::new(ColorName::Blue, Srgb::from_u8(0, 120, 255)),
    PaletteEntry::new(ColorName::Purple, Srgb::from_u8(128, 0, 128)),
    PaletteEntry::new(ColorName::Black, Srgb::from_u8(0, 0, 0)),
    PaletteEntry::new(ColorName::White, Srgb::from_u8(255, 255, 255)),
    PaletteEntry::new(ColorName::Brown, Srgb::from_u8(160, 82, 45)),
];

/// Sky-blue catch: absorbs pale blues that pure Lab distance would send to
/// purple or white.
pub const LIGHT_BLUE: AuxiliaryReference =
    AuxiliaryReference::new("lightBlue", Srgb::from_u8(135, 206, 250), ColorName::Blue);

/// Precomputed matching target. Entries come first, then auxiliaries.
#[derive(Debug, Clone, Copy)]
struct Reference {
    name: ColorName,
    lab: Lab,
    auxiliary: Option<&'static str>,
}

/// A closed set of glyph colors with perceptual matching.
///
/// All color space conversions are done once at palette creation time, so
/// per-pixel matching is a short linear scan over precomputed Lab values.
///
/// # Example
///
/// ```
/// use emoji_palette::{ColorName, Palette, PaletteEntry, Srgb};
///
/// let entries = [
///     PaletteEntry::new(ColorName::Black, Srgb::from_u8(0, 0, 0)),
///     PaletteEntry::new(ColorName::White, Srgb::from_u8(255, 255, 255)),
/// ];
/// let palette = Palette::new(&entries, &[]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    auxiliaries: Vec<AuxiliaryReference>,
    references: Vec<Reference>,
}

impl Palette {
    /// Create a palette from public entries and auxiliary references.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `entries` is empty ([`PaletteError::EmptyPalette`])
    /// - a name repeats ([`PaletteError::DuplicateName`])
    /// - an auxiliary targets a name with no entry ([`PaletteError::UnknownAuxiliaryTarget`])
    pub fn new(
        entries: &[PaletteEntry],
        auxiliaries: &[AuxiliaryReference],
    ) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (i, entry) in entries.iter().enumerate() {
            if !seen.insert(entry.name) {
                return Err(PaletteError::DuplicateName { index: i });
            }
        }

        for (i, aux) in auxiliaries.iter().enumerate() {
            if !seen.contains(&aux.target) {
                return Err(PaletteError::UnknownAuxiliaryTarget { index: i });
            }
        }

        Ok(Self::build(entries, auxiliaries))
    }

    /// The process-wide standard palette: nine glyph colors plus the
    /// lightBlue auxiliary.
    ///
    /// Built on first use and shared read-only afterwards.
    pub fn standard() -> &'static Palette {
        static STANDARD: OnceLock<Palette> = OnceLock::new();
        STANDARD.get_or_init(|| Self::build(&STANDARD_ENTRIES, &[LIGHT_BLUE]))
    }

    fn build(entries: &[PaletteEntry], auxiliaries: &[AuxiliaryReference]) -> Self {
        let references = entries
            .iter()
            .map(|e| Reference {
                name: e.name,
                lab: Lab::from(e.reference),
                auxiliary: None,
            })
            .chain(auxiliaries.iter().map(|a| Reference {
                name: a.target,
                lab: Lab::from(a.reference),
                auxiliary: Some(a.label),
            }))
            .collect();

        Self {
            entries: entries.to_vec(),
            auxiliaries: auxiliaries.to_vec(),
            references,
        }
    }

    /// Returns the number of public colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Public entries in table order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn auxiliaries(&self) -> &[AuxiliaryReference] {
        &self.auxiliaries
    }

    /// Look up the entry for a public color, if this palette has one.
    pub fn entry(&self, name: ColorName) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: ColorName) -> bool {
        self.entry(name).is_some()
    }

    /// Glyph for `name`, or `None` if this palette has no such entry.
    pub fn glyph(&self, name: ColorName) -> Option<&'static str> {
        self.entry(name).map(|e| e.name.glyph())
    }

    /// Find the reference nearest to `color` by CIE76 distance.
    ///
    /// Entries are scanned before auxiliaries; on an exact tie the earlier
    /// reference wins.
    ///
    /// # Example
    ///
    /// ```
    /// use emoji_palette::{ColorName, Lab, Palette, Srgb};
    ///
    /// let palette = Palette::standard();
    /// let sky = Lab::from(Srgb::from_u8(135, 206, 250));
    /// let nearest = palette.find_nearest(sky);
    ///
    /// assert_eq!(nearest.name, ColorName::Blue);
    /// assert_eq!(nearest.auxiliary, Some("lightBlue"));
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Lab) -> Nearest {
        // Linear scan - the palette has ten references at most in practice
        let mut best = self.references[0];
        let mut best_dist = f64::MAX;

        for reference in &self.references {
            let dist = color.distance_squared(reference.lab);
            if dist < best_dist {
                best_dist = dist;
                best = *reference;
            }
        }

        Nearest {
            name: best.name,
            distance: best_dist.sqrt(),
            auxiliary: best.auxiliary,
        }
    }
}
