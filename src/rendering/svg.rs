use image::RgbaImage;
use regex::Regex;
use resvg::usvg::{self, fontdb, Transform};
use std::sync::{Arc, LazyLock};
use tiny_skia::Pixmap;

use crate::error::DecodeError;

/// Raster size for SVGs whose root element declares no size at all.
pub const DEFAULT_SVG_SIZE: u32 = 32;

/// Largest natural size accepted per side.
pub const MAX_SVG_SIDE: u32 = 8192;

/// Rasterizes SVG documents at their natural size onto a transparent canvas.
pub struct SvgRasterizer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRasterizer {
    /// Create a rasterizer with system fonts loaded for `<text>` elements.
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();

        tracing::info!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a rasterizer without fonts. Text elements render as nothing.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }

    /// Parse and rasterize an SVG document to straight-alpha RGBA.
    pub fn rasterize(&self, svg_data: &[u8]) -> Result<RgbaImage, DecodeError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| DecodeError::Svg(e.to_string()))?;

        let svg_size = tree.size();
        let (width, height) = if declares_size(svg_data) {
            (
                svg_size.width().ceil() as u32,
                svg_size.height().ceil() as u32,
            )
        } else {
            (DEFAULT_SVG_SIZE, DEFAULT_SVG_SIZE)
        };

        if width == 0 || height == 0 || width > MAX_SVG_SIDE || height > MAX_SVG_SIDE {
            return Err(DecodeError::InvalidDimensions { width, height });
        }

        tracing::debug!(
            natural_width = svg_size.width(),
            natural_height = svg_size.height(),
            width,
            height,
            "Rasterizing SVG"
        );

        let mut pixmap = Pixmap::new(width, height).ok_or(DecodeError::PixmapAllocation)?;

        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        resvg::render(
            &tree,
            Transform::from_scale(scale_x, scale_y),
            &mut pixmap.as_mut(),
        );

        pixmap_to_rgba(&pixmap)
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// tiny-skia stores premultiplied alpha; the classifier wants straight alpha.
fn pixmap_to_rgba(pixmap: &Pixmap) -> Result<RgbaImage, DecodeError> {
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or(
        DecodeError::InvalidDimensions {
            width: pixmap.width(),
            height: pixmap.height(),
        },
    )
}

/// Byte offset of the root `<svg` tag, skipping a BOM, whitespace, the XML
/// declaration, comments and a doctype.
pub(crate) fn root_element_offset(bytes: &[u8]) -> Option<usize> {
    let mut rest = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    loop {
        rest = rest.trim_ascii_start();
        if rest.starts_with(b"<svg") {
            return Some(bytes.len() - rest.len());
        }
        let close: &[u8] = if rest.starts_with(b"<?") {
            b"?>"
        } else if rest.starts_with(b"<!--") {
            b"-->"
        } else if rest.starts_with(b"<!") {
            b">"
        } else {
            return None;
        };
        let end = find(rest, close)?;
        rest = &rest[end + close.len()..];
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Whether the root `<svg>` element carries `width`, `height` or `viewBox`.
///
/// usvg falls back to 100x100 for size-less documents; those are rendered at
/// [`DEFAULT_SVG_SIZE`] instead.
fn declares_size(svg_data: &[u8]) -> bool {
    static ROOT_TAG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^<svg\b[^>]*>").expect("valid regex"));
    static SIZE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?:^|\s)(?:width|height|viewBox)\s*=").expect("valid regex")
    });

    let Some(offset) = root_element_offset(svg_data) else {
        // Compressed or otherwise opaque input: trust usvg's size
        return true;
    };
    let text = String::from_utf8_lossy(&svg_data[offset..]);
    match ROOT_TAG.find(&text) {
        Some(tag) => SIZE_ATTR.is_match(tag.as_str()),
        None => true,
    }
}
