use image::RgbaImage;

use super::svg::{root_element_offset, SvgRasterizer};
use crate::error::DecodeError;

/// Decodes raster and SVG input to straight-alpha RGBA at intrinsic size.
pub struct ImageDecoder {
    svg: SvgRasterizer,
}

impl ImageDecoder {
    pub fn new() -> Self {
        Self::with_rasterizer(SvgRasterizer::new())
    }

    pub fn with_rasterizer(svg: SvgRasterizer) -> Self {
        Self { svg }
    }

    /// Decode `bytes` into an RGBA grid.
    ///
    /// SVG documents are rasterized; anything else must be a format the
    /// `image` crate recognises. Multi-frame formats yield their first frame.
    pub fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(DecodeError::Empty);
        }

        let image = if is_svg(bytes) {
            self.svg.rasterize(bytes)?
        } else {
            let format = image::guess_format(bytes)?;
            tracing::debug!(?format, bytes = bytes.len(), "Decoding raster image");
            image::load_from_memory_with_format(bytes, format)?.to_rgba8()
        };

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidDimensions { width, height });
        }

        Ok(image)
    }
}

impl Default for ImageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `bytes` look like an SVG document: an `<svg` root, optionally
/// preceded by a BOM, whitespace, an XML declaration, comments or a doctype.
pub fn is_svg(bytes: &[u8]) -> bool {
    root_element_offset(bytes).is_some()
}
