use emoji_palette::{EmojiRenderer, GlyphGrid, TargetSize};
use std::sync::Arc;

use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::rendering::{resample, to_cells, unwrap_data_url, ImageDecoder};

/// Result of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub source_width: u32,
    pub source_height: u32,
    pub target: TargetSize,
    pub grid: GlyphGrid,
}

impl Conversion {
    pub fn text(&self) -> String {
        self.grid.to_text()
    }
}

/// Runs decode, sizing, resampling and rendering for one input at a time.
///
/// Holds only immutable configuration, so one instance is shared across
/// requests behind an `Arc`.
pub struct ConvertService {
    decoder: ImageDecoder,
    renderer: EmojiRenderer,
    max_upload_bytes: usize,
}

impl ConvertService {
    pub fn new(decoder: ImageDecoder, renderer: EmojiRenderer, max_upload_bytes: usize) -> Self {
        Self {
            decoder,
            renderer,
            max_upload_bytes,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            ImageDecoder::new(),
            config.render.renderer(),
            config.server.max_upload_bytes,
        )
    }

    pub fn renderer(&self) -> &EmojiRenderer {
        &self.renderer
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Convert raw image bytes or a `data:` URL into a glyph grid.
    pub fn convert(&self, input: &[u8]) -> Result<Conversion, ConvertError> {
        let bytes = unwrap_data_url(input)?;
        if bytes.len() > self.max_upload_bytes {
            return Err(ConvertError::TooLarge {
                size: bytes.len(),
                max: self.max_upload_bytes,
            });
        }

        let image = self.decoder.decode(&bytes)?;
        let (source_width, source_height) = image.dimensions();

        let target = self.renderer.target_size(source_width, source_height);
        let cells = to_cells(&resample(&image, target));
        let grid = self
            .renderer
            .render(&cells, target.width as usize, target.height as usize)?;

        tracing::debug!(
            source_width,
            source_height,
            width = target.width,
            height = target.height,
            filter = target.filter.as_str(),
            mostly_light = grid.background().is_mostly_light(),
            "Converted image"
        );

        Ok(Conversion {
            source_width,
            source_height,
            target,
            grid,
        })
    }

    /// Run [`convert`](Self::convert) on the blocking thread pool.
    ///
    /// Decoding and rasterizing are CPU-bound and must not stall the async
    /// runtime.
    pub async fn convert_blocking_task(
        self: &Arc<Self>,
        input: Vec<u8>,
    ) -> Result<Conversion, ConvertError> {
        let service = Arc::clone(self);

        tokio::task::spawn_blocking(move || service.convert(&input))
            .await
            .map_err(|e| ConvertError::Task(e.to_string()))?
    }
}
