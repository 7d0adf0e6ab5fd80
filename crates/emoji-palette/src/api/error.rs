//! Errors raised by [`EmojiRenderer::render`](super::EmojiRenderer::render).

use std::fmt;

/// A cell grid that cannot be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Width or height is zero.
    InvalidDimensions { width: usize, height: usize },
    /// The cell slice does not hold `width * height` pixels.
    PixelCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            RenderError::PixelCountMismatch { expected, actual } => {
                write!(f, "expected {} cells, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for RenderError {}
