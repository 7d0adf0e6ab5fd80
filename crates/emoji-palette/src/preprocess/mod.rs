//! Steps that run before glyph emission.
//!
//! - [`target_size()`] picks the cell grid dimensions and resampling filter
//!   for a source image. Resampling itself is left to the caller's image
//!   library.
//! - [`Background`] decides which glyph transparent cells receive.

mod background;
mod sizing;

pub use background::Background;
pub use sizing::{target_size, ResampleFilter, TargetSize, DEFAULT_MAX_SIDE};
