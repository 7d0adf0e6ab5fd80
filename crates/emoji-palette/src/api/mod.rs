//! Public API for the emoji-palette crate.
//!
//! [`EmojiRenderer`] runs background inference and glyph emission over a
//! cell grid; [`RenderError`] reports grids it cannot render.

mod builder;
mod error;

pub use builder::EmojiRenderer;
pub use error::RenderError;
