//! Emoji Art
//!
//! Converts raster and SVG images into grids of colored-square emoji.
//! The color science lives in the `emoji-palette` crate; this crate adds
//! decoding, the conversion service, the HTTP API and the CLI.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
pub mod server;
