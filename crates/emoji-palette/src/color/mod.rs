//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between the color spaces the classifier walks through.
//!
//! # Color Spaces
//!
//! - **Srgb** / **Rgba**: 8-bit gamma-encoded input pixels. Use for I/O.
//! - **LinearRgb**: Linear light intensity, the input to the XYZ matrix.
//! - **Xyz**: CIE 1931 tristimulus values (D65, scaled to 0..=100).
//! - **Lab**: CIE L\*a\*b\*, where Euclidean distance approximates perceived difference.
//!
//! # Example
//!
//! ```
//! use emoji_palette::{Lab, LinearRgb, Srgb, Xyz};
//!
//! let srgb = Srgb::from_u8(220, 20, 60);
//! let linear = LinearRgb::from(srgb);
//! let xyz = Xyz::from(linear);
//! let lab = Lab::from(xyz);
//!
//! // Shortcut for the whole chain
//! assert_eq!(lab, Lab::from(srgb));
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod rgba;
mod srgb;
mod xyz;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use rgba::Rgba;
pub use srgb::Srgb;
pub use xyz::Xyz;
