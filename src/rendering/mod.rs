//! Input decoding: bytes in, RGBA grid out.
//!
//! Raster formats go through the `image` crate; SVG is rasterized with
//! resvg at its natural size.

pub mod data_url;
pub mod decode;
pub mod resample;
pub mod svg;

pub use data_url::unwrap_data_url;
pub use decode::{is_svg, ImageDecoder};
pub use resample::{resample, to_cells};
pub use svg::{SvgRasterizer, DEFAULT_SVG_SIZE, MAX_SVG_SIDE};
