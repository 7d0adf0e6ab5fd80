//! Test fixtures: images encoded in memory.

use image::{ImageOutputFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const RED: [u8; 4] = [220, 20, 60, 255];
pub const YELLOW: [u8; 4] = [255, 215, 0, 255];
pub const PURPLE: [u8; 4] = [128, 0, 128, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Encode an image in the given format
pub fn encode(img: &RgbaImage, format: ImageOutputFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut buf, format)
        .expect("Failed to encode fixture");
    buf.into_inner()
}

/// Single-color PNG
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    encode(
        &RgbaImage::from_pixel(width, height, Rgba(color)),
        ImageOutputFormat::Png,
    )
}

/// PNG built row by row from explicit pixels
pub fn png_from_rows(rows: &[&[[u8; 4]]]) -> Vec<u8> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let img = RgbaImage::from_fn(width, height, |x, y| Rgba(rows[y as usize][x as usize]));
    encode(&img, ImageOutputFormat::Png)
}

/// Transparent canvas with an opaque centered square covering half of each side
pub fn centered_square_png(side: u32, color: [u8; 4]) -> Vec<u8> {
    let lo = side / 4;
    let hi = side - side / 4;
    let img = RgbaImage::from_fn(side, side, |x, y| {
        if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
            Rgba(color)
        } else {
            Rgba(CLEAR)
        }
    });
    encode(&img, ImageOutputFormat::Png)
}

/// SVG with a full-size rect
pub fn solid_svg(width: u32, height: u32, fill: &str) -> Vec<u8> {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><rect width="{width}" height="{height}" fill="{fill}"/></svg>"#
    )
    .into_bytes()
}
