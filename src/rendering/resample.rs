use emoji_palette::{ResampleFilter, Rgba, TargetSize};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resample `image` to the target cell grid.
///
/// [`ResampleFilter::None`] copies the image as-is; callers only get that
/// filter when the target equals the source size.
pub fn resample(image: &RgbaImage, target: TargetSize) -> RgbaImage {
    match target.filter {
        ResampleFilter::None if image.dimensions() == (target.width, target.height) => {
            image.clone()
        }
        _ => imageops::resize(image, target.width, target.height, FilterType::Nearest),
    }
}

/// Flatten an image into row-major cells.
pub fn to_cells(image: &RgbaImage) -> Vec<Rgba> {
    image.pixels().map(|px| Rgba::from_bytes(px.0)).collect()
}
