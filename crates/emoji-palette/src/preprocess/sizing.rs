//! Cell grid sizing.
//!
//! Sources that already fit are used pixel-for-pixel. Larger sources are
//! scaled so the longer side equals the limit and the shorter side keeps
//! the aspect ratio, rounded half-up.

/// Longest side of the cell grid unless configured otherwise.
pub const DEFAULT_MAX_SIDE: u32 = 32;

/// How the caller should produce the cell grid from the source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleFilter {
    /// Nearest-neighbor downscale
    Nearest,
    /// Exact copy, no resampling
    None,
}

impl ResampleFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::None => "none",
        }
    }
}

/// Cell grid dimensions for one source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
    pub filter: ResampleFilter,
}

impl TargetSize {
    /// True when the source is used as-is.
    pub fn is_exact(&self) -> bool {
        self.filter == ResampleFilter::None
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// `round(numerator / denominator)` with halves rounded up, in integers.
fn div_round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Compute the cell grid for a `width` x `height` source.
///
/// Zero-sized sources are the caller's responsibility to reject; they come
/// back unchanged with [`ResampleFilter::None`]. A shorter side that rounds
/// to zero is clamped to one cell. A `max_side` of zero is treated as one.
///
/// # Example
///
/// ```
/// use emoji_palette::{target_size, ResampleFilter};
///
/// let small = target_size(16, 8, 32);
/// assert_eq!((small.width, small.height, small.filter), (16, 8, ResampleFilter::None));
///
/// let wide = target_size(640, 480, 32);
/// assert_eq!((wide.width, wide.height, wide.filter), (32, 24, ResampleFilter::Nearest));
/// ```
pub fn target_size(width: u32, height: u32, max_side: u32) -> TargetSize {
    let max_side = max_side.max(1);

    if width <= max_side && height <= max_side {
        return TargetSize {
            width,
            height,
            filter: ResampleFilter::None,
        };
    }

    let scale_short = |short: u32, long: u32| -> u32 {
        let scaled = div_round_half_up(short as u64 * max_side as u64, long as u64);
        // scaled <= max_side since short <= long
        (scaled as u32).max(1)
    };

    let (width, height) = if width > height {
        (max_side, scale_short(height, width))
    } else {
        (scale_short(width, height), max_side)
    };

    TargetSize {
        width,
        height,
        filter: ResampleFilter::Nearest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sources_are_exact() {
        for (w, h) in [(1, 1), (32, 32), (32, 1), (7, 30)] {
            let t = target_size(w, h, DEFAULT_MAX_SIDE);
            assert_eq!((t.width, t.height), (w, h));
            assert!(t.is_exact());
        }
    }

    #[test]
    fn test_landscape_scales_width_to_limit() {
        let t = target_size(100, 50, 32);
        assert_eq!((t.width, t.height), (32, 16));
        assert_eq!(t.filter, ResampleFilter::Nearest);
    }

    #[test]
    fn test_portrait_scales_height_to_limit() {
        let t = target_size(50, 100, 32);
        assert_eq!((t.width, t.height), (16, 32));
    }

    #[test]
    fn test_square_over_limit() {
        let t = target_size(64, 64, 32);
        assert_eq!((t.width, t.height), (32, 32));
        assert_eq!(t.cell_count(), 1024);
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 33 * 32 / 64 = 16.5 -> 17
        assert_eq!(target_size(64, 33, 32).height, 17);
        // 31 * 32 / 64 = 15.5 -> 16
        assert_eq!(target_size(64, 31, 32).height, 16);
        // 20 * 32 / 33 = 19.39 -> 19
        assert_eq!(target_size(33, 20, 32).height, 19);
    }

    #[test]
    fn test_one_side_over_limit() {
        // Only the width exceeds; still scaled by the longer side
        let t = target_size(33, 33 - 1, 32);
        assert_eq!((t.width, t.height), (32, 31));
    }

    #[test]
    fn test_extreme_aspect_clamps_to_one() {
        let t = target_size(1000, 10, 32);
        assert_eq!((t.width, t.height), (32, 1));
    }

    #[test]
    fn test_custom_limit() {
        let t = target_size(300, 200, 12);
        assert_eq!((t.width, t.height), (12, 8));
        assert_eq!(target_size(5, 5, 0).width, 1);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(ResampleFilter::Nearest.as_str(), "nearest");
        assert_eq!(ResampleFilter::None.as_str(), "none");
    }
}
