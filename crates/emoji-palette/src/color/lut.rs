//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs using the exact
//! IEC 61966-2-1 decode formula, one entry per 8-bit channel value.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel value to linear light (0.0..=1.0).
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(value: u8) -> f64 {
        let c = value as f64 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(srgb8_to_linear(0), 0.0);
        assert!((srgb8_to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matches_formula_for_every_byte() {
        for value in 0..=255u8 {
            assert!(
                (srgb8_to_linear(value) - exact(value)).abs() < 1e-12,
                "LUT entry {value} drifted from the IEC 61966-2-1 formula"
            );
        }
    }

    #[test]
    fn test_linear_segment_threshold() {
        // 10/255 = 0.0392 sits below the 0.04045 knee, 11/255 = 0.0431 above it
        assert!((srgb8_to_linear(10) - 10.0 / 255.0 / 12.92).abs() < 1e-12);
        assert!(srgb8_to_linear(11) > srgb8_to_linear(10));
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = srgb8_to_linear(0);
        for value in 1..=255u8 {
            let curr = srgb8_to_linear(value);
            assert!(curr > prev, "srgb8_to_linear not monotonic at {value}");
            prev = curr;
        }
    }
}
