// src/encode/llc/color.rs

//! Reversible integer RGB decorrelation.
//!
//! Red and blue become differences against green; green absorbs a quarter of
//! their sum. Samples are stored in `[r', g', b']` order.

/// Forward transform of one RGB triple.
#[inline]
pub fn forward_rgb(r: u8, g: u8, b: u8) -> [i16; 3] {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let b = b - g;
    let r = r - g;
    let g = g + (b + r) / 4;
    [r as i16, g as i16, b as i16]
}

/// Inverse transform, clamping each channel to the 8-bit range.
#[inline]
pub fn inverse_rgb(rgb: [i16; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(i32::from);
    let g = g - (r + b) / 4;
    let r = r + g;
    let b = b + g;
    [clamp_u8(r), clamp_u8(g), clamp_u8(b)]
}

#[inline(always)]
pub(crate) fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_has_no_chroma() {
        assert_eq!(forward_rgb(128, 128, 128), [0, 128, 0]);
    }

    #[test]
    fn test_truncating_division() {
        // (b' + r') = -3 - 2 = -5, -5 / 4 truncates to -1.
        assert_eq!(forward_rgb(8, 10, 7), [-2, 9, -3]);
    }

    #[test]
    fn test_inverse_is_exact_over_all_triples() {
        for r in (0..=255u8).step_by(5) {
            for g in 0..=255u8 {
                for b in (0..=255u8).step_by(3) {
                    assert_eq!(inverse_rgb(forward_rgb(r, g, b)), [r, g, b]);
                }
            }
        }
    }

    #[test]
    fn test_inverse_clamps_garbage() {
        assert_eq!(inverse_rgb([300, 300, 300]), [255, 150, 255]);
        assert_eq!(inverse_rgb([-300, -10, -300]), [0, 140, 0]);
    }
}
