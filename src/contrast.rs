//! Relative luminance, WCAG contrast ratio and readable-text selection.
//!
//! Every function here is total: hex input that fails to decode maps to a
//! documented fallback instead of an error. Callers pass values
//! that may be unset.

use crate::color::{Rgb, decode_hex};

/// Contrast reported when either color is unknown.
pub const NO_CONTRAST: f64 = 1.0;

/// YIQ luma at or above which dark text reads better.
pub const YIQ_DARK_TEXT_THRESHOLD: f64 = 128.0;

/// Text color used on light backgrounds.
pub const DARK_TEXT: &str = "#000000";

/// Text color used on dark or unknown backgrounds.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Calculate relative luminance of an RGB color per WCAG 2.x.
///
/// Each channel is normalized to `[0, 1]` and linearized with the WCAG
/// cutoff of `0.03928`, then weighted:
///
/// L = 0.2126 × R + 0.7152 × G + 0.0722 × B
///
/// # Arguments
///
/// * `rgb` - The color to measure
///
/// # Returns
///
/// A value between 0.0 (black) and 1.0 (white).
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.to_unit();

    // Convert sRGB component to linear RGB
    let lin = |c: f64| -> f64 {
        if c <= 0.039_28 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b)
}

/// WCAG contrast ratio between two decoded colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, always in `[1, 21]` and
/// independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG contrast ratio between two hex colors.
///
/// # Arguments
///
/// * `a` - First color, `#rgb` or `#rrggbb`
/// * `b` - Second color, same forms
///
/// # Returns
///
/// - The ratio in `[1, 21]`, the same for either argument order
/// - [`NO_CONTRAST`] when either side does not decode
///
/// # Examples
///
/// ```
/// # use palette_guide::contrast::contrast;
/// assert!((contrast("#000000", "#FFFFFF") - 21.0).abs() < 1e-9);
/// assert_eq!(contrast("", "#FFFFFF"), 1.0);
/// ```
#[must_use]
pub fn contrast(a: &str, b: &str) -> f64 {
    match (decode_hex(a), decode_hex(b)) {
        (Some(a), Some(b)) => contrast_ratio(a, b),
        _ => NO_CONTRAST,
    }
}

/// YIQ luma of a color, in `[0, 255]`.
#[must_use]
pub fn yiq_luma(rgb: Rgb) -> f64 {
    let weighted = 299 * u32::from(rgb.r) + 587 * u32::from(rgb.g) + 114 * u32::from(rgb.b);
    f64::from(weighted) / 1000.0
}

/// Whether black text is more legible than white on `background`.
///
/// # Arguments
///
/// * `background` - Background color, `#rgb` or `#rrggbb`
///
/// # Returns
///
/// `true` when the YIQ luma is at least 128. Undecodable backgrounds fall
/// back to `false` (white text).
#[must_use]
pub fn prefers_dark_text(background: &str) -> bool {
    decode_hex(background).is_some_and(|rgb| yiq_luma(rgb) >= YIQ_DARK_TEXT_THRESHOLD)
}

/// The text color to draw on `background`: [`DARK_TEXT`] or [`LIGHT_TEXT`].
#[must_use]
pub fn text_color_for(background: &str) -> &'static str {
    if prefers_dark_text(background) {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn test_luminance() {
        assert!(approx_eq(relative_luminance(Rgb::BLACK), 0.0, 1e-12));
        assert!(approx_eq(relative_luminance(Rgb::WHITE), 1.0, 1e-12));
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-12));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-12));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-12));

        let very_dark = relative_luminance(Rgb::new(1, 1, 1));
        let slightly_lighter = relative_luminance(Rgb::new(2, 2, 2));
        assert!(slightly_lighter > very_dark);
    }

    #[test]
    fn test_luminance_linear_segment() {
        // 10/255 ≈ 0.0392 sits below the 0.03928 cutoff.
        let lum = relative_luminance(Rgb::new(10, 10, 10));
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-12));
    }

    #[test]
    fn test_luminance_monotonic_in_gray() {
        let mut previous = -1.0;
        for v in 0..=255u8 {
            let lum = relative_luminance(Rgb::new(v, v, v));
            assert!(lum > previous, "luminance not increasing at {v}");
            previous = lum;
        }
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn test_contrast_black_white_is_21() {
        let ratio = contrast("#000000", "#FFFFFF");
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn test_contrast_same_color_is_1() {
        for hex in ["#000000", "#ffffff", "#336699", "#F5F5F5", "#abc"] {
            assert!(approx_eq(contrast(hex, hex), 1.0, 1e-12), "{hex}");
        }
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let pairs = [
            ("#ff0000", "#ffffff"),
            ("#F5F5F5", "#333333"),
            ("#1e293b", "#a1a1aa"),
            ("#0f0", "#00f"),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast(a, b).to_bits(), contrast(b, a).to_bits());
        }
    }

    #[test]
    fn test_contrast_known_values() {
        assert!(approx_eq(contrast("#767676", "#ffffff"), 4.54, 0.01));
        assert!(approx_eq(contrast("#ff0000", "#ffffff"), 3.998, 0.01));
        assert!(approx_eq(contrast("#333333", "#F5F5F5"), 11.59, 0.05));
    }

    #[test]
    fn test_contrast_three_digit_equivalent() {
        assert_eq!(
            contrast("#abc", "#123").to_bits(),
            contrast("#aabbcc", "#112233").to_bits()
        );
    }

    #[test]
    fn test_contrast_undecodable_is_sentinel() {
        assert_eq!(contrast("", "#ffffff"), NO_CONTRAST);
        assert_eq!(contrast("#000000", ""), NO_CONTRAST);
        assert_eq!(contrast("#zzzzzz", "#ffffff"), NO_CONTRAST);
        assert_eq!(contrast("", ""), NO_CONTRAST);
    }

    // ── Readable text ───────────────────────────────────────────────

    #[test]
    fn test_prefers_dark_text() {
        assert!(prefers_dark_text("#FFFFFF"));
        assert!(!prefers_dark_text("#000000"));
        assert!(prefers_dark_text("#F5F5F5"));
        assert!(!prefers_dark_text("#333333"));
        assert!(!prefers_dark_text("#0000ff"));
        assert!(prefers_dark_text("#ffff00"));
    }

    #[test]
    fn test_prefers_dark_text_threshold_is_inclusive() {
        // 128 * 1000 / (299 + 587 + 114) = 128 exactly for a gray of 128.
        assert!(approx_eq(yiq_luma(Rgb::new(128, 128, 128)), 128.0, 1e-12));
        assert!(prefers_dark_text("#808080"));
        assert!(!prefers_dark_text("#7f7f7f"));
    }

    #[test]
    fn test_prefers_dark_text_unknown_background() {
        assert!(!prefers_dark_text(""));
        assert!(!prefers_dark_text("white"));
    }

    #[test]
    fn test_text_color_for() {
        assert_eq!(text_color_for("#ffffff"), DARK_TEXT);
        assert_eq!(text_color_for("#000"), LIGHT_TEXT);
        assert_eq!(text_color_for(""), LIGHT_TEXT);
    }
}
