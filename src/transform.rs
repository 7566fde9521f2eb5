//! Derived colors: complementary hue and brightness shifts.

use crate::color::{Rgb, decode_hex, encode_hex};

/// Fallback returned by [`complementary`] for undecodable input.
pub const COMPLEMENT_FALLBACK: &str = "#000000";

/// Hue, saturation and lightness, each in `[0, 1]`.
///
/// Hue is measured in turns, so `0.5` is a 180° rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in turns, `[0, 1)`.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Convert from RGB using the min/max formulation.
    ///
    /// Achromatic colors (max == min) get hue and saturation 0.
    #[must_use]
    #[allow(clippy::float_cmp, clippy::many_single_char_names)]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self { h: h / 6.0, s, l }
    }

    /// Convert back to RGB, rounding each channel to the nearest step.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0.0 {
            return Rgb::from_unit(self.l, self.l, self.l);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        Rgb::from_unit(
            hue_to_channel(p, q, self.h + 1.0 / 3.0),
            hue_to_channel(p, q, self.h),
            hue_to_channel(p, q, self.h - 1.0 / 3.0),
        )
    }

    /// Rotate the hue by `turns`, wrapping into `[0, 1)`.
    #[must_use]
    pub fn rotate(self, turns: f64) -> Self {
        Self {
            h: (self.h + turns).rem_euclid(1.0),
            ..self
        }
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// The complementary color: hue rotated by half a turn.
///
/// Saturation and lightness are kept, so achromatic input maps to itself.
/// Undecodable input yields [`COMPLEMENT_FALLBACK`].
///
/// # Arguments
///
/// * `hex` - Base color, `#rgb` or `#rrggbb`
///
/// # Returns
///
/// The complement as lowercase `#rrggbb`.
///
/// # Examples
///
/// ```
/// # use palette_guide::transform::complementary;
/// assert_eq!(complementary("#ff0000"), "#00ffff");
/// assert_eq!(complementary(""), "#000000");
/// ```
#[must_use]
pub fn complementary(hex: &str) -> String {
    match decode_hex(hex) {
        Some(rgb) => encode_hex(Hsl::from_rgb(rgb).rotate(0.5).to_rgb()),
        None => COMPLEMENT_FALLBACK.to_string(),
    }
}

/// Add `amount` to each channel independently, clamping to `[0, 255]`.
///
/// The leading `#` is optional and is kept in the output only if the input
/// had it. Output digits are lowercase and always six long. Input that does
/// not decode is returned unchanged.
///
/// # Arguments
///
/// * `hex` - Color with or without a leading `#`
/// * `amount` - Added to each of R, G and B; negative darkens
///
/// # Examples
///
/// ```
/// # use palette_guide::transform::shift_brightness;
/// assert_eq!(shift_brightness("#336699", 16), "#4376a9");
/// assert_eq!(shift_brightness("336699", -64), "002659");
/// ```
#[must_use]
pub fn shift_brightness(hex: &str, amount: i32) -> String {
    let trimmed = hex.trim();
    let (pound, digits) = match trimmed.strip_prefix('#') {
        Some(digits) => (true, digits),
        None => (false, trimmed),
    };
    let Some(rgb) = decode_hex(&format!("#{digits}")) else {
        return hex.to_string();
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let shift = |c: u8| (i32::from(c) + amount).clamp(0, 255) as u8;
    let shifted = encode_hex(Rgb::new(shift(rgb.r), shift(rgb.g), shift(rgb.b)));

    if pound {
        shifted
    } else {
        shifted[1..].to_string()
    }
}

/// Lighten every channel by `amount`.
#[must_use]
pub fn lighten(hex: &str, amount: u8) -> String {
    shift_brightness(hex, i32::from(amount))
}

/// Darken every channel by `amount`.
#[must_use]
pub fn darken(hex: &str, amount: u8) -> String {
    shift_brightness(hex, -i32::from(amount))
}
