//! Color codec: hexadecimal strings to and from RGB triples.
//!
//! This module provides functions for:
//! - Decoding `#rgb` / `#rrggbb` hex strings, with a defined no-color case
//! - Encoding RGB triples back into canonical lowercase `#rrggbb` form
//! - Strictly parsing user-supplied colors (hex or CSS `rgb()`) where a
//!   descriptive error is wanted

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

/// RGB color representation with red, green, and blue components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color from individual components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a new RGB color from a tuple.
    #[must_use]
    pub fn from_tuple(rgb: (u8, u8, u8)) -> Self {
        Self::new(rgb.0, rgb.1, rgb.2)
    }

    /// Convert RGB color to a tuple.
    #[must_use]
    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels normalized to `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build a color from `[0, 1]` channels, rounding to the nearest step.
    ///
    /// Out-of-range input is clamped.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(quantize(r), quantize(g), quantize(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_rgb(s)
    }
}

/// Decode a `#rgb` or `#rrggbb` hex string.
///
/// Digits are case-insensitive and surrounding whitespace is ignored. The
/// 3-digit form expands each digit by duplication, so `#abc` decodes exactly
/// like `#aabbcc`.
///
/// Empty input is the defined no-color case and yields `None`. Anything else
/// that is not exactly `#` followed by 3 or 6 hex digits is rejected the same
/// way, so callers only ever see a valid triple or nothing.
///
/// # Arguments
///
/// * `hex` - Color string such as `#abc` or `#aabbcc`, possibly empty
///
/// # Returns
///
/// - `Some(Rgb)` with each component in range 0-255
/// - `None` for empty or malformed input
///
/// # Examples
///
/// ```
/// # use palette_guide::color::{Rgb, decode_hex};
/// assert_eq!(decode_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
/// assert_eq!(decode_hex("#F80"), Some(Rgb::new(255, 136, 0)));
/// assert_eq!(decode_hex(""), None);
/// ```
#[must_use]
pub fn decode_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
    match digits.len() {
        3 => {
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Decode an optional hex field, treating absence like the empty string.
#[must_use]
pub fn decode_opt(hex: Option<&str>) -> Option<Rgb> {
    hex.and_then(decode_hex)
}

/// Encode a color as canonical `#rrggbb` with lowercase digits.
///
/// # Arguments
///
/// * `rgb` - RGB struct with values 0-255
///
/// # Returns
///
/// A 7-character string: `#` followed by two zero-padded digits per channel.
#[must_use]
pub fn encode_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Parse a user-supplied color string into an RGB struct.
///
/// Accepted formats:
/// - `#rgb` and `#rrggbb` - hex, as [`decode_hex`]
/// - `#rrggbbaa` - hex with alpha (alpha ignored)
/// - `rgb(R, G, B)` - CSS-style RGB function
///
/// # Errors
///
/// This function returns an error in the following cases:
/// - The string is not in a recognized color format
/// - A component value is invalid (e.g., non-hex characters, out of range)
///
/// # Examples
///
/// ```
/// # use palette_guide::color::{Rgb, parse_rgb};
/// assert_eq!(parse_rgb("#ff8000").unwrap(), Rgb::new(255, 128, 0));
/// assert_eq!(parse_rgb("rgb(255, 128, 0)").unwrap(), Rgb::new(255, 128, 0));
/// ```
pub fn parse_rgb(s: &str) -> Result<Rgb> {
    let s = s.trim();
    if s.is_empty() {
        return Err(anyhow!("Empty color string"));
    }

    if let Some(digits) = s.strip_prefix('#') {
        if digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return decode_hex(&s[..7])
                .ok_or_else(|| anyhow!("Invalid hex color with alpha: {s}"));
        }
        return decode_hex(s).ok_or_else(|| {
            anyhow!(
                "Invalid hex color: {s} (expected 3, 6 or 8 hex digits, got {})",
                digits.len()
            )
        });
    }

    // Handle rgb() format
    let re = Regex::new(r"^rgb\((\d+),\s*(\d+),\s*(\d+)\)$")
        .context("Failed to compile RGB regex")?;
    if let Some(caps) = re.captures(s) {
        let r = caps[1]
            .parse::<u8>()
            .with_context(|| format!("Failed to parse red component: {}", &caps[1]))?;
        let g = caps[2]
            .parse::<u8>()
            .with_context(|| format!("Failed to parse green component: {}", &caps[2]))?;
        let b = caps[3]
            .parse::<u8>()
            .with_context(|| format!("Failed to parse blue component: {}", &caps[3]))?;
        return Ok(Rgb::new(r, g, b));
    }

    Err(anyhow!("Unrecognized color format: {s}"))
}
