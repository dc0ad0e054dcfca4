//! Color value type, parsing, and formatting.
//!
//! This module provides:
//! - The [`Color`] value type with normalized RGBA channels
//! - Parsing of common color formats (hex, X11 `rgb:`, CSS `rgb()`)
//! - Component-slice extraction with a grayscale fallback
//! - Lowercase hex formatting for output

use anyhow::{Context, Result, anyhow};
use regex::Regex;

/// An RGBA color with every channel normalized to the 0.0-1.0 range.
///
/// Channels outside that range are never clamped on construction; the
/// math downstream is defined for them, even if the result is not a
/// displayable color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0-1.0).
    pub r: f64,
    /// Green channel (0.0-1.0).
    pub g: f64,
    /// Blue channel (0.0-1.0).
    pub b: f64,
    /// Alpha channel (0.0-1.0), 1.0 being fully opaque.
    pub a: f64,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create an opaque color from RGB channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB channels plus an alpha channel.
    #[must_use]
    pub const fn with_alpha(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque gray with all three channels set to `white`.
    #[must_use]
    pub const fn gray(white: f64) -> Self {
        Self::new(white, white, white)
    }

    /// Build a color from a raw component slice.
    ///
    /// Interprets the slice by length the way grayscale-capable color
    /// spaces report their components:
    /// - 4 components: RGBA
    /// - 3 components: opaque RGB
    /// - 2 components: grayscale white plus alpha
    /// - 1 component: opaque grayscale white
    ///
    /// Any other length is an unexpected layout and degrades to opaque
    /// black rather than failing.
    #[must_use]
    pub fn from_components(components: &[f64]) -> Self {
        match *components {
            [r, g, b, a] => Self::with_alpha(r, g, b, a),
            [r, g, b] => Self::new(r, g, b),
            [w, a] => Self::with_alpha(w, w, w, a),
            [w] => Self::gray(w),
            _ => Self::BLACK,
        }
    }

    /// The red, green, and blue channels as a tuple. Alpha is dropped.
    #[must_use]
    pub const fn channels(self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// Format as a lowercase `#rrggbb` hex string.
    ///
    /// Channels are clamped into range and quantized to 8 bits; alpha is
    /// dropped.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b)
        )
    }
}

/// Scale a normalized channel to 0-255, clamping out-of-range input.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse a color string into a [`Color`].
///
/// This function supports the color formats commonly seen in terminal
/// replies and config files:
/// - `rgb:RRRR/GGGG/BBBB` - X11 RGB format with hex values
/// - `rgba:RRRR/GGGG/BBBB/AAAA` - X11 RGBA format (alpha ignored)
/// - `#RRGGBB` - Standard hex color format
/// - `#RRGGBBAA` - Hex color with alpha (alpha ignored)
/// - `rgb(R, G, B)` - CSS-style RGB function
///
/// # Errors
///
/// Returns an error in the following cases:
/// - The string is not in a recognized color format
/// - A component value is invalid (e.g., non-hex characters, out of range)
/// - The hex string has an invalid length (not 2 or 4 digits per component)
///
/// # Examples
///
/// ```
/// # use legible::color::parse_color;
/// assert_eq!(parse_color("#ff8000").unwrap().to_hex(), "#ff8000");
/// assert_eq!(parse_color("rgb:ffff/8080/0000").unwrap().to_hex(), "#ff8000");
/// assert_eq!(parse_color("rgb(255, 128, 0)").unwrap().to_hex(), "#ff8000");
/// ```
pub fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();

    // Handle rgb: or rgba: format
    if s.starts_with("rgb:") || s.starts_with("rgba:") {
        let color_part = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid rgb: format - missing colon"))?
            .1;
        let parts: Vec<&str> = color_part.split('/').collect();

        if parts.len() == 3 || parts.len() == 4 {
            let r = hex_channel(parts[0])
                .with_context(|| format!("Failed to parse red component: {}", parts[0]))?;
            let g = hex_channel(parts[1])
                .with_context(|| format!("Failed to parse green component: {}", parts[1]))?;
            let b = hex_channel(parts[2])
                .with_context(|| format!("Failed to parse blue component: {}", parts[2]))?;
            return Ok(Color::new(r, g, b));
        }
        return Err(anyhow!(
            "Invalid rgb: format - expected 3 or 4 components, got {}",
            parts.len()
        ));
    }

    // Handle #hex format
    if s.starts_with('#') && (s.len() == 7 || s.len() == 9) {
        let r = byte_channel(&s[1..3])
            .with_context(|| format!("Failed to parse red hex component: {}", &s[1..3]))?;
        let g = byte_channel(&s[3..5])
            .with_context(|| format!("Failed to parse green hex component: {}", &s[3..5]))?;
        let b = byte_channel(&s[5..7])
            .with_context(|| format!("Failed to parse blue hex component: {}", &s[5..7]))?;
        return Ok(Color::new(r, g, b));
    }

    // Handle rgb() format
    let re =
        Regex::new(r"rgb\((\d+),\s*(\d+),\s*(\d+)\)").context("Failed to compile RGB regex")?;
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
        return Ok(Color::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ));
    }

    Err(anyhow!("Unrecognized color format: {s}"))
}

/// Parse a 2-digit hex byte into a normalized channel.
fn byte_channel(hex: &str) -> Result<f64> {
    let n =
        u8::from_str_radix(hex, 16).with_context(|| format!("Invalid hex string: {hex}"))?;
    Ok(f64::from(n) / 255.0)
}

/// Parse a 2- or 4-digit hex component into a normalized channel.
///
/// 4-digit values are 16-bit and get scaled down to 8-bit precision
/// first, matching how X11 color replies are quantized.
fn hex_channel(hex: &str) -> Result<f64> {
    let n =
        u32::from_str_radix(hex, 16).with_context(|| format!("Invalid hex string: {hex}"))?;

    match hex.len() {
        2 => Ok(f64::from(n) / 255.0),
        4 => Ok(((f64::from(n) / 65535.0) * 255.0).round() / 255.0),
        _ => Err(anyhow!(
            "Invalid hex length: expected 2 or 4 characters, got {}",
            hex.len()
        )),
    }
}
