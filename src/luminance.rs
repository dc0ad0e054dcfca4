//! Relative luminance per the WCAG sRGB model.
//!
//! Luminance is never stored anywhere; it is recomputed from a color's
//! channels every time a contrast ratio needs it.

use crate::color::Color;

/// Channels below this knee stay on the linear segment of the sRGB
/// transfer curve.
const LINEAR_KNEE: f64 = 0.03928;

/// Perceptual weight of the red channel.
const RED_WEIGHT: f64 = 0.2126;

/// Perceptual weight of the green channel.
const GREEN_WEIGHT: f64 = 0.7152;

/// Perceptual weight of the blue channel.
const BLUE_WEIGHT: f64 = 0.0722;

/// Compute the relative luminance of a color.
///
/// Each channel is linearized with the sRGB transfer curve, then the
/// three are combined with the standard perceptual weights:
///
/// L = 0.2126 × R + 0.7152 × G + 0.0722 × B
///
/// Returns a value between 0.0 (black) and 1.0 (white). Alpha is
/// ignored.
#[must_use]
pub fn luminance(color: Color) -> f64 {
    let (r, g, b) = color.channels();
    RED_WEIGHT * linearize(r) + GREEN_WEIGHT * linearize(g) + BLUE_WEIGHT * linearize(b)
}

/// Convert a gamma-encoded sRGB channel to its linear-light value.
fn linearize(v: f64) -> f64 {
    if v < LINEAR_KNEE {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
