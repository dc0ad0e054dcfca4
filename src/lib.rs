//! WCAG contrast picking and shade-ladder generation for colors.
//!
//! `legible` measures WCAG-style contrast ratios between colors and
//! classifies them into accessibility ratings. Given a background and a
//! target rating it searches a fixed candidate set for the best-fitting
//! foreground. It also derives tint/shade ladders from a color's hue and
//! saturation, which is where those candidates come from.

pub mod color;
pub mod contrast;
pub mod hsl;
pub mod level;
pub mod logs;
pub mod luminance;

use anyhow::{Context, Result};

pub use color::{Color, parse_color};
pub use contrast::{
    Contrast, ContrastLevel, Rating, best_contrast, contrast_ratio, contrast_report,
};
pub use hsl::Hsl;
pub use level::{ColorLevel, Scheme, apply_level};
pub use luminance::luminance;

/// Compute the contrast between two colors given as strings.
///
/// This helper orchestrates the string-facing pipeline:
/// 1. Parse the background color
/// 2. Parse the foreground color
/// 3. Compute the contrast ratio and classify it
///
/// # Errors
///
/// Returns an error if either string cannot be parsed as a color.
pub fn contrast_between(background: &str, foreground: &str) -> Result<Contrast> {
    let bg = parse_color(background).context("Failed to parse background color")?;
    crate::debug!("bg={bg:?}");

    let fg = parse_color(foreground).context("Failed to parse foreground color")?;
    crate::debug!("fg={fg:?}");

    let contrast = contrast_ratio(bg, fg);
    crate::debug!("ratio={} rating={}", contrast.ratio, contrast.rating);

    Ok(contrast)
}
