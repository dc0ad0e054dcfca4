//! Lightness tiers for building shade ladders from a base color.
//!
//! A tier fixes the lightness of a color while keeping its hue and
//! saturation, which turns one base color into a family of tints and
//! shades. Tiers follow the familiar design-token scale: 500 is the
//! neutral base, lower numbers are tints, higher numbers are shades.

use std::fmt;

use crate::color::Color;
use crate::hsl::{Hsl, from_hsl, to_hsl};

/// The lightness fraction each tier maps to, lightest first.
///
/// The table is symmetric about the 0.50 midpoint: paired entries sum
/// to 1.0, which is what makes the dark-mode counterpart mapping a clean
/// mirror.
const LIGHTNESS: [f64; 11] = [
    0.95, 0.90, 0.80, 0.70, 0.60, 0.50, 0.40, 0.30, 0.20, 0.10, 0.05,
];

/// Display names for each tier, in the same order as [`ColorLevel::ALL`].
const NAMES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// An ordinal lightness tier, from near-white (50) to near-black (950).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorLevel {
    /// Very light, almost white.
    L50,
    /// Very light.
    L100,
    /// Lighter, for subtle backgrounds.
    L200,
    /// Light, good for hover states or secondary buttons.
    L300,
    /// Medium light.
    L400,
    /// Neutral base, often the primary variant of a color.
    L500,
    /// Medium dark.
    L600,
    /// Darker, suitable for text.
    L700,
    /// Very dark, often used for text or active elements.
    L800,
    /// Very dark, closer to black.
    L900,
    /// Extremely dark, almost black.
    L950,
}

impl ColorLevel {
    /// Every tier in ascending order (lightest first).
    pub const ALL: [Self; 11] = [
        Self::L50,
        Self::L100,
        Self::L200,
        Self::L300,
        Self::L400,
        Self::L500,
        Self::L600,
        Self::L700,
        Self::L800,
        Self::L900,
        Self::L950,
    ];

    /// Position of this tier within [`Self::ALL`].
    const fn index(self) -> usize {
        self as usize
    }

    /// The lightness fraction this tier maps to.
    #[must_use]
    pub const fn lightness(self) -> f64 {
        LIGHTNESS[self.index()]
    }

    /// The mirrored tier used when rendering in dark mode.
    ///
    /// The mapping is an involution over all eleven tiers: 50 swaps with
    /// 950, 100 with 900, and so on, with 500 mapping to itself.
    #[must_use]
    pub const fn dark_counterpart(self) -> Self {
        Self::ALL[10 - self.index()]
    }

    /// Parse a tier from its numeric name, "50" through "950".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES.iter().position(|n| *n == name).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for ColorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(NAMES[self.index()])
    }
}

/// The appearance a tier is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Light appearance; tiers apply as-is.
    #[default]
    Light,
    /// Dark appearance; tiers swap to their mirrored counterpart.
    Dark,
}

/// Apply a lightness tier to a color.
///
/// Keeps the color's hue and saturation, replaces its lightness with the
/// tier's value, and returns a fully opaque result. Under
/// [`Scheme::Dark`] the mirrored counterpart tier is applied instead, so
/// a tier chosen against a light background inverts cleanly.
#[must_use]
pub fn apply_level(color: Color, level: ColorLevel, scheme: Scheme) -> Color {
    let effective = match scheme {
        Scheme::Light => level,
        Scheme::Dark => level.dark_counterpart(),
    };

    let components = to_hsl(color);
    from_hsl(Hsl {
        hue: components.hue,
        saturation: components.saturation,
        lightness: effective.lightness(),
    })
}

impl Color {
    /// This color adjusted to the given tier, for light rendering.
    #[must_use]
    pub fn level(self, level: ColorLevel) -> Self {
        apply_level(self, level, Scheme::Light)
    }
}
