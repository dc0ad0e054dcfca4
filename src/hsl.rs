//! Bidirectional RGB/HSL conversion.
//!
//! The two directions are deliberately asymmetric: [`from_hsl`] builds a
//! color with the standard HSL chroma decomposition, while [`to_hsl`]
//! reads lightness from the HSV value channel (the largest RGB channel).
//! Shade ladders extract hue and saturation with [`to_hsl`] and feed a
//! replacement lightness back into [`from_hsl`], so the two lightness
//! notions must stay interchangeable even though they are not the same
//! colorimetric quantity.

use crate::color::Color;

/// An HSL triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0.0-360.0.
    pub hue: f64,
    /// Saturation as a fraction, 0.0-1.0.
    pub saturation: f64,
    /// Lightness as a fraction, 0.0-1.0.
    pub lightness: f64,
}

/// Convert an HSL triple to an opaque [`Color`].
///
/// Uses the standard decomposition: chroma `c = (1 - |2l - 1|) * s`, the
/// intermediate `x = c * (1 - |(h/60 mod 2) - 1|)`, and the match value
/// `m = l - c/2`, then distributes `c` and `x` across the RGB channels
/// according to the 60-degree hue sector.
///
/// Saturation and lightness outside 0.0-1.0 are not clamped; callers are
/// responsible for supplying valid ranges.
#[must_use]
pub fn from_hsl(hsl: Hsl) -> Color {
    let c = (1.0 - (2.0 * hsl.lightness - 1.0).abs()) * hsl.saturation;
    let x = c * (1.0 - ((hsl.hue / 60.0) % 2.0 - 1.0).abs());
    let m = hsl.lightness - c / 2.0;

    let (r, g, b) = sector_rgb(hsl.hue, c, x, m);
    Color::new(r, g, b)
}

/// Distribute chroma across the RGB channels for one hue sector.
///
/// Truncating division keeps negative hues out of every sector, so they
/// land on the achromatic fallback arm.
#[allow(clippy::cast_possible_truncation)]
fn sector_rgb(hue: f64, c: f64, x: f64, m: f64) -> (f64, f64, f64) {
    match (hue / 60.0) as i64 % 6 {
        0 => (c + m, x + m, m),
        1 => (x + m, c + m, m),
        2 => (m, c + m, x + m),
        3 => (m, x + m, c + m),
        4 => (x + m, m, c + m),
        5 => (c + m, m, x + m),
        _ => (m, m, m),
    }
}

/// Extract the HSL components of a color.
///
/// Hue comes from the usual max-channel formula and lands in 0.0-360.0;
/// saturation is `delta / max`. The reported lightness is the HSV value
/// channel, which is what [`from_hsl`] expects back in its lightness
/// position when a shade ladder rebuilds the color. Achromatic input
/// reports hue and saturation of 0. Alpha is ignored.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn to_hsl(color: Color) -> Hsl {
    let (r, g, b) = color.channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsl {
        hue,
        saturation,
        lightness: max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    /// The six sector corners at full saturation and mid lightness.
    const CORNERS: [(f64, &str); 6] = [
        (0.0, "#ff0000"),
        (60.0, "#ffff00"),
        (120.0, "#00ff00"),
        (180.0, "#00ffff"),
        (240.0, "#0000ff"),
        (300.0, "#ff00ff"),
    ];

    #[test]
    fn test_from_hsl_sector_corners() {
        for (hue, expected) in CORNERS {
            let color = from_hsl(Hsl {
                hue,
                saturation: 1.0,
                lightness: 0.5,
            });
            assert_eq!(color.to_hex(), expected, "hue {hue}");
        }
    }

    #[test]
    fn test_to_hsl_recovers_hue_in_every_sector() {
        for (hue, _) in CORNERS {
            let color = from_hsl(Hsl {
                hue,
                saturation: 1.0,
                lightness: 0.5,
            });
            let read = to_hsl(color);
            assert!((read.hue - hue).abs() < EPSILON, "hue {hue} read {}", read.hue);
            assert!((read.saturation - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_to_hsl_mid_sector_hue() {
        for hue in [30.0, 90.0, 150.0, 210.0, 270.0, 330.0] {
            let color = from_hsl(Hsl {
                hue,
                saturation: 0.5,
                lightness: 0.5,
            });
            let read = to_hsl(color);
            assert!((read.hue - hue).abs() < EPSILON, "hue {hue} read {}", read.hue);
        }
    }

    #[test]
    fn test_hue_360_wraps_to_red() {
        let color = from_hsl(Hsl {
            hue: 360.0,
            saturation: 1.0,
            lightness: 0.5,
        });
        assert_eq!(color.to_hex(), "#ff0000");
    }

    #[test]
    fn test_negative_hue_falls_back_to_achromatic() {
        // Sector index -1 matches no arm, leaving only the match value.
        let color = from_hsl(Hsl {
            hue: -60.0,
            saturation: 1.0,
            lightness: 0.5,
        });
        assert_eq!(color.to_hex(), "#000000");
    }

    #[test]
    fn test_achromatic_round_trip() {
        for white in [0.0, 0.05, 0.42, 0.5, 0.95, 1.0] {
            let gray = Color::gray(white);
            let read = to_hsl(gray);
            assert!((read.hue).abs() < EPSILON);
            assert!((read.saturation).abs() < EPSILON);
            assert!((read.lightness - white).abs() < EPSILON);

            let rebuilt = from_hsl(read);
            assert!((rebuilt.r - white).abs() < EPSILON);
            assert!((rebuilt.g - white).abs() < EPSILON);
            assert!((rebuilt.b - white).abs() < EPSILON);
        }
    }

    #[test]
    fn test_lightness_is_the_value_channel() {
        // Pure red has HSV value 1.0 even though its HSL lightness is 0.5.
        let read = to_hsl(Color::new(1.0, 0.0, 0.0));
        assert!((read.lightness - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_from_hsl_is_opaque() {
        let color = from_hsl(Hsl {
            hue: 200.0,
            saturation: 0.3,
            lightness: 0.7,
        });
        assert!((color.a - 1.0).abs() < EPSILON);
    }
}
