//! Contrast ratios, accessibility ratings, and best-candidate search.

use std::fmt;

use crate::color::Color;
use crate::level::{ColorLevel, Scheme, apply_level};
use crate::luminance::luminance;

/// Minimum and maximum qualifying ratio for each [`ContrastLevel`], in
/// declaration order. Ranges are half-open: a ratio qualifies for a tier
/// when it reaches the minimum and stays strictly under the maximum, so
/// the three ranges tile the ratio axis from 3.0 up with no gaps.
const RATIO_RANGES: [(f64, f64); 3] = [
    (3.0, 4.5),           // AA Large
    (4.5, 7.0),           // AA
    (7.0, f64::INFINITY), // AAA
];

/// WCAG-style accessibility tiers for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastLevel {
    /// Minimum contrast for large text.
    AaLarge,
    /// Standard minimum contrast for normal text.
    Aa,
    /// Enhanced contrast for the best readability in all contexts.
    Aaa,
}

impl ContrastLevel {
    /// Position of this tier within [`RATIO_RANGES`].
    const fn index(self) -> usize {
        self as usize
    }

    /// Smallest contrast ratio that satisfies this tier.
    #[must_use]
    pub const fn min_ratio(self) -> f64 {
        RATIO_RANGES[self.index()].0
    }

    /// Exclusive upper bound of this tier's qualifying range, used as the
    /// default cap by [`best_contrast`]. AAA has no finite upper bound.
    #[must_use]
    pub const fn max_ratio(self) -> f64 {
        RATIO_RANGES[self.index()].1
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

/// Classification of a contrast ratio against the WCAG thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    /// Below every accessibility threshold.
    Fail,
    /// Acceptable for large text only.
    AaLarge,
    /// Acceptable for normal text.
    Aa,
    /// Enhanced contrast.
    Aaa,
}

impl Rating {
    /// Classify a raw contrast ratio.
    ///
    /// Boundaries are half-open on the lower side: exactly 3.0 rates
    /// AA Large, exactly 4.5 rates AA, and exactly 7.0 rates AAA.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < RATIO_RANGES[0].0 {
            Self::Fail
        } else if ratio < RATIO_RANGES[1].0 {
            Self::AaLarge
        } else if ratio < RATIO_RANGES[2].0 {
            Self::Aa
        } else {
            Self::Aaa
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

/// A computed contrast ratio together with its accessibility rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contrast {
    /// The ratio, always at least 1.0; black on white reaches 21.0.
    pub ratio: f64,
    /// The rating the ratio falls into.
    pub rating: Rating,
}

/// Compute the contrast ratio between two colors.
///
/// The ratio is `(L_lighter + 0.05) / (L_darker + 0.05)` over the two
/// relative luminances, so it is symmetric in its arguments and always
/// at least 1.0.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> Contrast {
    let la = luminance(a);
    let lb = luminance(b);
    let ratio = (la.max(lb) + 0.05) / (la.min(lb) + 0.05);

    Contrast {
        ratio,
        rating: Rating::from_ratio(ratio),
    }
}

/// Find the candidate color with the highest qualifying contrast against
/// a background.
///
/// The candidate set is fixed: white, black, then the background itself
/// at each of the eleven lightness tiers, in that order. A candidate
/// qualifies when its ratio reaches the tier's minimum and stays under
/// the tier's default maximum, or at or below `max_ratio` when an
/// explicit cap is supplied (the caller-facing cap is inclusive). The
/// qualifying candidate with the strictly highest ratio wins; ties keep
/// the earliest candidate.
///
/// Returns `None` when no candidate qualifies, which keeps "white won"
/// distinguishable from "nothing fit the range". The convenience
/// accessors on [`Color`] paper over that distinction with a white
/// fallback.
#[must_use]
pub fn best_contrast(
    background: Color,
    level: ContrastLevel,
    max_ratio: Option<f64>,
) -> Option<Color> {
    let mut candidates = vec![Color::WHITE, Color::BLACK];
    candidates.extend(
        ColorLevel::ALL
            .iter()
            .map(|tier| apply_level(background, *tier, Scheme::Light)),
    );

    let mut best = None;
    let mut best_ratio = 0.0_f64;

    for candidate in candidates {
        let ratio = contrast_ratio(background, candidate).ratio;
        let within_cap = max_ratio.map_or(ratio < level.max_ratio(), |cap| ratio <= cap);
        if ratio >= level.min_ratio() && within_cap && ratio > best_ratio {
            best_ratio = ratio;
            best = Some(candidate);
        }
    }

    best
}

impl Color {
    /// The candidate color with the highest contrast against this
    /// background, with no upper limit on the ratio. Falls back to white
    /// when nothing qualifies.
    #[must_use]
    pub fn highest_rated_contrast(self) -> Self {
        best_contrast(self, ContrastLevel::Aaa, Some(f64::INFINITY)).unwrap_or(Self::WHITE)
    }

    /// A color satisfying the AAA tier against this background, or white
    /// when nothing qualifies.
    #[must_use]
    pub fn aaa_contrast(self) -> Self {
        best_contrast(self, ContrastLevel::Aaa, None).unwrap_or(Self::WHITE)
    }

    /// A color satisfying the AA tier against this background, or white
    /// when nothing qualifies.
    #[must_use]
    pub fn aa_contrast(self) -> Self {
        best_contrast(self, ContrastLevel::Aa, None).unwrap_or(Self::WHITE)
    }

    /// A color satisfying the AA Large tier against this background, or
    /// white when nothing qualifies.
    #[must_use]
    pub fn aa_large_contrast(self) -> Self {
        best_contrast(self, ContrastLevel::AaLarge, None).unwrap_or(Self::WHITE)
    }
}

/// Human-readable contrast summary between a background and a foreground.
///
/// The first line carries the ratio and its rating; the second names the
/// enforced tier, or "None" when no tier was being enforced.
#[must_use]
pub fn contrast_report(
    background: Color,
    foreground: Color,
    enforced: Option<ContrastLevel>,
) -> String {
    let contrast = contrast_ratio(background, foreground);
    let enforced = enforced.map_or_else(|| "None".to_owned(), |level| level.to_string());
    format!("{:.2}: {}\n(Enforced: {})", contrast.ratio, contrast.rating, enforced)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_black_on_white_is_21_and_aaa() {
        let contrast = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((contrast.ratio - 21.0).abs() < EPSILON);
        assert_eq!(contrast.rating, Rating::Aaa);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let a = Color::new(0.2, 0.4, 0.8);
        let b = Color::new(0.9, 0.9, 0.1);
        let forward = contrast_ratio(a, b).ratio;
        let backward = contrast_ratio(b, a).ratio;
        assert!((forward - backward).abs() < EPSILON);
    }

    #[test]
    fn test_same_color_has_unit_ratio() {
        let color = Color::new(0.3, 0.5, 0.7);
        assert!((contrast_ratio(color, color).ratio - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(Rating::from_ratio(2.99), Rating::Fail);
        assert_eq!(Rating::from_ratio(3.0), Rating::AaLarge);
        assert_eq!(Rating::from_ratio(4.49), Rating::AaLarge);
        assert_eq!(Rating::from_ratio(4.5), Rating::Aa);
        assert_eq!(Rating::from_ratio(6.99), Rating::Aa);
        assert_eq!(Rating::from_ratio(7.0), Rating::Aaa);
        assert_eq!(Rating::from_ratio(21.0), Rating::Aaa);
    }

    #[test]
    fn test_level_ranges_tile_without_gaps() {
        assert!(
            (ContrastLevel::AaLarge.max_ratio() - ContrastLevel::Aa.min_ratio()).abs() < EPSILON
        );
        assert!((ContrastLevel::Aa.max_ratio() - ContrastLevel::Aaa.min_ratio()).abs() < EPSILON);
        assert!(ContrastLevel::Aaa.max_ratio().is_infinite());
    }

    #[test]
    fn test_black_background_selects_white_at_21() {
        let best = best_contrast(Color::BLACK, ContrastLevel::Aaa, None)
            .expect("white must qualify against black");
        assert_eq!(best.to_hex(), "#ffffff");
        assert!((contrast_ratio(Color::BLACK, best).ratio - 21.0).abs() < EPSILON);
    }

    #[test]
    fn test_selected_candidate_stays_in_the_qualifying_range() {
        let backgrounds = [
            Color::BLACK,
            Color::WHITE,
            Color::gray(0.5),
            Color::new(0.2, 0.4, 0.8),
            Color::new(0.9, 0.3, 0.1),
        ];
        for background in backgrounds {
            for level in [ContrastLevel::AaLarge, ContrastLevel::Aa, ContrastLevel::Aaa] {
                if let Some(candidate) = best_contrast(background, level, None) {
                    let ratio = contrast_ratio(background, candidate).ratio;
                    assert!(ratio >= level.min_ratio(), "{level} ratio {ratio}");
                    assert!(ratio < level.max_ratio(), "{level} ratio {ratio}");
                }
            }
        }
    }

    #[test]
    fn test_unsatisfiable_cap_yields_none() {
        // Every cap below the tier minimum leaves nothing to qualify.
        assert_eq!(best_contrast(Color::BLACK, ContrastLevel::AaLarge, Some(1.0)), None);
        assert_eq!(best_contrast(Color::WHITE, ContrastLevel::Aaa, Some(2.0)), None);
    }

    #[test]
    fn test_mid_gray_aaa_falls_back_to_white() {
        // No candidate reaches 7.0 against mid-gray: black tops out
        // around 5.3, so the search reports the absence and the
        // convenience accessor papers over it.
        let background = Color::gray(0.5);
        assert_eq!(best_contrast(background, ContrastLevel::Aaa, None), None);
        assert_eq!(background.aaa_contrast().to_hex(), "#ffffff");
    }

    #[test]
    fn test_mid_gray_aa_prefers_black() {
        // Black yields about 5.3 against mid-gray, inside [4.5, 7.0) and
        // higher than any tier candidate in that range.
        let background = Color::gray(0.5);
        let best = best_contrast(background, ContrastLevel::Aa, None)
            .expect("black must qualify against mid-gray");
        assert_eq!(best.to_hex(), "#000000");
    }

    #[test]
    fn test_highest_rated_contrast_has_no_cap() {
        assert_eq!(Color::BLACK.highest_rated_contrast().to_hex(), "#ffffff");
        assert_eq!(Color::WHITE.highest_rated_contrast().to_hex(), "#000000");
    }

    #[test]
    fn test_white_background_aa_picks_a_mid_shade() {
        // Against white, black (21.0) overshoots the AA range, so the
        // search settles on the tier ladder instead.
        let best = Color::WHITE.aa_contrast();
        let ratio = contrast_ratio(Color::WHITE, best).ratio;
        assert!(ratio >= 4.5 && ratio < 7.0, "ratio {ratio}");
        assert_eq!(best.to_hex(), "#666666");
    }

    #[test]
    fn test_aa_large_convenience_stays_in_range() {
        let background = Color::gray(0.5);
        let best = background.aa_large_contrast();
        let ratio = contrast_ratio(background, best).ratio;
        assert!(ratio >= 3.0 && ratio < 4.5, "ratio {ratio}");
    }

    #[test]
    fn test_contrast_report_format() {
        let report = contrast_report(Color::BLACK, Color::WHITE, None);
        assert_eq!(report, "21.00: AAA\n(Enforced: None)");

        let enforced = contrast_report(Color::BLACK, Color::WHITE, Some(ContrastLevel::Aa));
        assert_eq!(enforced, "21.00: AAA\n(Enforced: AA)");
    }

    #[test]
    fn test_level_names() {
        assert_eq!(ContrastLevel::AaLarge.to_string(), "AA Large");
        assert_eq!(ContrastLevel::Aa.to_string(), "AA");
        assert_eq!(ContrastLevel::Aaa.to_string(), "AAA");
        assert_eq!(Rating::Fail.to_string(), "Fail");
    }
}
