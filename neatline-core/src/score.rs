//! Scoring engine: from analysis features to a star rating.

use serde::{Deserialize, Serialize};

use crate::analyze::{clamp01, StrokeAnalysis};

/// Curvature irregularity is a stronger neatness signal than length
/// variance, so smoothness carries more weight.
const SMOOTHNESS_WEIGHT: f32 = 0.6;
const CONSISTENCY_WEIGHT: f32 = 0.4;

/// Flat penalty for crossing the forbidden rule: 0.05 on the unit
/// scale, a quarter star out of five. Applied at most once per session.
const RULE_CROSS_PENALTY: f32 = 0.05;

const STAR_COUNT: u8 = 5;

/// Blend analysis features into the single neatness scalar in `[0, 1]`.
///
/// Coverage and the pressure proxy are not folded in; they are part of
/// the analysis contract but reserved for future scoring extensions.
#[must_use]
pub fn neatness(analysis: &StrokeAnalysis, rule_crossed: bool) -> f32 {
    let mut value = clamp01(
        analysis.smoothness * SMOOTHNESS_WEIGHT + analysis.consistency * CONSISTENCY_WEIGHT,
    );
    if rule_crossed {
        value = clamp01(value - RULE_CROSS_PENALTY);
    }
    value
}

/// A discretized star rating on a five-star scale with half-star steps.
///
/// Invariant: `full_stars + has_half_star + empty_stars == 5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Raw score in `[0, 5]`.
    pub score: f32,
    /// Whole stars earned.
    pub full_stars: u8,
    /// Whether a half star follows the whole stars.
    pub has_half_star: bool,
    /// Stars left unearned.
    pub empty_stars: u8,
}

impl Rating {
    /// Discretize a neatness value in `[0, 1]` into stars.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_neatness(neatness: f32) -> Self {
        let score = (neatness * f32::from(STAR_COUNT)).clamp(0.0, f32::from(STAR_COUNT));
        let full_stars = score.floor() as u8;
        let has_half_star = score - score.floor() >= 0.5;
        let empty_stars = STAR_COUNT - full_stars - u8::from(has_half_star);
        Self {
            score,
            full_stars,
            has_half_star,
            empty_stars,
        }
    }

    /// Numeric display value: whole stars plus half a star if earned.
    #[must_use]
    pub fn numeric(&self) -> f32 {
        f32::from(self.full_stars) + 0.5 * f32::from(u8::from(self.has_half_star))
    }

    /// Star string, e.g. `★★★½☆`.
    #[must_use]
    pub fn stars(&self) -> String {
        let mut out = "★".repeat(usize::from(self.full_stars));
        if self.has_half_star {
            out.push('½');
        }
        out.push_str(&"☆".repeat(usize::from(self.empty_stars)));
        out
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}/5", self.numeric())
    }
}
