//! Ruled-paper background layout and the forbidden-rule predicate.

use serde::{Deserialize, Serialize};

/// Kind of a background rule line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Ordinary writing guide (drawn grey).
    Guide,
    /// The "do not cross" rule (drawn red).
    Forbidden,
}

/// Repeating paint order of the background rules, top to bottom.
pub const RULE_PATTERN: [RuleKind; 3] = [RuleKind::Guide, RuleKind::Forbidden, RuleKind::Guide];

/// Geometry of the ruled-paper background.
///
/// `period` is the vertical distance after which the rule pattern
/// repeats; `thickness` is the band around each period boundary that
/// counts as "on the rule" for the crossing predicate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleLayout {
    /// Vertical period of the forbidden rule, in surface units.
    pub period: f32,
    /// Rule thickness, in surface units.
    pub thickness: f32,
}

impl Default for RuleLayout {
    fn default() -> Self {
        Self {
            period: 174.0,
            thickness: 2.0,
        }
    }
}

impl RuleLayout {
    /// Vertical spacing between adjacent background rules.
    ///
    /// Three rules (grey, red, grey) share one period.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn spacing(&self) -> f32 {
        self.period / RULE_PATTERN.len() as f32
    }

    /// Whether a y coordinate sits on a rule boundary.
    ///
    /// The check is purely periodic in y; which color the background
    /// renderer paints at that height is not consulted.
    #[must_use]
    pub fn is_on_rule(&self, y: f32) -> bool {
        let offset = y.rem_euclid(self.period);
        offset <= self.thickness
    }

    /// Enumerate the background rules covering a surface of the given
    /// height, as `(y, kind)` pairs from the top down.
    pub fn rules(&self, height: f32) -> impl Iterator<Item = (f32, RuleKind)> + '_ {
        let spacing = self.spacing();
        (0..)
            .map(move |index| {
                #[allow(clippy::cast_precision_loss)]
                let y = index as f32 * spacing;
                (y, RULE_PATTERN[index % RULE_PATTERN.len()])
            })
            .take_while(move |(y, _)| *y < height)
    }
}
