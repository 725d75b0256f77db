//! Capture controller: turns raw pointer events into committed strokes.

use serde::{Deserialize, Serialize};

use crate::{
    analyze::AnalyzerConfig, score, NeatlineError, NeatlineResult, Point, Rating, RuleLayout,
    Sample, Stroke, StrokeAnalysis, StrokeId,
};

/// Whether the session is between or inside a pen-down gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureState {
    /// No gesture in progress.
    Idle,
    /// Pen is down; points are being appended to the current stroke.
    Capturing,
}

/// One handwriting capture session.
///
/// Owns the sample, the in-progress point buffer, and the latched
/// rule-crossed flag. The session is the only writer of the sample;
/// analysis and replay borrow it read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSession {
    sample: Sample,
    current: Vec<Point>,
    state: CaptureState,
    rule_crossed: bool,
    rules: RuleLayout,
}

impl CaptureSession {
    /// Create an idle session over the given rule layout.
    #[must_use]
    pub fn new(rules: RuleLayout) -> Self {
        Self {
            sample: Sample::new(),
            current: Vec::new(),
            state: CaptureState::Idle,
            rule_crossed: false,
            rules,
        }
    }

    /// Start a new stroke at `point`.
    ///
    /// A no-op while already capturing, and a no-op for non-finite
    /// points (the gesture simply does not start).
    pub fn begin(&mut self, point: Point) {
        if self.state == CaptureState::Capturing {
            tracing::debug!("begin while capturing ignored");
            return;
        }
        if !point.is_finite() {
            tracing::warn!("dropping non-finite start point ({}, {})", point.x, point.y);
            return;
        }
        self.current.clear();
        self.current.push(point);
        self.state = CaptureState::Capturing;
    }

    /// Append `point` to the in-progress stroke.
    ///
    /// Returns whether the point landed on a rule so the host can pick
    /// the highlight ink. The first on-rule point of the session latches
    /// the rule-crossed flag until [`reset`](Self::reset).
    ///
    /// A no-op while idle: pointer-leave and pointer-cancel events may
    /// arrive without a matching `begin`. Non-finite points are dropped.
    pub fn extend(&mut self, point: Point) -> bool {
        if self.state != CaptureState::Capturing {
            return false;
        }
        if !point.is_finite() {
            tracing::warn!("dropping non-finite point ({}, {})", point.x, point.y);
            return false;
        }
        self.current.push(point);

        let on_rule = self.rules.is_on_rule(point.y);
        if on_rule && !self.rule_crossed {
            self.rule_crossed = true;
            tracing::debug!("forbidden rule crossed at y={}, penalty latched", point.y);
        }
        on_rule
    }

    /// Finish the in-progress stroke.
    ///
    /// Commits it to the sample when it has at least two points,
    /// discards it otherwise. Returns the committed stroke's ID.
    /// A no-op while idle.
    pub fn end(&mut self) -> Option<StrokeId> {
        if self.state != CaptureState::Capturing {
            return None;
        }
        self.state = CaptureState::Idle;
        let points = std::mem::take(&mut self.current);
        let id = self.sample.push(Stroke::new(points));
        if let Some(id) = id {
            tracing::debug!("committed stroke {id} ({} total)", self.sample.stroke_count());
        }
        id
    }

    /// Clear the sample, the in-progress stroke, and the rule-crossed
    /// latch, returning the session to a fresh idle state.
    pub fn reset(&mut self) {
        self.sample.clear();
        self.current.clear();
        self.state = CaptureState::Idle;
        self.rule_crossed = false;
        tracing::debug!("session reset");
    }

    /// Analyze and score the committed sample.
    ///
    /// Does not mutate any session state.
    ///
    /// # Errors
    ///
    /// Returns [`NeatlineError::EmptySample`] when nothing has been
    /// committed yet.
    pub fn rate(&self, config: &AnalyzerConfig) -> NeatlineResult<(StrokeAnalysis, Rating)> {
        if self.sample.is_empty() {
            return Err(NeatlineError::EmptySample);
        }
        let analysis = StrokeAnalysis::of(&self.sample, config);
        let rating = Rating::from_neatness(score::neatness(&analysis, self.rule_crossed));
        Ok((analysis, rating))
    }

    /// The committed sample.
    #[must_use]
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Points of the in-progress stroke, if any.
    #[must_use]
    pub fn in_progress(&self) -> &[Point] {
        &self.current
    }

    /// Current state of the capture state machine.
    #[must_use]
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.state == CaptureState::Capturing
    }

    /// Whether the forbidden rule has been crossed this session.
    #[must_use]
    pub fn rule_crossed(&self) -> bool {
        self.rule_crossed
    }

    /// The rule layout this session checks against.
    #[must_use]
    pub fn rule_layout(&self) -> RuleLayout {
        self.rules
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new(RuleLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_is_discarded() {
        let mut session = CaptureSession::default();
        session.begin(Point::new(10.0, 10.0));
        assert!(session.end().is_none());
        assert!(session.sample().is_empty());
        assert_eq!(session.state(), CaptureState::Idle);
    }

    #[test]
    fn test_commit_after_two_points() {
        let mut session = CaptureSession::default();
        session.begin(Point::new(10.0, 10.0));
        session.extend(Point::new(20.0, 10.0));
        let id = session.end();
        assert!(id.is_some());
        assert_eq!(session.sample().stroke_count(), 1);
        assert!(session.in_progress().is_empty());
    }

    #[test]
    fn test_extend_and_end_while_idle_are_noops() {
        let mut session = CaptureSession::default();
        assert!(!session.extend(Point::new(5.0, 5.0)));
        assert!(session.end().is_none());
        assert!(session.sample().is_empty());
    }

    #[test]
    fn test_non_finite_points_dropped() {
        let mut session = CaptureSession::default();
        session.begin(Point::new(f32::NAN, 0.0));
        assert_eq!(session.state(), CaptureState::Idle);

        session.begin(Point::new(0.0, 10.0));
        assert!(!session.extend(Point::new(f32::INFINITY, 10.0)));
        session.extend(Point::new(5.0, 10.0));
        session.end();
        assert_eq!(session.sample().strokes()[0].len(), 2);
    }

    #[test]
    fn test_rule_crossed_latches_once() {
        let mut session = CaptureSession::default();
        session.begin(Point::new(0.0, 50.0));
        assert!(session.extend(Point::new(1.0, 174.0)));
        assert!(session.rule_crossed());
        // Crossing again changes nothing.
        session.extend(Point::new(2.0, 176.0));
        session.end();
        assert!(session.rule_crossed());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = CaptureSession::default();
        session.begin(Point::new(0.0, 0.0));
        session.extend(Point::new(1.0, 0.0));
        session.end();
        assert!(session.rule_crossed());

        session.reset();
        assert!(session.sample().is_empty());
        assert!(!session.rule_crossed());
        assert_eq!(session.state(), CaptureState::Idle);
    }

    #[test]
    fn test_rate_empty_sample_is_error() {
        let session = CaptureSession::default();
        let err = session.rate(&AnalyzerConfig::default());
        assert!(matches!(err, Err(NeatlineError::EmptySample)));
        assert!(session.sample().is_empty());
    }
}
