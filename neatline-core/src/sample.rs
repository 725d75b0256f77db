//! The handwriting sample: an ordered set of committed strokes.

use serde::{Deserialize, Serialize};

use crate::{Point, Stroke, StrokeId};

/// One complete handwriting sample.
///
/// Strokes are ordered by creation time. The capture controller is the
/// only writer; the analyzer and replay engine only ever read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sample {
    strokes: Vec<Stroke>,
}

impl Sample {
    /// Create an empty sample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a stroke to the sample.
    ///
    /// Degenerate strokes (fewer than two points) are discarded and
    /// `None` is returned; the sample is left untouched.
    pub fn push(&mut self, stroke: Stroke) -> Option<StrokeId> {
        if stroke.is_degenerate() {
            tracing::debug!("discarding degenerate stroke with {} point(s)", stroke.len());
            return None;
        }
        let id = stroke.id;
        self.strokes.push(stroke);
        Some(id)
    }

    /// All committed strokes, in capture order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of committed strokes.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Whether no strokes have been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total number of points across all strokes.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// Flatten all strokes into one ordered point sequence.
    ///
    /// Stroke boundaries are not preserved; animated replay deliberately
    /// draws through pen-lifts.
    #[must_use]
    pub fn flatten(&self) -> Vec<Point> {
        self.strokes
            .iter()
            .flat_map(|stroke| stroke.points().iter().copied())
            .collect()
    }

    /// Remove every committed stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}
