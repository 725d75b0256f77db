//! Geometry analyzer: scalar features of a handwriting sample.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{Point, Sample};

/// Reference extent used to normalize ink coverage.
///
/// This mirrors the surface the sample was written on; a resized
/// surface that differs from the reference will skew coverage, which is
/// accepted rather than silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Reference surface width, in surface units.
    pub ref_width: f32,
    /// Reference surface height, in surface units.
    pub ref_height: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ref_width: 800.0,
            ref_height: 400.0,
        }
    }
}

/// Scalar features derived from a sample. Every field is in `[0, 1]`.
///
/// Recomputed on demand; never cached across sample mutations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeAnalysis {
    /// Fraction of the reference area covered by the ink bounding box.
    pub coverage: f32,
    /// Uniformity of per-stroke path lengths.
    pub consistency: f32,
    /// Inverse of the average directional change along strokes.
    pub smoothness: f32,
    /// Coarse stand-in for pressure: stroke count over ten, capped.
    pub pressure_proxy: f32,
}

/// Axis-aligned bounding box accumulated over segment endpoints.
struct Bounds {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl Bounds {
    fn new() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// Width floored at one unit, so collinear or single-point ink
    /// cannot zero the coverage denominator.
    fn width(&self) -> f32 {
        (self.max_x - self.min_x).max(1.0)
    }

    fn height(&self) -> f32 {
        (self.max_y - self.min_y).max(1.0)
    }
}

impl StrokeAnalysis {
    /// Analyze a sample against the reference extent.
    ///
    /// Idempotent and read-only; all division-by-zero paths degrade to
    /// defined fallback values instead of failing.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(sample: &Sample, config: &AnalyzerConfig) -> Self {
        let mut stroke_lengths = Vec::with_capacity(sample.stroke_count());
        let mut angles = Vec::new();
        let mut bounds = Bounds::new();
        let mut total_length = 0.0f32;

        for stroke in sample.strokes() {
            let points = stroke.points();
            let mut length = 0.0f32;

            for pair in points.windows(2) {
                length += pair[0].distance_to(pair[1]);
                bounds.include(pair[0]);
                bounds.include(pair[1]);
            }

            for triple in points.windows(3) {
                let incoming = triple[0].direction_to(triple[1]);
                let outgoing = triple[1].direction_to(triple[2]);
                let mut turn = (outgoing - incoming).abs();
                if turn > PI {
                    turn = 2.0 * PI - turn;
                }
                angles.push(turn);
            }

            total_length += length;
            stroke_lengths.push(length);
        }

        let coverage = (bounds.width() * bounds.height())
            / (config.ref_width * config.ref_height);

        let consistency = length_consistency(&stroke_lengths, total_length);

        let mean_angle = if angles.is_empty() {
            0.0
        } else {
            angles.iter().sum::<f32>() / angles.len() as f32
        };
        let smoothness = 1.0 - mean_angle / (PI / 2.0);

        let pressure_proxy = sample.stroke_count() as f32 / 10.0;

        Self {
            coverage: clamp01(coverage),
            consistency: clamp01(consistency),
            smoothness: clamp01(smoothness),
            pressure_proxy: clamp01(pressure_proxy),
        }
    }
}

/// One minus the stroke-length standard deviation over twice the mean.
///
/// A zero-mean (or empty) sample is defined as fully inconsistent to
/// avoid the division; a single stroke is fully consistent since its
/// population variance is zero.
#[allow(clippy::cast_precision_loss)]
fn length_consistency(stroke_lengths: &[f32], total_length: f32) -> f32 {
    if stroke_lengths.is_empty() {
        return 0.0;
    }
    let count = stroke_lengths.len() as f32;
    let mean = total_length / count;
    if mean <= f32::EPSILON {
        return 0.0;
    }
    let variance = stroke_lengths
        .iter()
        .map(|length| (length - mean) * (length - mean))
        .sum::<f32>()
        / count;
    1.0 - variance.sqrt() / (2.0 * mean)
}

/// Clamp a value into `[0, 1]`.
pub(crate) fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
