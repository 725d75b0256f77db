//! Points and strokes - the raw material of a handwriting sample.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a committed stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeId(Uuid);

impl StrokeId {
    /// Create a new unique stroke ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single point in surface-local coordinates.
///
/// Coordinates are device-independent: the input source is expected to
/// have divided out pixel density before handing points to the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position (units from the left edge).
    pub x: f32,
    /// Y position (units from the top edge).
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Direction towards another point, in radians from the positive x axis.
    #[must_use]
    pub fn direction_to(&self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// One continuous pen-down-to-pen-up gesture, recorded as an ordered
/// point sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique identifier.
    pub id: StrokeId,
    points: Vec<Point>,
}

impl Stroke {
    /// Create a stroke from recorded points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            id: StrokeId::new(),
            points,
        }
    }

    /// The recorded points, in capture order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke with fewer than two points produces no visible mark and
    /// carries no geometric information.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Total path length: the sum of all segment lengths.
    #[must_use]
    pub fn path_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum()
    }
}
