//! Replay scheduling: instant passes are in `compose`; this module owns
//! the looping, cancellable animated mode.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use neatline_core::{Point, RuleLayout, Sample};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::compose::{render_prefix, Viewport};
use crate::surface::DrawSurface;
use crate::{RenderError, RenderResult};

/// Tick budget for one playback pass at 1× speed: a full pass takes
/// roughly one second under the ~120 ticks-per-second scheduler.
pub const BASE_TICKS: f32 = 120.0;

/// Target interval between animation ticks.
const TICK_INTERVAL: Duration = Duration::from_micros(1_000_000 / 120);

/// Pure tick plan for one animated playback pass.
///
/// Flattens the sample into a single point sequence (pen-lifts are not
/// visually distinguished) and advances a cursor by a fixed number of
/// points per tick, looping back to the start after the final prefix.
#[derive(Debug, Clone)]
pub struct ReplayPlan {
    points: Vec<Point>,
    points_per_tick: usize,
    cursor: usize,
}

impl ReplayPlan {
    /// Build a plan over the sample at the given speed multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidSpeed`] unless `speed` is a
    /// positive finite number.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(sample: &Sample, speed: f32) -> RenderResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(RenderError::InvalidSpeed(speed));
        }
        let points = sample.flatten();
        let points_per_tick =
            ((points.len() as f32 / (BASE_TICKS * speed)).ceil() as usize).max(1);
        Ok(Self {
            points,
            points_per_tick,
            cursor: 0,
        })
    }

    /// Points advanced per tick.
    #[must_use]
    pub fn points_per_tick(&self) -> usize {
        self.points_per_tick
    }

    /// Total points in the flattened sequence.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.points.len()
    }

    /// Whether there is nothing to animate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ticks needed for one full pass over the sequence.
    #[must_use]
    pub fn ticks_per_pass(&self) -> usize {
        self.points.len().div_ceil(self.points_per_tick)
    }

    /// Advance one tick and return the prefix to render.
    ///
    /// After the tick that reaches the end, the cursor loops back so
    /// the next tick restarts from the beginning.
    pub fn tick(&mut self) -> &[Point] {
        if self.points.is_empty() {
            return &[];
        }
        let end = (self.cursor + self.points_per_tick).min(self.points.len());
        self.cursor = if end == self.points.len() { 0 } else { end };
        &self.points[..end]
    }
}

/// Cancellable, restartable animated replay.
///
/// `Stopped → Running → Stopped`; starting while running and stopping
/// while stopped are no-ops. The tick task checks a shared stop flag
/// before every render, so no tick renders after `stop` returns, even
/// one that was already scheduled.
#[derive(Debug, Default)]
pub struct Replay {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Replay {
    /// Create a stopped replay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a playback task is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start looping playback of `sample` on a shared surface.
    ///
    /// The speed multiplier is captured now; changing it later only
    /// affects the next start. A no-op when already running or when the
    /// sample has no points.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidSpeed`] for a non-positive or
    /// non-finite speed; playback stays stopped.
    pub fn start<S>(
        &mut self,
        sample: &Sample,
        layout: RuleLayout,
        viewport: Viewport,
        speed: f32,
        surface: Arc<Mutex<S>>,
    ) -> RenderResult<()>
    where
        S: DrawSurface + Send + 'static,
    {
        if self.is_running() {
            tracing::debug!("replay already running, start ignored");
            return Ok(());
        }
        let mut plan = ReplayPlan::new(sample, speed)?;
        if plan.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            "starting replay: {} points, {} per tick",
            plan.total_points(),
            plan.points_per_tick()
        );

        let running = Arc::clone(&self.running);
        running.store(true, Ordering::SeqCst);

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK_INTERVAL);
            loop {
                ticker.tick().await;
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                let prefix = plan.tick();
                let mut surface = surface.lock().await;
                if let Err(e) = render_prefix(&mut *surface, prefix, layout, viewport) {
                    tracing::warn!("replay tick failed, stopping: {e}");
                    running.store(false, Ordering::SeqCst);
                    break;
                }
            }
            tracing::debug!("replay task exited");
        }));
        Ok(())
    }

    /// Stop playback. A no-op when already stopped.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("replay stopped");
        }
    }
}

impl Drop for Replay {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neatline_core::Stroke;

    fn sample_with_points(total: usize) -> Sample {
        let mut sample = Sample::new();
        let points = (0..total)
            .map(|i| Point::new(i as f32, 100.0))
            .collect::<Vec<_>>();
        sample.push(Stroke::new(points));
        sample
    }

    #[test]
    fn test_plan_budget_at_default_speed() {
        let mut plan = ReplayPlan::new(&sample_with_points(1200), 1.0).expect("plan");
        assert_eq!(plan.points_per_tick(), 10);
        assert_eq!(plan.ticks_per_pass(), 120);

        // Exactly 120 ticks complete the pass, then playback loops.
        for _ in 0..119 {
            plan.tick();
        }
        assert_eq!(plan.tick().len(), 1200);
        assert_eq!(plan.tick().len(), 10);
    }

    #[test]
    fn test_plan_scales_with_speed() {
        let plan = ReplayPlan::new(&sample_with_points(1200), 2.0).expect("plan");
        assert_eq!(plan.points_per_tick(), 5);
    }

    #[test]
    fn test_plan_floors_at_one_point_per_tick() {
        let plan = ReplayPlan::new(&sample_with_points(30), 1.0).expect("plan");
        assert_eq!(plan.points_per_tick(), 1);
        assert_eq!(plan.ticks_per_pass(), 30);
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let sample = sample_with_points(10);
        assert!(matches!(
            ReplayPlan::new(&sample, 0.0),
            Err(RenderError::InvalidSpeed(_))
        ));
        assert!(matches!(
            ReplayPlan::new(&sample, -1.0),
            Err(RenderError::InvalidSpeed(_))
        ));
        assert!(matches!(
            ReplayPlan::new(&sample, f32::NAN),
            Err(RenderError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_prefix_grows_monotonically_within_a_pass() {
        let mut plan = ReplayPlan::new(&sample_with_points(100), 1.0).expect("plan");
        let mut previous = 0;
        for _ in 0..plan.ticks_per_pass() {
            let len = plan.tick().len();
            assert!(len > previous);
            previous = len;
        }
    }
}
