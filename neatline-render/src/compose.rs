//! Frame composition: fixed-order draw passes over a surface.

use neatline_core::{CaptureSession, Point, RuleLayout, Sample};

use crate::surface::{DrawSurface, Ink, STROKE_WIDTH};
use crate::RenderResult;

/// Extent of the drawing surface in surface-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface width.
    pub width: f32,
    /// Surface height.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

fn draw_background<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: RuleLayout,
    viewport: Viewport,
) -> RenderResult<()> {
    for (y, kind) in layout.rules(viewport.height) {
        surface.rule_line(y, kind)?;
    }
    Ok(())
}

fn draw_strokes<S: DrawSurface + ?Sized>(surface: &mut S, sample: &Sample) -> RenderResult<()> {
    for stroke in sample.strokes() {
        if stroke.is_degenerate() {
            continue;
        }
        surface.polyline(stroke.points(), Ink::Regular, STROKE_WIDTH)?;
    }
    Ok(())
}

/// Render the committed sample in one synchronous pass:
/// clear → background rules → strokes. This is the instant replay.
///
/// # Errors
///
/// Propagates the first refused draw command.
pub fn render_sample<S: DrawSurface + ?Sized>(
    surface: &mut S,
    sample: &Sample,
    layout: RuleLayout,
    viewport: Viewport,
) -> RenderResult<()> {
    surface.clear()?;
    draw_background(surface, layout, viewport)?;
    draw_strokes(surface, sample)
}

/// Render a live capture frame: the committed sample plus the
/// in-progress stroke, highlighted once the rule-crossed latch is set.
///
/// Called on every `extend`; a full redraw rather than an incremental
/// one, since the surface makes no persistence guarantee.
///
/// # Errors
///
/// Propagates the first refused draw command.
pub fn render_frame<S: DrawSurface + ?Sized>(
    surface: &mut S,
    session: &CaptureSession,
    viewport: Viewport,
) -> RenderResult<()> {
    render_sample(surface, session.sample(), session.rule_layout(), viewport)?;

    let current = session.in_progress();
    if current.len() >= 2 {
        let ink = if session.rule_crossed() {
            Ink::Highlight
        } else {
            Ink::Regular
        };
        surface.polyline(current, ink, STROKE_WIDTH)?;
    }
    Ok(())
}

/// Render a replay prefix: clear → background rules → one polyline
/// through the flattened points seen so far.
///
/// # Errors
///
/// Propagates the first refused draw command.
pub(crate) fn render_prefix<S: DrawSurface + ?Sized>(
    surface: &mut S,
    prefix: &[Point],
    layout: RuleLayout,
    viewport: Viewport,
) -> RenderResult<()> {
    surface.clear()?;
    draw_background(surface, layout, viewport)?;
    if prefix.len() >= 2 {
        surface.polyline(prefix, Ink::Regular, STROKE_WIDTH)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, TraceSurface};
    use neatline_core::Stroke;

    fn two_stroke_sample() -> Sample {
        let mut sample = Sample::new();
        sample.push(Stroke::new(vec![Point::new(0.0, 10.0), Point::new(10.0, 10.0)]));
        sample.push(Stroke::new(vec![Point::new(0.0, 20.0), Point::new(10.0, 20.0)]));
        sample
    }

    #[test]
    fn test_fixed_draw_order() {
        let mut surface = TraceSurface::new();
        let layout = RuleLayout::default();
        render_sample(&mut surface, &two_stroke_sample(), layout, Viewport::default())
            .expect("render");

        let commands = surface.commands();
        assert_eq!(commands[0], DrawCommand::Clear);

        let rule_count = layout.rules(Viewport::default().height).count();
        for command in &commands[1..=rule_count] {
            assert!(matches!(command, DrawCommand::Rule { .. }));
        }
        for command in &commands[1 + rule_count..] {
            assert!(matches!(command, DrawCommand::Polyline { .. }));
        }
        assert_eq!(commands.len(), 1 + rule_count + 2);
    }

    #[test]
    fn test_in_progress_stroke_highlighted_after_latch() {
        let mut session = CaptureSession::default();
        session.begin(Point::new(0.0, 100.0));
        session.extend(Point::new(5.0, 174.0)); // latches
        session.extend(Point::new(10.0, 100.0));

        let mut surface = TraceSurface::new();
        render_frame(&mut surface, &session, Viewport::default()).expect("render");

        let last = surface.commands().last().expect("commands");
        assert!(matches!(
            last,
            DrawCommand::Polyline {
                ink: Ink::Highlight,
                ..
            }
        ));
    }

    #[test]
    fn test_in_progress_stroke_regular_before_latch() {
        let mut session = CaptureSession::default();
        session.begin(Point::new(0.0, 100.0));
        session.extend(Point::new(10.0, 100.0));

        let mut surface = TraceSurface::new();
        render_frame(&mut surface, &session, Viewport::default()).expect("render");

        let last = surface.commands().last().expect("commands");
        assert!(matches!(
            last,
            DrawCommand::Polyline {
                ink: Ink::Regular,
                ..
            }
        ));
    }

    #[test]
    fn test_single_point_in_progress_not_drawn() {
        let mut session = CaptureSession::default();
        session.begin(Point::new(0.0, 100.0));

        let mut surface = TraceSurface::new();
        render_frame(&mut surface, &session, Viewport::default()).expect("render");

        assert!(!surface
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Polyline { .. })));
    }
}
