//! The render-surface contract and the tracing fallback surface.

use neatline_core::{Point, RuleKind};

use crate::RenderResult;

/// Line width for handwriting ink.
pub const STROKE_WIDTH: f32 = 2.0;

/// Line width for background rules.
pub const RULE_WIDTH: f32 = 1.0;

/// Ink colors the compositor asks the surface to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Regular handwriting ink.
    Regular,
    /// Highlight ink used once the forbidden rule has been crossed.
    Highlight,
    /// Ordinary guide rule.
    GuideRule,
    /// The forbidden rule.
    ForbiddenRule,
}

impl Ink {
    /// CSS color of this ink.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Ink::Regular => "#000000",
            Ink::Highlight => "#c62828",
            Ink::GuideRule => "grey",
            Ink::ForbiddenRule => "red",
        }
    }

    /// Ink for a background rule of the given kind.
    #[must_use]
    pub fn for_rule(kind: RuleKind) -> Self {
        match kind {
            RuleKind::Guide => Ink::GuideRule,
            RuleKind::Forbidden => Ink::ForbiddenRule,
        }
    }
}

/// A 2D surface the compositor issues draw commands to.
///
/// The compositor never reads surface state back; implementations only
/// need to honor the commands in the order they arrive.
pub trait DrawSurface {
    /// Clear the whole surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the command.
    fn clear(&mut self) -> RenderResult<()>;

    /// Draw one horizontal background rule across the surface at `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the command.
    fn rule_line(&mut self, y: f32, kind: RuleKind) -> RenderResult<()>;

    /// Draw an open polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the command.
    fn polyline(&mut self, points: &[Point], ink: Ink, width: f32) -> RenderResult<()>;
}

/// A recorded draw command, for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// The surface was cleared.
    Clear,
    /// A background rule was drawn.
    Rule {
        /// Vertical position.
        y: f32,
        /// Rule kind.
        kind: RuleKind,
    },
    /// A polyline was drawn.
    Polyline {
        /// Number of points in the path.
        len: usize,
        /// Ink it was drawn with.
        ink: Ink,
    },
}

/// Surface that logs draw commands instead of rasterizing them.
///
/// Serves as the no-GPU fallback backend and as the test double for
/// composition and replay.
#[derive(Debug, Default)]
pub struct TraceSurface {
    commands: Vec<DrawCommand>,
}

impl TraceSurface {
    /// Create an empty trace surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands received so far.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Forget all recorded commands.
    pub fn clear_log(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for TraceSurface {
    fn clear(&mut self) -> RenderResult<()> {
        tracing::trace!("clear");
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn rule_line(&mut self, y: f32, kind: RuleKind) -> RenderResult<()> {
        tracing::trace!(
            "rule {kind:?} at y={y} color={} width={RULE_WIDTH}",
            Ink::for_rule(kind).css()
        );
        self.commands.push(DrawCommand::Rule { y, kind });
        Ok(())
    }

    fn polyline(&mut self, points: &[Point], ink: Ink, width: f32) -> RenderResult<()> {
        tracing::trace!(
            "polyline of {} points, ink={} width={width}",
            points.len(),
            ink.css()
        );
        self.commands.push(DrawCommand::Polyline {
            len: points.len(),
            ink,
        });
        Ok(())
    }
}
