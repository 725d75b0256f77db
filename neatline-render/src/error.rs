//! Error types for rendering and replay.

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering or replaying a sample.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Replay speed must be a positive finite multiplier.
    #[error("Invalid replay speed: {0}")]
    InvalidSpeed(f32),

    /// A draw command was refused by the host surface.
    #[error("Draw command failed: {0}")]
    Surface(String),
}
