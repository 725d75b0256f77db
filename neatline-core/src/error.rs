//! Error types for capture and scoring operations.

use thiserror::Error;

/// Result type for core operations.
pub type NeatlineResult<T> = Result<T, NeatlineError>;

/// Errors that can occur while working with a handwriting sample.
#[derive(Debug, Error)]
pub enum NeatlineError {
    /// Submitting a sample with no committed strokes.
    #[error("Nothing written yet: the sample has no committed strokes")]
    EmptySample,
}
