//! # Neatline Core
//!
//! Stroke capture, geometric analysis, and neatness scoring for
//! freehand handwriting samples.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               neatline-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Stroke Model    │  Capture Controller      │
//! │  - Points        │  - Idle / Capturing      │
//! │  - Strokes       │  - Rule-crossed latch    │
//! │  - Samples       │  - Commit / discard      │
//! ├─────────────────────────────────────────────┤
//! │  Geometry        │  Scoring                 │
//! │  - Coverage      │  - Neatness blend        │
//! │  - Smoothness    │  - Star rating           │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analyze;
pub mod capture;
pub mod error;
pub mod ruled;
pub mod sample;
pub mod score;
pub mod stroke;

pub use analyze::{AnalyzerConfig, StrokeAnalysis};
pub use capture::{CaptureSession, CaptureState};
pub use error::{NeatlineError, NeatlineResult};
pub use ruled::{RuleKind, RuleLayout};
pub use sample::Sample;
pub use score::{neatness, Rating};
pub use stroke::{Point, Stroke, StrokeId};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
