//! # Neatline Render
//!
//! Draw-command composition and replay scheduling over an abstract
//! render surface.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            DrawSurface trait                │
//! ├──────────────┬──────────────┬───────────────┤
//! │ Frame        │ Instant      │ Animated      │
//! │ composition  │ replay       │ replay        │
//! │ (live input) │ (one pass)   │ (tokio task)  │
//! └──────────────┴──────────────┴───────────────┘
//! ```
//!
//! The core never reads surface state back; every frame is issued in
//! the fixed order clear → background rules → strokes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod compose;
pub mod error;
pub mod replay;
pub mod surface;

pub use compose::{render_frame, render_sample, Viewport};
pub use error::{RenderError, RenderResult};
pub use replay::{Replay, ReplayPlan, BASE_TICKS};
pub use surface::{DrawCommand, DrawSurface, Ink, TraceSurface, RULE_WIDTH, STROKE_WIDTH};

/// Render crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
