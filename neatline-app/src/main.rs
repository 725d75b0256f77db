//! # Neatline Demo
//!
//! Scripted capture → submit → replay session against a tracing-backed
//! surface. Writes a synthetic handwriting sample, rates it, and plays
//! a bounded animated replay.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neatline_core::{AnalyzerConfig, CaptureSession, NeatlineError, Point, RuleLayout};
use neatline_render::{render_frame, render_sample, Replay, TraceSurface, Viewport};

/// Command-line options.
#[derive(Parser, Debug)]
#[command(name = "neatline", about = "Capture, score, and replay a handwriting sample")]
struct CliArgs {
    /// Playback speed multiplier for the animated replay.
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Surface width in surface units.
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Surface height in surface units.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// How long to let the animated replay run, in milliseconds.
    #[arg(long, default_value_t = 1500)]
    replay_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neatline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let viewport = Viewport {
        width: args.width,
        height: args.height,
    };
    tracing::info!("Starting Neatline demo on a {}x{} surface", viewport.width, viewport.height);

    let surface = Arc::new(Mutex::new(TraceSurface::new()));
    let mut session = CaptureSession::new(RuleLayout::default());

    write_sample(&mut session, &surface, viewport).await;

    // Submit: instant replay, then analysis and scoring.
    {
        let mut surface = surface.lock().await;
        render_sample(&mut *surface, session.sample(), session.rule_layout(), viewport)?;
    }
    let (analysis, rating) = match session.rate(&AnalyzerConfig {
        ref_width: viewport.width,
        ref_height: viewport.height,
    }) {
        Ok(result) => result,
        Err(NeatlineError::EmptySample) => {
            tracing::warn!("Please write something first!");
            return Ok(());
        }
    };

    tracing::info!(
        "Analysis: coverage={:.2} consistency={:.2} smoothness={:.2} pressure={:.2}",
        analysis.coverage,
        analysis.consistency,
        analysis.smoothness,
        analysis.pressure_proxy
    );
    if session.rule_crossed() {
        tracing::info!("The forbidden rule was crossed: half-step penalty applied");
    }
    tracing::info!("Rating: {} {}", rating.stars(), rating);

    // Animated replay, bounded, then stopped.
    let mut replay = Replay::new();
    replay.start(
        session.sample(),
        session.rule_layout(),
        viewport,
        args.speed,
        Arc::clone(&surface),
    )?;
    tokio::time::sleep(Duration::from_millis(args.replay_ms)).await;
    replay.stop();

    let commands = surface.lock().await.command_count();
    tracing::info!("Replay stopped after {commands} draw commands");
    Ok(())
}

/// Write three wavy lines of synthetic "handwriting", re-rendering the
/// live frame after every extension the way an input host would.
async fn write_sample(
    session: &mut CaptureSession,
    surface: &Arc<Mutex<TraceSurface>>,
    viewport: Viewport,
) {
    for row in 0u8..3 {
        let baseline = 90.0 + f32::from(row) * 60.0;
        session.begin(Point::new(60.0, baseline));
        for step in 1u16..80 {
            let x = 60.0 + f32::from(step) * 8.0;
            let y = baseline + (f32::from(step) * 0.35).sin() * 12.0;
            session.extend(Point::new(x, y));

            let mut surface = surface.lock().await;
            if let Err(e) = render_frame(&mut *surface, session, viewport) {
                tracing::warn!("live redraw failed: {e}");
            }
        }
        if let Some(id) = session.end() {
            tracing::debug!("finished stroke {id}");
        }
    }
}
