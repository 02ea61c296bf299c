//! # Inkpress Desktop
//!
//! Native desktop entry point for the Inkpress sketch.

use clap::Parser;
use inkpress_desktop::{CliArgs, DesktopConfig, SketchApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use winit::event_loop::EventLoop;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "inkpress_desktop=debug,inkpress_renderer=debug,inkpress_core=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Inkpress");

    let args = CliArgs::parse();
    let config = DesktopConfig::from(args);

    tracing::info!(
        "Window config: {}x{} \"{}\"",
        config.width,
        config.height,
        config.title
    );

    let mut app = SketchApp::new(config);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    tracing::info!("Inkpress exited");
    Ok(())
}
