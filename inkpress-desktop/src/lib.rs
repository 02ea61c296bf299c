//! # Inkpress Desktop
//!
//! Native host for the Inkpress sketch using winit + pixels.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p inkpress-desktop
//! ```
//!
//! ## With a custom window size:
//!
//! ```bash
//! cargo run -p inkpress-desktop -- --width 1920 --height 1080
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `DesktopConfig` - Window size and title
//! - `SketchApp` - Main application implementing `ApplicationHandler`,
//!   wiring pointer input and per-frame redraws into the session and
//!   renderer

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

mod app;

pub use app::SketchApp;

use clap::Parser;

/// Command-line arguments for inkpress-desktop.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkpress-desktop")]
#[command(about = "Tap-driven generative-art sketch")]
#[command(version)]
pub struct CliArgs {
    /// Window width in pixels
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "720")]
    pub height: u32,
}

/// Desktop application configuration.
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Inkpress".to_string(),
        }
    }
}

impl From<CliArgs> for DesktopConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            width: args.width,
            height: args.height,
            title: "Inkpress".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let args = CliArgs::parse_from(["inkpress-desktop"]);
        let config = DesktopConfig::from(args);
        let defaults = DesktopConfig::new();
        assert_eq!(config.width, defaults.width);
        assert_eq!(config.height, defaults.height);
        assert_eq!(config.title, defaults.title);
    }

    #[test]
    fn test_cli_overrides_window_size() {
        let args = CliArgs::parse_from(["inkpress-desktop", "--width", "640", "--height", "480"]);
        let config = DesktopConfig::from(args);
        assert_eq!((config.width, config.height), (640, 480));
    }
}
