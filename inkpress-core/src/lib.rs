//! # Inkpress Core
//!
//! Sketch logic for the Inkpress tap-art toy. Pure state and geometry;
//! no windowing, no rasterization, no clock of its own.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               SketchSession                 │
//! ├──────────────────────┬──────────────────────┤
//! │  MarkStore           │  HeaderState         │
//! │  - insertion order   │  - 4-color palette   │
//! │  - age eviction      │  - never repeats     │
//! ├──────────────────────┴──────────────────────┤
//! │  Mark phase machine  │  Per-press sampling  │
//! │  - cross → rect      │  - arm lengths       │
//! │  - timed budgets     │  - quadrant rect     │
//! │                      │  - ink splat         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The host samples a monotonic millisecond clock and passes timestamps
//! in; every phase transition is derived from differences against
//! stored timestamps.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod event;
pub mod header;
pub mod ink;
pub mod mark;
pub mod palette;
pub mod quadrant;
pub mod session;
pub mod store;
pub mod viewport;

pub use event::PointerPress;
pub use header::{banner_font_size, HeaderState, HEADER_TEXT};
pub use ink::{InkBlot, InkSplat, BLOT_ALPHA};
pub use mark::{ArmLengths, Mark, Phase, Point, CROSS_MS, RECT_MS};
pub use palette::{Rgb, BACKGROUND, CROSS, HEADER_PALETTE, RECT_PALETTE};
pub use quadrant::{Quadrant, QuadrantRect, Rect};
pub use session::SketchSession;
pub use store::{MarkStore, MAX_AGE};
pub use viewport::{Viewport, BAND_RATIO};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
