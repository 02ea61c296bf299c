//! # Inkpress Renderer
//!
//! CPU rasterization for the sketch, built on `tiny-skia` pixmaps.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              SketchRenderer                 │
//! ├─────────────────────────────────────────────┤
//! │  SurfaceManager   │  primary + ink overlay  │
//! │  blot             │  one-shot splat baking  │
//! │  animator         │  per-frame mark pass    │
//! │  Banner           │  caption text widget    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Per frame: clear the primary to the background grey, composite the
//! persistent ink overlay, draw every mark in insertion order, then the
//! banner caption on top. The host copies [`SketchRenderer::frame`]
//! into whatever presents it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animator;
pub mod banner;
pub mod blot;
pub mod error;
pub mod surface;

pub use banner::Banner;
pub use error::{RenderError, RenderResult};
pub use surface::SurfaceManager;

use inkpress_core::{InkSplat, Point, SketchSession};

/// Turns session state into pixels.
pub struct SketchRenderer {
    surfaces: SurfaceManager,
    banner: Banner,
}

impl SketchRenderer {
    /// Create a renderer for the given viewport size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Surface`] when either dimension is zero.
    #[allow(clippy::cast_precision_loss)] // window dimensions fit in f32
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        Ok(Self {
            surfaces: SurfaceManager::new(width, height)?,
            banner: Banner::new(width as f32),
        })
    }

    /// Recreate the surfaces and banner layout for a new viewport size.
    ///
    /// The ink overlay is reset; accumulated blots are lost.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Surface`] when either dimension is zero.
    #[allow(clippy::cast_precision_loss)] // window dimensions fit in f32
    pub fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.surfaces.resize(width, height)?;
        self.banner.layout(width as f32);
        Ok(())
    }

    /// Bake a press's ink splat into the persistent overlay.
    pub fn bake_splat(&mut self, origin: Point, splat: &InkSplat) {
        blot::bake_splat(self.surfaces.ink_mut(), origin, splat);
    }

    /// Render one frame: background, ink wash, marks, banner.
    pub fn render_frame(&mut self, session: &mut SketchSession, now_ms: u64) {
        self.surfaces.clear_primary();
        self.surfaces.composite_ink();
        animator::draw_marks(self.surfaces.primary_mut(), session, now_ms);
        self.banner.set_color(session.header().color());
        self.banner.draw(self.surfaces.primary_mut());
    }

    /// The finished frame as a premultiplied RGBA pixmap.
    #[must_use]
    pub fn frame(&self) -> &tiny_skia::Pixmap {
        self.surfaces.primary()
    }

    /// Copy the finished frame into a straight-RGBA presentation buffer,
    /// demultiplying the pixmap's premultiplied alpha.
    ///
    /// `target` must hold `width * height * 4` bytes in RGBA order.
    pub fn copy_frame_into(&self, target: &mut [u8]) {
        for (src, dst) in self
            .frame()
            .pixels()
            .iter()
            .zip(target.chunks_exact_mut(4))
        {
            let c = src.demultiply();
            dst[0] = c.red();
            dst[1] = c.green();
            dst[2] = c.blue();
            dst[3] = c.alpha();
        }
    }
}
