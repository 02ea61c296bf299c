//! Drawing surfaces: the per-frame primary and the persistent ink layer.

use tiny_skia::{Color, Pixmap, PixmapPaint, Transform};

use inkpress_core::palette;

use crate::{RenderError, RenderResult};

/// Owns the primary drawable surface and the persistent ink overlay.
///
/// Both surfaces always share the viewport size. Resizing discards and
/// recreates them, so overlay content is lost on resize; that is
/// accepted behavior, not a bug.
pub struct SurfaceManager {
    primary: Pixmap,
    ink: Pixmap,
}

impl SurfaceManager {
    /// Allocate both surfaces, the overlay fully transparent.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Surface`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let primary = Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;
        let ink = Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;
        Ok(Self { primary, ink })
    }

    /// Discard and recreate both surfaces at a new viewport size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Surface`] when either dimension is zero;
    /// the existing surfaces are kept in that case.
    pub fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        *self = Self::new(width, height)?;
        tracing::debug!("Surfaces recreated at {width}x{height}");
        Ok(())
    }

    /// Clear the primary surface to the background grey.
    pub fn clear_primary(&mut self) {
        let bg = palette::BACKGROUND;
        self.primary.fill(Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    }

    /// Composite the ink overlay onto the primary surface.
    pub fn composite_ink(&mut self) {
        self.primary.draw_pixmap(
            0,
            0,
            self.ink.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// The primary surface, for per-frame drawing.
    pub fn primary_mut(&mut self) -> &mut Pixmap {
        &mut self.primary
    }

    /// The finished frame.
    #[must_use]
    pub fn primary(&self) -> &Pixmap {
        &self.primary
    }

    /// Scoped access to the ink overlay; only the ink compositor draws
    /// here.
    pub fn ink_mut(&mut self) -> &mut Pixmap {
        &mut self.ink
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.primary.width()
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.primary.height()
    }
}
