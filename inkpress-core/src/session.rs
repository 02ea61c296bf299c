//! The sketch session: all mutable state, owned by the composition root.

use rand::Rng;

use crate::event::PointerPress;
use crate::header::HeaderState;
use crate::ink::InkSplat;
use crate::mark::{ArmLengths, Mark, Point};
use crate::quadrant;
use crate::store::MarkStore;
use crate::viewport::Viewport;

/// Viewport, active marks, and banner color in one place.
///
/// Passed by reference to the input and render callbacks; the two never
/// run concurrently (single execution context), so no locking is
/// involved anywhere.
#[derive(Debug, Clone)]
pub struct SketchSession {
    viewport: Viewport,
    marks: MarkStore,
    header: HeaderState,
}

impl SketchSession {
    /// Create a session for the given viewport size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            marks: MarkStore::new(),
            header: HeaderState::new(),
        }
    }

    /// Handle a pointer press.
    ///
    /// Out-of-bounds presses are ignored entirely (no side effects).
    /// Otherwise the press recolors the banner, ages every existing mark
    /// and evicts those past the cap, appends a fresh mark, and returns
    /// the sampled ink splat for the compositor to bake into the
    /// overlay.
    pub fn press<R: Rng + ?Sized>(&mut self, press: PointerPress, rng: &mut R) -> Option<InkSplat> {
        if !self.viewport.contains(press.x, press.y) {
            return None;
        }

        let splat = InkSplat::sample(rng);
        self.header.recolor(rng);

        self.marks.age_all();
        let evicted = self.marks.evict_expired();
        if evicted > 0 {
            tracing::debug!("Evicted {evicted} marks past the age cap");
        }

        let origin = Point::new(press.x, press.y);
        let arms = ArmLengths::sample(self.viewport, rng);
        let rect = quadrant::generate(origin, arms, self.viewport.band_thickness(), rng);
        self.marks
            .push(Mark::new(origin, arms, rect, press.timestamp_ms));
        tracing::debug!(
            "Mark created at ({}, {}), {} active",
            press.x,
            press.y,
            self.marks.len()
        );

        Some(splat)
    }

    /// Update the viewport after a window resize.
    ///
    /// Marks are kept; only the ink overlay is lost (the renderer
    /// recreates its surfaces at the new size).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        tracing::debug!("Viewport resized to {width}x{height}");
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Banner color state.
    #[must_use]
    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Active marks in insertion order.
    #[must_use]
    pub fn marks(&self) -> &MarkStore {
        &self.marks
    }

    /// Mutable access to the marks, for the per-frame animator.
    pub fn marks_mut(&mut self) -> &mut MarkStore {
        &mut self.marks
    }
}
