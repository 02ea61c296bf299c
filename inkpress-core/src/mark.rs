//! Marks: one per press, carrying the animated cross and its phase state.

use rand::Rng;

use crate::quadrant::QuadrantRect;
use crate::store::MAX_AGE;
use crate::viewport::Viewport;

/// Cross growth budget in milliseconds.
pub const CROSS_MS: u64 = 500;

/// Rectangle growth budget in milliseconds.
pub const RECT_MS: u64 = 500;

/// Smallest press size factor applied to the viewport's smaller dimension.
const SIZE_FACTOR_MIN: f32 = 0.12;

/// Largest press size factor applied to the viewport's smaller dimension.
const SIZE_FACTOR_MAX: f32 = 0.30;

/// Each arm is at least this fraction of the press's `base_max`.
const ARM_MIN_RATIO: f32 = 0.35;

/// A 2D point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Animation phase of a mark. Advances forward only, one step per
/// elapsed phase budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The four arms are still extending.
    CrossGrowing,
    /// The quadrant rectangle is fading in.
    RectGrowing,
    /// Fully revealed; only the age fade still applies.
    Done,
}

/// The four arm lengths of a cross, sampled independently per press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmLengths {
    /// Length of the leftward arm.
    pub left: f32,
    /// Length of the rightward arm.
    pub right: f32,
    /// Length of the upward arm.
    pub up: f32,
    /// Length of the downward arm.
    pub down: f32,
}

impl ArmLengths {
    /// Sample four independent arm lengths for one press.
    ///
    /// `base_max` is the smaller viewport dimension scaled by a factor
    /// uniform in `[0.12, 0.30)`; each arm is then uniform in
    /// `[0.35 * base_max, base_max]`.
    pub fn sample<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let base_max = viewport.min_dimension() * rng.random_range(SIZE_FACTOR_MIN..SIZE_FACTOR_MAX);
        let min_len = base_max * ARM_MIN_RATIO;
        Self {
            left: rng.random_range(min_len..=base_max),
            right: rng.random_range(min_len..=base_max),
            up: rng.random_range(min_len..=base_max),
            down: rng.random_range(min_len..=base_max),
        }
    }
}

/// One press's animated cross, optional quadrant rectangle, and
/// age/phase state.
#[derive(Debug, Clone)]
pub struct Mark {
    /// Press location.
    pub origin: Point,
    /// Arm lengths, fixed at creation.
    pub arms: ArmLengths,
    /// Creation timestamp on the host's monotonic ms clock.
    pub started_at_ms: u64,
    phase: Phase,
    rect_started_at_ms: u64,
    rect: Option<QuadrantRect>,
    age: u32,
}

impl Mark {
    /// Create a fresh mark at the given origin.
    ///
    /// The quadrant rectangle is immutable from here on; only its reveal
    /// progress (derived from elapsed time) changes.
    #[must_use]
    pub fn new(origin: Point, arms: ArmLengths, rect: Option<QuadrantRect>, now_ms: u64) -> Self {
        Self {
            origin,
            arms,
            started_at_ms: now_ms,
            phase: Phase::CrossGrowing,
            rect_started_at_ms: 0,
            rect,
            age: 0,
        }
    }

    /// Current animation phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The quadrant rectangle, absent when the chosen quadrant was too
    /// small at creation.
    #[must_use]
    pub fn rect(&self) -> Option<&QuadrantRect> {
        self.rect.as_ref()
    }

    /// Presses observed since this mark was created.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    pub(crate) fn increment_age(&mut self) {
        self.age += 1;
    }

    /// Fade multiplier derived from press-count age: 1.0 when fresh,
    /// 0.0 at the eviction cap. A mark at the cap keeps rendering at
    /// zero strength until the next press evicts it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // age is bounded by MAX_AGE
    pub fn life_factor(&self) -> f32 {
        (1.0 - self.age as f32 / MAX_AGE as f32).max(0.0)
    }

    /// Cross growth progress in `[0, 1]` for the given frame time.
    #[must_use]
    pub fn cross_progress(&self, now_ms: u64) -> f32 {
        progress(now_ms.saturating_sub(self.started_at_ms), CROSS_MS)
    }

    /// Rectangle reveal progress in `[0, 1]`; pinned to 1.0 once the
    /// mark is done. Only meaningful from [`Phase::RectGrowing`] on.
    #[must_use]
    pub fn rect_progress(&self, now_ms: u64) -> f32 {
        match self.phase {
            Phase::Done => 1.0,
            Phase::CrossGrowing | Phase::RectGrowing => {
                progress(now_ms.saturating_sub(self.rect_started_at_ms), RECT_MS)
            }
        }
    }

    /// Advance the phase machine for the current frame time.
    ///
    /// At most one transition per call: `CrossGrowing → RectGrowing`
    /// once cross progress reaches 1.0 (recording the rectangle start
    /// time), then `RectGrowing → Done` once rectangle progress reaches
    /// 1.0. A mark without a rectangle stays in `RectGrowing` until age
    /// eviction removes it.
    pub fn advance(&mut self, now_ms: u64) {
        match self.phase {
            Phase::CrossGrowing => {
                if self.cross_progress(now_ms) >= 1.0 {
                    self.phase = Phase::RectGrowing;
                    self.rect_started_at_ms = now_ms;
                }
            }
            Phase::RectGrowing => {
                if self.rect.is_some() && self.rect_progress(now_ms) >= 1.0 {
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
    }
}

/// Linear progress of `elapsed_ms` against `budget_ms`, clamped to
/// `[0, 1]`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // millisecond spans fit in f32
pub fn progress(elapsed_ms: u64, budget_ms: u64) -> f32 {
    (elapsed_ms as f32 / budget_ms as f32).clamp(0.0, 1.0)
}
