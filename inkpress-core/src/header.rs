//! Header banner state: the fixed caption, its recoloring rule, and its
//! layout pass.

use rand::Rng;

use crate::palette::{Rgb, HEADER_PALETTE};

/// The banner caption.
pub const HEADER_TEXT: &str = "PRESS THE SCREEN AT LEAST 50 TIMES PLZ";

/// Banner font size bounds, pixels.
const FONT_MIN: f32 = 18.0;
const FONT_MAX: f32 = 44.0;

/// Viewport-width divisor for the banner font size.
const FONT_DIVISOR: f32 = 24.0;

/// Current banner color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    color_index: usize,
}

impl HeaderState {
    /// Start on the first palette entry.
    #[must_use]
    pub const fn new() -> Self {
        Self { color_index: 0 }
    }

    /// Resample the banner color uniformly from the palette, rejecting
    /// the active index so the color always visibly changes.
    pub fn recolor<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Rgb {
        let mut next = self.color_index;
        while next == self.color_index {
            next = rng.random_range(0..HEADER_PALETTE.len());
        }
        self.color_index = next;
        self.color()
    }

    /// The active banner color.
    #[must_use]
    pub fn color(&self) -> Rgb {
        HEADER_PALETTE[self.color_index]
    }

    /// The active palette index.
    #[must_use]
    pub fn color_index(&self) -> usize {
        self.color_index
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Banner font size for a viewport width:
/// `clamp(round(width / 24), 18, 44)` pixels. Recomputed at startup and
/// on resize.
#[must_use]
pub fn banner_font_size(viewport_width: f32) -> f32 {
    (viewport_width / FONT_DIVISOR).round().clamp(FONT_MIN, FONT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_recolor_never_repeats_previous_index() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut header = HeaderState::new();
        let mut previous = header.color_index();
        for _ in 0..1_000 {
            header.recolor(&mut rng);
            assert_ne!(header.color_index(), previous);
            previous = header.color_index();
        }
    }

    #[test]
    fn test_recolor_reaches_every_other_entry() {
        let mut rng = StdRng::seed_from_u64(43);
        let mut header = HeaderState::new();
        let mut seen = [false; 4];
        for _ in 0..100 {
            header.recolor(&mut rng);
            seen[header.color_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_banner_font_size_scales_and_clamps() {
        assert!((banner_font_size(800.0) - 33.0).abs() < f32::EPSILON);
        assert!((banner_font_size(300.0) - 18.0).abs() < f32::EPSILON);
        assert!((banner_font_size(2_000.0) - 44.0).abs() < f32::EPSILON);
        // 1056 / 24 = 44 exactly: the upper clamp boundary.
        assert!((banner_font_size(1_056.0) - 44.0).abs() < f32::EPSILON);
    }
}
