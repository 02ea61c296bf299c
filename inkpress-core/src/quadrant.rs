//! Quadrant rectangle generation.
//!
//! Each press picks one of the four quadrants around the cross and, if
//! there is room inside the arms, fills it with a palette color.

use rand::Rng;

use crate::mark::{ArmLengths, Point};
use crate::palette::{self, Rgb};

/// Quadrant dimensions at or below this produce no rectangle.
const MIN_DIMENSION: f32 = 2.0;

/// An axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The four quadrants around a cross center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Above and left of the center.
    TopLeft,
    /// Above and right of the center.
    TopRight,
    /// Below and left of the center.
    BottomLeft,
    /// Below and right of the center.
    BottomRight,
}

impl Quadrant {
    /// All quadrants, for uniform sampling.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Pick one of the four quadrants uniformly.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// The colored rectangle revealed in one quadrant of a cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantRect {
    /// Position and size, fixed at creation.
    pub rect: Rect,
    /// Fill color, drawn once from the rectangle palette.
    pub color: Rgb,
}

/// Build the quadrant rectangle for a press, if the chosen quadrant has
/// room.
///
/// The available size is the corresponding pair of arm lengths minus a
/// half-band margin on each side (the arms occupy that margin). When
/// either dimension is at most 2 px the press simply gets no rectangle;
/// that is an expected outcome, not an error.
pub fn generate<R: Rng + ?Sized>(
    origin: Point,
    arms: ArmLengths,
    band_thickness: f32,
    rng: &mut R,
) -> Option<QuadrantRect> {
    let quadrant = Quadrant::sample(rng);
    let half = band_thickness / 2.0;
    let (x, y, width, height) = bounds(quadrant, origin, arms, half);

    if width <= MIN_DIMENSION || height <= MIN_DIMENSION {
        return None;
    }

    Some(QuadrantRect {
        rect: Rect::new(x, y, width, height),
        color: palette::sample_rect_color(rng),
    })
}

/// Anchor and size for a quadrant: just outside the band on the two
/// sides the quadrant touches, spanning the rest of the arms.
fn bounds(quadrant: Quadrant, origin: Point, arms: ArmLengths, half: f32) -> (f32, f32, f32, f32) {
    let avail_left = arms.left - half;
    let avail_right = arms.right - half;
    let avail_up = arms.up - half;
    let avail_down = arms.down - half;

    match quadrant {
        Quadrant::TopLeft => (
            origin.x - arms.left,
            origin.y - arms.up,
            avail_left,
            avail_up,
        ),
        Quadrant::TopRight => (origin.x + half, origin.y - arms.up, avail_right, avail_up),
        Quadrant::BottomLeft => (
            origin.x - arms.left,
            origin.y + half,
            avail_left,
            avail_down,
        ),
        Quadrant::BottomRight => (origin.x + half, origin.y + half, avail_right, avail_down),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_bounds_stay_outside_the_band() {
        let origin = Point::new(100.0, 100.0);
        let arms = ArmLengths {
            left: 40.0,
            right: 50.0,
            up: 60.0,
            down: 70.0,
        };
        let half = 3.0;

        for quadrant in Quadrant::ALL {
            let (x, y, width, height) = bounds(quadrant, origin, arms, half);
            assert!(width > 0.0 && height > 0.0);

            match quadrant {
                Quadrant::TopLeft | Quadrant::BottomLeft => {
                    assert!(x + width <= origin.x - half + EPS);
                    assert!(x >= origin.x - arms.left - EPS);
                }
                Quadrant::TopRight | Quadrant::BottomRight => {
                    assert!(x >= origin.x + half - EPS);
                    assert!(x + width <= origin.x + arms.right + EPS);
                }
            }
            match quadrant {
                Quadrant::TopLeft | Quadrant::TopRight => {
                    assert!(y + height <= origin.y - half + EPS);
                    assert!(y >= origin.y - arms.up - EPS);
                }
                Quadrant::BottomLeft | Quadrant::BottomRight => {
                    assert!(y >= origin.y + half - EPS);
                    assert!(y + height <= origin.y + arms.down + EPS);
                }
            }
        }
    }

    #[test]
    fn test_generated_rect_lies_in_one_quadrant() {
        let mut rng = StdRng::seed_from_u64(21);
        let origin = Point::new(200.0, 200.0);
        let arms = ArmLengths {
            left: 55.0,
            right: 45.0,
            up: 65.0,
            down: 35.0,
        };
        let band = 6.0;
        let half = band / 2.0;

        let mut produced = 0;
        for _ in 0..100 {
            let Some(quad) = generate(origin, arms, band, &mut rng) else {
                continue;
            };
            produced += 1;
            let r = quad.rect;
            let on_left = r.x < origin.x;
            let on_top = r.y < origin.y;
            if on_left {
                assert!(r.x + r.width <= origin.x - half + EPS);
            } else {
                assert!(r.x >= origin.x + half - EPS);
            }
            if on_top {
                assert!(r.y + r.height <= origin.y - half + EPS);
            } else {
                assert!(r.y >= origin.y + half - EPS);
            }
            assert!(palette::RECT_PALETTE.contains(&quad.color));
        }
        assert_eq!(produced, 100, "roomy arms always produce a rectangle");
    }

    #[test]
    fn test_too_small_quadrant_is_skipped() {
        let mut rng = StdRng::seed_from_u64(5);
        let origin = Point::new(10.0, 10.0);
        // Every quadrant is at most 2 px after the half-band margin.
        let arms = ArmLengths {
            left: 5.0,
            right: 5.0,
            up: 5.0,
            down: 5.0,
        };
        for _ in 0..50 {
            assert!(generate(origin, arms, 6.0, &mut rng).is_none());
        }
    }

    #[test]
    fn test_skip_boundary_is_exclusive_above_two() {
        let origin = Point::new(50.0, 50.0);
        let half = 1.0;
        // Available size is exactly 2.0: skipped.
        let arms = ArmLengths {
            left: 3.0,
            right: 3.0,
            up: 3.0,
            down: 3.0,
        };
        for quadrant in Quadrant::ALL {
            let (_, _, width, height) = bounds(quadrant, origin, arms, half);
            assert!((width - 2.0).abs() < EPS && (height - 2.0).abs() < EPS);
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(origin, arms, 2.0, &mut rng).is_none());

        // Just above the threshold: produced.
        let roomier = ArmLengths {
            left: 3.1,
            right: 3.1,
            up: 3.1,
            down: 3.1,
        };
        let mut hits = 0;
        for _ in 0..20 {
            if generate(origin, roomier, 2.0, &mut rng).is_some() {
                hits += 1;
            }
        }
        assert_eq!(hits, 20);
    }
}
