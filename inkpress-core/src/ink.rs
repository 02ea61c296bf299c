//! Ink splat geometry: the persistent watercolor-style blots baked into
//! the overlay on every press.

use std::f32::consts::TAU;

use rand::Rng;

use crate::palette::Rgb;

/// Overlapping blots per splat.
pub const BLOTS_PER_SPLAT: usize = 4;

/// Constant fill alpha; overlapping blots accumulate to a mottled wash.
pub const BLOT_ALPHA: u8 = 18;

/// Angular step between polygon vertices, radians.
const VERTEX_STEP: f32 = 0.4;

/// Per-vertex radius range, pixels.
const RADIUS_MIN: f32 = 90.0;
const RADIUS_MAX: f32 = 200.0;

/// Shared grey base range, sampled once per splat.
const GREY_MIN: f32 = 80.0;
const GREY_MAX: f32 = 150.0;

/// Per-channel perturbation around the base grey.
const GREY_JITTER: f32 = 20.0;

/// One irregular closed blot polygon, centered on the press point.
#[derive(Debug, Clone)]
pub struct InkBlot {
    /// Polygon vertices relative to the press point.
    pub vertices: Vec<(f32, f32)>,
    /// Fill color; [`BLOT_ALPHA`] is applied at draw time.
    pub color: Rgb,
}

impl InkBlot {
    fn sample<R: Rng + ?Sized>(base_grey: f32, rng: &mut R) -> Self {
        let rotation = rng.random_range(0.0..TAU);
        let color = Rgb::new(
            jittered_channel(base_grey, rng),
            jittered_channel(base_grey, rng),
            jittered_channel(base_grey, rng),
        );

        let mut vertices = Vec::new();
        let mut angle = 0.0;
        while angle < TAU {
            let radius = rng.random_range(RADIUS_MIN..RADIUS_MAX);
            let (sin, cos) = (angle + rotation).sin_cos();
            vertices.push((cos * radius, sin * radius));
            angle += VERTEX_STEP;
        }

        Self { vertices, color }
    }
}

/// The full set of blots baked for one press.
#[derive(Debug, Clone)]
pub struct InkSplat {
    /// Blots in draw order.
    pub blots: Vec<InkBlot>,
}

impl InkSplat {
    /// Sample a splat: a shared grey base perturbed per blot and per
    /// channel, each blot independently rotated and jittered at the rim.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let base_grey = rng.random_range(GREY_MIN..GREY_MAX);
        let blots = (0..BLOTS_PER_SPLAT)
            .map(|_| InkBlot::sample(base_grey, rng))
            .collect();
        Self { blots }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to u8 range
fn jittered_channel<R: Rng + ?Sized>(base: f32, rng: &mut R) -> u8 {
    (base + rng.random_range(-GREY_JITTER..GREY_JITTER)).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_splat_shape() {
        let mut rng = StdRng::seed_from_u64(17);
        let splat = InkSplat::sample(&mut rng);
        assert_eq!(splat.blots.len(), BLOTS_PER_SPLAT);
        for blot in &splat.blots {
            // 0, 0.4, ..., 6.0 radians: sixteen vertices per turn.
            assert_eq!(blot.vertices.len(), 16);
        }
    }

    #[test]
    fn test_vertex_radii_within_range() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..20 {
            let splat = InkSplat::sample(&mut rng);
            for blot in &splat.blots {
                for &(x, y) in &blot.vertices {
                    let radius = (x * x + y * y).sqrt();
                    assert!(radius >= RADIUS_MIN - 1e-2);
                    assert!(radius <= RADIUS_MAX + 1e-2);
                }
            }
        }
    }

    #[test]
    fn test_blot_greys_near_shared_base() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..20 {
            let splat = InkSplat::sample(&mut rng);
            for blot in &splat.blots {
                for channel in [blot.color.r, blot.color.g, blot.color.b] {
                    let value = f32::from(channel);
                    assert!(value >= GREY_MIN - GREY_JITTER - 1e-2);
                    assert!(value <= GREY_MAX + GREY_JITTER + 1e-2);
                }
            }
        }
    }
}
