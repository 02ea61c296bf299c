//! Per-frame mark animation: progress math applied to the primary
//! surface, advancing each mark's phase machine as it goes.

use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

use inkpress_core::{palette, Mark, Phase, QuadrantRect, SketchSession};

/// Peak alpha of a fully revealed quadrant rectangle.
const RECT_ALPHA: f32 = 220.0;

/// Draw every active mark onto the primary surface for this frame.
///
/// Marks render in insertion order so newer marks layer on top. Each
/// mark's phase machine is advanced once before drawing, which is what
/// stamps the rectangle start time on the frame where the cross finishes.
pub fn draw_marks(primary: &mut Pixmap, session: &mut SketchSession, now_ms: u64) {
    let thickness = session.viewport().band_thickness();

    for mark in session.marks_mut().iter_mut() {
        mark.advance(now_ms);

        let life = mark.life_factor();
        let cross_progress = mark.cross_progress(now_ms);
        draw_cross(primary, mark, thickness, cross_progress, life);

        if matches!(mark.phase(), Phase::RectGrowing | Phase::Done) {
            if let Some(quad) = mark.rect() {
                let rect_progress = mark.rect_progress(now_ms);
                draw_quadrant_rect(primary, quad, rect_progress, life);
            }
        }
    }
}

/// Draw the four arms as fixed-thickness bands scaled by growth
/// progress, solid dark fill faded by the mark's life factor.
fn draw_cross(primary: &mut Pixmap, mark: &Mark, thickness: f32, progress: f32, life: f32) {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    let c = palette::CROSS;
    paint.set_color(Color::from_rgba8(c.r, c.g, c.b, scaled_alpha(255.0, life)));

    let cx = mark.origin.x;
    let cy = mark.origin.y;
    let arms = mark.arms;
    let half = thickness / 2.0;

    let right = arms.right * progress;
    fill_band(primary, cx, cy - half, right, thickness, &paint);

    let left = arms.left * progress;
    fill_band(primary, cx - left, cy - half, left, thickness, &paint);

    let up = arms.up * progress;
    fill_band(primary, cx - half, cy - up, thickness, up, &paint);

    let down = arms.down * progress;
    fill_band(primary, cx - half, cy, thickness, down, &paint);
}

/// Draw the stored rectangle, alpha scaled by reveal progress and the
/// mark's life factor. Geometry never changes after creation.
fn draw_quadrant_rect(primary: &mut Pixmap, quad: &QuadrantRect, progress: f32, life: f32) {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    let c = quad.color;
    paint.set_color(Color::from_rgba8(
        c.r,
        c.g,
        c.b,
        scaled_alpha(RECT_ALPHA, progress * life),
    ));

    let r = quad.rect;
    if let Some(rect) = Rect::from_xywh(r.x, r.y, r.width, r.height) {
        primary.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

fn fill_band(primary: &mut Pixmap, x: f32, y: f32, width: f32, height: f32, paint: &Paint<'_>) {
    // from_xywh rejects zero sizes; an arm at progress 0 draws nothing.
    if let Some(rect) = Rect::from_xywh(x, y, width, height) {
        primary.fill_rect(rect, paint, Transform::identity(), None);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to u8 range
fn scaled_alpha(base: f32, factor: f32) -> u8 {
    (base * factor).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpress_core::PointerPress;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session_with_center_press() -> SketchSession {
        let mut rng = StdRng::seed_from_u64(77);
        let mut session = SketchSession::new(400.0, 400.0);
        session
            .press(PointerPress::new(200.0, 200.0, 0), &mut rng)
            .expect("in bounds");
        session
    }

    fn darker_than_background(pixmap: &Pixmap) -> usize {
        let bg = palette::BACKGROUND.r;
        pixmap
            .pixels()
            .iter()
            .filter(|p| p.demultiply().red() < bg)
            .count()
    }

    #[test]
    fn test_growing_cross_darkens_more_pixels_over_time() {
        let mut session = session_with_center_press();

        let mut primary = Pixmap::new(400, 400).expect("pixmap");
        primary.fill(Color::from_rgba8(210, 210, 210, 255));
        draw_marks(&mut primary, &mut session, 100);
        let early = darker_than_background(&primary);
        assert!(early > 0, "a partial cross is visible");

        let mut primary = Pixmap::new(400, 400).expect("pixmap");
        primary.fill(Color::from_rgba8(210, 210, 210, 255));
        draw_marks(&mut primary, &mut session, 499);
        let late = darker_than_background(&primary);
        assert!(late > early, "arms extend with progress");
    }

    #[test]
    fn test_draw_advances_the_phase_machine() {
        let mut session = session_with_center_press();
        let mut primary = Pixmap::new(400, 400).expect("pixmap");

        draw_marks(&mut primary, &mut session, 500);
        assert_eq!(
            session.marks().iter().next().expect("mark").phase(),
            Phase::RectGrowing
        );

        draw_marks(&mut primary, &mut session, 1_000);
        assert_eq!(
            session.marks().iter().next().expect("mark").phase(),
            Phase::Done
        );
    }

    #[test]
    fn test_scaled_alpha_bounds() {
        assert_eq!(scaled_alpha(255.0, 1.0), 255);
        assert_eq!(scaled_alpha(255.0, 0.0), 0);
        assert_eq!(scaled_alpha(220.0, 1.0), 220);
        assert_eq!(scaled_alpha(220.0, 2.0), 255);
    }
}
