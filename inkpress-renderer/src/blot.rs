//! Ink compositing: bakes splat polygons into the persistent overlay.

use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

use inkpress_core::{InkSplat, Point, BLOT_ALPHA};

/// Bake one press's splat into the ink layer at the press point.
///
/// Write-once: the overlay is never re-touched afterwards, except by a
/// full reset when the viewport resizes.
pub fn bake_splat(ink: &mut Pixmap, origin: Point, splat: &InkSplat) {
    let mut paint = Paint::default();
    paint.anti_alias = true;

    for blot in &splat.blots {
        let Some(path) = blot_path(origin, &blot.vertices) else {
            continue;
        };
        paint.set_color(Color::from_rgba8(
            blot.color.r,
            blot.color.g,
            blot.color.b,
            BLOT_ALPHA,
        ));
        ink.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
    tracing::trace!("Baked {} blots at ({}, {})", splat.blots.len(), origin.x, origin.y);
}

fn blot_path(origin: Point, vertices: &[(f32, f32)]) -> Option<Path> {
    let (&(x0, y0), rest) = vertices.split_first()?;
    let mut builder = PathBuilder::new();
    builder.move_to(origin.x + x0, origin.y + y0);
    for &(x, y) in rest {
        builder.line_to(origin.x + x, origin.y + y);
    }
    builder.close();
    builder.finish()
}
