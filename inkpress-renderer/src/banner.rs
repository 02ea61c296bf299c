//! The banner text widget: a fixed caption, recolored on every press
//! and re-sized on resize, drawn centered at the top of the frame.

use cosmic_text::{Align, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

use inkpress_core::{banner_font_size, Rgb, HEADER_PALETTE, HEADER_TEXT};

/// Vertical offset of the caption from the top edge, pixels.
const TOP_MARGIN: f32 = 10.0;

/// Line height relative to the font size.
const LINE_HEIGHT: f32 = 1.2;

/// Typed text widget for the banner caption.
///
/// Owns the font system and glyph cache. Color and font size are
/// explicit capabilities, decoupled from the render loop; the shaped
/// buffer is only rebuilt when size or width actually change.
pub struct Banner {
    font_system: FontSystem,
    swash_cache: SwashCache,
    buffer: Buffer,
    font_size: f32,
    color: Rgb,
    shaped_width: Option<u32>,
}

impl Banner {
    /// Create the banner sized for the given viewport width.
    #[must_use]
    pub fn new(viewport_width: f32) -> Self {
        let font_size = banner_font_size(viewport_width);
        let mut font_system = FontSystem::new();
        let buffer = Buffer::new(
            &mut font_system,
            Metrics::new(font_size, font_size * LINE_HEIGHT),
        );
        Self {
            font_system,
            swash_cache: SwashCache::new(),
            buffer,
            font_size,
            color: HEADER_PALETTE[0],
            shaped_width: None,
        }
    }

    /// Apply a new caption color.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Apply a font size directly.
    pub fn set_font_size(&mut self, font_size: f32) {
        if (font_size - self.font_size).abs() > f32::EPSILON {
            self.font_size = font_size;
            self.shaped_width = None;
        }
    }

    /// Recompute the font size from the viewport width. Invoked at
    /// startup and on resize.
    pub fn layout(&mut self, viewport_width: f32) {
        self.set_font_size(banner_font_size(viewport_width));
    }

    /// Current font size in pixels.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Current caption color.
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Draw the caption centered at the top of the surface.
    #[allow(clippy::cast_precision_loss)] // surface dimensions fit in f32
    pub fn draw(&mut self, surface: &mut Pixmap) {
        self.reshape(surface.width());

        let color = cosmic_text::Color::rgb(self.color.r, self.color.g, self.color.b);
        let mut paint = Paint::default();
        let Self {
            font_system,
            swash_cache,
            buffer,
            ..
        } = self;

        buffer.draw(font_system, swash_cache, color, |x, y, w, h, pixel| {
            if pixel.a() == 0 {
                return;
            }
            paint.set_color(Color::from_rgba8(pixel.r(), pixel.g(), pixel.b(), pixel.a()));
            let rect = Rect::from_xywh(x as f32, TOP_MARGIN + y as f32, w as f32, h as f32);
            if let Some(rect) = rect {
                surface.fill_rect(rect, &paint, Transform::identity(), None);
            }
        });
    }

    /// Reshape the caption when the font size or surface width changed
    /// since the last frame.
    #[allow(clippy::cast_precision_loss)] // surface dimensions fit in f32
    fn reshape(&mut self, width: u32) {
        if self.shaped_width == Some(width) {
            return;
        }

        self.buffer.set_metrics(
            &mut self.font_system,
            Metrics::new(self.font_size, self.font_size * LINE_HEIGHT),
        );
        self.buffer
            .set_size(&mut self.font_system, Some(width as f32), None);
        let attrs = Attrs::new().family(Family::SansSerif).weight(Weight::BOLD);
        self.buffer.set_text(
            &mut self.font_system,
            HEADER_TEXT,
            &attrs,
            Shaping::Advanced,
            Some(Align::Center),
        );
        self.buffer.shape_until_scroll(&mut self.font_system, false);
        self.shaped_width = Some(width);
    }
}
