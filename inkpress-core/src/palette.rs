//! Fixed color palettes.
//!
//! Every color in the sketch comes from one of these compile-time
//! tables; the only runtime choice is a uniform index.

use rand::Rng;

/// An opaque RGB color. Alpha is applied at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Warm yellow.
pub const YELLOW: Rgb = Rgb::new(245, 208, 40);
/// Signal red.
pub const RED: Rgb = Rgb::new(206, 41, 35);
/// Deep blue.
pub const BLUE: Rgb = Rgb::new(44, 96, 185);
/// Plain black.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Cross arm fill.
pub const CROSS: Rgb = BLACK;

/// Frame background grey.
pub const BACKGROUND: Rgb = Rgb::new(210, 210, 210);

/// Quadrant rectangle palette.
pub const RECT_PALETTE: [Rgb; 3] = [YELLOW, RED, BLUE];

/// Header banner palette.
pub const HEADER_PALETTE: [Rgb; 4] = [YELLOW, RED, BLUE, BLACK];

/// Draw a rectangle color uniformly from [`RECT_PALETTE`].
pub fn sample_rect_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    RECT_PALETTE[rng.random_range(0..RECT_PALETTE.len())]
}
