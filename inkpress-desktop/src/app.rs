//! Desktop application using winit 0.30 `ApplicationHandler`.

use std::sync::Arc;
use std::time::Instant;

use inkpress_core::{Point, PointerPress, SketchSession};
use inkpress_renderer::SketchRenderer;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

use crate::DesktopConfig;

/// Desktop sketch application.
///
/// Manages the winit window, the pixels framebuffer, the renderer, and
/// the session, wiring pointer input and per-frame redraws together.
/// Input and rendering both run on the event-loop thread, so the
/// session is never touched concurrently.
pub struct SketchApp {
    config: DesktopConfig,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    renderer: Option<SketchRenderer>,
    session: SketchSession,
    cursor: PhysicalPosition<f64>,
    started: Instant,
}

impl SketchApp {
    /// Create the application with the given configuration.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // window dimensions fit in f32
    pub fn new(config: DesktopConfig) -> Self {
        let session = SketchSession::new(config.width as f32, config.height as f32);
        Self {
            config,
            window: None,
            pixels: None,
            renderer: None,
            session,
            cursor: PhysicalPosition::new(0.0, 0.0),
            started: Instant::now(),
        }
    }

    /// Milliseconds elapsed on the app's monotonic clock.
    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Build the presentation surface and renderer for a window.
    fn init_surface(&mut self, window: Arc<Window>) -> anyhow::Result<()> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;
        let renderer = SketchRenderer::new(size.width, size.height)?;

        self.pixels = Some(pixels);
        self.renderer = Some(renderer);
        self.window = Some(window);

        tracing::info!(
            "Presentation surface initialized at {}x{}",
            size.width,
            size.height
        );
        Ok(())
    }

    /// Map a pointer press at the given position into the session.
    fn press(&mut self, x: f32, y: f32) {
        let event = PointerPress::new(x, y, self.now_ms());
        let mut rng = rand::rng();
        if let Some(splat) = self.session.press(event, &mut rng) {
            if let Some(renderer) = &mut self.renderer {
                renderer.bake_splat(Point::new(x, y), &splat);
            }
        }
    }

    /// Handle window resize: session viewport, renderer surfaces, and
    /// the presentation buffer all follow the new size.
    #[allow(clippy::cast_precision_loss)] // window dimensions fit in f32
    fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }

        self.session.resize(size.width as f32, size.height as f32);

        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.resize(size.width, size.height) {
                tracing::error!("Failed to resize surfaces: {e}");
            }
        }
        if let Some(pixels) = &mut self.pixels {
            if let Err(e) = pixels.resize_surface(size.width, size.height) {
                tracing::error!("Failed to resize presentation surface: {e}");
            }
            if let Err(e) = pixels.resize_buffer(size.width, size.height) {
                tracing::error!("Failed to resize presentation buffer: {e}");
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Render the current frame and present it.
    fn redraw(&mut self) {
        let now = self.now_ms();
        let (Some(renderer), Some(pixels)) = (&mut self.renderer, &mut self.pixels) else {
            return;
        };

        renderer.render_frame(&mut self.session, now);
        renderer.copy_frame_into(pixels.frame_mut());

        if let Err(e) = pixels.render() {
            tracing::error!("Present failed: {e}");
        }
    }
}

impl ApplicationHandler for SketchApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            tracing::debug!("Window already exists, skipping creation");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                if let Err(e) = self.init_surface(Arc::clone(&window)) {
                    tracing::error!("Failed to initialize presentation surface: {e}");
                    event_loop.exit();
                } else {
                    window.request_redraw();
                }
            }
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)] // cursor positions fit in f32
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                tracing::debug!("Window resized to {}x{}", size.width, size.height);
                self.handle_resize(size);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                tracing::info!("Scale factor changed to {scale_factor}");
                let new_size = self.window.as_ref().map(|w| w.inner_size());
                if let Some(size) = new_size {
                    self.handle_resize(size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.press(self.cursor.x as f32, self.cursor.y as f32);
            }
            WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => {
                self.press(touch.location.x as f32, touch.location.y as f32);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                // Keep the animation running; presentation is
                // vsync-throttled, so this settles at the display rate.
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
