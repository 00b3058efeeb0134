use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, error};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::{copy_rgb_to_rgba, fill_rgba};
use crate::controllers::render_canvas::CanvasFrame;
use crate::controllers::window::events::FrameEvent;
use crate::controllers::window::ports::frame_presenter::FramePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::fractals::koch::koch_config::KochConfig;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Shows the finished canvas in the window.
///
/// The framebuffer keeps the canvas size; pixels scales it to the surface on resize.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    buffer_width: u32,
    buffer_height: u32,
    background: Colour,
    has_frame: bool,
    last_error_message: Option<String>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn FramePresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn FramePresenterPort>
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        self.maybe_draw_frame();

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        // minimised
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        config: &KochConfig,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(config.canvas_width, config.canvas_height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            buffer_width: config.canvas_width,
            buffer_height: config.canvas_height,
            background: config.background,
            has_frame: false,
            last_error_message: None,
        })
    }

    fn draw_placeholder(&mut self) {
        fill_rgba(self.pixels.frame_mut(), self.background);
    }

    fn maybe_draw_frame(&mut self) {
        match self.adapter.take_frame_event() {
            Some(FrameEvent::Frame(frame)) => {
                let pixel_rect = frame.buffer.pixel_rect();

                if pixel_rect.width() == self.buffer_width && pixel_rect.height() == self.buffer_height {
                    self.copy_canvas_into_pixels_frame(&frame);
                    self.has_frame = true;
                    self.last_error_message = None;
                } else {
                    debug!(
                        frame_width = pixel_rect.width(),
                        frame_height = pixel_rect.height(),
                        "dropping frame with stale size"
                    );
                }
            }
            Some(FrameEvent::Error(message)) => {
                error!(%message, "window render failed");
                self.last_error_message = Some(message);
            }
            None => {}
        }
    }

    fn copy_canvas_into_pixels_frame(&mut self, frame: &CanvasFrame) {
        copy_rgb_to_rgba(frame.buffer.buffer(), self.pixels.frame_mut());
    }
}
