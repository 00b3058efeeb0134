use crate::core::actions::render_snowflake::errors::RenderFailure;
use crate::core::actions::render_snowflake::ports::renderer::RendererPort;
use crate::core::data::colour::Colour;
use crate::core::data::geometry_state::GeometryState;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::fractals::koch::koch_config::KochConfig;
use crate::core::util::clip_segment::{ClipWindow, clip_segment};

/// Rasterises commands into a `PixelBuffer`.
///
/// Turtle space has its origin at the canvas centre with +y pointing up, so
/// a point maps to `(cx + x, cy - y)`. Lines are one pixel wide and anything
/// outside the canvas is clipped away.
#[derive(Debug)]
pub struct CanvasRenderer {
    canvas: Option<PixelBuffer>,
    state: GeometryState,
    stroke: Colour,
    centre: (f64, f64),
    window: ClipWindow,
    segments_drawn: u64,
}

impl CanvasRenderer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, background: Colour, stroke: Colour) -> Self {
        let top_left = pixel_rect.top_left();
        let bottom_right = pixel_rect.bottom_right();

        Self {
            canvas: Some(PixelBuffer::filled(pixel_rect, background)),
            state: GeometryState::default(),
            stroke,
            centre: (
                top_left.x as f64 + pixel_rect.width() as f64 / 2.0,
                top_left.y as f64 + pixel_rect.height() as f64 / 2.0,
            ),
            window: ClipWindow {
                min_x: top_left.x as f64 - 0.5,
                min_y: top_left.y as f64 - 0.5,
                max_x: bottom_right.x as f64 + 0.5,
                max_y: bottom_right.y as f64 + 0.5,
            },
            segments_drawn: 0,
        }
    }

    pub fn from_config(config: &KochConfig) -> Result<Self, PixelRectError> {
        let pixel_rect = PixelRect::with_size(config.canvas_width, config.canvas_height)?;
        Ok(Self::new(pixel_rect, config.background, config.stroke))
    }

    #[must_use]
    pub fn state(&self) -> GeometryState {
        self.state
    }

    #[must_use]
    pub fn segments_drawn(&self) -> u64 {
        self.segments_drawn
    }

    #[must_use]
    pub fn canvas(&self) -> Option<&PixelBuffer> {
        self.canvas.as_ref()
    }

    /// Hands over the finished raster. Any command applied afterwards fails.
    pub fn finish(&mut self) -> Result<PixelBuffer, RenderFailure> {
        self.canvas.take().ok_or_else(surface_gone)
    }

    #[must_use]
    pub fn to_pixel_space(&self, point: Point) -> (f64, f64) {
        (self.centre.0 + point.x, self.centre.1 - point.y)
    }

    fn ensure_surface(&self) -> Result<(), RenderFailure> {
        match self.canvas {
            Some(_) => Ok(()),
            None => Err(surface_gone()),
        }
    }

    fn draw_segment(&mut self, from: Point, to: Point) -> Result<(), RenderFailure> {
        let start = self.to_pixel_space(from);
        let end = self.to_pixel_space(to);
        let stroke = self.stroke;
        let canvas = self.canvas.as_mut().ok_or_else(surface_gone)?;

        let Some((start, end)) = clip_segment(start, end, self.window) else {
            return Ok(());
        };

        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let pixel = PixelPoint {
                x: (start.0 + t * dx).round() as i32,
                y: (start.1 + t * dy).round() as i32,
            };

            if canvas.pixel_rect().contains_point(pixel) {
                canvas
                    .set_pixel(pixel, stroke)
                    .map_err(|error| RenderFailure::new(error.to_string()))?;
            }
        }

        self.segments_drawn += 1;
        Ok(())
    }
}

fn surface_gone() -> RenderFailure {
    RenderFailure::new("drawing surface is no longer available")
}

fn non_finite(target: Point) -> RenderFailure {
    RenderFailure::new(format!(
        "cannot move to non-finite position ({}, {})",
        target.x, target.y
    ))
}

impl RendererPort for CanvasRenderer {
    fn move_to(&mut self, point: Point, drawing: bool) -> Result<(), RenderFailure> {
        self.ensure_surface()?;
        if !point.is_finite() {
            return Err(non_finite(point));
        }

        if drawing {
            self.draw_segment(self.state.position, point)?;
        }

        self.state = self.state.with_position(point);
        Ok(())
    }

    fn forward(&mut self, length: f64) -> Result<(), RenderFailure> {
        self.ensure_surface()?;
        let next = self.state.apply_forward(length);
        if !next.position.is_finite() {
            return Err(non_finite(next.position));
        }

        self.draw_segment(self.state.position, next.position)?;
        self.state = next;
        Ok(())
    }

    fn turn_left(&mut self, angle: f64) -> Result<(), RenderFailure> {
        self.ensure_surface()?;
        self.state = self.state.apply_turn_left(angle);
        Ok(())
    }

    fn turn_right(&mut self, angle: f64) -> Result<(), RenderFailure> {
        self.ensure_surface()?;
        self.state = self.state.apply_turn_right(angle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::assemble_snowflake::snowflake::assemble_snowflake;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::render_snowflake::render_snowflake::render_snowflake;

    fn create_renderer(width: u32, height: u32) -> CanvasRenderer {
        CanvasRenderer::new(
            PixelRect::with_size(width, height).unwrap(),
            Colour::WHITE,
            Colour::BLACK,
        )
    }

    #[test]
    fn test_new_canvas_is_background() {
        let renderer = create_renderer(20, 10);
        let canvas = renderer.canvas().unwrap();

        assert_eq!(canvas.count_pixels(Colour::WHITE), 200);
        assert_eq!(renderer.state(), GeometryState::default());
    }

    #[test]
    fn test_origin_maps_to_canvas_centre() {
        let renderer = create_renderer(800, 600);

        assert_eq!(renderer.to_pixel_space(Point::ORIGIN), (400.0, 300.0));
        assert_eq!(renderer.to_pixel_space(Point::new(10.0, 20.0)), (410.0, 280.0));
    }

    #[test]
    fn test_forward_draws_horizontal_line() {
        let mut renderer = create_renderer(20, 20);

        renderer.move_to(Point::new(-5.0, 0.0), false).unwrap();
        renderer.forward(10.0).unwrap();

        let canvas = renderer.canvas().unwrap();
        for x in 5..=15 {
            assert_eq!(canvas.pixel(PixelPoint { x, y: 10 }), Ok(Colour::BLACK), "x = {}", x);
        }
        assert_eq!(canvas.count_pixels(Colour::BLACK), 11);
        assert_eq!(renderer.segments_drawn(), 1);
    }

    #[test]
    fn test_pen_up_move_draws_nothing() {
        let mut renderer = create_renderer(20, 20);

        renderer.move_to(Point::new(5.0, 5.0), false).unwrap();

        assert_eq!(renderer.canvas().unwrap().count_pixels(Colour::BLACK), 0);
        assert_eq!(renderer.state().position, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_pen_down_move_draws_line() {
        let mut renderer = create_renderer(20, 20);

        renderer.move_to(Point::new(0.0, 5.0), true).unwrap();

        // vertical line from y = 10 up to y = 5 in pixel space
        assert_eq!(renderer.canvas().unwrap().count_pixels(Colour::BLACK), 6);
    }

    #[test]
    fn test_turns_follow_geometry_state() {
        let mut renderer = create_renderer(20, 20);

        renderer.turn_left(60.0).unwrap();
        renderer.turn_right(120.0).unwrap();

        assert_eq!(renderer.state().heading.degrees(), 300.0);
    }

    #[test]
    fn test_offscreen_segment_is_clipped() {
        let mut renderer = create_renderer(20, 20);

        renderer.move_to(Point::new(100.0, 100.0), false).unwrap();
        renderer.forward(1e9).unwrap();

        assert_eq!(renderer.canvas().unwrap().count_pixels(Colour::BLACK), 0);
        assert_eq!(renderer.segments_drawn(), 0);
    }

    #[test]
    fn test_non_finite_forward_fails() {
        let mut renderer = create_renderer(20, 20);

        let result = renderer.forward(f64::INFINITY);

        assert!(result.is_err());
        assert_eq!(renderer.state(), GeometryState::default());
    }

    #[test]
    fn test_commands_fail_after_finish() {
        let mut renderer = create_renderer(20, 20);

        let canvas = renderer.finish().unwrap();

        assert_eq!(canvas.pixel_rect().width(), 20);
        assert_eq!(renderer.forward(1.0), Err(surface_gone()));
        assert_eq!(renderer.turn_left(60.0), Err(surface_gone()));
        assert_eq!(renderer.move_to(Point::ORIGIN, false), Err(surface_gone()));
        assert!(renderer.finish().is_err());
    }

    #[test]
    fn test_plain_triangle_outline() {
        let snowflake = assemble_snowflake(0, 300.0).unwrap();
        let mut renderer = create_renderer(800, 800);

        render_snowflake(&snowflake, &mut renderer, &NeverCancel).unwrap();

        let canvas = renderer.finish().unwrap();
        let base_y = (400.0 + 300.0 * 3f64.sqrt() / 6.0).round() as i32;
        assert_eq!(canvas.pixel(PixelPoint { x: 400, y: base_y }), Ok(Colour::BLACK));
        assert_eq!(canvas.pixel(PixelPoint { x: 250, y: base_y }), Ok(Colour::BLACK));
        assert_eq!(canvas.pixel(PixelPoint { x: 550, y: base_y }), Ok(Colour::BLACK));
        // interior stays clear
        assert_eq!(canvas.pixel(PixelPoint { x: 400, y: base_y + 50 }), Ok(Colour::WHITE));
        assert_eq!(canvas.pixel(PixelPoint { x: 400, y: base_y - 50 }), Ok(Colour::WHITE));
    }

    #[test]
    fn test_higher_level_draws_more_pixels() {
        let mut counts = Vec::new();

        for level in 0..4 {
            let snowflake = assemble_snowflake(level, 300.0).unwrap();
            let mut renderer = create_renderer(800, 800);
            render_snowflake(&snowflake, &mut renderer, &NeverCancel).unwrap();
            counts.push(renderer.finish().unwrap().count_pixels(Colour::BLACK));
        }

        assert!(counts.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", counts);
    }
}
