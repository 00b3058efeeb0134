use crate::core::actions::render_snowflake::errors::RenderFailure;
use crate::core::actions::render_snowflake::ports::renderer::RendererPort;
use crate::core::data::geometry_state::GeometryState;
use crate::core::data::point::Point;

/// Records the pen-down path as polylines instead of drawing it.
///
/// Every pen-up move starts a new polyline. Meant for measuring figures and
/// for tests, so it keeps every vertex: only feed it small levels.
#[derive(Debug, Default)]
pub struct PathRecorder {
    state: GeometryState,
    polylines: Vec<Vec<Point>>,
    drawn_length: f64,
}

impl PathRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GeometryState {
        self.state
    }

    #[must_use]
    pub fn polylines(&self) -> &[Vec<Point>] {
        &self.polylines
    }

    #[must_use]
    pub fn drawn_length(&self) -> f64 {
        self.drawn_length
    }

    fn line_to(&mut self, to: Point) {
        let from = self.state.position;

        match self.polylines.last_mut() {
            Some(polyline) if polyline.last() == Some(&from) => polyline.push(to),
            _ => self.polylines.push(vec![from, to]),
        }

        self.drawn_length += from.distance_to(to);
    }
}

impl RendererPort for PathRecorder {
    fn move_to(&mut self, point: Point, drawing: bool) -> Result<(), RenderFailure> {
        if drawing {
            self.line_to(point);
        } else {
            self.polylines.push(vec![point]);
        }

        self.state = self.state.with_position(point);
        Ok(())
    }

    fn forward(&mut self, length: f64) -> Result<(), RenderFailure> {
        let next = self.state.apply_forward(length);
        self.line_to(next.position);
        self.state = next;
        Ok(())
    }

    fn turn_left(&mut self, angle: f64) -> Result<(), RenderFailure> {
        self.state = self.state.apply_turn_left(angle);
        Ok(())
    }

    fn turn_right(&mut self, angle: f64) -> Result<(), RenderFailure> {
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
    use crate::core::fractals::koch::curve_spec::CurveSpec;
    use crate::core::fractals::koch::measure::perimeter;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_pen_up_move_starts_new_polyline() {
        let mut recorder = PathRecorder::new();

        recorder.forward(5.0).unwrap();
        recorder.move_to(Point::new(10.0, 10.0), false).unwrap();
        recorder.forward(5.0).unwrap();

        assert_eq!(recorder.polylines().len(), 2);
        assert_eq!(recorder.polylines()[1], vec![Point::new(10.0, 10.0), Point::new(15.0, 10.0)]);
        assert_eq!(recorder.drawn_length(), 10.0);
    }

    #[test]
    fn test_level_one_snowflake_is_one_closed_polyline() {
        let snowflake = assemble_snowflake(1, 120.0).unwrap();
        let mut recorder = PathRecorder::new();

        render_snowflake(&snowflake, &mut recorder, &NeverCancel).unwrap();

        assert_eq!(recorder.polylines().len(), 1);
        let polyline = &recorder.polylines()[0];
        assert_eq!(polyline.len(), 13); // start + 12 segments
        let first = polyline[0];
        let last = polyline[12];
        assert_abs_diff_eq!(first.x, last.x, epsilon = 1e-9);
        assert_abs_diff_eq!(first.y, last.y, epsilon = 1e-9);
        assert_relative_eq!(recorder.drawn_length(), 480.0, max_relative = 1e-12);
    }

    #[test]
    fn test_drawn_length_matches_perimeter() {
        for level in 0..5 {
            let spec = CurveSpec::new(level, 300.0).unwrap();
            let snowflake = assemble_snowflake(level, 300.0).unwrap();
            let mut recorder = PathRecorder::new();

            render_snowflake(&snowflake, &mut recorder, &NeverCancel).unwrap();

            assert_relative_eq!(recorder.drawn_length(), perimeter(spec), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_bump_points_outward_from_the_base() {
        let snowflake = assemble_snowflake(1, 120.0).unwrap();
        let mut recorder = PathRecorder::new();

        render_snowflake(&snowflake, &mut recorder, &NeverCancel).unwrap();

        // third vertex is the tip of the first side's bump, above the base line
        let base_y = snowflake.start().position.y;
        let tip = recorder.polylines()[0][2];
        assert_abs_diff_eq!(tip.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tip.y - base_y, 40.0 * 3f64.sqrt() / 2.0, epsilon = 1e-9);
    }
}
