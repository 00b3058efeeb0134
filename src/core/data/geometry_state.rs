use crate::core::data::command::Command;
use crate::core::data::heading::Heading;
use crate::core::data::point::Point;

/// Pose of a walker: where it is and which way it faces.
///
/// Every transform returns a new value; whoever walks a command stream owns
/// its own copy and is the only one replacing it.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct GeometryState {
    pub position: Point,
    pub heading: Heading,
}

impl GeometryState {
    #[must_use]
    pub fn new(position: Point, heading: Heading) -> Self {
        Self { position, heading }
    }

    #[must_use]
    pub fn apply_forward(self, length: f64) -> Self {
        Self {
            position: self.position + self.heading.unit_vector().scale(length),
            heading: self.heading,
        }
    }

    #[must_use]
    pub fn apply_turn_left(self, angle: f64) -> Self {
        Self {
            position: self.position,
            heading: self.heading.rotated(angle),
        }
    }

    #[must_use]
    pub fn apply_turn_right(self, angle: f64) -> Self {
        Self {
            position: self.position,
            heading: self.heading.rotated(-angle),
        }
    }

    #[must_use]
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::Forward(length) => self.apply_forward(length),
            Command::TurnLeft(angle) => self.apply_turn_left(angle),
            Command::TurnRight(angle) => self.apply_turn_right(angle),
        }
    }

    #[must_use]
    pub fn with_position(self, position: Point) -> Self {
        Self {
            position,
            heading: self.heading,
        }
    }
}
