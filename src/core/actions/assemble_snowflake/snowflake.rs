use std::iter;

use crate::core::actions::stream_commands::command_stream::CommandStream;
use crate::core::data::command::Command;
use crate::core::data::geometry_state::GeometryState;
use crate::core::data::heading::Heading;
use crate::core::data::point::Point;
use crate::core::fractals::koch::curve_spec::CurveSpec;
use crate::core::fractals::koch::errors::KochError;

pub const SIDE_COUNT: usize = 3;
/// Right turn taken after each side; three of them close the figure.
pub const SIDE_TURN_DEGREES: f64 = 120.0;

/// Three Koch sides around an equilateral triangle, walked clockwise.
///
/// Holds only its `CurveSpec` and the starting pose; the sides themselves are
/// produced lazily each time they are asked for.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Snowflake {
    spec: CurveSpec,
    start: GeometryState,
}

impl Snowflake {
    #[must_use]
    pub fn spec(&self) -> CurveSpec {
        self.spec
    }

    /// Pose to jump to, pen up, before the first forward.
    #[must_use]
    pub fn start(&self) -> GeometryState {
        self.start
    }

    /// One fresh stream per side. Each must be followed by `side_turn()`.
    pub fn sides(&self) -> impl Iterator<Item = CommandStream> + use<> {
        let spec = self.spec;
        (0..SIDE_COUNT).map(move |_| CommandStream::new(spec))
    }

    #[must_use]
    pub fn side_turn(&self) -> Command {
        Command::TurnRight(SIDE_TURN_DEGREES)
    }

    /// The whole figure as one flat, lazy sequence: each side followed by its turn.
    pub fn commands(&self) -> impl Iterator<Item = Command> + use<> {
        let turn = self.side_turn();
        self.sides().flat_map(move |side| side.chain(iter::once(turn)))
    }
}

/// The base starts at `(-side/2, -height/3)` facing along +x, with
/// `height = side * sqrt(3) / 2`, so the base is centred horizontally.
#[must_use]
pub fn starting_pose(spec: CurveSpec) -> GeometryState {
    let side_length = spec.side_length();
    let height = 3f64.sqrt() / 2.0 * side_length;

    GeometryState::new(Point::new(-side_length / 2.0, -height / 3.0), Heading::EAST)
}

#[must_use]
pub fn assemble(spec: CurveSpec) -> Snowflake {
    Snowflake {
        spec,
        start: starting_pose(spec),
    }
}

/// Validates the raw parameters, then assembles.
pub fn assemble_snowflake(level: i32, side_length: f64) -> Result<Snowflake, KochError> {
    let spec = CurveSpec::new(level, side_length)?;
    Ok(assemble(spec))
}
