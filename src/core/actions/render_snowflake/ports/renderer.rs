use crate::core::actions::render_snowflake::errors::RenderFailure;
use crate::core::data::command::Command;
use crate::core::data::point::Point;

/// A drawing backend that consumes commands in stream order.
///
/// Implementors own their pose. `forward` must advance it exactly as
/// `GeometryState::apply_forward` does and the turns must rotate it like
/// `apply_turn_left` / `apply_turn_right`. A fresh renderer faces 0°.
pub trait RendererPort {
    fn move_to(&mut self, point: Point, drawing: bool) -> Result<(), RenderFailure>;
    fn forward(&mut self, length: f64) -> Result<(), RenderFailure>;
    fn turn_left(&mut self, angle: f64) -> Result<(), RenderFailure>;
    fn turn_right(&mut self, angle: f64) -> Result<(), RenderFailure>;

    fn apply(&mut self, command: Command) -> Result<(), RenderFailure> {
        match command {
            Command::Forward(length) => self.forward(length),
            Command::TurnLeft(angle) => self.turn_left(angle),
            Command::TurnRight(angle) => self.turn_right(angle),
        }
    }
}
