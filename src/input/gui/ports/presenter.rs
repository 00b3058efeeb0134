use std::sync::Arc;

use crate::controllers::window::ports::frame_presenter::FramePresenterPort;

pub trait GuiPresenterPort {
    fn render(&mut self) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn FramePresenterPort>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    fn last_error_message(&self) -> Option<&str>;
}
