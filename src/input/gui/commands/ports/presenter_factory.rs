use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::errors::SnowflakeAppError;
use crate::core::fractals::koch::koch_config::KochConfig;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        config: &KochConfig,
    ) -> Result<T, SnowflakeAppError>;
}
