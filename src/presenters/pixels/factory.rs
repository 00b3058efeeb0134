use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::errors::SnowflakeAppError;
use crate::core::fractals::koch::koch_config::KochConfig;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        config: &KochConfig,
    ) -> Result<PixelsPresenter, SnowflakeAppError> {
        PixelsPresenter::new(window, event_loop_proxy, config)
            .map_err(|error| SnowflakeAppError::Window(error.to_string()))
    }
}
