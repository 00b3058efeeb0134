use std::marker::PhantomData;

use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

use crate::controllers::errors::SnowflakeAppError;
use crate::controllers::window::controller::WindowRenderController;
use crate::core::actions::assemble_snowflake::snowflake::assemble_snowflake;
use crate::core::data::pixel_rect::PixelRect;
use crate::input::cli::args::GuiArgs;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::presenter::GuiPresenterPort;

const MIN_WINDOW_SIZE: f64 = 200.0;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self { presenter_factory, _phantom: PhantomData }
    }

    /// Opens the window and blocks until it is closed.
    ///
    /// Arguments are validated before any window exists. A render or
    /// presentation failure is returned once the window closes.
    pub fn execute(&self, args: &GuiArgs) -> Result<(), SnowflakeAppError> {
        let snowflake = assemble_snowflake(args.curve.level, args.curve.side_length())?;
        let config = args.canvas.config();
        PixelRect::with_size(config.canvas_width, config.canvas_height)?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .map_err(|error| SnowflakeAppError::Window(error.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let event_loop_proxy = event_loop.create_proxy();

        let title = format!("Koch Snowflake (level {})", snowflake.spec().level());
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(title.as_str())
                .with_inner_size(LogicalSize::new(
                    f64::from(config.canvas_width),
                    f64::from(config.canvas_height),
                ))
                .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIZE, MIN_WINDOW_SIZE))
                .build(&event_loop)
                .map_err(|error| SnowflakeAppError::Window(error.to_string()))?,
        ));

        let mut presenter: P = self.presenter_factory.build(window, event_loop_proxy, &config)?;
        let mut controller = WindowRenderController::new(presenter.share_adapter());

        info!(
            level = snowflake.spec().level(),
            side_length = snowflake.spec().side_length(),
            "opening window"
        );
        controller.start(snowflake, config);

        let mut failure: Option<SnowflakeAppError> = None;
        let failure_slot = &mut failure;

        event_loop
            .run(move |event, elwt| match event {
                Event::UserEvent(GuiEvent::Wake) => window.request_redraw(),
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        controller.shutdown();
                        keep_first_failure(failure_slot, controller.take_failure());
                        elwt.exit();
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = presenter.resize(size.width, size.height) {
                            error!(%err, "surface resize failed");
                            controller.shutdown();
                            keep_first_failure(
                                failure_slot,
                                Some(SnowflakeAppError::Window(format!("surface resize failed: {err}"))),
                            );
                            elwt.exit();
                            return;
                        }
                        window.request_redraw();
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = presenter.render() {
                            error!(%err, "frame presentation failed");
                            controller.shutdown();
                            keep_first_failure(
                                failure_slot,
                                Some(SnowflakeAppError::Window(format!("frame presentation failed: {err}"))),
                            );
                            elwt.exit();
                            return;
                        }

                        if let Some(message) = presenter.last_error_message() {
                            window.set_title(&format!("{title} - {message}"));
                        }
                    }
                    _ => {}
                },
                _ => {}
            })
            .map_err(|error| SnowflakeAppError::Window(error.to_string()))?;

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Keeps the earliest failure; later ones are usually fallout from it.
fn keep_first_failure(slot: &mut Option<SnowflakeAppError>, failure: Option<SnowflakeAppError>) {
    if slot.is_none() {
        *slot = failure;
    }
}
