#[cfg(feature = "gui")]
mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::core::actions::assemble_snowflake::snowflake::{
    SIDE_COUNT, SIDE_TURN_DEGREES, Snowflake, assemble, assemble_snowflake, starting_pose,
};
pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_COMMANDS, CancelFlag, CancelToken, Cancelled, NeverCancel,
};
pub use crate::core::actions::render_snowflake::errors::{DrawError, RenderFailure};
pub use crate::core::actions::render_snowflake::ports::renderer::RendererPort;
pub use crate::core::actions::render_snowflake::render_snowflake::{RenderSummary, render_snowflake};
pub use crate::core::actions::stream_commands::command_stream::{CommandStream, CommandTally};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::command::Command;
pub use crate::core::data::geometry_state::GeometryState;
pub use crate::core::data::heading::{Heading, normalize_degrees};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_point::PixelPoint;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::koch::algorithm::{
    INWARD_TURN_DEGREES, KochCurve, OUTWARD_TURN_DEGREES, generate,
};
pub use crate::core::fractals::koch::curve_spec::{CurveSpec, MAX_LEVEL};
pub use crate::core::fractals::koch::errors::KochError;
pub use crate::core::fractals::koch::koch_config::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_LEVEL, DEFAULT_OUTPUT_PATH,
    DEFAULT_SIDE_LENGTH, KochConfig,
};
pub use crate::core::fractals::koch::measure;

pub use controllers::cli::snowflake::SnowflakeCliController;
pub use controllers::errors::SnowflakeAppError;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::render_canvas::{CanvasFrame, render_canvas};
pub use controllers::window::controller::WindowRenderController;
pub use controllers::window::events::FrameEvent;
pub use controllers::window::ports::frame_presenter::FramePresenterPort;

pub use input::cli::args::{CanvasArgs, CliArgs, CurveArgs, GuiArgs};
pub use input::cli::commands::run_cli::RunCliCommand;
pub use input::logging::init_tracing;

pub use presenters::canvas::renderer::CanvasRenderer;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::path::recorder::PathRecorder;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
