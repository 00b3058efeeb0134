use std::time::{Duration, Instant};

use crate::controllers::errors::SnowflakeAppError;
use crate::core::actions::assemble_snowflake::snowflake::Snowflake;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_snowflake::errors::DrawError;
use crate::core::actions::render_snowflake::render_snowflake::{RenderSummary, render_snowflake};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::koch::koch_config::KochConfig;
use crate::presenters::canvas::renderer::CanvasRenderer;

#[derive(Debug, Clone)]
pub struct CanvasFrame {
    pub buffer: PixelBuffer,
    pub summary: RenderSummary,
    pub render_duration: Duration,
}

/// Streams the whole figure into a fresh canvas sized by `config`.
pub fn render_canvas<C>(
    snowflake: &Snowflake,
    config: &KochConfig,
    cancel: &C,
) -> Result<CanvasFrame, SnowflakeAppError>
where
    C: CancelToken + ?Sized,
{
    let mut renderer = CanvasRenderer::from_config(config)?;
    let start = Instant::now();

    let summary = render_snowflake(snowflake, &mut renderer, cancel)?;
    let buffer = renderer.finish().map_err(DrawError::from)?;

    Ok(CanvasFrame {
        buffer,
        summary,
        render_duration: start.elapsed(),
    })
}
