use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::actions::render_snowflake::errors::DrawError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fractals::koch::errors::KochError;

/// Everything a front end can report before exiting non-zero.
#[derive(Debug, Error)]
pub enum SnowflakeAppError {
    #[error(transparent)]
    Draw(#[from] DrawError),
    #[error("invalid canvas: {0}")]
    Canvas(#[from] PixelRectError),
    #[error("failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[cfg(feature = "gui")]
    #[error("window error: {0}")]
    Window(String),
}

impl From<KochError> for SnowflakeAppError {
    fn from(error: KochError) -> Self {
        Self::Draw(DrawError::InvalidArgument(error))
    }
}

impl SnowflakeAppError {
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Draw(DrawError::InvalidArgument(_)))
    }
}
