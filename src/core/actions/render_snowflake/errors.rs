use thiserror::Error;

use crate::core::actions::cancellation::Cancelled;
use crate::core::fractals::koch::errors::KochError;

/// A backend could not apply a command. Consumption stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RenderFailure {
    message: String,
}

impl RenderFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] KochError),
    #[error("render failure: {0}")]
    Render(#[from] RenderFailure),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}
