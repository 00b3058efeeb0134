use thiserror::Error;

/// Rejected curve parameters. Raised before any command is produced.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum KochError {
    #[error("level must be non-negative, got {0}")]
    NegativeLevel(i32),
    #[error("level must be at most {max}, got {level}")]
    LevelTooHigh { level: i32, max: u32 },
    #[error("side length must be greater than zero, got {0}")]
    NonPositiveSideLength(f64),
    #[error("side length must be a finite number, got {0}")]
    NonFiniteSideLength(f64),
    #[error("side length {side_length} is too short to subdivide {level} times")]
    SideLengthTooShort { side_length: f64, level: u32 },
}

impl KochError {
    /// Every variant is an invalid-argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NegativeLevel(_)
                | Self::LevelTooHigh { .. }
                | Self::NonPositiveSideLength(_)
                | Self::NonFiniteSideLength(_)
                | Self::SideLengthTooShort { .. }
        )
    }
}
