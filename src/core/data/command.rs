use std::fmt;

/// A single relative motion instruction. Carries no positional state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Forward(f64),
    TurnLeft(f64),
    TurnRight(f64),
}

impl Command {
    #[must_use]
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward(_))
    }

    #[must_use]
    pub fn is_turn(&self) -> bool {
        !self.is_forward()
    }

    /// Heading change in degrees: positive for left turns, negative for right turns.
    #[must_use]
    pub fn signed_turn(&self) -> f64 {
        match *self {
            Self::Forward(_) => 0.0,
            Self::TurnLeft(angle) => angle,
            Self::TurnRight(angle) => -angle,
        }
    }

    #[must_use]
    pub fn drawn_length(&self) -> f64 {
        match *self {
            Self::Forward(length) => length,
            Self::TurnLeft(_) | Self::TurnRight(_) => 0.0,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward(length) => write!(f, "forward {}", length),
            Self::TurnLeft(angle) => write!(f, "left {}", angle),
            Self::TurnRight(angle) => write!(f, "right {}", angle),
        }
    }
}
