use crate::core::fractals::koch::errors::KochError;

/// Deepest accepted level. One side then holds `4^31` forwards, the most a `u64` tally can count.
pub const MAX_LEVEL: u32 = 31;

/// Validated input to curve generation: `0 <= level <= MAX_LEVEL` and a finite
/// `side_length > 0` whose segments stay above zero after `level` divisions by three.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveSpec {
    level: u32,
    side_length: f64,
}

impl CurveSpec {
    pub fn new(level: i32, side_length: f64) -> Result<Self, KochError> {
        let Ok(depth) = u32::try_from(level) else {
            return Err(KochError::NegativeLevel(level));
        };

        if depth > MAX_LEVEL {
            return Err(KochError::LevelTooHigh { level, max: MAX_LEVEL });
        }

        if !side_length.is_finite() {
            return Err(KochError::NonFiniteSideLength(side_length));
        }

        if side_length <= 0.0 {
            return Err(KochError::NonPositiveSideLength(side_length));
        }

        let segment_length = (0..depth).fold(side_length, |length, _| length / 3.0);
        if segment_length <= 0.0 {
            return Err(KochError::SideLengthTooShort { side_length, level: depth });
        }

        Ok(Self {
            level: depth,
            side_length,
        })
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}
