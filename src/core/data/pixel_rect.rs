use thiserror::Error;

use crate::core::data::pixel_point::PixelPoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("canvas must be at least 2x2 pixels, got {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Inclusive pixel bounds of a drawing surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: PixelPoint,
    bottom_right: PixelPoint,
}

impl PixelRect {
    pub fn new(top_left: PixelPoint, bottom_right: PixelPoint) -> Result<Self, PixelRectError> {
        let width = (bottom_right.x as i64) - (top_left.x as i64) + 1;
        let height = (bottom_right.y as i64) - (top_left.y as i64) + 1;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A rect anchored at the origin with the given dimensions.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < 2 || height < 2 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::InvalidSize {
                width: width as i64,
                height: height as i64,
            });
        }

        Self::new(
            PixelPoint { x: 0, y: 0 },
            PixelPoint {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> PixelPoint {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> PixelPoint {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x as i64 - self.top_left.x as i64 + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y as i64 - self.top_left.y as i64 + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: PixelPoint) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}
