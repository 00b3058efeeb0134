use rayon::prelude::*;
use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::pixel_rect::PixelRect;

const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of canvas {}x{}", .pixel.x, .pixel.y, .pixel_rect.width(), .pixel_rect.height())]
    PixelOutsideBounds {
        pixel: PixelPoint,
        pixel_rect: PixelRect,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB raster, row-major from the top-left corner.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    #[must_use]
    pub fn filled(pixel_rect: PixelRect, colour: Colour) -> Self {
        let mut buffer = Self::new(pixel_rect);
        buffer.fill(colour);
        buffer
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn fill(&mut self, colour: Colour) {
        self.buffer
            .par_chunks_exact_mut(BYTES_PER_PIXEL)
            .for_each(|pixel| {
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            });
    }

    fn index_of(&self, pixel: PixelPoint) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x as i64 - self.pixel_rect.top_left().x as i64) as usize;
        let relative_y = (pixel.y as i64 - self.pixel_rect.top_left().y as i64) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: PixelPoint, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: PixelPoint) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    #[must_use]
    pub fn count_pixels(&self, colour: Colour) -> usize {
        self.buffer
            .par_chunks_exact(BYTES_PER_PIXEL)
            .filter(|pixel| pixel[0] == colour.r && pixel[1] == colour.g && pixel[2] == colour.b)
            .count()
    }
}
