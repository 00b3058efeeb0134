use std::fmt;

use crate::core::data::point::Point;

const FULL_TURN_DEGREES: f64 = 360.0;

/// Maps any angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(FULL_TURN_DEGREES);

    // rem_euclid rounds tiny negative inputs up to exactly 360
    if normalized >= FULL_TURN_DEGREES {
        0.0
    } else {
        normalized
    }
}

/// Direction of travel in degrees, counter-clockwise from the positive x axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Heading(f64);

impl Heading {
    pub const EAST: Self = Self(0.0);

    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(normalize_degrees(degrees))
    }

    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn rotated(self, delta_degrees: f64) -> Self {
        Self::from_degrees(self.0 + delta_degrees)
    }

    #[must_use]
    pub fn unit_vector(self) -> Point {
        let radians = self.0.to_radians();
        Point::new(radians.cos(), radians.sin())
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
