use crate::core::data::colour::Colour;

pub const DEFAULT_LEVEL: i32 = 3;
pub const DEFAULT_SIDE_LENGTH: i64 = 300;
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;
pub const DEFAULT_OUTPUT_PATH: &str = "output/koch_snowflake.ppm";

/// Surface settings shared by the file and window front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KochConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: Colour,
    pub stroke: Colour,
}

impl Default for KochConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            background: Colour::WHITE,
            stroke: Colour::BLACK,
        }
    }
}

impl KochConfig {
    #[must_use]
    pub fn with_canvas(self, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..self
        }
    }
}
