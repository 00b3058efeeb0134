use std::path::PathBuf;

use clap::{Args, Parser};

use crate::core::fractals::koch::koch_config::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_LEVEL, DEFAULT_OUTPUT_PATH,
    DEFAULT_SIDE_LENGTH, KochConfig,
};

/// Curve parameters. Negative values parse here and are rejected by `CurveSpec`.
#[derive(Debug, Clone, Copy, PartialEq, Args)]
pub struct CurveArgs {
    /// Recursion level (0 to 31)
    #[arg(default_value_t = DEFAULT_LEVEL, allow_negative_numbers = true)]
    pub level: i32,

    /// Side length of the base triangle, in pixels
    #[arg(long, default_value_t = DEFAULT_SIDE_LENGTH, allow_negative_numbers = true)]
    pub size: i64,
}

impl CurveArgs {
    #[must_use]
    pub fn side_length(&self) -> f64 {
        self.size as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Args)]
pub struct CanvasArgs {
    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,
}

impl CanvasArgs {
    #[must_use]
    pub fn config(&self) -> KochConfig {
        KochConfig::default().with_canvas(self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "koch_snowflake", version, about = "Draw a Koch snowflake to a PPM image")]
pub struct CliArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Where to write the image; missing directories are created
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "gui", version, about = "Draw a Koch snowflake in a window")]
pub struct GuiArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}
