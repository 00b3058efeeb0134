pub mod cli;
pub mod errors;
pub mod ports;
pub mod render_canvas;
pub mod window;
