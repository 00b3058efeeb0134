pub mod canvas;
pub mod file;
pub mod path;
#[cfg(feature = "gui")]
pub mod pixels;
