//! Window front end.
//!
//! Uses winit for the window and event loop and pixels for the framebuffer.
//! The snowflake is rendered once on a worker thread and shown when ready.

pub mod commands;
pub mod events;
pub mod ports;
