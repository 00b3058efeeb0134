//! Input adapters for the snowflake renderer.
//!
//! Each adapter parses its own surface (command line or window events)
//! and drives a controller.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod logging;
