pub mod colour;
pub mod command;
pub mod geometry_state;
pub mod heading;
pub mod pixel_buffer;
pub mod pixel_point;
pub mod pixel_rect;
pub mod point;
