pub mod clip_segment;
