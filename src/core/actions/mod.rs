pub mod assemble_snowflake;
pub mod cancellation;
pub mod render_snowflake;
pub mod stream_commands;
