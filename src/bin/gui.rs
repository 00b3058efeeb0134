use std::process::ExitCode;

use clap::Parser;

use koch_snowflake::{GuiArgs, PixelsPresenterFactory, RunGuiCommand, init_tracing};

fn main() -> ExitCode {
    init_tracing();

    let args = GuiArgs::parse();
    let command = RunGuiCommand::new(PixelsPresenterFactory::new());

    match command.execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Failed to draw snowflake: {error}");
            ExitCode::FAILURE
        }
    }
}
