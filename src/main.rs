use std::process::ExitCode;

use clap::Parser;

use koch_snowflake::{CliArgs, PpmFilePresenter, RunCliCommand, init_tracing};

fn main() -> ExitCode {
    init_tracing();

    let args = CliArgs::parse();
    let command = RunCliCommand::new(PpmFilePresenter::new());

    match command.execute(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Failed to draw snowflake: {error}");
            ExitCode::FAILURE
        }
    }
}
