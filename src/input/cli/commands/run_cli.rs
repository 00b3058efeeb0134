use crate::controllers::cli::snowflake::SnowflakeCliController;
use crate::controllers::errors::SnowflakeAppError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_snowflake::render_snowflake::RenderSummary;
use crate::input::cli::args::CliArgs;

pub struct RunCliCommand<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> RunCliCommand<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn execute(self, args: &CliArgs) -> Result<RenderSummary, SnowflakeAppError> {
        let mut controller = SnowflakeCliController::new(self.presenter, args.canvas.config());

        let summary = controller.generate(args.curve.level, args.curve.side_length())?;
        controller.write(&args.output)?;

        Ok(summary)
    }
}
