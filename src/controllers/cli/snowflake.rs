use std::path::Path;

use tracing::info;

use crate::controllers::errors::SnowflakeAppError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render_canvas::{CanvasFrame, render_canvas};
use crate::core::actions::assemble_snowflake::snowflake::assemble_snowflake;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_snowflake::render_snowflake::RenderSummary;
use crate::core::fractals::koch::koch_config::KochConfig;

pub struct SnowflakeCliController<P: FilePresenterPort> {
    presenter: P,
    config: KochConfig,
    frame: Option<CanvasFrame>,
}

impl<P: FilePresenterPort> SnowflakeCliController<P> {
    pub fn new(presenter: P, config: KochConfig) -> Self {
        Self {
            presenter,
            config,
            frame: None,
        }
    }

    pub fn generate(&mut self, level: i32, side_length: f64) -> Result<RenderSummary, SnowflakeAppError> {
        let snowflake = assemble_snowflake(level, side_length)?;

        info!(
            level,
            side_length,
            width = self.config.canvas_width,
            height = self.config.canvas_height,
            "rendering Koch snowflake"
        );

        let frame = render_canvas(&snowflake, &self.config, &NeverCancel)?;
        let summary = frame.summary;

        info!(
            forwards = summary.tally.forward_count,
            drawn_length = summary.tally.drawn_length,
            duration = ?frame.render_duration,
            "render finished"
        );

        self.frame = Some(frame);
        Ok(summary)
    }

    pub fn write(&self, filepath: &Path) -> Result<(), SnowflakeAppError> {
        if let Some(frame) = &self.frame {
            self.presenter
                .present(&frame.buffer, filepath)
                .map_err(|source| SnowflakeAppError::Output {
                    path: filepath.to_path_buf(),
                    source,
                })?;

            info!(path = %filepath.display(), "saved");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    #[derive(Default)]
    struct StubPresenter {
        presented: RefCell<Vec<(PathBuf, u32, u32)>>,
        fail: bool,
    }

    impl FilePresenterPort for StubPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.presented.borrow_mut().push((
                filepath.to_path_buf(),
                buffer.pixel_rect().width(),
                buffer.pixel_rect().height(),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_generate_then_write() {
        let mut controller = SnowflakeCliController::new(StubPresenter::default(), KochConfig::default());

        let summary = controller.generate(1, 120.0).unwrap();
        controller.write(Path::new("out/flake.ppm")).unwrap();

        assert_eq!(summary.tally.drawn_length, 480.0);
        assert_eq!(
            *controller.presenter.presented.borrow(),
            vec![(PathBuf::from("out/flake.ppm"), 800, 800)]
        );
    }

    #[test]
    fn test_write_without_frame_does_nothing() {
        let controller = SnowflakeCliController::new(StubPresenter::default(), KochConfig::default());

        controller.write(Path::new("unused.ppm")).unwrap();

        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_invalid_level_renders_nothing() {
        let mut controller = SnowflakeCliController::new(StubPresenter::default(), KochConfig::default());

        let error = controller.generate(-1, 300.0).unwrap_err();
        controller.write(Path::new("unused.ppm")).unwrap();

        assert!(error.is_invalid_argument());
        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_zero_size_is_invalid_argument() {
        let mut controller = SnowflakeCliController::new(StubPresenter::default(), KochConfig::default());

        let error = controller.generate(3, 0.0).unwrap_err();

        assert!(error.is_invalid_argument());
        assert_eq!(
            error.to_string(),
            "invalid argument: side length must be greater than zero, got 0"
        );
    }

    #[test]
    fn test_presenter_failure_is_output_error() {
        let presenter = StubPresenter {
            fail: true,
            ..StubPresenter::default()
        };
        let mut controller = SnowflakeCliController::new(presenter, KochConfig::default());

        controller.generate(0, 100.0).unwrap();
        let error = controller.write(Path::new("locked.ppm")).unwrap_err();

        assert!(matches!(error, SnowflakeAppError::Output { .. }));
        assert_eq!(error.to_string(), "failed to write locked.ppm: read-only");
    }
}
