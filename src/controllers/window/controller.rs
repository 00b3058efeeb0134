use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use crate::controllers::errors::SnowflakeAppError;
use crate::controllers::render_canvas::render_canvas;
use crate::controllers::window::events::FrameEvent;
use crate::controllers::window::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::assemble_snowflake::snowflake::Snowflake;
use crate::core::actions::cancellation::CancelFlag;
use crate::core::actions::render_snowflake::errors::DrawError;
use crate::core::fractals::koch::koch_config::KochConfig;

/// Renders one snowflake off the UI thread and hands the result to a presenter.
///
/// The render can be cancelled at any time; a cancelled render presents nothing.
/// A failed render is presented as a message and kept until `take_failure`.
pub struct WindowRenderController {
    presenter_port: Arc<dyn FramePresenterPort>,
    cancel: CancelFlag,
    worker: Option<JoinHandle<()>>,
    failure: Arc<Mutex<Option<SnowflakeAppError>>>,
}

impl WindowRenderController {
    pub fn new(presenter_port: Arc<dyn FramePresenterPort>) -> Self {
        Self {
            presenter_port,
            cancel: CancelFlag::new(),
            worker: None,
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Starts rendering, stopping any render already in flight first.
    pub fn start(&mut self, snowflake: Snowflake, config: KochConfig) {
        self.shutdown();

        let cancel = CancelFlag::new();
        let worker_cancel = cancel.clone();
        let presenter_port = Arc::clone(&self.presenter_port);
        let failure = Arc::clone(&self.failure);

        self.cancel = cancel;
        self.worker = Some(thread::spawn(move || {
            if let Err(error) =
                Self::render_job(&snowflake, &config, &worker_cancel, presenter_port.as_ref())
            {
                if let Ok(mut slot) = failure.lock() {
                    if slot.is_none() {
                        *slot = Some(error);
                    }
                }
            }
        }));
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancels the current render and waits for the worker to exit.
    pub fn shutdown(&mut self) {
        self.cancel();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// First render failure since the last call. Cancellation is not a failure.
    pub fn take_failure(&self) -> Option<SnowflakeAppError> {
        self.failure.lock().ok().and_then(|mut slot| slot.take())
    }

    fn render_job(
        snowflake: &Snowflake,
        config: &KochConfig,
        cancel: &CancelFlag,
        presenter_port: &dyn FramePresenterPort,
    ) -> Result<(), SnowflakeAppError> {
        match render_canvas(snowflake, config, cancel) {
            Ok(frame) => {
                info!(
                    level = snowflake.spec().level(),
                    forwards = frame.summary.tally.forward_count,
                    duration = ?frame.render_duration,
                    "window frame ready"
                );
                presenter_port.present(FrameEvent::Frame(frame));
                Ok(())
            }
            Err(SnowflakeAppError::Draw(DrawError::Cancelled(_))) => {
                debug!("window render cancelled");
                Ok(())
            }
            Err(error) => {
                presenter_port.present(FrameEvent::Error(error.to_string()));
                Err(error)
            }
        }
    }
}

impl Drop for WindowRenderController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
