use tracing::{debug, warn};

use crate::core::actions::assemble_snowflake::snowflake::Snowflake;
use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_COMMANDS, CancelToken, Cancelled};
use crate::core::actions::render_snowflake::errors::DrawError;
use crate::core::actions::render_snowflake::ports::renderer::RendererPort;
use crate::core::actions::stream_commands::command_stream::CommandTally;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RenderSummary {
    pub tally: CommandTally,
    pub sides_rendered: usize,
}

/// Walks the whole figure into `renderer`: one pen-up move to the start,
/// then every side followed by its turn, in order.
///
/// Commands are pulled one at a time, so nothing beyond the generator's own
/// stack is buffered. The first render failure or a cancellation stops the
/// walk and nothing after it is produced.
pub fn render_snowflake<R, C>(
    snowflake: &Snowflake,
    renderer: &mut R,
    cancel: &C,
) -> Result<RenderSummary, DrawError>
where
    R: RendererPort + ?Sized,
    C: CancelToken + ?Sized,
{
    if cancel.is_cancelled() {
        return Err(Cancelled.into());
    }

    renderer.move_to(snowflake.start().position, false)?;

    let mut summary = RenderSummary::default();
    let mut applied = 0usize;

    for side in snowflake.sides() {
        let consumed = side.try_consume(|command| {
            applied += 1;
            if applied % CANCEL_CHECK_INTERVAL_COMMANDS == 0 && cancel.is_cancelled() {
                return Err(DrawError::Cancelled(Cancelled));
            }
            renderer.apply(command).map_err(DrawError::from)
        });

        let side_tally = match consumed {
            Ok(side_tally) => side_tally,
            Err(error) => {
                if matches!(error, DrawError::Cancelled(_)) {
                    warn!(commands_applied = applied, "render cancelled mid-stream");
                }
                return Err(error);
            }
        };

        let turn = snowflake.side_turn();
        renderer.apply(turn)?;

        summary.tally.merge(side_tally);
        summary.tally.record(turn);
        summary.sides_rendered += 1;

        debug!(
            side = summary.sides_rendered,
            forwards = side_tally.forward_count,
            "side rendered"
        );
    }

    Ok(summary)
}
