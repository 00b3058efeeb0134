use std::iter::FusedIterator;

use crate::core::data::command::Command;
use crate::core::data::heading::Heading;
use crate::core::fractals::koch::algorithm::KochCurve;
use crate::core::fractals::koch::curve_spec::CurveSpec;
use crate::core::fractals::koch::measure::command_count;

/// Running totals over the commands that have passed through a stream.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CommandTally {
    pub forward_count: u64,
    pub turn_count: u64,
    pub drawn_length: f64,
    pub net_turn_degrees: f64,
}

impl CommandTally {
    pub fn record(&mut self, command: Command) {
        if command.is_forward() {
            self.forward_count += 1;
        } else {
            self.turn_count += 1;
        }

        self.drawn_length += command.drawn_length();
        self.net_turn_degrees += command.signed_turn();
    }

    pub fn merge(&mut self, other: CommandTally) {
        self.forward_count += other.forward_count;
        self.turn_count += other.turn_count;
        self.drawn_length += other.drawn_length;
        self.net_turn_degrees += other.net_turn_degrees;
    }

    #[must_use]
    pub fn command_count(&self) -> u64 {
        self.forward_count + self.turn_count
    }

    /// Net turning folded into `[0, 360)`.
    #[must_use]
    pub fn net_heading(&self) -> Heading {
        Heading::from_degrees(self.net_turn_degrees)
    }
}

/// The commands for one side of the figure, produced on demand.
///
/// A stream is not `Clone`: it is walked once, in order, by a single consumer.
/// Stopping early simply drops the unproduced remainder.
#[derive(Debug)]
pub struct CommandStream {
    spec: CurveSpec,
    curve: KochCurve,
    tally: CommandTally,
}

impl CommandStream {
    #[must_use]
    pub fn new(spec: CurveSpec) -> Self {
        Self {
            spec,
            curve: KochCurve::new(spec),
            tally: CommandTally::default(),
        }
    }

    #[must_use]
    pub fn spec(&self) -> CurveSpec {
        self.spec
    }

    /// Totals for the commands yielded so far.
    #[must_use]
    pub fn tally(&self) -> CommandTally {
        self.tally
    }

    #[must_use]
    pub fn working_depth(&self) -> usize {
        self.curve.depth()
    }

    /// Feeds every remaining command to `apply`, stopping at the first error.
    pub fn try_consume<E, F>(mut self, mut apply: F) -> Result<CommandTally, E>
    where
        F: FnMut(Command) -> Result<(), E>,
    {
        for command in self.by_ref() {
            apply(command)?;
        }

        Ok(self.tally)
    }
}

impl Iterator for CommandStream {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        let command = self.curve.next()?;
        self.tally.record(command);
        Some(command)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = command_count(self.spec.level())
            .and_then(|total| total.checked_sub(self.tally.command_count()))
            .and_then(|remaining| usize::try_from(remaining).ok());

        match remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for CommandStream {}
