use std::iter::FusedIterator;

use crate::core::actions::stream_commands::command_stream::CommandStream;
use crate::core::data::command::Command;
use crate::core::fractals::koch::curve_spec::CurveSpec;
use crate::core::fractals::koch::errors::KochError;

/// Turn taken on the way into and out of the bump.
pub const OUTWARD_TURN_DEGREES: f64 = 60.0;
/// Turn taken at the tip of the bump.
pub const INWARD_TURN_DEGREES: f64 = 120.0;

#[derive(Debug, Copy, Clone)]
enum MotifStep {
    Subdivide,
    Turn(Command),
}

// One segment becomes four thirds joined by +60, -120, +60. Net turn is zero.
const MOTIF: [MotifStep; 7] = [
    MotifStep::Subdivide,
    MotifStep::Turn(Command::TurnLeft(OUTWARD_TURN_DEGREES)),
    MotifStep::Subdivide,
    MotifStep::Turn(Command::TurnRight(INWARD_TURN_DEGREES)),
    MotifStep::Subdivide,
    MotifStep::Turn(Command::TurnLeft(OUTWARD_TURN_DEGREES)),
    MotifStep::Subdivide,
];

#[derive(Debug, Copy, Clone)]
struct Frame {
    level: u32,
    length: f64,
    next_step: usize,
}

/// Depth-first walk over the Koch subdivision tree, one command per `next`.
///
/// The walk keeps an explicit stack holding at most `level + 1` frames, so
/// memory stays `O(level)` while the output grows as `4^level`, and no call
/// depth limit applies. Dropping the iterator abandons the rest of the curve.
#[derive(Debug, Clone)]
pub struct KochCurve {
    stack: Vec<Frame>,
}

impl KochCurve {
    #[must_use]
    pub fn new(spec: CurveSpec) -> Self {
        let mut stack = Vec::with_capacity(spec.level() as usize + 1);
        stack.push(Frame {
            level: spec.level(),
            length: spec.side_length(),
            next_step: 0,
        });

        Self { stack }
    }

    /// Frames currently held; never exceeds `level + 1`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for KochCurve {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        loop {
            let frame = self.stack.last_mut()?;

            if frame.level == 0 {
                let length = frame.length;
                self.stack.pop();
                return Some(Command::Forward(length));
            }

            let Some(&step) = MOTIF.get(frame.next_step) else {
                self.stack.pop();
                continue;
            };
            frame.next_step += 1;

            match step {
                MotifStep::Turn(command) => return Some(command),
                MotifStep::Subdivide => {
                    let child = Frame {
                        level: frame.level - 1,
                        length: frame.length / 3.0,
                        next_step: 0,
                    };
                    self.stack.push(child);
                }
            }
        }
    }
}

impl FusedIterator for KochCurve {}

/// Validates `(level, length)` and returns the lazy command stream for one side.
pub fn generate(level: i32, length: f64) -> Result<CommandStream, KochError> {
    let spec = CurveSpec::new(level, length)?;
    Ok(CommandStream::new(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::koch::curve_spec::MAX_LEVEL;
    use crate::core::fractals::koch::measure::forward_count;
    use approx::assert_relative_eq;

    fn generate_recursive(level: u32, length: f64, out: &mut Vec<Command>) {
        if level == 0 {
            out.push(Command::Forward(length));
            return;
        }

        let segment = length / 3.0;
        generate_recursive(level - 1, segment, out);
        out.push(Command::TurnLeft(60.0));
        generate_recursive(level - 1, segment, out);
        out.push(Command::TurnRight(120.0));
        generate_recursive(level - 1, segment, out);
        out.push(Command::TurnLeft(60.0));
        generate_recursive(level - 1, segment, out);
    }

    #[test]
    fn test_level_zero_is_single_forward() {
        let commands: Vec<Command> = generate(0, 300.0).unwrap().collect();

        assert_eq!(commands, vec![Command::Forward(300.0)]);
    }

    #[test]
    fn test_level_one_matches_motif() {
        let commands: Vec<Command> = generate(1, 120.0).unwrap().collect();

        assert_eq!(
            commands,
            vec![
                Command::Forward(40.0),
                Command::TurnLeft(60.0),
                Command::Forward(40.0),
                Command::TurnRight(120.0),
                Command::Forward(40.0),
                Command::TurnLeft(60.0),
                Command::Forward(40.0),
            ]
        );
    }

    #[test]
    fn test_matches_direct_recursion() {
        for level in 0..6 {
            let mut expected = Vec::new();
            generate_recursive(level, 243.0, &mut expected);

            let actual: Vec<Command> = generate(level as i32, 243.0).unwrap().collect();

            assert_eq!(actual, expected, "level {}", level);
        }
    }

    #[test]
    fn test_forward_and_turn_counts() {
        for level in 0..8u32 {
            let commands: Vec<Command> = generate(level as i32, 1.0).unwrap().collect();
            let forwards = commands.iter().filter(|c| c.is_forward()).count() as u64;
            let turns = commands.iter().filter(|c| c.is_turn()).count() as u64;

            assert_eq!(forwards, forward_count(level).unwrap());
            assert_eq!(turns, forwards - 1);
        }
    }

    #[test]
    fn test_turns_only_between_forwards() {
        let commands: Vec<Command> = generate(4, 81.0).unwrap().collect();

        assert!(commands.first().unwrap().is_forward());
        assert!(commands.last().unwrap().is_forward());
        assert!(commands.windows(2).all(|pair| pair[0].is_forward() != pair[1].is_forward()));
    }

    #[test]
    fn test_net_turn_is_zero_at_every_level() {
        for level in 0..8 {
            let net: f64 = generate(level, 10.0).unwrap().map(|c| c.signed_turn()).sum();

            assert_eq!(net, 0.0, "level {}", level);
        }
    }

    #[test]
    fn test_segments_are_one_third_per_level() {
        let lengths: Vec<f64> = generate(3, 270.0)
            .unwrap()
            .filter_map(|c| match c {
                Command::Forward(length) => Some(length),
                _ => None,
            })
            .collect();

        assert_eq!(lengths.len(), 64);
        for length in lengths {
            assert_relative_eq!(length, 10.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first: Vec<Command> = generate(5, 123.456).unwrap().collect();
        let second: Vec<Command> = generate(5, 123.456).unwrap().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_arguments_produce_no_stream() {
        assert_eq!(generate(-1, 300.0).err(), Some(KochError::NegativeLevel(-1)));
        assert_eq!(generate(2, 0.0).err(), Some(KochError::NonPositiveSideLength(0.0)));
    }

    #[test]
    fn test_unbounded_level_is_rejected_before_allocating() {
        assert_eq!(
            generate(i32::MAX, 300.0).err(),
            Some(KochError::LevelTooHigh { level: i32::MAX, max: MAX_LEVEL })
        );
    }

    #[test]
    fn test_deepest_level_starts_with_positive_forward() {
        let mut stream = generate(MAX_LEVEL as i32, 300.0).unwrap();

        match stream.next() {
            Some(Command::Forward(length)) => assert!(length > 0.0),
            other => panic!("expected a forward, got {other:?}"),
        }
        assert_eq!(stream.working_depth(), MAX_LEVEL as usize);
    }

    #[test]
    fn test_stack_depth_is_bounded_by_level() {
        let level = 10;
        let mut curve = KochCurve::new(CurveSpec::new(level, 300.0).unwrap());
        let mut forwards = 0u64;
        let mut max_depth = curve.depth();

        while let Some(command) = curve.next() {
            if command.is_forward() {
                forwards += 1;
            }
            max_depth = max_depth.max(curve.depth());
        }

        assert_eq!(forwards, 1 << 20); // 4^10
        assert!(max_depth <= level as usize + 1);
        assert_eq!(curve.depth(), 0);
        assert_eq!(curve.next(), None);
    }

    #[test]
    fn test_early_termination_leaves_rest_unproduced() {
        let mut curve = KochCurve::new(CurveSpec::new(12, 300.0).unwrap());

        let first: Vec<Command> = curve.by_ref().take(5).collect();

        assert_eq!(first.len(), 5);
        assert!(curve.depth() <= 13);
    }
}
