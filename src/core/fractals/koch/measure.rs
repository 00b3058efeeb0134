use crate::core::fractals::koch::curve_spec::CurveSpec;

/// Forward commands in one side: `4^level`. `None` once it no longer fits in a `u64`.
#[must_use]
pub fn forward_count(level: u32) -> Option<u64> {
    4u64.checked_pow(level)
}

/// Turn commands in one side: one between each pair of consecutive forwards.
#[must_use]
pub fn turn_count(level: u32) -> Option<u64> {
    forward_count(level).map(|forwards| forwards - 1)
}

#[must_use]
pub fn command_count(level: u32) -> Option<u64> {
    let forwards = forward_count(level)?;
    forwards.checked_add(forwards - 1)
}

/// Length of every forward in one side, divided by three once per level the
/// same way the generator does it.
#[must_use]
pub fn segment_length(spec: CurveSpec) -> f64 {
    (0..spec.level()).fold(spec.side_length(), |length, _| length / 3.0)
}

/// Drawn length of one side: `side_length * (4/3)^level`.
#[must_use]
pub fn side_drawn_length(spec: CurveSpec) -> f64 {
    4f64.powf(spec.level() as f64) * segment_length(spec)
}

#[must_use]
pub fn perimeter(spec: CurveSpec) -> f64 {
    3.0 * side_drawn_length(spec)
}
