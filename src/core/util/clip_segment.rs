/// Axis-aligned clip window in continuous pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipWindow {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Liang-Barsky clip of the segment `from -> to` against `window`.
///
/// Returns the visible part as `(from, to)` pairs of `(x, y)`, or `None` when
/// the segment misses the window entirely.
#[must_use]
pub fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    window: ClipWindow,
) -> Option<((f64, f64), (f64, f64))> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let mut t_enter = 0.0f64;
    let mut t_exit = 1.0f64;

    let edges = [
        (-dx, from.0 - window.min_x),
        (dx, window.max_x - from.0),
        (-dy, from.1 - window.min_y),
        (dy, window.max_y - from.1),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }

        if t_enter > t_exit {
            return None;
        }
    }

    Some((
        (from.0 + t_enter * dx, from.1 + t_enter * dy),
        (from.0 + t_exit * dx, from.1 + t_exit * dy),
    ))
}
