//! Code useful for multiple backends

use crate::GradientStop;

/// Tolerance used when flattening the boundary of a radial gradient into a
/// path.
pub const PATH_TOLERANCE: f64 = 1e-3;

/// Counts the distinct positions in a run of stops sorted by position.
///
/// Positions are compared by their IEEE total order, the same order
/// [`GradientStopSet::sorted`] uses, so repeated NaNs count once.
///
/// [`GradientStopSet::sorted`]: crate::GradientStopSet::sorted
pub fn distinct_positions(sorted: &[GradientStop]) -> usize {
    let mut count = 0;
    let mut last: Option<f64> = None;
    for stop in sorted {
        if last.map_or(true, |last| last.total_cmp(&stop.pos).is_ne()) {
            count += 1;
            last = Some(stop.pos);
        }
    }
    count
}

/// Clamps a stop position into the 0..=1 range that offset-based
/// primitives (SVG, cairo) accept.
pub fn clamp_offset(pos: f64) -> f64 {
    if pos.is_nan() {
        0.0
    } else {
        pos.max(0.0).min(1.0)
    }
}
