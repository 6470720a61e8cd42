// src/sweep/axis.rs

//! Arithmetic sample axes for parameter sweeps.
//!
//! Every sweep axis is materialised through [`inclusive_range`], which treats the
//! stop bound as inclusive: enumeration runs `start, start + step, ...` up to and
//! including the first point that reaches `stop`.  For a `stop` that lands exactly
//! on a step boundary this yields `stop` itself; for one that does not, the last
//! point overshoots it by less than one step.

/// Slack for floating-point step counts such as `(1.0 - 0.1) / 0.1 = 9.000000000000002`.
const RANGE_EPSILON: f64 = 1e-9;

/// Largest axis [`inclusive_range`] will materialise.
pub const MAX_AXIS_POINTS: usize = 10_000_000;

/// Ascending points `start + i * step` for `i = 0..n`, where `n` is the smallest
/// count whose last point is `>= stop`.
///
/// Degenerate inputs never fail:
/// - `step <= 0` or any non-finite bound gives an empty sequence
/// - `stop <= start - step` gives an empty sequence
/// - `start - step < stop <= start` gives the single point `start`
/// - more than [`MAX_AXIS_POINTS`] points, including spans too wide to count in
///   `f64` such as `-1e308..1e308`, gives an empty sequence
///
/// The step count carries a slack of `1e-9` steps, so a `stop` less than a
/// billionth of a step past a boundary is treated as on it: `(0, 1 + 1e-12, 1)`
/// gives `[0, 1]`, not `[0, 1, 2]`.
pub fn inclusive_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }

    let count = ((stop - start) / step + 1.0 - RANGE_EPSILON).ceil();
    if count <= 0.0 || !count.is_finite() || count > MAX_AXIS_POINTS as f64 {
        return Vec::new();
    }

    (0..count as usize)
        .map(|i| start + i as f64 * step)
        .collect()
}

/// `{ start, stop, step }` description of one sweep dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepAxis {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl SweepAxis {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Sample points, see [`inclusive_range`].
    pub fn values(&self) -> Vec<f64> {
        inclusive_range(self.start, self.stop, self.step)
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same axis with every bound divided by 100, e.g. vol percent to decimal.
    pub fn percent_to_decimal(&self) -> Self {
        Self {
            start: self.start / 100.0,
            stop: self.stop / 100.0,
            step: self.step / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_stop_on_step_boundary() {
        assert_eq!(
            inclusive_range(40.0, 70.0, 5.0),
            vec![40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0]
        );
    }

    #[test]
    fn overshoots_stop_off_boundary() {
        let v = inclusive_range(40.0, 72.0, 5.0);
        assert_eq!(v.len(), 8);
        assert_eq!(*v.last().unwrap(), 75.0);
    }

    #[test]
    fn decimal_steps_do_not_gain_an_extra_point() {
        let v = inclusive_range(0.1, 1.0, 0.1);
        assert_eq!(v.len(), 10);
        assert!((v[9] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_ranges() {
        assert!(inclusive_range(70.0, 40.0, 5.0).is_empty());
        assert!(inclusive_range(40.0, 70.0, 0.0).is_empty());
        assert!(inclusive_range(40.0, 70.0, -5.0).is_empty());
        assert!(inclusive_range(f64::NAN, 70.0, 5.0).is_empty());
        assert_eq!(inclusive_range(50.0, 50.0, 5.0), vec![50.0]);
        assert_eq!(inclusive_range(70.0, 68.0, 5.0), vec![70.0]);
    }

    #[test]
    fn overflowing_span_is_empty() {
        assert!(inclusive_range(-1e308, 1e308, 1.0).is_empty());
        assert!(SweepAxis::new(-f64::MAX, f64::MAX, 1e-300).is_empty());
        assert!(inclusive_range(0.0, 1e18, 1.0).is_empty());
    }

    #[test]
    fn sub_epsilon_overshoot_counts_as_boundary() {
        assert_eq!(inclusive_range(0.0, 1.0 + 1e-12, 1.0), vec![0.0, 1.0]);
        assert_eq!(inclusive_range(0.0, 1.0 + 1e-6, 1.0), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn percent_axis_converts_bounds() {
        let axis = SweepAxis::new(10.0, 100.0, 10.0).percent_to_decimal();
        assert_eq!(axis.start, 0.1);
        assert_eq!(axis.stop, 1.0);
        assert_eq!(axis.step, 0.1);
    }
}
