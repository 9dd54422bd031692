//! Easing functions mapping linear progress to eased progress.

/// Cubic ease-in-out: slow start, fast middle, slow arrival.
///
/// Maps `[0, 1]` onto `[0, 1]` monotonically with `f(0) = 0`, `f(0.5) = 0.5`
/// and `f(1) = 1`.  Both endpoints are reproduced exactly in floating point.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
