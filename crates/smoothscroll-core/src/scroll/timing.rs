//! Time calculation utilities for scroll animations
//!
//! Time is host milliseconds as `f64`, the unit `requestAnimationFrame` and
//! `performance.now()` use.

/// Elapsed fraction of an animation, clamped to [0.0, 1.0]
///
/// A zero duration counts as already finished.
#[inline]
pub fn elapsed_fraction(start_time: f64, now: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now - start_time) / duration_ms).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
///
/// At `t >= 1.0` the result is exactly `to`; `from + (to - from)` alone can be
/// off by one ulp and would keep the animation from ever matching its target.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    if t >= 1.0 {
        return to;
    }
    from + (to - from) * t
}
