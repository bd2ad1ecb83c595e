//! Cosine ease-in-out used by the manual animation
//!
//! Maps an elapsed fraction in [0, 1] to a progress fraction in [0, 1]:
//! `f(k) = 0.5 * (1 - cos(πk))`.

use std::f64::consts::PI;

/// Apply the easing curve to an elapsed fraction
///
/// Input is clamped to [0, 1]. `ease(1.0)` is exactly `1.0`, which is what
/// lets the animation land on its destination without an epsilon check.
#[inline]
pub fn ease(k: f64) -> f64 {
    let k = k.clamp(0.0, 1.0);
    0.5 * (1.0 - (PI * k).cos())
}
