//! Equations of uniformly accelerated motion
//!
//! Each axis is integrated on its own; there is no coupling term between x and y.

/// Position after `t` seconds: s = s0 + ut + ½at²
///
/// Negative `t` is accepted and runs the motion backward.
#[inline]
pub fn calc_pos(s0: f64, u: f64, a: f64, t: f64) -> f64 {
    s0 + (u * t + 0.5 * a * t * t)
}

/// Velocity after `t` seconds: v = u + at
#[inline]
pub fn calc_velocity(u: f64, a: f64, t: f64) -> f64 {
    u + a * t
}
