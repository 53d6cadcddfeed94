//! Angle helpers for facing calculations.
//!
//! All angles are radians. Anything compared or interpolated is first folded
//! into the half-open range `(-π, π]` so turns never jump at the wrap
//! boundary.
use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Folds `angle` into `(-π, π]`.
///
/// Angles already in range come back bit-for-bit unchanged. Non-finite input
/// yields `0.0` so a bad sample can never poison the model matrix.
///
/// # Examples
/// ```
/// use facing::angle::normalize;
/// use std::f32::consts::PI;
/// assert!((normalize(3.0 * PI) - PI).abs() < 1e-5);
/// assert!((normalize(-PI) - PI).abs() < 1e-5);
/// ```
#[must_use]
pub fn normalize(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    if angle > -PI && angle <= PI {
        return angle;
    }
    // rem_euclid lands in [0, 2π); shifting by π maps onto [-π, π).
    let folded = (angle + PI).rem_euclid(TAU) - PI;
    if folded <= -PI {
        folded + TAU
    } else {
        folded
    }
}

/// Returns the signed turn from `current` to `target` along the shorter arc.
///
/// The result lies in `[-π, π]`.
#[must_use]
pub fn shortest_delta(current: f32, target: f32) -> f32 {
    let delta = normalize(target) - normalize(current);
    if delta > PI {
        delta - TAU
    } else if delta < -PI {
        delta + TAU
    } else {
        delta
    }
}

/// Moves `current` towards `target` by `factor` of the shortest arc.
///
/// `factor` is clamped to `[0, 1]`: `1.0` snaps to `target`, `0.0` holds
/// `current`. The result is normalised.
///
/// # Examples
/// ```
/// use facing::angle::lerp_shortest;
/// use std::f32::consts::PI;
/// // Crossing the wrap boundary turns through the short side.
/// let halfway = lerp_shortest(0.9 * PI, -0.9 * PI, 0.5);
/// assert!((halfway.abs() - PI).abs() < 1e-4);
/// ```
#[must_use]
pub fn lerp_shortest(current: f32, target: f32, factor: f32) -> f32 {
    let factor = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };
    if factor >= 1.0 {
        return normalize(target);
    }
    normalize(normalize(current) + shortest_delta(current, target) * factor)
}

/// Returns the direction of `tangent` as `atan2(dy, dx)`.
///
/// A zero or non-finite tangent has no direction; it maps to `0.0`.
#[must_use]
pub fn heading(tangent: Vec2) -> f32 {
    if !tangent.is_finite() || tangent == Vec2::ZERO {
        return 0.0;
    }
    tangent.y.atan2(tangent.x)
}
