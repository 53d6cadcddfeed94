//! Utility helpers for tests.
pub mod app;

use facing::shortest_delta;
use glam::{Vec2, Vec4};

/// Default tolerance for float comparisons in tests.
pub const TOLERANCE: f32 = 1e-5;

/// Assert that two angles describe the same direction.
///
/// Compares along the shortest arc, so `π` and `-π` are equal.
///
/// # Panics
/// Panics with both angles if they differ by more than `tolerance`.
pub fn assert_same_direction(actual: f32, expected: f32, tolerance: f32) {
    let gap = shortest_delta(actual, expected).abs();
    assert!(
        gap <= tolerance,
        "angle {actual} is {gap} rad away from {expected}"
    );
}

/// Assert that two vectors are within [`TOLERANCE`] of each other.
///
/// # Panics
/// Panics with both vectors if they differ.
pub fn assert_vec2_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).length() <= TOLERANCE,
        "expected {expected:?}, got {actual:?}"
    );
}

/// Assert that two homogeneous vectors are within [`TOLERANCE`] of each other.
///
/// # Panics
/// Panics with both vectors if they differ.
pub fn assert_vec4_close(actual: Vec4, expected: Vec4) {
    assert!(
        (actual - expected).length() <= TOLERANCE,
        "expected {expected:?}, got {actual:?}"
    );
}
