//! Parametric paths the ship travels along.
//!
//! A path maps a time parameter to a position. Direction of travel is
//! estimated by sampling slightly ahead and subtracting, so any curve that
//! can report a position can also drive the facing controller.
use glam::Vec2;

use crate::constants::TANGENT_EPSILON;

/// A curve parameterised by time.
pub trait ParametricPath {
    /// Position on the curve at time `t`.
    fn position(&self, t: f32) -> Vec2;

    /// Forward-difference estimate of the direction of travel at `t`.
    ///
    /// The result is not normalised; its length shrinks with `epsilon`.
    fn tangent(&self, t: f32, epsilon: f32) -> Vec2 {
        self.position(t + epsilon) - self.position(t)
    }
}

/// Circle centred on the origin, travelled anticlockwise at one radian per
/// unit of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePath {
    /// Distance from the origin.
    pub radius: f32,
    /// Constant offset added to `t` before evaluation.
    pub phase: f32,
}

impl CirclePath {
    /// Creates a circle of `radius` with no phase offset.
    #[must_use]
    pub const fn new(radius: f32) -> Self {
        Self { radius, phase: 0.0 }
    }

    /// Returns the same circle started `phase` radians further along.
    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }
}

impl ParametricPath for CirclePath {
    fn position(&self, t: f32) -> Vec2 {
        let (sin, cos) = (t + self.phase).sin_cos();
        Vec2::new(self.radius * cos, self.radius * sin)
    }
}

/// Position on a circle of `radius` at time `t`.
///
/// # Examples
/// ```
/// use facing::path::position;
/// let start = position(0.0, 1.0);
/// assert!((start.x - 1.0).abs() < f32::EPSILON);
/// assert!(start.y.abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn position(t: f32, radius: f32) -> Vec2 {
    CirclePath::new(radius).position(t)
}

/// Forward-difference tangent of a circle of `radius` at time `t`.
///
/// Pass [`TANGENT_EPSILON`] unless there is a reason to sample further
/// ahead.
#[must_use]
pub fn tangent(t: f32, radius: f32, epsilon: f32) -> Vec2 {
    CirclePath::new(radius).tangent(t, epsilon)
}

/// Tangent using the crate-wide [`TANGENT_EPSILON`].
#[must_use]
pub fn default_tangent(t: f32, radius: f32) -> Vec2 {
    tangent(t, radius, TANGENT_EPSILON)
}
