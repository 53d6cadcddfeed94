//! Default tuning values for the orbiting ship scene.
//!
//! These mirror the values the scene has always animated with and are the
//! defaults for [`SceneConfig`](crate::config::SceneConfig).

/// Forward step used when estimating the path tangent by finite difference.
///
/// A single fixed step is used for every facing policy.
pub const TANGENT_EPSILON: f32 = 0.01;
/// Radians subtracted from the facing angle each frame when spinning clockwise.
pub const ROTATION_SPEED: f32 = 0.01;
/// Fraction of the remaining shortest arc covered per frame when smoothing.
pub const BLEND_FACTOR: f32 = 0.02;
/// Time parameter added to the path clock every frame.
pub const TIME_STEP: f32 = 0.01;
/// Radius of the circular path in clip-space units.
pub const PATH_RADIUS: f32 = 0.6;
/// Uniform scale applied to the ship geometry.
pub const SHIP_SCALE: f32 = 0.5;
