//! Model matrix composition for the ship sprite.
//!
//! The renderer consumes a single column-major `Mat4`. It is rebuilt from
//! scratch every frame as `T · R · S`, so a vertex is scaled first, then
//! rotated about the origin, then moved to the ship's position.
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Identity with the translation column set to `position`.
#[must_use]
pub fn translation(position: Vec2) -> Mat4 {
    Mat4::from_translation(position.extend(0.0))
}

/// Anticlockwise rotation by `angle` radians about the z axis.
///
/// The upper-left block is `[cos -sin; sin cos]`; everything else is
/// identity.
#[must_use]
pub fn rotation(angle: f32) -> Mat4 {
    let (sin, cos) = angle.sin_cos();
    Mat4::from_cols(
        Vec4::new(cos, sin, 0.0, 0.0),
        Vec4::new(-sin, cos, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}

/// Uniform scale in the xy plane. Depth is left untouched.
#[must_use]
pub fn scaling(scale: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(scale, scale, 1.0))
}

/// Builds the model matrix `T · R · S`.
///
/// # Examples
/// ```
/// use facing::transform::compose;
/// use glam::{Vec2, Vec4};
/// let model = compose(Vec2::new(0.5, -0.25), 1.2, 1.0);
/// let origin = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
/// assert!((origin.x - 0.5).abs() < 1e-6);
/// assert!((origin.y + 0.25).abs() < 1e-6);
/// ```
#[must_use]
pub fn compose(position: Vec2, angle: f32, scale: f32) -> Mat4 {
    translation(position) * rotation(angle) * scaling(scale)
}
